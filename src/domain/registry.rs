use crate::domain::model::{Restaurant, RestaurantId};
use crate::domain::ports::RestaurantSource;
use crate::utils::error::{RegistryError, Result};

/// 只能新增的餐廳清單，保持註冊順序
///
/// 生命週期跟著擁有者，CLI 在整個執行期間只用一個
#[derive(Debug, Default)]
pub struct Registry {
    restaurants: Vec<Restaurant>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    /// 不檢查重複，同樣的餐廳註冊兩次就有兩筆
    pub fn register(&mut self, restaurant: Restaurant) -> RestaurantId {
        let id = RestaurantId(self.restaurants.len());
        tracing::debug!("Registered {} as {}", restaurant, id);
        self.restaurants.push(restaurant);
        id
    }

    pub fn list_all(&self) -> impl Iterator<Item = &Restaurant> + '_ {
        self.restaurants.iter()
    }

    pub fn get(&self, id: RestaurantId) -> Option<&Restaurant> {
        self.restaurants.get(id.0)
    }

    pub fn get_mut(&mut self, id: RestaurantId) -> Option<&mut Restaurant> {
        self.restaurants.get_mut(id.0)
    }

    /// 同 [`Registry::get_mut`]，找不到時回傳錯誤
    pub fn restaurant_mut(&mut self, id: RestaurantId) -> Result<&mut Restaurant> {
        self.get_mut(id).ok_or(RegistryError::UnknownRestaurant(id))
    }

    pub fn len(&self) -> usize {
        self.restaurants.len()
    }

    pub fn is_empty(&self) -> bool {
        self.restaurants.is_empty()
    }
}

impl RestaurantSource for Registry {
    fn restaurants(&self) -> Box<dyn Iterator<Item = &Restaurant> + '_> {
        Box::new(self.list_all())
    }
}
