use crate::domain::model::Restaurant;

/// 能依固定順序列出餐廳的來源
pub trait RestaurantSource {
    fn restaurants(&self) -> Box<dyn Iterator<Item = &Restaurant> + '_>;
}

impl RestaurantSource for [Restaurant] {
    fn restaurants(&self) -> Box<dyn Iterator<Item = &Restaurant> + '_> {
        Box::new(self.iter())
    }
}
