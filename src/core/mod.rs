pub mod demo;
pub mod report;

pub use crate::domain::model::{Rating, RatingPolicy, Restaurant, RestaurantId};
pub use crate::domain::ports::RestaurantSource;
pub use crate::domain::registry::Registry;
pub use crate::utils::error::Result;
