pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use config::RegistryConfig;
pub use crate::core::report::{list_restaurants, write_listing, ReportFormat};
pub use domain::model::{Rating, RatingPolicy, Restaurant, RestaurantId};
pub use domain::registry::Registry;
pub use utils::error::{RegistryError, Result};
