pub mod toml_config;

pub use toml_config::{ListingConfig, RatingsConfig, RegistryConfig};

#[cfg(feature = "cli")]
use crate::core::report::ReportFormat;
#[cfg(feature = "cli")]
use crate::domain::model::RatingPolicy;
#[cfg(feature = "cli")]
use clap::Parser;
#[cfg(feature = "cli")]
use serde::{Deserialize, Serialize};

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "restaurant-registry")]
#[command(about = "Lists registered restaurants with their average rating")]
pub struct CliConfig {
    /// Path to TOML configuration file
    #[arg(short, long)]
    pub config: Option<String>,

    /// Reject out-of-range ratings instead of dropping them silently
    #[arg(long)]
    pub strict: bool,

    /// Output format, overrides the configuration file
    #[arg(long, value_enum)]
    pub format: Option<ReportFormat>,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,
}

#[cfg(feature = "cli")]
impl CliConfig {
    /// 命令列參數優先於設定檔
    pub fn apply_overrides(&self, config: &mut RegistryConfig) {
        if self.strict {
            config.ratings.policy = RatingPolicy::Strict;
            tracing::info!("🔧 Rating policy overridden to: strict");
        }
        if let Some(format) = self.format {
            config.listing.format = format;
            tracing::info!("🔧 Output format overridden to: {:?}", format);
        }
    }
}
