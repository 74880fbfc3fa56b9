use crate::core::report::ReportFormat;
use crate::domain::model::RatingPolicy;
use crate::utils::error::Result;
use crate::utils::validation::{validate_non_empty_string, validate_positive_number, Validate};
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const DEFAULT_COLUMN_WIDTH: usize = 25;
pub const DEFAULT_NO_DATA_MARKER: &str = "-";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RegistryConfig {
    pub listing: ListingConfig,
    pub ratings: RatingsConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ListingConfig {
    pub column_width: usize,
    pub no_data_marker: String,
    pub format: ReportFormat,
}

impl Default for ListingConfig {
    fn default() -> Self {
        Self {
            column_width: DEFAULT_COLUMN_WIDTH,
            no_data_marker: DEFAULT_NO_DATA_MARKER.to_string(),
            format: ReportFormat::Table,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RatingsConfig {
    pub policy: RatingPolicy,
}

impl RegistryConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置，缺少的欄位使用預設值
    pub fn from_toml_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// 有路徑就讀檔，沒有就用預設值
    pub fn load(path: Option<&str>) -> Result<Self> {
        match path {
            Some(path) => {
                tracing::debug!("Loading configuration from {}", path);
                Self::from_file(path)
            }
            None => Ok(Self::default()),
        }
    }
}

impl Validate for RegistryConfig {
    fn validate(&self) -> Result<()> {
        validate_positive_number("listing.column_width", self.listing.column_width, 1)?;
        validate_non_empty_string("listing.no_data_marker", &self.listing.no_data_marker)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::error::RegistryError;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_full_config() {
        let toml_content = r#"
[listing]
column_width = 30
no_data_marker = "n/a"
format = "json"

[ratings]
policy = "strict"
"#;

        let config = RegistryConfig::from_toml_str(toml_content).unwrap();

        assert_eq!(config.listing.column_width, 30);
        assert_eq!(config.listing.no_data_marker, "n/a");
        assert_eq!(config.listing.format, ReportFormat::Json);
        assert_eq!(config.ratings.policy, RatingPolicy::Strict);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_missing_keys_use_defaults() {
        let config = RegistryConfig::from_toml_str("[listing]\ncolumn_width = 10\n").unwrap();

        assert_eq!(config.listing.column_width, 10);
        assert_eq!(config.listing.no_data_marker, DEFAULT_NO_DATA_MARKER);
        assert_eq!(config.listing.format, ReportFormat::Table);
        assert_eq!(config.ratings.policy, RatingPolicy::Lenient);

        assert_eq!(RegistryConfig::from_toml_str("").unwrap(), RegistryConfig::default());
    }

    #[test]
    fn test_invalid_toml() {
        let result = RegistryConfig::from_toml_str("[ratings]\npolicy = \"sometimes\"\n");
        assert!(matches!(result, Err(RegistryError::TomlError(_))));
    }

    #[test]
    fn test_validation_rejects_bad_values() {
        let mut config = RegistryConfig::default();
        config.listing.column_width = 0;
        assert!(config.validate().is_err());

        let mut config = RegistryConfig::default();
        config.listing.no_data_marker = " ".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_load_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "[ratings]\npolicy = \"strict\"").unwrap();

        let config = RegistryConfig::load(file.path().to_str()).unwrap();
        assert_eq!(config.ratings.policy, RatingPolicy::Strict);

        assert_eq!(RegistryConfig::load(None).unwrap(), RegistryConfig::default());
    }

    #[test]
    fn test_load_missing_file() {
        let result = RegistryConfig::load(Some("/definitely/not/here.toml"));
        assert!(matches!(result, Err(RegistryError::IoError(_))));
    }
}
