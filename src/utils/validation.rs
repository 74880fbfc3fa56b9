use crate::utils::error::{RegistryError, Result};

/// 分數必須大於此值
pub const SCORE_LOWER_BOUND: f64 = 0.0;
/// 分數可以等於此值
pub const SCORE_UPPER_BOUND: f64 = 5.0;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

/// `0 < score <= 5`。NaN 一律不合法
pub fn is_valid_score(score: f64) -> bool {
    score > SCORE_LOWER_BOUND && score <= SCORE_UPPER_BOUND
}

pub fn validate_score(reviewer: &str, score: f64) -> Result<()> {
    if is_valid_score(score) {
        Ok(())
    } else {
        Err(RegistryError::InvalidRating {
            reviewer: reviewer.to_string(),
            score,
        })
    }
}

pub fn validate_positive_number(field_name: &str, value: usize, min_value: usize) -> Result<()> {
    if value < min_value {
        return Err(RegistryError::InvalidConfigValue {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be at least {}", min_value),
        });
    }
    Ok(())
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(RegistryError::InvalidConfigValue {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}
