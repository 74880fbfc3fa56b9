use crate::utils::error::Result;
use crate::utils::text::title_case;
use crate::utils::validation::{is_valid_score, validate_score};
use serde::{Deserialize, Serialize};
use std::fmt;

pub const ACTIVE_MARKER: &str = "☑";
pub const INACTIVE_MARKER: &str = "☐";

/// `Registry::register` 回傳的代號
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RestaurantId(pub(crate) usize);

impl RestaurantId {
    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for RestaurantId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// 超出範圍的評分要怎麼處理
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RatingPolicy {
    /// 直接丟棄，不通知呼叫端
    #[default]
    Lenient,
    /// 回傳 [`crate::utils::error::RegistryError::InvalidRating`]
    Strict,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Rating {
    reviewer_name: String,
    score: f64,
}

impl Rating {
    pub fn reviewer_name(&self) -> &str {
        &self.reviewer_name
    }

    pub fn score(&self) -> f64 {
        self.score
    }
}

#[derive(Debug, Clone)]
pub struct Restaurant {
    display_name: String,
    category: String,
    is_active: bool,
    ratings: Vec<Rating>,
}

impl Restaurant {
    /// 建立餐廳：名稱轉成 title case，分類轉成大寫，預設未啟用
    ///
    /// 不會自動註冊，需要另外呼叫 `Registry::register`
    pub fn new(name: &str, category: &str) -> Self {
        Self {
            display_name: title_case(name),
            category: category.to_uppercase(),
            is_active: false,
            ratings: Vec::new(),
        }
    }

    pub fn display_name(&self) -> &str {
        &self.display_name
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn is_active(&self) -> bool {
        self.is_active
    }

    pub fn ratings(&self) -> &[Rating] {
        &self.ratings
    }

    pub fn toggle_active(&mut self) {
        self.is_active = !self.is_active;
    }

    /// `0 < score <= 5` 才記錄，否則忽略
    ///
    /// 回傳是否有記錄。這裡不會回報錯誤，需要錯誤請用 [`Restaurant::try_receive_rating`]
    pub fn receive_rating(&mut self, reviewer_name: &str, score: f64) -> bool {
        if !is_valid_score(score) {
            tracing::debug!(
                "Ignoring rating {} from '{}' for '{}'",
                score,
                reviewer_name,
                self.display_name
            );
            return false;
        }

        self.push_rating(reviewer_name, score);
        true
    }

    pub fn try_receive_rating(&mut self, reviewer_name: &str, score: f64) -> Result<()> {
        validate_score(reviewer_name, score)?;
        self.push_rating(reviewer_name, score);
        Ok(())
    }

    pub fn submit_rating(
        &mut self,
        reviewer_name: &str,
        score: f64,
        policy: RatingPolicy,
    ) -> Result<()> {
        match policy {
            RatingPolicy::Lenient => {
                self.receive_rating(reviewer_name, score);
                Ok(())
            }
            RatingPolicy::Strict => self.try_receive_rating(reviewer_name, score),
        }
    }

    fn push_rating(&mut self, reviewer_name: &str, score: f64) {
        tracing::debug!(
            "Rating {} from '{}' recorded for '{}'",
            score,
            reviewer_name,
            self.display_name
        );
        self.ratings.push(Rating {
            reviewer_name: reviewer_name.to_string(),
            score,
        });
    }

    /// 平均分數取到小數一位，沒有評分時回傳 `None`
    ///
    /// 用 `f64::round` 處理 `mean * 10`，剛好 .5 時遠離零進位（1.25 -> 1.3）
    pub fn average_rating(&self) -> Option<f64> {
        if self.ratings.is_empty() {
            return None;
        }

        let total: f64 = self.ratings.iter().map(Rating::score).sum();
        let mean = total / self.ratings.len() as f64;
        Some((mean * 10.0).round() / 10.0)
    }

    pub fn activation_marker(&self) -> &'static str {
        if self.is_active {
            ACTIVE_MARKER
        } else {
            INACTIVE_MARKER
        }
    }

    pub fn to_display_string(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Restaurant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} | {}", self.display_name, self.category)
    }
}
