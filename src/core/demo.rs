use crate::domain::model::{RatingPolicy, Restaurant, RestaurantId};
use crate::domain::registry::Registry;
use crate::utils::error::{RegistryError, Result};

/// 示範資料的評分
///
/// Praça 的分數是 0-10 分制，但接受範圍是 (0, 5]，所以只有 5 會留下
pub const DEMO_RATINGS: &[(&str, &str, f64)] = &[
    ("Praça", "Gui", 10.0),
    ("Praça", "Laís", 8.0),
    ("Praça", "Emy", 5.0),
    ("Pizza Express", "Gui", 3.0),
    ("Pizza Express", "Laís", 4.0),
];

/// 建立 CLI 顯示用的餐廳清單
///
/// [`RatingPolicy::Strict`] 下被拒絕的評分只記錄警告後略過，報表照樣輸出
pub fn build_demo_registry(policy: RatingPolicy) -> Result<Registry> {
    let mut registry = Registry::new();

    let praca = registry.register(Restaurant::new("praça", "Gourmet"));
    let mexican = registry.register(Restaurant::new("Mexican Food", "Mexicana"));
    registry.register(Restaurant::new("Japa", "Japonesa"));
    let pizza = registry.register(Restaurant::new("pizza Express", "Italiana"));

    for &(name, reviewer, score) in DEMO_RATINGS {
        let id = if name == "Praça" { praca } else { pizza };
        submit(&mut registry, id, reviewer, score, policy)?;
    }

    registry.restaurant_mut(mexican)?.toggle_active();

    tracing::info!("Demo registry built with {} restaurants", registry.len());
    Ok(registry)
}

fn submit(
    registry: &mut Registry,
    id: RestaurantId,
    reviewer: &str,
    score: f64,
    policy: RatingPolicy,
) -> Result<()> {
    match registry.restaurant_mut(id)?.submit_rating(reviewer, score, policy) {
        Err(e @ RegistryError::InvalidRating { .. }) => {
            tracing::warn!("⚠️ Skipping rating: {}", e);
            Ok(())
        }
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_demo_registry_contents() {
        let registry = build_demo_registry(RatingPolicy::Lenient).unwrap();
        let shown: Vec<String> = registry.list_all().map(Restaurant::to_display_string).collect();

        assert_eq!(
            shown,
            vec![
                "Praça | GOURMET",
                "Mexican Food | MEXICANA",
                "Japa | JAPONESA",
                "Pizza Express | ITALIANA",
            ]
        );
    }

    #[test]
    fn test_policies_agree_on_kept_ratings() {
        let lenient = build_demo_registry(RatingPolicy::Lenient).unwrap();
        let strict = build_demo_registry(RatingPolicy::Strict).unwrap();

        let averages = |registry: &Registry| -> Vec<Option<f64>> {
            registry.list_all().map(Restaurant::average_rating).collect()
        };
        assert_eq!(averages(&lenient), vec![Some(5.0), None, None, Some(3.5)]);
        assert_eq!(averages(&lenient), averages(&strict));
    }
}
