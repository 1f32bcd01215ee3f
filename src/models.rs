//! Frontend Models
//!
//! Data structures matching the `/foods` REST resource.

use serde::{Deserialize, Serialize};

/// Server-assigned food identifier
pub type FoodId = u32;

/// Food data structure (matches backend)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Food {
    pub id: FoodId,
    pub name: String,
    pub description: String,
    /// Decimal price kept as text, exactly as the backend sends it
    pub price: String,
    pub available: bool,
    pub image: String,
}

/// Create payload: a food without an id
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NewFood {
    pub name: String,
    pub description: String,
    pub price: String,
    pub available: bool,
    pub image: String,
}

/// Partial edit of a food. `None` keeps the current value.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FoodPatch {
    pub name: Option<String>,
    pub description: Option<String>,
    pub price: Option<String>,
    pub available: Option<bool>,
    pub image: Option<String>,
}

impl FoodPatch {
    /// Overlay this patch on `base`. The id always comes from `base`.
    pub fn apply_to(&self, base: &Food) -> Food {
        Food {
            id: base.id,
            name: self.name.clone().unwrap_or_else(|| base.name.clone()),
            description: self.description.clone().unwrap_or_else(|| base.description.clone()),
            price: self.price.clone().unwrap_or_else(|| base.price.clone()),
            available: self.available.unwrap_or(base.available),
            image: self.image.clone().unwrap_or_else(|| base.image.clone()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Food {
        Food {
            id: 1,
            name: "A".to_string(),
            description: "house special".to_string(),
            price: "10".to_string(),
            available: false,
            image: "https://img/a.png".to_string(),
        }
    }

    #[test]
    fn test_patch_overrides_only_given_fields() {
        let patch = FoodPatch {
            price: Some("12".to_string()),
            ..Default::default()
        };

        let merged = patch.apply_to(&sample());
        assert_eq!(merged.id, 1);
        assert_eq!(merged.name, "A");
        assert_eq!(merged.price, "12");
        assert_eq!(merged.description, "house special");
        assert!(!merged.available);
    }

    #[test]
    fn test_empty_patch_is_identity() {
        let base = sample();
        assert_eq!(FoodPatch::default().apply_to(&base), base);
    }

    #[test]
    fn test_patch_can_flip_availability() {
        let patch = FoodPatch {
            available: Some(true),
            ..Default::default()
        };
        assert!(patch.apply_to(&sample()).available);
    }

    #[test]
    fn test_food_deserializes_backend_json() {
        let json = r#"{
            "id": 7,
            "name": "Ao molho",
            "description": "Macarrão ao molho branco",
            "price": "19.90",
            "available": true,
            "image": "https://example.com/ao_molho.png"
        }"#;
        let food: Food = serde_json::from_str(json).unwrap();
        assert_eq!(food.id, 7);
        assert_eq!(food.price, "19.90");
        assert!(food.available);
    }

    #[test]
    fn test_new_food_serializes_without_id() {
        let value = serde_json::to_value(NewFood {
            name: "B".to_string(),
            ..Default::default()
        })
        .unwrap();
        assert!(value.get("id").is_none());
        assert_eq!(value["name"], "B");
    }
}
