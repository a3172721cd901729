use fridgekit_shared::CookingLevel;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use strum::{AsRefStr, Display, EnumString, VariantArray};

pub const DEFAULT_SOON_DAYS: u32 = 2;

#[derive(
    EnumString,
    Display,
    VariantArray,
    AsRefStr,
    Serialize,
    Deserialize,
    Default,
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Theme {
    Light,
    #[default]
    Dark,
}

/// Per-install preferences read by every other component.
///
/// Deserialization merges field by field over [`Settings::default`]: a
/// missing or malformed field falls back to its default without
/// discarding the others.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase", from = "Map<String, Value>")]
pub struct Settings {
    pub theme: Theme,
    pub user_name: String,
    pub auto_delete_expired: bool,
    pub cooking_level: CookingLevel,
    pub soon_days: u32,
    pub allergies: Vec<String>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            theme: Theme::Dark,
            user_name: String::new(),
            auto_delete_expired: false,
            cooking_level: CookingLevel::Beginner,
            soon_days: DEFAULT_SOON_DAYS,
            allergies: vec![],
        }
    }
}

impl Settings {
    /// Greeting shown above the inventory.
    pub fn inventory_header(&self) -> String {
        if self.user_name.is_empty() {
            "Refrigerator".to_owned()
        } else {
            format!("Hey, {}!", self.user_name)
        }
    }

    pub fn has_allergy(&self, allergy: &str) -> bool {
        let allergy = normalize_allergy(allergy);
        self.allergies.iter().any(|a| a == &allergy)
    }
}

impl From<Map<String, Value>> for Settings {
    fn from(map: Map<String, Value>) -> Self {
        let defaults = Settings::default();

        let theme = match map.get("theme").and_then(Value::as_str) {
            Some("light") => Theme::Light,
            _ => Theme::Dark,
        };

        let user_name = map
            .get("userName")
            .and_then(Value::as_str)
            .map(|name| name.trim().to_owned())
            .unwrap_or(defaults.user_name);

        let auto_delete_expired = map
            .get("autoDeleteExpired")
            .and_then(Value::as_bool)
            .unwrap_or(defaults.auto_delete_expired);

        let cooking_level = map
            .get("cookingLevel")
            .and_then(Value::as_str)
            .and_then(|level| level.trim().parse().ok())
            .unwrap_or(defaults.cooking_level);

        let soon_days = map
            .get("soonDays")
            .and_then(number_like)
            .map(|days| days.max(0.0) as u32)
            .unwrap_or(defaults.soon_days);

        let mut allergies: Vec<String> = vec![];
        if let Some(values) = map.get("allergies").and_then(Value::as_array) {
            for allergy in values.iter().filter_map(Value::as_str) {
                let allergy = normalize_allergy(allergy);
                if !allergy.is_empty() && !allergies.contains(&allergy) {
                    allergies.push(allergy);
                }
            }
        }

        Self {
            theme,
            user_name,
            auto_delete_expired,
            cooking_level,
            soon_days,
            allergies,
        }
    }
}

fn number_like(value: &Value) -> Option<f64> {
    let n = match value {
        Value::Number(n) => n.as_f64()?,
        Value::String(s) => s.trim().parse::<f64>().ok()?,
        _ => return None,
    };

    n.is_finite().then_some(n.trunc())
}

/// Lowercases, trims and collapses inner whitespace.
pub fn normalize_allergy(allergy: &str) -> String {
    allergy
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(raw: &str) -> Settings {
        serde_json::from_str(raw).unwrap()
    }

    #[test]
    fn test_missing_fields_take_defaults() {
        let settings = parse(r#"{"theme":"light","userName":"Ana"}"#);
        assert_eq!(settings.theme, Theme::Light);
        assert_eq!(settings.user_name, "Ana");
        assert_eq!(settings.soon_days, DEFAULT_SOON_DAYS);
        assert_eq!(settings.cooking_level, CookingLevel::Beginner);
        assert!(!settings.auto_delete_expired);
    }

    #[test]
    fn test_malformed_field_keeps_others() {
        let settings = parse(r#"{"cookingLevel":"Advanced","soonDays":"abc","theme":42}"#);
        assert_eq!(settings.cooking_level, CookingLevel::Advanced);
        assert_eq!(settings.soon_days, DEFAULT_SOON_DAYS);
        assert_eq!(settings.theme, Theme::Dark);
    }

    #[test]
    fn test_negative_soon_days_clamps_to_zero() {
        assert_eq!(parse(r#"{"soonDays":-4}"#).soon_days, 0);
        assert_eq!(parse(r#"{"soonDays":"5"}"#).soon_days, 5);
    }

    #[test]
    fn test_unknown_cooking_level_reads_beginner() {
        assert_eq!(
            parse(r#"{"cookingLevel":"chef"}"#).cooking_level,
            CookingLevel::Beginner
        );
    }

    #[test]
    fn test_allergies_normalized_and_unique() {
        let settings = parse(r#"{"allergies":["  Peanut   Butter ","peanut butter","", 3]}"#);
        assert_eq!(settings.allergies, vec!["peanut butter".to_owned()]);
    }

    #[test]
    fn test_non_object_is_rejected() {
        assert!(serde_json::from_str::<Settings>("[1,2]").is_err());
    }

    #[test]
    fn test_serialize_uses_camel_case() {
        let raw = serde_json::to_string(&Settings::default()).unwrap();
        assert!(raw.contains("\"autoDeleteExpired\":false"));
        assert!(raw.contains("\"cookingLevel\":\"beginner\""));
        assert!(raw.contains("\"soonDays\":2"));
    }

    #[test]
    fn test_inventory_header() {
        let mut settings = Settings::default();
        assert_eq!(settings.inventory_header(), "Refrigerator");
        settings.user_name = "Sam".to_owned();
        assert_eq!(settings.inventory_header(), "Hey, Sam!");
    }
}
