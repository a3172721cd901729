use std::str::FromStr;

use fridgekit_shared::CookingLevel;
use serde::{Deserialize, Deserializer, Serialize, de::Error as _};

/// A self-contained recipe record.
///
/// User-authored recipes carry their own steps; built-in ones leave
/// `steps` empty and resolve them through [`crate::builtin_steps`].
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Recipe {
    #[serde(rename = "recipe")]
    pub name: String,
    #[serde(deserialize_with = "level_any_case")]
    pub level: CookingLevel,
    #[serde(default)]
    pub ingredients: Vec<String>,
    #[serde(default)]
    pub steps: Vec<String>,
}

fn level_any_case<'de, D>(deserializer: D) -> Result<CookingLevel, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    CookingLevel::from_str(raw.trim()).map_err(D::Error::custom)
}

/// Comma separated, trimmed, empties dropped.
pub fn parse_ingredients(text: &str) -> Vec<String> {
    text.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_owned)
        .collect()
}

/// One step per line, trimmed, blank lines dropped.
pub fn parse_steps(text: &str) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_owned)
        .collect()
}
