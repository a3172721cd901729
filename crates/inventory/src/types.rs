use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use strum::{AsRefStr, Display, EnumString, VariantArray};
use time::Date;

const NAME_LIMIT: usize = 17;
const NAME_KEEP: usize = 15;

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct InventoryItem {
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default = "default_qty", deserialize_with = "lenient_qty")]
    pub qty: u32,
    #[serde(
        default,
        with = "crate::expiry::iso_date",
        skip_serializing_if = "Option::is_none"
    )]
    pub expiry: Option<Date>,
    #[serde(default)]
    pub added_at: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<i64>,
}

#[derive(
    EnumString,
    Display,
    VariantArray,
    AsRefStr,
    Default,
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
)]
#[strum(serialize_all = "lowercase")]
pub enum SortBy {
    /// Soonest expiry first, undated items last.
    #[default]
    Expiry,
    /// Most recently added first.
    Added,
    Name,
}

fn default_qty() -> u32 {
    1
}

fn lenient_qty<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    let qty = match &value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    };

    Ok(sanitize_qty(qty))
}

/// Anything missing, non-finite or below one becomes 1.
pub fn sanitize_qty(qty: Option<f64>) -> u32 {
    match qty {
        Some(q) if q.is_finite() && q >= 1.0 => q.min(u32::MAX as f64) as u32,
        _ => 1,
    }
}

/// Names longer than 17 characters keep their first 15 plus an ellipsis.
pub fn truncate_name(name: &str) -> String {
    if name.chars().count() > NAME_LIMIT {
        let mut short: String = name.chars().take(NAME_KEEP).collect();
        short.push_str("...");
        short
    } else {
        name.to_owned()
    }
}
