use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumMessage, EnumString, VariantArray};

/// Ordinal cooking skill, ordered beginner < intermediate < advanced.
#[derive(
    EnumString,
    Display,
    EnumMessage,
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
    PartialOrd,
    Ord,
    Hash,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum CookingLevel {
    #[default]
    #[strum(message = "Beginner")]
    Beginner,
    #[strum(message = "Intermediate")]
    Intermediate,
    #[strum(message = "Advanced")]
    Advanced,
}

impl CookingLevel {
    /// Levels at or below `self`, in ascending order.
    pub fn at_or_below(self) -> Vec<CookingLevel> {
        Self::VARIANTS
            .iter()
            .copied()
            .filter(|level| *level <= self)
            .collect()
    }

    /// Capitalised label used as a group heading.
    pub fn title(self) -> &'static str {
        self.get_message().unwrap_or_default()
    }
}
