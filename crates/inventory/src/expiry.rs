use strum::{AsRefStr, Display};
use time::{Date, format_description::BorrowedFormatItem, macros::format_description};

const ISO_DATE: &[BorrowedFormatItem<'_>] = format_description!("[year]-[month]-[day]");

#[derive(Display, AsRefStr, Clone, Copy, Debug, PartialEq, Eq)]
#[strum(serialize_all = "lowercase")]
pub enum ExpiryStatus {
    Fresh,
    Soon,
    Expired,
}

/// `YYYY-MM-DD`; anything else is treated as no expiry.
pub fn parse_date(raw: &str) -> Option<Date> {
    Date::parse(raw.trim(), ISO_DATE).ok()
}

pub fn format_date(date: Date) -> String {
    date.format(ISO_DATE).unwrap_or_default()
}

/// Whole days from `today` to `expiry`; negative once expired.
pub fn days_until(expiry: Option<Date>, today: Date) -> Option<i64> {
    expiry.map(|expiry| (expiry - today).whole_days())
}

pub fn classify(days: Option<i64>, soon_days: u32) -> ExpiryStatus {
    match days {
        None => ExpiryStatus::Fresh,
        Some(d) if d < 0 => ExpiryStatus::Expired,
        Some(d) if d <= i64::from(soon_days) => ExpiryStatus::Soon,
        Some(_) => ExpiryStatus::Fresh,
    }
}

pub fn badge(days: Option<i64>) -> String {
    match days {
        None => "No expiry".to_owned(),
        Some(d) if d < 0 => format!("Expired {}d", d.abs()),
        Some(0) => "Expires today".to_owned(),
        Some(1) => "Expires in 1 day".to_owned(),
        Some(d) => format!("Expires in {d} days"),
    }
}

pub(crate) mod iso_date {
    use serde::{Deserialize, Deserializer, Serializer};
    use serde_json::Value;
    use time::Date;

    pub fn serialize<S>(date: &Option<Date>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match date {
            Some(date) => serializer.serialize_str(&super::format_date(*date)),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<Date>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Option::<Value>::deserialize(deserializer)?;

        Ok(value.as_ref().and_then(Value::as_str).and_then(super::parse_date))
    }
}
