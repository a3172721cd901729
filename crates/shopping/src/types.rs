use serde::{Deserialize, Deserializer, Serialize};

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ShoppingList {
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub created_at: i64,
    #[serde(default, deserialize_with = "items_or_empty")]
    pub items: Vec<ShoppingItem>,
}

impl ShoppingList {
    pub fn item(&self, id: &str) -> Option<&ShoppingItem> {
        self.items.iter().find(|item| item.id == id)
    }

    pub(crate) fn item_mut(&mut self, id: &str) -> Option<&mut ShoppingItem> {
        self.items.iter_mut().find(|item| item.id == id)
    }
}

/// An entry of a shopping list; "crossed" means acquired but kept.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase", from = "StoredItem")]
pub struct ShoppingItem {
    pub id: String,
    pub name: String,
    pub crossed: bool,
    pub added_at: i64,
}

/// On-disk item shape, including records that marked crossing with
/// trailing asterisks in the name instead of a `crossed` flag.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct StoredItem {
    id: String,
    #[serde(default)]
    name: String,
    #[serde(default)]
    crossed: Option<bool>,
    #[serde(default)]
    added_at: i64,
}

impl From<StoredItem> for ShoppingItem {
    fn from(stored: StoredItem) -> Self {
        let stripped = stored.name.trim_end_matches('*');
        let had_marker = stripped.len() != stored.name.len();

        Self {
            id: stored.id,
            name: stripped.trim_end().to_owned(),
            crossed: stored.crossed.unwrap_or(had_marker),
            added_at: stored.added_at,
        }
    }
}

fn items_or_empty<'de, D>(deserializer: D) -> Result<Vec<ShoppingItem>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Vec<ShoppingItem>>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(raw: &str) -> ShoppingItem {
        serde_json::from_str(raw).unwrap()
    }

    #[test]
    fn test_legacy_asterisks_infer_crossed() {
        let it = item(r#"{"id":"1","name":"Eggs**","addedAt":3}"#);
        assert_eq!(it.name, "Eggs");
        assert!(it.crossed);
    }

    #[test]
    fn test_explicit_flag_wins_over_asterisks() {
        let it = item(r#"{"id":"1","name":"Eggs*","crossed":false}"#);
        assert_eq!(it.name, "Eggs");
        assert!(!it.crossed);
    }

    #[test]
    fn test_plain_item_not_crossed() {
        let it = item(r#"{"id":"1","name":"Bread"}"#);
        assert_eq!(it.name, "Bread");
        assert!(!it.crossed);
    }

    #[test]
    fn test_inner_asterisk_kept() {
        let it = item(r#"{"id":"1","name":"5* cheese"}"#);
        assert_eq!(it.name, "5* cheese");
        assert!(!it.crossed);
    }

    #[test]
    fn test_list_missing_items() {
        let list: ShoppingList =
            serde_json::from_str(r#"{"id":"l","name":"Weekly","createdAt":1}"#).unwrap();
        assert!(list.items.is_empty());

        let list: ShoppingList =
            serde_json::from_str(r#"{"id":"l","name":"Weekly","items":null}"#).unwrap();
        assert!(list.items.is_empty());
    }

    #[test]
    fn test_serialize_writes_flag() {
        let raw = serde_json::to_string(&item(r#"{"id":"1","name":"Eggs*"}"#)).unwrap();
        assert_eq!(raw, r#"{"id":"1","name":"Eggs","crossed":true,"addedAt":0}"#);
    }
}
