use fridgekit_shared::Store;
use serde_json::{Map, Value};

/// Every stored key with its value, parsed as JSON where possible.
///
/// Values that are not JSON (the sort preference is a bare string) are
/// exported verbatim as strings.
pub async fn snapshot<S: Store + ?Sized>(store: &S) -> fridgekit_shared::Result<Value> {
    let mut out = Map::new();

    for key in store.keys().await? {
        let Some(raw) = store.get(&key).await? else {
            continue;
        };

        let value = serde_json::from_str(&raw).unwrap_or(Value::String(raw));
        out.insert(key, value);
    }

    Ok(Value::Object(out))
}
