// src/catalog/sources.rs

use crate::domain::Listing;
use serde_json::{Map, Value};
use std::collections::HashMap;
use tracing::warn;

/// Merges several arrays of partial listing records into complete listings.
///
/// Records are keyed by a numeric `id`, given as a JSON number or a digit
/// string; a record without a usable one is dropped. Later sources overwrite
/// earlier fields key by key, and the output keeps the order in which each id
/// was first seen. A merged record that still can't form a `Listing` is
/// dropped with a warning. Any `predicted_price` a source carries is ignored.
pub fn merge_sources<I>(sources: I) -> Vec<Listing>
where
    I: IntoIterator<Item = Vec<Value>>,
{
    let mut order: Vec<u64> = Vec::new();
    let mut merged: HashMap<u64, Map<String, Value>> = HashMap::new();

    for records in sources {
        for record in records {
            let Value::Object(mut fields) = record else {
                continue;
            };
            let Some(id) = fields.get("id").and_then(listing_id) else {
                continue;
            };
            fields.insert("id".to_string(), Value::from(id));
            fields.remove("predicted_price");

            let entry = merged.entry(id).or_insert_with(|| {
                order.push(id);
                Map::new()
            });
            entry.extend(fields);
        }
    }

    order
        .into_iter()
        .filter_map(|id| {
            let fields = merged.remove(&id)?;
            match serde_json::from_value::<Listing>(Value::Object(fields)) {
                Ok(listing) => Some(listing),
                Err(e) => {
                    warn!(id, error = %e, "Dropping incomplete listing record");
                    None
                }
            }
        })
        .collect()
}

// Some exports quote their ids, so "12" and 12 name the same listing.
fn listing_id(id: &Value) -> Option<u64> {
    let parsed = match id {
        Value::Number(n) => n.as_u64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    };
    if parsed.is_none() {
        warn!(%id, "Skipping listing record with a non-numeric id");
    }
    parsed
}
