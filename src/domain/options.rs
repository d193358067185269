// src/domain/options.rs

use crate::domain::listing::Listing;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::Arc;

/// A selectable, uniquely keyed view over one catalog listing.
///
/// `label` is what the picker shows, `value` is the join key. On the wire the
/// listing travels under `property`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SelectionOption {
    pub label: String,
    pub value: String,
    #[serde(rename = "property")]
    pub listing: Arc<Listing>,
}

/// Builds one option per listing, in catalog order.
///
/// The label only carries the occurrence counter from the second listing at a
/// location onward ("New York, NY", "New York, NY 2"). The value always
/// carries it ("New York, NY__1", "New York, NY__2"), so values stay unique
/// even when labels would not.
pub fn build_options(catalog: &[Arc<Listing>]) -> Vec<SelectionOption> {
    let mut seen: HashMap<&str, usize> = HashMap::new();

    catalog
        .iter()
        .map(|listing| {
            let counter = seen.entry(listing.location.as_str()).or_insert(0);
            *counter += 1;
            let suffix = *counter;

            let label = if suffix == 1 {
                listing.location.clone()
            } else {
                format!("{} {}", listing.location, suffix)
            };

            SelectionOption {
                label,
                value: format!("{}__{}", listing.location, suffix),
                listing: Arc::clone(listing),
            }
        })
        .collect()
}

/// Finds the option with the given `value`.
pub fn find_option<'a>(options: &'a [SelectionOption], value: &str) -> Option<&'a SelectionOption> {
    options.iter().find(|o| o.value == value)
}
