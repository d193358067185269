mod catalog_error;
mod sources;

pub use catalog_error::CatalogError;
pub use sources::merge_sources;

use crate::domain::Listing;
use std::path::Path;
use std::sync::Arc;
use tracing::{info, warn};

const EMBEDDED_LISTINGS: &str = include_str!("../../data/listings.json");

/// The immutable, ordered set of listings the app compares.
#[derive(Debug, Clone)]
pub struct Catalog {
    listings: Arc<[Arc<Listing>]>,
}

impl Catalog {
    /// Predictions only come from the prediction service, so any
    /// `predicted_price` on the incoming records is cleared.
    pub fn new(listings: Vec<Listing>) -> Self {
        let listings: Vec<Arc<Listing>> = listings
            .into_iter()
            .map(|mut listing| {
                listing.predicted_price = None;
                Arc::new(listing)
            })
            .collect();
        Self {
            listings: listings.into(),
        }
    }

    /// The dataset compiled into the binary.
    pub fn embedded() -> Result<Self, CatalogError> {
        Self::from_json(EMBEDDED_LISTINGS)
    }

    fn from_json(text: &str) -> Result<Self, CatalogError> {
        let listings: Vec<Listing> = serde_json::from_str(text)?;
        Ok(Self::new(listings))
    }

    /// Reads every source file, merges records by `id`, and builds the catalog.
    /// Sources that can't be read or parsed are logged and skipped.
    pub fn from_paths<P: AsRef<Path>>(paths: &[P]) -> Self {
        let mut sources = Vec::with_capacity(paths.len());

        for path in paths {
            let path = path.as_ref();
            match read_source(path) {
                Ok(records) => sources.push(records),
                Err(e) => warn!(path = %path.display(), error = %e, "Skipping listing source"),
            }
        }

        let catalog = Self::new(merge_sources(sources));
        info!(listings = catalog.len(), "Catalog loaded from sources");
        catalog
    }

    pub fn listings(&self) -> &[Arc<Listing>] {
        &self.listings
    }

    pub fn len(&self) -> usize {
        self.listings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.listings.is_empty()
    }
}

fn read_source(path: &Path) -> Result<Vec<serde_json::Value>, CatalogError> {
    let text = std::fs::read_to_string(path)?;
    let records = serde_json::from_str(&text)?;
    Ok(records)
}
