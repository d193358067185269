use crate::compare::ComparisonOrchestrator;
use crate::domain::{build_options, Listing, ListingPatch, SelectionOption};
use crate::prediction::{CompareResponse, CompareResult, PricePredictor};
use std::sync::Arc;

/// Four listings; index 0 and 2 share "New York, NY".
pub fn test_catalog() -> Vec<Arc<Listing>> {
    let listing = |title: &str, location: &str, price: f64, bedrooms: u32| Listing {
        id: None,
        title: title.to_string(),
        price,
        predicted_price: None,
        location: location.to_string(),
        bedrooms,
        bathrooms: 2,
        size_sqft: 1500,
        amenities: vec!["Garage".to_string(), "Pool".to_string()],
        image_url: String::new(),
    };

    vec![
        Arc::new(listing("Modern Loft", "New York, NY", 1_250_000.0, 2)),
        Arc::new(listing("Craftsman House", "Austin, TX", 865_000.0, 4)),
        Arc::new(listing("Classic Six", "New York, NY", 2_100_000.0, 3)),
        Arc::new(listing("Beachfront Condo", "Miami, FL", 1_475_000.0, 2)),
    ]
}

pub fn test_options() -> Vec<SelectionOption> {
    build_options(&test_catalog())
}

pub fn orchestrator_with(predictor: Arc<dyn PricePredictor>) -> ComparisonOrchestrator {
    ComparisonOrchestrator::new(test_options(), predictor)
}

/// A response that only carries predicted prices.
pub fn predicted(address1: Option<f64>, address2: Option<f64>) -> CompareResponse {
    let patch = |price: f64| ListingPatch {
        predicted_price: Some(price),
        ..Default::default()
    };

    CompareResponse {
        result: Some(CompareResult {
            address1: address1.map(patch),
            address2: address2.map(patch),
        }),
    }
}

/// Percent-encode a query value the way a browser form would.
pub fn encode(value: &str) -> String {
    url::form_urlencoded::byte_serialize(value.as_bytes()).collect()
}
