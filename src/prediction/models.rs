use crate::domain::{ListingPatch, SelectionOption};
use serde::{Deserialize, Serialize};

// request
//  ├── address1  { label, value, property }
//  └── address2  { label, value, property }
//
// response
//  └── result
//       ├── address1  partial listing | null | absent
//       └── address2  partial listing | null | absent

#[derive(Debug, Clone, Serialize)]
pub struct CompareRequest {
    pub address1: SelectionOption,
    pub address2: SelectionOption,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct CompareResponse {
    #[serde(default)]
    pub result: Option<CompareResult>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct CompareResult {
    pub address1: Option<ListingPatch>,
    pub address2: Option<ListingPatch>,
}

impl CompareResponse {
    pub fn address1(&self) -> Option<&ListingPatch> {
        self.result.as_ref().and_then(|r| r.address1.as_ref())
    }

    pub fn address2(&self) -> Option<&ListingPatch> {
        self.result.as_ref().and_then(|r| r.address2.as_ref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::build_options;
    use crate::domain::listing::sample_listing;
    use std::sync::Arc;

    #[test]
    fn request_carries_both_full_options() {
        let catalog = vec![
            Arc::new(sample_listing("Loft", "New York, NY", 1_000_000.0)),
            Arc::new(sample_listing("House", "Austin, TX", 600_000.0)),
        ];
        let options = build_options(&catalog);
        let request = CompareRequest {
            address1: options[0].clone(),
            address2: options[1].clone(),
        };

        let json = serde_json::to_value(&request).unwrap();

        assert_eq!(json["address1"]["value"], "New York, NY__1");
        assert_eq!(json["address2"]["label"], "Austin, TX");
        assert_eq!(json["address2"]["property"]["price"], 600_000.0);
        assert_eq!(json["address1"]["property"]["amenities"][0], "Garage");
        assert!(json["address1"]["property"].get("predicted_price").is_none());
    }

    #[test]
    fn response_sides_may_be_null_or_absent() {
        let resp: CompareResponse = serde_json::from_str(
            r#"{"result": {"address1": {"predicted_price": 612000.5, "features": {"lot_area": 0}}, "address2": null}}"#,
        )
        .unwrap();
        assert_eq!(
            resp.address1().and_then(|p| p.predicted_price),
            Some(612000.5)
        );
        assert!(resp.address2().is_none());

        let resp: CompareResponse = serde_json::from_str(r#"{"result": {}}"#).unwrap();
        assert!(resp.address1().is_none());
        assert!(resp.address2().is_none());

        let resp: CompareResponse = serde_json::from_str(r#"{}"#).unwrap();
        assert!(resp.address1().is_none());
    }
}
