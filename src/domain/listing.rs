// src/domain/listing.rs

use serde::{Deserialize, Serialize};

/// One property from the catalog.
///
/// `predicted_price` is never set by the catalog itself; it only appears on a
/// displayed record after a remote prediction has been merged in.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Listing {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,
    pub title: String,
    pub price: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub predicted_price: Option<f64>,
    pub location: String,
    pub bedrooms: u32,
    pub bathrooms: u32,
    pub size_sqft: u32,
    #[serde(default)]
    pub amenities: Vec<String>,
    #[serde(default)]
    pub image_url: String,
}

/// A partial listing as returned by the prediction service.
/// Any subset of fields may be present; absent or `null` fields leave the
/// local value untouched.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ListingPatch {
    pub id: Option<u64>,
    pub title: Option<String>,
    pub price: Option<f64>,
    pub predicted_price: Option<f64>,
    pub location: Option<String>,
    pub bedrooms: Option<u32>,
    pub bathrooms: Option<u32>,
    pub size_sqft: Option<u32>,
    pub amenities: Option<Vec<String>>,
    pub image_url: Option<String>,
}

impl Listing {
    /// Shallow merge: copy of `self` with every field the patch defines
    /// overwritten. The catalog listing itself is left untouched.
    pub fn merged_with(&self, patch: &ListingPatch) -> Listing {
        let mut merged = self.clone();

        macro_rules! overwrite {
            ($field:ident) => {
                if let Some(value) = &patch.$field {
                    merged.$field = value.clone();
                }
            };
        }

        // Fields that are optional on the listing itself.
        if patch.id.is_some() {
            merged.id = patch.id;
        }
        if patch.predicted_price.is_some() {
            merged.predicted_price = patch.predicted_price;
        }

        overwrite!(title);
        overwrite!(price);
        overwrite!(location);
        overwrite!(bedrooms);
        overwrite!(bathrooms);
        overwrite!(size_sqft);
        overwrite!(amenities);
        overwrite!(image_url);

        merged
    }

    /// Difference between predicted and listed price, when a prediction exists.
    pub fn prediction_delta(&self) -> Option<f64> {
        self.predicted_price.map(|p| p - self.price)
    }
}

/// Whole-dollar formatting with thousands separators, e.g. `$1,250,000`.
pub fn format_price(value: f64) -> String {
    let rounded = value.round();
    let negative = rounded < 0.0;
    let digits = format!("{:.0}", rounded.abs());

    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 2);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }

    if negative {
        format!("-${out}")
    } else {
        format!("${out}")
    }
}

#[cfg(test)]
pub(crate) fn sample_listing(title: &str, location: &str, price: f64) -> Listing {
    Listing {
        id: None,
        title: title.to_string(),
        price,
        predicted_price: None,
        location: location.to_string(),
        bedrooms: 3,
        bathrooms: 2,
        size_sqft: 1500,
        amenities: vec!["Garage".to_string()],
        image_url: String::new(),
    }
}
