// src/assistant/context.rs

use crate::compare::ComparisonSnapshot;
use crate::domain::{format_price, Listing};
use std::fmt::Write;

/// Sent instead of a description when the comparison isn't complete.
pub const NO_PROPERTIES_CONTEXT: &str = "No properties selected yet.";

const MAX_TITLE_CHARS: usize = 120;
const MAX_AMENITIES: usize = 12;
const MAX_CONTEXT_CHARS: usize = 2_000;

/// Describes the two currently displayed listings for the completion provider.
///
/// Only the displayed pair is ever included. With either side empty the
/// result is exactly [`NO_PROPERTIES_CONTEXT`].
pub fn build_property_context(snapshot: &ComparisonSnapshot) -> String {
    let (Some(a), Some(b)) = (&snapshot.displayed_a, &snapshot.displayed_b) else {
        return NO_PROPERTIES_CONTEXT.to_string();
    };

    let mut out = String::new();
    describe(&mut out, "Property A", a);
    out.push('\n');
    describe(&mut out, "Property B", b);

    truncate_chars(&out, MAX_CONTEXT_CHARS)
}

fn describe(out: &mut String, heading: &str, listing: &Listing) {
    // Writing into a String can't fail.
    let _ = writeln!(out, "{heading}: {}", truncate_chars(&listing.title, MAX_TITLE_CHARS));
    let _ = writeln!(out, "- Location: {}", listing.location);
    let _ = writeln!(out, "- Listed price: {}", format_price(listing.price));
    if let Some(predicted) = listing.predicted_price {
        let _ = writeln!(out, "- Predicted price: {}", format_price(predicted));
    }
    let _ = writeln!(out, "- Bedrooms: {}", listing.bedrooms);
    let _ = writeln!(out, "- Bathrooms: {}", listing.bathrooms);
    let _ = writeln!(out, "- Size: {} sq ft", listing.size_sqft);

    let amenities = if listing.amenities.is_empty() {
        "none listed".to_string()
    } else {
        let shown: Vec<&str> = listing
            .amenities
            .iter()
            .take(MAX_AMENITIES)
            .map(String::as_str)
            .collect();
        let mut joined = shown.join(", ");
        if listing.amenities.len() > MAX_AMENITIES {
            let _ = write!(joined, " (+{} more)", listing.amenities.len() - MAX_AMENITIES);
        }
        joined
    };
    let _ = writeln!(out, "- Amenities: {amenities}");
}

fn truncate_chars(s: &str, max: usize) -> String {
    match s.char_indices().nth(max) {
        Some((idx, _)) => format!("{}…", &s[..idx]),
        None => s.to_string(),
    }
}
