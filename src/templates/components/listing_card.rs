use crate::compare::{ComparisonSnapshot, Phase};
use crate::domain::{format_price, Listing};
use crate::templates::components::card;
use maud::{html, Markup};

pub fn listing_card(heading: &str, listing: &Listing) -> Markup {
    card(
        heading,
        html! {
            @if !listing.image_url.is_empty() {
                img src=(listing.image_url) alt=(listing.title) class="listing-photo";
            }
            h3 { (listing.title) }
            p class="location" { (listing.location) }

            dl class="listing-facts" {
                dt { "Listed price" }
                dd { (format_price(listing.price)) }

                dt { "Predicted price" }
                @match listing.predicted_price {
                    Some(predicted) => dd {
                        (format_price(predicted))
                        @if let Some(delta) = listing.prediction_delta() {
                            " "
                            span class=(if delta >= 0.0 { "delta up" } else { "delta down" }) {
                                "(" @if delta >= 0.0 { "+" } (format_price(delta)) ")"
                            }
                        }
                    },
                    None => dd class="muted" { "Prediction unavailable" },
                }

                dt { "Bedrooms" }
                dd { (listing.bedrooms) }
                dt { "Bathrooms" }
                dd { (listing.bathrooms) }
                dt { "Size" }
                dd { (listing.size_sqft) " sq ft" }
            }

            @if !listing.amenities.is_empty() {
                ul class="amenities" {
                    @for amenity in &listing.amenities {
                        li { (amenity) }
                    }
                }
            }
        },
    )
}

pub fn comparison_results(snapshot: &ComparisonSnapshot) -> Markup {
    html! {
        section id="comparison-results" {
            @if snapshot.phase == Phase::Requesting {
                p class="muted" { "Fetching predicted prices..." }
            }

            @if snapshot.prediction_unavailable {
                p class="notice" role="status" {
                    "Predicted prices are unavailable right now. Showing the last comparison."
                }
            }

            @match (&snapshot.displayed_a, &snapshot.displayed_b) {
                (Some(a), Some(b)) => div class="comparison" {
                    (listing_card("Property A", a))
                    (listing_card("Property B", b))
                },
                _ => p class="muted" { "Pick two properties and press Compare." },
            }
        }
    }
}
