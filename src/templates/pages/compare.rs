// templates/pages/compare.rs

use crate::assistant::ChatMessage;
use crate::compare::ComparisonSnapshot;
use crate::domain::SelectionOption;
use crate::templates::{
    components::{assistant_panel, comparison_results, selection_panel},
    desktop_layout,
};
use maud::{html, Markup};

pub fn compare_page(
    snapshot: &ComparisonSnapshot,
    options: &[SelectionOption],
    transcript: &[ChatMessage],
) -> Markup {
    desktop_layout(
        "Compare Listings",
        html! {
            main class="container" {
                h1 { "Compare two listings" }
                (selection_panel(snapshot, options))
                (comparison_results(snapshot))
                (assistant_panel(transcript))
            }
        },
    )
}
