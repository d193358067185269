use maud::{html, Markup};

pub mod assistant;
pub mod listing_card;
pub mod picker;

pub use assistant::assistant_panel;
pub use listing_card::comparison_results;
pub use picker::selection_panel;

pub fn card(title: &str, body: Markup) -> Markup {
    html! {
        div class="card" {
            h2 { (title) }
            div class="card-body" {
                (body)
            }
        }
    }
}
