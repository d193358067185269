use crate::compare::{ComparisonSnapshot, Slot};
use crate::domain::SelectionOption;
use maud::{html, Markup};

fn slot_key(slot: Slot) -> &'static str {
    match slot {
        Slot::A => "a",
        Slot::B => "b",
    }
}

/// One dropdown over every selection option. Changing it swaps the whole
/// selection panel so the compare button reflects the new pair.
pub fn picker(slot: Slot, options: &[SelectionOption], selected: Option<&SelectionOption>) -> Markup {
    let key = slot_key(slot);
    let id = format!("select-{key}");
    let selected_value = selected.map(|o| o.value.as_str());

    html! {
        form class="picker" action="/select" method="get" {
            input type="hidden" name="slot" value=(key);
            label for=(id) { "Property " (key.to_uppercase()) }
            select
                name="value"
                id=(id)
                hx-get=(format!("/select?slot={key}"))
                hx-target="#selection-panel"
                hx-swap="outerHTML"
                hx-trigger="change"
            {
                option value="" selected[selected_value.is_none()] { "Select a property..." }
                @for opt in options {
                    option value=(opt.value) selected[selected_value == Some(opt.value.as_str())] {
                        (opt.label) " · " (opt.listing.title)
                    }
                }
            }
            noscript { button type="submit" { "Choose" } }
        }
    }
}

pub fn selection_panel(snapshot: &ComparisonSnapshot, options: &[SelectionOption]) -> Markup {
    let same_pick = matches!(
        (&snapshot.selection_a, &snapshot.selection_b),
        (Some(a), Some(b)) if a.value == b.value
    );

    html! {
        section class="card" id="selection-panel" {
            div class="pickers" {
                (picker(Slot::A, options, snapshot.selection(Slot::A)))
                (picker(Slot::B, options, snapshot.selection(Slot::B)))
            }

            @if same_pick {
                p class="hint" { "Pick two different properties to compare." }
            }

            form action="/compare" method="get" {
                button
                    type="submit"
                    class="btn primary"
                    hx-get="/compare"
                    hx-target="#comparison-results"
                    hx-swap="outerHTML"
                    disabled[!snapshot.can_compare()]
                {
                    "Compare"
                }
            }
        }
    }
}
