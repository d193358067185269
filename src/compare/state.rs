// src/compare/state.rs

use crate::domain::{Listing, SelectionOption};
use std::str::FromStr;

/// Which side of the comparison.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Slot {
    A,
    B,
}

impl FromStr for Slot {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "a" => Ok(Slot::A),
            "b" => Ok(Slot::B),
            other => Err(format!("unknown slot {other:?}")),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Phase {
    /// No valid selection pair.
    #[default]
    Idle,
    /// Two distinct selections, nothing requested or shown yet.
    Ready,
    /// At least one compare request is outstanding.
    Requesting,
    /// The latest applied request merged successfully.
    Displayed,
    /// The latest applied request failed; displayed slots were kept.
    Failed,
}

/// Everything the presentation layer needs about the current comparison.
#[derive(Debug, Clone, Default)]
pub struct ComparisonSnapshot {
    pub selection_a: Option<SelectionOption>,
    pub selection_b: Option<SelectionOption>,
    pub displayed_a: Option<Listing>,
    pub displayed_b: Option<Listing>,
    pub phase: Phase,
    /// Set when the latest applied prediction call failed. Cleared by the next
    /// successful call or by a reset.
    pub prediction_unavailable: bool,
    pub last_error: Option<String>,
    /// Highest request sequence number whose outcome has been applied.
    pub applied_seq: u64,
    pub in_flight: usize,
}

impl ComparisonSnapshot {
    pub fn selection(&self, slot: Slot) -> Option<&SelectionOption> {
        match slot {
            Slot::A => self.selection_a.as_ref(),
            Slot::B => self.selection_b.as_ref(),
        }
    }

    pub(crate) fn selection_mut(&mut self, slot: Slot) -> &mut Option<SelectionOption> {
        match slot {
            Slot::A => &mut self.selection_a,
            Slot::B => &mut self.selection_b,
        }
    }

    /// Both slots set and pointing at different options.
    pub fn can_compare(&self) -> bool {
        match (&self.selection_a, &self.selection_b) {
            (Some(a), Some(b)) => a.value != b.value,
            _ => false,
        }
    }

    pub fn has_comparison(&self) -> bool {
        self.displayed_a.is_some() && self.displayed_b.is_some()
    }

    /// Phase once nothing is in flight, derived from what has been applied.
    pub(crate) fn settled_phase(&self) -> Phase {
        if self.prediction_unavailable {
            Phase::Failed
        } else if self.has_comparison() {
            Phase::Displayed
        } else if self.can_compare() {
            Phase::Ready
        } else {
            Phase::Idle
        }
    }
}
