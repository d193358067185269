// src/compare/orchestrator.rs

use crate::compare::{ComparisonSnapshot, Phase, Slot};
use crate::domain::{find_option, Listing, ListingPatch, SelectionOption};
use crate::prediction::{CompareRequest, CompareResponse, PredictionError, PricePredictor};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use tokio::sync::watch;
use tracing::{debug, info, warn};

/// Receiver that yields a new snapshot on every comparison state change.
pub type ComparisonWatcher = watch::Receiver<ComparisonSnapshot>;

/// Holds the two selections and the two displayed records, and drives the
/// remote prediction call plus the merge.
///
/// Compare calls may overlap. Each one draws a sequence number when issued;
/// when it resolves, its outcome is applied only if no later-issued call has
/// already been applied. Without that rule whichever response lands last
/// would win, regardless of which selection pair it was for.
pub struct ComparisonOrchestrator {
    options: Arc<[SelectionOption]>,
    predictor: Arc<dyn PricePredictor>,
    state: watch::Sender<ComparisonSnapshot>,
    next_seq: AtomicU64,
}

impl ComparisonOrchestrator {
    pub fn new(options: Vec<SelectionOption>, predictor: Arc<dyn PricePredictor>) -> Self {
        let (state, _rx) = watch::channel(ComparisonSnapshot::default());
        Self {
            options: options.into(),
            predictor,
            state,
            next_seq: AtomicU64::new(0),
        }
    }

    pub fn options(&self) -> &[SelectionOption] {
        &self.options
    }

    pub fn snapshot(&self) -> ComparisonSnapshot {
        self.state.borrow().clone()
    }

    pub fn subscribe(&self) -> ComparisonWatcher {
        self.state.subscribe()
    }

    pub fn can_compare(&self) -> bool {
        self.state.borrow().can_compare()
    }

    /// Point `slot` at the option with `value`, or clear it with `None`.
    /// An unknown value clears the slot as well.
    ///
    /// Displayed records are left alone; only the next compare action may
    /// reset them.
    pub fn select(&self, slot: Slot, value: Option<&str>) -> Option<SelectionOption> {
        let option = value.and_then(|v| find_option(&self.options, v)).cloned();

        if let (Some(v), None) = (value, &option) {
            debug!(?slot, value = %v, "Unknown selection value, clearing slot");
        }

        self.state.send_modify(|s| {
            *s.selection_mut(slot) = option.clone();
            if matches!(s.phase, Phase::Idle | Phase::Ready) {
                s.phase = if s.can_compare() {
                    Phase::Ready
                } else {
                    Phase::Idle
                };
            }
        });

        option
    }

    /// Run the compare action for the current selection pair.
    ///
    /// Without two distinct selections this clears both displayed slots and
    /// issues nothing. Otherwise it requests predictions for both sides and
    /// merges them into the local listings. A failed call leaves the displayed
    /// slots as they were.
    pub async fn compare(&self) {
        let seq = self.next_seq.fetch_add(1, Ordering::SeqCst) + 1;

        let Some((a, b)) = self.current_pair() else {
            debug!(seq, "Compare needs two distinct selections, resetting");
            self.state.send_modify(|s| {
                s.displayed_a = None;
                s.displayed_b = None;
                s.prediction_unavailable = false;
                s.last_error = None;
                // Anything issued before the reset is now stale.
                s.applied_seq = s.applied_seq.max(seq);
                s.phase = Phase::Idle;
            });
            return;
        };

        info!(seq, address1 = %a.value, address2 = %b.value, "Requesting price predictions");
        let guard = InFlight::enter(&self.state, seq);

        let request = CompareRequest {
            address1: a,
            address2: b,
        };
        let outcome = self.predictor.compare(&request).await;

        guard.finish(|s| apply(s, seq, &request, outcome));
    }

    fn current_pair(&self) -> Option<(SelectionOption, SelectionOption)> {
        let s = self.state.borrow();
        let pair = match (&s.selection_a, &s.selection_b) {
            (Some(a), Some(b)) if a.value != b.value => Some((a.clone(), b.clone())),
            _ => None,
        };
        pair
    }
}

/// Applies one resolved call to the snapshot, unless a later-issued call has
/// already been applied.
fn apply(
    s: &mut ComparisonSnapshot,
    seq: u64,
    request: &CompareRequest,
    outcome: Result<CompareResponse, PredictionError>,
) {
    if seq < s.applied_seq {
        debug!(seq, applied = s.applied_seq, "Discarding stale prediction result");
        return;
    }

    s.applied_seq = seq;
    match outcome {
        Ok(resp) => {
            s.displayed_a = Some(merge_side(&request.address1.listing, resp.address1()));
            s.displayed_b = Some(merge_side(&request.address2.listing, resp.address2()));
            s.prediction_unavailable = false;
            s.last_error = None;
        }
        Err(e) => {
            warn!(seq, error = %e, "Price prediction failed, keeping current comparison");
            s.prediction_unavailable = true;
            s.last_error = Some(e.to_string());
        }
    }
}

/// One outstanding prediction call, counted in `in_flight`.
///
/// The count is released exactly once: by `finish`, or on drop when the
/// compare future is cancelled before the call resolves.
struct InFlight<'a> {
    state: &'a watch::Sender<ComparisonSnapshot>,
    seq: u64,
    finished: bool,
}

impl<'a> InFlight<'a> {
    fn enter(state: &'a watch::Sender<ComparisonSnapshot>, seq: u64) -> Self {
        state.send_modify(|s| {
            s.in_flight += 1;
            s.phase = Phase::Requesting;
        });
        Self {
            state,
            seq,
            finished: false,
        }
    }

    fn finish(mut self, update: impl FnOnce(&mut ComparisonSnapshot)) {
        self.finished = true;
        self.state.send_modify(|s| {
            s.in_flight = s.in_flight.saturating_sub(1);
            update(s);
            settle(s);
        });
    }
}

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        if self.finished {
            return;
        }
        debug!(seq = self.seq, "Compare call cancelled before it resolved");
        self.state.send_modify(|s| {
            s.in_flight = s.in_flight.saturating_sub(1);
            settle(s);
        });
    }
}

fn settle(s: &mut ComparisonSnapshot) {
    s.phase = if s.in_flight > 0 {
        Phase::Requesting
    } else {
        s.settled_phase()
    };
}

/// One side of the merge: the local listing, overwritten by whatever the
/// remote supplied for it. Nothing supplied means the local listing as is.
pub(crate) fn merge_side(local: &Listing, remote: Option<&ListingPatch>) -> Listing {
    match remote {
        Some(patch) => local.merged_with(patch),
        None => local.clone(),
    }
}
