//! Comparison view state as explicit, immutable transitions.
//!
//! The analytics functions never read this state directly; callers pass
//! `state.selections()` and `state.time_window()` in as plain parameters.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::analytics::TimeWindow;
use crate::config::MAX_COMPARISONS;
use crate::models::{CountryProfile, Selection};

#[derive(Debug, Clone, PartialEq)]
pub enum ComparisonAction {
    Add {
        commodity: String,
        profile: CountryProfile,
    },
    Remove {
        id: String,
    },
    SetTimeWindow(TimeWindow),
    Clear,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ComparisonState {
    selections: Vec<Selection>,
    time_window: TimeWindow,
    next_seq: u64,
}

impl ComparisonState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn selections(&self) -> &[Selection] {
        &self.selections
    }

    pub fn time_window(&self) -> TimeWindow {
        self.time_window
    }

    pub fn len(&self) -> usize {
        self.selections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.selections.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.selections.len() >= MAX_COMPARISONS
    }

    /// Apply `action`, returning the next state.
    ///
    /// Adding past [`MAX_COMPARISONS`] and removing an unknown id leave the
    /// selections unchanged.
    pub fn reduce(self, action: ComparisonAction) -> Self {
        let mut next = self;
        match action {
            ComparisonAction::Add { commodity, profile } => {
                if next.is_full() {
                    debug!(
                        commodity = %commodity,
                        country = %profile.country,
                        "comparison full; ignoring add"
                    );
                    return next;
                }
                let id = format!("{}-{}-{}", commodity, profile.country, next.next_seq);
                next.next_seq += 1;
                debug!(id = %id, "selection added");
                next.selections.push(Selection::new(id, commodity, profile));
            }
            ComparisonAction::Remove { id } => {
                let before = next.selections.len();
                next.selections.retain(|s| s.id != id);
                if next.selections.len() == before {
                    debug!(id = %id, "no selection to remove");
                }
            }
            ComparisonAction::SetTimeWindow(window) => {
                next.time_window = window;
            }
            ComparisonAction::Clear => {
                next.selections.clear();
            }
        }
        next
    }
}
