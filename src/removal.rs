//! Interactive removal as an explicit state machine.
//!
//! ```text
//!  start(text) --no candidates--> Finished(NoMatch)
//!       |
//!       v
//!  Selecting --blank--> Finished(Cancelled)
//!       | valid number        (bad input: error, state unchanged)
//!       v
//!  Confirming --anything but y/yes--> Finished(Cancelled)
//!       | y / yes
//!       v
//!  Finished(Confirmed(candidate)) --commit--> store rewrite
//! ```
//!
//! Nothing is deleted until a number has been picked and the choice has
//! been confirmed. The flow holds owned copies of the candidates so it does
//! not borrow the store while the user is answering prompts.

use log::debug;
use thiserror::Error;

use crate::error::Result;
use crate::models::ManualRecord;
use crate::query::QueryEngine;
use crate::store::CatalogStore;

/// A record offered for removal
#[derive(Debug, Clone, PartialEq)]
pub struct Candidate {
    pub record: ManualRecord,
    pub score: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub enum RemovalOutcome {
    NoMatch,
    Cancelled,
    Confirmed(Candidate),
}

#[derive(Debug, Clone, PartialEq)]
pub enum RemovalState {
    /// Waiting for a 1-based candidate number
    Selecting { candidates: Vec<Candidate> },
    /// Waiting for yes/no
    Confirming { candidate: Candidate },
    Finished(RemovalOutcome),
}

/// Rejected input while selecting; the flow stays in `Selecting`
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SelectionError {
    #[error("'{0}' is not a number")]
    NotANumber(String),
    #[error("Choose a number between 1 and {max}")]
    OutOfRange { max: usize },
}

#[derive(Debug, Clone)]
pub struct RemovalFlow {
    state: RemovalState,
}

impl RemovalFlow {
    /// Gather every title scoring at or above the engine's threshold, best
    /// first.
    pub fn start(engine: &QueryEngine<'_>, text: &str) -> Self {
        let candidates: Vec<Candidate> = engine
            .rank(text)
            .into_iter()
            .map(|scored| Candidate {
                record: scored.record.clone(),
                score: scored.score,
            })
            .collect();

        debug!("Removal of '{text}' found {} candidates", candidates.len());

        let state = if candidates.is_empty() {
            RemovalState::Finished(RemovalOutcome::NoMatch)
        } else {
            RemovalState::Selecting { candidates }
        };
        Self { state }
    }

    pub fn state(&self) -> &RemovalState {
        &self.state
    }

    pub fn outcome(&self) -> Option<&RemovalOutcome> {
        match &self.state {
            RemovalState::Finished(outcome) => Some(outcome),
            _ => None,
        }
    }

    pub fn is_finished(&self) -> bool {
        self.outcome().is_some()
    }

    /// Abandon the flow, e.g. on end of input
    pub fn cancel(&mut self) {
        if !self.is_finished() {
            self.state = RemovalState::Finished(RemovalOutcome::Cancelled);
        }
    }

    /// Feed one line of user input to the current prompt
    pub fn handle(&mut self, input: &str) -> std::result::Result<(), SelectionError> {
        let input = input.trim();

        match &self.state {
            RemovalState::Selecting { candidates } => {
                if input.is_empty() {
                    self.state = RemovalState::Finished(RemovalOutcome::Cancelled);
                    return Ok(());
                }

                let choice: usize = input
                    .parse()
                    .map_err(|_| SelectionError::NotANumber(input.to_string()))?;
                if choice == 0 || choice > candidates.len() {
                    return Err(SelectionError::OutOfRange {
                        max: candidates.len(),
                    });
                }

                let candidate = candidates[choice - 1].clone();
                debug!("Selected candidate {choice}: '{}'", candidate.record.title());
                self.state = RemovalState::Confirming { candidate };
            }
            RemovalState::Confirming { candidate } => {
                let outcome = if is_affirmative(input) {
                    RemovalOutcome::Confirmed(candidate.clone())
                } else {
                    RemovalOutcome::Cancelled
                };
                self.state = RemovalState::Finished(outcome);
            }
            RemovalState::Finished(_) => {}
        }

        Ok(())
    }

    /// Apply a confirmed removal to the store. Returns `Ok(false)` when the
    /// flow ended any other way or the record is already gone.
    pub fn commit(&self, store: &mut CatalogStore) -> Result<bool> {
        match self.outcome() {
            Some(RemovalOutcome::Confirmed(candidate)) => store.remove(&candidate.record),
            _ => Ok(false),
        }
    }
}

fn is_affirmative(input: &str) -> bool {
    matches!(input.to_lowercase().as_str(), "y" | "yes")
}

#[cfg(test)]
#[path = "removal_tests.rs"]
mod tests;
