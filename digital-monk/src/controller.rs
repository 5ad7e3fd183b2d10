//! Interaction controller: selections, request lifecycle and history.
//!
//! A request moves `Idle -> Pending -> Settled`. Only one request can be
//! pending; [`Controller::begin_submit`] hands out a [`Submission`] snapshot
//! and [`Controller::settle`] consumes it, appending exactly one history entry.
//! The frontend drives these two steps around its own async call, tests use
//! [`Controller::submit`].

use crate::catalog::Field;
use crate::client::FortuneClient;
use crate::error::{FortuneError, SelectionError};
use crate::selection::Selection;
use crate::storage::KeyValueStore;
use crate::storage::history::{self, HistoryEntry, Timestamp};

/// Recorded when a request succeeds with no text at all.
pub const NO_FORTUNE_GENERATED: &str = "No fortune generated (empty API response)";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Fortune(String),
    Failed(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum RequestState {
    #[default]
    Idle,
    Pending,
    Settled(Outcome),
}

/// Selections frozen at the moment a request was started.
///
/// Not `Clone`: each token settles at most one request.
#[derive(Debug, PartialEq, Eq)]
pub struct Submission {
    selection: Selection,
    nickname: String,
}

impl Submission {
    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    /// Normalized nickname ("Anonymous" when blank).
    pub fn nickname(&self) -> &str {
        &self.nickname
    }

    pub fn situation(&self) -> String {
        self.selection.situation()
    }
}

/// User-facing text for a failed request.
pub fn error_message(err: &FortuneError) -> String {
    format!(
        "Error: {}. Ensure your API_KEY is correctly configured.",
        err.to_string().trim_end_matches('.')
    )
}

#[derive(Debug)]
pub struct Controller<S: KeyValueStore> {
    store: S,
    selection: Selection,
    state: RequestState,
    history: Vec<HistoryEntry>,
}

impl<S: KeyValueStore> Controller<S> {
    /// Load history from `store` and write it back in its normalized shape.
    pub fn new(mut store: S) -> Self {
        let history = history::load(&mut store);
        history::save(&mut store, &history);
        log::info!("Loaded {} fortune history entries", history.len());
        Self {
            store,
            selection: Selection::default(),
            state: RequestState::Idle,
            history,
        }
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    pub fn select(&mut self, field: Field, value: &str) -> Result<(), SelectionError> {
        self.selection.set(field, value)
    }

    pub fn set_nickname(&mut self, nickname: impl Into<String>) {
        self.selection.set_nickname(nickname);
    }

    pub fn state(&self) -> &RequestState {
        &self.state
    }

    pub fn is_pending(&self) -> bool {
        self.state == RequestState::Pending
    }

    /// The fortune to display, if the last request succeeded.
    pub fn fortune(&self) -> Option<&str> {
        match &self.state {
            RequestState::Settled(Outcome::Fortune(text)) => Some(text),
            _ => None,
        }
    }

    /// The error to display, if the last request failed.
    pub fn error(&self) -> Option<&str> {
        match &self.state {
            RequestState::Settled(Outcome::Failed(message)) => Some(message),
            _ => None,
        }
    }

    pub fn history(&self) -> &[HistoryEntry] {
        &self.history
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Start a request. Returns `None`, changing nothing, while one is pending.
    pub fn begin_submit(&mut self) -> Option<Submission> {
        if self.is_pending() {
            log::debug!("Submit ignored: a request is already pending");
            return None;
        }
        self.state = RequestState::Pending;
        Some(Submission {
            selection: self.selection.clone(),
            nickname: self.selection.display_nickname(),
        })
    }

    /// Finish a request and record it in the history.
    ///
    /// Ignored, returning `None`, unless a request is pending.
    pub fn settle(
        &mut self,
        submission: Submission,
        outcome: Result<String, FortuneError>,
        at: Timestamp,
    ) -> Option<&HistoryEntry> {
        if !self.is_pending() {
            log::warn!("Settle ignored: no request is pending");
            return None;
        }

        let (state, result) = match outcome {
            Ok(text) => {
                let recorded = if text.is_empty() {
                    NO_FORTUNE_GENERATED.to_string()
                } else {
                    text.clone()
                };
                (Outcome::Fortune(text), recorded)
            }
            Err(err) => {
                let message = error_message(&err);
                let recorded = format!("ERROR: {}", message);
                (Outcome::Failed(message), recorded)
            }
        };

        match &state {
            Outcome::Fortune(_) => log::info!("Fortune received"),
            Outcome::Failed(message) => log::warn!("Fortune request failed: {}", message),
        }
        self.state = RequestState::Settled(state);

        let Submission {
            selection,
            nickname,
        } = submission;
        let entry = HistoryEntry {
            date: at.date,
            time: at.time,
            starter: selection.get(Field::Starter).to_string(),
            mood: selection.get(Field::Mood).to_string(),
            color: selection.get(Field::Color).to_string(),
            focus: selection.get(Field::Focus).to_string(),
            activity: selection.get(Field::Activity).to_string(),
            nickname,
            result,
        };
        history::add(&mut self.history, entry);
        history::save(&mut self.store, &self.history);

        self.history.last()
    }

    /// Run one full request with `client`. Returns `None` if one is already pending.
    pub async fn submit<C: FortuneClient>(
        &mut self,
        client: &C,
        clock: impl FnOnce() -> Timestamp,
    ) -> Option<&HistoryEntry> {
        let submission = self.begin_submit()?;
        let situation = submission.situation();
        log::info!("Consulting the oracle: {}", situation);
        let outcome = client.request_fortune(&situation).await;
        self.settle(submission, outcome, clock())
    }
}
