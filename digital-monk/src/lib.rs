//! Digital Monk: categorical mood selections in, short AI fortunes out.
//!
//! This crate holds everything that does not touch the browser: the option
//! catalogs, prompt composition, Gemini response interpretation, the history
//! schema and its persistence rules, CSV export, and the request lifecycle.
//!
//! ```
//! use digital_monk::{Controller, Field, MemoryStore};
//!
//! let mut controller = Controller::new(MemoryStore::new());
//! controller.select(Field::Mood, "curious")?;
//! controller.set_nickname("Ada");
//!
//! let submission = controller.begin_submit().expect("nothing pending yet");
//! assert!(controller.begin_submit().is_none());
//! assert!(submission.situation().starts_with("I feel curious"));
//! # Ok::<(), digital_monk::SelectionError>(())
//! ```

pub mod catalog;
pub mod client;
pub mod config;
pub mod controller;
mod error;
pub mod export;
pub mod prompt;
pub mod selection;
pub mod storage;

pub use catalog::{CatalogOption, Field};
pub use client::FortuneClient;
pub use config::Config;
pub use controller::{Controller, Outcome, RequestState, Submission};
pub use error::{ExportError, FortuneError, SelectionError, StoreError};
pub use selection::Selection;
pub use storage::history::{HistoryEntry, Timestamp};
pub use storage::{KeyValueStore, MemoryStore};
