//! Moonshine Tab Management
//!
//! An ordered collection of session entries with one active entry.
//! - Insertion order is display order
//! - At least one tab always exists
//! - Each entry exclusively owns its rendering surface

mod container;
mod entry;
mod error;

pub use container::TabContainer;
pub use entry::{SessionEntry, TabSummary, PLACEHOLDER_LABEL};
pub use error::TabError;
pub use moonshine_engine::TabId;

pub type Result<T> = std::result::Result<T, TabError>;
