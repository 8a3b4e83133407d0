//! Moonshine Navigation
//!
//! - Address field text → absolute address (`https://` when no scheme)
//! - Back / forward / reload forwarded to the active tab
//! - Address field follows the active tab

mod controller;
mod error;
mod target;

pub use controller::NavigationController;
pub use error::NavigationError;
pub use target::{normalize_target, DEFAULT_SCHEME, RECOGNIZED_SCHEMES};

pub type Result<T> = std::result::Result<T, NavigationError>;
