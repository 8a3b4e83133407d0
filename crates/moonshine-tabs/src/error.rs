//! Tab error types

use moonshine_engine::TabId;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum TabError {
    #[error("Tab index out of range: {index} (tabs: {len})")]
    OutOfRange { index: usize, len: usize },

    #[error("Tab not found: {0}")]
    NotFound(TabId),

    #[error("Refusing to close the last remaining tab")]
    LastTab,

    #[error("Surface error: {0}")]
    Surface(#[from] moonshine_engine::SurfaceError),
}
