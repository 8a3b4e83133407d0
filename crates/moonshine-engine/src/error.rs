//! Surface error types

use thiserror::Error;

#[derive(Error, Debug)]
pub enum SurfaceError {
    #[error("Failed to create surface: {0}")]
    Create(String),

    #[error("Surface unavailable: {0}")]
    Unavailable(String),
}
