//! Destination prompt

use std::path::{Path, PathBuf};

/// Asks the user where to save a download.
pub trait DestinationPrompt {
    /// Returns the chosen path, or `None` if the user cancelled.
    fn choose_destination(&self, suggested: &Path) -> Option<PathBuf>;
}

impl<F> DestinationPrompt for F
where
    F: Fn(&Path) -> Option<PathBuf>,
{
    fn choose_destination(&self, suggested: &Path) -> Option<PathBuf> {
        self(suggested)
    }
}
