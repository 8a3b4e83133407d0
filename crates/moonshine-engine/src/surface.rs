//! Rendering surface contract
//!
//! Commands are fire-and-forget: failures (bad address, network error,
//! certificate error) come back as page content or as `SurfaceEvent`s,
//! never as a return value.

use crate::id::TabId;
use crate::profile::Profile;
use crate::Result;

pub trait RenderingSurface: Send {
    /// Navigate to an absolute address
    fn navigate(&mut self, address: &str);

    /// Replace the page with raw markup (placeholder/home content only)
    fn load_content(&mut self, markup: &str);

    fn go_back(&mut self);

    fn go_forward(&mut self);

    fn reload(&mut self);

    /// Address the surface currently shows
    fn current_address(&self) -> String;

    /// Show or hide the surface inside the window
    fn set_visible(&mut self, visible: bool);

    /// Tear down the engine instance. Called exactly once, when the owning
    /// session entry is destroyed.
    fn release(&mut self);
}

/// Builds one surface per tab.
pub trait SurfaceFactory {
    type Surface: RenderingSurface;

    /// Create a surface for `tab_id`, configured from the shared profile.
    fn create(&self, tab_id: TabId, profile: &Profile) -> Result<Self::Surface>;
}
