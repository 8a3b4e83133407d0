//! Moonshine Engine Boundary
//!
//! The embedded web engine is an opaque collaborator. This crate holds the
//! narrow contract the shell consumes:
//! - `RenderingSurface` — one engine instance per tab
//! - `SurfaceFactory` — builds surfaces from the shared `Profile`
//! - `SurfaceEvent` — what the engine reports back
//! - `HeadlessSurface` — an in-process surface without a real engine

mod error;
mod event;
mod headless;
mod id;
mod profile;
mod surface;

pub use error::SurfaceError;
pub use event::SurfaceEvent;
pub use headless::{HeadlessFactory, HeadlessSurface, SurfaceCall, SurfaceJournal};
pub use id::TabId;
pub use profile::{EngineFlags, HttpCacheMode, Profile, DEFAULT_USER_AGENT};
pub use surface::{RenderingSurface, SurfaceFactory};

pub type Result<T> = std::result::Result<T, SurfaceError>;
