//! Window data model and registry
//!
//! Provides windows, their button rows and attribute stores, and the
//! registry that owns them.

#[allow(clippy::module_inception)]
mod window;
mod attrs;
mod button;
mod config;
mod registry;
mod status;

pub use window::Window;
pub use attrs::{AttrStore, AttrValue};
pub use button::{Action, Alignment, Button, ButtonRow, ClickHandler, IconOptions};
pub use config::{ActionKind, ButtonConfig, IconConfig, WindowConfig};
pub use registry::{FindById, RegistryEntry, WindowRegistry};
pub use status::Status;

/// Unique window identifier
pub type WindowId = u64;
