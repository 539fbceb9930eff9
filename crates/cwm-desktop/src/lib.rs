//! Canvas Window Manager
//!
//! This crate provides a minimal retained-mode windowing layer over a
//! single 2D drawing surface:
//! - Window registry (ids, hit testing, functional mutation)
//! - Rectangular windows with rows of clickable buttons
//! - Pointer press/drag/release state machine
//! - Full-surface repaint after every change
//!
//! ## Architecture
//!
//! The crate is organized into focused modules:
//!
//! - [`math`]: Core geometry types (`Vec2`, `Rect`, `Size`)
//! - [`color`]: CSS color strings and RGB conversion
//! - [`window`]: Windows, buttons and the registry
//! - [`input`]: Pointer events and drag state machine
//! - [`render`]: Surface trait and repaint
//! - [`config`]: Startup scene
//!
//! ## Example
//!
//! ```rust
//! use cwm_desktop::{DesktopEngine, RecordingSurface};
//!
//! let mut engine = DesktopEngine::new();
//! engine.handle_pointer_down(150.0, 150.0);
//! engine.handle_pointer_move(170.0, 150.0);
//! engine.handle_pointer_up(170.0, 150.0);
//!
//! let mut surface = RecordingSurface::new(800.0, 600.0);
//! engine.render(&mut surface);
//! ```
//!
//! ## Design Principles
//!
//! 1. **Pure Rust Core**: All state management is pure Rust, testable without browser
//! 2. **Surface Abstraction**: Painting goes through a trait, recorded in tests
//! 3. **Minimal Dependencies**: Core types have no browser dependencies

pub mod math;
pub mod color;
pub mod window;
pub mod input;
pub mod render;
pub mod config;

mod engine;

// WASM exports (only available with "wasm" feature)
#[cfg(feature = "wasm")]
mod wasm;
#[cfg(feature = "wasm")]
pub use wasm::*;

// Re-export core types for convenience
pub use math::{Rect, Size, Vec2};
pub use color::{rgb_to_hex, Color, ColorError};
pub use window::{
    Action, Alignment, AttrValue, Button, ButtonRow, IconOptions, RegistryEntry, Status,
    Window, WindowConfig, WindowId, WindowRegistry,
};
pub use input::{DragState, InputResult, InputRouter, PointerEvent};
pub use render::{DrawCommand, ImageCatalog, ImageId, RecordingSurface, Surface};
pub use config::{ConfigError, DesktopConfig};

pub use engine::{DesktopEngine, WindowView};
