//! Desktop engine coordinating all components
//!
//! This module is split into focused submodules:
//! - `input`: Pointer event handling and drag operations
//! - `windows`: Window lifecycle and operations
//! - `rendering`: Repaint and inspection

mod input;
mod windows;
mod rendering;

use crate::config::DesktopConfig;
use crate::input::InputRouter;
use crate::render::ImageCatalog;
use crate::window::WindowRegistry;

pub use rendering::WindowView;

/// Desktop engine coordinating all desktop components
///
/// This is the main entry point for desktop operations, managing:
/// - Window registry (ids, hit testing, mutation, repaint)
/// - Input router (press/drag/release state machine)
/// - Icon catalog for button images
/// - Startup configuration used to rebuild the scene on resize
pub struct DesktopEngine {
    /// Window registry
    pub windows: WindowRegistry,
    /// Input router
    pub input: InputRouter,
    /// Icons referenced by buttons
    pub images: ImageCatalog,
    /// Scene rebuilt by [`DesktopEngine::handle_resize`]
    config: DesktopConfig,
}

impl Default for DesktopEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl DesktopEngine {
    /// Create a desktop engine with the default startup scene
    pub fn new() -> Self {
        Self::with_config(DesktopConfig::default())
    }

    /// Create a desktop engine from a startup configuration
    pub fn with_config(config: DesktopConfig) -> Self {
        let (windows, images) = config.build();
        Self {
            windows,
            input: InputRouter::new(),
            images,
            config,
        }
    }

    /// Startup configuration
    #[inline]
    pub fn config(&self) -> &DesktopConfig {
        &self.config
    }

    /// Viewport resize: discard all state and rebuild the startup scene.
    ///
    /// Identifiers restart from 0, as in a fresh process.
    pub fn handle_resize(&mut self) {
        let (windows, images) = self.config.build();
        self.windows = windows;
        self.images = images;
        self.input = InputRouter::new();
    }
}
