//! Icon image handles

use serde::{Deserialize, Serialize};

/// Opaque handle to an icon image
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ImageId(u32);

impl ImageId {
    /// Index into the owning catalog
    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

/// Maps icon paths to image handles.
///
/// Surfaces resolve handles to their own loaded images; the catalog only
/// records which paths exist.
#[derive(Clone, Debug, Default)]
pub struct ImageCatalog {
    paths: Vec<String>,
}

impl ImageCatalog {
    /// Create an empty catalog
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a path, returning the existing handle if it is already known
    pub fn register(&mut self, path: &str) -> ImageId {
        if let Some(index) = self.paths.iter().position(|p| p == path) {
            return ImageId(index as u32);
        }
        self.paths.push(path.to_string());
        ImageId((self.paths.len() - 1) as u32)
    }

    /// Path behind a handle
    pub fn path(&self, id: ImageId) -> Option<&str> {
        self.paths.get(id.index()).map(String::as_str)
    }

    /// All registered images in handle order
    pub fn iter(&self) -> impl Iterator<Item = (ImageId, &str)> {
        self.paths
            .iter()
            .enumerate()
            .map(|(i, p)| (ImageId(i as u32), p.as_str()))
    }

    /// Number of registered images
    #[inline]
    pub fn len(&self) -> usize {
        self.paths.len()
    }

    /// Whether no image is registered
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }
}
