//! Window registry: ordered storage, identifiers and hit testing

use crate::math::Vec2;
use super::{Status, Window, WindowId};

/// A registered window and its identifier
#[derive(Clone, Debug)]
pub struct RegistryEntry {
    pub window: Window,
    pub id: WindowId,
}

/// Lookup helper handed to [`WindowRegistry::update_register`]
pub type FindById = for<'a> fn(&'a [RegistryEntry], WindowId) -> Option<&'a RegistryEntry>;

fn find_by_id(entries: &[RegistryEntry], id: WindowId) -> Option<&RegistryEntry> {
    entries.iter().find(|entry| entry.id == id)
}

/// Ordered collection of live windows
///
/// Registration order is both paint order (later entries drawn over earlier
/// ones) and hit-test order (earlier entries win).
#[derive(Debug, Default)]
pub struct WindowRegistry {
    entries: Vec<RegistryEntry>,
    /// Next identifier; never reset, so ids are not reused after removal
    next_id: WindowId,
}

impl WindowRegistry {
    /// Create an empty registry whose first identifier is 0
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a window and return its identifier
    pub fn append(&mut self, window: Window) -> WindowId {
        let id = self.next_id;
        self.next_id += 1;
        self.entries.push(RegistryEntry { window, id });
        id
    }

    /// Replace the whole entry list with the result of `f`.
    ///
    /// `f` receives the current entries and a lookup-by-id helper.
    pub fn update_register<F>(&mut self, f: F)
    where
        F: FnOnce(Vec<RegistryEntry>, FindById) -> Vec<RegistryEntry>,
    {
        let entries = std::mem::take(&mut self.entries);
        self.entries = f(entries, find_by_id);
    }

    /// Apply `transform` to the first entry matching `predicate`.
    ///
    /// `Some(window)` replaces the entry's window. `None` leaves the entry
    /// untouched and still reports [`Status::Ok`].
    pub fn update_window<P, T>(&mut self, predicate: P, transform: T) -> Status
    where
        P: Fn(&RegistryEntry) -> bool,
        T: FnOnce(&Window) -> Option<Window>,
    {
        let entry = match self.entries.iter_mut().find(|entry| predicate(entry)) {
            Some(entry) => entry,
            None => return Status::NotFound,
        };

        if let Some(window) = transform(&entry.window) {
            entry.window = window;
        }
        Status::Ok
    }

    /// Remove the first entry matching `predicate`
    pub fn remove_window<P>(&mut self, predicate: P) -> Status
    where
        P: Fn(&RegistryEntry) -> bool,
    {
        match self.entries.iter().position(|entry| predicate(entry)) {
            Some(index) => {
                self.entries.remove(index);
                Status::Ok
            }
            None => Status::NotFound,
        }
    }

    /// First window, in registration order, strictly containing the point
    pub fn get_window_by_pos(&self, x: f32, y: f32) -> Option<&Window> {
        self.entry_at(Vec2::new(x, y)).map(|entry| &entry.window)
    }

    /// First entry, in registration order, strictly containing the point
    pub fn entry_at(&self, pos: Vec2) -> Option<&RegistryEntry> {
        self.entries.iter().find(|entry| entry.window.rect().contains(pos))
    }

    /// Reset every window's transient attributes
    pub fn clear_temp(&mut self) {
        for entry in &mut self.entries {
            entry.window.clear_temp();
        }
    }

    /// Get a window by ID
    pub fn get(&self, id: WindowId) -> Option<&Window> {
        find_by_id(&self.entries, id).map(|entry| &entry.window)
    }

    /// Get a mutable window by ID
    pub fn get_mut(&mut self, id: WindowId) -> Option<&mut Window> {
        self.entries
            .iter_mut()
            .find(|entry| entry.id == id)
            .map(|entry| &mut entry.window)
    }

    /// Entries in registration order
    #[inline]
    pub fn entries(&self) -> &[RegistryEntry] {
        &self.entries
    }

    /// Identifiers in registration order
    pub fn ids(&self) -> Vec<WindowId> {
        self.entries.iter().map(|entry| entry.id).collect()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn window_at(title: &str, x: f32, y: f32) -> Window {
        let mut w = Window::new(title, 100.0, 100.0);
        w.set_position(x, y);
        w
    }

    #[test]
    fn test_append_assigns_increasing_ids_from_zero() {
        let mut registry = WindowRegistry::new();
        assert_eq!(registry.append(window_at("a", 0.0, 0.0)), 0);
        assert_eq!(registry.append(window_at("b", 0.0, 0.0)), 1);
        assert_eq!(registry.append(window_at("c", 0.0, 0.0)), 2);
        assert_eq!(registry.len(), 3);
    }

    #[test]
    fn test_ids_not_reused_after_removal() {
        let mut registry = WindowRegistry::new();
        let a = registry.append(window_at("a", 0.0, 0.0));
        assert!(registry.remove_window(|e| e.id == a).is_ok());

        let b = registry.append(window_at("b", 0.0, 0.0));
        assert!(b > a);
    }

    #[test]
    fn test_remove_window_no_match_leaves_registry_unchanged() {
        let mut registry = WindowRegistry::new();
        registry.append(window_at("a", 0.0, 0.0));
        registry.append(window_at("b", 10.0, 10.0));
        let before = registry.ids();

        let status = registry.remove_window(|e| e.window.title == "missing");

        assert_eq!(status, Status::NotFound);
        assert_eq!(status.code(), 404);
        assert_eq!(registry.ids(), before);
    }

    #[test]
    fn test_remove_window_removes_first_match_only() {
        let mut registry = WindowRegistry::new();
        registry.append(window_at("dup", 0.0, 0.0));
        let second = registry.append(window_at("dup", 0.0, 0.0));

        assert_eq!(registry.remove_window(|e| e.window.title == "dup"), Status::Ok);
        assert_eq!(registry.ids(), vec![second]);
    }

    #[test]
    fn test_update_window_replaces_first_match() {
        let mut registry = WindowRegistry::new();
        let a = registry.append(window_at("a", 0.0, 0.0));
        let b = registry.append(window_at("b", 50.0, 50.0));

        let status = registry.update_window(
            |e| e.id == a,
            |w| {
                let mut moved = w.clone();
                moved.set_position(20.0, 30.0);
                Some(moved)
            },
        );

        assert_eq!(status.code(), 200);
        assert_eq!(registry.get(a).unwrap().position, Vec2::new(20.0, 30.0));
        assert_eq!(registry.get(b).unwrap().position, Vec2::new(50.0, 50.0));
    }

    #[test]
    fn test_update_window_none_keeps_entry_and_reports_ok() {
        let mut registry = WindowRegistry::new();
        let a = registry.append(window_at("a", 5.0, 5.0));

        let status = registry.update_window(|e| e.id == a, |_| None);

        assert_eq!(status, Status::Ok);
        assert_eq!(registry.get(a).unwrap().position, Vec2::new(5.0, 5.0));
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_update_window_no_match() {
        let mut registry = WindowRegistry::new();
        registry.append(window_at("a", 0.0, 0.0));

        let status = registry.update_window(|e| e.id == 99, |w| Some(w.clone()));
        assert_eq!(status, Status::NotFound);
    }

    #[test]
    fn test_get_window_by_pos_first_registered_wins() {
        let mut registry = WindowRegistry::new();
        registry.append(window_at("bottom", 0.0, 0.0));
        registry.append(window_at("top", 50.0, 50.0));

        // Overlap region belongs to the first registered window
        assert_eq!(registry.get_window_by_pos(75.0, 75.0).unwrap().title, "bottom");
        assert_eq!(registry.get_window_by_pos(125.0, 125.0).unwrap().title, "top");
        assert!(registry.get_window_by_pos(0.0, 50.0).is_none());
        assert!(registry.get_window_by_pos(500.0, 500.0).is_none());
    }

    #[test]
    fn test_update_register_reorders_with_lookup() {
        let mut registry = WindowRegistry::new();
        let a = registry.append(window_at("a", 0.0, 0.0));
        let b = registry.append(window_at("b", 0.0, 0.0));

        registry.update_register(|entries, find| {
            let mut reordered = Vec::new();
            reordered.extend(find(&entries, b).cloned());
            reordered.extend(find(&entries, a).cloned());
            reordered
        });

        assert_eq!(registry.ids(), vec![b, a]);
        assert_eq!(registry.get_window_by_pos(50.0, 50.0).unwrap().title, "b");
    }

    #[test]
    fn test_clear_temp_resets_all_windows() {
        let mut registry = WindowRegistry::new();
        let a = registry.append(window_at("a", 0.0, 0.0));
        let b = registry.append(window_at("b", 0.0, 0.0));
        registry.get_mut(a).unwrap().set_attr("x", 1i64, true);
        registry.get_mut(b).unwrap().set_attr("y", 2i64, true);

        registry.clear_temp();

        assert!(!registry.get(a).unwrap().has_temp());
        assert!(!registry.get(b).unwrap().has_temp());
    }
}
