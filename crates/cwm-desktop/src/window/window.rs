//! Window struct

use crate::color::Color;
use crate::math::{Rect, Size, Vec2};
use super::{AttrStore, AttrValue, Button, ButtonRow};

/// A window on the drawing surface
///
/// The size is fixed at construction; only the position changes afterwards.
#[derive(Clone, Debug)]
pub struct Window {
    /// Window title (display-only, not rendered)
    pub title: String,
    /// Top-left corner in surface coordinates
    pub position: Vec2,
    /// Background fill
    pub background: Color,
    /// Border stroke (None = no border)
    pub border: Option<Color>,
    size: Size,
    buttons: ButtonRow,
    attrs: AttrStore,
    attrs_temp: AttrStore,
}

impl Window {
    /// Create a window at the origin with a white background and no border
    pub fn new(title: impl Into<String>, width: f32, height: f32) -> Self {
        Self {
            title: title.into(),
            position: Vec2::ZERO,
            background: Color::white(),
            border: None,
            size: Size::new(width, height),
            buttons: ButtonRow::default(),
            attrs: AttrStore::default(),
            attrs_temp: AttrStore::default(),
        }
    }

    #[inline]
    pub fn size(&self) -> Size {
        self.size
    }

    /// Get the window's bounding rectangle
    #[inline]
    pub fn rect(&self) -> Rect {
        Rect::from_pos_size(self.position, self.size)
    }

    /// Whether `(x, y)` lies strictly inside the window
    #[inline]
    pub fn contains(&self, x: f32, y: f32) -> bool {
        self.rect().contains(Vec2::new(x, y))
    }

    pub fn set_position(&mut self, x: f32, y: f32) -> &mut Self {
        self.position = Vec2::new(x, y);
        self
    }

    pub fn set_background_color(&mut self, color: impl Into<Color>) -> &mut Self {
        self.background = color.into();
        self
    }

    pub fn set_border_color(&mut self, color: impl Into<Color>) -> &mut Self {
        self.border = Some(color.into());
        self
    }

    pub fn add_button(&mut self, button: Button) -> &mut Self {
        self.buttons.add(button);
        self
    }

    #[inline]
    pub fn buttons(&self) -> &ButtonRow {
        &self.buttons
    }

    /// Read an attribute from the persistent or transient store
    pub fn attr(&self, name: &str, is_temp: bool) -> Option<&AttrValue> {
        self.store(is_temp).get(name)
    }

    /// Write an attribute into the persistent or transient store
    pub fn set_attr(&mut self, name: &str, value: impl Into<AttrValue>, is_temp: bool) -> &mut Self {
        let store = if is_temp { &mut self.attrs_temp } else { &mut self.attrs };
        store.set(name, value.into());
        self
    }

    /// Forget every transient attribute
    #[inline]
    pub fn clear_temp(&mut self) {
        self.attrs_temp.clear();
    }

    /// Whether any transient attribute is set
    #[inline]
    pub fn has_temp(&self) -> bool {
        !self.attrs_temp.is_empty()
    }

    fn store(&self, is_temp: bool) -> &AttrStore {
        if is_temp {
            &self.attrs_temp
        } else {
            &self.attrs
        }
    }
}
