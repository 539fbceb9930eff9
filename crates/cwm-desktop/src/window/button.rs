//! Button descriptors and the per-window button row

use std::fmt;
use std::rc::Rc;
use serde::{Deserialize, Serialize};
use crate::color::Color;
use crate::math::{Rect, Size, Vec2};
use crate::render::ImageId;

/// Result of a button click
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Action {
    /// Remove the owning window from the registry
    pub close: bool,
}

impl Action {
    /// Keep the window as is
    pub const NONE: Action = Action { close: false };
    /// Close the owning window
    pub const CLOSE: Action = Action { close: true };
}

/// Click handler invoked when a button is hit
pub type ClickHandler = Rc<dyn Fn() -> Action>;

/// Which window edge a button is anchored to
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Alignment {
    #[default]
    Left,
    /// Measured leftwards from the window's right edge
    Right,
}

/// How the icon is drawn inside the button
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct IconOptions {
    /// Stroke/fill color applied while drawing the icon
    pub color: Option<Color>,
    /// Total inset; half of it is applied on the top-left corner
    pub margin: Option<f32>,
}

/// A clickable rectangle attached to a window
#[derive(Clone)]
pub struct Button {
    /// Offset from the anchoring window edge
    pub offset: Vec2,
    pub size: Size,
    pub color: Color,
    pub border: Color,
    pub icon: Option<ImageId>,
    pub icon_options: IconOptions,
    /// Optional outline stroked after the button, in absolute coordinates
    pub path: Option<Vec<Vec2>>,
    pub align: Alignment,
    on_click: Option<ClickHandler>,
}

impl fmt::Debug for Button {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Button")
            .field("offset", &self.offset)
            .field("size", &self.size)
            .field("color", &self.color)
            .field("border", &self.border)
            .field("icon", &self.icon)
            .field("icon_options", &self.icon_options)
            .field("path", &self.path)
            .field("align", &self.align)
            .field("on_click", &self.on_click.is_some())
            .finish()
    }
}

impl Button {
    /// Create a left-aligned button with white fill and border and no handler
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            offset: Vec2::new(x, y),
            size: Size::new(width, height),
            color: Color::white(),
            border: Color::white(),
            icon: None,
            icon_options: IconOptions::default(),
            path: None,
            align: Alignment::Left,
            on_click: None,
        }
    }

    pub fn with_color(mut self, color: impl Into<Color>) -> Self {
        self.color = color.into();
        self
    }

    pub fn with_border(mut self, border: impl Into<Color>) -> Self {
        self.border = border.into();
        self
    }

    pub fn with_icon(mut self, icon: ImageId, options: IconOptions) -> Self {
        self.icon = Some(icon);
        self.icon_options = options;
        self
    }

    pub fn with_path(mut self, points: Vec<Vec2>) -> Self {
        self.path = Some(points);
        self
    }

    pub fn with_align(mut self, align: Alignment) -> Self {
        self.align = align;
        self
    }

    /// Set the click handler
    pub fn on_click(mut self, handler: impl Fn() -> Action + 'static) -> Self {
        self.on_click = Some(Rc::new(handler));
        self
    }

    /// Invoke the click handler; a button without one does nothing
    pub fn click(&self) -> Action {
        self.on_click.as_ref().map(|handler| handler()).unwrap_or_default()
    }

    /// Where the button is painted, given its window's rectangle.
    ///
    /// Both alignments are anchored upwards from the window's top edge.
    /// Left-aligned buttons ignore the window's x coordinate entirely.
    pub fn paint_rect(&self, window: Rect) -> Rect {
        let x = match self.align {
            Alignment::Right => window.right() - self.offset.x - self.size.width,
            Alignment::Left => self.offset.x + self.size.width,
        };
        let y = window.y - self.offset.y;
        Rect::new(x, y, self.size.width, self.size.height)
    }

    /// Where the button reacts to clicks, given its window's rectangle.
    ///
    /// Right-aligned buttons are hit where they are painted. Left-aligned
    /// buttons are hit at their offset from the window's top-left corner.
    pub fn hit_rect(&self, window: Rect) -> Rect {
        match self.align {
            Alignment::Right => self.paint_rect(window),
            Alignment::Left => Rect::new(
                window.x + self.offset.x,
                window.y + self.offset.y,
                self.size.width,
                self.size.height,
            ),
        }
    }

    /// Where the icon is drawn inside an already placed button rectangle
    pub fn icon_rect(&self, at: Rect) -> Rect {
        match self.icon_options.margin {
            // Right-aligned icons shrink by the whole margin, left-aligned by half
            Some(margin) => match self.align {
                Alignment::Right => at.inset_by(margin, margin),
                Alignment::Left => at.inset_by(margin, margin * 0.5),
            },
            None => at,
        }
    }
}

/// Ordered buttons of one window
#[derive(Clone, Debug, Default)]
pub struct ButtonRow {
    buttons: Vec<Button>,
}

impl ButtonRow {
    /// Append a button
    pub fn add(&mut self, button: Button) -> &mut Self {
        self.buttons.push(button);
        self
    }

    /// Whether the row has no buttons
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.buttons.is_empty()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.buttons.len()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Button> {
        self.buttons.iter()
    }

    /// Whether `(x, y)` lies strictly inside the button's own offset rectangle
    pub fn is_inside(button: &Button, x: f32, y: f32) -> bool {
        Rect::from_pos_size(button.offset, button.size).contains(Vec2::new(x, y))
    }
}

impl<'a> IntoIterator for &'a ButtonRow {
    type Item = &'a Button;
    type IntoIter = std::slice::Iter<'a, Button>;

    fn into_iter(self) -> Self::IntoIter {
        self.buttons.iter()
    }
}
