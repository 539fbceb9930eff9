//! Window configuration for creation

use serde::{Deserialize, Serialize};
use crate::color::Color;
use crate::math::{Size, Vec2};
use crate::render::ImageCatalog;
use super::{Action, Alignment, Button, IconOptions, Window};

/// What a configured button does when clicked
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActionKind {
    /// Do nothing
    #[default]
    None,
    /// Close the owning window
    Close,
}

impl ActionKind {
    /// The action the click handler returns
    pub fn action(self) -> Action {
        match self {
            ActionKind::None => Action::NONE,
            ActionKind::Close => Action::CLOSE,
        }
    }
}

/// Icon drawn inside a button
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct IconConfig {
    /// Image path, resolved by the image loader
    pub path: String,
    #[serde(default)]
    pub color: Option<Color>,
    #[serde(default)]
    pub margin: Option<f32>,
}

/// Configuration for creating a button
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ButtonConfig {
    pub offset: Vec2,
    pub size: Size,
    pub color: Color,
    pub border: Color,
    #[serde(default)]
    pub icon: Option<IconConfig>,
    #[serde(default)]
    pub path: Option<Vec<Vec2>>,
    #[serde(default)]
    pub align: Alignment,
    #[serde(default)]
    pub action: ActionKind,
}

impl ButtonConfig {
    /// Build the button, registering its icon with `images`
    pub fn build(&self, images: &mut ImageCatalog) -> Button {
        let action = self.action.action();
        let mut button = Button::new(self.offset.x, self.offset.y, self.size.width, self.size.height)
            .with_color(self.color.clone())
            .with_border(self.border.clone())
            .with_align(self.align)
            .on_click(move || action);

        if let Some(icon) = &self.icon {
            let options = IconOptions {
                color: icon.color.clone(),
                margin: icon.margin,
            };
            button = button.with_icon(images.register(&icon.path), options);
        }
        if let Some(points) = &self.path {
            button = button.with_path(points.clone());
        }
        button
    }
}

/// Configuration for creating a window
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct WindowConfig {
    /// Window title
    pub title: String,
    /// Initial position
    #[serde(default)]
    pub position: Vec2,
    /// Fixed size
    pub size: Size,
    /// Background fill (None = white)
    #[serde(default)]
    pub background: Option<Color>,
    /// Border stroke (None = no border)
    #[serde(default)]
    pub border: Option<Color>,
    #[serde(default)]
    pub buttons: Vec<ButtonConfig>,
}

impl WindowConfig {
    /// Build the window, registering button icons with `images`
    pub fn build(&self, images: &mut ImageCatalog) -> Window {
        let mut window = Window::new(self.title.clone(), self.size.width, self.size.height);
        window.set_position(self.position.x, self.position.y);
        if let Some(background) = &self.background {
            window.set_background_color(background.clone());
        }
        if let Some(border) = &self.border {
            window.set_border_color(border.clone());
        }
        for button in &self.buttons {
            window.add_button(button.build(images));
        }
        window
    }
}
