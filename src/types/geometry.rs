//! Geometric types for window placement
//!
//! Provides typed wrappers for a window's position and size so the
//! coordinate pairs can't be swapped (x/y vs. width/height), plus the
//! complete and partial views of a stored geometry record.

use serde::{Deserialize, Serialize};

use crate::geometry::Window;

/// A window's top-left corner in screen coordinates
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

impl Position {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

impl From<(f64, f64)> for Position {
    fn from((x, y): (f64, f64)) -> Self {
        Self::new(x, y)
    }
}

impl From<Position> for (f64, f64) {
    fn from(pos: Position) -> Self {
        (pos.x, pos.y)
    }
}

/// Window size (width × height)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

impl From<(f64, f64)> for Size {
    fn from((width, height): (f64, f64)) -> Self {
        Self::new(width, height)
    }
}

impl From<Size> for (f64, f64) {
    fn from(size: Size) -> Self {
        (size.width, size.height)
    }
}

/// A complete geometry record
///
/// `position` and `size` are the restored (un-maximized) bounds;
/// `maximized` says whether the window should come back maximized.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
pub struct Geometry {
    pub position: Position,
    pub size: Size,
    pub maximized: bool,
}

impl Geometry {
    pub fn new(position: impl Into<Position>, size: impl Into<Size>, maximized: bool) -> Self {
        Self {
            position: position.into(),
            size: size.into(),
            maximized,
        }
    }

    /// Read the window's current bounds and maximized flag as-is
    pub fn from_window<W: Window + ?Sized>(window: &W) -> Self {
        Self {
            position: Position::new(window.x(), window.y()),
            size: Size::new(window.width(), window.height()),
            maximized: window.is_maximized(),
        }
    }
}

/// The geometry keys present in a store, each parsed on its own
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Default)]
pub struct StoredGeometry {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub x: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub y: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub maximized: Option<bool>,
}

impl StoredGeometry {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// All five fields, if every one of them is present
    pub fn complete(&self) -> Option<Geometry> {
        Some(Geometry::new(
            (self.x?, self.y?),
            (self.width?, self.height?),
            self.maximized?,
        ))
    }

    /// Apply the present fields to `window`
    ///
    /// Position and size go first, the maximized flag last, so a restored
    /// maximized window keeps the stored bounds for when it is un-maximized.
    pub fn apply_to<W: Window + ?Sized>(&self, window: &mut W) {
        if let Some(x) = self.x {
            window.set_x(x);
        }
        if let Some(y) = self.y {
            window.set_y(y);
        }
        if let Some(width) = self.width {
            window.set_width(width);
        }
        if let Some(height) = self.height {
            window.set_height(height);
        }
        if let Some(maximized) = self.maximized {
            window.set_maximized(maximized);
        }
    }
}

impl From<Geometry> for StoredGeometry {
    fn from(geometry: Geometry) -> Self {
        Self {
            x: Some(geometry.position.x),
            y: Some(geometry.position.y),
            width: Some(geometry.size.width),
            height: Some(geometry.size.height),
            maximized: Some(geometry.maximized),
        }
    }
}
