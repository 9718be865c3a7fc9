//! Test doubles shared by the unit tests

use std::sync::Mutex;

use crate::error::{ErrorSink, StoreError};
use crate::geometry::{Component, Window};

/// Sink that keeps the rendered message of every report
#[derive(Debug, Default)]
pub(crate) struct RecordingSink {
    reports: Mutex<Vec<String>>,
}

impl RecordingSink {
    pub(crate) fn messages(&self) -> Vec<String> {
        self.reports.lock().unwrap().clone()
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.reports.lock().unwrap().is_empty()
    }
}

impl ErrorSink for RecordingSink {
    fn report(&self, error: &StoreError) {
        self.reports.lock().unwrap().push(error.to_string());
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct Bounds {
    x: f64,
    y: f64,
    width: f64,
    height: f64,
}

/// In-memory window that behaves like a desktop window manager would:
/// maximizing remembers the normal bounds and un-maximizing restores them.
#[derive(Debug, Clone)]
pub(crate) struct MockWindow {
    bounds: Bounds,
    restored: Option<Bounds>,
    /// Setter calls made through the `Window` trait, in order
    pub(crate) calls: Vec<&'static str>,
}

impl MockWindow {
    pub(crate) fn new(x: f64, y: f64, width: f64, height: f64, maximized: bool) -> Self {
        let bounds = Bounds {
            x,
            y,
            width,
            height,
        };
        Self {
            bounds,
            restored: maximized.then_some(bounds),
            calls: Vec::new(),
        }
    }

    /// Maximize to the given screen area, as the user would
    pub(crate) fn maximize_to(&mut self, x: f64, y: f64, width: f64, height: f64) {
        self.restored.get_or_insert(self.bounds);
        self.bounds = Bounds {
            x,
            y,
            width,
            height,
        };
    }
}

impl Window for MockWindow {
    fn x(&self) -> f64 {
        self.bounds.x
    }

    fn y(&self) -> f64 {
        self.bounds.y
    }

    fn width(&self) -> f64 {
        self.bounds.width
    }

    fn height(&self) -> f64 {
        self.bounds.height
    }

    fn is_maximized(&self) -> bool {
        self.restored.is_some()
    }

    fn set_x(&mut self, x: f64) {
        self.calls.push("set_x");
        self.bounds.x = x;
    }

    fn set_y(&mut self, y: f64) {
        self.calls.push("set_y");
        self.bounds.y = y;
    }

    fn set_width(&mut self, width: f64) {
        self.calls.push("set_width");
        self.bounds.width = width;
    }

    fn set_height(&mut self, height: f64) {
        self.calls.push("set_height");
        self.bounds.height = height;
    }

    fn set_maximized(&mut self, maximized: bool) {
        self.calls.push("set_maximized");
        if maximized {
            self.restored.get_or_insert(self.bounds);
        } else if let Some(restored) = self.restored.take() {
            self.bounds = restored;
        }
    }
}

/// Widget that may or may not sit inside a window
#[derive(Debug)]
pub(crate) struct MockComponent {
    window: Option<MockWindow>,
}

impl MockComponent {
    pub(crate) fn attached(window: MockWindow) -> Self {
        Self {
            window: Some(window),
        }
    }

    pub(crate) fn detached() -> Self {
        Self { window: None }
    }
}

impl Component for MockComponent {
    type Window = MockWindow;

    fn owning_window(&mut self) -> Option<&mut MockWindow> {
        self.window.as_mut()
    }
}
