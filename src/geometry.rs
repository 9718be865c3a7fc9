//! Window geometry persistence
//!
//! The store knows nothing about any UI toolkit. Hosts implement [`Window`]
//! for their window type (and [`Component`] for widgets that live inside
//! one), and the store reads or writes the five fixed geometry keys:
//! `x`, `y`, `width`, `height`, `isMaximized`.

use tracing::{debug, warn};

use crate::constants::geometry::{HEIGHT, IS_MAXIMIZED, WIDTH, X, Y};
use crate::error::StoreError;
use crate::store::PropertyStore;
use crate::types::{Geometry, StoredGeometry};

/// A top-level window whose placement can be read and changed
pub trait Window {
    fn x(&self) -> f64;
    fn y(&self) -> f64;
    fn width(&self) -> f64;
    fn height(&self) -> f64;
    fn is_maximized(&self) -> bool;

    fn set_x(&mut self, x: f64);
    fn set_y(&mut self, y: f64);
    fn set_width(&mut self, width: f64);
    fn set_height(&mut self, height: f64);
    fn set_maximized(&mut self, maximized: bool);
}

/// A UI element that can name the window containing it
pub trait Component {
    type Window: Window + ?Sized;

    /// `None` while the element isn't attached to a window
    fn owning_window(&mut self) -> Option<&mut Self::Window>;
}

impl PropertyStore {
    /// Record the window's placement under the geometry keys
    ///
    /// A maximized window is un-maximized first so the recorded bounds are
    /// the restored ones; `isMaximized` still records that it was maximized.
    /// The window is left un-maximized.
    pub fn capture_geometry<W: Window + ?Sized>(&mut self, window: &mut W) {
        let was_maximized = window.is_maximized();
        if was_maximized {
            window.set_maximized(false);
        }

        let geometry = Geometry {
            maximized: was_maximized,
            ..Geometry::from_window(&*window)
        };
        self.set_geometry(&geometry);
    }

    /// [`capture_geometry`](Self::capture_geometry) for the window owning `component`
    ///
    /// Returns `false`, leaving the store untouched, when the component has
    /// no window.
    pub fn capture_geometry_from_component<C: Component + ?Sized>(
        &mut self,
        component: &mut C,
    ) -> bool {
        match component.owning_window() {
            Some(window) => {
                self.capture_geometry(window);
                true
            }
            None => {
                warn!("Component is not attached to a window, geometry not captured");
                false
            }
        }
    }

    /// Restore the stored placement onto `window`
    ///
    /// Each key is applied only if present and well-formed; malformed values
    /// are reported to the sink and skipped. On a store with no geometry
    /// keys this does nothing.
    pub fn apply_geometry<W: Window + ?Sized>(&self, window: &mut W) {
        let stored = self.stored_geometry();
        debug!(?stored, "Applying stored geometry");
        stored.apply_to(window);
    }

    /// Write all five geometry keys
    pub fn set_geometry(&mut self, geometry: &Geometry) {
        self.set_property(X, format_coordinate(geometry.position.x));
        self.set_property(Y, format_coordinate(geometry.position.y));
        self.set_property(WIDTH, format_coordinate(geometry.size.width));
        self.set_property(HEIGHT, format_coordinate(geometry.size.height));
        self.set_property(IS_MAXIMIZED, geometry.maximized.to_string());
    }

    /// The geometry keys currently in the store, parsed
    pub fn stored_geometry(&self) -> StoredGeometry {
        StoredGeometry {
            x: self.parse_geometry_value(X, parse_coordinate),
            y: self.parse_geometry_value(Y, parse_coordinate),
            width: self.parse_geometry_value(WIDTH, parse_coordinate),
            height: self.parse_geometry_value(HEIGHT, parse_coordinate),
            maximized: self.parse_geometry_value(IS_MAXIMIZED, parse_flag),
        }
    }

    fn parse_geometry_value<T>(
        &self,
        key: &'static str,
        parse: fn(&str) -> Option<T>,
    ) -> Option<T> {
        let raw = self.get_property(key)?;
        let parsed = parse(raw);
        if parsed.is_none() {
            self.sink.report(&StoreError::InvalidValue {
                key,
                value: raw.to_string(),
            });
        }
        parsed
    }
}

/// Shortest round-trip form, always with a fraction or exponent (`100.0`, `1e20`)
fn format_coordinate(value: f64) -> String {
    format!("{value:?}")
}

fn parse_coordinate(raw: &str) -> Option<f64> {
    raw.trim().parse().ok()
}

fn parse_flag(raw: &str) -> Option<bool> {
    let raw = raw.trim();
    if raw.eq_ignore_ascii_case("true") {
        Some(true)
    } else if raw.eq_ignore_ascii_case("false") {
        Some(false)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use crate::testing::{MockComponent, MockWindow, RecordingSink};

    fn recording_store() -> (PropertyStore, Arc<RecordingSink>) {
        let sink = Arc::new(RecordingSink::default());
        (PropertyStore::with_sink("geometry.xml", sink.clone()), sink)
    }

    #[test]
    fn test_capture_maximized_window() {
        let mut store = PropertyStore::new("geometry.xml");
        let mut window = MockWindow::new(100.0, 200.0, 800.0, 600.0, true);

        store.capture_geometry(&mut window);

        assert_eq!(store.get_property("x"), Some("100.0"));
        assert_eq!(store.get_property("y"), Some("200.0"));
        assert_eq!(store.get_property("width"), Some("800.0"));
        assert_eq!(store.get_property("height"), Some("600.0"));
        assert_eq!(store.get_property("isMaximized"), Some("true"));
        assert!(!window.is_maximized(), "capture leaves the window un-maximized");
    }

    #[test]
    fn test_capture_records_restored_bounds() {
        let mut store = PropertyStore::new("geometry.xml");
        let mut window = MockWindow::new(40.0, 50.0, 640.0, 480.0, false);
        window.maximize_to(0.0, 0.0, 1920.0, 1080.0);

        store.capture_geometry(&mut window);

        assert_eq!(store.get_property("x"), Some("40.0"));
        assert_eq!(store.get_property("width"), Some("640.0"));
        assert_eq!(store.get_property("isMaximized"), Some("true"));
    }

    #[test]
    fn test_capture_normal_window() {
        let mut store = PropertyStore::new("geometry.xml");
        let mut window = MockWindow::new(-12.5, 3.25, 1024.0, 768.0, false);

        store.capture_geometry(&mut window);

        assert_eq!(store.get_property("x"), Some("-12.5"));
        assert_eq!(store.get_property("y"), Some("3.25"));
        assert_eq!(store.get_property("isMaximized"), Some("false"));
        assert!(!window.calls.contains(&"set_maximized"));
    }

    #[test]
    fn test_capture_from_component() {
        let mut store = PropertyStore::new("geometry.xml");
        let window = MockWindow::new(1.0, 2.0, 3.0, 4.0, false);
        let mut component = MockComponent::attached(window);

        assert!(store.capture_geometry_from_component(&mut component));
        assert_eq!(
            store.stored_geometry().complete(),
            Some(Geometry::new((1.0, 2.0), (3.0, 4.0), false))
        );
    }

    #[test]
    fn test_capture_from_detached_component() {
        let mut store = PropertyStore::new("geometry.xml");
        let mut component = MockComponent::detached();

        assert!(!store.capture_geometry_from_component(&mut component));
        assert!(store.properties().is_empty());
    }

    #[test]
    fn test_apply_only_width() {
        let mut store = PropertyStore::new("geometry.xml");
        store.set_property("width", "500.0");
        let mut window = MockWindow::new(10.0, 20.0, 30.0, 40.0, false);

        store.apply_geometry(&mut window);

        assert_eq!(window.width(), 500.0);
        assert_eq!(window.x(), 10.0);
        assert_eq!(window.y(), 20.0);
        assert_eq!(window.height(), 40.0);
        assert!(!window.is_maximized());
        assert_eq!(window.calls, vec!["set_width"]);
    }

    #[test]
    fn test_apply_full_record_maximizes_last() {
        let mut store = PropertyStore::new("geometry.xml");
        store.set_geometry(&Geometry::new((100.0, 200.0), (800.0, 600.0), true));
        let mut window = MockWindow::new(0.0, 0.0, 10.0, 10.0, false);

        store.apply_geometry(&mut window);

        assert!(window.is_maximized());
        assert_eq!(window.calls.last(), Some(&"set_maximized"));
        // the stored bounds are what the window returns to
        window.set_maximized(false);
        assert_eq!(
            Geometry::from_window(&window),
            Geometry::new((100.0, 200.0), (800.0, 600.0), false)
        );
    }

    #[test]
    fn test_apply_on_empty_store_is_noop() {
        let (store, sink) = recording_store();
        let mut window = MockWindow::new(1.0, 2.0, 3.0, 4.0, true);

        store.apply_geometry(&mut window);

        assert!(window.calls.is_empty());
        assert!(sink.is_empty());
    }

    #[test]
    fn test_apply_skips_malformed_values() {
        let (mut store, sink) = recording_store();
        store.set_property("x", "left");
        store.set_property("y", " 75.5 ");
        store.set_property("width", "");
        store.set_property("isMaximized", "yes");
        let mut window = MockWindow::new(1.0, 2.0, 3.0, 4.0, false);

        store.apply_geometry(&mut window);

        assert_eq!(window.x(), 1.0);
        assert_eq!(window.y(), 75.5);
        assert_eq!(window.width(), 3.0);
        assert!(!window.is_maximized());

        let reports = sink.messages();
        assert_eq!(reports.len(), 3);
        assert!(reports.iter().any(|r| r.contains("`x`") && r.contains("\"left\"")));
        assert!(reports.iter().any(|r| r.contains("`width`")));
        assert!(reports.iter().any(|r| r.contains("`isMaximized`")));
    }

    #[test]
    fn test_flag_parsing_ignores_case() {
        assert_eq!(parse_flag("TRUE"), Some(true));
        assert_eq!(parse_flag("False"), Some(false));
        assert_eq!(parse_flag("1"), None);
    }

    #[test]
    fn test_coordinate_format_reads_back() {
        for value in [0.0, -0.5, 100.0, 1920.0, 1e20, 123.456_789] {
            let formatted = format_coordinate(value);
            assert!(formatted.contains('.') || formatted.contains('e'), "{formatted}");
            assert_eq!(parse_coordinate(&formatted), Some(value));
        }
    }

    #[test]
    fn test_geometry_survives_a_file_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("window.xml");

        let mut store = PropertyStore::new(&path);
        let mut window = MockWindow::new(320.0, 180.0, 1280.0, 720.0, true);
        store.capture_geometry(&mut window);
        assert!(store.store(Some("window")));

        let mut restored = PropertyStore::new(&path);
        assert!(restored.load());
        let mut fresh = MockWindow::new(0.0, 0.0, 0.0, 0.0, false);
        restored.apply_geometry(&mut fresh);

        assert!(fresh.is_maximized());
        fresh.set_maximized(false);
        assert_eq!(
            Geometry::from_window(&fresh),
            Geometry::new((320.0, 180.0), (1280.0, 720.0), false)
        );
    }
}
