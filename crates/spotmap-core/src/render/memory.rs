//! Headless map widget.

use std::collections::BTreeMap;

use crate::traits::MapView;
use crate::types::{Bounds, Coordinate, MarkerHandle, MarkerSpec, Padding};

/// Center and zoom of a map.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub center: Coordinate,
    pub zoom: u8,
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            center: Coordinate {
                lat: 37.7749,
                lon: -122.4194,
            },
            zoom: 12,
        }
    }
}

const MAX_ZOOM: u8 = 18;

/// An in-memory [`MapView`] that records what a real widget would show.
///
/// Used by the CLI to export rendered markers and by tests to observe
/// rendering.
#[derive(Debug, Clone, Default)]
pub struct MemoryMap {
    markers: BTreeMap<MarkerHandle, MarkerSpec>,
    next_handle: u64,
    viewport: Viewport,
    open_popup: Option<MarkerHandle>,
    fitted: Option<(Bounds, Padding)>,
    size_invalidations: usize,
}

impl MemoryMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Placed markers, in placement order.
    pub fn markers(&self) -> impl Iterator<Item = (MarkerHandle, &MarkerSpec)> {
        self.markers.iter().map(|(h, m)| (*h, m))
    }

    pub fn marker(&self, handle: MarkerHandle) -> Option<&MarkerSpec> {
        self.markers.get(&handle)
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn open_popup_handle(&self) -> Option<MarkerHandle> {
        self.open_popup
    }

    /// Bounds and padding of the last fit.
    pub fn fitted(&self) -> Option<(Bounds, Padding)> {
        self.fitted
    }

    pub fn size_invalidations(&self) -> usize {
        self.size_invalidations
    }
}

// Largest web-mercator zoom at which `bounds` still spans less than a tile's
// worth of degrees.
fn zoom_for(bounds: &Bounds) -> u8 {
    let span = (bounds.north_east.lat - bounds.south_west.lat)
        .max(bounds.north_east.lon - bounds.south_west.lon);
    if span <= 0.0 {
        return MAX_ZOOM;
    }
    (360.0 / span).log2().floor().clamp(0.0, MAX_ZOOM as f64) as u8
}

impl MapView for MemoryMap {
    fn clear_markers(&mut self) {
        self.markers.clear();
        self.open_popup = None;
    }

    fn add_marker(&mut self, marker: MarkerSpec) -> MarkerHandle {
        self.next_handle += 1;
        let handle = MarkerHandle(self.next_handle);
        self.markers.insert(handle, marker);
        handle
    }

    fn marker_count(&self) -> usize {
        self.markers.len()
    }

    fn marker_bounds(&self) -> Option<Bounds> {
        Bounds::enclosing(self.markers.values().map(|m| m.position))
    }

    fn invalidate_size(&mut self) {
        self.size_invalidations += 1;
    }

    fn fit_bounds(&mut self, bounds: Bounds, padding: Padding) {
        self.viewport = Viewport {
            center: bounds.center(),
            zoom: zoom_for(&bounds),
        };
        self.fitted = Some((bounds, padding));
    }

    fn set_view(&mut self, center: Coordinate, zoom: u8) {
        self.viewport = Viewport {
            center,
            zoom: zoom.min(MAX_ZOOM),
        };
    }

    fn marker_position(&self, handle: MarkerHandle) -> Option<Coordinate> {
        self.markers.get(&handle).map(|m| m.position)
    }

    fn open_popup(&mut self, handle: MarkerHandle) -> bool {
        if self.markers.contains_key(&handle) {
            self.open_popup = Some(handle);
            true
        } else {
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::MarkerIcon;

    fn marker(lat: f64, lon: f64) -> MarkerSpec {
        MarkerSpec {
            position: Coordinate::new(lat, lon).unwrap(),
            icon: MarkerIcon::Default,
            popup: String::new(),
        }
    }

    #[test]
    fn handles_are_not_reused_after_clear() {
        let mut map = MemoryMap::new();
        let first = map.add_marker(marker(1.0, 1.0));
        map.clear_markers();
        let second = map.add_marker(marker(1.0, 1.0));

        assert_ne!(first, second);
        assert!(!map.open_popup(first));
        assert!(map.open_popup(second));
    }

    #[test]
    fn single_point_fits_at_max_zoom() {
        let mut map = MemoryMap::new();
        map.add_marker(marker(10.0, 20.0));
        let bounds = map.marker_bounds().unwrap();
        map.fit_bounds(bounds, Padding::uniform(20));

        assert_eq!(map.viewport().zoom, MAX_ZOOM);
        assert_eq!(map.viewport().center, Coordinate::new(10.0, 20.0).unwrap());
    }

    #[test]
    fn wide_bounds_zoom_out() {
        let bounds = Bounds::enclosing([
            Coordinate::new(-45.0, -90.0).unwrap(),
            Coordinate::new(45.0, 90.0).unwrap(),
        ])
        .unwrap();
        assert_eq!(zoom_for(&bounds), 1);
    }
}
