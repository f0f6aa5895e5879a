//! Marker rendering.

use tracing::{debug, trace};

use crate::traits::MapView;
use crate::types::{Bounds, MarkerHandle, MarkerIcon, MarkerSpec, Spot, SpotId};

use super::RenderConfig;

/// The marker for one spot.
pub fn marker_for(spot: &Spot, config: &RenderConfig) -> MarkerSpec {
    let icon = if config.is_off_market(&spot.record) {
        MarkerIcon::Warning
    } else {
        MarkerIcon::Default
    };

    MarkerSpec {
        position: spot.coordinate,
        icon,
        popup: spot.display_address.clone(),
    }
}

/// Replace every marker on `map` with one marker per spot.
///
/// Returns the handle of each spot's marker, in spot order.
pub fn place_markers<M: MapView + ?Sized>(
    map: &mut M,
    spots: &[Spot],
    config: &RenderConfig,
) -> Vec<(SpotId, MarkerHandle)> {
    map.clear_markers();

    let handles: Vec<_> = spots
        .iter()
        .map(|spot| {
            let handle = map.add_marker(marker_for(spot, config));
            trace!(spot = %spot.id(), ?handle, "Placed marker");
            (spot.id(), handle)
        })
        .collect();

    debug!(markers = handles.len(), "Markers placed");
    handles
}

/// Re-measure the map and fit it to its markers. The viewport is left alone
/// when there are no markers.
pub fn fit_viewport<M: MapView + ?Sized>(map: &mut M, config: &RenderConfig) -> Option<Bounds> {
    map.invalidate_size();

    let bounds = map.marker_bounds()?;
    map.fit_bounds(bounds, config.fit_padding);
    Some(bounds)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::{Property, Record};
    use crate::render::MemoryMap;
    use crate::types::Coordinate;

    fn spot(id: &str, lat: f64, lon: f64, status: Option<&str>) -> Spot {
        let mut record = Record::new(id).with("Name", Property::title(id));
        if let Some(status) = status {
            record = record.with("Status", Property::select(status));
        }
        Spot {
            record,
            display_address: id.to_string(),
            coordinate: Coordinate::new(lat, lon).unwrap(),
        }
    }

    #[test]
    fn off_market_uses_warning_icon() {
        let config = RenderConfig::default();
        assert_eq!(
            marker_for(&spot("a", 1.0, 1.0, Some("off market")), &config).icon,
            MarkerIcon::Warning
        );
        assert_eq!(
            marker_for(&spot("b", 1.0, 1.0, Some("for sale")), &config).icon,
            MarkerIcon::Default
        );
        assert_eq!(
            marker_for(&spot("c", 1.0, 1.0, None), &config).icon,
            MarkerIcon::Default
        );
    }

    #[test]
    fn popup_carries_display_address() {
        let marker = marker_for(&spot("Lakeview Cafe", 1.0, 2.0, None), &RenderConfig::default());
        assert_eq!(marker.popup, "Lakeview Cafe");
        assert_eq!(marker.position, Coordinate::new(1.0, 2.0).unwrap());
    }

    #[test]
    fn rendering_twice_replaces_markers() {
        let config = RenderConfig::default();
        let spots = vec![spot("a", 1.0, 1.0, None), spot("b", 2.0, 2.0, None)];
        let mut map = MemoryMap::new();

        place_markers(&mut map, &spots, &config);
        let handles = place_markers(&mut map, &spots, &config);

        assert_eq!(map.marker_count(), 2);
        assert_eq!(handles.len(), 2);
        assert_eq!(handles[0].0.as_str(), "a");
    }

    #[test]
    fn empty_map_keeps_viewport() {
        let mut map = MemoryMap::new();
        let before = map.viewport();

        assert!(fit_viewport(&mut map, &RenderConfig::default()).is_none());
        assert_eq!(map.viewport(), before);
        assert_eq!(map.size_invalidations(), 1);
    }

    #[test]
    fn fit_covers_all_markers() {
        let config = RenderConfig::default();
        let spots = vec![spot("a", 37.7, -122.4, None), spot("b", 34.0, -118.2, None)];
        let mut map = MemoryMap::new();
        place_markers(&mut map, &spots, &config);

        let bounds = fit_viewport(&mut map, &config).unwrap();
        assert!(bounds.contains(spots[0].coordinate));
        assert!(bounds.contains(spots[1].coordinate));
        assert_eq!(map.fitted(), Some((bounds, config.fit_padding)));
    }
}
