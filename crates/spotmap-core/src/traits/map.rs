//! Map widget trait.

use crate::types::{Bounds, Coordinate, MarkerHandle, MarkerSpec, Padding};

/// The capabilities of an interactive map the renderers drive.
///
/// A widget owns exactly one marker collection; handles stay valid until the
/// next [`clear_markers`](MapView::clear_markers).
pub trait MapView: Send {
    /// Remove every marker.
    fn clear_markers(&mut self);

    /// Place a marker and return its handle.
    fn add_marker(&mut self, marker: MarkerSpec) -> MarkerHandle;

    /// Number of markers currently placed.
    fn marker_count(&self) -> usize;

    /// Bounds of all placed markers, `None` when there are none.
    fn marker_bounds(&self) -> Option<Bounds>;

    /// Re-measure the container after a layout change.
    fn invalidate_size(&mut self);

    /// Move and zoom the viewport so `bounds` is visible inside `padding`.
    fn fit_bounds(&mut self, bounds: Bounds, padding: Padding);

    /// Center the viewport on `center` at `zoom`.
    fn set_view(&mut self, center: Coordinate, zoom: u8);

    /// Position of a placed marker.
    fn marker_position(&self, handle: MarkerHandle) -> Option<Coordinate>;

    /// Open the popup of a placed marker. Returns false for an unknown handle.
    fn open_popup(&mut self, handle: MarkerHandle) -> bool;
}
