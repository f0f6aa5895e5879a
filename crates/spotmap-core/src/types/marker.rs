//! Marker description types shared by renderers and map widgets.

use serde::{Deserialize, Serialize};

use super::Coordinate;

/// Opaque handle to a marker placed on a [`MapView`](crate::MapView).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct MarkerHandle(pub u64);

/// Icon variant of a marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MarkerIcon {
    #[default]
    Default,
    /// Warning-colored icon for listings that are off the market.
    Warning,
}

/// Everything a map widget needs to place one marker.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarkerSpec {
    pub position: Coordinate,
    pub icon: MarkerIcon,
    /// Popup label, shown in bold.
    pub popup: String,
}
