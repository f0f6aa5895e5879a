//! Sidebar list rendering.

use serde::Serialize;

use crate::types::{Spot, SpotId};

use super::RenderConfig;

/// One clickable sidebar row.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SidebarEntry {
    /// The spot (and therefore marker) this row focuses.
    pub spot: SpotId,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub area: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
    pub off_market: bool,
}

/// One entry per spot, in spot order. Optional fields are present only when
/// the record carries the property with a value.
pub fn sidebar_entries(spots: &[Spot], config: &RenderConfig) -> Vec<SidebarEntry> {
    spots
        .iter()
        .map(|spot| {
            let record = &spot.record;
            SidebarEntry {
                spot: spot.id(),
                title: spot.display_address.clone(),
                link: record.url(&config.link_property).map(str::to_string),
                area: record.number(&config.area_property),
                price: record.number(&config.price_property),
                off_market: config.is_off_market(record),
            }
        })
        .collect()
}
