//! Rendering configuration.

use std::time::Duration;

use crate::record::Record;
use crate::types::Padding;

/// Styling and viewport rules shared by the marker and sidebar renderers.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderConfig {
    /// `select` property carrying the listing status.
    pub status_property: String,
    /// Status value (case-sensitive) that switches to the warning style.
    pub off_market: String,
    /// `url` property shown in the sidebar.
    pub link_property: String,
    /// `number` property with the floor area, shown in the sidebar.
    pub area_property: String,
    /// `number` property with the price, shown in the sidebar.
    pub price_property: String,
    pub fit_padding: Padding,
    /// Zoom used when focusing a single marker.
    pub focus_zoom: u8,
    /// Delay before resizing and fitting, letting layout settle.
    pub settle_delay: Duration,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            status_property: "Status".to_string(),
            off_market: "off market".to_string(),
            link_property: "Link".to_string(),
            area_property: "Sqft".to_string(),
            price_property: "Price".to_string(),
            fit_padding: Padding::uniform(20),
            focus_zoom: 16,
            settle_delay: Duration::from_millis(100),
        }
    }
}

impl RenderConfig {
    /// True if the record's status marks it as off the market.
    pub fn is_off_market(&self, record: &Record) -> bool {
        record.select(&self.status_property) == Some(self.off_market.as_str())
    }
}
