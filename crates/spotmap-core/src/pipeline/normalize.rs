//! Record normalization: display title and stored coordinates.

use crate::record::{Property, Record};

/// Display name of a record without a usable title.
pub const NO_TITLE: &str = "No title";

/// Name of the `rich_text` property holding a stored latitude.
pub const LATITUDE_PROPERTY: &str = "Latitude";

/// Name of the `rich_text` property holding a stored longitude.
pub const LONGITUDE_PROPERTY: &str = "Longitude";

/// Coordinate text stored on a record. Each side is independently optional.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RawCoordinates<'a> {
    pub lat: Option<&'a str>,
    pub lon: Option<&'a str>,
}

impl<'a> RawCoordinates<'a> {
    /// Both sides, when both are present.
    pub fn both(&self) -> Option<(&'a str, &'a str)> {
        self.lat.zip(self.lon)
    }
}

/// The record's display name: the first segment of its `title`-typed
/// property, or [`NO_TITLE`].
///
/// The title property is found by type because its name is user-defined.
pub fn display_address(record: &Record) -> String {
    record
        .properties
        .values()
        .find(|p| matches!(p, Property::Title { .. }))
        .and_then(Property::first_text)
        .filter(|t| !t.is_empty())
        .unwrap_or(NO_TITLE)
        .to_string()
}

/// Stored `Latitude` / `Longitude` text. Empty strings count as absent.
pub fn raw_coordinates(record: &Record) -> RawCoordinates<'_> {
    let read = |name: &str| record.rich_text(name).filter(|t| !t.trim().is_empty());
    RawCoordinates {
        lat: read(LATITUDE_PROPERTY),
        lon: read(LONGITUDE_PROPERTY),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn title_is_display_address() {
        let record = Record::new("r1").with("Place", Property::title("Lakeview Cafe"));
        assert_eq!(display_address(&record), "Lakeview Cafe");
    }

    #[test]
    fn missing_title_falls_back() {
        let record = Record::new("r1").with("Notes", Property::rich_text("not a title"));
        assert_eq!(display_address(&record), NO_TITLE);
    }

    #[test]
    fn empty_title_falls_back() {
        let record = Record::new("r1").with("Name", Property::Title { title: vec![] });
        assert_eq!(display_address(&record), NO_TITLE);

        let record = Record::new("r2").with("Name", Property::title(""));
        assert_eq!(display_address(&record), NO_TITLE);
    }

    #[test]
    fn reads_stored_coordinates_independently() {
        let record = Record::new("r1")
            .with(LATITUDE_PROPERTY, Property::rich_text("37.7"))
            .with(LONGITUDE_PROPERTY, Property::rich_text("  "));
        let raw = raw_coordinates(&record);
        assert_eq!(raw.lat, Some("37.7"));
        assert_eq!(raw.lon, None);
        assert_eq!(raw.both(), None);
    }

    #[test]
    fn ignores_coordinates_of_other_types() {
        let record = Record::new("r1")
            .with(LATITUDE_PROPERTY, Property::number(37.7))
            .with(LONGITUDE_PROPERTY, Property::number(-122.4));
        assert_eq!(raw_coordinates(&record), RawCoordinates::default());
    }
}
