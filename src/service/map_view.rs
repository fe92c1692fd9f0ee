use crate::models::propertymodel::{Coordinates, Property};

/// Center used when there is nothing to show.
pub const DEFAULT_CENTER: Coordinates = Coordinates {
    lat: 40.7128,
    lng: -74.0060,
};

pub const DEFAULT_ZOOM: u8 = 13;

/// Map widget a dataset is configured for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MapProvider {
    Leaflet,
    GoogleMaps,
}

impl MapProvider {
    pub fn name(&self) -> &'static str {
        match self {
            MapProvider::Leaflet => "OpenStreetMap",
            MapProvider::GoogleMaps => "Google Maps",
        }
    }

    /// Link that opens the provider at the given point.
    pub fn link(&self, at: Coordinates) -> String {
        match self {
            MapProvider::Leaflet => format!(
                "https://www.openstreetmap.org/?mlat={lat}&mlon={lng}#map={zoom}/{lat}/{lng}",
                lat = at.lat,
                lng = at.lng,
                zoom = DEFAULT_ZOOM
            ),
            MapProvider::GoogleMaps => format!(
                "https://www.google.com/maps/@{},{},{}z",
                at.lat, at.lng, DEFAULT_ZOOM
            ),
        }
    }
}

/// Mean of the listings' coordinates, or [`DEFAULT_CENTER`] when empty.
pub fn map_center<'a, I>(properties: I) -> Coordinates
where
    I: IntoIterator<Item = &'a Property>,
{
    let (count, lat, lng) = properties.into_iter().fold((0usize, 0.0, 0.0), |(n, lat, lng), p| {
        (
            n + 1,
            lat + p.location.coordinates.lat,
            lng + p.location.coordinates.lng,
        )
    });

    if count == 0 {
        return DEFAULT_CENTER;
    }

    Coordinates {
        lat: lat / count as f64,
        lng: lng / count as f64,
    }
}
