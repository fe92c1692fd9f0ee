// Shared builders for unit tests.
use chrono::{TimeZone, Utc};

use super::propertymodel::{Coordinates, Location, Property, PropertyStatus, PropertyType};

pub fn property(id: &str, title: &str, price: f64) -> Property {
    let timestamp = Utc.with_ymd_and_hms(2024, 3, 14, 15, 30, 0).unwrap();

    Property {
        id: id.to_string(),
        title: title.to_string(),
        description: format!("{} description", title),
        price,
        property_type: PropertyType::Apartment,
        status: PropertyStatus::ForSale,
        beds: 2,
        baths: 1,
        sqft: 900,
        year_built: 2020,
        location: Location {
            address: "456 Downtown Ave".to_string(),
            city: "Miami".to_string(),
            state: "FL".to_string(),
            zip_code: "33131".to_string(),
            coordinates: Coordinates { lat: 25.7743, lng: -80.1977 },
        },
        images: vec![],
        features: vec![],
        broker: None,
        created_at: timestamp,
        updated_at: timestamp,
    }
}

pub fn in_city(mut property: Property, address: &str, city: &str) -> Property {
    property.location.address = address.to_string();
    property.location.city = city.to_string();
    property
}

pub fn with_kind(mut property: Property, kind: PropertyType, status: PropertyStatus, beds: u32) -> Property {
    property.property_type = kind;
    property.status = status;
    property.beds = beds;
    property
}
