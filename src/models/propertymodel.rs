use std::{fmt, str::FromStr};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Property types offered by the filter panel.
///
/// `land` and `commercial` are first-class values so every type the panel
/// can select is also a type a listing can carry.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "lowercase")]
pub enum PropertyType {
    House,
    Apartment,
    Land,
    Commercial,
    Condo,
    Townhouse,
}

impl PropertyType {
    /// Panel order.
    pub const ALL: [PropertyType; 6] = [
        PropertyType::House,
        PropertyType::Apartment,
        PropertyType::Land,
        PropertyType::Commercial,
        PropertyType::Condo,
        PropertyType::Townhouse,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            PropertyType::House => "house",
            PropertyType::Apartment => "apartment",
            PropertyType::Land => "land",
            PropertyType::Commercial => "commercial",
            PropertyType::Condo => "condo",
            PropertyType::Townhouse => "townhouse",
        }
    }

    /// Translation key under `filters.types`.
    pub fn label_key(&self) -> String {
        format!("filters.types.{}", self.as_str())
    }
}

impl fmt::Display for PropertyType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PropertyType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PropertyType::ALL
            .into_iter()
            .find(|t| t.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| format!("Unknown property type: {}", s))
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "kebab-case")]
pub enum PropertyStatus {
    ForSale,
    ForRent,
    Sold,
    Rented,
}

impl PropertyStatus {
    pub const ALL: [PropertyStatus; 4] = [
        PropertyStatus::ForSale,
        PropertyStatus::ForRent,
        PropertyStatus::Sold,
        PropertyStatus::Rented,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            PropertyStatus::ForSale => "for-sale",
            PropertyStatus::ForRent => "for-rent",
            PropertyStatus::Sold => "sold",
            PropertyStatus::Rented => "rented",
        }
    }

    /// Translation key for the card badge.
    pub fn label_key(&self) -> &'static str {
        match self {
            PropertyStatus::ForSale => "property.forSale",
            PropertyStatus::ForRent => "property.forRent",
            PropertyStatus::Sold => "property.sold",
            PropertyStatus::Rented => "property.rented",
        }
    }
}

impl fmt::Display for PropertyStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PropertyStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PropertyStatus::ALL
            .into_iter()
            .find(|status| status.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| format!("Unknown property status: {}", s))
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Validate)]
pub struct Coordinates {
    #[validate(range(min = -90.0, max = 90.0, message = "Latitude must be between -90 and 90"))]
    pub lat: f64,
    #[validate(range(min = -180.0, max = 180.0, message = "Longitude must be between -180 and 180"))]
    pub lng: f64,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Validate)]
#[serde(rename_all = "camelCase")]
pub struct Location {
    pub address: String,
    #[validate(length(min = 1, message = "City is required"))]
    pub city: String,
    pub state: String,
    pub zip_code: String,
    #[validate]
    pub coordinates: Coordinates,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Broker {
    pub name: String,
    pub phone: String,
    pub email: String,
    pub image: String,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Validate)]
#[serde(rename_all = "camelCase")]
pub struct Property {
    #[validate(length(min = 1, message = "Property id is required"))]
    pub id: String,

    // Basic property info
    #[validate(length(min = 1, message = "Title is required"))]
    pub title: String,
    pub description: String,
    #[validate(range(min = 0.0, message = "Price cannot be negative"))]
    pub price: f64,
    #[serde(rename = "type")]
    pub property_type: PropertyType,
    pub status: PropertyStatus,

    // Property Specifications
    pub beds: u32,
    pub baths: u32,
    pub sqft: u32,
    pub year_built: u32,

    #[validate]
    pub location: Location,

    pub images: Vec<String>,
    pub features: Vec<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub broker: Option<Broker>,

    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
