use std::{collections::HashSet, fs, path::Path, str::FromStr};

use thiserror::Error;
use validator::Validate;

use crate::{
    models::propertymodel::Property,
    service::map_view::MapProvider,
    utils::{currency::Currency, i18n::Locale},
};

const US_LISTINGS: &str = include_str!("../../data/listings_us.json");
const DZ_LISTINGS: &str = include_str!("../../data/listings_dz.json");

#[derive(Error, Debug)]
pub enum DatasetError {
    #[error("Failed to read listings file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed listings JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Listing {id} is invalid: {reason}")]
    Invalid { id: String, reason: String },

    #[error("Duplicate listing id {0}")]
    DuplicateId(String),
}

/// Embedded mock data sets. They are alternate configurations of the same
/// site, each paired with its own locale, currency and map widget.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Dataset {
    #[default]
    Us,
    Dz,
}

impl Dataset {
    pub fn code(&self) -> &'static str {
        match self {
            Dataset::Us => "us",
            Dataset::Dz => "dz",
        }
    }

    pub fn raw(&self) -> &'static str {
        match self {
            Dataset::Us => US_LISTINGS,
            Dataset::Dz => DZ_LISTINGS,
        }
    }

    pub fn currency(&self) -> Currency {
        match self {
            Dataset::Us => Currency::Usd,
            Dataset::Dz => Currency::Dzd,
        }
    }

    pub fn map_provider(&self) -> MapProvider {
        match self {
            Dataset::Us => MapProvider::Leaflet,
            Dataset::Dz => MapProvider::GoogleMaps,
        }
    }

    pub fn locale(&self) -> Locale {
        match self {
            Dataset::Us => Locale::En,
            Dataset::Dz => Locale::Fr,
        }
    }

    pub fn load(&self) -> Result<Vec<Property>, DatasetError> {
        parse_listings(self.raw())
    }
}

impl FromStr for Dataset {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "us" => Ok(Dataset::Us),
            "dz" => Ok(Dataset::Dz),
            other => Err(format!("Unknown dataset: {}", other)),
        }
    }
}

/// Parses a JSON array of listings, validating each record and rejecting
/// duplicate ids so detail lookups stay unambiguous.
pub fn parse_listings(raw: &str) -> Result<Vec<Property>, DatasetError> {
    let listings: Vec<Property> = serde_json::from_str(raw)?;
    let mut seen = HashSet::with_capacity(listings.len());

    for listing in &listings {
        listing.validate().map_err(|e| DatasetError::Invalid {
            id: listing.id.clone(),
            reason: e.to_string(),
        })?;

        if !seen.insert(listing.id.as_str()) {
            return Err(DatasetError::DuplicateId(listing.id.clone()));
        }
    }

    Ok(listings)
}

pub fn load_file(path: impl AsRef<Path>) -> Result<Vec<Property>, DatasetError> {
    let path = path.as_ref();
    let raw = fs::read_to_string(path).map_err(|source| DatasetError::Io {
        path: path.display().to_string(),
        source,
    })?;

    parse_listings(&raw)
}
