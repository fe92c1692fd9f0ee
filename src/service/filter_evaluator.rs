// Listing filter predicates. Each dimension is independent; an unset
// dimension passes every listing.
use crate::models::{
    filtermodel::{FilterCriteria, PriceRange},
    propertymodel::{Property, PropertyStatus, PropertyType},
};
use std::collections::BTreeSet;

/// True when `property` satisfies every active dimension of `criteria`.
pub fn matches(property: &Property, criteria: &FilterCriteria) -> bool {
    matches_search(property, criteria.search_query.as_deref())
        && matches_price(property, &criteria.price_range)
        && matches_type(property, &criteria.property_type)
        && matches_status(property, criteria.status)
        && matches_beds(property, criteria.beds)
        && matches_city(property, criteria.city.as_deref())
}

/// Order-preserving filter over a listing slice.
pub fn filter<'a>(properties: &'a [Property], criteria: &FilterCriteria) -> Vec<&'a Property> {
    properties
        .iter()
        .filter(|property| matches(property, criteria))
        .collect()
}

/// Case-insensitive substring match on title, address or city.
pub fn matches_search(property: &Property, query: Option<&str>) -> bool {
    let query = match query {
        Some(q) if !q.is_empty() => q.to_lowercase(),
        _ => return true,
    };

    [
        &property.title,
        &property.location.address,
        &property.location.city,
    ]
    .iter()
    .any(|field| field.to_lowercase().contains(&query))
}

/// Both bounds are inclusive. A NaN bound fails every comparison.
pub fn matches_price(property: &Property, range: &PriceRange) -> bool {
    let above_floor = range.min.map_or(true, |floor| property.price >= floor);
    let below_ceiling = range.max.map_or(true, |ceiling| property.price <= ceiling);
    above_floor && below_ceiling
}

pub fn matches_type(property: &Property, types: &BTreeSet<PropertyType>) -> bool {
    types.is_empty() || types.contains(&property.property_type)
}

pub fn matches_status(property: &Property, status: Option<PropertyStatus>) -> bool {
    status.map_or(true, |status| property.status == status)
}

pub fn matches_beds(property: &Property, min_beds: Option<u32>) -> bool {
    min_beds.map_or(true, |min| property.beds >= min)
}

/// Case-insensitive exact match. `Some("")` only matches an empty city.
pub fn matches_city(property: &Property, city: Option<&str>) -> bool {
    city.map_or(true, |city| property.location.city.to_lowercase() == city.to_lowercase())
}
