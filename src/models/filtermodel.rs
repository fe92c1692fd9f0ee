use std::collections::BTreeSet;

use super::propertymodel::{PropertyStatus, PropertyType};

/// Inclusive price bounds; either side may be unset.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PriceRange {
    pub min: Option<f64>,
    pub max: Option<f64>,
}

impl PriceRange {
    pub fn new(min: Option<f64>, max: Option<f64>) -> Self {
        Self { min, max }
    }

    pub fn is_unbounded(&self) -> bool {
        self.min.is_none() && self.max.is_none()
    }
}

/// Current filter selection. Every field is independently optional and an
/// unset field never excludes a listing.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterCriteria {
    pub search_query: Option<String>,
    pub price_range: PriceRange,
    pub property_type: BTreeSet<PropertyType>,
    pub status: Option<PropertyStatus>,
    pub beds: Option<u32>,
    pub city: Option<String>,
}

impl FilterCriteria {
    /// True when no dimension is constrained.
    pub fn is_empty(&self) -> bool {
        self.active_dimensions() == 0
    }

    pub fn active_dimensions(&self) -> usize {
        [
            self.search_query.as_deref().is_some_and(|q| !q.is_empty()),
            self.price_range.min.is_some(),
            self.price_range.max.is_some(),
            !self.property_type.is_empty(),
            self.status.is_some(),
            self.beds.is_some(),
            self.city.is_some(),
        ]
        .into_iter()
        .filter(|active| *active)
        .count()
    }
}

/// One field of a partial update.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum Patch<T> {
    #[default]
    Keep,
    Clear,
    Set(T),
}

impl<T> Patch<T> {
    pub fn apply(self, slot: &mut Option<T>) {
        match self {
            Patch::Keep => {}
            Patch::Clear => *slot = None,
            Patch::Set(value) => *slot = Some(value),
        }
    }

    pub fn is_keep(&self) -> bool {
        matches!(self, Patch::Keep)
    }
}

/// Partial update merged into [`FilterCriteria`] by the store. Fields left
/// at their default are not touched.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterUpdate {
    pub search_query: Patch<String>,
    pub price_range: Option<PriceRange>,
    pub property_type: Option<BTreeSet<PropertyType>>,
    pub status: Patch<PropertyStatus>,
    pub beds: Patch<u32>,
    pub city: Patch<String>,
}

impl FilterUpdate {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn search(mut self, query: impl Into<String>) -> Self {
        self.search_query = Patch::Set(query.into());
        self
    }

    pub fn clear_search(mut self) -> Self {
        self.search_query = Patch::Clear;
        self
    }

    pub fn price_range(mut self, min: Option<f64>, max: Option<f64>) -> Self {
        self.price_range = Some(PriceRange::new(min, max));
        self
    }

    pub fn property_types(mut self, types: impl IntoIterator<Item = PropertyType>) -> Self {
        self.property_type = Some(types.into_iter().collect());
        self
    }

    pub fn status(mut self, status: PropertyStatus) -> Self {
        self.status = Patch::Set(status);
        self
    }

    pub fn clear_status(mut self) -> Self {
        self.status = Patch::Clear;
        self
    }

    pub fn beds(mut self, beds: u32) -> Self {
        self.beds = Patch::Set(beds);
        self
    }

    pub fn clear_beds(mut self) -> Self {
        self.beds = Patch::Clear;
        self
    }

    pub fn city(mut self, city: impl Into<String>) -> Self {
        self.city = Patch::Set(city.into());
        self
    }

    pub fn clear_city(mut self) -> Self {
        self.city = Patch::Clear;
        self
    }

    pub fn is_noop(&self) -> bool {
        self.search_query.is_keep()
            && self.price_range.is_none()
            && self.property_type.is_none()
            && self.status.is_keep()
            && self.beds.is_keep()
            && self.city.is_keep()
    }

    /// Shallow merge: only the fields carried by the update change.
    pub fn apply_to(self, criteria: &mut FilterCriteria) {
        self.search_query.apply(&mut criteria.search_query);
        if let Some(range) = self.price_range {
            criteria.price_range = range;
        }
        if let Some(types) = self.property_type {
            criteria.property_type = types;
        }
        self.status.apply(&mut criteria.status);
        self.beds.apply(&mut criteria.beds);
        self.city.apply(&mut criteria.city);
    }
}
