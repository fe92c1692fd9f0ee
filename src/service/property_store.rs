use crate::{
    models::{
        filtermodel::{FilterCriteria, FilterUpdate},
        propertymodel::{Property, PropertyType},
    },
    service::filter_evaluator,
};

/// Listings loaded for one session together with the current filter
/// selection. Reads are computed on demand from the two.
#[derive(Debug, Clone, Default)]
pub struct PropertyStore {
    properties: Vec<Property>,
    filters: FilterCriteria,
}

impl PropertyStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_properties(properties: Vec<Property>) -> Self {
        Self {
            properties,
            filters: FilterCriteria::default(),
        }
    }

    /// Replaces the held list wholesale.
    pub fn set_properties(&mut self, properties: Vec<Property>) {
        tracing::debug!("Store loaded with {} properties", properties.len());
        self.properties = properties;
    }

    /// Shallow-merges `update` into the current criteria.
    pub fn set_filters(&mut self, update: FilterUpdate) {
        update.apply_to(&mut self.filters);
        tracing::debug!("Filters updated: {} active", self.filters.active_dimensions());
    }

    pub fn reset_filters(&mut self) {
        self.filters = FilterCriteria::default();
    }

    /// Adds the type when absent, removes it when present.
    pub fn toggle_property_type(&mut self, property_type: PropertyType) {
        if !self.filters.property_type.remove(&property_type) {
            self.filters.property_type.insert(property_type);
        }
    }

    /// Selecting the active minimum again clears it.
    pub fn toggle_beds(&mut self, beds: u32) {
        self.filters.beds = match self.filters.beds {
            Some(current) if current == beds => None,
            _ => Some(beds),
        };
    }

    pub fn properties(&self) -> &[Property] {
        &self.properties
    }

    pub fn filters(&self) -> &FilterCriteria {
        &self.filters
    }

    pub fn find(&self, id: &str) -> Option<&Property> {
        self.properties.iter().find(|p| p.id == id)
    }

    /// Listings passing every active filter, in load order.
    pub fn filtered_properties(&self) -> Vec<&Property> {
        filter_evaluator::filter(&self.properties, &self.filters)
    }
}
