// db/db.rs
use crate::models::propertymodel::Property;

/// Read-only listing catalog held by the API server. Built once at startup
/// and never mutated afterwards.
#[derive(Clone)]
pub struct Catalog {
    listings: Vec<Property>,
}

impl std::fmt::Debug for Catalog {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Catalog")
            .field("listings", &self.listings.len())
            .finish()
    }
}

impl Catalog {
    pub fn new(listings: Vec<Property>) -> Self {
        Catalog { listings }
    }

    pub fn len(&self) -> usize {
        self.listings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.listings.is_empty()
    }

    pub(crate) fn listings(&self) -> &[Property] {
        &self.listings
    }
}
