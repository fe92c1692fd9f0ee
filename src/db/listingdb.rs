use async_trait::async_trait;

use crate::{db::db::Catalog, models::propertymodel::Property};

#[async_trait]
pub trait ListingExt {
    async fn get_listings(&self) -> Vec<Property>;

    async fn get_listing_by_id(&self, listing_id: &str) -> Option<Property>;
}

#[async_trait]
impl ListingExt for Catalog {
    async fn get_listings(&self) -> Vec<Property> {
        self.listings().to_vec()
    }

    async fn get_listing_by_id(&self, listing_id: &str) -> Option<Property> {
        let listing = self.listings().iter().find(|p| p.id == listing_id).cloned();
        if listing.is_none() {
            tracing::debug!("Listing lookup missed: {}", listing_id);
        }
        listing
    }
}
