use reqwest::StatusCode;

use crate::{
    models::propertymodel::Property,
    service::{error::ServiceError, property_store::PropertyStore},
};

/// HTTP client for the listings API. One fetch per call, no retries.
#[derive(Debug, Clone)]
pub struct ListingsClient {
    http: reqwest::Client,
    base_url: String,
}

impl ListingsClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(reqwest::Client::new(), base_url)
    }

    pub fn with_client(http: reqwest::Client, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { http, base_url }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub async fn fetch_listings(&self) -> Result<Vec<Property>, ServiceError> {
        let url = format!("{}/api/listings", self.base_url);
        let response = self.http.get(&url).send().await?;

        if !response.status().is_success() {
            return Err(ServiceError::UnexpectedStatus {
                status: response.status().as_u16(),
                url,
            });
        }

        let listings: Vec<Property> = response.json().await?;
        tracing::debug!("Fetched {} listings from {}", listings.len(), url);
        Ok(listings)
    }

    pub async fn fetch_listing(&self, listing_id: &str) -> Result<Property, ServiceError> {
        let url = format!(
            "{}/api/listings/{}",
            self.base_url,
            urlencoding::encode(listing_id)
        );
        let response = self.http.get(&url).send().await?;

        match response.status() {
            StatusCode::NOT_FOUND => Err(ServiceError::PropertyNotFound(listing_id.to_string())),
            status if !status.is_success() => Err(ServiceError::UnexpectedStatus {
                status: status.as_u16(),
                url,
            }),
            _ => Ok(response.json().await?),
        }
    }
}

/// Fetches every listing once and hands the list to the store. Returns the
/// number of listings loaded.
pub async fn load_into(
    store: &mut PropertyStore,
    client: &ListingsClient,
) -> Result<usize, ServiceError> {
    let listings = client.fetch_listings().await?;
    let count = listings.len();
    store.set_properties(listings);
    Ok(count)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        config::Config,
        db::{dataset::Dataset, db::Catalog},
        models::{filtermodel::FilterUpdate, propertymodel::PropertyType},
        routes::create_router,
        AppState,
    };
    use std::sync::Arc;

    async fn spawn_server(dataset: Dataset) -> String {
        let catalog = Catalog::new(dataset.load().unwrap());
        let app = create_router(Arc::new(AppState::new(catalog, Config::default())));

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        format!("http://{}/", addr)
    }

    #[tokio::test]
    async fn test_load_into_store_then_filter() {
        let client = ListingsClient::new(spawn_server(Dataset::Dz).await);
        let mut store = PropertyStore::new();

        let count = load_into(&mut store, &client).await.unwrap();
        assert_eq!(count, 3);

        store.set_filters(FilterUpdate::new().property_types([PropertyType::Land]));
        let result = store.filtered_properties();
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].location.city, "Tipaza");
    }

    #[tokio::test]
    async fn test_fetch_single_listing() {
        let client = ListingsClient::new(spawn_server(Dataset::Us).await);

        let listing = client.fetch_listing("1").await.unwrap();
        assert_eq!(listing.title, "Luxury Villa with Ocean View");

        let missing = client.fetch_listing("does not exist").await.unwrap_err();
        assert!(missing.is_not_found());
    }

    #[tokio::test]
    async fn test_unreachable_server_is_an_http_error() {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let client = ListingsClient::new(format!("http://{}", addr));
        let err = client.fetch_listings().await.unwrap_err();
        assert!(matches!(err, ServiceError::Http(_)));
    }
}
