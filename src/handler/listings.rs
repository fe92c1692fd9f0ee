use std::sync::Arc;

use axum::{
    extract::Path,
    http::{header, Method, StatusCode},
    response::IntoResponse,
    routing::get,
    Extension, Json, Router,
};

use crate::{db::listingdb::ListingExt, error::HttpError, AppState};

pub fn listings_handler() -> Router {
    Router::new()
        .route(
            "/listings",
            get(get_listings)
                .head(method_not_allowed)
                .fallback(method_not_allowed),
        )
        .route(
            "/listings/:listing_id",
            get(get_listing_by_id)
                .head(method_not_allowed)
                .fallback(method_not_allowed),
        )
}

pub async fn get_listings(
    Extension(app_state): Extension<Arc<AppState>>,
) -> Result<impl IntoResponse, HttpError> {
    let listings = app_state.catalog.get_listings().await;

    simulate_latency(&app_state).await;

    Ok(Json(listings))
}

pub async fn get_listing_by_id(
    Path(listing_id): Path<String>,
    Extension(app_state): Extension<Arc<AppState>>,
) -> Result<impl IntoResponse, HttpError> {
    let listing = app_state
        .catalog
        .get_listing_by_id(&listing_id)
        .await
        .ok_or_else(|| HttpError::not_found("Property not found"))?;

    simulate_latency(&app_state).await;

    Ok(Json(listing))
}

/// Listings are GET-only. HEAD is routed here explicitly since `get`
/// would otherwise answer it.
pub async fn method_not_allowed(method: Method) -> impl IntoResponse {
    tracing::warn!("Rejected {} on listings route", method);
    (
        StatusCode::METHOD_NOT_ALLOWED,
        [(header::ALLOW, "GET")],
        format!("Method {} Not Allowed", method),
    )
}

async fn simulate_latency(app_state: &AppState) {
    if let Some(delay) = app_state.env.simulated_latency() {
        tokio::time::sleep(delay).await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        config::Config,
        db::{dataset::Dataset, db::Catalog},
        error::ErrorResponse,
        models::propertymodel::Property,
        routes::create_router,
    };
    use axum::{
        body::{to_bytes, Body},
        http::Request,
    };
    use tower::ServiceExt;

    fn app() -> Router {
        let catalog = Catalog::new(Dataset::Us.load().unwrap());
        create_router(Arc::new(AppState::new(catalog, Config::default())))
    }

    async fn send(method: Method, uri: &str) -> (StatusCode, axum::http::HeaderMap, Vec<u8>) {
        let response = app()
            .oneshot(
                Request::builder()
                    .method(method)
                    .uri(uri)
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        let status = response.status();
        let headers = response.headers().clone();
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, headers, body.to_vec())
    }

    #[tokio::test]
    async fn test_list_returns_every_listing_in_order() {
        let (status, _, body) = send(Method::GET, "/api/listings").await;
        assert_eq!(status, StatusCode::OK);

        let listings: Vec<Property> = serde_json::from_slice(&body).unwrap();
        let ids: Vec<&str> = listings.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["1", "2", "3"]);
    }

    #[tokio::test]
    async fn test_detail_uses_camel_case_shape() {
        let (status, _, body) = send(Method::GET, "/api/listings/2").await;
        assert_eq!(status, StatusCode::OK);

        let value: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(value["id"], "2");
        assert_eq!(value["type"], "apartment");
        assert_eq!(value["status"], "for-rent");
        assert_eq!(value["location"]["zipCode"], "33131");
        assert_eq!(value["createdAt"], "2024-03-14T15:30:00Z");
    }

    #[tokio::test]
    async fn test_missing_listing_is_404_with_message() {
        let (status, _, body) = send(Method::GET, "/api/listings/does-not-exist").await;
        assert_eq!(status, StatusCode::NOT_FOUND);

        let error: ErrorResponse = serde_json::from_slice(&body).unwrap();
        assert_eq!(error.message, "Property not found");
        assert_eq!(String::from_utf8(body).unwrap(), r#"{"message":"Property not found"}"#);
    }

    #[tokio::test]
    async fn test_non_get_methods_are_405() {
        for (method, uri) in [
            (Method::POST, "/api/listings"),
            (Method::DELETE, "/api/listings/1"),
            (Method::PUT, "/api/listings/does-not-exist"),
        ] {
            let (status, headers, body) = send(method.clone(), uri).await;
            assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
            assert_eq!(headers.get(header::ALLOW).unwrap(), "GET");
            assert_eq!(
                String::from_utf8(body).unwrap(),
                format!("Method {} Not Allowed", method)
            );
        }
    }

    #[tokio::test]
    async fn test_head_is_405() {
        for uri in ["/api/listings", "/api/listings/1"] {
            let (status, headers, body) = send(Method::HEAD, uri).await;
            assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
            assert_eq!(headers.get(header::ALLOW).unwrap(), "GET");
            assert!(body.is_empty());
        }
    }

    #[tokio::test]
    async fn test_health_check() {
        let (status, _, body) = send(Method::GET, "/health").await;
        assert_eq!(status, StatusCode::OK);

        let value: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(value["status"], "ok");
    }
}
