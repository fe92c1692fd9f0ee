use std::sync::Arc;

use axum::{
    extract::Path,
    http::header,
    response::IntoResponse,
    routing::get,
    Extension, Json, Router,
};
use serde::Serialize;

use crate::{
    error::HttpError,
    utils::i18n::{Locale, TextDirection},
    AppState,
};

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LocaleDto {
    pub code: &'static str,
    pub name: &'static str,
    pub dir: &'static str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LocalesDto {
    pub default_locale: &'static str,
    pub locales: Vec<LocaleDto>,
}

impl From<Locale> for LocaleDto {
    fn from(locale: Locale) -> Self {
        LocaleDto {
            code: locale.code(),
            name: locale.display_name(),
            dir: match locale.direction() {
                TextDirection::Ltr => "ltr",
                TextDirection::Rtl => "rtl",
            },
        }
    }
}

/// Translation resources, served under the same paths the site loads them
/// from.
pub fn locales_handler() -> Router {
    Router::new()
        .route("/", get(get_locales))
        .route("/:locale/common.json", get(get_catalog))
}

pub async fn get_locales(
    Extension(app_state): Extension<Arc<AppState>>,
) -> Result<impl IntoResponse, HttpError> {
    Ok(Json(LocalesDto {
        default_locale: app_state.env.default_locale.code(),
        locales: Locale::ALL.into_iter().map(LocaleDto::from).collect(),
    }))
}

pub async fn get_catalog(Path(locale): Path<String>) -> Result<impl IntoResponse, HttpError> {
    let locale: Locale = locale.parse().map_err(|e: String| {
        tracing::warn!("{}", e);
        HttpError::not_found("Locale not found")
    })?;

    Ok((
        [(header::CONTENT_TYPE, "application/json")],
        locale.raw_catalog(),
    ))
}
