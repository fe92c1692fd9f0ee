pub mod config;
pub mod db;
pub mod dtos;
pub mod error;
pub mod handler;
pub mod models;
pub mod routes;
pub mod service;
pub mod utils;

use std::sync::Arc;

use config::Config;
use db::db::Catalog;

#[derive(Debug, Clone)]
pub struct AppState {
    pub env: Config,
    pub catalog: Arc<Catalog>,
}

impl AppState {
    pub fn new(catalog: Catalog, config: Config) -> Self {
        Self {
            env: config,
            catalog: Arc::new(catalog),
        }
    }
}
