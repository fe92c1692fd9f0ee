// config.rs
use std::{str::FromStr, time::Duration};

use crate::{
    db::dataset::{self, Dataset, DatasetError},
    models::propertymodel::Property,
    utils::i18n::Locale,
};

#[derive(Debug, Clone)]
pub struct Config {
    pub app_url: String,
    pub port: u16,
    // Listings source
    pub dataset: Dataset,
    pub listings_path: Option<String>,
    pub default_locale: Locale,
    pub allowed_origins: Vec<String>,
    // Artificial response delay; 0 disables it
    pub simulated_latency_ms: u64,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            app_url: "http://localhost:8000".to_string(),
            port: 8000,
            dataset: Dataset::default(),
            listings_path: None,
            default_locale: Locale::default(),
            allowed_origins: vec![
                "http://localhost:3000".to_string(),
                "http://localhost:5173".to_string(),
                "http://localhost:8000".to_string(),
            ],
            simulated_latency_ms: 0,
        }
    }
}

impl Config {
    pub fn init() -> Config {
        Config::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from any variable source. Unset variables take
    /// their default; unparsable ones are logged and ignored.
    pub fn from_lookup<F>(lookup: F) -> Config
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Config::default();

        let app_url = lookup("APP_URL").unwrap_or(defaults.app_url);
        let port = parse_or(&lookup, "PORT", defaults.port);
        let dataset = parse_or(&lookup, "LISTINGS_DATASET", defaults.dataset);
        let listings_path = lookup("LISTINGS_PATH").filter(|p| !p.trim().is_empty());
        let default_locale = parse_or(&lookup, "DEFAULT_LOCALE", dataset.locale());
        let simulated_latency_ms = parse_or(&lookup, "SIMULATED_LATENCY_MS", defaults.simulated_latency_ms);

        let allowed_origins = lookup("ALLOWED_ORIGINS")
            .map(|origins| {
                origins
                    .split(',')
                    .map(str::trim)
                    .filter(|o| !o.is_empty())
                    .map(String::from)
                    .collect()
            })
            .unwrap_or(defaults.allowed_origins);

        Config {
            app_url,
            port,
            dataset,
            listings_path,
            default_locale,
            allowed_origins,
            simulated_latency_ms,
        }
    }

    pub fn simulated_latency(&self) -> Option<Duration> {
        (self.simulated_latency_ms > 0).then(|| Duration::from_millis(self.simulated_latency_ms))
    }

    /// Listings the server should expose: the file at `LISTINGS_PATH` when
    /// set, otherwise the embedded dataset.
    pub fn load_listings(&self) -> Result<Vec<Property>, DatasetError> {
        match &self.listings_path {
            Some(path) => dataset::load_file(path),
            None => self.dataset.load(),
        }
    }
}

fn parse_or<F, T>(lookup: &F, key: &str, default: T) -> T
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
{
    match lookup(key) {
        Some(raw) => raw.trim().parse().unwrap_or_else(|_| {
            tracing::warn!("Ignoring invalid {}={:?}, using default", key, raw);
            default
        }),
        None => default,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(pairs: &[(&str, &str)]) -> Config {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = config_from(&[]);
        assert_eq!(config.port, 8000);
        assert_eq!(config.dataset, Dataset::Us);
        assert_eq!(config.default_locale, Locale::En);
        assert!(config.listings_path.is_none());
        assert!(config.simulated_latency().is_none());
        assert_eq!(config.allowed_origins.len(), 3);
    }

    #[test]
    fn test_overrides() {
        let config = config_from(&[
            ("PORT", "9090"),
            ("LISTINGS_DATASET", "dz"),
            ("ALLOWED_ORIGINS", "https://a.example, ,https://b.example"),
            ("SIMULATED_LATENCY_MS", "500"),
        ]);

        assert_eq!(config.port, 9090);
        assert_eq!(config.dataset, Dataset::Dz);
        assert_eq!(config.default_locale, Locale::Fr);
        assert_eq!(config.allowed_origins, vec!["https://a.example", "https://b.example"]);
        assert_eq!(config.simulated_latency(), Some(Duration::from_millis(500)));
    }

    #[test]
    fn test_invalid_values_fall_back() {
        let config = config_from(&[
            ("PORT", "not-a-port"),
            ("LISTINGS_DATASET", "mars"),
            ("DEFAULT_LOCALE", "de"),
            ("LISTINGS_PATH", "  "),
        ]);

        assert_eq!(config.port, 8000);
        assert_eq!(config.dataset, Dataset::Us);
        assert_eq!(config.default_locale, Locale::En);
        assert!(config.listings_path.is_none());
    }

    #[test]
    fn test_load_listings_from_dataset() {
        let config = config_from(&[("LISTINGS_DATASET", "dz")]);
        let listings = config.load_listings().unwrap();
        assert_eq!(listings[0].location.city, "Alger");
    }
}
