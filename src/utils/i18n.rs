// Locales and translation catalogs.
use std::{fmt, str::FromStr};

use serde_json::Value;

const EN_CATALOG: &str = include_str!("../../locales/en/common.json");
const FR_CATALOG: &str = include_str!("../../locales/fr/common.json");
const AR_CATALOG: &str = include_str!("../../locales/ar/common.json");

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Locale {
    #[default]
    En,
    Fr,
    Ar,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextDirection {
    Ltr,
    Rtl,
}

impl Locale {
    pub const ALL: [Locale; 3] = [Locale::En, Locale::Fr, Locale::Ar];

    pub fn code(&self) -> &'static str {
        match self {
            Locale::En => "en",
            Locale::Fr => "fr",
            Locale::Ar => "ar",
        }
    }

    /// Name shown in the language switcher.
    pub fn display_name(&self) -> &'static str {
        match self {
            Locale::En => "English",
            Locale::Fr => "Français",
            Locale::Ar => "العربية",
        }
    }

    pub fn direction(&self) -> TextDirection {
        match self {
            Locale::Ar => TextDirection::Rtl,
            _ => TextDirection::Ltr,
        }
    }

    /// Raw `common` namespace for this locale.
    pub fn raw_catalog(&self) -> &'static str {
        match self {
            Locale::En => EN_CATALOG,
            Locale::Fr => FR_CATALOG,
            Locale::Ar => AR_CATALOG,
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Locale {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Locale::ALL
            .into_iter()
            .find(|locale| locale.code().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| format!("Unsupported locale: {}", s))
    }
}

/// Looks up dotted keys (`filters.types.house`) in the active catalog,
/// falling back to English and then to the key itself.
#[derive(Debug, Clone)]
pub struct Translator {
    locale: Locale,
    catalog: Value,
    fallback: Value,
}

impl Translator {
    pub fn new(locale: Locale) -> Result<Self, serde_json::Error> {
        let catalog = serde_json::from_str(locale.raw_catalog())?;
        let fallback = serde_json::from_str(EN_CATALOG)?;

        Ok(Self {
            locale,
            catalog,
            fallback,
        })
    }

    pub fn locale(&self) -> Locale {
        self.locale
    }

    pub fn t(&self, key: &str) -> String {
        lookup(&self.catalog, key)
            .or_else(|| lookup(&self.fallback, key))
            .unwrap_or(key)
            .to_string()
    }
}

fn lookup<'a>(catalog: &'a Value, key: &str) -> Option<&'a str> {
    key.split('.')
        .try_fold(catalog, |node, segment| node.get(segment))
        .and_then(Value::as_str)
}
