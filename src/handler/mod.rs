pub mod listings;
pub mod locales;
