pub mod currency;
pub mod i18n;
