pub mod error;
pub mod filter_evaluator;
pub mod listings_client;
pub mod map_view;
pub mod property_store;
