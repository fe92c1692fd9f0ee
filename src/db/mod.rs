pub mod dataset;
pub mod db;
pub mod listingdb;
