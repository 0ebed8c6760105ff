//! paapi-search - Amazon PA-API 5.0 signed product search
//!
//! A SigV4-signing client for the Product Advertising API SearchItems
//! operation, with a paginating orchestrator that deduplicates and
//! price-sorts results, plus a static price-page generator.

pub mod commands;
pub mod config;
pub mod format;
pub mod paapi;

pub use config::Config;
pub use paapi::{fetch_all, FetchOptions, PaapiClient, PaapiError, Product, ProductSearch};
