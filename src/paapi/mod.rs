//! Amazon PA-API 5.0 integration: SigV4 signing, the HTTP client, response
//! normalization, and the multi-page search orchestrator.

pub mod client;
pub mod error;
pub mod extract;
pub mod fetch;
pub mod models;
pub mod signer;

pub use client::{PaapiClient, ProductSearch, SearchParams};
pub use error::PaapiError;
pub use extract::extract_products;
pub use fetch::{fetch_all, FetchOptions};
pub use models::{Product, SearchResponse};
