#![doc(issue_tracker_base_url = "https://github.com/alternatives-pe/altpe-rs/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

//! HTTP client for the [Alternatives.PE](https://alternatives.pe) API.
//!
//! Covers the v2 company, investor and people endpoints and the VentureCap
//! endpoints (capital providers, funds, fund performances, commitment deals,
//! people). Authentication uses the OAuth client-credentials flow; the token
//! is fetched on first use, shared across clones and refreshed once when the
//! server answers 401.
//!
//! # Usage
//!
//! ```rust,ignore
//! use altpe_client::{AltPeClient, Page, params::CompanyQuery};
//! use altpe_types::{CountryCode, InvestmentStage};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = AltPeClient::from_env()?;
//!
//!     let filters = CompanyQuery::default()
//!         .countries([CountryCode::Sgp])
//!         .investment_stage(InvestmentStage::SeriesA);
//!     let page = client.companies(&filters, Page::first(20)).await?;
//!
//!     for company in &page {
//!         println!("{} ({})", company.name, company.id);
//!     }
//!     Ok(())
//! }
//! ```
//!
//! # Environment Variables
//!
//! Set the credentials in your environment or `.env` file:
//!
//! ```bash
//! ALTERNATIVES_PE_CLIENT_ID=your_client_id
//! ALTERNATIVES_PE_CLIENT_SECRET=your_client_secret
//! ```
//!
//! Optional: `ALTERNATIVES_PE_BASE_URL`, `ALTERNATIVES_PE_TIMEOUT`,
//! `ALTERNATIVES_PE_MAX_RETRIES`, `ALTERNATIVES_PE_LOG_REQUESTS` and
//! `ALTERNATIVES_PE_LOG_DIR`.

/// The version of the altpe-client crate.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

mod auth;
pub mod blocking;
mod client;
pub mod config;
mod error;
pub mod http;
pub mod paginate;
pub mod params;
pub mod query;
pub mod request_log;
pub mod retry;

pub use auth::TokenCache;
pub use client::AltPeClient;
pub use config::AltPeConfig;
pub use error::AltPeError;
pub use http::HttpClient;
pub use paginate::collect_all;
pub use params::ListParams;
pub use query::{Page, Query};
pub use retry::RetryPolicy;

/// Result type for Alternatives.PE operations.
pub type Result<T> = std::result::Result<T, AltPeError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
        assert!(VERSION.contains('.'));
    }
}
