#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/alternatives-pe/altpe-rs/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

//! # altpe
//!
//! altpe is an umbrella crate that re-exports the typed records from
//! `altpe-types` and the HTTP client from `altpe-client`.
//!
//! ## Quick Start
//!
//! ```no_run
//! use altpe::prelude::*;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = AltPeClient::from_env()?;
//!
//!     let filters = CompanyQuery::default()
//!         .countries([CountryCode::Sgp, CountryCode::Mys])
//!         .investment_stage(InvestmentStage::PreSeed);
//!     let page = client.companies(&filters, Page::first(10)).await?;
//!
//!     println!("{}", to_xml(&page.data, "companies")?);
//!     Ok(())
//! }
//! ```
//!
//! ## Crate Organization
//!
//! - [`types`] - Response models, filter enums, pagination and lookup tables
//! - [`client`] - Async client, query builders, retry and request logging
//! - [`blocking`] - Synchronous wrapper around the async client

/// Version information for the altpe crate.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// ============================================================================
// Records
// ============================================================================

/// Typed records for the Alternatives.PE API.
///
/// Companies carry their sectors, themes, founders, directors and auditors;
/// VentureCap records cover capital providers, funds, fund performance and
/// limited partner commitments. Every list endpoint answers with a
/// [`Paginated`] page.
///
/// # Example
///
/// ```
/// use altpe::types::EntityMappings;
///
/// let mappings = EntityMappings::new();
/// println!("{}", mappings.sector_name(22));
/// ```
pub mod types {
    pub use altpe_types::*;
}

pub use altpe_types::{
    CapitalProviderCategory, CountryCode, EntityMappings, InvestmentStage, Paginated, to_xml,
};

// ============================================================================
// Client
// ============================================================================

/// Async client for the Alternatives.PE API.
///
/// The client authenticates with the OAuth client-credentials flow, caches
/// the bearer token across clones and retries rate-limited and 5xx responses
/// with exponential backoff.
///
/// # Example
///
/// ```no_run
/// use altpe::client::{AltPeClient, Page, params::FundQuery};
///
/// # async fn example() -> altpe::Result<()> {
/// let client = AltPeClient::from_env()?;
/// let funds = client.funds(&FundQuery::default(), Page::default()).await?;
/// println!("{} funds", funds.total_records);
/// # Ok(())
/// # }
/// ```
pub mod client {
    pub use altpe_client::*;
}

pub use altpe_client::{AltPeClient, AltPeConfig, AltPeError, Page, Result, collect_all};

/// Blocking client.
///
/// See [`altpe_client::blocking`].
pub mod blocking {
    pub use altpe_client::blocking::*;
}

// ============================================================================
// Prelude
// ============================================================================

/// Prelude module for convenient imports.
///
/// It leaves `Result` alone so it can be glob-imported next to
/// `std::result::Result`; use [`crate::Result`] for the SDK alias.
///
/// ```
/// use altpe::prelude::*;
///
/// let filters = CompanyQuery::default().countries([CountryCode::Sgp]);
/// assert_eq!(filters.countries.len(), 1);
/// ```
pub mod prelude {
    pub use altpe_client::params::{
        CapitalProviderQuery, CommitmentDealQuery, CompanyQuery, FundPerformanceQuery, FundQuery,
        InvestorQuery, PeopleQuery, PersonQuery,
    };
    pub use altpe_client::{AltPeClient, AltPeConfig, AltPeError, ListParams, Page};
    pub use altpe_types::{
        CapitalProviderCategory, CountryCode, FundStatus, InvestmentStage, OrderDirection,
        Paginated, to_xml,
    };
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
        let parts: Vec<&str> = VERSION.split('.').collect();
        assert!(parts.len() >= 2, "Version should have at least major.minor");
    }

    #[test]
    fn test_re_exports() {
        fn _accept_client(_client: &AltPeClient) {}
        fn _accept_blocking(_client: &blocking::AltPeClient) {}
        fn _accept_page(_page: &Paginated<types::Company>) {}

        let page = Page::first(10);
        assert_eq!(page.limit, 10);
        assert_eq!(CountryCode::Sgp.to_string(), "SGP");
    }

    #[test]
    fn test_error_types() {
        let _result: Result<()> = Ok(());
        let error = AltPeError::MissingCredentials;
        assert!(!error.is_retryable());
    }
}
