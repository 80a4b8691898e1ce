//! Blocking client.
//!
//! Wraps [`crate::AltPeClient`] with a private current-thread runtime. Do not
//! call it from inside an async runtime; use the async client there.

use crate::{
    AltPeError, Result,
    config::AltPeConfig,
    params::{
        CapitalProviderQuery, CommitmentDealQuery, CompanyQuery, FundPerformanceQuery, FundQuery,
        InvestorQuery, PeopleQuery, PersonQuery,
    },
    query::Page,
};
use altpe_types::{
    AuditorDetail, CapitalProvider, CapitalProviderCategory, CommitmentDeal, Company,
    CompanyFinancials, DirectorDetail, FounderDetail, Fund, FundPerformance, InvestorDetail,
    InvestorSummary, Paginated, Person,
};
use std::fmt::Display;
use tokio::runtime::{Builder, Runtime};

/// Blocking Alternatives.PE client.
#[derive(Debug)]
pub struct AltPeClient {
    inner: crate::AltPeClient,
    runtime: Runtime,
}

macro_rules! blocking_methods {
    ($( $(#[$meta:meta])* fn $name:ident($($arg:ident: $ty:ty),*) -> $ret:ty; )*) => {
        $(
            $(#[$meta])*
            ///
            /// # Errors
            ///
            /// Returns an error if the API request fails.
            pub fn $name(&self, $($arg: $ty),*) -> Result<$ret> {
                self.runtime.block_on(self.inner.$name($($arg),*))
            }
        )*
    };
}

impl AltPeClient {
    /// Create a client from `config`.
    ///
    /// # Errors
    ///
    /// Returns an error if the credentials are missing, the base URL is
    /// invalid or the runtime cannot start.
    pub fn new(config: &AltPeConfig) -> Result<Self> {
        let runtime = Builder::new_current_thread()
            .enable_all()
            .build()
            .map_err(runtime_error)?;
        Ok(Self {
            inner: crate::AltPeClient::new(config)?,
            runtime,
        })
    }

    /// Create a client from `ALTERNATIVES_PE_*` environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if the credentials are not set.
    pub fn from_env() -> Result<Self> {
        Self::new(&AltPeConfig::from_env()?)
    }

    /// Create a client for the production API with explicit credentials.
    ///
    /// # Errors
    ///
    /// Returns an error if either credential is empty.
    pub fn with_credentials(
        client_id: impl Into<String>,
        client_secret: impl Into<String>,
    ) -> Result<Self> {
        Self::new(&AltPeConfig::default().with_credentials(client_id, client_secret))
    }

    /// The async client this wraps.
    #[must_use]
    pub const fn as_async(&self) -> &crate::AltPeClient {
        &self.inner
    }

    blocking_methods! {
        /// List companies.
        fn companies(params: &CompanyQuery, page: Page) -> Paginated<Company>;
        /// Get a company by id.
        fn company(id: impl Display) -> Company;
        /// Get a company by Unique Entity Number.
        fn company_by_uen(uen: &str) -> Company;
        /// Get company financials by id.
        fn company_financials(id: impl Display) -> CompanyFinancials;
        /// Get company financials by Unique Entity Number.
        fn company_financials_by_uen(uen: &str) -> CompanyFinancials;
        /// List investors.
        fn investors(params: &InvestorQuery, page: Page) -> Paginated<InvestorSummary>;
        /// Get an investor by id.
        fn investor(id: impl Display) -> InvestorDetail;
        /// List directors.
        fn directors(params: &PeopleQuery, page: Page) -> Paginated<DirectorDetail>;
        /// Get a director by id.
        fn director(id: impl Display) -> DirectorDetail;
        /// List founders.
        fn founders(params: &PeopleQuery, page: Page) -> Paginated<FounderDetail>;
        /// Get a founder by id.
        fn founder(id: impl Display) -> FounderDetail;
        /// List auditors.
        fn auditors(params: &PeopleQuery, page: Page) -> Paginated<AuditorDetail>;
        /// Get an auditor by id.
        fn auditor(id: impl Display) -> AuditorDetail;
        /// List capital providers.
        fn capital_providers(params: &CapitalProviderQuery, page: Page) -> Paginated<CapitalProvider>;
        /// Get a capital provider by id and category.
        fn capital_provider(id: impl Display, category: CapitalProviderCategory) -> CapitalProvider;
        /// List funds.
        fn funds(params: &FundQuery, page: Page) -> Paginated<Fund>;
        /// Get a fund by id.
        fn fund(id: impl Display) -> Fund;
        /// List fund performance reports.
        fn fund_performances(params: &FundPerformanceQuery, page: Page) -> Paginated<FundPerformance>;
        /// Get a fund performance report by id.
        fn fund_performance(id: impl Display) -> FundPerformance;
        /// List commitment deals.
        fn commitment_deals(params: &CommitmentDealQuery, page: Page) -> Paginated<CommitmentDeal>;
        /// Get a commitment deal by id.
        fn commitment_deal(id: impl Display) -> CommitmentDeal;
        /// List people.
        fn people(params: &PersonQuery, page: Page) -> Paginated<Person>;
        /// Get a person by id.
        fn person(id: impl Display) -> Person;
    }
}

fn runtime_error(err: std::io::Error) -> AltPeError {
    AltPeError::Config(format!("cannot start blocking runtime: {err}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_requires_credentials() {
        let err = AltPeClient::new(&AltPeConfig::default()).unwrap_err();
        assert!(matches!(err, AltPeError::MissingCredentials));
    }

    #[test]
    fn test_runtime_failure_is_config_error() {
        let err = runtime_error(std::io::Error::other("no threads"));
        assert!(matches!(err, AltPeError::Config(ref m) if m.contains("no threads")));
    }

    #[test]
    fn test_builds_outside_runtime() {
        let client = AltPeClient::with_credentials("id", "secret").unwrap();
        assert_eq!(client.as_async().http().base_url().as_str(), "https://api.alternatives.pe/");
    }
}
