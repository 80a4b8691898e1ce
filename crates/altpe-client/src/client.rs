//! Alternatives.PE API client implementation.

use crate::{
    Result,
    config::AltPeConfig,
    http::HttpClient,
    params::{
        CapitalProviderQuery, CommitmentDealQuery, CompanyQuery, FundPerformanceQuery, FundQuery,
        InvestorQuery, ListParams, PeopleQuery, PersonQuery,
    },
    query::{Page, Query},
};
use altpe_types::{
    AuditorDetail, CapitalProvider, CapitalProviderCategory, CommitmentDeal, Company,
    CompanyFinancials, DirectorDetail, Envelope, FounderDetail, Fund, FundPerformance,
    InvestorDetail, InvestorSummary, Paginated, Person,
};
use std::fmt::Display;

/// Async client for the Alternatives.PE API.
///
/// Cheap to clone; clones share the connection pool and the access token.
#[derive(Debug, Clone)]
pub struct AltPeClient {
    http: HttpClient,
}

impl AltPeClient {
    /// Create a client from `config`.
    ///
    /// # Errors
    ///
    /// Returns an error if the credentials are missing or the base URL is
    /// invalid.
    pub fn new(config: &AltPeConfig) -> Result<Self> {
        Ok(Self {
            http: HttpClient::new(config)?,
        })
    }

    /// Create a client from `ALTERNATIVES_PE_*` environment variables.
    ///
    /// This will also load from a `.env` file if present.
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

    /// The underlying transport.
    #[must_use]
    pub const fn http(&self) -> &HttpClient {
        &self.http
    }

    async fn list<T, P>(&self, segments: &[&str], params: &P, page: Page) -> Result<T>
    where
        T: serde::de::DeserializeOwned,
        P: ListParams,
    {
        self.http.get_json(segments, &params.to_query(page)).await
    }

    async fn by_id<T>(&self, segments: &[&str]) -> Result<T>
    where
        T: serde::de::DeserializeOwned,
    {
        self.http.get_json(segments, &Query::new()).await
    }

    // =========================================================================
    // Companies
    // =========================================================================

    /// List companies.
    ///
    /// # Arguments
    ///
    /// * `params` - Filters and ordering
    /// * `page` - Window to fetch (`limit` at most 100)
    ///
    /// # Errors
    ///
    /// Returns an error if the API request fails.
    pub async fn companies(
        &self,
        params: &CompanyQuery,
        page: Page,
    ) -> Result<Paginated<Company>> {
        let envelope: Envelope<Paginated<Company>> =
            self.list(&["companies"], params, page).await?;
        Ok(envelope.into_inner())
    }

    /// Get a company by id.
    ///
    /// # Errors
    ///
    /// Returns [`AltPeError::NotFound`](crate::AltPeError::NotFound) if no
    /// company has this id.
    pub async fn company(&self, id: impl Display) -> Result<Company> {
        let id = id.to_string();
        let envelope: Envelope<Company> = self.by_id(&["companies", &id]).await?;
        Ok(envelope.into_inner())
    }

    /// Get a company by its Unique Entity Number.
    ///
    /// # Errors
    ///
    /// Returns an error if the API request fails.
    pub async fn company_by_uen(&self, uen: &str) -> Result<Company> {
        let envelope: Envelope<Company> = self.by_id(&["companies", uen, "uen"]).await?;
        Ok(envelope.into_inner())
    }

    /// Get funding, revenue and shareholding history for a company.
    ///
    /// # Errors
    ///
    /// Returns an error if the API request fails.
    pub async fn company_financials(&self, id: impl Display) -> Result<CompanyFinancials> {
        let id = id.to_string();
        let envelope: Envelope<CompanyFinancials> =
            self.by_id(&["companies", &id, "financials"]).await?;
        Ok(envelope.into_inner())
    }

    /// Get company financials by Unique Entity Number.
    ///
    /// # Errors
    ///
    /// Returns an error if the API request fails.
    pub async fn company_financials_by_uen(&self, uen: &str) -> Result<CompanyFinancials> {
        let envelope: Envelope<CompanyFinancials> =
            self.by_id(&["companies", uen, "uen", "financials"]).await?;
        Ok(envelope.into_inner())
    }

    // =========================================================================
    // Investors
    // =========================================================================

    /// List investors.
    ///
    /// # Errors
    ///
    /// Returns an error if the API request fails.
    pub async fn investors(
        &self,
        params: &InvestorQuery,
        page: Page,
    ) -> Result<Paginated<InvestorSummary>> {
        let envelope: Envelope<Paginated<InvestorSummary>> =
            self.list(&["investors"], params, page).await?;
        Ok(envelope.into_inner())
    }

    /// Get an investor and its portfolio.
    ///
    /// # Errors
    ///
    /// Returns an error if the API request fails.
    pub async fn investor(&self, id: impl Display) -> Result<InvestorDetail> {
        let id = id.to_string();
        let envelope: Envelope<InvestorDetail> = self.by_id(&["investors", &id]).await?;
        Ok(envelope.into_inner())
    }

    // =========================================================================
    // Directors, founders and auditors
    // =========================================================================

    /// List company directors.
    ///
    /// # Errors
    ///
    /// Returns an error if the API request fails.
    pub async fn directors(
        &self,
        params: &PeopleQuery,
        page: Page,
    ) -> Result<Paginated<DirectorDetail>> {
        let envelope: Envelope<Paginated<DirectorDetail>> =
            self.list(&["directors"], params, page).await?;
        Ok(envelope.into_inner())
    }

    /// Get a director by id.
    ///
    /// # Errors
    ///
    /// Returns an error if the API request fails.
    pub async fn director(&self, id: impl Display) -> Result<DirectorDetail> {
        let id = id.to_string();
        let envelope: Envelope<DirectorDetail> = self.by_id(&["directors", &id]).await?;
        Ok(envelope.into_inner())
    }

    /// List founders.
    ///
    /// # Errors
    ///
    /// Returns an error if the API request fails.
    pub async fn founders(
        &self,
        params: &PeopleQuery,
        page: Page,
    ) -> Result<Paginated<FounderDetail>> {
        let envelope: Envelope<Paginated<FounderDetail>> =
            self.list(&["founders"], params, page).await?;
        Ok(envelope.into_inner())
    }

    /// Get a founder by id.
    ///
    /// # Errors
    ///
    /// Returns an error if the API request fails.
    pub async fn founder(&self, id: impl Display) -> Result<FounderDetail> {
        let id = id.to_string();
        let envelope: Envelope<FounderDetail> = self.by_id(&["founders", &id]).await?;
        Ok(envelope.into_inner())
    }

    /// List auditors.
    ///
    /// # Errors
    ///
    /// Returns an error if the API request fails.
    pub async fn auditors(
        &self,
        params: &PeopleQuery,
        page: Page,
    ) -> Result<Paginated<AuditorDetail>> {
        let envelope: Envelope<Paginated<AuditorDetail>> =
            self.list(&["auditors"], params, page).await?;
        Ok(envelope.into_inner())
    }

    /// Get an auditor by id.
    ///
    /// # Errors
    ///
    /// Returns an error if the API request fails.
    pub async fn auditor(&self, id: impl Display) -> Result<AuditorDetail> {
        let id = id.to_string();
        let envelope: Envelope<AuditorDetail> = self.by_id(&["auditors", &id]).await?;
        Ok(envelope.into_inner())
    }

    // =========================================================================
    // VentureCap
    // =========================================================================

    /// List fund managers, limited partners and family offices.
    ///
    /// # Errors
    ///
    /// Returns an error if the API request fails.
    pub async fn capital_providers(
        &self,
        params: &CapitalProviderQuery,
        page: Page,
    ) -> Result<Paginated<CapitalProvider>> {
        self.list(&["capital-providers"], params, page).await
    }

    /// Get a capital provider; the API needs its category to resolve the id.
    ///
    /// # Errors
    ///
    /// Returns an error if the API request fails.
    pub async fn capital_provider(
        &self,
        id: impl Display,
        category: CapitalProviderCategory,
    ) -> Result<CapitalProvider> {
        let id = id.to_string();
        let mut query = Query::new();
        query.push("category", category);
        let envelope: Envelope<CapitalProvider> = self
            .http
            .get_json(&["capital-providers", &id, ""], &query)
            .await?;
        Ok(envelope.into_inner())
    }

    /// List funds.
    ///
    /// # Errors
    ///
    /// Returns an error if the API request fails.
    pub async fn funds(&self, params: &FundQuery, page: Page) -> Result<Paginated<Fund>> {
        self.list(&["funds", ""], params, page).await
    }

    /// Get a fund by id.
    ///
    /// # Errors
    ///
    /// Returns an error if the API request fails.
    pub async fn fund(&self, id: impl Display) -> Result<Fund> {
        let id = id.to_string();
        let envelope: Envelope<Fund> = self.by_id(&["funds", &id]).await?;
        Ok(envelope.into_inner())
    }

    /// List reported fund performance figures.
    ///
    /// # Errors
    ///
    /// Returns an error if the API request fails.
    pub async fn fund_performances(
        &self,
        params: &FundPerformanceQuery,
        page: Page,
    ) -> Result<Paginated<FundPerformance>> {
        self.list(&["fund-performances", ""], params, page).await
    }

    /// Get one fund performance report.
    ///
    /// # Errors
    ///
    /// Returns an error if the API request fails.
    pub async fn fund_performance(&self, id: impl Display) -> Result<FundPerformance> {
        let id = id.to_string();
        let envelope: Envelope<FundPerformance> =
            self.by_id(&["fund-performances", &id]).await?;
        Ok(envelope.into_inner())
    }

    /// List limited partner commitments.
    ///
    /// # Errors
    ///
    /// Returns an error if the API request fails.
    pub async fn commitment_deals(
        &self,
        params: &CommitmentDealQuery,
        page: Page,
    ) -> Result<Paginated<CommitmentDeal>> {
        self.list(&["commitment-deals", ""], params, page).await
    }

    /// Get one commitment deal.
    ///
    /// # Errors
    ///
    /// Returns an error if the API request fails.
    pub async fn commitment_deal(&self, id: impl Display) -> Result<CommitmentDeal> {
        let id = id.to_string();
        let envelope: Envelope<CommitmentDeal> = self.by_id(&["commitment-deals", &id]).await?;
        Ok(envelope.into_inner())
    }

    /// List people.
    ///
    /// # Errors
    ///
    /// Returns an error if the API request fails.
    pub async fn people(&self, params: &PersonQuery, page: Page) -> Result<Paginated<Person>> {
        self.list(&["people", ""], params, page).await
    }

    /// Get a person by id.
    ///
    /// # Errors
    ///
    /// Returns an error if the API request fails.
    pub async fn person(&self, id: impl Display) -> Result<Person> {
        let id = id.to_string();
        let envelope: Envelope<Person> = self.by_id(&["people", &id]).await?;
        Ok(envelope.into_inner())
    }
}
