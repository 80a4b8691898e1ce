#![doc(issue_tracker_base_url = "https://github.com/alternatives-pe/altpe-rs/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

//! Typed records for the Alternatives.PE API.
//!
//! This crate holds the data side of the SDK: response models for companies,
//! investors, people and VentureCap records, the pagination envelope they
//! arrive in, the string enums accepted as filters, and id-to-name lookup
//! tables. It has no networking; see `altpe-client` for that.

/// The version of the altpe-types crate.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod auth;
pub mod company;
pub mod enums;
pub mod investor;
pub mod mappings;
pub mod pagination;
pub mod people;
pub mod value;
pub mod venturecap;
pub mod xml;

pub use auth::{ErrorResponse, TokenResponse};
pub use company::{
    AdditionalFunding, Auditor, Company, CompanyFinancials, Director, Founder, Funding,
    FundingRoundAndValuation, Investor, PerShareClassSummary, Revenue, Sector, Shareholder, Theme,
};
pub use enums::{
    CapitalProviderCategory, CapitalProviderOrderBy, CommitmentDealOrderBy, CompanyStatus,
    CompanyType, CountryCode, FundOrderBy, FundPerformanceOrderBy, FundStatus, InvestmentStage,
    OrderBy, OrderDirection, ParseEnumError, PersonOrderBy, ResponseType,
};
pub use investor::{InvestorCompany, InvestorDetail, InvestorSummary};
pub use mappings::EntityMappings;
pub use pagination::{Envelope, MAX_PAGE_SIZE, Paginated};
pub use people::{AuditorDetail, DirectorDetail, FounderDetail, JobTitle, Person};
pub use value::{NumberOrText, RecordId};
pub use venturecap::{
    CapitalProvider, CommitmentDeal, Fund, FundPerformance, FundType, LimitedPartnerType,
};
pub use xml::to_xml;
