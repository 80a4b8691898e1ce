//! String-valued enumerations accepted and returned by the API.
//!
//! Every enum serializes to the exact wire value the server expects and can be
//! parsed back (case-insensitively) from that value with [`FromStr`].

use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};
use thiserror::Error;

/// Error returned when a string does not name a known enum variant.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown {kind} value: {value:?}")]
pub struct ParseEnumError {
    /// Name of the enum being parsed.
    pub kind: &'static str,
    /// The rejected input.
    pub value: String,
}

macro_rules! api_enum {
    (
        $(#[$meta:meta])*
        $name:ident {
            $( $(#[$vmeta:meta])* $variant:ident => $value:literal ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub enum $name {
            $(
                $(#[$vmeta])*
                #[serde(rename = $value)]
                $variant,
            )+
        }

        impl $name {
            /// Every variant, in declaration order.
            pub const ALL: &'static [Self] = &[$(Self::$variant),+];

            /// Get the API parameter value.
            #[must_use]
            pub const fn as_str(&self) -> &'static str {
                match self {
                    $(Self::$variant => $value,)+
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $name {
            type Err = ParseEnumError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let trimmed = s.trim();
                Self::ALL
                    .iter()
                    .copied()
                    .find(|v| v.as_str().eq_ignore_ascii_case(trimmed))
                    .ok_or_else(|| ParseEnumError {
                        kind: stringify!($name),
                        value: s.to_string(),
                    })
            }
        }
    };
}

api_enum! {
    /// Funding stage of a company.
    InvestmentStage {
        /// Pre-seed.
        PreSeed => "PRE_SEED",
        /// Seed.
        Seed => "SEED",
        /// Series A.
        SeriesA => "SERIES_A",
        /// Series B.
        SeriesB => "SERIES_B",
        /// Series C and later rounds.
        SeriesCAndBeyond => "SERIES_C_AND_BEYOND",
    }
}

api_enum! {
    /// Operating status of a company.
    CompanyStatus {
        /// Still trading.
        Active => "ACTIVE",
        /// Wound up or otherwise closed.
        Closed => "CLOSED",
    }
}

api_enum! {
    /// Level of detail returned by list endpoints.
    #[derive(Default)]
    ResponseType {
        /// Summary fields only.
        #[default]
        Simple => "SIMPLE",
        /// Full nested records.
        Detailed => "DETAILED",
    }
}

api_enum! {
    /// Company classification.
    CompanyType {
        /// Venture-backed startup.
        Startup => "startup",
        /// Private company.
        Private => "private",
    }
}

api_enum! {
    /// Sort direction.
    #[derive(Default)]
    OrderDirection {
        /// Ascending.
        #[default]
        Asc => "asc",
        /// Descending.
        Desc => "desc",
    }
}

api_enum! {
    /// Sort keys for company, investor and people listings.
    OrderBy {
        /// Sort by name.
        Name => "name",
        /// Sort by record id.
        Id => "id",
        /// Sort by number of portfolio companies.
        NoOfInvestedCompanies => "no_of_invested_companies",
    }
}

api_enum! {
    /// ISO 3166-1 alpha-3 country codes covered by the API.
    CountryCode {
        /// Singapore.
        Sgp => "SGP",
        /// Malaysia.
        Mys => "MYS",
        /// Indonesia.
        Idn => "IDN",
        /// Thailand.
        Tha => "THA",
        /// Vietnam.
        Vnm => "VNM",
        /// Australia.
        Aus => "AUS",
        /// Philippines.
        Phl => "PHL",
    }
}

api_enum! {
    /// Capital provider category.
    CapitalProviderCategory {
        /// General partner managing funds.
        FundManager => "fund-manager",
        /// Investor committing to funds.
        LimitedPartner => "limited-partner",
        /// Family office.
        FamilyOffice => "family-office",
    }
}

api_enum! {
    /// Fundraising status of a fund.
    FundStatus {
        /// Open for commitments.
        Open => "Open",
        /// Open, first close not yet reached.
        OpenWithoutFirstClose => "Open - Without first close",
        /// Open, first close reached.
        OpenWithFirstClose => "Open - With first close",
        /// Closed to new commitments.
        Closed => "Closed",
        /// Evergreen vehicle.
        Evergreen => "Evergreen",
        /// Announced but not yet raising.
        Upcoming => "Upcoming",
    }
}

api_enum! {
    /// Sort keys for people.
    #[derive(Default)]
    PersonOrderBy {
        /// Sort by record id.
        #[default]
        Id => "id",
        /// Sort by first name.
        FirstName => "first_name",
        /// Sort by last name.
        LastName => "last_name",
    }
}

api_enum! {
    /// Sort keys for funds.
    #[derive(Default)]
    FundOrderBy {
        /// Sort by fund name.
        #[default]
        Name => "name",
    }
}

api_enum! {
    /// Sort keys for capital providers.
    #[derive(Default)]
    CapitalProviderOrderBy {
        /// Sort by display name.
        #[default]
        DisplayName => "display_name",
    }
}

api_enum! {
    /// Sort keys for fund performance records.
    #[derive(Default)]
    FundPerformanceOrderBy {
        /// Sort by distributions to paid-in capital.
        #[default]
        Dpi => "dpi",
        /// Sort by internal rate of return.
        Irr => "irr",
    }
}

api_enum! {
    /// Sort keys for commitment deals.
    #[derive(Default)]
    CommitmentDealOrderBy {
        /// Sort by fund manager name.
        #[default]
        FundManagerName => "fund_manager_name",
    }
}
