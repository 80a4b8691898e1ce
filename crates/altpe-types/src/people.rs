//! Founder, director, auditor and person records.

use serde::{Deserialize, Serialize};

/// Founder record returned by the founder endpoints.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FounderDetail {
    /// Founder id.
    pub id: i64,
    /// Full name.
    pub name: String,
    /// Biography.
    #[serde(default)]
    pub description: Option<String>,
    /// LinkedIn profile.
    #[serde(default)]
    pub linkedin_url: Option<String>,
    /// Contact email.
    #[serde(default)]
    pub email: Option<String>,
    /// Role at the company.
    pub designation: String,
    /// Stable hashed id.
    pub hashed_id: String,
    /// Company the founder belongs to.
    pub company_id: i64,
}

/// Director record returned by the director endpoints.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DirectorDetail {
    /// Director id.
    pub id: i64,
    /// Full name.
    pub name: String,
    /// Biography.
    #[serde(default)]
    pub description: Option<String>,
    /// LinkedIn profile.
    #[serde(default)]
    pub linkedin_url: Option<String>,
    /// Contact email.
    #[serde(default)]
    pub email: Option<String>,
    /// Role at the company.
    pub designation: String,
    /// Stable hashed id.
    pub hashed_id: String,
    /// Company the director sits on.
    pub company_id: i64,
}

/// Auditor record returned by the auditor endpoints.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditorDetail {
    /// Auditor id.
    pub id: i64,
    /// Firm name.
    pub name: String,
    /// Description.
    #[serde(default)]
    pub description: Option<String>,
    /// LinkedIn profile.
    #[serde(default)]
    pub linkedin_url: Option<String>,
    /// Stable hashed id.
    #[serde(default)]
    pub hashed_id: Option<String>,
    /// Audited company.
    pub company_id: i64,
}

/// A role held by a person.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobTitle {
    /// Role id.
    pub id: i64,
    /// Title.
    pub job_title: String,
    /// Role category.
    pub role_type: String,
    /// Employer.
    pub company_name: String,
}

/// A person in the VentureCap directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Person {
    /// Person id.
    pub id: i64,
    /// First name.
    pub first_name: String,
    /// Last name.
    pub last_name: String,
    /// Contact email.
    #[serde(default)]
    pub email: Option<String>,
    /// LinkedIn profile.
    #[serde(default)]
    pub linkedin_url: Option<String>,
    /// Roles held.
    #[serde(default)]
    pub job_titles: Vec<JobTitle>,
}

impl Person {
    /// First and last name joined by a space.
    #[must_use]
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name).trim().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_person_defaults_job_titles() {
        let person: Person =
            serde_json::from_str(r#"{"id": 1, "first_name": "John", "last_name": "Tan"}"#)
                .unwrap();
        assert!(person.job_titles.is_empty());
        assert_eq!(person.full_name(), "John Tan");
    }

    #[test]
    fn test_auditor_optional_hash() {
        let auditor: AuditorDetail =
            serde_json::from_str(r#"{"id": 2, "name": "KPMG", "company_id": 9}"#).unwrap();
        assert_eq!(auditor.hashed_id, None);
    }
}
