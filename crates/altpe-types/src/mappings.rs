//! Id-to-name lookup tables for sectors, themes, locations and fund types.
//!
//! Several filters (`sectors`, `themes`, `hq`, `preferred_location`,
//! `fund_type`, ...) take numeric ids. [`EntityMappings`] resolves those ids to
//! display names and back. A built-in table ships with the crate; callers can
//! merge fuller tables exported from the API with [`EntityMappings::from_json`]
//! and [`EntityMappings::extend`].

use serde::{Deserialize, Serialize};
use std::{borrow::Cow, collections::BTreeMap, sync::LazyLock};

const BUILTIN_JSON: &str = include_str!("../data/mappings.json");

static BUILTIN: LazyLock<EntityMappings> =
    LazyLock::new(|| EntityMappings::from_json(BUILTIN_JSON).unwrap_or_default());

/// Lookup tables keyed by API id.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntityMappings {
    /// Sector names.
    #[serde(default)]
    pub sectors: BTreeMap<u32, String>,
    /// Theme names.
    #[serde(default)]
    pub themes: BTreeMap<u32, String>,
    /// Location names.
    #[serde(default)]
    pub locations: BTreeMap<u32, String>,
    /// Fund type names.
    #[serde(default)]
    pub fund_types: BTreeMap<u32, String>,
}

impl EntityMappings {
    /// The built-in tables.
    #[must_use]
    pub fn new() -> Self {
        BUILTIN.clone()
    }

    /// Parse tables from JSON of the form `{"sectors": {"22": "..."}, ...}`.
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON does not have that shape.
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }

    /// Merge `other` into `self`; entries in `other` win.
    pub fn extend(&mut self, other: Self) {
        self.sectors.extend(other.sectors);
        self.themes.extend(other.themes);
        self.locations.extend(other.locations);
        self.fund_types.extend(other.fund_types);
    }

    /// Sector name, or `"Unknown Sector (<id>)"`.
    #[must_use]
    pub fn sector_name(&self, id: u32) -> Cow<'_, str> {
        lookup(&self.sectors, id, "Sector")
    }

    /// Theme name, or `"Unknown Theme (<id>)"`.
    #[must_use]
    pub fn theme_name(&self, id: u32) -> Cow<'_, str> {
        lookup(&self.themes, id, "Theme")
    }

    /// Location name, or `"Unknown Location (<id>)"`.
    #[must_use]
    pub fn location_name(&self, id: u32) -> Cow<'_, str> {
        lookup(&self.locations, id, "Location")
    }

    /// Fund type name, or `"Unknown Fund Type (<id>)"`.
    #[must_use]
    pub fn fund_type_name(&self, id: u32) -> Cow<'_, str> {
        lookup(&self.fund_types, id, "Fund Type")
    }

    /// Sector id for a name (case-insensitive).
    #[must_use]
    pub fn sector_id(&self, name: &str) -> Option<u32> {
        reverse(&self.sectors, name)
    }

    /// Theme id for a name (case-insensitive).
    #[must_use]
    pub fn theme_id(&self, name: &str) -> Option<u32> {
        reverse(&self.themes, name)
    }

    /// Location id for a name (case-insensitive).
    #[must_use]
    pub fn location_id(&self, name: &str) -> Option<u32> {
        reverse(&self.locations, name)
    }

    /// Fund type id for a name (case-insensitive).
    #[must_use]
    pub fn fund_type_id(&self, name: &str) -> Option<u32> {
        reverse(&self.fund_types, name)
    }

    /// Owned copy of the sector table.
    #[must_use]
    pub fn sector_choices(&self) -> BTreeMap<u32, String> {
        self.sectors.clone()
    }

    /// Owned copy of the theme table.
    #[must_use]
    pub fn theme_choices(&self) -> BTreeMap<u32, String> {
        self.themes.clone()
    }

    /// Owned copy of the location table.
    #[must_use]
    pub fn location_choices(&self) -> BTreeMap<u32, String> {
        self.locations.clone()
    }

    /// Owned copy of the fund type table.
    #[must_use]
    pub fn fund_type_choices(&self) -> BTreeMap<u32, String> {
        self.fund_types.clone()
    }
}

fn lookup<'a>(table: &'a BTreeMap<u32, String>, id: u32, kind: &str) -> Cow<'a, str> {
    table
        .get(&id)
        .map_or_else(
            || Cow::Owned(format!("Unknown {kind} ({id})")),
            |name| Cow::Borrowed(name.as_str()),
        )
}

fn reverse(table: &BTreeMap<u32, String>, name: &str) -> Option<u32> {
    let name = name.trim();
    table
        .iter()
        .find(|(_, v)| v.eq_ignore_ascii_case(name))
        .map(|(id, _)| *id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_parses() {
        assert!(EntityMappings::from_json(BUILTIN_JSON).is_ok());
    }

    #[test]
    fn test_sectors_loaded() {
        let mappings = EntityMappings::new();
        assert!(!mappings.sectors.is_empty());
        assert_eq!(mappings.sector_name(22), "Financial Services");
        assert_eq!(mappings.sector_name(44), "Information Technology");
        assert_eq!(mappings.sector_name(47), "Software / Internet");
    }

    #[test]
    fn test_themes_loaded() {
        let mappings = EntityMappings::new();
        assert_eq!(mappings.theme_name(13), "Blockchain");
        assert_eq!(mappings.theme_name(35), "FinTech");
    }

    #[test]
    fn test_locations_and_fund_types_loaded() {
        let mappings = EntityMappings::new();
        assert!(mappings.location_name(147).contains("Singapore"));
        assert!(mappings.location_name(148).contains("Thailand"));
        assert_eq!(mappings.fund_type_name(1), "Private Equity - General");
        assert_eq!(mappings.fund_type_name(2), "Buyout");
    }

    #[test]
    fn test_unknown_ids() {
        let mappings = EntityMappings::new();
        assert_eq!(mappings.sector_name(999), "Unknown Sector (999)");
        assert_eq!(mappings.theme_name(999), "Unknown Theme (999)");
        assert_eq!(mappings.location_name(999), "Unknown Location (999)");
        assert_eq!(mappings.fund_type_name(999), "Unknown Fund Type (999)");
    }

    #[test]
    fn test_lookup_borrows_known_names() {
        let table = BTreeMap::from([(7, "Healthcare".to_string())]);
        assert!(matches!(lookup(&table, 7, "Sector"), Cow::Borrowed("Healthcare")));
        assert_eq!(lookup(&table, 8, "Sector"), "Unknown Sector (8)");
    }

    #[test]
    fn test_choices_are_copies() {
        let mappings = EntityMappings::new();
        let mut choices = mappings.sector_choices();
        let original = mappings.sectors.len();
        choices.clear();
        assert_eq!(mappings.sectors.len(), original);
    }

    #[test]
    fn test_reverse_lookup() {
        let mappings = EntityMappings::new();
        assert_eq!(mappings.theme_id("fintech"), Some(35));
        assert_eq!(mappings.fund_type_id("Buyout"), Some(2));
        assert_eq!(mappings.sector_id("Agriculture"), None);
    }

    #[test]
    fn test_extend_overrides() {
        let mut mappings = EntityMappings::new();
        let extra = EntityMappings::from_json(
            r#"{"sectors": {"22": "Finance", "5": "Agriculture"}}"#,
        )
        .unwrap();
        mappings.extend(extra);
        assert_eq!(mappings.sector_name(22), "Finance");
        assert_eq!(mappings.sector_name(5), "Agriculture");
        assert_eq!(mappings.theme_name(13), "Blockchain");
    }
}
