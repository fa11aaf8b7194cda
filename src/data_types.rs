/*!
 * Data type definitions for home health provider records
 *
 * This module contains the in-memory representation of one provider row
 * from the home health data file.
 */

use serde::{Deserialize, Serialize};

/// One home health provider entry
///
/// Constructed once at load time from one CSV row and immutable thereafter.
/// There is no identity field beyond the name; duplicate names are permitted
/// and are not deduplicated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProviderRecord {
    /// Provider (company) name, whitespace-trimmed
    pub name: String,

    /// Whether the provider administers an initial treatment dose
    pub first_dose: bool,

    /// Insurance plans accepted, in file order (empty when the raw value
    /// was "unknown")
    pub insurance: Vec<String>,

    /// Geographic service areas covered, in file order (empty when the raw
    /// value was "unknown")
    pub service_area: Vec<String>,

    /// Contact email, when the column is present and non-empty
    pub email: Option<String>,
}

impl ProviderRecord {
    /// Check whether any accepted insurance plan contains the query as a
    /// case-insensitive substring
    pub fn accepts_insurance(&self, query: &str) -> bool {
        let query_lower = query.to_lowercase();
        self.insurance.iter()
            .any(|plan| plan.to_lowercase().contains(&query_lower))
    }

    /// Check whether the provider covers a service area (exact,
    /// case-sensitive match)
    pub fn covers_area(&self, area: &str) -> bool {
        self.service_area.iter().any(|a| a == area)
    }

    /// First-dose capability as a display label
    pub fn first_dose_label(&self) -> &'static str {
        if self.first_dose { "Yes" } else { "No" }
    }

    /// Accepted insurance plans as a single display line
    pub fn insurance_display(&self) -> String {
        self.insurance.join(", ")
    }

    /// Covered service areas as a single display line
    pub fn service_area_display(&self) -> String {
        self.service_area.join(", ")
    }
}
