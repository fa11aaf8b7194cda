/*!
 * Filtering of home health provider records
 *
 * This module applies the user's filter selections to a loaded record
 * sequence. Filtering is pure and deterministic: it never mutates the
 * records, never fails, and preserves the original record order.
 */

use std::collections::BTreeSet;

use crate::data_types::ProviderRecord;

/// The filter combination a user selected
///
/// Each predicate is independent and inactive by default; a record must
/// satisfy every active predicate to pass. With no predicate active the
/// selection is the identity filter and every record passes.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterSelections {
    /// Insurance plan query; None means no insurance filter
    insurance: Option<String>,
    /// When true, only providers offering a first dose pass
    first_dose_only: bool,
    /// Selected service areas; empty means no service-area filter
    service_areas: BTreeSet<String>,
}

impl FilterSelections {
    /// Create an empty selection (no predicate active)
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the insurance plan query
    ///
    /// The query matches any record whose insurance entries contain it as
    /// a case-insensitive substring. An empty or whitespace-only query is
    /// normalized to "no insurance filter".
    pub fn with_insurance<S: Into<String>>(mut self, query: S) -> Self {
        let query = query.into();
        let trimmed = query.trim();
        self.insurance = if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_string())
        };
        self
    }

    /// Require the first-dose capability flag
    pub fn require_first_dose(mut self, required: bool) -> Self {
        self.first_dose_only = required;
        self
    }

    /// Add one service area to the selection (exact, case-sensitive match)
    pub fn with_service_area<S: Into<String>>(mut self, area: S) -> Self {
        self.service_areas.insert(area.into());
        self
    }

    /// Add several service areas to the selection
    pub fn with_service_areas<I, S>(mut self, areas: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.service_areas.extend(areas.into_iter().map(Into::into));
        self
    }

    /// Get the insurance query, if one is active
    pub fn insurance(&self) -> Option<&str> {
        self.insurance.as_deref()
    }

    /// Whether the first-dose predicate is active
    pub fn first_dose_only(&self) -> bool {
        self.first_dose_only
    }

    /// Get the selected service areas
    pub fn service_areas(&self) -> &BTreeSet<String> {
        &self.service_areas
    }

    /// Whether no predicate is active (the identity filter)
    pub fn is_empty(&self) -> bool {
        self.insurance.is_none() && !self.first_dose_only && self.service_areas.is_empty()
    }

    /// Check one record against every active predicate
    pub fn matches(&self, record: &ProviderRecord) -> bool {
        // Insurance filter (case-insensitive, partial match)
        if let Some(query) = &self.insurance {
            if !record.accepts_insurance(query) {
                return false;
            }
        }

        // First dose filter
        if self.first_dose_only && !record.first_dose {
            return false;
        }

        // Service area filter (exact membership)
        if !self.service_areas.is_empty()
            && !record.service_area.iter().any(|area| self.service_areas.contains(area))
        {
            return false;
        }

        true
    }
}

/// Filter a record sequence against the user's selections
///
/// Returns the records satisfying every active predicate, in their
/// original order. With no predicate active, all records are returned.
pub fn filter_providers<'a>(
    records: &'a [ProviderRecord],
    selections: &FilterSelections,
) -> Vec<&'a ProviderRecord> {
    records.iter()
        .filter(|record| selections.matches(record))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn provider(name: &str, first_dose: bool, insurance: &[&str], areas: &[&str]) -> ProviderRecord {
        ProviderRecord {
            name: name.to_string(),
            first_dose,
            insurance: insurance.iter().map(|s| s.to_string()).collect(),
            service_area: areas.iter().map(|s| s.to_string()).collect(),
            email: None,
        }
    }

    fn sample_records() -> Vec<ProviderRecord> {
        vec![
            provider("A", true, &["Medicare"], &["North", "East"]),
            provider("B", false, &["Medicaid"], &["South"]),
            provider("C", true, &["Blue Cross", "Medicare Advantage"], &[]),
        ]
    }

    #[test]
    fn test_no_predicates_is_identity() {
        let records = sample_records();
        let results = filter_providers(&records, &FilterSelections::new());

        assert_eq!(results.len(), records.len());
        let names: Vec<&str> = results.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["A", "B", "C"]);
    }

    #[test]
    fn test_insurance_substring_is_case_insensitive() {
        let records = sample_records();
        let selections = FilterSelections::new().with_insurance("medi");
        let results = filter_providers(&records, &selections);

        // "medi" is a substring of Medicare, Medicaid and Medicare Advantage
        let names: Vec<&str> = results.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["A", "B", "C"]);

        let selections = FilterSelections::new().with_insurance("MEDICAID");
        let results = filter_providers(&records, &selections);
        let names: Vec<&str> = results.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["B"]);
    }

    #[test]
    fn test_insurance_query_whitespace_is_no_filter() {
        let records = sample_records();
        let selections = FilterSelections::new().with_insurance("   ");

        assert!(selections.is_empty());
        assert_eq!(filter_providers(&records, &selections).len(), records.len());
    }

    #[test]
    fn test_first_dose_excludes_non_capable_providers() {
        let records = sample_records();
        let selections = FilterSelections::new().require_first_dose(true);
        let results = filter_providers(&records, &selections);

        let names: Vec<&str> = results.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["A", "C"]);
    }

    #[test]
    fn test_service_area_requires_exact_membership() {
        let records = sample_records();
        let selections = FilterSelections::new().with_service_area("North");
        let results = filter_providers(&records, &selections);

        // A covers North; B covers only South; C covers nothing
        let names: Vec<&str> = results.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["A"]);
    }

    #[test]
    fn test_service_area_match_is_case_sensitive() {
        let records = sample_records();
        let selections = FilterSelections::new().with_service_area("north");

        assert!(filter_providers(&records, &selections).is_empty());
    }

    #[test]
    fn test_any_selected_area_suffices() {
        let records = sample_records();
        let selections = FilterSelections::new().with_service_areas(["West", "South"]);
        let results = filter_providers(&records, &selections);

        let names: Vec<&str> = results.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["B"]);
    }

    #[test]
    fn test_predicates_combine_as_conjunction() {
        let records = sample_records();
        let selections = FilterSelections::new()
            .with_insurance("medi")
            .require_first_dose(true)
            .with_service_area("North");
        let results = filter_providers(&records, &selections);

        let names: Vec<&str> = results.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["A"]);
    }

    #[test]
    fn test_empty_input_yields_empty_output() {
        let records: Vec<ProviderRecord> = Vec::new();
        let selections = FilterSelections::new().with_insurance("medi");

        assert!(filter_providers(&records, &selections).is_empty());
    }
}
