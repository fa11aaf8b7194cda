/*!
 * # Home Health Provider Directory Library
 *
 * A Rust library for loading, filtering, and displaying home health
 * provider directories.
 *
 * ## Features
 *
 * - 🔧 **Easy to Use**: Simple builder pattern for loading a provider directory
 * - 🔍 **Independent Filters**: Insurance, first-dose, and service-area predicates
 *   that combine as a conjunction and preserve record order
 * - 🧩 **Decoupled Presentation**: A pure request/response search surface that any
 *   UI (the bundled CLI included) can sit on top of
 * - 🛡️ **Type Safe**: Strongly typed records with detailed, suggestion-bearing errors
 *
 * ## Quick Start
 *
 * ```no_run
 * use homehealth::prelude::*;
 *
 * # fn main() -> Result<()> {
 * // Load the provider directory once at startup
 * let directory = ProviderDirectory::load("data/home_health_companies.csv")?;
 *
 * // Build the user's filter selections
 * let selections = FilterSelections::new()
 *     .with_insurance("Medicare")
 *     .require_first_dose(true)
 *     .with_service_area("North");
 *
 * // One search per filter combination
 * let matches = directory.search(&selections);
 * println!("Found {} matching providers", matches.len());
 * # Ok(())
 * # }
 * ```
 *
 * ## Loading Data
 *
 * ### Using the Builder Pattern
 *
 * ```no_run
 * # use homehealth::prelude::*;
 * # fn main() -> Result<()> {
 * let directory = ProviderDirectoryBuilder::new()
 *     .data_file("data/home_health_companies.csv")
 *     .build()?;
 * # Ok(())
 * # }
 * ```
 *
 * ### Without the Filesystem
 *
 * ```
 * # use homehealth::prelude::*;
 * let directory = ProviderDirectory::from_records(vec![]);
 * assert!(directory.is_empty());
 * ```
 *
 * ## Populating Selection Inputs
 *
 * ```no_run
 * # use homehealth::prelude::*;
 * # fn main() -> Result<()> {
 * # let directory = ProviderDirectory::load("data/home_health_companies.csv")?;
 * // The distinct values across the directory, sorted, for select widgets
 * let plans = directory.insurance_options();
 * let areas = directory.service_area_options();
 * # Ok(())
 * # }
 * ```
 *
 * ## Statistics
 *
 * ```no_run
 * # use homehealth::prelude::*;
 * # fn main() -> Result<()> {
 * # let directory = ProviderDirectory::load("data/home_health_companies.csv")?;
 * let stats = directory.statistics();
 * stats.print_summary();
 * # Ok(())
 * # }
 * ```
 *
 * ## Input File Format
 *
 * A UTF-8 CSV with a header row. Required columns: `name`, `first_dose`
 * (yes/no, case-insensitive), `insurance` and `service_area`
 * (pipe-delimited lists, or the literal "unknown" for no data). Optional
 * column: `email`. Column order is irrelevant and extra columns are
 * ignored.
 */

// Re-export error types from root
pub use error::{HomeHealthError, Result, ErrorContext};

// Public modules
pub mod data_types;
pub mod reader;
pub mod schema;
pub mod error;
pub mod filter;
pub mod directory;
pub mod config;

/// Prelude module for convenient imports
///
/// Import everything you need with:
/// ```
/// use homehealth::prelude::*;
/// ```
pub mod prelude {
    pub use crate::data_types::ProviderRecord;
    pub use crate::reader::{HomeHealthReader, parse_multi_value, parse_yes_no};
    pub use crate::schema::{ProviderColumns, ProviderFileSchema};
    pub use crate::error::{HomeHealthError, Result};
    pub use crate::filter::{FilterSelections, filter_providers};
    pub use crate::directory::{ProviderDirectory, ProviderDirectoryBuilder, DirectoryStatistics};
    pub use crate::config::{ConfigBuilder, FinderConfig};
}

/// Provider data file constants
pub mod constants {
    /// Raw field value marking an absent insurance or service-area list
    pub const UNKNOWN_VALUE: &str = "unknown";

    /// Delimiter between entries of a multi-value field
    pub const VALUE_DELIMITER: char = '|';

    /// The first_dose value meaning the provider offers an initial dose
    pub const FIRST_DOSE_AFFIRMATIVE: &str = "yes";

    /// Insurance selection sentinel meaning "no insurance filter"
    pub const ANY_SENTINEL: &str = "Any";
}

/// Common recipes and utility functions
pub mod cookbook {
    use crate::prelude::*;
    use std::collections::BTreeMap;

    /// Find providers by partial name match
    ///
    /// Case-insensitive search across provider names.
    pub fn find_by_partial_name<'a>(
        directory: &'a ProviderDirectory,
        name_query: &str,
    ) -> Vec<&'a ProviderRecord> {
        let query_lower = name_query.to_lowercase();

        directory.providers().iter()
            .filter(|p| p.name.to_lowercase().contains(&query_lower))
            .collect()
    }

    /// Find providers accepting an insurance plan
    ///
    /// # Example
    /// ```no_run
    /// # use homehealth::prelude::*;
    /// # use homehealth::cookbook::providers_accepting;
    /// # fn main() -> Result<()> {
    /// # let directory = ProviderDirectory::load("data/home_health_companies.csv")?;
    /// let medicare = providers_accepting(&directory, "Medicare");
    /// # Ok(())
    /// # }
    /// ```
    pub fn providers_accepting<'a>(
        directory: &'a ProviderDirectory,
        plan: &str,
    ) -> Vec<&'a ProviderRecord> {
        directory.search(&FilterSelections::new().with_insurance(plan))
    }

    /// Get provider counts per service area
    ///
    /// Returns a sorted map of service area to number of providers
    /// covering it.
    pub fn provider_counts_by_area(directory: &ProviderDirectory) -> BTreeMap<String, usize> {
        let mut counts = BTreeMap::new();

        for provider in directory.providers() {
            for area in &provider.service_area {
                if !area.is_empty() {
                    *counts.entry(area.clone()).or_insert(0) += 1;
                }
            }
        }

        counts
    }
}

#[cfg(test)]
mod tests {
    use crate::prelude::*;
    use crate::cookbook;

    fn provider(name: &str, insurance: &[&str], areas: &[&str]) -> ProviderRecord {
        ProviderRecord {
            name: name.to_string(),
            first_dose: false,
            insurance: insurance.iter().map(|s| s.to_string()).collect(),
            service_area: areas.iter().map(|s| s.to_string()).collect(),
            email: None,
        }
    }

    #[test]
    fn test_cookbook_partial_name_search() {
        let directory = ProviderDirectory::from_records(vec![
            provider("Sunrise Home Care", &[], &[]),
            provider("Valley Nursing", &[], &[]),
        ]);

        let results = cookbook::find_by_partial_name(&directory, "sunrise");
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].name, "Sunrise Home Care");
    }

    #[test]
    fn test_cookbook_providers_accepting() {
        let directory = ProviderDirectory::from_records(vec![
            provider("A", &["Medicare"], &[]),
            provider("B", &["Aetna"], &[]),
        ]);

        let results = cookbook::providers_accepting(&directory, "medicare");
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].name, "A");
    }

    #[test]
    fn test_cookbook_counts_by_area() {
        let directory = ProviderDirectory::from_records(vec![
            provider("A", &[], &["North", "East"]),
            provider("B", &[], &["North"]),
        ]);

        let counts = cookbook::provider_counts_by_area(&directory);
        assert_eq!(counts.get("North"), Some(&2));
        assert_eq!(counts.get("East"), Some(&1));
        assert_eq!(counts.get("South"), None);
    }
}
