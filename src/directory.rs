/*!
 * Unified directory API for home health provider data
 *
 * Provides a builder pattern and unified interface for loading a provider
 * data file and querying the loaded records. The directory is an explicitly
 * constructed, immutable value: load it once, then search it as often as
 * the user changes their filter selections.
 */

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use crate::{Result, HomeHealthError};
use crate::data_types::ProviderRecord;
use crate::filter::{filter_providers, FilterSelections};
use crate::reader::HomeHealthReader;

/// Builder for loading a provider directory
///
/// # Example
/// ```no_run
/// # use homehealth::directory::ProviderDirectoryBuilder;
/// let directory = ProviderDirectoryBuilder::new()
///     .data_file("data/home_health_companies.csv")
///     .build()?;
/// # Ok::<(), homehealth::HomeHealthError>(())
/// ```
pub struct ProviderDirectoryBuilder {
    data_file_path: Option<PathBuf>,
    #[cfg(feature = "progress")]
    show_progress: bool,
}

impl Default for ProviderDirectoryBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl ProviderDirectoryBuilder {
    /// Create a new directory builder
    pub fn new() -> Self {
        Self {
            data_file_path: None,
            #[cfg(feature = "progress")]
            show_progress: true,
        }
    }

    /// Set the path to the provider data file
    pub fn data_file<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.data_file_path = Some(path.as_ref().to_path_buf());
        self
    }

    #[cfg(feature = "progress")]
    /// Enable or disable progress bars
    pub fn show_progress(mut self, show: bool) -> Self {
        self.show_progress = show;
        self
    }

    /// Build the directory, loading the data file
    pub fn build(self) -> Result<ProviderDirectory> {
        let path = self.data_file_path
            .ok_or_else(|| HomeHealthError::Custom {
                message: "Provider data file path not specified".to_string(),
                suggestion: Some("Use .data_file() to specify the provider CSV file".to_string()),
            })?;

        #[cfg(feature = "progress")]
        let reader = HomeHealthReader::new().with_progress_bar(self.show_progress);

        #[cfg(not(feature = "progress"))]
        let reader = HomeHealthReader::new();

        let providers = reader.load_providers(&path)?;

        Ok(ProviderDirectory { providers })
    }
}

/// The loaded provider directory and its query surface
///
/// Holds the record sequence read-only after load; every search is a pure
/// pass over the same records.
pub struct ProviderDirectory {
    providers: Vec<ProviderRecord>,
}

impl ProviderDirectory {
    /// Load a directory from a provider data file
    ///
    /// Convenience single-call constructor.
    ///
    /// # Example
    /// ```no_run
    /// # use homehealth::directory::ProviderDirectory;
    /// let directory = ProviderDirectory::load("data/home_health_companies.csv")?;
    /// # Ok::<(), homehealth::HomeHealthError>(())
    /// ```
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        ProviderDirectoryBuilder::new().data_file(path).build()
    }

    /// Construct a directory from already-built records
    ///
    /// Lets tests and embedding applications build a directory without
    /// touching the filesystem.
    pub fn from_records(providers: Vec<ProviderRecord>) -> Self {
        Self { providers }
    }

    /// Get the loaded records in file row order
    pub fn providers(&self) -> &[ProviderRecord] {
        &self.providers
    }

    /// Get the total number of providers
    pub fn len(&self) -> usize {
        self.providers.len()
    }

    /// Check if the directory is empty
    pub fn is_empty(&self) -> bool {
        self.providers.is_empty()
    }

    /// Search the directory with the user's filter selections
    ///
    /// The request/response entry point: one call per filter combination,
    /// returning the matching records in their original order.
    pub fn search(&self, selections: &FilterSelections) -> Vec<&ProviderRecord> {
        filter_providers(&self.providers, selections)
    }

    /// Get the selectable insurance plan values
    ///
    /// Sorted and de-duplicated across all records; empty tokens are
    /// skipped since an empty string is not a selectable choice.
    pub fn insurance_options(&self) -> Vec<String> {
        Self::collect_options(self.providers.iter().flat_map(|p| &p.insurance))
    }

    /// Get the selectable service area values
    ///
    /// Sorted and de-duplicated across all records; empty tokens are
    /// skipped.
    pub fn service_area_options(&self) -> Vec<String> {
        Self::collect_options(self.providers.iter().flat_map(|p| &p.service_area))
    }

    fn collect_options<'a, I: Iterator<Item = &'a String>>(values: I) -> Vec<String> {
        let unique: BTreeSet<&String> = values.filter(|v| !v.is_empty()).collect();
        unique.into_iter().cloned().collect()
    }

    /// Get directory statistics
    pub fn statistics(&self) -> DirectoryStatistics {
        DirectoryStatistics::from_directory(self)
    }
}

/// Directory statistics
#[derive(Debug, Clone)]
pub struct DirectoryStatistics {
    pub total_providers: usize,
    pub first_dose_providers: usize,
    pub providers_with_email: usize,
    pub unique_insurance_plans: usize,
    pub unique_service_areas: usize,
}

impl DirectoryStatistics {
    /// Calculate statistics from a directory
    pub fn from_directory(directory: &ProviderDirectory) -> Self {
        let mut stats = Self {
            total_providers: directory.len(),
            first_dose_providers: 0,
            providers_with_email: 0,
            unique_insurance_plans: 0,
            unique_service_areas: 0,
        };

        for provider in directory.providers() {
            if provider.first_dose {
                stats.first_dose_providers += 1;
            }
            if provider.email.is_some() {
                stats.providers_with_email += 1;
            }
        }

        stats.unique_insurance_plans = directory.insurance_options().len();
        stats.unique_service_areas = directory.service_area_options().len();

        stats
    }

    /// Print a formatted summary of the statistics
    pub fn print_summary(&self) {
        println!("=== Home Health Directory Statistics ===");
        println!("Total Providers: {}", self.total_providers);
        if self.total_providers > 0 {
            println!("  Offering First Dose: {} ({:.1}%)",
                self.first_dose_providers,
                (self.first_dose_providers as f64 / self.total_providers as f64) * 100.0
            );
            println!("  With Email Contact: {} ({:.1}%)",
                self.providers_with_email,
                (self.providers_with_email as f64 / self.total_providers as f64) * 100.0
            );
        }
        println!("Unique Insurance Plans: {}", self.unique_insurance_plans);
        println!("Unique Service Areas: {}", self.unique_service_areas);
    }
}
