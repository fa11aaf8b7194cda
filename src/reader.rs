/*!
 * CSV reader for home health provider data files
 *
 * This module reads the provider data file into structured records with
 * header validation and optional progress reporting.
 */

use std::fs::File;
use std::path::Path;
use std::time::Instant;
use csv::ReaderBuilder;

#[cfg(feature = "progress")]
use indicatif::{ProgressBar, ProgressStyle};

use crate::{
    Result, HomeHealthError, ErrorContext,
    constants::{FIRST_DOSE_AFFIRMATIVE, UNKNOWN_VALUE, VALUE_DELIMITER},
    data_types::ProviderRecord,
    schema::{ProviderColumns, ProviderFileSchema},
};

/// Home health provider data reader
pub struct HomeHealthReader {
    /// Whether to show a progress bar while reading
    #[cfg(feature = "progress")]
    show_progress_bar: bool,
}

impl Default for HomeHealthReader {
    fn default() -> Self {
        Self::new()
    }
}

impl HomeHealthReader {
    /// Create a new reader with default settings
    pub fn new() -> Self {
        Self {
            #[cfg(feature = "progress")]
            show_progress_bar: true,
        }
    }

    #[cfg(feature = "progress")]
    /// Enable or disable the progress bar
    pub fn with_progress_bar(mut self, show: bool) -> Self {
        self.show_progress_bar = show;
        self
    }

    /// Load provider records from a CSV file
    ///
    /// The header row must carry the required columns named by
    /// [`ProviderFileSchema`]; column order is irrelevant and extra
    /// columns are ignored. Records are returned in file row order.
    pub fn load_providers<P: AsRef<Path>>(&self, path: P) -> Result<Vec<ProviderRecord>> {
        let path = path.as_ref();

        if !path.exists() {
            return Err(HomeHealthError::file_not_found_with_suggestion(path.to_path_buf()));
        }

        let file = File::open(path)?;

        #[cfg(feature = "progress")]
        let file_size = file.metadata()?.len();

        let mut reader = ReaderBuilder::new()
            .has_headers(true)
            .from_reader(file);

        let headers: Vec<String> = reader.headers()?.iter().map(|s| s.to_string()).collect();
        let columns = ProviderFileSchema::locate_columns(&headers)?;

        let mut records = Vec::new();
        let start_time = Instant::now();

        #[cfg(feature = "progress")]
        let progress_bar = if self.show_progress_bar {
            let pb = ProgressBar::new(file_size);
            pb.set_style(
                ProgressStyle::default_bar()
                    .template("[{elapsed_precise}] [{bar:40.cyan/blue}] {bytes}/{total_bytes} ({eta})")
                    .unwrap()
                    .progress_chars("#>-")
            );
            Some(pb)
        } else {
            None
        };

        for (idx, result) in reader.records().enumerate() {
            let csv_record = result.map_err(|e| HomeHealthError::CsvParse {
                message: e.to_string(),
                line: Some(idx + 2), // +2 for header and 0-based index
                context: ErrorContext {
                    file_path: Some(path.to_path_buf()),
                    line_number: Some(idx + 2),
                    ..Default::default()
                },
            })?;

            #[cfg(feature = "progress")]
            if let (Some(pb), Some(pos)) = (progress_bar.as_ref(), csv_record.position()) {
                pb.set_position(pos.byte());
            }

            records.push(self.parse_provider_record(&csv_record, &columns));
        }

        #[cfg(feature = "progress")]
        if let Some(pb) = progress_bar {
            pb.finish_and_clear();
        }

        let elapsed = start_time.elapsed();

        // The summary goes to stderr so stdout stays clean for record output
        #[cfg(feature = "progress")]
        if self.show_progress_bar {
            eprintln!(
                "Loaded {} home health provider records in {:.2}s",
                records.len(),
                elapsed.as_secs_f64()
            );
        }

        #[cfg(not(feature = "progress"))]
        eprintln!(
            "Loaded {} home health provider records in {:.2}s",
            records.len(),
            elapsed.as_secs_f64()
        );

        Ok(records)
    }

    /// Parse one provider record from a CSV row
    fn parse_provider_record(&self, record: &csv::StringRecord, columns: &ProviderColumns) -> ProviderRecord {
        let get_field = |index: usize| record.get(index).unwrap_or("").trim();

        let email = columns.email
            .map(get_field)
            .filter(|value| !value.is_empty())
            .map(|value| value.to_string());

        ProviderRecord {
            name: get_field(columns.name).to_string(),
            first_dose: parse_yes_no(get_field(columns.first_dose)),
            insurance: parse_multi_value(get_field(columns.insurance)),
            service_area: parse_multi_value(get_field(columns.service_area)),
            email,
        }
    }
}

/// Split a raw multi-value field on `|` into trimmed sub-tokens
///
/// The literal value "unknown" (case-insensitive, after trimming) marks an
/// absent list and yields an empty sequence, never a sequence containing
/// "unknown". Empty sub-tokens are preserved, so joining the result with
/// `|` reproduces the trimmed input.
pub fn parse_multi_value(raw: &str) -> Vec<String> {
    let trimmed = raw.trim();

    if trimmed.eq_ignore_ascii_case(UNKNOWN_VALUE) {
        return Vec::new();
    }

    trimmed
        .split(VALUE_DELIMITER)
        .map(|token| token.trim().to_string())
        .collect()
}

/// Parse a yes/no flag field
///
/// True iff the trimmed, lower-cased value equals "yes"; any other value
/// (including empty) is false.
pub fn parse_yes_no(raw: &str) -> bool {
    raw.trim().eq_ignore_ascii_case(FIRST_DOSE_AFFIRMATIVE)
}
