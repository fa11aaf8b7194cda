/*!
 * Schema definitions for the home health provider data file
 *
 * This module names the header columns the loader expects and locates them
 * in an actual header row. Columns are matched by name, not position, so
 * files may order their columns freely and carry extra columns.
 */

use crate::{HomeHealthError, Result};

/// Required column: provider name
pub const NAME_COLUMN: &str = "name";
/// Required column: first-dose capability flag (yes/no)
pub const FIRST_DOSE_COLUMN: &str = "first_dose";
/// Required column: pipe-delimited insurance plans, or "unknown"
pub const INSURANCE_COLUMN: &str = "insurance";
/// Required column: pipe-delimited service areas, or "unknown"
pub const SERVICE_AREA_COLUMN: &str = "service_area";
/// Optional column: contact email
pub const EMAIL_COLUMN: &str = "email";

/// Resolved positions of the provider columns within one header row
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProviderColumns {
    pub name: usize,
    pub first_dose: usize,
    pub insurance: usize,
    pub service_area: usize,
    /// None when the file has no email column
    pub email: Option<usize>,
}

/// Provider data file schema
pub struct ProviderFileSchema;

impl ProviderFileSchema {
    /// Get the column names every provider file must carry
    pub fn required_column_names() -> Vec<&'static str> {
        vec![
            NAME_COLUMN,
            FIRST_DOSE_COLUMN,
            INSURANCE_COLUMN,
            SERVICE_AREA_COLUMN,
        ]
    }

    /// Get the column names the loader reads when present
    pub fn optional_column_names() -> Vec<&'static str> {
        vec![EMAIL_COLUMN]
    }

    /// Locate the provider columns in a header row
    ///
    /// Header names are matched exactly after trimming. Extra columns are
    /// ignored. Fails with [`HomeHealthError::MissingColumn`] when a
    /// required column is absent.
    pub fn locate_columns(headers: &[String]) -> Result<ProviderColumns> {
        let position = |column: &str| headers.iter().position(|h| h.trim() == column);

        let require = |column: &'static str| -> Result<usize> {
            position(column).ok_or_else(|| HomeHealthError::missing_column(column, headers))
        };

        Ok(ProviderColumns {
            name: require(NAME_COLUMN)?,
            first_dose: require(FIRST_DOSE_COLUMN)?,
            insurance: require(INSURANCE_COLUMN)?,
            service_area: require(SERVICE_AREA_COLUMN)?,
            email: position(EMAIL_COLUMN),
        })
    }

    /// Validate that a header row contains every required column
    pub fn validate_headers(headers: &[String]) -> Result<()> {
        Self::locate_columns(headers).map(|_| ())
    }
}
