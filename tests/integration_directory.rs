/*!
 * Integration tests for loading and searching the provider directory
 *
 * These tests write small CSV fixtures to a temporary directory and run the
 * full load/search path against them, including the loader's failure modes.
 */

use homehealth::prelude::*;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

/// Write a CSV fixture and return its path
fn write_fixture(dir: &TempDir, name: &str, contents: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, contents).expect("Failed to write test fixture");
    path
}

fn quiet_reader() -> HomeHealthReader {
    let reader = HomeHealthReader::new();
    #[cfg(feature = "progress")]
    let reader = reader.with_progress_bar(false);
    reader
}

const STANDARD_FIXTURE: &str = "\
name,first_dose,insurance,service_area,email
Sunrise Home Care,yes,Medicare|Aetna,North|East,info@sunrise.example
Valley Nursing,no,Medicaid,South,
Metro Health,YES,unknown,Unknown,contact@metro.example
";

#[test]
fn test_load_standard_fixture() {
    let dir = TempDir::new().unwrap();
    let path = write_fixture(&dir, "providers.csv", STANDARD_FIXTURE);

    let records = quiet_reader().load_providers(&path).unwrap();

    assert_eq!(records.len(), 3);

    let sunrise = &records[0];
    assert_eq!(sunrise.name, "Sunrise Home Care");
    assert!(sunrise.first_dose);
    assert_eq!(sunrise.insurance, vec!["Medicare", "Aetna"]);
    assert_eq!(sunrise.service_area, vec!["North", "East"]);
    assert_eq!(sunrise.email.as_deref(), Some("info@sunrise.example"));

    let valley = &records[1];
    assert!(!valley.first_dose);
    assert_eq!(valley.email, None, "empty email field parses as None");

    // "unknown" in any case maps to an empty list, never to ["unknown"]
    let metro = &records[2];
    assert!(metro.first_dose, "first_dose yes/no is case-insensitive");
    assert!(metro.insurance.is_empty());
    assert!(metro.service_area.is_empty());
}

#[test]
fn test_load_trims_whitespace() {
    let dir = TempDir::new().unwrap();
    let path = write_fixture(
        &dir,
        "providers.csv",
        "name,first_dose,insurance,service_area,email\n  Padded Care  , yes , Medicare | Aetna , North , a@b.example \n",
    );

    let records = quiet_reader().load_providers(&path).unwrap();

    assert_eq!(records[0].name, "Padded Care");
    assert!(records[0].first_dose);
    assert_eq!(records[0].insurance, vec!["Medicare", "Aetna"]);
    assert_eq!(records[0].email.as_deref(), Some("a@b.example"));
}

#[test]
fn test_column_order_is_irrelevant_and_extras_ignored() {
    let dir = TempDir::new().unwrap();
    let reordered = write_fixture(
        &dir,
        "reordered.csv",
        "email,service_area,insurance,first_dose,name,phone\n\
        a@b.example,North,Medicare,yes,Sunrise Home Care,555-0100\n",
    );

    let records = quiet_reader().load_providers(&reordered).unwrap();

    assert_eq!(records.len(), 1);
    assert_eq!(records[0].name, "Sunrise Home Care");
    assert!(records[0].first_dose);
    assert_eq!(records[0].insurance, vec!["Medicare"]);
    assert_eq!(records[0].service_area, vec!["North"]);
    assert_eq!(records[0].email.as_deref(), Some("a@b.example"));
}

#[test]
fn test_missing_email_column_yields_none() {
    let dir = TempDir::new().unwrap();
    let path = write_fixture(
        &dir,
        "providers.csv",
        "name,first_dose,insurance,service_area\nSunrise Home Care,yes,Medicare,North\n",
    );

    let records = quiet_reader().load_providers(&path).unwrap();

    assert_eq!(records[0].email, None);
}

#[test]
fn test_missing_required_column_fails() {
    let dir = TempDir::new().unwrap();
    let path = write_fixture(
        &dir,
        "providers.csv",
        "name,first_dose,insurance\nSunrise Home Care,yes,Medicare\n",
    );

    let err = quiet_reader().load_providers(&path).unwrap_err();

    match err {
        HomeHealthError::MissingColumn { column, found_columns } => {
            assert_eq!(column, "service_area");
            assert_eq!(found_columns, vec!["name", "first_dose", "insurance"]);
        }
        other => panic!("Expected MissingColumn, got: {}", other),
    }
}

#[test]
fn test_missing_file_fails_with_file_not_found() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("does_not_exist.csv");

    let err = quiet_reader().load_providers(&path).unwrap_err();

    assert!(matches!(err, HomeHealthError::FileNotFound { .. }));
    assert!(err.user_message().contains("Suggestion:"));
}

#[test]
fn test_wrong_field_count_fails_the_load() {
    let dir = TempDir::new().unwrap();
    let path = write_fixture(
        &dir,
        "providers.csv",
        "name,first_dose,insurance,service_area\nSunrise Home Care,yes,Medicare\n",
    );

    let err = quiet_reader().load_providers(&path).unwrap_err();

    match err {
        HomeHealthError::CsvParse { line, .. } => assert_eq!(line, Some(2)),
        other => panic!("Expected CsvParse, got: {}", other),
    }
}

#[test]
fn test_multi_value_round_trip() {
    // Joining the parsed tokens with | reproduces the trimmed original
    for raw in ["Medicare|Aetna", "a||b", "", "North | East", "Single"] {
        let parsed = parse_multi_value(raw);
        let rejoined = parsed.join("|");
        let expected: String = raw
            .trim()
            .split('|')
            .map(str::trim)
            .collect::<Vec<_>>()
            .join("|");
        assert_eq!(rejoined, expected, "round-trip failed for {:?}", raw);
    }
}

#[test]
fn test_unknown_is_empty_in_any_case() {
    for raw in ["unknown", "Unknown", "UNKNOWN", "  unknown  "] {
        assert!(parse_multi_value(raw).is_empty(), "{:?} should parse empty", raw);
    }
}

#[test]
fn test_end_to_end_search() {
    let dir = TempDir::new().unwrap();
    let path = write_fixture(&dir, "providers.csv", STANDARD_FIXTURE);

    let directory = ProviderDirectoryBuilder::new()
        .data_file(&path)
        .build()
        .unwrap();

    // Identity search returns everything in file order
    let all = directory.search(&FilterSelections::new());
    let names: Vec<&str> = all.iter().map(|r| r.name.as_str()).collect();
    assert_eq!(names, vec!["Sunrise Home Care", "Valley Nursing", "Metro Health"]);

    // Conjunction of all three predicates
    let selections = FilterSelections::new()
        .with_insurance("medi")
        .require_first_dose(true)
        .with_service_area("North");
    let results = directory.search(&selections);
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].name, "Sunrise Home Care");

    // A combination nothing satisfies is a non-fatal empty result
    let selections = FilterSelections::new().with_service_area("West");
    assert!(directory.search(&selections).is_empty());
}

#[test]
fn test_options_discovery_from_loaded_file() {
    let dir = TempDir::new().unwrap();
    let path = write_fixture(&dir, "providers.csv", STANDARD_FIXTURE);

    let directory = ProviderDirectory::load(&path).unwrap();

    assert_eq!(directory.insurance_options(), vec!["Aetna", "Medicaid", "Medicare"]);
    assert_eq!(directory.service_area_options(), vec!["East", "North", "South"]);
}

#[test]
fn test_statistics_from_loaded_file() {
    let dir = TempDir::new().unwrap();
    let path = write_fixture(&dir, "providers.csv", STANDARD_FIXTURE);

    let stats = ProviderDirectory::load(&path).unwrap().statistics();

    assert_eq!(stats.total_providers, 3);
    assert_eq!(stats.first_dose_providers, 2);
    assert_eq!(stats.providers_with_email, 2);
    assert_eq!(stats.unique_insurance_plans, 3);
    assert_eq!(stats.unique_service_areas, 3);
}
