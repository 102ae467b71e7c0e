//! CLI command tests
//!
//! This module contains all tests for the CLI commands.

use std::io::Write;
use std::path::PathBuf;

use bucketwise_core::{Bucket, BudgetConfig, BudgetSplit, KeywordRules};
use bucketwise_server::DEFAULT_ALLOWED_ORIGINS;
use tempfile::TempDir;

use crate::commands::{self, format_money, SplitOverrides};

/// Write a transaction file into a fresh temp dir, returning (dir, path)
fn write_transactions(name: &str, contents: &str) -> (TempDir, PathBuf) {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join(name);
    let mut file = std::fs::File::create(&path).unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    (dir, path)
}

const SAMPLE_CSV: &str = "\
date,merchant,amount
2025-11-01,Rent Co,1800
2025-11-02,Netflix,20
2025-11-03,Roth IRA,100
";

// ========== Categorize Command Tests ==========

#[test]
fn test_classify_merchants_reports_keyword() {
    let config = BudgetConfig::default();
    let merchants = vec![
        "Roth IRA".to_string(),
        "City Water Dept".to_string(),
        "Netflix".to_string(),
    ];

    let results = commands::classify_merchants(&config, &merchants);
    assert_eq!(results.len(), 3);
    assert_eq!(results[0], (Bucket::FutureYou, Some("roth")));
    assert_eq!(results[1], (Bucket::Needs, Some("water")));
    assert_eq!(results[2], (Bucket::Wants, None));
}

#[test]
fn test_classify_merchants_uses_configured_rules() {
    let config = BudgetConfig {
        rules: KeywordRules::new(["brokerage"], ["daycare"]),
        ..Default::default()
    };
    let merchants = vec!["Sunny Daycare".to_string(), "Rent Co".to_string()];

    let results = commands::classify_merchants(&config, &merchants);
    assert_eq!(results[0], (Bucket::Needs, Some("daycare")));
    // "rent" is not in the configured needs set
    assert_eq!(results[1], (Bucket::Wants, None));
}

#[test]
fn test_cmd_categorize() {
    let config = BudgetConfig::default();
    let result = commands::cmd_categorize(&config, &["Electric Co".to_string()]);
    assert!(result.is_ok());
}

// ========== Insights Command Tests ==========

#[test]
fn test_run_insights_csv() {
    let (_dir, path) = write_transactions("txns.csv", SAMPLE_CSV);
    let config = BudgetConfig::default();

    let response =
        commands::run_insights(&config, 4000.0, &path, SplitOverrides::default()).unwrap();

    assert_eq!(response.summary.needs_spent, 1800.0);
    assert_eq!(response.summary.wants_spent, 20.0);
    assert_eq!(response.summary.future_spent, 100.0);
    assert!(response.insights[0].starts_with("Your Needs spending is within your target"));
    assert!(response.insights[2].contains("about $700 less toward Future You"));
}

#[test]
fn test_run_insights_json() {
    let (_dir, path) = write_transactions(
        "txns.json",
        r#"[
            {"id": 1, "date": "2025-11-01", "merchant": "Rent Co", "amount": 1800},
            {"id": 2, "date": "2025-11-02", "merchant": "Netflix", "amount": 20, "category": "Needs"}
        ]"#,
    );
    let config = BudgetConfig::default();

    let response =
        commands::run_insights(&config, 4000.0, &path, SplitOverrides::default()).unwrap();

    // Caller-supplied category wins over the keyword rules
    assert_eq!(response.summary.needs_spent, 1820.0);
    assert_eq!(response.summary.wants_spent, 0.0);
}

#[test]
fn test_run_insights_overrides_replace_configured_split() {
    let (_dir, path) = write_transactions("txns.csv", SAMPLE_CSV);
    let config = BudgetConfig {
        split: BudgetSplit {
            needs: 0.3,
            wants: 0.3,
            future: 0.4,
        },
        ..Default::default()
    };

    // Configured needs target is 1200, so 1800 is over
    let response =
        commands::run_insights(&config, 4000.0, &path, SplitOverrides::default()).unwrap();
    assert!(response.insights[0].contains("about $600 above"));

    let overrides = SplitOverrides {
        needs: Some(0.5),
        ..Default::default()
    };
    let response = commands::run_insights(&config, 4000.0, &path, overrides).unwrap();
    assert!(response.insights[0].starts_with("Your Needs spending is within your target"));
    // future still uses the configured 40% target
    assert!(response.insights[2].contains("about $1500 less"));
}

#[test]
fn test_run_insights_unsupported_extension() {
    let (_dir, path) = write_transactions("txns.txt", SAMPLE_CSV);
    let config = BudgetConfig::default();

    let err = commands::run_insights(&config, 4000.0, &path, SplitOverrides::default())
        .unwrap_err();
    assert!(err.to_string().contains("Failed to load transactions"));
}

#[test]
fn test_run_insights_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("missing.csv");
    let config = BudgetConfig::default();

    let result = commands::run_insights(&config, 4000.0, &path, SplitOverrides::default());
    assert!(result.is_err());
}

#[test]
fn test_cmd_insights_report_and_json() {
    let (_dir, path) = write_transactions("txns.csv", SAMPLE_CSV);
    let config = BudgetConfig::default();

    assert!(
        commands::cmd_insights(&config, 4000.0, &path, SplitOverrides::default(), false).is_ok()
    );
    assert!(
        commands::cmd_insights(&config, 4000.0, &path, SplitOverrides::default(), true).is_ok()
    );
}

// ========== Config Command Tests ==========

#[test]
fn test_load_config_explicit_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "[split]\nneeds = 0.6\nwants = 0.2").unwrap();

    let config = commands::load_config(Some(file.path())).unwrap();
    assert_eq!(config.split.needs, 0.6);
    assert_eq!(config.split.wants, 0.2);
    assert_eq!(config.split.future, 0.2);
}

#[test]
fn test_load_config_missing_file_is_error() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("budget.toml");

    let err = commands::load_config(Some(&missing)).unwrap_err();
    assert!(err.to_string().contains("Failed to load budget config"));
}

#[test]
fn test_cmd_config() {
    let config = BudgetConfig::default();
    assert!(commands::cmd_config(&config).is_ok());

    let lopsided = BudgetConfig {
        split: BudgetSplit {
            needs: 0.7,
            wants: 0.3,
            future: 0.2,
        },
        ..Default::default()
    };
    assert!(commands::cmd_config(&lopsided).is_ok());
}

// ========== Serve Command Tests ==========

#[test]
fn test_server_config_defaults_to_builtin_origins() {
    let config = commands::server_config(None);
    assert_eq!(config.allowed_origins, DEFAULT_ALLOWED_ORIGINS);
}

#[test]
fn test_server_config_empty_list_is_same_origin() {
    let config = commands::server_config(Some(""));
    assert!(config.allowed_origins.is_empty());
}

#[test]
fn test_server_config_parses_list() {
    let config = commands::server_config(Some("http://a.test/, https://b.test"));
    assert_eq!(config.allowed_origins, ["http://a.test", "https://b.test"]);
}

// ========== Helper Tests ==========

#[test]
fn test_format_money() {
    assert_eq!(format_money(0.0), "$0.00");
    assert_eq!(format_money(1800.0), "$1800.00");
    assert_eq!(format_money(12.5), "$12.50");
    assert_eq!(format_money(-40.5), "-$40.50");
}
