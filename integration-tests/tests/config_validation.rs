use integration_tests::harness::{capture_events, fixture_path, load_fixture, point_local_sources_at};
use logpulse_core::conf::validation::Severity;
use logpulse_core::conf::{ConfigError, ValidateOptions, load_config, validate_config};
use pretty_assertions::assert_eq;
use std::fs;

fn fields(issues: &[logpulse_core::conf::validation::FieldIssue]) -> Vec<&str> {
    issues.iter().map(|i| i.field.as_str()).collect()
}

/// A complete multi-source config is accepted as-is when paths are not checked
#[test]
fn valid_fixture_passes_structural_validation() {
    // Arrange
    let cfg = load_fixture("valid.json");

    // Act
    let report = validate_config(Some(&cfg), &ValidateOptions::default());

    // Assert
    assert!(report.is_ok(), "unexpected errors: {:?}", report.errors);
    assert!(!report.has_violations());
    assert_eq!(cfg.websites.len(), 2);
    assert_eq!(cfg.websites[0].sources.len(), 4);
}

/// Local paths and patterns that exist on disk pass the filesystem check
#[test]
fn valid_fixture_passes_path_checks_when_files_exist() {
    // Arrange
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("access.log"), "").unwrap();
    fs::write(dir.path().join("access-2024-01-01.log"), "").unwrap();

    let mut cfg = load_fixture("valid.json");
    point_local_sources_at(&mut cfg, dir.path());

    let opts = ValidateOptions {
        check_paths: true,
        ..Default::default()
    };

    // Act
    let report = validate_config(Some(&cfg), &opts);

    // Assert
    assert!(report.is_ok(), "unexpected errors: {:?}", report.errors);
    assert!(report.warnings.is_empty());
}

/// Missing local files block startup unless setup mode is on
#[test]
fn missing_local_files_are_errors_outside_setup_mode() {
    // Arrange
    let dir = tempfile::tempdir().unwrap();
    let mut cfg = load_fixture("valid.json");
    point_local_sources_at(&mut cfg, dir.path());

    let opts = ValidateOptions {
        check_paths: true,
        ..Default::default()
    };

    // Act
    let report = validate_config(Some(&cfg), &opts);

    // Assert
    assert_eq!(
        fields(&report.errors),
        vec!["websites[0].sources[0].path", "websites[0].sources[1].pattern"]
    );
    assert!(report.errors[0].message.starts_with("log path does not exist: "));
    assert!(report.errors[1].message.starts_with("no files match pattern "));
}

/// Setup mode downgrades missing local files to warnings
#[test]
fn missing_local_files_are_warnings_in_setup_mode() {
    // Arrange
    let dir = tempfile::tempdir().unwrap();
    let mut cfg = load_fixture("valid.json");
    point_local_sources_at(&mut cfg, dir.path());

    let opts = ValidateOptions {
        check_paths: true,
        setup_mode: true,
        ..Default::default()
    };

    // Act
    let report = validate_config(Some(&cfg), &opts);

    // Assert
    assert!(report.is_ok());
    assert_eq!(
        fields(&report.warnings),
        vec!["websites[0].sources[0].path", "websites[0].sources[1].pattern"]
    );
    assert!(
        report
            .warnings
            .iter()
            .all(|w| w.severity == Severity::Warning && w.message.contains("initial setup"))
    );
}

/// Every structural problem is reported in one pass, in check order
#[test]
fn invalid_fixture_reports_all_errors_in_order() {
    // Arrange
    let cfg = load_fixture("invalid.json");
    let opts = ValidateOptions {
        check_remote: true,
        ..Default::default()
    };

    // Act
    let report = validate_config(Some(&cfg), &opts);

    // Assert
    assert_eq!(
        fields(&report.errors),
        vec![
            "websites[0].name",
            "websites[0].sources[0]",
            "websites[0].sources[1].id",
            "websites[0].sources[1].type",
            "websites[0].sources[2].id",
            "websites[0].sources[2].type",
            "websites[1].sources[0].user",
            "websites[1].sources[0].auth",
            "websites[1].sources[1].bucket",
            "websites[1].sources[1].accessKey",
            "websites[1].sources[2].url",
            "websites[1].sources[2].index.url",
            "database.driver",
            "database.dsn",
            "system.logRetentionDays",
            "system.parseBatchSize",
            "pvFilter.statusCodeInclude",
            "pvFilter.excludePatterns",
        ]
    );
    assert_eq!(fields(&report.warnings), vec!["websites[1].sources[0]"]);

    assert_eq!(report.errors[2].message, "duplicate source.id: a");
    assert!(report.errors[3].message.starts_with("unsupported source.type: ftp"));
    assert_eq!(
        report.errors[12].message,
        "unsupported database.driver: mysql (only postgres is supported)"
    );
    assert_eq!(
        report.errors[15].message,
        "system.parseBatchSize must be greater than 0 (got -5)"
    );
}

/// Legacy single-log websites are checked through `logPath`
#[test]
fn legacy_toml_fixture_checks_log_path() {
    // Arrange
    let dir = tempfile::tempdir().unwrap();
    let mut cfg = load_fixture("legacy.toml");
    point_local_sources_at(&mut cfg, dir.path());

    let opts = ValidateOptions {
        check_paths: true,
        ..Default::default()
    };

    // Act
    let before = validate_config(Some(&cfg), &opts);
    fs::write(dir.path().join("legacy-access.log"), "").unwrap();
    let after = validate_config(Some(&cfg), &opts);

    // Assert
    assert_eq!(fields(&before.errors), vec!["websites[0].logPath"]);
    assert!(after.is_ok(), "unexpected errors: {:?}", after.errors);
}

/// An absent config yields exactly one error
#[test]
fn absent_config_is_reported() {
    let report = validate_config(None, &ValidateOptions::default());

    assert_eq!(fields(&report.errors), vec!["config"]);
    assert!(report.warnings.is_empty());
}

/// Loading a file that does not exist surfaces a read error
#[test]
fn missing_config_file_is_a_read_error() {
    let err = load_config(&fixture_path("does-not-exist.json")).unwrap_err();

    assert!(matches!(err, ConfigError::ReadFile { .. }));
}

/// Validation logs a summary of what it found
#[test]
fn validation_emits_summary_event() {
    // Arrange
    let cfg = load_fixture("invalid.json");

    // Act
    let (_, events) = capture_events(|| validate_config(Some(&cfg), &ValidateOptions::default()));

    // Assert
    let summary = events
        .iter()
        .find(|e| e.message() == Some("configuration validated"))
        .expect("expected validation summary event");
    assert_eq!(summary.field("errors"), Some("18"));
    assert_eq!(summary.field("warnings"), Some("0"));
}
