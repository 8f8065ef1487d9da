use super::{fields, site_with_sources, valid_config};
use crate::conf::types::{Config, LocalSource, S3Source, Source, SourceSpec};
use crate::conf::validation::{Severity, ValidateOptions, validate_config};
use pretty_assertions::assert_eq;

#[test]
fn missing_config_is_a_single_error() {
    let report = validate_config(None, &ValidateOptions::default());

    assert_eq!(fields(&report.errors), vec!["config"]);
    assert!(report.warnings.is_empty());
}

#[test]
fn valid_config_has_no_issues() {
    let report = validate_config(Some(&valid_config()), &ValidateOptions::default());

    assert!(!report.has_violations());
    assert!(report.is_ok());
}

#[test]
fn starter_config_is_structurally_valid() {
    let report = validate_config(Some(&Config::starter()), &ValidateOptions::default());

    assert!(!report.has_violations());
}

#[test]
fn empty_config_reports_every_section_in_order() {
    // Arrange
    let cfg = Config::default();

    // Act
    let report = validate_config(Some(&cfg), &ValidateOptions::default());

    // Assert
    assert_eq!(
        fields(&report.errors),
        vec![
            "websites",
            "database.driver",
            "database.dsn",
            "system.logRetentionDays",
            "system.parseBatchSize",
            "system.ipGeoCacheLimit",
            "pvFilter.statusCodeInclude",
            "pvFilter.excludePatterns",
        ]
    );
    assert!(report.errors.iter().all(|e| e.severity == Severity::Error));
}

#[test]
fn issues_follow_website_then_source_then_global_order() {
    // Arrange
    let mut cfg = valid_config();
    cfg.websites = vec![
        site_with_sources(
            "",
            vec![
                SourceSpec::new("s", Source::S3(S3Source::default())),
                SourceSpec::new("s", Source::Agent),
            ],
        ),
        site_with_sources("second", vec![]),
    ];
    cfg.database.dsn.clear();

    // Act
    let report = validate_config(Some(&cfg), &ValidateOptions::default());

    // Assert
    assert_eq!(
        fields(&report.errors),
        vec![
            "websites[0].name",
            "websites[0].sources[0].bucket",
            "websites[0].sources[1].id",
            "websites[1].logPath",
            "database.dsn",
        ]
    );
}

#[test]
fn setup_mode_turns_missing_local_path_into_warning() {
    // Arrange
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("not-yet.log");
    let mut cfg = valid_config();
    cfg.websites = vec![site_with_sources(
        "blog",
        vec![SourceSpec::from_local(
            "main",
            LocalSource {
                path: Some(missing.to_string_lossy().to_string()),
                pattern: None,
            },
        )],
    )];

    // Act
    let setup = validate_config(
        Some(&cfg),
        &ValidateOptions {
            check_paths: true,
            setup_mode: true,
            ..Default::default()
        },
    );
    let strict = validate_config(
        Some(&cfg),
        &ValidateOptions {
            check_paths: true,
            setup_mode: false,
            ..Default::default()
        },
    );

    // Assert
    assert_eq!(setup.errors.len(), 0);
    assert_eq!(fields(&setup.warnings), vec!["websites[0].sources[0].path"]);
    assert_eq!(fields(&strict.errors), vec!["websites[0].sources[0].path"]);
    assert_eq!(strict.warnings.len(), 0);
}

#[test]
fn report_renders_plain_and_json() {
    let report = validate_config(Some(&Config::default()), &ValidateOptions::default());

    let plain = report.render_plain();
    let json: serde_json::Value = serde_json::from_str(&report.render_json().unwrap()).unwrap();

    assert!(plain.starts_with("websites: error: at least one website must be configured"));
    assert_eq!(json["errors"][0]["field"], "websites");
    assert_eq!(json["errors"][0]["severity"], "error");
    assert_eq!(json["warnings"].as_array().unwrap().len(), 0);
}

#[test]
fn warnings_alone_keep_the_report_ok() {
    // Arrange
    let mut cfg = valid_config();
    cfg.websites = vec![site_with_sources(
        "edge",
        vec![SourceSpec::new(
            "remote",
            Source::Sftp(crate::conf::types::SftpSource {
                host: "edge.example.com".to_string(),
                user: "logs".to_string(),
                auth: Some(crate::conf::types::SftpAuth {
                    key_file: Some("/keys/id".to_string()),
                    password: None,
                }),
                path: Some("/srv/access.log".to_string()),
                ..Default::default()
            }),
        )],
    )];
    let opts = ValidateOptions {
        check_remote: true,
        ..Default::default()
    };

    // Act
    let report = validate_config(Some(&cfg), &opts);

    // Assert
    assert!(report.is_ok());
    assert!(report.has_violations());
    assert_eq!(fields(&report.warnings), vec!["websites[0].sources[0]"]);
}
