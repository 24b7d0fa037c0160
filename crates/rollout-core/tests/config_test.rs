use rollout_core::config::*;
use rollout_core::errors::{ConfigError, RolloutErrorCode};

#[test]
fn config_loads_from_empty_toml_with_all_defaults() {
    let config = RolloutConfig::from_toml("").unwrap();

    assert_eq!(config.traversal.order, TraversalOrder::BreadthFirst);
    assert_eq!(config.limited.max_rounds, None);
    assert_eq!(config.limited.effective_max_rounds(), u32::MAX);
    assert_eq!(config.observability.effective_log_filter(), "rollout=info");
}

#[test]
fn config_loads_partial_toml_with_overrides() {
    let toml = r#"
[traversal]
order = "depth_first"

[limited]
max_rounds = 12
"#;
    let config = RolloutConfig::from_toml(toml).unwrap();
    assert_eq!(config.traversal.order, TraversalOrder::DepthFirst);
    assert_eq!(config.limited.max_rounds, Some(12));
    // Non-overridden fields keep defaults
    assert!(config.observability.log_filter.is_none());
}

#[test]
fn unknown_traversal_order_is_a_parse_error() {
    let err = RolloutConfig::from_toml("[traversal]\norder = \"sideways\"\n").unwrap_err();
    assert!(matches!(err, ConfigError::ParseError { .. }));
    assert_eq!(err.error_code(), "CONFIG_PARSE");
}

#[test]
fn zero_max_rounds_fails_validation() {
    let err = RolloutConfig::from_toml("[limited]\nmax_rounds = 0\n").unwrap_err();
    match &err {
        ConfigError::ValidationFailed { field, .. } => assert_eq!(field, "limited.max_rounds"),
        other => panic!("expected validation failure, got {other:?}"),
    }
    assert!(err.coded_string().starts_with("[CONFIG_INVALID]"));
}

#[test]
fn blank_log_filter_fails_validation() {
    let err = RolloutConfig::from_toml("[observability]\nlog_filter = \"  \"\n").unwrap_err();
    assert!(matches!(err, ConfigError::ValidationFailed { .. }));
}

#[test]
fn config_serde_roundtrip() {
    let mut config = RolloutConfig::default();
    config.traversal.order = TraversalOrder::DepthFirst;
    config.limited.max_rounds = Some(3);
    let toml_str = config.to_toml().unwrap();
    let roundtripped = RolloutConfig::from_toml(&toml_str).unwrap();
    assert_eq!(roundtripped.traversal.order, TraversalOrder::DepthFirst);
    assert_eq!(roundtripped.limited.max_rounds, Some(3));
}

#[test]
fn load_reads_project_file() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(
        dir.path().join("rollout.toml"),
        "[observability]\nlog_filter = \"rollout_infection=debug\"\n",
    )
    .unwrap();

    let config = RolloutConfig::load(dir.path()).unwrap();
    assert_eq!(
        config.observability.effective_log_filter(),
        "rollout_infection=debug"
    );
}

#[test]
fn load_without_project_file_uses_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let config = RolloutConfig::load(dir.path()).unwrap();
    assert!(config.observability.log_filter.is_none());
}

#[test]
fn load_rejects_invalid_project_file() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("rollout.toml"), "[limited\nmax_rounds = ").unwrap();

    let err = RolloutConfig::load(dir.path()).unwrap_err();
    match err {
        ConfigError::ParseError { path, .. } => assert!(path.ends_with("rollout.toml")),
        other => panic!("expected parse error, got {other:?}"),
    }
}

#[test]
fn traversal_order_parses_aliases() {
    assert_eq!("bfs".parse::<TraversalOrder>(), Ok(TraversalOrder::BreadthFirst));
    assert_eq!("DFS".parse::<TraversalOrder>(), Ok(TraversalOrder::DepthFirst));
    assert_eq!(
        "depth_first".parse::<TraversalOrder>(),
        Ok(TraversalOrder::DepthFirst)
    );
    assert!("zigzag".parse::<TraversalOrder>().is_err());
}
