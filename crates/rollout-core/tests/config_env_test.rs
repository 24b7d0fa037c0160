//! Environment overrides live in their own test binary so no other test
//! observes the mutated process environment.

use rollout_core::config::{RolloutConfig, TraversalOrder};

#[test]
fn env_overrides_take_priority_over_project_file() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(
        dir.path().join("rollout.toml"),
        "[traversal]\norder = \"breadth_first\"\n\n[limited]\nmax_rounds = 4\n",
    )
    .unwrap();

    std::env::set_var("ROLLOUT_TRAVERSAL_ORDER", "dfs");
    std::env::set_var("ROLLOUT_LIMITED_MAX_ROUNDS", "9");
    std::env::set_var("ROLLOUT_LOG_FILTER", "rollout=trace");
    let config = RolloutConfig::load(dir.path()).unwrap();

    assert_eq!(config.traversal.order, TraversalOrder::DepthFirst);
    assert_eq!(config.limited.max_rounds, Some(9));
    assert_eq!(config.observability.effective_log_filter(), "rollout=trace");

    // Garbage is ignored; the project file value survives.
    std::env::set_var("ROLLOUT_LIMITED_MAX_ROUNDS", "lots");
    std::env::remove_var("ROLLOUT_TRAVERSAL_ORDER");
    std::env::remove_var("ROLLOUT_LOG_FILTER");
    let config = RolloutConfig::load(dir.path()).unwrap();
    assert_eq!(config.limited.max_rounds, Some(4));
    assert_eq!(config.traversal.order, TraversalOrder::BreadthFirst);

    std::env::remove_var("ROLLOUT_LIMITED_MAX_ROUNDS");
}
