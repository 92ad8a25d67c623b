//! Integration tests: CLI smoke tests and full resolve pipelines through the
//! library surface.

mod common;

use serde_json::Value;

use infraction_copy::codes::inappropriate::InappropriateReason;
use infraction_copy::codes::reason::InfractionReason;
use infraction_copy::codes::subreason::TaggingSubreason;
use infraction_copy::copy::resolve_copy;
use infraction_copy::lint::lint_tables;

#[test]
fn help_command_prints_usage() {
    let result = common::run_cli_case("help_command_prints_usage", &["--help"]);
    assert!(
        result.status.success(),
        "expected success; log: {}",
        result.log_path.display()
    );
    assert!(
        result.stdout.contains("Usage: icopy [OPTIONS] <COMMAND>"),
        "missing help banner; log: {}",
        result.log_path.display()
    );
}

#[test]
fn version_command_prints_version() {
    let result = common::run_cli_case("version_command_prints_version", &["--version"]);
    assert!(
        result.status.success(),
        "expected success; log: {}",
        result.log_path.display()
    );
    assert!(
        result.stdout.contains("infraction_copy") || result.stdout.contains("icopy"),
        "missing version output; log: {}",
        result.log_path.display()
    );
}

#[test]
fn subcommand_help_flags_work() {
    for subcmd in ["resolve", "list", "lint", "config", "completions"] {
        let case_name = format!("subcommand_{subcmd}_help");
        let result = common::run_cli_case(&case_name, &[subcmd, "--help"]);
        assert!(
            result.status.success(),
            "subcommand '{subcmd} --help' failed; log: {}",
            result.log_path.display()
        );
        assert!(
            result.stdout.contains("Usage"),
            "subcommand '{subcmd} --help' missing usage info; log: {}",
            result.log_path.display()
        );
    }
}

#[test]
fn resolve_plain_reason_prints_title_and_policy() {
    let result = common::run_cli_case(
        "resolve_plain_reason",
        &["--no-color", "resolve", "FAKE_TRACKING"],
    );
    assert!(
        result.status.success(),
        "log: {}",
        result.log_path.display()
    );
    assert!(result.stdout.contains("Misleading Tracking Number"));
    assert!(result.stdout.contains("Fulfillment Policy"));
}

#[test]
fn resolve_full_chain_json_has_staged_title() {
    let result = common::run_cli_case(
        "resolve_full_chain_json",
        &[
            "--json",
            "resolve",
            "PRODUCT_IS_INAPPROPRIATE",
            "--category",
            "MISLEADING_LISTING",
            "--subreason",
            "BRAND_DISCREPANCY",
        ],
    );
    assert!(
        result.status.success(),
        "log: {}",
        result.log_path.display()
    );
    let payload: Value = serde_json::from_str(&result.stdout).expect("json output");
    assert_eq!(
        payload["copy"]["title"],
        "Misleading Listing - Brand Discrepancy"
    );
    assert_eq!(payload["reason"], "PRODUCT_IS_INAPPROPRIATE");
    assert_eq!(payload["deprecated"], false);
    let body = payload["copy"]["body"].as_str().expect("body string");
    assert_eq!(body.matches("\n\n&nbsp;\n\n").count(), 2);
}

#[test]
fn resolve_unknown_code_fails_with_coded_error() {
    let result = common::run_cli_case("resolve_unknown_code", &["resolve", "NOT_A_REASON"]);
    assert!(
        !result.status.success(),
        "unknown code must fail; log: {}",
        result.log_path.display()
    );
    assert!(
        result.stderr.contains("ICOPY-2001"),
        "stderr should carry the error code; log: {}",
        result.log_path.display()
    );
}

#[test]
fn list_subreasons_filtered_by_parent() {
    let result = common::run_cli_case(
        "list_subreasons_by_parent",
        &["--json", "list", "subreasons", "--parent", "HATE_CRIME"],
    );
    assert!(
        result.status.success(),
        "log: {}",
        result.log_path.display()
    );
    let rows: Value = serde_json::from_str(&result.stdout).expect("json output");
    let rows = rows.as_array().expect("array");
    assert!(rows.len() >= 15, "expected the full hate-crime family");
    for row in rows {
        assert_eq!(row["parent"], "HATE_CRIME");
    }
}

#[test]
fn list_reasons_excludes_retired_codes_by_default() {
    let active = common::run_cli_case("list_reasons_active", &["--json", "list", "reasons"]);
    let all = common::run_cli_case(
        "list_reasons_all",
        &["--json", "list", "reasons", "--deprecated"],
    );
    let active_rows: Value = serde_json::from_str(&active.stdout).expect("json output");
    let all_rows: Value = serde_json::from_str(&all.stdout).expect("json output");
    let active_len = active_rows.as_array().expect("array").len();
    let all_len = all_rows.as_array().expect("array").len();
    assert!(
        all_len > active_len,
        "retired codes should only appear with --deprecated ({active_len} vs {all_len})"
    );
}

#[test]
fn lint_command_passes_on_shipped_tables() {
    let result = common::run_cli_case("lint_shipped_tables", &["--no-color", "lint"]);
    assert!(
        result.status.success(),
        "lint should pass; log: {}",
        result.log_path.display()
    );
    assert!(result.stdout.contains("copy tables clean"));
}

#[test]
fn config_defaults_round_trip_as_toml() {
    let result = common::run_cli_case("config_defaults", &["config", "--defaults"]);
    assert!(
        result.status.success(),
        "log: {}",
        result.log_path.display()
    );
    let parsed: toml::Value = toml::from_str(&result.stdout).expect("valid TOML output");
    assert!(parsed.get("resolver").is_some());
}

// Full-pipeline checks through the library surface.

#[test]
fn every_code_combination_with_its_own_parent_resolves() {
    for sub in TaggingSubreason::ALL {
        let copy = resolve_copy(
            InfractionReason::ProductIsInappropriate,
            Some(sub.parent()),
            Some(*sub),
        );
        assert!(!copy.title.is_empty(), "{sub}: empty title");
        assert!(!copy.body.is_empty(), "{sub}: empty body");
    }
}

#[test]
fn shipped_tables_pass_lint_via_library() {
    let report = lint_tables();
    assert!(report.errors.is_empty(), "{:#?}", report.errors);
}

#[test]
fn category_only_resolution_never_loses_links() {
    // Whatever the category omits must fall back to the sentinel's base copy.
    let base = InfractionReason::ProductIsInappropriate.copy();
    for category in InappropriateReason::ALL {
        let resolved = resolve_copy(
            InfractionReason::ProductIsInappropriate,
            Some(*category),
            None,
        );
        let overlay = category.overlay();
        match overlay.policy {
            Some(policy) => assert_eq!(resolved.policy.as_deref(), Some(policy.as_str())),
            None => assert_eq!(resolved.policy, base.policy, "{category}"),
        }
        match overlay.faq {
            Some(faq) => assert_eq!(resolved.faq.as_deref(), Some(faq.as_str())),
            None => assert_eq!(resolved.faq, base.faq, "{category}"),
        }
    }
}
