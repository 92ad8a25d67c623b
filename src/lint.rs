//! Static-data lint for the copy tables.
//!
//! The tables are exhaustive by construction; this pass checks the textual
//! invariants the type system cannot see: well-formed markdown links over
//! allowed hosts, non-empty copy for live codes, no links on retired codes,
//! and bodies free of the accumulation separator.

use std::collections::HashSet;
use std::sync::LazyLock;

use regex::Regex;

use crate::codes::inappropriate::InappropriateReason;
use crate::codes::reason::InfractionReason;
use crate::codes::subreason::TaggingSubreason;
use crate::copy::links::{HELP_BASE, IP_PORTAL_URL, POLICY_BASE, TERMS_URL};
use crate::copy::{CopyOverlay, ReasonCopy};

/// Marker inside the default body separator; a body containing it would
/// corrupt accumulation output.
const SEPARATOR_MARKER: &str = "&nbsp;";

static MD_LINK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[[^\]]+\]\(([^)]+)\)").expect("valid link regex"));

/// A links-only field: one markdown link, or several separated by ", ".
static LINKS_ONLY: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\[[^\]]+\]\([^)]+\)(, \[[^\]]+\]\([^)]+\))*$").expect("valid links-only regex")
});

/// Outcome of a full-table lint pass.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LintReport {
    /// Hard violations: the tables should not ship with any of these.
    pub errors: Vec<String>,
    /// Observations worth a look that are valid data (e.g. childless
    /// categories).
    pub notes: Vec<String>,
}

impl LintReport {
    /// Whether the pass found nothing actionable.
    #[must_use]
    pub fn is_clean(&self, fail_on_notes: bool) -> bool {
        self.errors.is_empty() && (!fail_on_notes || self.notes.is_empty())
    }
}

/// Lint every entry of all three copy tables.
#[must_use]
pub fn lint_tables() -> LintReport {
    let mut report = LintReport::default();

    for reason in InfractionReason::ALL {
        lint_primary(&mut report, *reason, &reason.copy());
    }
    for category in InappropriateReason::ALL {
        lint_overlay(&mut report, &format!("category {category}"), &category.overlay());
    }
    for sub in TaggingSubreason::ALL {
        lint_overlay(&mut report, &format!("subreason {sub}"), &sub.overlay());
    }

    let parents: HashSet<InappropriateReason> = TaggingSubreason::ALL
        .iter()
        .map(|sub| sub.parent())
        .collect();
    for category in InappropriateReason::ALL {
        if !parents.contains(category) {
            report.notes.push(format!("category {category} has no sub-reasons"));
        }
    }

    report
}

fn lint_primary(report: &mut LintReport, reason: InfractionReason, copy: &ReasonCopy) {
    let context = format!("reason {reason}");
    if reason.is_deprecated() {
        if copy.policy.is_some() || copy.faq.is_some() {
            report
                .errors
                .push(format!("{context}: retired code carries policy/faq links"));
        }
        if copy.title.is_empty() {
            report.notes.push(format!("{context}: retired code has no title"));
        }
    } else {
        if copy.title.is_empty() {
            report.errors.push(format!("{context}: empty title"));
        }
        if copy.body.is_empty() {
            report.errors.push(format!("{context}: empty body"));
        }
    }
    lint_body(report, &context, &copy.body);
    lint_link_field(report, &context, "policy", copy.policy.as_deref());
    lint_link_field(report, &context, "faq", copy.faq.as_deref());
}

fn lint_overlay(report: &mut LintReport, context: &str, overlay: &CopyOverlay) {
    if let Some(title) = overlay.title.as_deref()
        && title.is_empty()
    {
        report.errors.push(format!("{context}: empty title override"));
    }
    if let Some(body) = overlay.body.as_deref() {
        if body.is_empty() {
            report.errors.push(format!("{context}: empty body override"));
        }
        lint_body(report, context, body);
    }
    lint_link_field(report, context, "policy", overlay.policy.as_deref());
    lint_link_field(report, context, "faq", overlay.faq.as_deref());
}

fn lint_body(report: &mut LintReport, context: &str, body: &str) {
    if body.contains(SEPARATOR_MARKER) {
        report
            .errors
            .push(format!("{context}: body contains the accumulation separator marker"));
    }
    for capture in MD_LINK.captures_iter(body) {
        check_url(report, context, &capture[1]);
    }
}

fn lint_link_field(report: &mut LintReport, context: &str, field: &str, value: Option<&str>) {
    let Some(value) = value else { return };
    if !LINKS_ONLY.is_match(value) {
        report.errors.push(format!(
            "{context}: {field} is not a comma-separated markdown link list: {value:?}"
        ));
        return;
    }
    for capture in MD_LINK.captures_iter(value) {
        check_url(report, context, &capture[1]);
    }
}

fn check_url(report: &mut LintReport, context: &str, url: &str) {
    let allowed = url.starts_with(POLICY_BASE)
        || url.starts_with(HELP_BASE)
        || url == TERMS_URL
        || url == IP_PORTAL_URL;
    if !allowed {
        report
            .errors
            .push(format!("{context}: link to unexpected host: {url}"));
    }
}
