//! Copy data model, the three lookup tables, and the layered merge.
//!
//! Layer 1 ([`InfractionReason::copy`]) always yields a full record; layers 2
//! and 3 ([`InappropriateReason::overlay`], [`TaggingSubreason::overlay`])
//! yield partial overlays. [`resolve_copy`] merges them per field: titles
//! stage, bodies accumulate, policy/FAQ links override.

#![allow(missing_docs)]

mod inappropriate_data;
pub mod links;
mod reason_data;
mod resolver;
mod subreason_data;

use serde::{Deserialize, Serialize};

pub use resolver::{ResolveOptions, resolve_copy, resolve_copy_with};

/// The bundle of display text describing an infraction to a merchant.
///
/// `body` is markdown: `[text](url)` links and literal `\n\n` paragraph
/// breaks. `policy` and `faq` are standalone markdown links shown separately
/// when present.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReasonCopy {
    pub title: String,
    pub body: String,
    pub policy: Option<String>,
    pub faq: Option<String>,
}

/// A partial copy record: one category or sub-reason table entry.
///
/// Absent fields mean "no override at this level"; an entirely empty overlay
/// is valid and leaves the lower layers untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CopyOverlay {
    pub title: Option<String>,
    pub body: Option<String>,
    pub policy: Option<String>,
    pub faq: Option<String>,
}

impl CopyOverlay {
    /// An overlay with no overrides.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    #[must_use]
    pub fn body(mut self, body: impl Into<String>) -> Self {
        self.body = Some(body.into());
        self
    }

    #[must_use]
    pub fn policy(mut self, policy: impl Into<String>) -> Self {
        self.policy = Some(policy.into());
        self
    }

    #[must_use]
    pub fn faq(mut self, faq: impl Into<String>) -> Self {
        self.faq = Some(faq.into());
        self
    }

    /// True when the entry overrides nothing.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.title.is_none() && self.body.is_none() && self.policy.is_none() && self.faq.is_none()
    }
}

/// Body shown for every retired infraction code.
pub(crate) const DEPRECATION_NOTICE: &str = "This infraction has been deprecated, which means \
     you cannot receive it again moving forward. However, this infraction may still impact \
     your account.";

/// Builds the full record for a retired code from its bare title.
///
/// Applied uniformly across every deprecated primary reason; retired codes
/// never carry policy or FAQ links.
pub(crate) fn deprecated_copy(title: &str) -> ReasonCopy {
    ReasonCopy {
        title: title.to_string(),
        body: DEPRECATION_NOTICE.to_string(),
        policy: None,
        faq: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn overlay_builder_sets_fields_independently() {
        let overlay = CopyOverlay::new().title("T").policy("P");
        assert_eq!(overlay.title.as_deref(), Some("T"));
        assert_eq!(overlay.policy.as_deref(), Some("P"));
        assert!(overlay.body.is_none());
        assert!(overlay.faq.is_none());
        assert!(!overlay.is_empty());
    }

    #[test]
    fn empty_overlay_is_empty() {
        assert!(CopyOverlay::new().is_empty());
    }

    #[test]
    fn deprecated_copy_wraps_title_only() {
        let copy = deprecated_copy("Counterfeit Goods");
        assert_eq!(copy.title, "Counterfeit Goods");
        assert_eq!(copy.body, DEPRECATION_NOTICE);
        assert!(copy.policy.is_none());
        assert!(copy.faq.is_none());
    }

    #[test]
    fn reason_copy_serializes_optionals_as_null() {
        let copy = deprecated_copy("X");
        let json = serde_json::to_value(&copy).expect("serialize");
        assert!(json["policy"].is_null());
        assert!(json["faq"].is_null());
        assert_eq!(json["title"], "X");
    }
}
