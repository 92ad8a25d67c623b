//! The three-layer merge: one combinator per field class.

#![allow(missing_docs)]

use crate::codes::inappropriate::InappropriateReason;
use crate::codes::reason::InfractionReason;
use crate::codes::subreason::TaggingSubreason;
use crate::copy::{CopyOverlay, ReasonCopy};
use crate::core::config::ResolverConfig;

/// Merge-rule knobs. The body separator is opaque — inserted verbatim
/// between accumulated body levels, never interpreted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolveOptions {
    pub body_separator: String,
    pub title_joiner: String,
}

impl Default for ResolveOptions {
    fn default() -> Self {
        Self {
            body_separator: "\n\n&nbsp;\n\n".to_string(),
            title_joiner: " - ".to_string(),
        }
    }
}

impl From<&ResolverConfig> for ResolveOptions {
    fn from(cfg: &ResolverConfig) -> Self {
        Self {
            body_separator: cfg.body_separator.clone(),
            title_joiner: cfg.title_joiner.clone(),
        }
    }
}

/// Resolve the effective copy for an infraction with default merge options.
///
/// `category` and `subreason` only take effect when `reason` is the
/// category-qualified sentinel; a `subreason` without a `category` never
/// takes effect (levels cannot be skipped).
#[must_use]
pub fn resolve_copy(
    reason: InfractionReason,
    category: Option<InappropriateReason>,
    subreason: Option<TaggingSubreason>,
) -> ReasonCopy {
    resolve_copy_with(reason, category, subreason, &ResolveOptions::default())
}

/// [`resolve_copy`] with explicit merge options.
#[must_use]
pub fn resolve_copy_with(
    reason: InfractionReason,
    category: Option<InappropriateReason>,
    subreason: Option<TaggingSubreason>,
    options: &ResolveOptions,
) -> ReasonCopy {
    let base = reason.copy();
    if !reason.is_category_qualified() {
        return base;
    }

    let second = category.map_or_else(CopyOverlay::new, InappropriateReason::overlay);
    let third = subreason.map_or_else(CopyOverlay::new, TaggingSubreason::overlay);

    ReasonCopy {
        title: staged_title(
            &base.title,
            second.title.as_deref(),
            third.title.as_deref(),
            &options.title_joiner,
        ),
        body: accumulated_body(
            &base.body,
            second.body.as_deref(),
            third.body.as_deref(),
            &options.body_separator,
        ),
        policy: most_specific(base.policy, second.policy, third.policy),
        faq: most_specific(base.faq, second.faq, third.faq),
    }
}

/// Titles progressively qualify: the category title replaces the primary
/// title, and a sub-reason title is folded in as "category ⟨joiner⟩ sub".
fn staged_title(first: &str, second: Option<&str>, third: Option<&str>, joiner: &str) -> String {
    let Some(second) = second else {
        return first.to_string();
    };
    let Some(third) = third else {
        return second.to_string();
    };
    format!("{second}{joiner}{third}")
}

/// Bodies accumulate only when all three levels are present, reading from
/// most general to most specific; with two levels the more specific one
/// stands alone.
fn accumulated_body(
    first: &str,
    second: Option<&str>,
    third: Option<&str>,
    separator: &str,
) -> String {
    let Some(second) = second else {
        return first.to_string();
    };
    let Some(third) = third else {
        return second.to_string();
    };
    [first, second, third].join(separator)
}

/// Links override outright: the most specific defined value wins.
fn most_specific(
    first: Option<String>,
    second: Option<String>,
    third: Option<String>,
) -> Option<String> {
    third.or(second).or(first)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SENTINEL: InfractionReason = InfractionReason::ProductIsInappropriate;

    #[test]
    fn non_sentinel_ignores_category_and_subreason() {
        let plain = resolve_copy(InfractionReason::FakeTracking, None, None);
        let with_extras = resolve_copy(
            InfractionReason::FakeTracking,
            Some(InappropriateReason::HateCrime),
            Some(TaggingSubreason::HateSpeech),
        );
        assert_eq!(plain, with_extras);
        assert_eq!(plain, InfractionReason::FakeTracking.copy());
    }

    #[test]
    fn subreason_without_category_never_takes_effect() {
        let without = resolve_copy(SENTINEL, None, None);
        let with_orphan_sub = resolve_copy(SENTINEL, None, Some(TaggingSubreason::HateSpeech));
        assert_eq!(without, with_orphan_sub);
        assert_eq!(without, SENTINEL.copy());
    }

    #[test]
    fn category_title_replaces_primary_title() {
        let resolved = resolve_copy(SENTINEL, Some(InappropriateReason::MisleadingListing), None);
        assert_eq!(resolved.title, "Misleading Listing");
    }

    #[test]
    fn full_chain_stages_title_and_accumulates_body() {
        let resolved = resolve_copy(
            SENTINEL,
            Some(InappropriateReason::MisleadingListing),
            Some(TaggingSubreason::BrandDiscrepancy),
        );
        assert_eq!(resolved.title, "Misleading Listing - Brand Discrepancy");

        let base = SENTINEL.copy();
        let category = InappropriateReason::MisleadingListing.overlay();
        let sub = TaggingSubreason::BrandDiscrepancy.overlay();
        let expected_body = [
            base.body.as_str(),
            category.body.as_deref().expect("category body"),
            sub.body.as_deref().expect("sub body"),
        ]
        .join("\n\n&nbsp;\n\n");
        assert_eq!(resolved.body, expected_body);

        // links come from the most specific level that defines them
        assert_eq!(resolved.policy, sub.policy);
        assert_eq!(resolved.faq, sub.faq);
    }

    #[test]
    fn two_level_body_is_the_category_body_alone() {
        let resolved = resolve_copy(SENTINEL, Some(InappropriateReason::GraphicViolence), None);
        let category = InappropriateReason::GraphicViolence.overlay();
        assert_eq!(Some(resolved.body), category.body);
        assert!(
            !resolved.title.contains(" - "),
            "no sub-reason, no staged title"
        );
    }

    #[test]
    fn links_fall_back_through_undefined_levels() {
        // MisleadingListing's overlay defines neither policy nor faq, so both
        // fall through to the primary record.
        let resolved = resolve_copy(SENTINEL, Some(InappropriateReason::MisleadingListing), None);
        let base = SENTINEL.copy();
        assert_eq!(resolved.policy, base.policy);
        assert_eq!(resolved.faq, base.faq);
    }

    #[test]
    fn empty_category_overlay_leaves_primary_untouched() {
        // PlatformAdmin's table entry overrides nothing.
        assert!(InappropriateReason::PlatformAdmin.overlay().is_empty());
        let resolved = resolve_copy(SENTINEL, Some(InappropriateReason::PlatformAdmin), None);
        assert_eq!(resolved, SENTINEL.copy());
    }

    #[test]
    fn title_only_subreason_stages_title_but_not_body() {
        // AnimeProducts has a title and nothing else.
        let sub = TaggingSubreason::AnimeProducts.overlay();
        assert!(sub.body.is_none());

        let resolved = resolve_copy(
            SENTINEL,
            Some(InappropriateReason::Nudity),
            Some(TaggingSubreason::AnimeProducts),
        );
        let category = InappropriateReason::Nudity.overlay();
        assert_eq!(
            resolved.title,
            format!(
                "{} - {}",
                category.title.as_deref().expect("category title"),
                sub.title.as_deref().expect("sub title")
            )
        );
        // sub body undefined → category body stands alone
        assert_eq!(Some(resolved.body), category.body);
    }

    #[test]
    fn custom_separator_is_inserted_verbatim() {
        let options = ResolveOptions {
            body_separator: "<<<>>>".to_string(),
            title_joiner: " / ".to_string(),
        };
        let resolved = resolve_copy_with(
            SENTINEL,
            Some(InappropriateReason::MisleadingListing),
            Some(TaggingSubreason::BrandDiscrepancy),
            &options,
        );
        assert_eq!(resolved.body.matches("<<<>>>").count(), 2);
        assert!(resolved.title.contains(" / "));
    }

    #[test]
    fn deprecated_reason_resolves_to_deprecation_notice() {
        let resolved = resolve_copy(InfractionReason::CounterfeitGoods, None, None);
        assert_eq!(resolved.title, "Counterfeit Goods");
        assert_eq!(resolved.body, crate::copy::DEPRECATION_NOTICE);
        assert!(resolved.policy.is_none());
        assert!(resolved.faq.is_none());
    }
}
