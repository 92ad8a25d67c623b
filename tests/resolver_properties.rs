//! Property tests for the copy resolver.
//!
//! Uses `proptest` to drive the resolver across the whole code space and
//! check the merge laws: primary-only identity, per-field fallback chains,
//! title staging, body accumulation order, and no level skipping.

use proptest::option;
use proptest::prelude::*;
use proptest::sample::select;

use infraction_copy::codes::inappropriate::InappropriateReason;
use infraction_copy::codes::reason::InfractionReason;
use infraction_copy::codes::subreason::TaggingSubreason;
use infraction_copy::copy::{ResolveOptions, resolve_copy, resolve_copy_with};

const SENTINEL: InfractionReason = InfractionReason::ProductIsInappropriate;
const SEPARATOR: &str = "\n\n&nbsp;\n\n";

fn any_reason() -> impl Strategy<Value = InfractionReason> {
    select(InfractionReason::ALL)
}

fn any_category() -> impl Strategy<Value = Option<InappropriateReason>> {
    option::of(select(InappropriateReason::ALL))
}

fn any_subreason() -> impl Strategy<Value = Option<TaggingSubreason>> {
    option::of(select(TaggingSubreason::ALL))
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(512))]

    #[test]
    fn non_sentinel_resolution_is_the_primary_record(
        reason in any_reason(),
        category in any_category(),
        subreason in any_subreason(),
    ) {
        prop_assume!(reason != SENTINEL);
        let resolved = resolve_copy(reason, category, subreason);
        prop_assert_eq!(resolved, reason.copy());
    }

    #[test]
    fn subreason_without_category_is_inert(subreason in any_subreason()) {
        let with_sub = resolve_copy(SENTINEL, None, subreason);
        let without = resolve_copy(SENTINEL, None, None);
        prop_assert_eq!(with_sub, without);
    }

    #[test]
    fn links_follow_the_most_specific_defined_level(
        category in any_category(),
        subreason in any_subreason(),
    ) {
        let resolved = resolve_copy(SENTINEL, category, subreason);
        let base = SENTINEL.copy();
        let second = category.map(InappropriateReason::overlay).unwrap_or_default();
        let third = subreason.map(TaggingSubreason::overlay).unwrap_or_default();

        let expected_policy = third.policy.or(second.policy).or(base.policy);
        let expected_faq = third.faq.or(second.faq).or(base.faq);
        prop_assert_eq!(resolved.policy, expected_policy);
        prop_assert_eq!(resolved.faq, expected_faq);
    }

    #[test]
    fn title_stages_through_defined_levels(
        category in any_category(),
        subreason in any_subreason(),
    ) {
        let resolved = resolve_copy(SENTINEL, category, subreason);
        let base = SENTINEL.copy();
        let second = category.map(InappropriateReason::overlay).unwrap_or_default();
        let third = subreason.map(TaggingSubreason::overlay).unwrap_or_default();

        let expected = match (second.title, third.title) {
            (None, _) => base.title,
            (Some(cat), None) => cat,
            (Some(cat), Some(sub)) => format!("{cat} - {sub}"),
        };
        prop_assert_eq!(resolved.title, expected);
    }

    #[test]
    fn body_accumulates_general_to_specific(
        category in any_category(),
        subreason in any_subreason(),
    ) {
        let resolved = resolve_copy(SENTINEL, category, subreason);
        let base = SENTINEL.copy();
        let second = category.map(InappropriateReason::overlay).unwrap_or_default();
        let third = subreason.map(TaggingSubreason::overlay).unwrap_or_default();

        match (second.body, third.body) {
            (None, _) => prop_assert_eq!(resolved.body, base.body),
            (Some(cat), None) => prop_assert_eq!(resolved.body, cat),
            (Some(cat), Some(sub)) => {
                let primary_end = base.body.len();
                let cat_start = resolved.body.find(&cat).expect("category body present");
                let sub_start = resolved.body.rfind(&sub).expect("sub body present");
                prop_assert!(resolved.body.starts_with(&base.body));
                prop_assert!(cat_start >= primary_end, "category body after primary");
                prop_assert!(sub_start >= cat_start, "sub body after category body");
                prop_assert_eq!(resolved.body.matches(SEPARATOR).count(), 2);
            }
        }
    }

    #[test]
    fn resolution_is_deterministic(
        reason in any_reason(),
        category in any_category(),
        subreason in any_subreason(),
    ) {
        prop_assert_eq!(
            resolve_copy(reason, category, subreason),
            resolve_copy(reason, category, subreason)
        );
    }

    #[test]
    fn custom_separator_never_leaks_the_default(
        category in any_category(),
        subreason in any_subreason(),
    ) {
        let options = ResolveOptions {
            body_separator: "\u{241E}".to_string(),
            title_joiner: " - ".to_string(),
        };
        let resolved = resolve_copy_with(SENTINEL, category, subreason, &options);
        prop_assert!(!resolved.body.contains(SEPARATOR));
    }
}

// ──────────────────── non-proptest invariant tests ────────────────────

#[test]
fn concrete_three_level_example() {
    // MISLEADING_LISTING defines title+body only; BRAND_DISCREPANCY defines
    // all four fields. Title staging, body accumulation, and link override
    // are all exercised at once.
    let resolved = resolve_copy(
        SENTINEL,
        Some(InappropriateReason::MisleadingListing),
        Some(TaggingSubreason::BrandDiscrepancy),
    );
    assert_eq!(resolved.title, "Misleading Listing - Brand Discrepancy");

    let base = SENTINEL.copy();
    let category = InappropriateReason::MisleadingListing.overlay();
    let sub = TaggingSubreason::BrandDiscrepancy.overlay();
    assert_eq!(
        resolved.body,
        format!(
            "{}{SEPARATOR}{}{SEPARATOR}{}",
            base.body,
            category.body.unwrap(),
            sub.body.unwrap()
        )
    );
    assert_eq!(resolved.policy, sub.policy);
    assert_eq!(resolved.faq, sub.faq);
}

#[test]
fn every_subreason_resolves_under_every_category() {
    // The merge never consults the parent pointer; any category/sub pairing
    // must resolve without panicking.
    for category in InappropriateReason::ALL {
        for sub in TaggingSubreason::ALL.iter().step_by(17) {
            let resolved = resolve_copy(SENTINEL, Some(*category), Some(*sub));
            assert!(!resolved.body.is_empty(), "{category}/{sub}");
        }
    }
}
