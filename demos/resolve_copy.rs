//! Resolve copy for a category-qualified infraction and print the result.
//!
//! Usage:
//!   cargo run --example resolve_copy -- PRODUCT_IS_INAPPROPRIATE MISLEADING_LISTING BRAND_DISCREPANCY
//!
//! Demonstrates library-only usage with no CLI.

use std::str::FromStr;

use infraction_copy::codes::inappropriate::InappropriateReason;
use infraction_copy::codes::reason::InfractionReason;
use infraction_copy::codes::subreason::TaggingSubreason;
use infraction_copy::copy::resolve_copy;

fn main() {
    let mut args = std::env::args().skip(1);
    let reason = args
        .next()
        .map_or(Ok(InfractionReason::ProductIsInappropriate), |s| {
            InfractionReason::from_str(&s)
        })
        .expect("valid reason code");
    let category = args
        .next()
        .map(|s| InappropriateReason::from_str(&s).expect("valid category code"));
    let subreason = args
        .next()
        .map(|s| TaggingSubreason::from_str(&s).expect("valid sub-reason code"));

    let copy = resolve_copy(reason, category, subreason);

    println!("# {}", copy.title);
    println!();
    println!("{}", copy.body);
    if let Some(policy) = copy.policy {
        println!();
        println!("Policy: {policy}");
    }
    if let Some(faq) = copy.faq {
        println!("FAQ: {faq}");
    }
}
