#![forbid(unsafe_code)]

//! infraction_copy (icopy) — merchant-facing copy for marketplace infractions.
//!
//! Three layered lookup tables:
//! 1. **Primary reasons** — every infraction code the backend can return, with base copy
//! 2. **Inappropriate-content categories** — partial overlays for the category-qualified reason
//! 3. **Tagging sub-reasons** — partial overlays narrowing a category to the exact rule violated
//!
//! [`copy::resolve_copy`] merges the three layers per field: titles stage, bodies
//! accumulate, policy/FAQ links override (most specific wins).
//!
//! # Library usage
//!
//! Use the [`prelude`] for convenient access to the most common types:
//!
//! ```rust,no_run
//! use infraction_copy::prelude::*;
//! ```
//!
//! Individual modules can also be imported directly:
//!
//! ```rust,no_run
//! use infraction_copy::codes::reason::InfractionReason;
//! use infraction_copy::copy::resolve_copy;
//! ```

pub mod prelude;

pub mod codes;
pub mod copy;
pub mod core;
pub mod display;
pub mod lint;
