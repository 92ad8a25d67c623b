//! Convenience re-exports for library consumers.
//!
//! ```rust,no_run
//! use infraction_copy::prelude::*;
//! ```

// Core
pub use crate::core::config::Config;
pub use crate::core::errors::{CopyError, Result};

// Codes
pub use crate::codes::inappropriate::InappropriateReason;
pub use crate::codes::reason::InfractionReason;
pub use crate::codes::subreason::TaggingSubreason;

// Copy
pub use crate::copy::{CopyOverlay, ReasonCopy, ResolveOptions, resolve_copy, resolve_copy_with};

// Display
pub use crate::display::{DisputeStatus, EvidenceType, ImpactType, InfractionState, OrderState};

// Lint
pub use crate::lint::{LintReport, lint_tables};
