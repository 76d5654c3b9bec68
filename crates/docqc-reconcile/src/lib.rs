//! Deliverables reconciliation.
//!
//! Pairs an expected deliverables list with submitted filenames by normalized
//! name (see [`docqc_common::normalize_name`]) and classifies every entry as
//! matched, missing or extra.

pub mod matcher;

pub use docqc_common::normalize_name;
pub use docqc_model::{Match, MatchStatus, ReconciliationResult};
pub use matcher::reconcile;
