pub mod error;
pub mod naming;
pub mod reconcile;
pub mod table;

pub use error::{DocqcError, Result};
pub use naming::{
    DEFAULT_FREE_TEXT_MIN_LENGTH, FREE_TEXT_MARKER, FileValidation, NameValidationResult,
    NamingReport, NamingRuleSet, PartRule,
};
pub use reconcile::{Match, MatchStatus, ReconciliationResult};
pub use table::{CellGrid, CellValue};
