//! Naming convention validation.
//!
//! A naming convention arrives as a table of cells (see [`rule_table`]) and is
//! parsed once into a [`NamingRuleSet`]. Filenames are then checked one by one
//! with [`validate_name`], or as a batch with [`validate_names`].
//!
//! Validation never fails: a malformed or empty filename simply comes back as
//! non-compliant with a message explaining why. Only a rule table that does not
//! follow the header layout is an error.
//!
//! Segment values are compared exactly (case-sensitive, no normalization).
//! This differs on purpose from deliverables reconciliation, which compares
//! normalized names.

pub mod rule_table;
pub mod template;
pub mod validator;

pub use docqc_model::{NameValidationResult, NamingReport, NamingRuleSet, PartRule};
pub use rule_table::parse_rule_table;
pub use template::naming_template;
pub use validator::{part_complies, validate_name, validate_names};
