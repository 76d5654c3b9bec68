use thiserror::Error;

#[derive(Debug, Error)]
pub enum DocqcError {
    /// The rule table does not follow the expected header layout.
    #[error("invalid rule table: {reason}")]
    InvalidRuleTable { reason: String },
}

impl DocqcError {
    pub fn invalid_rule_table(reason: impl Into<String>) -> Self {
        Self::InvalidRuleTable {
            reason: reason.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, DocqcError>;
