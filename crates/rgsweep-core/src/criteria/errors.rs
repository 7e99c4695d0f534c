use crate::errors::RgSweepError;

#[derive(Debug, thiserror::Error)]
pub enum CriteriaError {
    #[error("Invalid tag criterion '{input}': expected KEY=VALUE")]
    MissingSeparator { input: String },

    #[error("Invalid tag criterion '{input}': key must not be empty")]
    EmptyKey { input: String },
}

impl RgSweepError for CriteriaError {
    fn error_code(&self) -> &'static str {
        match self {
            CriteriaError::MissingSeparator { .. } => "CRITERIA_MISSING_SEPARATOR",
            CriteriaError::EmptyKey { .. } => "CRITERIA_EMPTY_KEY",
        }
    }

    fn is_user_error(&self) -> bool {
        true
    }
}
