use crate::azure::AzureError;
use crate::errors::RgSweepError;

#[derive(Debug, thiserror::Error)]
pub enum SweepError {
    #[error("--login requires a subscription id (--subscription-id or [azure].subscription_id)")]
    MissingSubscription,

    #[error("Login failed: {source}")]
    LoginFailed {
        #[source]
        source: AzureError,
    },

    #[error("Failed to select subscription '{subscription_id}': {source}")]
    SubscriptionFailed {
        subscription_id: String,
        #[source]
        source: AzureError,
    },

    #[error("Failed to list resource groups: {source}")]
    ListFailed {
        #[source]
        source: AzureError,
    },

    #[error("Failed to delete resource group '{name}': {source}")]
    DeleteFailed {
        name: String,
        #[source]
        source: AzureError,
    },
}

impl RgSweepError for SweepError {
    fn error_code(&self) -> &'static str {
        match self {
            SweepError::MissingSubscription => "SWEEP_MISSING_SUBSCRIPTION",
            SweepError::LoginFailed { .. } => "SWEEP_LOGIN_FAILED",
            SweepError::SubscriptionFailed { .. } => "SWEEP_SUBSCRIPTION_FAILED",
            SweepError::ListFailed { .. } => "SWEEP_LIST_FAILED",
            SweepError::DeleteFailed { .. } => "SWEEP_DELETE_FAILED",
        }
    }

    fn is_user_error(&self) -> bool {
        match self {
            SweepError::MissingSubscription => true,
            SweepError::LoginFailed { source }
            | SweepError::SubscriptionFailed { source, .. }
            | SweepError::ListFailed { source }
            | SweepError::DeleteFailed { source, .. } => source.is_user_error(),
        }
    }
}
