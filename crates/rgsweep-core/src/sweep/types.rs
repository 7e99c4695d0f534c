use crate::criteria::Criteria;
use crate::groups::ResourceGroup;

use super::errors::SweepError;

/// Process-wide switches for one sweep.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SweepOptions {
    /// Delete groups whose tag mapping is absent or empty
    pub delete_untagged: bool,
    /// Report intended deletions without issuing any delete call
    pub simulate: bool,
}

/// Everything a full run needs, resolved from flags and config.
#[derive(Debug, Clone, Default)]
pub struct SweepRequest {
    /// Authenticate and switch subscription before listing
    pub login: bool,
    pub subscription_id: Option<String>,
    pub criteria: Criteria,
    pub options: SweepOptions,
}

impl SweepRequest {
    /// Reject combinations that cannot run, before any collaborator call.
    pub fn validate(&self) -> Result<(), SweepError> {
        let has_subscription = self
            .subscription_id
            .as_deref()
            .is_some_and(|s| !s.trim().is_empty());
        if self.login && !has_subscription {
            return Err(SweepError::MissingSubscription);
        }
        Ok(())
    }
}

/// Why a group was selected for deletion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeleteReason {
    /// No tags and untagged deletion is enabled
    Untagged,
    /// `key` matched; `value` is the group's raw tag value
    TagMatch { key: String, value: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Decision {
    Keep,
    Delete(DeleteReason),
}

impl Decision {
    pub fn is_delete(&self) -> bool {
        matches!(self, Decision::Delete(_))
    }
}

/// Progress reported while a sweep runs, in the order it happens.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SweepEvent<'a> {
    LoggingIn,
    SubscriptionSelected { subscription_id: &'a str },
    Listed { groups: &'a [ResourceGroup] },
    Evaluating { name: &'a str },
    Untagged { name: &'a str },
    TagFound { name: &'a str, key: &'a str, value: &'a str },
    TagMatched { name: &'a str, key: &'a str },
    TagMismatched { name: &'a str, key: &'a str },
    WouldDelete { name: &'a str },
    Deleting { name: &'a str, id: &'a str },
    Deleted { name: &'a str },
    Skipped { name: &'a str },
}

/// What a completed sweep did.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SweepSummary {
    pub evaluated: usize,
    /// Names of groups actually deleted
    pub deleted: Vec<String>,
    /// Names of groups that would have been deleted in simulate mode
    pub simulated: Vec<String>,
}

impl SweepSummary {
    pub fn matched(&self) -> usize {
        self.deleted.len() + self.simulated.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_login_requires_subscription() {
        let request = SweepRequest {
            login: true,
            ..Default::default()
        };
        assert!(matches!(
            request.validate(),
            Err(SweepError::MissingSubscription)
        ));
    }

    #[test]
    fn test_login_rejects_blank_subscription() {
        let request = SweepRequest {
            login: true,
            subscription_id: Some("  ".to_string()),
            ..Default::default()
        };
        assert!(request.validate().is_err());
    }

    #[test]
    fn test_subscription_optional_without_login() {
        assert!(SweepRequest::default().validate().is_ok());

        let request = SweepRequest {
            login: true,
            subscription_id: Some("0000-1111".to_string()),
            ..Default::default()
        };
        assert!(request.validate().is_ok());
    }

    #[test]
    fn test_summary_matched_counts_both_modes() {
        let summary = SweepSummary {
            evaluated: 4,
            deleted: vec!["a".to_string()],
            simulated: vec!["b".to_string(), "c".to_string()],
        };
        assert_eq!(summary.matched(), 3);
    }
}
