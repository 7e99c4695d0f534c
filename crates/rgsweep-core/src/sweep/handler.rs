use tracing::{debug, error, info};

use crate::azure::ResourceGroupBackend;
use crate::criteria::Criteria;
use crate::groups::ResourceGroup;

use super::errors::SweepError;
use super::types::{
    Decision, DeleteReason, SweepEvent, SweepOptions, SweepRequest, SweepSummary,
};

/// Decide whether `group` should be deleted.
///
/// Untagged groups are only selected through `delete_untagged`. Tagged groups
/// are selected when any criteria key is present with a value equal to the
/// wanted one, ignoring case. The first matching key wins.
pub fn evaluate<F>(
    group: &ResourceGroup,
    criteria: &Criteria,
    delete_untagged: bool,
    on_event: &mut F,
) -> Decision
where
    F: FnMut(&SweepEvent<'_>),
{
    let name = group.name.as_str();

    if group.is_untagged() {
        if delete_untagged {
            on_event(&SweepEvent::Untagged { name });
            return Decision::Delete(DeleteReason::Untagged);
        }
        return Decision::Keep;
    }

    for (key, wanted) in criteria.iter() {
        let Some(actual) = group.tag(key) else {
            continue;
        };

        on_event(&SweepEvent::TagFound {
            name,
            key,
            value: actual,
        });
        debug!(
            event = "core.sweep.tag_found",
            group = name,
            key = key,
            value = actual
        );

        if actual.to_lowercase() == wanted.to_lowercase() {
            on_event(&SweepEvent::TagMatched { name, key });
            return Decision::Delete(DeleteReason::TagMatch {
                key: key.to_string(),
                value: actual.to_string(),
            });
        }

        on_event(&SweepEvent::TagMismatched { name, key });
    }

    Decision::Keep
}

/// Evaluate every group in listing order and delete (or simulate deleting)
/// the selected ones.
///
/// Stops at the first failed deletion; groups deleted before it stay deleted.
pub fn sweep_groups<B, F>(
    backend: &B,
    groups: &[ResourceGroup],
    criteria: &Criteria,
    options: SweepOptions,
    on_event: &mut F,
) -> Result<SweepSummary, SweepError>
where
    B: ResourceGroupBackend + ?Sized,
    F: FnMut(&SweepEvent<'_>),
{
    info!(
        event = "core.sweep.started",
        groups = groups.len(),
        criteria = criteria.len(),
        delete_untagged = options.delete_untagged,
        simulate = options.simulate
    );

    let mut summary = SweepSummary::default();

    for group in groups {
        let name = group.name.as_str();
        on_event(&SweepEvent::Evaluating { name });
        summary.evaluated += 1;

        let decision = evaluate(group, criteria, options.delete_untagged, on_event);
        let Decision::Delete(reason) = decision else {
            on_event(&SweepEvent::Skipped { name });
            debug!(event = "core.sweep.group_skipped", group = name);
            continue;
        };

        info!(
            event = "core.sweep.group_selected",
            group = name,
            reason = ?reason
        );

        if options.simulate {
            on_event(&SweepEvent::WouldDelete { name });
            summary.simulated.push(group.name.clone());
            continue;
        }

        on_event(&SweepEvent::Deleting {
            name,
            id: &group.id,
        });
        if let Err(e) = backend.delete_group(&group.id) {
            error!(
                event = "core.sweep.delete_failed",
                group = name,
                resource_id = %group.id,
                error = %e
            );
            return Err(SweepError::DeleteFailed {
                name: group.name.clone(),
                source: e,
            });
        }
        on_event(&SweepEvent::Deleted { name });
        summary.deleted.push(group.name.clone());
    }

    info!(
        event = "core.sweep.completed",
        evaluated = summary.evaluated,
        deleted = summary.deleted.len(),
        simulated = summary.simulated.len()
    );

    Ok(summary)
}

/// Full run: optional login and subscription switch, listing, then the sweep.
pub fn run_sweep<B, F>(
    backend: &B,
    request: &SweepRequest,
    on_event: &mut F,
) -> Result<SweepSummary, SweepError>
where
    B: ResourceGroupBackend + ?Sized,
    F: FnMut(&SweepEvent<'_>),
{
    request.validate()?;

    info!(
        event = "core.sweep.run_started",
        backend = backend.name(),
        login = request.login
    );

    if request.login {
        on_event(&SweepEvent::LoggingIn);
        backend
            .login()
            .map_err(|source| SweepError::LoginFailed { source })?;

        // validate() guarantees a subscription when logging in
        if let Some(subscription_id) = request.subscription_id.as_deref() {
            backend
                .set_subscription(subscription_id)
                .map_err(|source| SweepError::SubscriptionFailed {
                    subscription_id: subscription_id.to_string(),
                    source,
                })?;
            on_event(&SweepEvent::SubscriptionSelected { subscription_id });
        }
    }

    let groups = backend
        .list_groups()
        .map_err(|source| SweepError::ListFailed { source })?;
    on_event(&SweepEvent::Listed { groups: &groups });

    sweep_groups(
        backend,
        &groups,
        &request.criteria,
        request.options,
        on_event,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::azure::testing::RecordingBackend;

    fn rg(name: &str) -> ResourceGroup {
        ResourceGroup::new(
            format!("/subscriptions/0000/resourceGroups/{}", name),
            name,
            "westeurope",
        )
    }

    fn criteria(pairs: &[(&str, &str)]) -> Criteria {
        pairs.iter().copied().collect()
    }

    fn decide(group: &ResourceGroup, criteria: &Criteria, delete_untagged: bool) -> Decision {
        evaluate(group, criteria, delete_untagged, &mut |_| {})
    }

    fn opts(delete_untagged: bool, simulate: bool) -> SweepOptions {
        SweepOptions {
            delete_untagged,
            simulate,
        }
    }

    #[test]
    fn untagged_with_flag_is_deleted_regardless_of_criteria() {
        for group in [rg("absent"), rg("empty").with_empty_tags()] {
            assert_eq!(
                decide(&group, &Criteria::new(), true),
                Decision::Delete(DeleteReason::Untagged)
            );
            assert_eq!(
                decide(&group, &criteria(&[("keep", "false")]), true),
                Decision::Delete(DeleteReason::Untagged)
            );
        }
    }

    #[test]
    fn untagged_without_flag_is_kept() {
        let group = rg("bare").with_empty_tags();
        assert_eq!(
            decide(&group, &criteria(&[("keep", "false")]), false),
            Decision::Keep
        );
        assert_eq!(decide(&rg("none"), &Criteria::new(), false), Decision::Keep);
    }

    #[test]
    fn tagged_value_match_ignores_case() {
        let group = rg("rg").with_tag("keep", "true");
        assert_eq!(
            decide(&group, &criteria(&[("keep", "TRUE")]), false),
            Decision::Delete(DeleteReason::TagMatch {
                key: "keep".to_string(),
                value: "true".to_string(),
            })
        );
    }

    #[test]
    fn tag_key_match_is_case_sensitive() {
        let group = rg("rg").with_tag("Keep", "false");
        assert_eq!(
            decide(&group, &criteria(&[("keep", "false")]), false),
            Decision::Keep
        );
    }

    #[test]
    fn tagged_without_matching_key_is_kept() {
        let group = rg("rg").with_tag("owner", "ci");
        assert_eq!(
            decide(&group, &criteria(&[("keep", "false")]), true),
            Decision::Keep
        );
        assert_eq!(decide(&group, &Criteria::new(), true), Decision::Keep);
    }

    #[test]
    fn value_mismatch_is_kept() {
        let group = rg("rg").with_tag("keep", "true");
        assert_eq!(
            decide(&group, &criteria(&[("keep", "false")]), false),
            Decision::Keep
        );
    }

    #[test]
    fn first_matching_key_wins_and_stops_evaluation() {
        let group = rg("rg")
            .with_tag("env", "Dev")
            .with_tag("keep", "no")
            .with_tag("owner", "ci");
        let wanted = criteria(&[("keep", "yes"), ("env", "dev"), ("owner", "ci")]);

        let mut events = Vec::new();
        let decision = evaluate(&group, &wanted, false, &mut |e| {
            events.push(format!("{:?}", e));
        });

        assert_eq!(
            decision,
            Decision::Delete(DeleteReason::TagMatch {
                key: "env".to_string(),
                value: "Dev".to_string(),
            })
        );
        assert_eq!(
            events,
            vec![
                r#"TagFound { name: "rg", key: "keep", value: "no" }"#,
                r#"TagMismatched { name: "rg", key: "keep" }"#,
                r#"TagFound { name: "rg", key: "env", value: "Dev" }"#,
                r#"TagMatched { name: "rg", key: "env" }"#,
            ]
        );
    }

    #[test]
    fn decision_is_independent_of_criteria_order() {
        let group = rg("rg").with_tag("a", "1").with_tag("b", "2");
        let forward = criteria(&[("a", "1"), ("b", "2")]);
        let backward = criteria(&[("b", "2"), ("a", "1")]);
        assert!(decide(&group, &forward, false).is_delete());
        assert!(decide(&group, &backward, false).is_delete());
    }

    #[test]
    fn tag_found_reports_raw_value() {
        let group = rg("rg").with_tag("keep", "FaLsE");
        let mut seen = None;
        evaluate(&group, &criteria(&[("keep", "false")]), false, &mut |e| {
            if let SweepEvent::TagFound { value, .. } = e {
                seen = Some(value.to_string());
            }
        });
        assert_eq!(seen.as_deref(), Some("FaLsE"));
    }

    #[test]
    fn simulate_never_deletes() {
        let groups = vec![
            rg("rg-a").with_tag("keep", "false"),
            rg("rg-b"),
            rg("rg-c").with_tag("keep", "FALSE"),
        ];
        let backend = RecordingBackend::default();

        let summary = sweep_groups(
            &backend,
            &groups,
            &criteria(&[("keep", "false")]),
            opts(true, true),
            &mut |_| {},
        )
        .unwrap();

        assert!(backend.calls().is_empty());
        assert_eq!(summary.simulated, vec!["rg-a", "rg-b", "rg-c"]);
        assert!(summary.deleted.is_empty());
    }

    #[test]
    fn scenario_tag_match_only_simulated() {
        let groups = vec![
            rg("rg-a").with_tag("keep", "false"),
            rg("rg-b").with_empty_tags(),
        ];
        let backend = RecordingBackend::default();

        let summary = sweep_groups(
            &backend,
            &groups,
            &criteria(&[("keep", "false")]),
            opts(false, true),
            &mut |_| {},
        )
        .unwrap();

        assert_eq!(summary.evaluated, 2);
        assert_eq!(summary.simulated, vec!["rg-a"]);
        assert!(backend.deletes().is_empty());
    }

    #[test]
    fn scenario_tag_match_and_untagged_simulated() {
        let groups = vec![
            rg("rg-a").with_tag("keep", "false"),
            rg("rg-b").with_empty_tags(),
        ];
        let backend = RecordingBackend::default();

        let mut lines = Vec::new();
        let summary = sweep_groups(
            &backend,
            &groups,
            &criteria(&[("keep", "false")]),
            opts(true, true),
            &mut |e| {
                if let SweepEvent::WouldDelete { name } = e {
                    lines.push(name.to_string());
                }
            },
        )
        .unwrap();

        assert_eq!(summary.simulated, vec!["rg-a", "rg-b"]);
        assert_eq!(lines, vec!["rg-a", "rg-b"]);
        assert!(backend.deletes().is_empty());
    }

    #[test]
    fn scenario_real_delete_issued_once_by_resource_id() {
        let groups = vec![rg("rg-c").with_tag("keep", "0")];
        let backend = RecordingBackend::default();

        let summary = sweep_groups(
            &backend,
            &groups,
            &criteria(&[("keep", "0")]),
            opts(false, false),
            &mut |_| {},
        )
        .unwrap();

        assert_eq!(
            backend.deletes(),
            vec!["/subscriptions/0000/resourceGroups/rg-c"]
        );
        assert_eq!(summary.deleted, vec!["rg-c"]);
    }

    #[test]
    fn delete_events_are_ordered() {
        let groups = vec![rg("rg-c").with_tag("keep", "0"), rg("rg-d").with_tag("keep", "1")];
        let backend = RecordingBackend::default();

        let mut events = Vec::new();
        sweep_groups(
            &backend,
            &groups,
            &criteria(&[("keep", "0")]),
            opts(false, false),
            &mut |e| events.push(format!("{:?}", e)),
        )
        .unwrap();

        assert_eq!(
            events,
            vec![
                r#"Evaluating { name: "rg-c" }"#,
                r#"TagFound { name: "rg-c", key: "keep", value: "0" }"#,
                r#"TagMatched { name: "rg-c", key: "keep" }"#,
                r#"Deleting { name: "rg-c", id: "/subscriptions/0000/resourceGroups/rg-c" }"#,
                r#"Deleted { name: "rg-c" }"#,
                r#"Evaluating { name: "rg-d" }"#,
                r#"TagFound { name: "rg-d", key: "keep", value: "1" }"#,
                r#"TagMismatched { name: "rg-d", key: "keep" }"#,
                r#"Skipped { name: "rg-d" }"#,
            ]
        );
    }

    #[test]
    fn first_delete_failure_stops_the_sweep() {
        let groups = vec![
            rg("rg-1").with_tag("keep", "0"),
            rg("rg-2").with_tag("keep", "0"),
            rg("rg-3").with_tag("keep", "0"),
        ];
        let backend = RecordingBackend {
            fail_delete_of: Some("/subscriptions/0000/resourceGroups/rg-2".to_string()),
            ..Default::default()
        };

        let err = sweep_groups(
            &backend,
            &groups,
            &criteria(&[("keep", "0")]),
            opts(false, false),
            &mut |_| {},
        )
        .unwrap_err();

        assert!(matches!(err, SweepError::DeleteFailed { ref name, .. } if name == "rg-2"));
        assert_eq!(
            backend.deletes(),
            vec![
                "/subscriptions/0000/resourceGroups/rg-1",
                "/subscriptions/0000/resourceGroups/rg-2"
            ]
        );
    }

    #[test]
    fn run_sweep_logs_in_before_listing() {
        let backend = RecordingBackend::with_groups(vec![rg("rg-a").with_tag("keep", "false")]);
        let request = SweepRequest {
            login: true,
            subscription_id: Some("sub-1".to_string()),
            criteria: criteria(&[("keep", "false")]),
            options: opts(false, false),
        };

        let summary = run_sweep(&backend, &request, &mut |_| {}).unwrap();

        assert_eq!(summary.deleted, vec!["rg-a"]);
        assert_eq!(
            backend.calls(),
            vec![
                "login",
                "subscription:sub-1",
                "list",
                "delete:/subscriptions/0000/resourceGroups/rg-a"
            ]
        );
    }

    #[test]
    fn run_sweep_without_login_only_lists() {
        let backend = RecordingBackend::with_groups(vec![rg("rg-a")]);
        let request = SweepRequest {
            subscription_id: Some("ignored-for-auth".to_string()),
            ..Default::default()
        };

        let mut listed = 0;
        run_sweep(&backend, &request, &mut |e| {
            if let SweepEvent::Listed { groups } = e {
                listed = groups.len();
            }
        })
        .unwrap();

        assert_eq!(backend.calls(), vec!["list"]);
        assert_eq!(listed, 1);
    }

    #[test]
    fn run_sweep_rejects_login_without_subscription_before_any_call() {
        let backend = RecordingBackend::with_groups(vec![rg("rg-a")]);
        let request = SweepRequest {
            login: true,
            ..Default::default()
        };

        let err = run_sweep(&backend, &request, &mut |_| {}).unwrap_err();
        assert!(matches!(err, SweepError::MissingSubscription));
        assert!(backend.calls().is_empty());
    }

    #[test]
    fn run_sweep_propagates_list_failure() {
        let backend = RecordingBackend {
            fail_list: true,
            ..Default::default()
        };

        let err = run_sweep(&backend, &SweepRequest::default(), &mut |_| {}).unwrap_err();
        assert!(matches!(err, SweepError::ListFailed { .. }));
        assert!(err.to_string().contains("Please run 'az login'"));
    }
}
