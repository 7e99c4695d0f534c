use std::path::PathBuf;

use clap::ArgMatches;
use tracing::{error, info};

use rgsweep_core::config::load_config;
use rgsweep_core::events;
use rgsweep_core::{
    AzCliBackend, Criteria, RgSweepConfig, SweepEvent, SweepOptions, SweepRequest, SweepSummary,
    run_sweep,
};

use crate::{color, table};

/// How a console line should be styled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Tone {
    Plain,
    Detail,
    Simulated,
    Destructive,
    Success,
}

pub fn run_command(matches: &ArgMatches) -> Result<(), Box<dyn std::error::Error>> {
    events::log_app_startup();

    let explicit_config = matches.get_one::<PathBuf>("config");
    let config = match load_config(explicit_config.map(PathBuf::as_path)) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{}", e);
            error!(event = "cli.config_load_failed", error = %e);
            events::log_app_error(&e);
            return Err(e.into());
        }
    };

    let request = build_request(matches, &config);
    let use_table = matches.get_flag("table") || config.table();
    let az_path = matches
        .get_one::<String>("az-path")
        .map(String::as_str)
        .unwrap_or_else(|| config.az_path());

    info!(
        event = "cli.sweep_started",
        login = request.login,
        subscription_id = ?request.subscription_id,
        criteria = request.criteria.len(),
        delete_untagged = request.options.delete_untagged,
        simulate = request.options.simulate,
        table = use_table
    );

    let backend =
        AzCliBackend::new(az_path).with_subscription(request.subscription_id.clone());

    let result = run_sweep(&backend, &request, &mut |event: &SweepEvent<'_>| {
        print_event(event, use_table)
    });

    match result {
        Ok(summary) => {
            print_summary(&summary, request.options.simulate);
            info!(
                event = "cli.sweep_completed",
                evaluated = summary.evaluated,
                deleted = summary.deleted.len(),
                simulated = summary.simulated.len()
            );
            Ok(())
        }
        Err(e) => {
            eprintln!("{}", e);
            error!(event = "cli.sweep_failed", error = %e);
            events::log_app_error(&e);
            Err(e.into())
        }
    }
}

/// Combine flags with config. Flags win; boolean flags can only switch on.
fn build_request(matches: &ArgMatches, config: &RgSweepConfig) -> SweepRequest {
    let subscription_id = matches
        .get_one::<String>("subscription-id")
        .cloned()
        .or_else(|| config.azure.subscription_id.clone());

    let mut criteria = config.criteria();
    if let Some(tags) = matches.get_many::<(String, String)>("tag") {
        criteria.merge(tags.cloned().collect::<Criteria>());
    }

    SweepRequest {
        login: matches.get_flag("login"),
        subscription_id,
        criteria,
        options: SweepOptions {
            delete_untagged: matches.get_flag("delete-untagged") || config.delete_untagged(),
            simulate: matches.get_flag("simulate") || config.simulate(),
        },
    }
}

fn print_event(event: &SweepEvent<'_>, use_table: bool) {
    if let SweepEvent::Listed { groups } = event {
        if groups.is_empty() {
            println!("No resource groups found.");
        } else if use_table {
            table::print_groups_table(groups);
            println!();
        } else {
            table::print_groups_list(groups);
        }
        return;
    }

    if let Some((tone, line)) = event_line(event) {
        let styled = match tone {
            Tone::Plain => line,
            Tone::Detail => color::muted(&line),
            Tone::Simulated => color::amber(&line),
            Tone::Destructive => color::rust(&line),
            Tone::Success => color::moss(&line),
        };
        println!("{}", styled);
    }
}

/// The console line for a sweep event, without styling.
fn event_line(event: &SweepEvent<'_>) -> Option<(Tone, String)> {
    let line = match event {
        SweepEvent::LoggingIn => (Tone::Plain, "Logging in to Azure...".to_string()),
        SweepEvent::SubscriptionSelected { subscription_id } => (
            Tone::Plain,
            format!("Using subscription {}", subscription_id),
        ),
        SweepEvent::Listed { .. } => return None,
        SweepEvent::Evaluating { name } => (
            Tone::Plain,
            format!("Evaluating resource group {}", color::sky(name)),
        ),
        SweepEvent::Untagged { name } => {
            (Tone::Detail, format!("  {} has no tags", name))
        }
        SweepEvent::TagFound { key, value, .. } => {
            (Tone::Detail, format!("  Found tag {} = {}", key, value))
        }
        SweepEvent::TagMatched { key, .. } => {
            (Tone::Detail, format!("  Tag {} matches", key))
        }
        SweepEvent::TagMismatched { key, .. } => {
            (Tone::Detail, format!("  Tag {} does not match", key))
        }
        SweepEvent::WouldDelete { name } => (
            Tone::Simulated,
            format!("  [simulate] Would delete resource group {}", name),
        ),
        SweepEvent::Deleting { name, id } => (
            Tone::Destructive,
            format!("  Deleting resource group {} ({})...", name, id),
        ),
        SweepEvent::Deleted { name } => {
            (Tone::Success, format!("  Deleted resource group {}", name))
        }
        SweepEvent::Skipped { name } => (Tone::Detail, format!("  Skipping {}", name)),
    };
    Some(line)
}

fn print_summary(summary: &SweepSummary, simulate: bool) {
    println!();
    if summary.matched() == 0 {
        println!(
            "Evaluated {} resource group(s); none matched.",
            summary.evaluated
        );
    } else if simulate {
        println!(
            "Evaluated {} resource group(s); {} would be deleted.",
            summary.evaluated,
            summary.simulated.len()
        );
    } else {
        println!(
            "Evaluated {} resource group(s); deleted {}.",
            summary.evaluated,
            summary.deleted.len()
        );
    }
}
