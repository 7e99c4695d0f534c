use std::path::PathBuf;

use clap::{Arg, ArgAction, Command, value_parser};
use rgsweep_core::Criteria;

pub fn build_cli() -> Command {
    Command::new("rgsweep")
        .about("Delete Azure resource groups selected by their tags")
        .version(env!("CARGO_PKG_VERSION"))
        .arg(
            Arg::new("subscription-id")
                .long("subscription-id")
                .value_name("ID")
                .help("Target subscription (required with --login)"),
        )
        .arg(
            Arg::new("tag")
                .long("tag")
                .short('t')
                .value_name("KEY=VALUE")
                .action(ArgAction::Append)
                .value_parser(Criteria::parse_pair)
                .help("Delete groups whose tag KEY equals VALUE (key case-sensitive, value not). Repeatable"),
        )
        .arg(
            Arg::new("delete-untagged")
                .long("delete-untagged")
                .action(ArgAction::SetTrue)
                .help("Also delete resource groups that have no tags"),
        )
        .arg(
            Arg::new("login")
                .long("login")
                .action(ArgAction::SetTrue)
                .help("Run 'az login' and switch to --subscription-id before listing"),
        )
        .arg(
            Arg::new("simulate")
                .long("simulate")
                .action(ArgAction::SetTrue)
                .help("Only report what would be deleted"),
        )
        .arg(
            Arg::new("table")
                .long("table")
                .action(ArgAction::SetTrue)
                .help("Print the resource group listing as a table"),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .value_name("PATH")
                .value_parser(value_parser!(PathBuf))
                .help("Config file layered over ~/.rgsweep/config.toml and ./.rgsweep/config.toml"),
        )
        .arg(
            Arg::new("az-path")
                .long("az-path")
                .value_name("PATH")
                .help("Azure CLI binary to invoke (default: az)"),
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .short('v')
                .action(ArgAction::SetTrue)
                .global(true)
                .help("Enable verbose structured logging"),
        )
        .arg(
            Arg::new("no-color")
                .long("no-color")
                .action(ArgAction::SetTrue)
                .help("Disable colored output"),
        )
}
