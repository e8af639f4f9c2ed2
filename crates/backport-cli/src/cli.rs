//! Command-line definition

use clap::{value_parser, Arg, ArgAction, Command};
use std::path::PathBuf;

/// Build the `backport` command
#[must_use]
pub fn build_command() -> Command {
    let dir = Arg::new("dir")
        .required(true)
        .value_parser(value_parser!(PathBuf))
        .help("Directory of mapping-<older>to<newer>.json files");

    Command::new("backport")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Convert block-state identifiers to older schema versions")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .arg(
            Arg::new("config")
                .long("config")
                .global(true)
                .value_parser(value_parser!(PathBuf))
                .help("Loader config (TOML)"),
        )
        .arg(
            Arg::new("json")
                .long("json")
                .global(true)
                .action(ArgAction::SetTrue)
                .help("Output as JSON"),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .global(true)
                .action(ArgAction::Count)
                .help("Raise log level (-v info, -vv debug)"),
        )
        .subcommand(
            Command::new("versions")
                .about("List chain versions newest first with step sizes")
                .arg(dir.clone()),
        )
        .subcommand(
            Command::new("check")
                .about("Validate a mapping directory")
                .arg(dir.clone()),
        )
        .subcommand(
            Command::new("convert")
                .about("Convert identifiers from one version to an older one")
                .arg(dir)
                .arg(
                    Arg::new("from")
                        .long("from")
                        .required(true)
                        .help("Source version, e.g. 1.18"),
                )
                .arg(
                    Arg::new("to")
                        .long("to")
                        .required(true)
                        .help("Target (older) version, e.g. 1.16.2"),
                )
                .arg(
                    Arg::new("ids")
                        .num_args(0..)
                        .help("Identifiers to convert; reads stdin lines when omitted"),
                ),
        )
}
