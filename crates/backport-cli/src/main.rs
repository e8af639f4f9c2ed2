//! `backport` binary entry point

use backport_cli::{cli, commands, logging};
use std::io;

fn main() {
    let matches = cli::build_command().get_matches();
    let Some((name, args)) = matches.subcommand() else {
        return;
    };
    logging::init(args.get_count("verbose"));

    let stdout = io::stdout();
    if let Err(e) = commands::run(name, args, io::stdin().lock(), &mut stdout.lock()) {
        tracing::debug!(error = ?e, "command failed");
        eprintln!("error: {e:#}");
        std::process::exit(1);
    }
}
