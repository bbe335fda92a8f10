//! CLI entry point for the chart link tool

use std::process::ExitCode;

use clap::Parser;
use stitchlink::io::cli::{Cli, report, run};
use stitchlink::io::logging::init_logging;

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose, cli.quiet);
    let stdout = std::io::stdout();
    report(run(cli, &mut stdout.lock()))
}
