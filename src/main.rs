use chanvars::cli::{handle_scan, CliArgs};
use chanvars::util::{init_logging, LoggingConfig};
use chanvars::VERSION;

use clap::Parser;
use tracing::debug;

fn main() {
    let args = CliArgs::parse();
    init_logging(LoggingConfig::from_cli(
        args.log_level.as_deref(),
        args.verbose,
        args.quiet,
    ));

    debug!("chanvars v{} starting", VERSION);
    debug!("Arguments: {:?}", args);

    std::process::exit(handle_scan(&args));
}
