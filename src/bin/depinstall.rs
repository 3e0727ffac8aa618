use clap::Parser;
use tracing_subscriber::EnvFilter;

use depinstall::cli::{self, Cli};
use depinstall::config::Config;

fn main() {
    let args = Cli::parse();

    let default_level = if args.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = Config::from(args);

    if let Err(e) = cli::run(&config) {
        cli::report_error(&e);
        std::process::exit(1);
    }
}
