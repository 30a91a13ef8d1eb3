use std::io;

use anyhow::Result;
use clap::Parser;
use env_logger::Env;

use strx::cli;
use strx::config::{Args, Config};

fn init_logging(level: Option<&str>) {
    let mut builder = env_logger::Builder::from_env(Env::default().default_filter_or("warn"));
    if let Some(level) = level {
        builder.parse_filters(level);
    }
    builder.init();
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Parse configuration from files and command line
    let config = Config::from_args(&args)?;

    init_logging(config.log_level.as_deref());

    for source in &config.sources {
        log::debug!("Loaded configuration from {}", source.display());
    }

    let stdout = io::stdout();
    let mut out = stdout.lock();
    cli::run(&args.command, &config, &mut out)
}
