use clap::Parser;
use miette::Result;
use sheetscan::cli::{Cli, Commands};
use sheetscan::output::Printer;

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_env("SHEETSCAN_LOG")
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .init();

    let printer = Printer::new();

    match cli.command {
        Commands::Build(args) => sheetscan::cli::build::run(args, &printer)?,
        Commands::List(args) => sheetscan::cli::list::run(args, &printer)?,
        Commands::Completions(args) => sheetscan::cli::completions::run(args)?,
    }

    Ok(())
}
