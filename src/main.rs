// ===== benchdash/src/main.rs =====
use clap::{Parser, Subcommand};
use std::process;
use tracing_subscriber::EnvFilter;

mod cmd;
mod reports;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Pin the RNG so a run (or a report) is reproducible.
    #[arg(global = true, short = 'S', long)]
    seed: Option<u64>,

    #[arg(global = true, long, default_value_t = false)]
    debug: bool,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Interactive dashboard.
    View(cmd::view::ViewArgs),
    /// Print one benchmark run to stdout.
    Report(cmd::report::ReportArgs),
}

fn main() {
    let cli = Cli::parse();

    let default_filter = if cli.debug {
        "benchdash=debug"
    } else {
        "benchdash=warn"
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)),
        )
        .with_writer(std::io::stderr)
        .init();

    let outcome = match cli.command {
        Commands::View(args) => cmd::view::run(args, cli.seed),
        Commands::Report(args) => cmd::report::run(args, cli.seed),
    };

    if let Err(e) = outcome {
        eprintln!("❌ {}", e);
        process::exit(1);
    }
}
