use crate::reports;
use benchdash::catalog;
use benchdash::error::{DashError, DashResult};
use benchdash::state::{DashEvent, DashState};
use benchdash::synth::scores;
use clap::Args;

#[derive(Args, Debug, Clone)]
pub struct ReportArgs {
    #[arg(short, long, default_value = "Arrow Lake")]
    pub program: String,

    #[arg(short, long, default_value = "Arrow Lake S")]
    pub sku: String,

    #[arg(short, long, default_value = "Build 2025.03 (Aug 18)")]
    pub build: String,

    /// Emit a JSON document instead of tables.
    #[arg(long, default_value_t = false)]
    pub json: bool,

    /// Include per-game CPU telemetry columns.
    #[arg(long, default_value_t = false)]
    pub telemetry: bool,
}

pub fn run(args: ReportArgs, seed: Option<u64>) -> DashResult<()> {
    let program = catalog::program(&args.program)
        .ok_or_else(|| DashError::Config(format!("Unknown program '{}'", args.program)))?;
    if !program.skus.contains(&args.sku.as_str()) {
        return Err(DashError::Config(format!(
            "SKU '{}' does not belong to program '{}'",
            args.sku, args.program
        )));
    }
    if !catalog::is_known_build(&args.build) {
        return Err(DashError::Config(format!(
            "Unknown build '{}'",
            args.build
        )));
    }

    let mut rng = match seed {
        Some(s) => fastrand::Rng::with_seed(s),
        None => fastrand::Rng::new(),
    };

    // Drive the same reducer the interactive view uses.
    let mut state = DashState::default();
    state.apply(DashEvent::SelectProgram(args.program.clone()));
    state.apply(DashEvent::SelectSku(args.sku.clone()));
    state.apply(DashEvent::SelectBuild(args.build.clone()));

    let results = match state.results_key() {
        Some(_) => scores::generate(&mut rng),
        None => Vec::new(),
    };

    if args.json {
        reports::print_json(&args.program, &args.sku, &args.build, &results)
    } else {
        reports::print_results(&args.program, &args.sku, &args.build, &results, args.telemetry);
        Ok(())
    }
}
