use benchdash::error::DashResult;
use benchdash::tui::App;
use clap::Args;
use std::time::Duration;

#[derive(Args, Debug, Clone)]
pub struct ViewArgs {
    /// Event poll interval in milliseconds.
    #[arg(long, default_value_t = 200)]
    pub tick_ms: u64,
}

pub fn run(args: ViewArgs, seed: Option<u64>) -> DashResult<()> {
    let mut app = App::new(seed, Duration::from_millis(args.tick_ms));
    app.run()
}
