use crate::utils::DEFAULT_TIME_LIMIT_SECS;
use clap::Parser;

/// CLI arguments for the mine planner
#[derive(Parser, Debug)]
#[command(name = "lambda_lifter", about = "⛏️  Plans a robot's route through a collapsing mine")]
pub struct Args {
    /// Path to the level file; read from stdin and print only the commands when omitted
    #[arg(short = 'm', long = "map")]
    pub map: Option<String>,

    /// Planning budget in seconds
    #[arg(short = 't', long, default_value_t = DEFAULT_TIME_LIMIT_SECS)]
    pub time_limit: u64,

    /// Maximum turns to explore (defaults to width × height)
    #[arg(long)]
    pub max_moves: Option<usize>,

    /// Render every explored turn, pausing this many milliseconds (ignores the time limit)
    #[arg(long)]
    pub trace_delay: Option<u64>,

    /// Suppress planner event logs
    #[arg(long, default_value_t = false)]
    pub suppress_events: bool,

    /// Print the final mine after the replay
    #[arg(long, default_value_t = false)]
    pub render: bool,
}
