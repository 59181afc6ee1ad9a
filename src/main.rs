//! Text front-end for the draughts engine.
//!
//! Run with:
//! `cargo run --release -- --mode ai --seed 7 --history-file games.jsonl`

use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use draughts_engine::game_state::checkers_types::GameMode;
use draughts_engine::protocol::protocol_top::run_stdio_loop;
use draughts_engine::session::session_config::{SessionConfig, DEFAULT_AI_DELAY};

#[derive(Debug, Parser)]
#[command(name = "draughts_engine", about = "Line-oriented checkers engine")]
struct Args {
    /// Game mode: `pvp` or `ai` (the engine plays White).
    #[arg(long, default_value = "pvp")]
    mode: GameMode,

    /// Seed for the AI's move choices. Random when omitted.
    #[arg(long)]
    seed: Option<u64>,

    /// Delay before the AI answers, in milliseconds.
    #[arg(long, default_value_t = DEFAULT_AI_DELAY.as_millis() as u64)]
    ai_delay_ms: u64,

    /// Append finished games to this JSON-lines file.
    #[arg(long)]
    history_file: Option<PathBuf>,

    /// A side left with pieces but no legal move loses.
    #[arg(long)]
    blocked_loses: bool,
}

impl Args {
    fn session_config(&self) -> SessionConfig {
        SessionConfig {
            mode: self.mode,
            ai_delay: Duration::from_millis(self.ai_delay_ms),
            seed: self.seed,
            blocked_side_loses: self.blocked_loses,
        }
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Logs go to stderr so the protocol on stdout stays parseable.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let config = args.session_config();
    run_stdio_loop(config, args.history_file)?;
    Ok(())
}
