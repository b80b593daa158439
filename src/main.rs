//! Overrun -- a conquest bot speaking the line-based game engine protocol.
//!
//! This binary reads commands from stdin and writes responses to stdout.
//! Logs go to stderr.

use std::io::{self, BufRead, Write};
use std::process::ExitCode;

use clap::Parser;
use tracing::{error, warn, Level};

use overrun::config::{
    EngineConfig, DEFAULT_HIJACK_ARMIES, DEFAULT_HIJACK_MAX_UNOWNED, DEFAULT_PICK_COUNT,
};
use overrun::engine::Engine;
use overrun::logging;
use overrun::protocol::parse_command;

#[derive(Debug, Parser)]
#[command(name = "overrun", version, about)]
struct Cli {
    /// Log level for stderr output (error, warn, info, debug, trace).
    #[arg(long, default_value_t = Level::INFO)]
    log_level: Level,

    /// Armies placed next to a hijackable super region.
    #[arg(long, default_value_t = DEFAULT_HIJACK_ARMIES)]
    hijack_armies: u32,

    /// Most unowned regions a super region may have to be hijackable.
    #[arg(long, default_value_t = DEFAULT_HIJACK_MAX_UNOWNED)]
    hijack_max_unowned: usize,

    /// Regions returned for a multi-region starting pick.
    #[arg(long, default_value_t = DEFAULT_PICK_COUNT)]
    pick_count: usize,
}

impl Cli {
    fn engine_config(&self) -> EngineConfig {
        EngineConfig {
            hijack_armies: self.hijack_armies,
            hijack_max_unowned: self.hijack_max_unowned,
            pick_count: self.pick_count,
        }
    }
}

/// Runs the protocol loop until stdin closes.
fn run(engine: &mut Engine) -> io::Result<()> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());

    for line in stdin.lock().lines() {
        let line = line?;
        let cmd = match parse_command(&line) {
            Ok(Some(c)) => c,
            Ok(None) => continue,
            Err(e) => {
                warn!(line = %line.trim(), "unable to parse line: {}", e);
                continue;
            }
        };
        engine.handle_command(cmd, &mut out)?;
    }
    out.flush()
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    if let Err(e) = logging::init(cli.log_level) {
        eprintln!("failed to install logger: {}", e);
    }

    let mut engine = Engine::new(cli.engine_config());
    match run(&mut engine) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("i/o failure: {}", e);
            ExitCode::FAILURE
        }
    }
}
