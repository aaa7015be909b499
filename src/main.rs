//! a gantt chart of a cpu scheduler's dispatch trace.

use {
    clap::Parser,
    slotchart::{App, TraceFile},
    std::path::PathBuf,
    tracing_subscriber::EnvFilter,
};

type Error = Box<dyn std::error::Error>;

/// draws a gantt chart of which process ran on which cpu, from a scheduler's trace.
#[derive(Debug, Parser)]
#[command(name = "slotchart", version, about, long_about = None)]
struct Cli {
    /// the scheduler trace to read.
    #[arg(value_name = "TRACE", default_value = TraceFile::DEFAULT)]
    trace: PathBuf,

    /// log diagnostics to stderr. `RUST_LOG` narrows what is logged.
    #[arg(short, long)]
    debug: bool,
}

fn main() -> Result<(), Error> {
    let Cli { trace, debug } = Cli::parse();

    if debug {
        init_tracing();
    }

    App::new(TraceFile::new(trace)).tui()?;

    Ok(())
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
