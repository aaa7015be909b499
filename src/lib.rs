//! a gantt chart of a cpu scheduler's dispatch trace.

use {
    std::{
        fmt::{self, Display},
        io,
    },
    tracing::debug,
};

pub use self::{
    chart::{Chart, LegendEntry, Row},
    interval::{Interval, Intervals, Pair},
    source::{MockTraceFile, TraceFile, TraceSource},
    trace::{
        CpuId, Event, Line, LineParseError, Parser, ProcessId, TimeSlot, TraceReadError, parse,
        read,
    },
};

mod bar;
mod chart;
mod interval;
mod source;
/// scheduler trace parsing.
///
/// this file provides tools to turn the simulator's output into dispatch events.
mod trace;
mod window;

pub struct App<S = TraceFile> {
    source: S,
}

#[derive(Debug)]
pub enum Error {
    Trace(TraceReadError),
    Terminal(io::Error),
}

// === impl App ===

impl<S: TraceSource> App<S> {
    /// initializes a new application.
    pub fn new(source: S) -> Self {
        Self { source }
    }

    /// reads the dispatch events from the trace.
    pub fn events(&self) -> Result<Vec<Event>, TraceReadError> {
        trace::read(&self.source)
    }

    /// reads the trace, and folds its events into intervals.
    pub fn intervals(&self) -> Result<Intervals, TraceReadError> {
        let events = self.events()?;
        debug!(
            source = %self.source.name().display(),
            events = events.len(),
            "read trace"
        );

        Ok(events.iter().collect())
    }

    /// reads the trace, and lays out its chart.
    pub fn chart(&self) -> Result<Chart, TraceReadError> {
        self.intervals().map(|intervals| Chart::new(&intervals))
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new(TraceFile::default())
    }
}

// === impl Error ===

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Trace(trace) => Some(trace),
            Self::Terminal(io) => Some(io),
        }
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Trace(trace) => f.write_fmt(format_args!("{}", trace)),
            Self::Terminal(io) => f.write_fmt(format_args!("terminal error: {}", io)),
        }
    }
}

impl From<TraceReadError> for Error {
    fn from(trace: TraceReadError) -> Self {
        Self::Trace(trace)
    }
}

impl From<io::Error> for Error {
    fn from(io: io::Error) -> Self {
        Self::Terminal(io)
    }
}
