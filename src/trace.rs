use {
    crate::source::TraceSource,
    regex::Regex,
    std::{
        fmt::{self, Display},
        io::{self, BufRead, BufReader},
        num::ParseIntError,
        path::PathBuf,
        str::FromStr,
        sync::LazyLock,
    },
    tracing::{trace, warn},
};

pub use self::ids::{CpuId, ProcessId, TimeSlot};

mod ids;


/// a single dispatch observation: `process` ran on `cpu` during `time`.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct Event {
    pub time: TimeSlot,
    pub cpu: CpuId,
    pub process: ProcessId,
}

/// a line in a scheduler trace.
#[derive(Debug, Eq, PartialEq)]
pub enum Line {
    /// a `Time slot <n>` marker, which begins a new time slot.
    TimeSlot(TimeSlot),
    /// a `CPU <n>: Dispatched process <m>` line.
    Dispatch { cpu: CpuId, process: ProcessId },
    /// any other line. the simulator prints plenty of these.
    Other,
}

/// folds trace lines into [`Event`]s.
///
/// the only state carried between lines is the time slot most recently announced.
#[derive(Debug)]
pub struct Parser {
    time: TimeSlot,
    events: Vec<Event>,
}

#[derive(Debug, Eq, PartialEq)]
pub enum LineParseError {
    TimeSlotParse(ParseIntError),
    /// the slot has no successor, so nothing dispatched in it could end.
    TimeSlotRange(TimeSlot),
    CpuIdParse(ParseIntError),
    ProcessIdParse(ParseIntError),
}

#[derive(Debug)]
pub enum TraceReadError {
    Open { path: PathBuf, error: io::Error },
    Read(io::Error),
}

// NB: numbers are ascii digits only. other unicode decimal digits are not recognized.
static TIME_SLOT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\s*Time slot\s+([0-9]+)").expect("time slot pattern is valid")
});

// NB: only a single cpu digit is recognized; `CPU 10: ...` is not a dispatch line.
static DISPATCH: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\s*CPU\s+([0-9]):\s+Dispatched process\s+([0-9]+)")
        .expect("dispatch pattern is valid")
});

/// reads every dispatch [`Event`] from the given source, in file order.
pub fn read(source: &impl TraceSource) -> Result<Vec<Event>, TraceReadError> {
    let reader = source.open().map_err(|error| TraceReadError::Open {
        path: source.name().to_owned(),
        error,
    })?;

    BufReader::new(reader)
        .lines()
        .try_fold(Parser::new(), |parser, line| line.map(|l| parser.feed(&l)))
        .map(Parser::finish)
        .map_err(TraceReadError::Read)
}

/// parses every dispatch [`Event`] from the given lines.
pub fn parse<'a>(lines: impl IntoIterator<Item = &'a str>) -> Vec<Event> {
    lines
        .into_iter()
        .fold(Parser::new(), Parser::feed)
        .finish()
}

// === impl Parser ===

impl Parser {
    pub fn new() -> Self {
        Self {
            time: TimeSlot::UNSET,
            events: Vec::new(),
        }
    }

    /// the time slot that the next dispatch will be attributed to.
    pub fn time(&self) -> TimeSlot {
        self.time
    }

    /// feeds one line of the trace into the parser.
    ///
    /// lines that are not recognized are skipped. this never fails.
    pub fn feed(mut self, line: &str) -> Self {
        match line.parse::<Line>() {
            Ok(Line::TimeSlot(time)) => self.time = time,
            Ok(Line::Dispatch { cpu, process }) => self.events.push(Event {
                time: self.time,
                cpu,
                process,
            }),
            Ok(Line::Other) => trace!(line, "skipping line"),
            Err(error) => warn!(line, %error, "skipping malformed line"),
        }

        self
    }

    /// returns the events observed so far.
    pub fn finish(self) -> Vec<Event> {
        let Self { time: _, events } = self;
        events
    }
}

impl Default for Parser {
    fn default() -> Self {
        Self::new()
    }
}

// === impl Line ===

impl FromStr for Line {
    type Err = LineParseError;
    fn from_str(line: &str) -> Result<Self, Self::Err> {
        use LineParseError::{CpuIdParse, ProcessIdParse, TimeSlotParse, TimeSlotRange};

        if let Some(captures) = TIME_SLOT.captures(line) {
            let time = captures[1].parse::<TimeSlot>().map_err(TimeSlotParse)?;
            if time > TimeSlot::LAST {
                return Err(TimeSlotRange(time));
            }
            return Ok(Self::TimeSlot(time));
        }

        if let Some(captures) = DISPATCH.captures(line) {
            let cpu = captures[1].parse::<CpuId>().map_err(CpuIdParse)?;
            let process = captures[2].parse::<ProcessId>().map_err(ProcessIdParse)?;
            return Ok(Self::Dispatch { cpu, process });
        }

        Ok(Self::Other)
    }
}

// === impl LineParseError ===

impl Display for LineParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use LineParseError::*;
        match self {
            TimeSlotParse(error) => f.write_fmt(format_args!("invalid time slot: {error}")),
            TimeSlotRange(time) => f.write_fmt(format_args!("time slot out of range: {time}")),
            CpuIdParse(error) => f.write_fmt(format_args!("invalid cpu id: {error}")),
            ProcessIdParse(error) => f.write_fmt(format_args!("invalid process id: {error}")),
        }
    }
}

impl std::error::Error for LineParseError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        use LineParseError::*;

        match self {
            TimeSlotParse(error) | CpuIdParse(error) | ProcessIdParse(error) => Some(error),
            TimeSlotRange(_) => None,
        }
    }
}

// === impl TraceReadError ===

impl std::error::Error for TraceReadError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Open { path: _, error } => Some(error),
            Self::Read(error) => Some(error),
        }
    }
}

impl Display for TraceReadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Open { path, error } => {
                f.write_fmt(format_args!("could not open {}: {error}", path.display()))
            }
            Self::Read(error) => f.write_fmt(format_args!("could not read trace: {error}")),
        }
    }
}
