use std::{
    fs::File,
    io::{self, Cursor, Read},
    path::{Path, PathBuf},
};

/// a source of scheduler traces.
pub trait TraceSource {
    /// returns a reader.
    fn open(&self) -> io::Result<impl Read>;

    /// a human-readable name for this source, used in error messages.
    fn name(&self) -> &Path;
}

/// a trace backed by a file on disk.
#[derive(Clone, Debug)]
pub struct TraceFile {
    path: PathBuf,
}

/// a mock trace source, for tests.
///
/// each call to [`TraceSource::open()`] yields a fresh reader over the same contents.
#[derive(Clone, Debug, Default)]
pub struct MockTraceFile {
    trace: String,
}

// === impl TraceFile ===

impl TraceFile {
    /// the file the scheduler writes its trace to, relative to the working directory.
    pub const DEFAULT: &str = "output_sched.txt";

    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl Default for TraceFile {
    fn default() -> Self {
        Self::new(Self::DEFAULT)
    }
}

impl TraceSource for TraceFile {
    fn open(&self) -> io::Result<impl Read> {
        File::open(&self.path)
    }

    fn name(&self) -> &Path {
        &self.path
    }
}

// === impl MockTraceFile ===

impl MockTraceFile {
    pub fn new(trace: impl Into<String>) -> Self {
        Self {
            trace: trace.into(),
        }
    }
}

impl TraceSource for MockTraceFile {
    fn open(&self) -> io::Result<impl Read> {
        let Self { trace } = self;
        Ok(Cursor::new(trace.clone().into_bytes()))
    }

    fn name(&self) -> &Path {
        Path::new("<mock>")
    }
}
