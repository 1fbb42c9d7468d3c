//! Trace sinks for emitting parameter scripts
//!
//! A sink is chosen once at startup and injected into a [`Tracer`]; emission is
//! fire-and-forget and never fails the caller.

use std::io::Write;
use std::sync::{Arc, Mutex};

use tracing::{debug, warn};

use crate::compose::compose;
use crate::options::FormatOptions;
use crate::params::ParameterSource;

/// Tracing target used by [`TracingSink`].
pub const SQL_TARGET: &str = "paramtrace::sql";

/// Destination for rendered scripts.
pub trait TraceSink: Send + Sync {
    /// Emit a rendered block of text.
    fn emit(&self, text: &str);
}

/// Emits scripts as `debug` events on the [`SQL_TARGET`] target.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl TraceSink for TracingSink {
    fn emit(&self, text: &str) {
        debug!(target: SQL_TARGET, "{}", text);
    }
}

/// Discards everything.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullSink;

impl TraceSink for NullSink {
    fn emit(&self, _text: &str) {}
}

/// Writes scripts to any [`Write`] implementation.
#[derive(Debug)]
pub struct WriterSink<W> {
    writer: Mutex<W>,
}

impl<W: Write + Send> WriterSink<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer: Mutex::new(writer),
        }
    }

    /// Recover the underlying writer.
    pub fn into_inner(self) -> W {
        self.writer
            .into_inner()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl<W: Write + Send> TraceSink for WriterSink<W> {
    fn emit(&self, text: &str) {
        let mut writer = self
            .writer
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        if let Err(e) = writer.write_all(text.as_bytes()).and_then(|_| writer.flush()) {
            warn!("Failed to write parameter script: {}", e);
        }
    }
}

/// Renders parameter scripts and emits them to an injected sink.
///
/// # Example
///
/// ```ignore
/// use paramtrace::{Parameters, Tracer, WriterSink};
///
/// let tracer = Tracer::new(WriterSink::new(std::io::stderr()));
/// let mut params = Parameters::new();
/// params.add("@id", 42)?;
/// tracer.write_query(Some(&params), Some("dbo.GetUser"));
/// ```
#[derive(Clone)]
pub struct Tracer {
    sink: Arc<dyn TraceSink>,
    options: FormatOptions,
}

impl Default for Tracer {
    fn default() -> Self {
        Self::new(TracingSink)
    }
}

impl Tracer {
    /// Create a tracer writing to `sink` with default options.
    pub fn new(sink: impl TraceSink + 'static) -> Self {
        Self::from_arc(Arc::new(sink))
    }

    /// Create a tracer sharing an existing sink.
    pub fn from_arc(sink: Arc<dyn TraceSink>) -> Self {
        Self {
            sink,
            options: FormatOptions::default(),
        }
    }

    /// Replace the formatting options.
    pub fn with_options(mut self, options: FormatOptions) -> Self {
        self.options = options;
        self
    }

    pub fn options(&self) -> &FormatOptions {
        &self.options
    }

    /// Render the script for `params` without emitting it.
    pub fn get_query<P>(&self, params: Option<&P>, procedure: Option<&str>) -> String
    where
        P: ParameterSource + ?Sized,
    {
        compose(params, procedure, &self.options)
    }

    /// Render the script for `params` and emit it between `--SQL` and
    /// `--END SQL` marker lines.
    pub fn write_query<P>(&self, params: Option<&P>, procedure: Option<&str>)
    where
        P: ParameterSource + ?Sized,
    {
        let newline = self.options.newline();
        let script = self.get_query(params, procedure);
        self.sink
            .emit(&format!("--SQL{newline}{script}--END SQL{newline}"));
    }
}

impl std::fmt::Debug for Tracer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Tracer")
            .field("options", &self.options)
            .finish_non_exhaustive()
    }
}
