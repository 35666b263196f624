//! Console Logger
//!
//! `tracing` subscriber for the browser: events are formatted by
//! `tracing-subscriber`'s fmt layer and each finished line goes to the
//! `console` method matching its level. Native builds (tests, tooling) write
//! to stderr instead.

use std::io::{self, Write};

use tracing::{Level, Metadata};
use tracing_subscriber::fmt::MakeWriter;

pub type InitResult = Result<(), Box<dyn std::error::Error + Send + Sync + 'static>>;

/// Install the global subscriber. Fails if one is already set.
pub fn init_logger(max_level: Level) -> InitResult {
    tracing_subscriber::fmt()
        .with_max_level(max_level)
        .with_writer(ConsoleMakeWriter)
        // wasm32-unknown-unknown has no system clock
        .without_time()
        .with_ansi(false)
        .with_target(true)
        .try_init()
}

/// Hands out one `ConsoleWriter` per event
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleMakeWriter;

impl<'a> MakeWriter<'a> for ConsoleMakeWriter {
    type Writer = ConsoleWriter;

    fn make_writer(&'a self) -> Self::Writer {
        ConsoleWriter::new(Level::INFO)
    }

    fn make_writer_for(&'a self, meta: &Metadata<'_>) -> Self::Writer {
        ConsoleWriter::new(*meta.level())
    }
}

/// Buffers one formatted event and emits it on drop
#[derive(Debug)]
pub struct ConsoleWriter {
    level: Level,
    buffer: Vec<u8>,
}

impl ConsoleWriter {
    pub fn new(level: Level) -> Self {
        Self {
            level,
            buffer: Vec::new(),
        }
    }

    pub fn level(&self) -> Level {
        self.level
    }

    /// Drain the buffered text, without the trailing newline
    fn take_line(&mut self) -> Option<String> {
        if self.buffer.is_empty() {
            return None;
        }
        let bytes = std::mem::take(&mut self.buffer);
        let line = String::from_utf8_lossy(&bytes).trim_end().to_string();
        (!line.is_empty()).then_some(line)
    }
}

impl Write for ConsoleWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.buffer.extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl Drop for ConsoleWriter {
    fn drop(&mut self) {
        if let Some(line) = self.take_line() {
            emit(self.level, &line);
        }
    }
}

#[cfg(target_arch = "wasm32")]
fn emit(level: Level, line: &str) {
    use wasm_bindgen::JsValue;
    use web_sys::console;

    let text = JsValue::from_str(line);
    match level {
        Level::ERROR => console::error_1(&text),
        Level::WARN => console::warn_1(&text),
        Level::INFO => console::info_1(&text),
        Level::DEBUG => console::debug_1(&text),
        _ => console::log_1(&text),
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn emit(_level: Level, line: &str) {
    eprintln!("{}", line);
}
