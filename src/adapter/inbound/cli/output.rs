//! Astral-style CLI output formatting.
//!
//! Provides consistent terminal output with support for JSON mode (for
//! scripting), quiet mode, and verbosity levels. Colors go through
//! `if_supports_color`, so `--color never` and non-terminal output stay plain.
//!
//! In JSON mode every line helper emits one `{"type", "payload"}` object
//! instead of text; commands with a single structured result use
//! [`json_output`].

use std::fmt::Display;
use std::sync::{OnceLock, RwLock};

use owo_colors::{OwoColorize, Stream};
use serde_json::{json, Value};

/// Runtime output configuration shared by CLI handlers.
///
/// Set once from the global flags and read by every helper below.
#[derive(Debug, Clone, Copy, Default)]
pub struct OutputConfig {
    /// Emit machine-readable JSON output instead of human-readable text.
    pub json: bool,
    /// Suppress non-essential output.
    pub quiet: bool,
    /// Verbosity level (0 = normal, 1+ = increasingly verbose).
    pub verbose: u8,
}

impl OutputConfig {
    /// Create an output configuration from the global flags.
    #[must_use]
    pub const fn new(json: bool, quiet: bool, verbose: u8) -> Self {
        Self {
            json,
            quiet,
            verbose,
        }
    }

    /// Text output that quiet mode drops.
    const fn suppresses_text(self) -> bool {
        !self.json && self.quiet
    }
}

static OUTPUT_CONFIG: OnceLock<RwLock<OutputConfig>> = OnceLock::new();

/// Global output configuration cell.
fn config_cell() -> &'static RwLock<OutputConfig> {
    OUTPUT_CONFIG.get_or_init(|| RwLock::new(OutputConfig::default()))
}

/// Current configuration. A poisoned lock still yields the last value.
fn read_config() -> OutputConfig {
    match config_cell().read() {
        Ok(config) => *config,
        Err(poisoned) => *poisoned.into_inner(),
    }
}

/// Color used for a piece of terminal text.
#[derive(Debug, Clone, Copy)]
enum Tone {
    Good,
    Bad,
    Caution,
    Accent,
    Muted,
    Strong,
}

/// Apply a tone to `text` when the stream supports color.
fn paint(text: &str, tone: Tone, stream: Stream) -> String {
    text.if_supports_color(stream, |t| match tone {
        Tone::Good => t.green().to_string(),
        Tone::Bad => t.red().to_string(),
        Tone::Caution => t.yellow().to_string(),
        Tone::Accent => t.cyan().to_string(),
        Tone::Muted => t.dimmed().to_string(),
        Tone::Strong => t.bold().to_string(),
    })
    .to_string()
}

/// Shared dispatch for the line helpers.
///
/// JSON mode prints a typed line; otherwise `render` runs unless quiet mode
/// drops the message. `always` messages ignore quiet mode.
fn emit(kind: &str, payload: Value, always: bool, render: impl FnOnce()) {
    let config = read_config();
    if config.json {
        println!("{}", json!({ "type": kind, "payload": payload }));
        return;
    }
    if !always && config.suppresses_text() {
        return;
    }
    render();
}

/// Style a value for display; JSON mode keeps it plain.
fn styled(value: impl Display, tone: Tone) -> String {
    let value = value.to_string();
    if is_json() {
        return value;
    }
    paint(&value, tone, Stream::Stdout)
}

/// Apply output settings from global CLI flags.
pub fn configure(config: OutputConfig) {
    match config_cell().write() {
        Ok(mut current) => *current = config,
        Err(poisoned) => *poisoned.into_inner() = config,
    }
}

/// Return whether machine-readable JSON output is enabled.
#[must_use]
pub fn is_json() -> bool {
    read_config().json
}

/// Return whether quiet mode is enabled.
#[must_use]
pub fn is_quiet() -> bool {
    read_config().quiet
}

/// Return the global verbosity level from `-v` flags.
#[must_use]
pub fn verbosity() -> u8 {
    read_config().verbose
}

/// Print the application header with name and version.
pub fn header(version: &str) {
    let app = env!("CARGO_PKG_NAME");
    emit("header", json!({ "app": app, "version": version }), false, || {
        println!(
            "{} {}",
            paint(app, Tone::Strong, Stream::Stdout),
            paint(version, Tone::Muted, Stream::Stdout)
        );
    });
}

/// Print a labeled value.
pub fn field(label: &str, value: impl Display) {
    let value = value.to_string();
    emit("field", json!({ "label": label, "value": value }), false, || {
        let label = format!("{label:<14}");
        println!("  {} {value}", paint(&label, Tone::Muted, Stream::Stdout));
    });
}

/// Print a success line.
pub fn success(message: &str) {
    emit("success", json!({ "message": message }), false, || {
        println!("  {} {message}", paint("✓", Tone::Good, Stream::Stdout));
    });
}

/// Print a warning line. Shown even in quiet mode.
pub fn warning(message: &str) {
    emit("warning", json!({ "message": message }), true, || {
        println!("  {} {message}", paint("⚠", Tone::Caution, Stream::Stdout));
    });
}

/// Print an error line to stderr.
pub fn error(message: &str) {
    if is_json() {
        eprintln!("{}", json!({ "type": "error", "payload": { "message": message } }));
        return;
    }
    eprintln!("  {} {message}", paint("×", Tone::Bad, Stream::Stderr));
}

/// Print a section header.
pub fn section(title: &str) {
    emit("section", json!({ "title": title }), false, || {
        println!();
        println!("{}", paint(title, Tone::Strong, Stream::Stdout));
    });
}

/// Print a dimmed note.
pub fn note(message: &str) {
    emit("note", json!({ "message": message }), false, || {
        println!("  {}", paint(message, Tone::Muted, Stream::Stdout));
    });
}

/// Print a hint with "hint:" prefix.
pub fn hint(message: &str) {
    emit("hint", json!({ "message": message }), false, || {
        println!(
            "  {}: {}",
            paint("hint", Tone::Accent, Stream::Stdout),
            paint(message, Tone::Muted, Stream::Stdout)
        );
    });
}

/// Print multiple lines of content, each indented.
pub fn lines(content: &str) {
    emit("lines", json!({ "content": content }), false, || {
        for line in content.lines() {
            println!("  {line}");
        }
    });
}

/// Emit a JSON value directly (for commands with a structured result).
pub fn json_output(value: Value) {
    println!("{value}");
}

/// Format a positive value in green.
pub fn positive(value: impl Display) -> String {
    styled(value, Tone::Good)
}

/// Format a negative value in red.
pub fn negative(value: impl Display) -> String {
    styled(value, Tone::Bad)
}

/// Format a highlighted value in cyan.
pub fn highlight(value: impl Display) -> String {
    styled(value, Tone::Accent)
}

/// Format a dimmed value.
pub fn muted(value: impl Display) -> String {
    styled(value, Tone::Muted)
}

/// Format a signed value green when positive, red otherwise.
pub fn signed(value: f64, precision: usize) -> String {
    let text = format!("{value:+.precision$}");
    if value > 0.0 {
        positive(text)
    } else {
        negative(text)
    }
}
