//! Structured JSON logger.
//!
//! Events are single JSON lines with a fixed key order: `event`, then
//! `severity`, then `ts`, then caller fields sorted by key. The JSON is
//! built by hand so the ordering stays deterministic without any map
//! machinery in between.

use std::fmt;
use std::io::{self, Write};

use chrono::Utc;

/// Log severity levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Severity {
    /// Normal operations
    Info,
    /// Recoverable issues
    Warn,
    /// Operation failures
    Error,
    /// Unrecoverable, process exits
    Fatal,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Info => "INFO",
            Severity::Warn => "WARN",
            Severity::Error => "ERROR",
            Severity::Fatal => "FATAL",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Synchronous line logger
pub struct Logger;

impl Logger {
    /// Log one event to stdout
    pub fn log(severity: Severity, event: &str, fields: &[(&str, &str)]) {
        let line = Self::render(severity, event, fields);
        let _ = writeln!(io::stdout(), "{}", line);
    }

    /// Log one event to stderr; used for errors and fatal conditions
    pub fn log_stderr(severity: Severity, event: &str, fields: &[(&str, &str)]) {
        let line = Self::render(severity, event, fields);
        let _ = writeln!(io::stderr(), "{}", line);
    }

    fn render(severity: Severity, event: &str, fields: &[(&str, &str)]) -> String {
        let mut out = String::with_capacity(128);
        out.push('{');
        push_pair(&mut out, "event", event);
        out.push(',');
        push_pair(&mut out, "severity", severity.as_str());
        out.push(',');
        push_pair(&mut out, "ts", &Utc::now().to_rfc3339());

        let mut sorted: Vec<_> = fields.to_vec();
        sorted.sort_by_key(|(key, _)| *key);
        for (key, value) in sorted {
            out.push(',');
            push_pair(&mut out, key, value);
        }

        out.push('}');
        out
    }
}

fn push_pair(out: &mut String, key: &str, value: &str) {
    out.push('"');
    push_escaped(out, key);
    out.push_str("\":\"");
    push_escaped(out, value);
    out.push('"');
}

fn push_escaped(out: &mut String, text: &str) {
    for c in text.chars() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c if (c as u32) < 0x20 => {
                out.push_str(&format!("\\u{:04x}", c as u32));
            }
            c => out.push(c),
        }
    }
}
