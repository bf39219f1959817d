//! jsmin — single-pass JavaScript minifier.
//!
//! Stages, leaf to root:
//! 1. Character source — raw bytes with one-character lookahead
//! 2. Comment reader — elides `//` and `/* */` comments
//! 3. Literal copier — passes strings, templates, and regexes through intact
//! 4. Automaton — decides per pair of symbols what to keep

pub mod automaton;
pub mod comments;
pub mod error;
pub mod literal;
pub mod output;
pub mod source;

pub use error::{MinifyError, Result};

use automaton::Automaton;

/// Minify raw source bytes.
pub fn minify_bytes(source: &[u8]) -> Result<Vec<u8>> {
    let output = Automaton::new(source)?.run()?;
    tracing::debug!(input = source.len(), output = output.len(), "minified");
    Ok(output)
}

/// Minify source text.
///
/// Only ASCII bytes are ever dropped or rewritten, and comments end on ASCII
/// terminators, so the output of UTF-8 input is itself UTF-8.
pub fn minify(source: &str) -> Result<String> {
    let output = minify_bytes(source.as_bytes())?;
    Ok(String::from_utf8(output)
        .unwrap_or_else(|e| String::from_utf8_lossy(e.as_bytes()).into_owned()))
}

/// Minification result with size statistics.
#[derive(Debug, Clone)]
pub struct MinifyReport {
    pub output: String,
    pub original_len: usize,
    pub minified_len: usize,
    pub reduction_pct: f64,
}

impl MinifyReport {
    pub fn ratio(&self) -> f64 {
        if self.original_len == 0 { return 1.0; }
        self.minified_len as f64 / self.original_len as f64
    }
}

/// Minifier front end that reports how much was saved.
#[derive(Debug, Clone, Copy, Default)]
pub struct Minifier;

impl Minifier {
    pub fn new() -> Self {
        Self
    }

    pub fn minify(&self, source: &str) -> Result<MinifyReport> {
        let output = minify(source)?;
        let original_len = source.len();
        let minified_len = output.len();
        let reduction_pct = if original_len > 0 {
            (original_len.saturating_sub(minified_len) as f64 / original_len as f64) * 100.0
        } else {
            0.0
        };
        Ok(MinifyReport { output, original_len, minified_len, reduction_pct })
    }
}
