//! Atomic copying of string, template, and regex literals.
//!
//! Literal bodies are read straight from the [`CharSource`], bypassing
//! comment elision, so `"a // b"` and `/\/*x/` survive untouched.

use crate::error::{MinifyError, Result};
use crate::output::Output;
use crate::source::{CharSource, EOF};

/// True for the three delimiters that open a string or template literal.
pub fn is_quote(c: u8) -> bool {
    matches!(c, b'\'' | b'"' | b'`')
}

/// Copy a string literal whose opening `quote` has just been accepted.
///
/// Everything up to, but not including, the closing quote is written. The
/// closing quote is returned so the caller can hold it as the accepted symbol.
pub fn copy_string(source: &mut CharSource<'_>, out: &mut Output, quote: u8) -> Result<u8> {
    let mut c = quote;
    loop {
        out.push(c);
        c = source.get();
        if c == quote {
            return Ok(c);
        }
        if c == b'\\' {
            out.push(c);
            c = source.get();
        }
        if c == EOF {
            return Err(MinifyError::UnterminatedString);
        }
    }
}

/// Copy a regex literal. `prev` is the accepted symbol preceding the opening
/// `/`; both are written before the body.
///
/// Returns the closing `/`, unwritten, as the new accepted symbol.
pub fn copy_regex(source: &mut CharSource<'_>, out: &mut Output, prev: u8) -> Result<u8> {
    out.push(prev);
    out.push(b'/');
    loop {
        let mut c = source.get();
        match c {
            b'[' => c = copy_class(source, out)?,
            b'/' => return Ok(c),
            b'\\' => {
                out.push(c);
                c = source.get();
            }
            _ => {}
        }
        if c == EOF {
            return Err(MinifyError::UnterminatedRegex);
        }
        out.push(c);
    }
}

/// Copy a `[...]` class inside a regex, in which `/` does not terminate.
/// Returns the closing `]`, unwritten.
fn copy_class(source: &mut CharSource<'_>, out: &mut Output) -> Result<u8> {
    let mut c = b'[';
    loop {
        out.push(c);
        c = source.get();
        if c == b']' {
            return Ok(c);
        }
        if c == b'\\' {
            out.push(c);
            c = source.get();
        }
        if c == EOF {
            return Err(MinifyError::UnterminatedCharacterClass);
        }
    }
}
