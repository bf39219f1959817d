//! The two-symbol decision automaton that drives minification.

use crate::comments::CommentReader;
use crate::error::Result;
use crate::literal::{copy_regex, copy_string, is_quote};
use crate::output::Output;
use crate::source::EOF;

/// Letters, digits, `_`, `$`, `\`, and any non-ASCII byte.
pub fn is_alphanum(c: u8) -> bool {
    c.is_ascii_alphanumeric() || c == b'_' || c == b'$' || c == b'\\' || c > 126
}

/// Accepted symbols after which a `/` opens a regex literal rather than a
/// division. Keywords such as `return` are not covered.
pub fn is_regex_trigger(c: u8) -> bool {
    matches!(
        c,
        b'(' | b',' | b'=' | b':' | b'[' | b'!' | b'&' | b'|' | b'?' | b'{' | b'}' | b';' | b'\n'
    )
}

/// One step of the automaton.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Write `A`, shift `B` into `A`, fetch a new `B`.
    Emit,
    /// Drop `A`, shift `B` into `A`, fetch a new `B`.
    DeleteA,
    /// Drop `B` and fetch a new one.
    DeleteB,
}

/// Decision table over the accepted symbol `a` and the pending symbol `b`.
pub fn decide(a: u8, b: u8) -> Action {
    match a {
        b' ' => {
            if is_alphanum(b) { Action::Emit } else { Action::DeleteA }
        }
        b'\n' => match b {
            b'{' | b'[' | b'(' | b'+' | b'-' => Action::Emit,
            b' ' => Action::DeleteB,
            _ if is_alphanum(b) => Action::Emit,
            _ => Action::DeleteA,
        },
        _ => match b {
            b' ' => {
                if is_alphanum(a) { Action::Emit } else { Action::DeleteB }
            }
            b'\n' => match a {
                b'}' | b']' | b')' | b'+' | b'-' | b'"' | b'\'' | b'`' => Action::Emit,
                _ if is_alphanum(a) => Action::Emit,
                _ => Action::DeleteB,
            },
            _ => Action::Emit,
        },
    }
}

/// Scan state for a single minification call.
pub struct Automaton<'a> {
    reader: CommentReader<'a>,
    out: Output,
    a: u8,
    b: u8,
}

impl<'a> Automaton<'a> {
    pub fn new(input: &'a [u8]) -> Result<Self> {
        Ok(Self {
            reader: CommentReader::new(input),
            out: Output::for_input(input.len())?,
            a: b'\n',
            b: EOF,
        })
    }

    /// Run to the end of input and hand back the minified bytes.
    pub fn run(mut self) -> Result<Vec<u8>> {
        self.delete_b()?;
        while self.a != EOF {
            match decide(self.a, self.b) {
                Action::Emit => self.emit()?,
                Action::DeleteA => self.delete_a()?,
                Action::DeleteB => self.delete_b()?,
            }
        }
        Ok(self.out.into_inner())
    }

    fn emit(&mut self) -> Result<()> {
        self.out.push(self.a);
        self.delete_a()
    }

    fn delete_a(&mut self) -> Result<()> {
        self.a = self.b;
        if is_quote(self.a) {
            self.a = copy_string(self.reader.source(), &mut self.out, self.a)?;
        }
        self.delete_b()
    }

    fn delete_b(&mut self) -> Result<()> {
        self.b = self.reader.next()?;
        if self.b == b'/' && is_regex_trigger(self.a) {
            self.a = copy_regex(self.reader.source(), &mut self.out, self.a)?;
            self.b = self.reader.next()?;
        }
        Ok(())
    }
}
