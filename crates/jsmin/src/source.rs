//! Raw character source with a single-slot lookahead.

/// End-of-input marker returned once the source is exhausted.
pub const EOF: u8 = 0;

/// Reads bytes from the input, normalizing control characters.
///
/// Carriage returns become line feeds and every other control character
/// becomes a space, so later stages only ever see `'\n'`, `' '`, printable
/// bytes, or [`EOF`].
#[derive(Debug)]
pub struct CharSource<'a> {
    input: &'a [u8],
    pos: usize,
    lookahead: Option<u8>,
}

impl<'a> CharSource<'a> {
    pub fn new(input: &'a [u8]) -> Self {
        Self { input, pos: 0, lookahead: None }
    }

    /// Next character, draining the lookahead slot first.
    pub fn get(&mut self) -> u8 {
        if let Some(c) = self.lookahead.take() {
            return c;
        }
        match self.input.get(self.pos) {
            Some(&c) => {
                self.pos += 1;
                normalize(c)
            }
            None => EOF,
        }
    }

    /// Next character without consuming it.
    pub fn peek(&mut self) -> u8 {
        let c = self.get();
        self.lookahead = Some(c);
        c
    }
}

fn normalize(c: u8) -> u8 {
    match c {
        b'\n' => b'\n',
        b'\r' => b'\n',
        c if c < b' ' => b' ',
        c => c,
    }
}
