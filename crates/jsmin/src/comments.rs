//! Comment elision on top of [`CharSource`].

use crate::error::{MinifyError, Result};
use crate::source::{CharSource, EOF};

/// Returns characters from the source with `//` and `/* */` comments removed.
///
/// A line comment yields the newline (or [`EOF`]) that ends it; a block
/// comment yields a single space.
#[derive(Debug)]
pub struct CommentReader<'a> {
    source: CharSource<'a>,
}

impl<'a> CommentReader<'a> {
    pub fn new(input: &'a [u8]) -> Self {
        Self { source: CharSource::new(input) }
    }

    /// Raw access for literal copying, which must not see comments elided.
    pub fn source(&mut self) -> &mut CharSource<'a> {
        &mut self.source
    }

    pub fn next(&mut self) -> Result<u8> {
        let c = self.source.get();
        if c != b'/' {
            return Ok(c);
        }
        match self.source.peek() {
            b'/' => Ok(self.skip_line_comment()),
            b'*' => {
                self.source.get();
                self.skip_block_comment()
            }
            _ => Ok(c),
        }
    }

    fn skip_line_comment(&mut self) -> u8 {
        loop {
            let c = self.source.get();
            if c == b'\n' || c == EOF {
                return c;
            }
        }
    }

    fn skip_block_comment(&mut self) -> Result<u8> {
        loop {
            match self.source.get() {
                b'*' => {
                    if self.source.peek() == b'/' {
                        self.source.get();
                        return Ok(b' ');
                    }
                }
                EOF => return Err(MinifyError::UnterminatedComment),
                _ => {}
            }
        }
    }
}
