//! Append-only output buffer.

use crate::error::{MinifyError, Result};

#[derive(Debug, Default)]
pub struct Output {
    buf: Vec<u8>,
}

impl Output {
    /// Reserve room for the worst case: every input byte plus one.
    pub fn for_input(len: usize) -> Result<Self> {
        let capacity = len.saturating_add(1);
        let mut buf = Vec::new();
        buf.try_reserve_exact(capacity)
            .map_err(|_| MinifyError::AllocationFailure(capacity))?;
        Ok(Self { buf })
    }

    /// Append one byte. A newline at the very start is never significant and
    /// is dropped.
    pub fn push(&mut self, c: u8) {
        if c == b'\n' && self.buf.is_empty() {
            return;
        }
        self.buf.push(c);
    }

    pub fn len(&self) -> usize {
        self.buf.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    pub fn into_inner(self) -> Vec<u8> {
        self.buf
    }
}
