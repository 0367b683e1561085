//! Command interpreter boundary.
//!
//! The console treats the interpreter as an opaque capability with one
//! method. One submitted line may legitimately produce several output
//! chunks; the console transmits each chunk fully before asking for the
//! next, so interpreter calls and transmits strictly alternate.

use core::fmt;

/// Interpreter verdict after producing one output chunk.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ProcessStatus {
    /// Call `process` again with the same line for further output.
    MoreOutput,
    /// All output for this line has been produced.
    Done,
}

impl ProcessStatus {
    pub fn is_done(self) -> bool {
        self == ProcessStatus::Done
    }
}

/// Command interpreter capability.
pub trait CommandInterpreter {
    /// Produce the next output chunk for `line` into `out`.
    ///
    /// `out` arrives empty and bounded by its capacity; writes past
    /// capacity are silently truncated. Must not block indefinitely.
    fn process(&mut self, line: &[u8], out: &mut OutputBuffer) -> ProcessStatus;
}

/// Fixed-capacity output chunk buffer.
///
/// Lent to the interpreter for one `process` call at a time and fully
/// transmitted before reuse. Overflow policy matches the input line:
/// excess bytes are dropped, never an error.
pub struct OutputBuffer {
    buf: Box<[u8]>,
    len: usize,
}

impl OutputBuffer {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            buf: vec![0u8; capacity].into_boxed_slice(),
            len: 0,
        }
    }

    /// Append bytes, silently truncating at capacity.
    pub fn push_bytes(&mut self, bytes: &[u8]) {
        let room = self.buf.len() - self.len;
        let n = bytes.len().min(room);
        self.buf[self.len..self.len + n].copy_from_slice(&bytes[..n]);
        self.len += n;
    }

    pub fn clear(&mut self) {
        self.len = 0;
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.buf[..self.len]
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn capacity(&self) -> usize {
        self.buf.len()
    }
}

impl fmt::Write for OutputBuffer {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.push_bytes(s.as_bytes());
        Ok(())
    }
}
