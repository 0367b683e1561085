//! Input line editing.
//!
//! One incoming byte at a time, three input classes: carriage return is a
//! no-op continuation, backspace/DEL erase, printable ASCII appends.
//! Capacity overflow is silent truncation, not a fault.

/// Capacity of the input line, in bytes.
pub const INPUT_LINE_SIZE: usize = 50;

/// DEL acts as a backspace.
const ASCII_DEL: u8 = 0x7F;

/// The command line currently being typed.
///
/// Owned by the console task; never touched from interrupt context.
pub struct LineBuffer {
    buf: [u8; INPUT_LINE_SIZE],
    len: usize,
}

impl LineBuffer {
    /// Create an empty line.
    pub const fn new() -> Self {
        Self {
            buf: [0u8; INPUT_LINE_SIZE],
            len: 0,
        }
    }

    /// Apply one received byte to the line.
    ///
    /// End-of-line bytes are the caller's concern; a `\r` reaching here is
    /// ignored so that the trailing half of a `\r\n` pair does not edit
    /// the next line.
    pub fn feed(&mut self, byte: u8) {
        match byte {
            b'\r' => {}
            0x08 | ASCII_DEL => {
                if self.len > 0 {
                    self.len -= 1;
                    self.buf[self.len] = 0;
                }
            }
            b' '..=b'~' => {
                if self.len < INPUT_LINE_SIZE {
                    self.buf[self.len] = byte;
                    self.len += 1;
                } else {
                    log::debug!("input line full, dropping byte {byte:#04x}");
                }
            }
            // Non-printable, dropped.
            _ => {}
        }
    }

    /// Reset to empty, clearing the backing storage.
    pub fn clear(&mut self) {
        self.buf = [0u8; INPUT_LINE_SIZE];
        self.len = 0;
    }

    /// Overwrite this line with a snapshot of `other`.
    pub fn copy_from(&mut self, other: &LineBuffer) {
        self.buf = other.buf;
        self.len = other.len;
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.buf[..self.len]
    }

    pub fn as_str(&self) -> &str {
        core::str::from_utf8(self.as_bytes()).unwrap_or("")
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn capacity(&self) -> usize {
        INPUT_LINE_SIZE
    }
}

impl Default for LineBuffer {
    fn default() -> Self {
        Self::new()
    }
}
