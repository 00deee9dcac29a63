//! Line buffer for command input

/// Maximum line length. Further printable bytes on an over-long line are
/// dropped; the line dispatches truncated.
pub const LINE_SIZE: usize = 128;

/// Bounded input line accumulator.
///
/// Holds printable ASCII only; terminators never enter the buffer, the
/// commander extracts the line the moment one arrives.
#[derive(Default)]
pub struct LineBuffer {
    buf: heapless::String<LINE_SIZE>,
}

impl LineBuffer {
    /// Create empty buffer
    pub const fn new() -> Self {
        Self {
            buf: heapless::String::new(),
        }
    }

    /// Append a printable ASCII byte. Silently dropped when full.
    pub fn push(&mut self, byte: u8) {
        let _ = self.buf.push(byte as char);
    }

    /// Remove the last character. No-op on an empty buffer.
    pub fn backspace(&mut self) {
        let _ = self.buf.pop();
    }

    /// Clear buffer
    pub fn clear(&mut self) {
        self.buf.clear();
    }

    /// Hand out the accumulated line and reset the buffer.
    pub fn take(&mut self) -> heapless::String<LINE_SIZE> {
        core::mem::take(&mut self.buf)
    }

    /// Current contents as a string slice
    pub fn as_str(&self) -> &str {
        &self.buf
    }

    /// Number of accumulated characters
    pub fn len(&self) -> usize {
        self.buf.len()
    }

    /// Check if empty
    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }
}
