//! Character transport contract
//!
//! The commander never owns the serial device. It only needs a way to ask
//! "is a byte waiting?" and to take one byte without blocking; anything that
//! can answer those two questions (UART driver, USB CDC endpoint, an
//! in-memory script in tests) can feed it.

/// Non-blocking byte source.
///
/// Both operations must return immediately. A tick of the commander calls
/// [`bytes_available`](Transport::bytes_available) first and reads at most
/// one byte, so an implementation is free to report availability cheaply
/// (e.g. a FIFO fill level) without buffering on its own.
pub trait Transport {
    /// Transport-specific read failure.
    ///
    /// The commander absorbs read errors (a flaky link must not halt the
    /// control loop), so this type only matters to the transport itself.
    type Error;

    /// Whether at least one byte can be read right now.
    fn bytes_available(&self) -> bool;

    /// Read one byte if available.
    ///
    /// `Ok(None)` means nothing was waiting after all; that is not an
    /// error.
    fn read_byte(&mut self) -> Result<Option<u8>, Self::Error>;
}
