//! Serial commander: line accumulation, command registry, dispatch
//!
//! Driven one byte per tick from the embedding control loop - no task of
//! its own, no blocking I/O. All output goes through a caller-supplied
//! `core::fmt::Write`.

pub mod builtins;
pub mod commander;
pub mod error;
pub mod line_buffer;
pub mod numfmt;
pub mod registry;

pub use commander::{Commander, Poll};
pub use error::{CallbackError, CommandError, RegistryError};
pub use line_buffer::{LineBuffer, LINE_SIZE};
pub use numfmt::Fixed;
pub use registry::{CallbackResult, CommandFn, CommandRegistry};
