//! # FocCommander
//!
//! Non-blocking command console for tuning motion-control parameters
//! (PID gains, low-pass filter time constant, target setpoint) over a
//! character-stream transport such as a serial link.
//!
//! ## Architecture
//!
//! The [`Commander`] is driven by the embedding control loop, one tick at a
//! time. A tick consumes at most one byte from the [`Transport`] and never
//! blocks, so the loop keeps its timing even while an operator is typing:
//!
//! ```text
//! control loop           Commander                  collaborators
//! ────────────           ─────────                  ─────────────
//! commander.run() ─────▶ accumulate byte
//!                        on CR/LF: dispatch ──────▶ Pid / LowPassFilter /
//!                        line to callback              Encoder get/set
//!                        or built-in handler ─────▶ text on `out`
//! ```
//!
//! Built-in commands (`P I D R L F E T ? V @`) follow the SimpleFOC
//! Commander syntax: `P1.5` sets the proportional gain, bare `P` reads it
//! back. Custom single-character commands registered with
//! [`Commander::register`] take priority over every built-in.
//!
//! The commander borrows its collaborators and does not own the transport;
//! both stay available to the surrounding loop.

#![cfg_attr(not(any(test, feature = "std")), no_std)]

extern crate alloc;

pub mod commander;
pub mod control;
pub mod transport;

pub use commander::{
    CallbackError, CallbackResult, CommandError, CommandRegistry, Commander, Fixed, LineBuffer,
    Poll, RegistryError, LINE_SIZE,
};
pub use control::{Encoder, LowPassFilter, Pid};
pub use transport::Transport;
