//! Main commander struct integrating all components

use core::fmt::Write;

use crate::control::{Encoder, LowPassFilter, Pid};
use crate::transport::Transport;

use super::builtins::{builtins_with_gate, Gate, PidField, ScalarOp};
use super::error::{CommandError, RegistryError};
use super::line_buffer::LineBuffer;
use super::numfmt::Fixed;
use super::registry::{CallbackResult, CommandRegistry};

/// Crate version shown in the banner.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Interrupt byte (Ctrl+C). Surfaced to the embedding loop, never handled
/// internally.
const INTERRUPT: u8 = 0x03;

/// Outcome of one commander tick.
#[must_use]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Poll {
    /// No byte was available; nothing changed.
    Idle,
    /// One byte was consumed; the line is still being accumulated.
    Consumed,
    /// A complete line was dispatched.
    Dispatched,
    /// The interrupt byte arrived. The embedding loop owns program
    /// lifetime and decides what to do; the input buffer is left intact.
    Interrupted,
}

/// Non-blocking command console for motion-control tuning.
///
/// Borrows up to three collaborators (PID controller, low-pass filter,
/// encoder); each built-in command is active only while its collaborator is
/// present. Custom commands registered with [`register`](Self::register)
/// pre-empt built-ins on the same id.
pub struct Commander<'a> {
    line: LineBuffer,
    registry: CommandRegistry<'a>,
    pid: Option<&'a mut dyn Pid>,
    lpf: Option<&'a mut dyn LowPassFilter>,
    encoder: Option<&'a dyn Encoder>,
    verbose: bool,
    decimal_places: usize,
    target: f32,
}

impl<'a> Commander<'a> {
    /// Create a commander with no collaborators, verbose on and three
    /// decimal places.
    pub fn new() -> Self {
        Self {
            line: LineBuffer::new(),
            registry: CommandRegistry::new(),
            pid: None,
            lpf: None,
            encoder: None,
            verbose: true,
            decimal_places: 3,
            target: 0.0,
        }
    }

    /// Attach a PID controller, activating `P I D R L`.
    pub fn with_pid(mut self, pid: &'a mut dyn Pid) -> Self {
        self.pid = Some(pid);
        self
    }

    /// Attach a low-pass filter, activating `F`.
    pub fn with_low_pass_filter(mut self, lpf: &'a mut dyn LowPassFilter) -> Self {
        self.lpf = Some(lpf);
        self
    }

    /// Attach an encoder, activating `E`.
    pub fn with_encoder(mut self, encoder: &'a dyn Encoder) -> Self {
        self.encoder = Some(encoder);
        self
    }

    /// Set the initial verbose flag (set commands echo a confirmation).
    pub fn verbose(mut self, on: bool) -> Self {
        self.verbose = on;
        self
    }

    /// Set the number of decimal digits for all float output.
    pub fn decimal_places(mut self, places: usize) -> Self {
        self.decimal_places = places;
        self
    }

    /// Current target value, as set through the `T` command.
    pub fn target(&self) -> f32 {
        self.target
    }

    /// Current verbose flag.
    pub fn is_verbose(&self) -> bool {
        self.verbose
    }

    /// Register a custom command. See [`CommandRegistry::register`].
    pub fn register<F>(
        &mut self,
        id: &str,
        callback: F,
        label: Option<&'static str>,
    ) -> Result<(), RegistryError>
    where
        F: FnMut(&str, &mut dyn Write) -> CallbackResult + 'a,
    {
        self.registry.register(id, callback, label)
    }

    /// Process one tick: consume at most one transport byte, never block.
    ///
    /// Call this from the control loop every cycle. A terminator byte after
    /// a non-empty line dispatches the line before returning; dispatch
    /// diagnostics are written to `out` and never escape. Transport read
    /// errors are absorbed - a flaky link must not halt the control loop.
    pub fn run<T: Transport>(&mut self, transport: &mut T, out: &mut dyn Write) -> Poll {
        if !transport.bytes_available() {
            return Poll::Idle;
        }

        let byte = match transport.read_byte() {
            Ok(Some(byte)) => byte,
            Ok(None) => return Poll::Idle,
            Err(_) => {
                log::debug!("transport read failed, skipping tick");
                return Poll::Idle;
            }
        };

        match byte {
            // Terminator: either CR or LF completes a line on its own, so
            // CRLF dispatches on the CR and the LF hits an empty buffer.
            b'\r' | b'\n' => {
                if self.line.is_empty() {
                    return Poll::Consumed;
                }
                let line = self.line.take();
                if let Err(err) = self.process_command(&line, out) {
                    let _ = writeln!(out, "Error: {err}");
                }
                Poll::Dispatched
            }

            INTERRUPT => {
                log::debug!("interrupt byte received");
                Poll::Interrupted
            }

            // Backspace or delete
            0x08 | 0x7F => {
                self.line.backspace();
                Poll::Consumed
            }

            // Printable ASCII
            0x20..=0x7E => {
                self.line.push(byte);
                Poll::Consumed
            }

            // Anything else is noise on the line
            _ => Poll::Consumed,
        }
    }

    /// Dispatch one complete command line.
    ///
    /// The first character, upper-cased, selects the handler; the remainder
    /// is trimmed and passed as the value string. Useful directly when
    /// commands come from somewhere other than the serial transport.
    ///
    /// The returned error is the diagnostic [`run`](Self::run) would print;
    /// the commander itself stays fully usable after any error.
    pub fn process_command(&mut self, line: &str, out: &mut dyn Write) -> Result<(), CommandError> {
        let mut chars = line.chars();
        let first = match chars.next() {
            Some(c) => c,
            None => return Ok(()),
        };
        let id = first.to_ascii_uppercase();
        let value = chars.as_str().trim();

        // Custom callbacks pre-empt every built-in, so scripts can redefine
        // T, V, R, L, ... for their own use.
        if let Some(callback) = self.registry.lookup_mut(id) {
            log::trace!("dispatching custom command '{id}'");
            return callback(value, out).map_err(|source| CommandError::Callback { id, source });
        }

        match id {
            'P' if self.pid.is_some() => self.pid_field(PidField::P, value, out),
            'I' if self.pid.is_some() => self.pid_field(PidField::I, value, out),
            'D' if self.pid.is_some() => self.pid_field(PidField::D, value, out),
            'R' if self.pid.is_some() => self.pid_field(PidField::Ramp, value, out),
            'L' if self.pid.is_some() => self.pid_field(PidField::Limit, value, out),
            'F' if self.lpf.is_some() => self.filter_tf(value, out),
            'E' if self.encoder.is_some() => {
                if let Some(encoder) = self.encoder {
                    self.encoder_report(encoder, out);
                }
                Ok(())
            }
            'T' => self.target_value(value, out),
            '?' => {
                self.print_status(out);
                Ok(())
            }
            'V' => {
                self.toggle_verbose(out);
                Ok(())
            }
            '@' => {
                self.scan_commands(out);
                Ok(())
            }
            other => Err(CommandError::UnknownCommand(other)),
        }
    }

    /// Print the version banner and a hint at the command listing.
    pub fn print_banner(&self, out: &mut dyn Write) {
        let _ = writeln!(out, "FOC Commander v{VERSION}");
        let _ = writeln!(out, "Type a command and press Enter. '@' lists commands.");
    }

    // --- Built-in handlers ---

    fn pid_field(
        &mut self,
        field: PidField,
        value: &str,
        out: &mut dyn Write,
    ) -> Result<(), CommandError> {
        let places = self.decimal_places;
        let verbose = self.verbose;
        let Some(pid) = self.pid.as_deref_mut() else {
            return Ok(()); // gated by dispatch
        };

        match ScalarOp::parse(value)? {
            ScalarOp::Get => {
                let _ = writeln!(out, "{}: {}", field.short(), Fixed::new(field.get(pid), places));
            }
            ScalarOp::Set(v) => {
                field.set(pid, v);
                if verbose {
                    let _ = writeln!(out, "{}: {}", field.label(), Fixed::new(v, places));
                }
            }
        }
        Ok(())
    }

    fn filter_tf(&mut self, value: &str, out: &mut dyn Write) -> Result<(), CommandError> {
        let places = self.decimal_places;
        let verbose = self.verbose;
        let Some(lpf) = self.lpf.as_deref_mut() else {
            return Ok(()); // gated by dispatch
        };

        match ScalarOp::parse(value)? {
            ScalarOp::Get => {
                let _ = writeln!(out, "Tf: {}", Fixed::new(lpf.time_constant(), places));
            }
            ScalarOp::Set(v) => {
                lpf.set_time_constant(v);
                if verbose {
                    let _ = writeln!(out, "Filter Tf: {} s", Fixed::new(v, places));
                }
            }
        }
        Ok(())
    }

    fn target_value(&mut self, value: &str, out: &mut dyn Write) -> Result<(), CommandError> {
        match ScalarOp::parse(value)? {
            ScalarOp::Get => {
                let _ = writeln!(out, "Target: {}", Fixed::new(self.target, self.decimal_places));
            }
            ScalarOp::Set(v) => {
                self.target = v;
                if self.verbose {
                    let _ = writeln!(out, "Target: {}", Fixed::new(v, self.decimal_places));
                }
            }
        }
        Ok(())
    }

    fn encoder_report(&self, encoder: &dyn Encoder, out: &mut dyn Write) {
        let places = self.decimal_places;
        let _ = writeln!(out, "Encoder:");
        let _ = writeln!(out, "  Position: {} counts", encoder.position());
        let _ = writeln!(out, "  Angle:    {} rad", Fixed::new(encoder.angle(), places));
        let _ = writeln!(out, "  Velocity: {} rad/s", Fixed::new(encoder.velocity(), places));
    }

    fn print_status(&self, out: &mut dyn Write) {
        let places = self.decimal_places;
        let _ = writeln!(out, "Target: {}", Fixed::new(self.target, places));

        if let Some(pid) = self.pid.as_deref() {
            let _ = writeln!(out, "PID Controller:");
            let _ = writeln!(out, "  P:     {}", Fixed::new(pid.p(), places));
            let _ = writeln!(out, "  I:     {}", Fixed::new(pid.i(), places));
            let _ = writeln!(out, "  D:     {}", Fixed::new(pid.d(), places));
            let _ = writeln!(out, "  Ramp:  {}", Fixed::new(pid.output_ramp(), places));
            let _ = writeln!(out, "  Limit: {}", Fixed::new(pid.output_limit(), places));
        }

        if let Some(lpf) = self.lpf.as_deref() {
            let _ = writeln!(out, "LowPass Filter:");
            let _ = writeln!(out, "  Tf: {} s", Fixed::new(lpf.time_constant(), places));
        }

        if let Some(encoder) = self.encoder {
            self.encoder_report(encoder, out);
        }
    }

    fn toggle_verbose(&mut self, out: &mut dyn Write) {
        self.verbose = !self.verbose;
        let _ = writeln!(out, "Verbose: {}", if self.verbose { "ON" } else { "OFF" });
    }

    fn scan_commands(&self, out: &mut dyn Write) {
        let groups = [
            (Gate::Pid, "PID Controller:", self.pid.is_some()),
            (Gate::Filter, "LowPass Filter:", self.lpf.is_some()),
            (Gate::Encoder, "Encoder:", self.encoder.is_some()),
        ];

        for (gate, header, present) in groups {
            if !present {
                continue;
            }
            let _ = writeln!(out, "{header}");
            for builtin in builtins_with_gate(gate) {
                let _ = writeln!(out, "  {} - {}", builtin.id, builtin.brief);
            }
        }

        let _ = writeln!(out, "General:");
        for builtin in builtins_with_gate(Gate::Always) {
            let _ = writeln!(out, "  {} - {}", builtin.id, builtin.brief);
        }

        if !self.registry.is_empty() {
            let _ = writeln!(out, "Custom:");
            for (id, label) in self.registry.iter() {
                let _ = writeln!(out, "  {} - {}", id, label.unwrap_or("(no description)"));
            }
        }
    }
}

impl Default for Commander<'_> {
    fn default() -> Self {
        Self::new()
    }
}
