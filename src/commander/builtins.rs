//! Built-in command table
//!
//! The fixed get/set commands over the collaborator scalars, plus the meta
//! commands. The descriptor table drives the `@` listing; dispatch itself
//! is a match in the commander so gating on collaborator presence stays
//! explicit.

use crate::control::Pid;

use super::error::CommandError;

/// Which collaborator a built-in needs to be active.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Gate {
    Pid,
    Filter,
    Encoder,
    Always,
}

/// Built-in command descriptor
pub struct Builtin {
    pub id: char,
    pub brief: &'static str,
    pub gate: Gate,
}

/// All built-in commands, in listing order.
pub static BUILTINS: &[Builtin] = &[
    Builtin { id: 'P', brief: "Proportional gain", gate: Gate::Pid },
    Builtin { id: 'I', brief: "Integral gain", gate: Gate::Pid },
    Builtin { id: 'D', brief: "Derivative gain", gate: Gate::Pid },
    Builtin { id: 'R', brief: "Output ramp", gate: Gate::Pid },
    Builtin { id: 'L', brief: "Output limit", gate: Gate::Pid },
    Builtin { id: 'F', brief: "Time constant (Tf)", gate: Gate::Filter },
    Builtin { id: 'E', brief: "Status and readings", gate: Gate::Encoder },
    Builtin { id: 'T', brief: "Target value", gate: Gate::Always },
    Builtin { id: '?', brief: "Print status", gate: Gate::Always },
    Builtin { id: 'V', brief: "Toggle verbose mode", gate: Gate::Always },
    Builtin { id: '@', brief: "Scan commands (this help)", gate: Gate::Always },
];

/// Built-ins with the given gate, in listing order.
pub fn builtins_with_gate(gate: Gate) -> impl Iterator<Item = &'static Builtin> {
    BUILTINS.iter().filter(move |b| b.gate == gate)
}

/// The five PID scalars addressable through `P`, `I`, `D`, `R`, `L`.
///
/// Carries the accessor indirection plus the display labels, so the
/// commander has one handler for all five instead of five copies of the
/// get/set template.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PidField {
    P,
    I,
    D,
    Ramp,
    Limit,
}

impl PidField {
    /// Short label used when reading the field back.
    pub fn short(self) -> &'static str {
        match self {
            PidField::P => "P",
            PidField::I => "I",
            PidField::D => "D",
            PidField::Ramp => "Ramp",
            PidField::Limit => "Limit",
        }
    }

    /// Label used in the verbose set confirmation.
    pub fn label(self) -> &'static str {
        match self {
            PidField::P => "P gain",
            PidField::I => "I gain",
            PidField::D => "D gain",
            PidField::Ramp => "Output ramp",
            PidField::Limit => "Output limit",
        }
    }

    /// Read the field from the controller.
    pub fn get(self, pid: &dyn Pid) -> f32 {
        match self {
            PidField::P => pid.p(),
            PidField::I => pid.i(),
            PidField::D => pid.d(),
            PidField::Ramp => pid.output_ramp(),
            PidField::Limit => pid.output_limit(),
        }
    }

    /// Write the field on the controller.
    pub fn set(self, pid: &mut dyn Pid, value: f32) {
        match self {
            PidField::P => pid.set_p(value),
            PidField::I => pid.set_i(value),
            PidField::D => pid.set_d(value),
            PidField::Ramp => pid.set_output_ramp(value),
            PidField::Limit => pid.set_output_limit(value),
        }
    }
}

/// Get/set split shared by every scalar built-in: an empty value string is
/// a read, anything else must parse as a float for a write.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ScalarOp {
    Get,
    Set(f32),
}

impl ScalarOp {
    /// Classify a trimmed value string.
    pub fn parse(value: &str) -> Result<Self, CommandError> {
        if value.is_empty() {
            return Ok(ScalarOp::Get);
        }
        value
            .parse::<f32>()
            .map(ScalarOp::Set)
            .map_err(|_| CommandError::InvalidNumber)
    }
}
