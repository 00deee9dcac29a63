//! Capability contracts for the motion-control objects the commander tunes
//!
//! The commander reads and writes a small set of named scalars on external
//! controller objects; the control math lives elsewhere. Each trait is one
//! capability set, and each is optional: a commander built without a
//! collaborator simply has the matching commands inactive.
//!
//! Written values are forwarded as-is. Range or sanity checks, if wanted,
//! belong to the implementing controller.

/// PID controller tuning surface: the five scalars reachable from the
/// `P`, `I`, `D`, `R` and `L` commands.
pub trait Pid {
    /// Proportional gain.
    fn p(&self) -> f32;
    fn set_p(&mut self, value: f32);

    /// Integral gain.
    fn i(&self) -> f32;
    fn set_i(&mut self, value: f32);

    /// Derivative gain.
    fn d(&self) -> f32;
    fn set_d(&mut self, value: f32);

    /// Maximum output change per second.
    fn output_ramp(&self) -> f32;
    fn set_output_ramp(&mut self, value: f32);

    /// Output saturation limit.
    fn output_limit(&self) -> f32;
    fn set_output_limit(&mut self, value: f32);
}

/// Low-pass filter tuning surface, reachable from the `F` command.
pub trait LowPassFilter {
    /// Filter time constant Tf in seconds.
    fn time_constant(&self) -> f32;
    fn set_time_constant(&mut self, value: f32);
}

/// Read-only encoder state, reachable from the `E` command and the status
/// dump.
pub trait Encoder {
    /// Shaft angle in radians.
    fn angle(&self) -> f32;

    /// Angular velocity in radians per second.
    fn velocity(&self) -> f32;

    /// Raw position counter in encoder counts.
    fn position(&self) -> i32;
}
