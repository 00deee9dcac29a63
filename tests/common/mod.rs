//! Shared mocks for commander integration tests
#![allow(dead_code)]

use std::collections::VecDeque;

use foc_commander::{Commander, Encoder, LowPassFilter, Pid, Poll, Transport};

/// PID stand-in with the tuning values from a typical bench setup.
pub struct MockPid {
    pub p: f32,
    pub i: f32,
    pub d: f32,
    pub ramp: f32,
    pub limit: f32,
}

impl Default for MockPid {
    fn default() -> Self {
        Self {
            p: 1.0,
            i: 0.5,
            d: 0.01,
            ramp: 100.0,
            limit: 12.0,
        }
    }
}

impl Pid for MockPid {
    fn p(&self) -> f32 {
        self.p
    }
    fn set_p(&mut self, value: f32) {
        self.p = value;
    }
    fn i(&self) -> f32 {
        self.i
    }
    fn set_i(&mut self, value: f32) {
        self.i = value;
    }
    fn d(&self) -> f32 {
        self.d
    }
    fn set_d(&mut self, value: f32) {
        self.d = value;
    }
    fn output_ramp(&self) -> f32 {
        self.ramp
    }
    fn set_output_ramp(&mut self, value: f32) {
        self.ramp = value;
    }
    fn output_limit(&self) -> f32 {
        self.limit
    }
    fn set_output_limit(&mut self, value: f32) {
        self.limit = value;
    }
}

pub struct MockLpf {
    pub tf: f32,
}

impl Default for MockLpf {
    fn default() -> Self {
        Self { tf: 0.01 }
    }
}

impl LowPassFilter for MockLpf {
    fn time_constant(&self) -> f32 {
        self.tf
    }
    fn set_time_constant(&mut self, value: f32) {
        self.tf = value;
    }
}

pub struct MockEncoder {
    pub angle: f32,
    pub velocity: f32,
    pub position: i32,
}

impl Default for MockEncoder {
    fn default() -> Self {
        Self {
            angle: 3.14159,
            velocity: 0.5,
            position: 1234,
        }
    }
}

impl Encoder for MockEncoder {
    fn angle(&self) -> f32 {
        self.angle
    }
    fn velocity(&self) -> f32 {
        self.velocity
    }
    fn position(&self) -> i32 {
        self.position
    }
}

/// Scripted byte source. Reports availability while bytes (or injected
/// failures) remain, hands out one byte per read.
pub struct ScriptTransport {
    bytes: VecDeque<u8>,
    pub fail_reads: usize,
}

impl ScriptTransport {
    pub fn new(script: &[u8]) -> Self {
        Self {
            bytes: script.iter().copied().collect(),
            fail_reads: 0,
        }
    }

    pub fn push_str(&mut self, s: &str) {
        self.bytes.extend(s.bytes());
    }

    pub fn push_byte(&mut self, byte: u8) {
        self.bytes.push_back(byte);
    }
}

impl Transport for ScriptTransport {
    type Error = &'static str;

    fn bytes_available(&self) -> bool {
        self.fail_reads > 0 || !self.bytes.is_empty()
    }

    fn read_byte(&mut self) -> Result<Option<u8>, Self::Error> {
        if self.fail_reads > 0 {
            self.fail_reads -= 1;
            return Err("read failed");
        }
        Ok(self.bytes.pop_front())
    }
}

/// Tick the commander until the transport goes idle, collecting the polls.
pub fn run_until_idle(
    commander: &mut Commander<'_>,
    transport: &mut ScriptTransport,
    out: &mut String,
) -> Vec<Poll> {
    let mut polls = Vec::new();
    loop {
        match commander.run(transport, out) {
            Poll::Idle => break,
            poll => polls.push(poll),
        }
    }
    polls
}
