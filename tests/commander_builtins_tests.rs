//! Built-in handler tests: get/set template, status, verbose, scan

mod common;

use common::{MockEncoder, MockLpf, MockPid};
use foc_commander::{CommandError, Commander};

#[test]
fn test_set_pid_p_with_verbose_echo() {
    let mut pid = MockPid::default();
    let mut out = String::new();
    {
        let mut commander = Commander::new().with_pid(&mut pid);
        commander.process_command("P2.0", &mut out).unwrap();
    }

    assert_eq!(pid.p, 2.0);
    assert!(out.contains("P gain: 2.000"), "got: {out}");
}

#[test]
fn test_set_is_silent_when_not_verbose() {
    let mut pid = MockPid::default();
    let mut out = String::new();
    {
        let mut commander = Commander::new().with_pid(&mut pid).verbose(false);
        commander.process_command("P2.0", &mut out).unwrap();
    }

    assert_eq!(pid.p, 2.0);
    assert!(out.is_empty());
}

#[test]
fn test_get_always_prints_even_when_not_verbose() {
    let mut pid = MockPid::default();
    let mut commander = Commander::new().with_pid(&mut pid).verbose(false);

    let mut out = String::new();
    commander.process_command("P", &mut out).unwrap();

    assert_eq!(out, "P: 1.000\n");
}

#[test]
fn test_invalid_number_leaves_field_unchanged() {
    let mut pid = MockPid::default();
    {
        let mut commander = Commander::new().with_pid(&mut pid);
        let mut out = String::new();
        let result = commander.process_command("Pabc", &mut out);
        assert_eq!(result, Err(CommandError::InvalidNumber));
    }
    assert_eq!(pid.p, 1.0);
}

#[test]
fn test_ramp_and_limit_labels() {
    let mut pid = MockPid::default();
    let mut out = String::new();
    {
        let mut commander = Commander::new().with_pid(&mut pid);
        commander.process_command("R50", &mut out).unwrap();
        commander.process_command("L10", &mut out).unwrap();
        commander.process_command("R", &mut out).unwrap();
        commander.process_command("L", &mut out).unwrap();
    }

    assert!(out.contains("Output ramp: 50.000"));
    assert!(out.contains("Output limit: 10.000"));
    assert!(out.contains("Ramp: 50.000"));
    assert!(out.contains("Limit: 10.000"));
    assert_eq!(pid.ramp, 50.0);
    assert_eq!(pid.limit, 10.0);
}

#[test]
fn test_filter_unit_on_set_echo_only() {
    let mut lpf = MockLpf::default();
    {
        let mut commander = Commander::new().with_low_pass_filter(&mut lpf);

        let mut set_out = String::new();
        commander.process_command("F0.02", &mut set_out).unwrap();
        assert_eq!(set_out, "Filter Tf: 0.020 s\n");

        let mut get_out = String::new();
        commander.process_command("F", &mut get_out).unwrap();
        assert_eq!(get_out, "Tf: 0.020\n");
    }
    assert_eq!(lpf.tf, 0.02);
}

#[test]
fn test_target_round_trip_with_two_decimals() {
    let mut commander = Commander::new().decimal_places(2);

    let mut out = String::new();
    commander.process_command("T3.14159", &mut out).unwrap();

    let mut out = String::new();
    commander.process_command("T", &mut out).unwrap();
    assert_eq!(out, "Target: 3.14\n");
}

#[test]
fn test_encoder_report() {
    let encoder = MockEncoder::default();
    let mut commander = Commander::new().with_encoder(&encoder);

    let mut out = String::new();
    commander.process_command("E", &mut out).unwrap();

    assert!(out.starts_with("Encoder:\n"));
    assert!(out.contains("Position: 1234 counts"));
    assert!(out.contains("Angle:    3.142 rad"));
    assert!(out.contains("Velocity: 0.500 rad/s"));
}

#[test]
fn test_encoder_ignores_value_string() {
    let encoder = MockEncoder::default();
    let mut commander = Commander::new().with_encoder(&encoder);

    let mut out = String::new();
    commander.process_command("E99", &mut out).unwrap();
    assert!(out.contains("Position: 1234 counts"));
}

#[test]
fn test_status_with_no_collaborators_is_target_only() {
    let mut commander = Commander::new();

    let mut out = String::new();
    commander.process_command("?", &mut out).unwrap();

    assert_eq!(out, "Target: 0.000\n");
}

#[test]
fn test_status_groups_present_collaborators() {
    let mut pid = MockPid::default();
    let mut lpf = MockLpf::default();
    let encoder = MockEncoder::default();
    let mut commander = Commander::new()
        .with_pid(&mut pid)
        .with_low_pass_filter(&mut lpf)
        .with_encoder(&encoder);

    let mut out = String::new();
    commander.process_command("?", &mut out).unwrap();

    assert!(out.starts_with("Target: 0.000\n"));
    assert!(out.contains("PID Controller:"));
    assert!(out.contains("  P:     1.000"));
    assert!(out.contains("  Limit: 12.000"));
    assert!(out.contains("LowPass Filter:"));
    assert!(out.contains("  Tf: 0.010 s"));
    assert!(out.contains("Encoder:"));
}

#[test]
fn test_verbose_toggle_reports_and_applies() {
    let mut commander = Commander::new();
    assert!(commander.is_verbose());

    let mut out = String::new();
    commander.process_command("V", &mut out).unwrap();
    assert_eq!(out, "Verbose: OFF\n");
    assert!(!commander.is_verbose());

    // Value string is ignored
    let mut out = String::new();
    commander.process_command("V123", &mut out).unwrap();
    assert_eq!(out, "Verbose: ON\n");
    assert!(commander.is_verbose());
}

#[test]
fn test_scan_lists_only_active_groups() {
    let mut pid = MockPid::default();
    let mut commander = Commander::new().with_pid(&mut pid);

    let mut out = String::new();
    commander.process_command("@", &mut out).unwrap();

    assert!(out.contains("PID Controller:"));
    assert!(out.contains("  P - Proportional gain"));
    assert!(out.contains("  L - Output limit"));
    assert!(!out.contains("LowPass Filter:"));
    assert!(!out.contains("  E - "));
    assert!(out.contains("General:"));
    assert!(out.contains("  T - Target value"));
    assert!(out.contains("  @ - Scan commands"));
}

#[test]
fn test_scan_lists_custom_commands_with_label_fallback() {
    let mut commander = Commander::new();
    commander.register("M", |_, _| Ok(()), Some("Motor enable")).unwrap();
    commander.register("X", |_, _| Ok(()), None).unwrap();

    let mut out = String::new();
    commander.process_command("@", &mut out).unwrap();

    assert!(out.contains("Custom:"));
    assert!(out.contains("  M - Motor enable"));
    assert!(out.contains("  X - (no description)"));
}
