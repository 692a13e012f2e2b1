//! End-to-end tests for the transformation pipeline.
//!
//! Exercises the full chain (parse, bounds, normalize, relative) the
//! way a dataset-preparation caller would drive it.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use approx::assert_relative_eq;
use gcode_transform::{GcodeProgram, ScalingPolicy, TransformError};
use gcode_types::Axis;

/// A small two-layer square toolpath with setup commands around it.
const SQUARE: &str = "\
M104 S205 ; heat
G28 ; home
G1 Z0.2 F1200
G1 X0 Y0 Z0.2
G1 X20 Y0 Z0.2 E0.8
G1 X20 Y20 Z0.2 E1.6
G1 X0 Y20 Z0.2 E2.4
G1 X0 Y0 Z0.2 E3.2
G1 Z0.4
G1 X20 Y0 Z0.4 E4.0
M84";

#[test]
fn full_chain_produces_only_relative_moves() {
    let program = GcodeProgram::parse_str(SQUARE).unwrap();
    let relative = program
        .normalized(ScalingPolicy::KeepAspect)
        .unwrap()
        .to_relative();

    assert!(!relative.is_empty());
    assert!(relative.commands().iter().all(|c| c.is_linear_move()));
    for command in relative.commands() {
        for (_, value) in command.params.iter() {
            assert!(value.is_finite());
        }
    }
}

#[test]
fn normalization_preserves_aspect_through_the_chain() {
    let program = GcodeProgram::parse_str(SQUARE).unwrap();
    let before = program.bounds();
    let normalized = program.normalized(ScalingPolicy::KeepAspect).unwrap();
    let after = normalized.bounds();

    let ratio_before = before.range(Axis::X) / before.range(Axis::Z);
    let ratio_after = after.range(Axis::X) / after.range(Axis::Z);
    assert_relative_eq!(ratio_before, ratio_after, epsilon = 1e-9);
}

#[test]
fn two_chains_from_one_origin_are_independent() {
    let program = GcodeProgram::parse_str(SQUARE).unwrap();

    let chain_a = program.normalized(ScalingPolicy::KeepAspect).unwrap();
    let chain_b = program.normalized(ScalingPolicy::IndependentAxes).unwrap();

    assert_ne!(chain_a.commands(), chain_b.commands());
    // Both chains reset back to the same initial sequence.
    assert_eq!(chain_a.reset().commands(), program.commands());
    assert_eq!(chain_b.reset().commands(), program.commands());
}

#[test]
fn flat_single_layer_path_fails_normalization() {
    // Every move sits at the same Z, so the Z extent is degenerate.
    let program =
        GcodeProgram::parse_str("G1 X0 Y0 Z0.2\nG1 X10 Y0 Z0.2\nG1 X10 Y10 Z0.2").unwrap();

    let err = program.normalized(ScalingPolicy::KeepAspect).unwrap_err();
    assert!(matches!(
        err,
        TransformError::DegenerateExtent { axis: Axis::Z, .. }
    ));
}

#[test]
fn programs_are_send_and_sync() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<GcodeProgram>();
}
