//! Coordinate normalization of positional parameters.

use gcode_types::{Axis, Command, ExtentBounds, Parameters};
use tracing::debug;

use crate::bounds::move_bounds;
use crate::error::{TransformError, TransformResult};

/// How positional parameters are rescaled during normalization.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ScalingPolicy {
    /// One uniform scale factor across all axes, preserving the relative
    /// proportions between them: `aspect = min over axes of 1 / (max − min)`,
    /// then `v ↦ aspect * (v + min_axis)` per axis.
    #[default]
    KeepAspect,

    /// Each axis rescales independently: `v ↦ (v + min) / (max − min)`.
    ///
    /// The offset adds `min` rather than subtracting it, so output values
    /// are not confined to `[0, 1]` in general. This is intentional; the
    /// formula is kept exactly as the established behavior.
    IndependentAxes,
}

/// Rescale every `X`/`Y`/`Z` parameter in a sequence.
///
/// The bounding extent is computed over the *input* sequence, from
/// linear moves only, then the policy's mapping is applied to the
/// positional parameters of **every** command. All other parameters and
/// command names pass through unchanged; commands without positional
/// parameters pass through structurally unchanged. A new sequence is
/// produced; the input is not modified.
///
/// # Errors
///
/// Every axis must have a usable extent before any mapping is applied:
///
/// - [`TransformError::UnsetExtent`] if an axis never appears in a
///   linear move.
/// - [`TransformError::DegenerateExtent`] if an axis's extent has zero
///   width (all observed values equal).
///
/// # Example
///
/// ```
/// use gcode_parse::parse_str;
/// use gcode_transform::{normalize_moves, ScalingPolicy};
///
/// let commands = parse_str("G1 X0 Y0 Z0\nG1 X10 Y20 Z5 E1").unwrap();
/// let scaled = normalize_moves(&commands, ScalingPolicy::KeepAspect).unwrap();
///
/// // E is not positional and passes through unchanged.
/// assert_eq!(scaled[1].params.get('E'), Some(1.0));
/// ```
pub fn normalize_moves(
    commands: &[Command],
    policy: ScalingPolicy,
) -> TransformResult<Vec<Command>> {
    let bounds = move_bounds(commands);
    check_extents(&bounds)?;

    let factors = scale_factors(&bounds, policy);
    debug!(?policy, ?factors, "Normalizing positional parameters");

    let output = commands
        .iter()
        .map(|command| {
            let params: Parameters = command
                .params
                .iter()
                .map(|(letter, value)| {
                    let mapped = Axis::ALL
                        .iter()
                        .find(|axis| axis.letter() == letter)
                        .map_or(value, |&axis| {
                            factors[axis.index()] * (value + bounds.min(axis))
                        });
                    (letter, mapped)
                })
                .collect();
            Command {
                name: command.name.clone(),
                params,
            }
        })
        .collect();
    Ok(output)
}

/// Per-axis multipliers for the policy's `factor * (v + min)` mapping.
fn scale_factors(bounds: &ExtentBounds, policy: ScalingPolicy) -> [f64; 3] {
    match policy {
        ScalingPolicy::IndependentAxes => {
            let mut factors = [0.0; 3];
            for axis in Axis::ALL {
                factors[axis.index()] = 1.0 / bounds.range(axis);
            }
            factors
        }
        ScalingPolicy::KeepAspect => {
            let aspect = Axis::ALL
                .iter()
                .map(|&axis| 1.0 / bounds.range(axis))
                .fold(f64::INFINITY, f64::min);
            [aspect; 3]
        }
    }
}

/// Require a set, non-degenerate extent on all three axes.
fn check_extents(bounds: &ExtentBounds) -> TransformResult<()> {
    for axis in Axis::ALL {
        if bounds.is_unset(axis) {
            return Err(TransformError::UnsetExtent { axis });
        }
        if bounds.is_degenerate(axis) {
            return Err(TransformError::DegenerateExtent {
                axis,
                value: bounds.min(axis),
            });
        }
    }
    Ok(())
}
