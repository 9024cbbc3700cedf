//! Range mapping with extrapolation policies
//!
//! `interpolate` maps `x` from an input range onto an output range. What
//! happens outside the input range is decided per side by an
//! [`Extrapolate`] policy, and an optional [`Easing`] shapes progress inside
//! the range.

use serde::{Deserialize, Serialize};

use crate::easing::Easing;
use crate::error::{MotionError, Result};

/// Behavior outside the input range
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Extrapolate {
    /// Hold the boundary output value
    #[default]
    Clamp,
    /// Keep following the line through the range
    Extend,
    /// Return the input unchanged
    Identity,
}

/// Options for [`interpolate`] and [`interpolate_segments`]
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct InterpolateOptions {
    pub extrapolate_left: Extrapolate,
    pub extrapolate_right: Extrapolate,
    pub easing: Option<Easing>,
}

impl InterpolateOptions {
    /// Clamp on both sides, no easing
    pub fn clamp() -> Self {
        Self::default()
    }

    /// Extend on both sides, no easing
    pub fn extend() -> Self {
        Self {
            extrapolate_left: Extrapolate::Extend,
            extrapolate_right: Extrapolate::Extend,
            easing: None,
        }
    }

    /// Builder: set the left policy
    pub fn left(mut self, policy: Extrapolate) -> Self {
        self.extrapolate_left = policy;
        self
    }

    /// Builder: set the right policy
    pub fn right(mut self, policy: Extrapolate) -> Self {
        self.extrapolate_right = policy;
        self
    }

    /// Builder: set the easing curve
    pub fn easing(mut self, easing: Easing) -> Self {
        self.easing = Some(easing);
        self
    }
}

/// Map `x` from `[x0, x1]` onto `[y0, y1]`.
///
/// Fails with [`MotionError::DegenerateRange`] when `x0 == x1`.
pub fn interpolate(
    x: f64,
    input: [f64; 2],
    output: [f64; 2],
    options: InterpolateOptions,
) -> Result<f64> {
    let [x0, x1] = input;
    let [y0, y1] = output;

    if x0 == x1 {
        return Err(MotionError::DegenerateRange { start: x0 });
    }

    let mut t = (x - x0) / (x1 - x0);

    if t < 0.0 {
        match options.extrapolate_left {
            Extrapolate::Clamp => t = 0.0,
            Extrapolate::Extend => return Ok(y0 + (y1 - y0) * t),
            Extrapolate::Identity => return Ok(x),
        }
    } else if t > 1.0 {
        match options.extrapolate_right {
            Extrapolate::Clamp => t = 1.0,
            Extrapolate::Extend => return Ok(y0 + (y1 - y0) * t),
            Extrapolate::Identity => return Ok(x),
        }
    }

    let eased = match options.easing {
        Some(easing) => easing.apply(t),
        None => t,
    };

    Ok(y0 + (y1 - y0) * eased)
}

/// [`interpolate`], recovering a degenerate range by holding `y0`
pub fn interpolate_or_start(
    x: f64,
    input: [f64; 2],
    output: [f64; 2],
    options: InterpolateOptions,
) -> f64 {
    interpolate(x, input, output, options).unwrap_or_else(|err| {
        tracing::trace!(%err, "holding start-of-range value");
        output[0]
    })
}

/// Piecewise interpolation across ordered breakpoints.
///
/// `inputs` must be strictly ascending and the same length as `outputs`.
/// Values outside the breakpoints use the outermost segment together with
/// the options' extrapolation policy.
pub fn interpolate_segments(
    x: f64,
    inputs: &[f64],
    outputs: &[f64],
    options: InterpolateOptions,
) -> Result<f64> {
    if inputs.len() != outputs.len() {
        return Err(MotionError::MismatchedRanges {
            input: inputs.len(),
            output: outputs.len(),
        });
    }
    if inputs.len() < 2 {
        return Err(MotionError::TooFewPoints(inputs.len()));
    }
    if let Some(index) = inputs.windows(2).position(|pair| pair[0] >= pair[1]) {
        return Err(MotionError::NotAscending { index: index + 1 });
    }

    // Index of the segment's left breakpoint; the outer segments also cover
    // everything beyond the first/last breakpoint
    let last_segment = inputs.len() - 2;
    let segment = inputs[1..=last_segment]
        .iter()
        .position(|&bound| x < bound)
        .unwrap_or(last_segment);

    // Inner boundaries never extrapolate, only the outermost sides do
    let mut segment_options = options;
    if segment > 0 {
        segment_options.extrapolate_left = Extrapolate::Clamp;
    }
    if segment < last_segment {
        segment_options.extrapolate_right = Extrapolate::Clamp;
    }

    interpolate(
        x,
        [inputs[segment], inputs[segment + 1]],
        [outputs[segment], outputs[segment + 1]],
        segment_options,
    )
}
