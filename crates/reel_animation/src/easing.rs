//! Easing functions for animations
//!
//! Every curve maps normalized progress in `[0, 1]` onto eased progress with
//! exact endpoints: `apply(0.0) == 0.0` and `apply(1.0) == 1.0`. Input is
//! clamped first, so values nudged outside the unit interval by float error
//! never diverge.

use std::f64::consts::PI;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Period of the elastic curve
const ELASTIC_PERIOD: f64 = 0.3;

/// Easing function type
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Easing {
    Linear,
    /// CSS `ease`, i.e. `cubic-bezier(0.25, 0.1, 0.25, 1.0)`
    Ease,
    EaseIn,
    EaseOut,
    #[default]
    EaseInOut,
    Cubic,
    Bounce,
    Elastic,
    CubicBezier(f64, f64, f64, f64),
}

impl Easing {
    /// Every named curve, in catalogue order
    pub const NAMED: [Easing; 8] = [
        Easing::Linear,
        Easing::Ease,
        Easing::EaseIn,
        Easing::EaseOut,
        Easing::EaseInOut,
        Easing::Cubic,
        Easing::Bounce,
        Easing::Elastic,
    ];

    /// Apply the easing function to a progress value (0.0 to 1.0)
    pub fn apply(&self, t: f64) -> f64 {
        if t.is_nan() || t <= 0.0 {
            return 0.0;
        }
        if t >= 1.0 {
            return 1.0;
        }

        match *self {
            Easing::Linear => t,
            Easing::Ease => cubic_bezier_ease(t, 0.25, 0.1, 0.25, 1.0),
            Easing::EaseIn => t * t,
            Easing::EaseOut => 1.0 - (1.0 - t) * (1.0 - t),
            Easing::EaseInOut => {
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    1.0 - (-2.0 * t + 2.0).powi(2) / 2.0
                }
            }
            Easing::Cubic => t * t * t,
            Easing::Bounce => bounce_out(t),
            Easing::Elastic => {
                let p = ELASTIC_PERIOD;
                2f64.powf(-10.0 * t) * ((t - p / 4.0) * (2.0 * PI) / p).sin() + 1.0
            }
            Easing::CubicBezier(x1, y1, x2, y2) => cubic_bezier_ease(t, x1, y1, x2, y2),
        }
    }

    /// Parse an easing name.
    ///
    /// Accepts the camelCase catalogue names plus kebab/snake spellings
    /// (`ease-in-out`, `ease_in_out`) and `cubic-bezier(x1, y1, x2, y2)`.
    pub fn parse(name: &str) -> Option<Self> {
        let trimmed = name.trim();
        if let Some(args) = trimmed
            .strip_prefix("cubic-bezier(")
            .or_else(|| trimmed.strip_prefix("cubicBezier("))
        {
            return parse_bezier_args(args.strip_suffix(')')?);
        }

        match camel_case(trimmed).as_str() {
            "linear" => Some(Easing::Linear),
            "ease" => Some(Easing::Ease),
            "easeIn" => Some(Easing::EaseIn),
            "easeOut" => Some(Easing::EaseOut),
            "easeInOut" => Some(Easing::EaseInOut),
            "cubic" => Some(Easing::Cubic),
            "bounce" => Some(Easing::Bounce),
            "elastic" => Some(Easing::Elastic),
            _ => None,
        }
    }

    /// Parse an easing name, falling back to `easeInOut` for unknown names
    pub fn from_name(name: &str) -> Self {
        Self::parse(name).unwrap_or_else(|| {
            tracing::debug!(easing = name, "unknown easing, using easeInOut");
            Easing::EaseInOut
        })
    }
}

/// Free-function form of [`Easing::apply`]
pub fn ease(kind: Easing, t: f64) -> f64 {
    kind.apply(t)
}

impl fmt::Display for Easing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Easing::Linear => f.write_str("linear"),
            Easing::Ease => f.write_str("ease"),
            Easing::EaseIn => f.write_str("easeIn"),
            Easing::EaseOut => f.write_str("easeOut"),
            Easing::EaseInOut => f.write_str("easeInOut"),
            Easing::Cubic => f.write_str("cubic"),
            Easing::Bounce => f.write_str("bounce"),
            Easing::Elastic => f.write_str("elastic"),
            Easing::CubicBezier(x1, y1, x2, y2) => {
                write!(f, "cubic-bezier({x1}, {y1}, {x2}, {y2})")
            }
        }
    }
}

impl From<String> for Easing {
    fn from(name: String) -> Self {
        Easing::from_name(&name)
    }
}

impl From<Easing> for String {
    fn from(easing: Easing) -> Self {
        easing.to_string()
    }
}

/// `ease-in-out` and `ease_in_out` become `easeInOut`; other case is kept
fn camel_case(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    let mut upper = false;
    for c in name.chars() {
        if c == '-' || c == '_' {
            upper = true;
        } else if upper {
            out.push(c.to_ascii_uppercase());
            upper = false;
        } else {
            out.push(c);
        }
    }
    out
}

fn parse_bezier_args(args: &str) -> Option<Easing> {
    let values: Vec<f64> = args
        .split(',')
        .map(|part| part.trim().parse::<f64>().ok())
        .collect::<Option<_>>()?;

    match values.as_slice() {
        // x control points must stay inside the unit interval or x(p) stops
        // being a function of time
        &[x1, y1, x2, y2]
            if (0.0..=1.0).contains(&x1)
                && (0.0..=1.0).contains(&x2)
                && y1.is_finite()
                && y2.is_finite() =>
        {
            Some(Easing::CubicBezier(x1, y1, x2, y2))
        }
        _ => None,
    }
}

/// Penner out-bounce: four parabolic segments of decreasing amplitude
fn bounce_out(t: f64) -> f64 {
    const N: f64 = 7.5625;
    const D: f64 = 2.75;

    if t < 1.0 / D {
        N * t * t
    } else if t < 2.0 / D {
        let t = t - 1.5 / D;
        N * t * t + 0.75
    } else if t < 2.5 / D {
        let t = t - 2.25 / D;
        N * t * t + 0.9375
    } else {
        let t = t - 2.625 / D;
        N * t * t + 0.984375
    }
}

/// Cubic bezier easing calculation (matches CSS spec / browser implementations).
///
/// Uses Newton-Raphson with binary-search fallback for robustness.
fn cubic_bezier_ease(x: f64, x1: f64, y1: f64, x2: f64, y2: f64) -> f64 {
    // Solve for parameter `p` where bezier_x(p) == x using Newton-Raphson,
    // falling back to binary search if the slope is too flat.
    let mut p = x;
    for _ in 0..8 {
        let err = bezier_sample(p, x1, x2) - x;
        if err.abs() < 1e-7 {
            return bezier_sample(p, y1, y2);
        }
        let slope = bezier_slope(p, x1, x2);
        if slope.abs() < 1e-7 {
            break;
        }
        p -= err / slope;
    }

    // Binary search fallback (always converges)
    let mut lo = 0.0_f64;
    let mut hi = 1.0_f64;
    p = x;
    for _ in 0..30 {
        let val = bezier_sample(p, x1, x2);
        if (val - x).abs() < 1e-7 {
            break;
        }
        if val < x {
            lo = p;
        } else {
            hi = p;
        }
        p = (lo + hi) * 0.5;
    }

    bezier_sample(p, y1, y2)
}

/// Evaluate cubic bezier at parameter t: B(t) = 3(1-t)²t·p1 + 3(1-t)t²·p2 + t³
#[inline]
fn bezier_sample(t: f64, p1: f64, p2: f64) -> f64 {
    let a = 1.0 - 3.0 * p2 + 3.0 * p1;
    let b = 3.0 * p2 - 6.0 * p1;
    let c = 3.0 * p1;
    ((a * t + b) * t + c) * t
}

/// Derivative of cubic bezier: B'(t) = 3(1-t)²·p1 + 6(1-t)t·(p2-p1) + 3t²·(1-p2)
#[inline]
fn bezier_slope(t: f64, p1: f64, p2: f64) -> f64 {
    let a = 1.0 - 3.0 * p2 + 3.0 * p1;
    let b = 3.0 * p2 - 6.0 * p1;
    let c = 3.0 * p1;
    (3.0 * a * t + 2.0 * b) * t + c
}
