//! Canonical animation configuration
//!
//! [`AnimationConfig`] is the normalized, immutable description of one
//! animation: which family function to run, its timing, its easing, and the
//! open `custom` bag of family-specific parameters.

use std::fmt;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::easing::Easing;
use crate::spring::SpringConfig;

/// Duration substituted when none (or a non-positive one) is given
pub const DEFAULT_DURATION: u32 = 30;

/// Groups of related animation functions
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Family {
    None,
    Fade,
    Slide,
    Scale,
    Reveal,
    Spring,
    Perspective,
    Effect,
    Typography,
}

impl Family {
    pub fn name(self) -> &'static str {
        match self {
            Family::None => "none",
            Family::Fade => "fade",
            Family::Slide => "slide",
            Family::Scale => "scale",
            Family::Reveal => "reveal",
            Family::Spring => "spring",
            Family::Perspective => "perspective",
            Family::Effect => "effect",
            Family::Typography => "typography",
        }
    }
}

macro_rules! animation_types {
    ($($variant:ident => $name:literal, $family:ident;)*) => {
        /// Every animation the registry knows, plus `None`
        #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(from = "String", into = "String")]
        pub enum AnimationType {
            #[default]
            None,
            $($variant,)*
        }

        impl AnimationType {
            /// All animation types except `None`, in catalogue order
            pub const ALL: &'static [AnimationType] = &[$(AnimationType::$variant,)*];

            /// Catalogue name (camelCase)
            pub fn name(self) -> &'static str {
                match self {
                    AnimationType::None => "none",
                    $(AnimationType::$variant => $name,)*
                }
            }

            pub fn family(self) -> Family {
                match self {
                    AnimationType::None => Family::None,
                    $(AnimationType::$variant => Family::$family,)*
                }
            }
        }
    };
}

animation_types! {
    FadeIn => "fadeIn", Fade;
    FadeOut => "fadeOut", Fade;

    SlideInLeft => "slideInLeft", Slide;
    SlideInRight => "slideInRight", Slide;
    SlideInTop => "slideInTop", Slide;
    SlideInBottom => "slideInBottom", Slide;
    SlideOutLeft => "slideOutLeft", Slide;
    SlideOutRight => "slideOutRight", Slide;
    SlideOutTop => "slideOutTop", Slide;
    SlideOutBottom => "slideOutBottom", Slide;

    ScaleIn => "scaleIn", Scale;
    ScaleOut => "scaleOut", Scale;
    ZoomIn => "zoomIn", Scale;
    ZoomOut => "zoomOut", Scale;
    BounceIn => "bounceIn", Scale;

    RevealLeft => "revealLeft", Reveal;
    RevealRight => "revealRight", Reveal;
    RevealTop => "revealTop", Reveal;
    RevealBottom => "revealBottom", Reveal;
    CollapseLeft => "collapseLeft", Reveal;
    CollapseRight => "collapseRight", Reveal;
    CollapseTop => "collapseTop", Reveal;
    CollapseBottom => "collapseBottom", Reveal;

    SpringIn => "springIn", Spring;
    SpringOut => "springOut", Spring;
    SpringScale => "springScale", Spring;
    SpringTranslateX => "springTranslateX", Spring;
    SpringTranslateY => "springTranslateY", Spring;
    SpringRotate => "springRotate", Spring;

    FlipX => "flipX", Perspective;
    FlipY => "flipY", Perspective;
    Rotate3D => "rotate3D", Perspective;
    Swing => "swing", Perspective;
    ZoomPerspective => "zoomPerspective", Perspective;
    RotateIn => "rotateIn", Perspective;
    RotateOut => "rotateOut", Perspective;
    SkewIn => "skewIn", Perspective;

    Glitch => "glitch", Effect;
    BlurIn => "blurIn", Effect;
    BlurOut => "blurOut", Effect;
    DepthOfField => "depthOfField", Effect;
    KenBurns => "kenBurns", Effect;
    Pulse => "pulse", Effect;
    ColorReveal => "colorReveal", Effect;

    Typewriter => "typewriter", Typography;
    TrackingIn => "trackingIn", Typography;
}

impl AnimationType {
    /// Look up a type by catalogue name, ignoring ASCII case
    pub fn parse(name: &str) -> Option<Self> {
        let name = name.trim();
        if name.eq_ignore_ascii_case("none") {
            return Some(AnimationType::None);
        }
        Self::ALL
            .iter()
            .copied()
            .find(|kind| kind.name().eq_ignore_ascii_case(name))
    }

    /// Look up a type by name; unknown names become `None`
    pub fn from_name(name: &str) -> Self {
        Self::parse(name).unwrap_or_else(|| {
            tracing::debug!(animation = name, "unknown animation type, treating as none");
            AnimationType::None
        })
    }

    pub fn is_none(self) -> bool {
        self == AnimationType::None
    }
}

impl fmt::Display for AnimationType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl From<String> for AnimationType {
    fn from(name: String) -> Self {
        AnimationType::from_name(&name)
    }
}

impl From<AnimationType> for String {
    fn from(kind: AnimationType) -> Self {
        kind.name().to_string()
    }
}

/// A loosely typed `custom` parameter
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CustomValue {
    Flag(bool),
    Number(f64),
    Text(String),
}

impl From<f64> for CustomValue {
    fn from(value: f64) -> Self {
        CustomValue::Number(value)
    }
}

impl From<bool> for CustomValue {
    fn from(value: bool) -> Self {
        CustomValue::Flag(value)
    }
}

impl From<&str> for CustomValue {
    fn from(value: &str) -> Self {
        CustomValue::Text(value.to_string())
    }
}

impl From<String> for CustomValue {
    fn from(value: String) -> Self {
        CustomValue::Text(value)
    }
}

/// Family-specific parameters.
///
/// Probing never fails: a missing or mistyped key yields the caller's
/// default, and keys nobody asks for are ignored.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CustomParams(IndexMap<String, CustomValue>);

impl CustomParams {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<CustomValue>) {
        self.0.insert(key.into(), value.into());
    }

    /// Builder: add a parameter
    pub fn with(mut self, key: impl Into<String>, value: impl Into<CustomValue>) -> Self {
        self.insert(key, value);
        self
    }

    pub fn get(&self, key: &str) -> Option<&CustomValue> {
        self.0.get(key)
    }

    /// Numeric parameter; numeric strings are accepted
    pub fn number(&self, key: &str, default: f64) -> f64 {
        let value = match self.0.get(key) {
            Some(CustomValue::Number(n)) => Some(*n),
            Some(CustomValue::Text(s)) => s.trim().parse::<f64>().ok(),
            _ => None,
        };

        match value {
            Some(n) if n.is_finite() => n,
            Some(_) | None => {
                if self.0.contains_key(key) {
                    tracing::debug!(key, default, "custom parameter is not a number");
                }
                default
            }
        }
    }

    /// Boolean parameter; `0`/`1` and `"true"`/`"false"` are accepted
    pub fn flag(&self, key: &str, default: bool) -> bool {
        match self.0.get(key) {
            Some(CustomValue::Flag(b)) => *b,
            Some(CustomValue::Number(n)) => *n != 0.0,
            Some(CustomValue::Text(s)) => match s.trim() {
                "true" => true,
                "false" => false,
                _ => default,
            },
            None => default,
        }
    }

    /// String parameter
    pub fn text<'a>(&'a self, key: &str, default: &'a str) -> &'a str {
        match self.0.get(key) {
            Some(CustomValue::Text(s)) => s,
            _ => default,
        }
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &CustomValue)> {
        self.0.iter().map(|(key, value)| (key.as_str(), value))
    }
}

/// Normalized description of one animation
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnimationConfig {
    #[serde(rename = "type")]
    kind: AnimationType,
    delay: u32,
    duration: u32,
    easing: Easing,
    #[serde(skip_serializing_if = "Option::is_none")]
    spring_config: Option<SpringConfig>,
    custom: CustomParams,
}

impl AnimationConfig {
    /// A config with default timing for `kind`
    pub fn new(kind: AnimationType) -> Self {
        Self {
            kind,
            delay: 0,
            duration: DEFAULT_DURATION,
            easing: Easing::default(),
            spring_config: None,
            custom: CustomParams::default(),
        }
    }

    /// The empty animation
    pub fn none() -> Self {
        Self::new(AnimationType::None)
    }

    /// Builder: delay in frames
    pub fn with_delay(mut self, delay: u32) -> Self {
        self.delay = delay;
        self
    }

    /// Builder: duration in frames; zero falls back to the default
    pub fn with_duration(mut self, duration: u32) -> Self {
        self.duration = if duration == 0 {
            tracing::warn!(animation = %self.kind, "zero duration, using default");
            DEFAULT_DURATION
        } else {
            duration
        };
        self
    }

    /// Builder: easing curve
    pub fn with_easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }

    /// Builder: spring parameters (sanitized)
    pub fn with_spring(mut self, config: SpringConfig) -> Self {
        self.spring_config = Some(config.sanitized());
        self
    }

    /// Builder: add one custom parameter
    pub fn with_custom(mut self, key: impl Into<String>, value: impl Into<CustomValue>) -> Self {
        self.custom.insert(key, value);
        self
    }

    /// Builder: replace all custom parameters
    pub fn with_custom_params(mut self, custom: CustomParams) -> Self {
        self.custom = custom;
        self
    }

    pub fn kind(&self) -> AnimationType {
        self.kind
    }

    pub fn delay(&self) -> u32 {
        self.delay
    }

    pub fn duration(&self) -> u32 {
        self.duration
    }

    pub fn easing(&self) -> Easing {
        self.easing
    }

    /// Explicit spring parameters, if any were given
    pub fn spring_config(&self) -> Option<&SpringConfig> {
        self.spring_config.as_ref()
    }

    /// Spring parameters to simulate with
    pub fn spring(&self) -> SpringConfig {
        self.spring_config.unwrap_or_default()
    }

    pub fn custom(&self) -> &CustomParams {
        &self.custom
    }

    pub fn is_none(&self) -> bool {
        self.kind.is_none()
    }
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self::none()
    }
}

impl From<AnimationType> for AnimationConfig {
    fn from(kind: AnimationType) -> Self {
        Self::new(kind)
    }
}
