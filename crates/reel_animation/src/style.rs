//! Style snapshots
//!
//! A [`StyleSnapshot`] is everything the engine hands back for one frame: a
//! flat, insertion-ordered map from CSS-like property names to numbers or
//! strings. [`TransformList`] and [`FilterList`] lay numeric results into the
//! `transform` and `filter` strings.

use std::fmt;

use indexmap::IndexMap;
use serde::Serialize;
use smallvec::SmallVec;

/// Property names written by the animation families
pub mod props {
    pub const OPACITY: &str = "opacity";
    pub const TRANSFORM: &str = "transform";
    pub const TRANSFORM_ORIGIN: &str = "transformOrigin";
    pub const FILTER: &str = "filter";
    pub const CLIP_PATH: &str = "clipPath";
    pub const BACKFACE_VISIBILITY: &str = "backfaceVisibility";
    pub const LETTER_SPACING: &str = "letterSpacing";
}

/// A single style value
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(untagged)]
pub enum StyleValue {
    Number(f64),
    Text(String),
}

impl StyleValue {
    pub fn as_number(&self) -> Option<f64> {
        match self {
            StyleValue::Number(n) => Some(*n),
            StyleValue::Text(_) => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            StyleValue::Text(s) => Some(s),
            StyleValue::Number(_) => None,
        }
    }
}

impl From<f64> for StyleValue {
    fn from(value: f64) -> Self {
        StyleValue::Number(value)
    }
}

impl From<String> for StyleValue {
    fn from(value: String) -> Self {
        StyleValue::Text(value)
    }
}

impl From<&str> for StyleValue {
    fn from(value: &str) -> Self {
        StyleValue::Text(value.to_string())
    }
}

impl fmt::Display for StyleValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StyleValue::Number(n) => f.write_str(&css_number(*n)),
            StyleValue::Text(s) => f.write_str(s),
        }
    }
}

/// Style values for one frame
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct StyleSnapshot {
    properties: IndexMap<&'static str, StyleValue>,
}

impl StyleSnapshot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a property, replacing any previous value in place
    pub fn set(&mut self, name: &'static str, value: impl Into<StyleValue>) {
        self.properties.insert(name, value.into());
    }

    /// Builder: set a property
    pub fn with(mut self, name: &'static str, value: impl Into<StyleValue>) -> Self {
        self.set(name, value);
        self
    }

    pub fn get(&self, name: &str) -> Option<&StyleValue> {
        self.properties.get(name)
    }

    /// Numeric value of a property, if it is a number
    pub fn number(&self, name: &str) -> Option<f64> {
        self.get(name).and_then(StyleValue::as_number)
    }

    /// String value of a property, if it is a string
    pub fn text(&self, name: &str) -> Option<&str> {
        self.get(name).and_then(StyleValue::as_text)
    }

    pub fn opacity(&self) -> Option<f64> {
        self.number(props::OPACITY)
    }

    pub fn transform(&self) -> Option<&str> {
        self.text(props::TRANSFORM)
    }

    pub fn filter(&self) -> Option<&str> {
        self.text(props::FILTER)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.properties.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.properties.len()
    }

    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }

    /// Iterate properties in the order they were first set
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &StyleValue)> {
        self.properties.iter().map(|(name, value)| (*name, value))
    }

    /// Layer `other` on top of this snapshot; its values win
    pub fn merge(&mut self, other: StyleSnapshot) {
        self.properties.extend(other.properties);
    }
}

/// One CSS transform function
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum TransformFn {
    Perspective(f64),
    TranslateX(f64),
    TranslateY(f64),
    TranslateZ(f64),
    Translate(f64, f64),
    Scale(f64),
    ScaleX(f64),
    ScaleY(f64),
    Rotate(f64),
    RotateX(f64),
    RotateY(f64),
    SkewX(f64),
    SkewY(f64),
}

impl fmt::Display for TransformFn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            TransformFn::Perspective(px) => write!(f, "perspective({}px)", css_number(px)),
            TransformFn::TranslateX(px) => write!(f, "translateX({}px)", css_number(px)),
            TransformFn::TranslateY(px) => write!(f, "translateY({}px)", css_number(px)),
            TransformFn::TranslateZ(px) => write!(f, "translateZ({}px)", css_number(px)),
            TransformFn::Translate(x, y) => {
                write!(f, "translate({}px, {}px)", css_number(x), css_number(y))
            }
            TransformFn::Scale(s) => write!(f, "scale({})", css_number(s)),
            TransformFn::ScaleX(s) => write!(f, "scaleX({})", css_number(s)),
            TransformFn::ScaleY(s) => write!(f, "scaleY({})", css_number(s)),
            TransformFn::Rotate(deg) => write!(f, "rotate({}deg)", css_number(deg)),
            TransformFn::RotateX(deg) => write!(f, "rotateX({}deg)", css_number(deg)),
            TransformFn::RotateY(deg) => write!(f, "rotateY({}deg)", css_number(deg)),
            TransformFn::SkewX(deg) => write!(f, "skewX({}deg)", css_number(deg)),
            TransformFn::SkewY(deg) => write!(f, "skewY({}deg)", css_number(deg)),
        }
    }
}

/// Ordered list of transform functions, rendered space separated
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TransformList(SmallVec<[TransformFn; 4]>);

impl TransformList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder: append a transform function
    pub fn then(mut self, function: TransformFn) -> Self {
        self.0.push(function);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for TransformList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return f.write_str("none");
        }
        write_joined(f, &self.0)
    }
}

impl From<TransformList> for StyleValue {
    fn from(list: TransformList) -> Self {
        StyleValue::Text(list.to_string())
    }
}

/// One CSS filter function
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum FilterFn {
    Blur(f64),
    /// Percentage, 0 to 100
    Grayscale(f64),
    Brightness(f64),
    HueRotate(f64),
}

impl fmt::Display for FilterFn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            FilterFn::Blur(px) => write!(f, "blur({}px)", css_number(px)),
            FilterFn::Grayscale(pct) => write!(f, "grayscale({}%)", css_number(pct)),
            FilterFn::Brightness(v) => write!(f, "brightness({})", css_number(v)),
            FilterFn::HueRotate(deg) => write!(f, "hue-rotate({}deg)", css_number(deg)),
        }
    }
}

/// Ordered list of filter functions, rendered space separated
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FilterList(SmallVec<[FilterFn; 2]>);

impl FilterList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder: append a filter function
    pub fn then(mut self, function: FilterFn) -> Self {
        self.0.push(function);
        self
    }
}

impl fmt::Display for FilterList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return f.write_str("none");
        }
        write_joined(f, &self.0)
    }
}

impl From<FilterList> for StyleValue {
    fn from(list: FilterList) -> Self {
        StyleValue::Text(list.to_string())
    }
}

fn write_joined<T: fmt::Display>(f: &mut fmt::Formatter<'_>, items: &[T]) -> fmt::Result {
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            f.write_str(" ")?;
        }
        write!(f, "{item}")?;
    }
    Ok(())
}

/// `inset(top right bottom left)` with percentages
pub fn clip_inset(top: f64, right: f64, bottom: f64, left: f64) -> String {
    format!(
        "inset({}% {}% {}% {}%)",
        css_number(top),
        css_number(right),
        css_number(bottom),
        css_number(left)
    )
}

/// Format a number for a CSS string: four decimals at most, no `-0`
pub fn css_number(value: f64) -> String {
    let rounded = (value * 10_000.0).round() / 10_000.0;
    if rounded == 0.0 || !rounded.is_finite() {
        return "0".to_string();
    }
    format!("{rounded}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_css_number_formatting() {
        assert_eq!(css_number(100.0), "100");
        assert_eq!(css_number(0.1 + 0.2), "0.3");
        assert_eq!(css_number(-0.0), "0");
        assert_eq!(css_number(-0.00001), "0");
        assert_eq!(css_number(-12.5), "-12.5");
        assert_eq!(css_number(f64::NAN), "0");
    }

    #[test]
    fn test_transform_list_rendering() {
        let list = TransformList::new()
            .then(TransformFn::Perspective(1000.0))
            .then(TransformFn::RotateX(45.0))
            .then(TransformFn::Scale(0.5));
        assert_eq!(list.to_string(), "perspective(1000px) rotateX(45deg) scale(0.5)");
        assert_eq!(TransformList::new().to_string(), "none");
    }

    #[test]
    fn test_filter_list_rendering() {
        let list = FilterList::new()
            .then(FilterFn::Grayscale(50.0))
            .then(FilterFn::Brightness(0.8));
        assert_eq!(list.to_string(), "grayscale(50%) brightness(0.8)");
    }

    #[test]
    fn test_clip_inset() {
        assert_eq!(clip_inset(0.0, 25.0, 0.0, 0.0), "inset(0% 25% 0% 0%)");
    }

    #[test]
    fn test_snapshot_accessors() {
        let snapshot = StyleSnapshot::new()
            .with(props::OPACITY, 0.5)
            .with(props::TRANSFORM, TransformList::new().then(TransformFn::TranslateX(-20.0)));

        assert_eq!(snapshot.opacity(), Some(0.5));
        assert_eq!(snapshot.transform(), Some("translateX(-20px)"));
        assert_eq!(snapshot.text(props::OPACITY), None);
        assert_eq!(snapshot.len(), 2);
    }

    #[test]
    fn test_snapshot_merge_and_order() {
        let mut base = StyleSnapshot::new()
            .with(props::OPACITY, 1.0)
            .with(props::TRANSFORM_ORIGIN, "center center");
        base.merge(StyleSnapshot::new().with(props::OPACITY, 0.25).with(props::FILTER, "none"));

        let names: Vec<_> = base.iter().map(|(name, _)| name).collect();
        assert_eq!(names, vec!["opacity", "transformOrigin", "filter"]);
        assert_eq!(base.opacity(), Some(0.25));
    }

    #[test]
    fn test_snapshot_serializes_flat() {
        let snapshot = StyleSnapshot::new()
            .with(props::OPACITY, 0.5)
            .with(props::TRANSFORM, "scale(2)");
        let json = serde_json::to_string(&snapshot).unwrap();
        assert_eq!(json, r#"{"opacity":0.5,"transform":"scale(2)"}"#);
    }
}
