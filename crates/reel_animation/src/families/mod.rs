//! Animation families
//!
//! Each submodule holds the registered functions of one family. Every
//! function has the [`AnimationFn`](crate::registry::AnimationFn) signature
//! and bakes its own defaults for the `custom` keys it reads.

pub mod effects;
pub mod fade;
pub mod perspective;
pub mod reveal;
pub mod scale;
pub mod slide;
pub mod springs;
pub mod typography;

/// Declared `transformOrigin` when a family does not say otherwise
pub(crate) const CENTER: &str = "center center";
