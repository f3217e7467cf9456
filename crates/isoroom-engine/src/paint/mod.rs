//! Paint attributes carried by room sprites.
//!
//! Scope:
//! - sprite tint color and its stringified form
//! - blend modes
//! - the texture color-sampling capability used by the thumbnail heuristic

pub mod blend;
pub mod color;
pub mod sample;

pub use blend::BlendMode;
pub use color::Color;
pub use sample::{ColorSampler, ImageColorSampler, NoSampling};
