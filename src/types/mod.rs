//! Value types for color calculations.

mod color_mode;
mod mired;
mod point;

pub use color_mode::ColorMode;
pub use mired::Mired;
pub use point::{Point, XyInput};
