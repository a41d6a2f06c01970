//! Shared value types.

mod color;
mod point;

pub use color::Rgb;
pub use point::Point;
