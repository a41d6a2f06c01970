//! # SegKit Core
//!
//! Core types and utilities shared by the SegKit crates.
//! Provides the geometric primitives, colors and the unified error type.

pub mod error;
pub mod types;

pub use error::{Error, Result};
pub use types::{Point, Rgb};
