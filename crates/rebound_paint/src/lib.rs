//! Rebound Paint
//!
//! 2D drawing primitives for the Rebound widget crates: an RGBA [`Color`]
//! type with hex parsing, geometric [`Rect`]s, and a command-recording
//! [`PaintContext`] that hosts replay against their own renderer.

pub mod color;
pub mod context;
pub mod primitives;

pub use color::{Color, ParseColorError};
pub use context::{PaintCommand, PaintContext};
pub use primitives::Rect;
