//! Rebound Animation System
//!
//! Easing curves and tick-driven value tweens.
//!
//! # Features
//!
//! - **Easing**: standard polynomial curves, including the decelerating
//!   ease-out family used for elastic snap-back
//! - **Tween**: a single animated value interpolated over a fixed duration,
//!   advanced by the host's frame clock

pub mod easing;
pub mod tween;

pub use easing::Easing;
pub use tween::Tween;
