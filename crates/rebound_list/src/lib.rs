//! Rebound List
//!
//! A scrollable list widget with elastic overscroll: dragging past the
//! content boundary translates the visible rows by a damped amount, releases
//! spring the rows back to rest, and a draw decorator can fill the revealed
//! gap with a configurable color.
//!
//! # Architecture
//!
//! - [`LinearListLayout`]: the plain linear row layout - stacked rows,
//!   clamped scrolling, per-row translation
//! - [`OverscrollController`]: the physics core - damped accumulation,
//!   drag/fling state machine, spring-back animation, change notifications
//! - [`OverscrollGapPainter`]: per-frame decorator painting the gap behind
//!   the translated rows
//! - [`BouncyList`]: the facade widget tying the three together for a host
//!   toolkit
//!
//! The physics core has no rendering or input dependencies and is fully
//! exercised by unit tests; the facade is the only piece a host talks to.

pub mod config;
pub mod decoration;
pub mod layout;
pub mod physics;
pub mod state;
pub mod view;

pub use config::BouncyConfig;
pub use decoration::OverscrollGapPainter;
pub use layout::{LinearListLayout, Orientation, Row};
pub use physics::OverscrollController;
pub use state::DragState;
pub use view::{BouncyList, SharedOverscrollController};
