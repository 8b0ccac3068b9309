//! Event-driven state transitions
//!
//! Widget interaction states are plain enums; implementing this trait maps
//! incoming event ids to state changes with pattern matching:
//!
//! ```ignore
//! use rebound_core::{events::event_types::*, StateTransitions};
//!
//! #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
//! enum PressState {
//!     Idle,
//!     Pressed,
//! }
//!
//! impl StateTransitions for PressState {
//!     fn on_event(&self, event: u32) -> Option<Self> {
//!         match (self, event) {
//!             (PressState::Idle, POINTER_DOWN) => Some(PressState::Pressed),
//!             (PressState::Pressed, POINTER_UP) => Some(PressState::Idle),
//!             _ => None,
//!         }
//!     }
//! }
//! ```

use std::hash::Hash;

/// Trait for state types that can handle event transitions
pub trait StateTransitions:
    Clone + Copy + PartialEq + Eq + Hash + Send + Sync + std::fmt::Debug + 'static
{
    /// Handle an event and return the new state, or None if no transition
    fn on_event(&self, event: u32) -> Option<Self>;
}
