//! Drag state for the overscroll controller

use rebound_core::StateTransitions;

/// Touch contact state driving the overscroll physics
///
/// `Down` while a finger is in contact or moving; `Up` otherwise (including
/// a released fling). The controller reads this to pick the fling-vs-drag
/// dampening base and to trigger spring-back on release.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum DragState {
    #[default]
    Up,
    Down,
}

impl StateTransitions for DragState {
    fn on_event(&self, event: u32) -> Option<Self> {
        use rebound_core::events::event_types::*;
        match (self, event) {
            (DragState::Up, POINTER_DOWN) => Some(DragState::Down),
            (DragState::Up, POINTER_MOVE) => Some(DragState::Down),
            (DragState::Down, POINTER_UP) => Some(DragState::Up),
            (DragState::Down, POINTER_CANCEL) => Some(DragState::Up),
            _ => None,
        }
    }
}
