//! Event type identifiers
//!
//! Unified pointer-event handling across host platforms. Hosts translate
//! their native input events into these ids before forwarding them to a
//! widget.

/// Event type identifier
pub type EventType = u32;

/// Common event types
pub mod event_types {
    use super::EventType;

    pub const POINTER_DOWN: EventType = 1;
    pub const POINTER_UP: EventType = 2;
    pub const POINTER_MOVE: EventType = 3;
    /// Gesture aborted by the host (window lost focus, touch stolen, ...)
    pub const POINTER_CANCEL: EventType = 4;
    pub const SCROLL: EventType = 30;
}
