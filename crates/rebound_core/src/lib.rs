//! Rebound Core Runtime
//!
//! Foundational primitives shared by the Rebound widget crates:
//!
//! - **Event Types**: platform-agnostic pointer event identifiers
//! - **State Transitions**: event-driven transitions for widget state enums
//! - **Listener Dispatch**: ordered, handle-keyed callback registries
//! - **Display Metrics**: screen extent and density, read once at widget
//!   construction

pub mod events;
pub mod listeners;
pub mod metrics;
pub mod state;

pub use events::EventType;
pub use listeners::{ListenerId, ListenerSet};
pub use metrics::DisplayMetrics;
pub use state::StateTransitions;
