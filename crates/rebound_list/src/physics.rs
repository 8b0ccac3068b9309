//! Overscroll physics
//!
//! The controller sits in front of [`LinearListLayout`]: every scroll delta
//! passes through [`handle_scroll`](OverscrollController::handle_scroll),
//! which lets the layout consume what it can and folds the remainder into a
//! signed overscroll total (negative = stretched past the start edge,
//! positive = past the end edge). The total is damped against a
//! screen-derived maximum, rendered by translating the visible rows, and
//! animated back to zero with a decelerating tween once the drag ends.
//!
//! Invariant: every translated row carries exactly `-overscroll_total`
//! pixels of displacement along the scroll axis, at all times including
//! mid-animation.

use rebound_animation::{Easing, Tween};
use rebound_core::{DisplayMetrics, ListenerId, ListenerSet};

use crate::layout::LinearListLayout;
use crate::state::DragState;

/// Spring-back duration at strength 1.0; the strength factor divides it
const SPRING_BACK_DURATION_MS: f32 = 300.0;

/// Base dampening while a fling is running; flings may stretch further than
/// a held drag
const FLING_DAMPEN: f64 = 1.25;

/// Base dampening while a finger is down
const DRAG_DAMPEN: f64 = 1.0;

/// Damped elastic overscroll in front of a linear list layout
pub struct OverscrollController {
    layout: LinearListLayout,
    /// Stretch bound along the active axis, fixed at construction from the
    /// screen extent; tension rescales it per operation
    max_overscroll: f64,
    state: DragState,
    overscroll_total: f64,
    spring_back: Option<Tween>,
    listeners: ListenerSet<bool>,
    start_index_offset: usize,
    end_index_offset: usize,
    tension: f32,
    strength: f32,
}

impl OverscrollController {
    /// Wrap a layout. The screen extent sets the maximum overscroll: a
    /// quarter of the screen height for vertical lists, a third of the
    /// width for horizontal ones.
    pub fn new(layout: LinearListLayout, metrics: &DisplayMetrics) -> Self {
        let max_overscroll = if layout.is_vertical() {
            metrics.height_px as f64 / 4.0
        } else {
            metrics.width_px as f64 / 3.0
        };

        Self {
            layout,
            max_overscroll,
            state: DragState::Up,
            overscroll_total: 0.0,
            spring_back: None,
            listeners: ListenerSet::new(),
            start_index_offset: 0,
            end_index_offset: 0,
            tension: 1.0,
            strength: 1.0,
        }
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    /// Signed overscroll along the active axis; 0 when the list is at rest
    pub fn overscroll_total(&self) -> f64 {
        self.overscroll_total
    }

    pub fn state(&self) -> DragState {
        self.state
    }

    pub fn is_vertical(&self) -> bool {
        self.layout.is_vertical()
    }

    /// True while a spring-back animation is in flight
    pub fn is_animating(&self) -> bool {
        self.spring_back.is_some()
    }

    pub fn layout(&self) -> &LinearListLayout {
        &self.layout
    }

    pub fn layout_mut(&mut self) -> &mut LinearListLayout {
        &mut self.layout
    }

    pub fn max_overscroll(&self) -> f64 {
        self.max_overscroll
    }

    pub fn start_index_offset(&self) -> usize {
        self.start_index_offset
    }

    pub fn set_start_index_offset(&mut self, offset: usize) {
        self.start_index_offset = offset;
    }

    pub fn end_index_offset(&self) -> usize {
        self.end_index_offset
    }

    pub fn set_end_index_offset(&mut self, offset: usize) {
        self.end_index_offset = offset;
    }

    pub fn tension(&self) -> f32 {
        self.tension
    }

    pub fn set_tension(&mut self, tension: f32) {
        self.tension = tension;
    }

    pub fn strength(&self) -> f32 {
        self.strength
    }

    pub fn set_strength(&mut self, strength: f32) {
        self.strength = strength;
    }

    // =========================================================================
    // Listeners
    // =========================================================================

    /// Subscribe to overscroll changes. The callback receives `true` when
    /// the change came from the spring-back animation, `false` for a live
    /// drag or fling.
    pub fn register_on_overscroll<F>(&mut self, callback: F) -> ListenerId
    where
        F: FnMut(bool) + Send + 'static,
    {
        self.listeners.register(callback)
    }

    pub fn unregister_on_overscroll(&mut self, id: ListenerId) -> bool {
        self.listeners.unregister(id)
    }

    // =========================================================================
    // State machine
    // =========================================================================

    /// Drive the drag state. Down -> Up starts the spring-back; Up -> Down
    /// cancels an in-flight spring-back, freezing the total where the
    /// animation left it. Same-state calls are no-ops.
    pub fn set_state(&mut self, state: DragState) {
        if self.state == DragState::Down && state == DragState::Up {
            tracing::debug!(total = self.overscroll_total, "drag released");
            self.start_spring_back();
        } else if self.state == DragState::Up && state == DragState::Down {
            self.spring_back = None;
        }
        self.state = state;
    }

    // =========================================================================
    // Scrolling
    // =========================================================================

    /// Handle one scroll delta along the active axis. Returns the distance
    /// the underlying layout actually scrolled, honoring the host contract
    /// that scroll handlers report consumed distance.
    pub fn handle_scroll(&mut self, delta: f64) -> f64 {
        let mut to_scroll = delta;

        // While overscrolled, a drag in the opposite direction shrinks the
        // outstanding overscroll before any content scrolls
        if self.overscroll_total != 0.0
            && ((to_scroll > 0.0 && self.overscroll_total < 0.0)
                || (to_scroll < 0.0 && self.overscroll_total > 0.0))
        {
            if self.overscroll_total.abs() >= to_scroll.abs() {
                // Entirely absorbed; nothing reaches the layout
                self.update_overscroll(to_scroll);
                return 0.0;
            }
            // Delta outruns the overscroll: spend part of it zeroing the
            // stretch, scroll normally with what is left
            to_scroll += self.overscroll_total;
            self.reset();
        }

        let consumed = self.layout.scroll_by(to_scroll as f32) as f64;
        let raw = to_scroll - consumed;

        let base = if self.state == DragState::Up {
            FLING_DAMPEN
        } else {
            DRAG_DAMPEN
        };
        // Resistance grows as the outstanding stretch approaches the
        // tension-scaled maximum; floored at zero so the direction of new
        // overscroll never inverts
        let dampen = (base
            - self.overscroll_total.abs() / (self.max_overscroll * (1.0 / self.tension as f64)))
            .max(0.0);

        tracing::trace!(
            delta,
            consumed,
            raw,
            dampen,
            total = self.overscroll_total,
            "scroll handled"
        );

        self.update_overscroll(raw * dampen);

        consumed
    }

    fn update_overscroll(&mut self, amount: f64) {
        // Rounding noise must not move state or wake listeners
        if amount.abs() < f64::EPSILON {
            return;
        }

        self.overscroll_total += amount;

        self.translate_rows(false);

        // A released fling bounces back immediately
        if self.state == DragState::Up {
            self.start_spring_back();
        }
    }

    // =========================================================================
    // Row translation
    // =========================================================================

    /// Push `-overscroll_total` into every row inside the active index
    /// window, then notify listeners
    fn translate_rows(&mut self, animating: bool) {
        if self.overscroll_total > 0.0 {
            self.translate_end_window();
        } else {
            self.translate_start_window();
        }

        self.listeners.emit(animating);
    }

    /// Start-edge gap: rows before `start_index_offset` stay fixed
    fn translate_start_window(&mut self) {
        for index in self.start_index_offset..self.layout.child_count() {
            self.translate_row(index);
        }
    }

    /// End-edge gap: rows after the boundary row stay fixed
    fn translate_end_window(&mut self) {
        let count = self.layout.child_count();
        let Some(last) = count.checked_sub(self.end_index_offset + 1) else {
            return;
        };
        for index in (0..=last).rev() {
            self.translate_row(index);
        }
    }

    fn translate_row(&mut self, index: usize) {
        self.layout
            .set_translation(index, -(self.overscroll_total as f32));
    }

    // =========================================================================
    // Spring-back
    // =========================================================================

    fn start_spring_back(&mut self) {
        let duration_ms = SPRING_BACK_DURATION_MS * (1.0 / self.strength);
        let mut tween = Tween::new(self.overscroll_total, 0.0, duration_ms, Easing::EaseOutQuad);
        tween.start();
        // Replaces any animation already running; at most one is alive
        self.spring_back = Some(tween);
    }

    /// Advance the spring-back by `dt_ms`. Returns true while the animation
    /// is still running. Each tick reruns the same translate-and-notify step
    /// as live dragging, with the animating flag set.
    pub fn tick(&mut self, dt_ms: f32) -> bool {
        let Some(tween) = self.spring_back.as_mut() else {
            return false;
        };

        tween.tick(dt_ms);
        let value = tween.value();
        let finished = tween.is_finished();

        self.overscroll_total = value;
        self.translate_rows(true);

        if finished {
            self.reset();
            return false;
        }
        true
    }

    /// Zero the total, clear every row translation, drop the animation
    fn reset(&mut self) {
        self.layout.clear_translations();
        self.spring_back = None;
        self.overscroll_total = 0.0;
    }
}
