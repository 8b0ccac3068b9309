//! The bouncy list facade
//!
//! [`BouncyList`] is the piece a host toolkit talks to. It is a thin state
//! translator: pointer events become [`DragState`] transitions, scroll
//! deltas are routed to the controller along the active axis, and the draw
//! pass delegates to the gap painter. The widget never consumes input - the
//! host keeps dispatching events through its normal pipeline.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

use rebound_core::{DisplayMetrics, EventType, ListenerId, StateTransitions};
use rebound_paint::{Color, PaintContext};

use crate::config::BouncyConfig;
use crate::decoration::OverscrollGapPainter;
use crate::layout::LinearListLayout;
use crate::physics::OverscrollController;

/// Shared handle to the controller for external access
pub type SharedOverscrollController = Arc<Mutex<OverscrollController>>;

/// Elastic overscroll list widget
pub struct BouncyList {
    controller: SharedOverscrollController,
    painter: OverscrollGapPainter,
    needs_paint: Arc<AtomicBool>,
}

impl BouncyList {
    pub fn new(layout: LinearListLayout, metrics: &DisplayMetrics) -> Self {
        let mut controller = OverscrollController::new(layout, metrics);

        // Animated changes arrive from the frame clock, outside the host's
        // normal damage tracking, so flag them for repaint ourselves
        let needs_paint = Arc::new(AtomicBool::new(false));
        {
            let needs_paint = Arc::clone(&needs_paint);
            controller.register_on_overscroll(move |animating| {
                if animating {
                    needs_paint.store(true, Ordering::Relaxed);
                }
            });
        }

        Self {
            controller: Arc::new(Mutex::new(controller)),
            painter: OverscrollGapPainter::new(metrics),
            needs_paint,
        }
    }

    /// Create with configuration applied to the controller and painter
    pub fn with_config(
        layout: LinearListLayout,
        metrics: &DisplayMetrics,
        config: &BouncyConfig,
    ) -> Self {
        let mut list = Self::new(layout, metrics);
        {
            let mut controller = list.controller.lock().unwrap();
            controller.set_start_index_offset(config.start_index_offset);
            controller.set_end_index_offset(config.end_index_offset);
            controller.set_tension(config.tension);
            controller.set_strength(config.strength);
        }
        list.painter
            .set_start_overscroll_color(config.start_overscroll_color);
        list.painter
            .set_end_overscroll_color(config.end_overscroll_color);
        list
    }

    /// Get the shared controller handle
    pub fn controller(&self) -> SharedOverscrollController {
        Arc::clone(&self.controller)
    }

    // =========================================================================
    // Input
    // =========================================================================

    /// Feed one pointer event. Down/move press the drag state, up/cancel
    /// release it; the event itself is never consumed here.
    pub fn on_pointer_event(&self, event: EventType) {
        let mut controller = self.controller.lock().unwrap();
        if let Some(next) = controller.state().on_event(event) {
            controller.set_state(next);
        }
    }

    /// Route a scroll delta along the active axis. Returns the distance the
    /// underlying layout consumed.
    pub fn scroll_by(&self, delta_x: f64, delta_y: f64) -> f64 {
        let mut controller = self.controller.lock().unwrap();
        let delta = if controller.is_vertical() {
            delta_y
        } else {
            delta_x
        };
        controller.handle_scroll(delta)
    }

    // =========================================================================
    // Frame clock
    // =========================================================================

    /// Advance the spring-back animation. Returns true while still animating
    /// so the host keeps scheduling frames.
    pub fn tick(&self, dt_ms: f32) -> bool {
        self.controller.lock().unwrap().tick(dt_ms)
    }

    /// True once an animated overscroll change landed since the last call;
    /// clears the flag
    pub fn take_needs_paint(&self) -> bool {
        self.needs_paint.swap(false, Ordering::Relaxed)
    }

    // =========================================================================
    // Drawing
    // =========================================================================

    /// Draw pass: paint the overscroll gap, if any
    pub fn draw(&self, ctx: &mut PaintContext, canvas_width: f32, canvas_height: f32) {
        let controller = self.controller.lock().unwrap();
        self.painter
            .on_draw(ctx, &controller, canvas_width, canvas_height);
    }

    // =========================================================================
    // Listeners
    // =========================================================================

    pub fn register_on_overscroll<F>(&self, callback: F) -> ListenerId
    where
        F: FnMut(bool) + Send + 'static,
    {
        self.controller.lock().unwrap().register_on_overscroll(callback)
    }

    pub fn unregister_on_overscroll(&self, id: ListenerId) -> bool {
        self.controller.lock().unwrap().unregister_on_overscroll(id)
    }

    // =========================================================================
    // Configuration pass-through
    // =========================================================================

    pub fn overscroll_total(&self) -> f64 {
        self.controller.lock().unwrap().overscroll_total()
    }

    pub fn start_index_offset(&self) -> usize {
        self.controller.lock().unwrap().start_index_offset()
    }

    pub fn set_start_index_offset(&mut self, offset: usize) {
        self.controller.lock().unwrap().set_start_index_offset(offset);
    }

    pub fn end_index_offset(&self) -> usize {
        self.controller.lock().unwrap().end_index_offset()
    }

    pub fn set_end_index_offset(&mut self, offset: usize) {
        self.controller.lock().unwrap().set_end_index_offset(offset);
    }

    pub fn tension(&self) -> f32 {
        self.controller.lock().unwrap().tension()
    }

    pub fn set_tension(&mut self, tension: f32) {
        self.controller.lock().unwrap().set_tension(tension);
    }

    pub fn strength(&self) -> f32 {
        self.controller.lock().unwrap().strength()
    }

    pub fn set_strength(&mut self, strength: f32) {
        self.controller.lock().unwrap().set_strength(strength);
    }

    pub fn start_overscroll_color(&self) -> Color {
        self.painter.start_overscroll_color()
    }

    pub fn set_start_overscroll_color(&mut self, color: Color) {
        self.painter.set_start_overscroll_color(color);
    }

    pub fn end_overscroll_color(&self) -> Color {
        self.painter.end_overscroll_color()
    }

    pub fn set_end_overscroll_color(&mut self, color: Color) {
        self.painter.set_end_overscroll_color(color);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::Orientation;
    use crate::state::DragState;
    use rebound_core::events::event_types::*;
    use rebound_paint::PaintCommand;

    const FRAME_MS: f32 = 1000.0 / 60.0;

    fn metrics() -> DisplayMetrics {
        DisplayMetrics::new(1080.0, 1920.0, 1.0)
    }

    fn pinned_layout() -> LinearListLayout {
        let mut layout = LinearListLayout::new(Orientation::Vertical, 400.0);
        for _ in 0..4 {
            layout.push_row(100.0);
        }
        layout
    }

    fn list() -> BouncyList {
        BouncyList::new(pinned_layout(), &metrics())
    }

    #[test]
    fn test_pointer_events_drive_drag_state() {
        let list = list();
        let controller = list.controller();

        list.on_pointer_event(POINTER_DOWN);
        assert_eq!(controller.lock().unwrap().state(), DragState::Down);

        list.on_pointer_event(POINTER_MOVE);
        assert_eq!(controller.lock().unwrap().state(), DragState::Down);

        list.on_pointer_event(POINTER_UP);
        assert_eq!(controller.lock().unwrap().state(), DragState::Up);

        list.on_pointer_event(POINTER_DOWN);
        list.on_pointer_event(POINTER_CANCEL);
        assert_eq!(controller.lock().unwrap().state(), DragState::Up);
    }

    #[test]
    fn test_release_after_drag_starts_spring_back() {
        let list = list();

        list.on_pointer_event(POINTER_DOWN);
        list.scroll_by(0.0, -60.0);
        assert_eq!(list.overscroll_total(), -60.0);

        list.on_pointer_event(POINTER_UP);
        assert!(list.controller().lock().unwrap().is_animating());

        while list.tick(FRAME_MS) {}
        assert_eq!(list.overscroll_total(), 0.0);
    }

    #[test]
    fn test_scroll_by_picks_vertical_axis() {
        let list = list();
        list.on_pointer_event(POINTER_DOWN);

        // Horizontal component must be ignored for a vertical list
        list.scroll_by(-500.0, -25.0);
        assert_eq!(list.overscroll_total(), -25.0);
    }

    #[test]
    fn test_scroll_by_picks_horizontal_axis() {
        let mut layout = LinearListLayout::new(Orientation::Horizontal, 400.0);
        for _ in 0..4 {
            layout.push_row(100.0);
        }
        let list = BouncyList::new(layout, &metrics());
        list.on_pointer_event(POINTER_DOWN);

        list.scroll_by(-25.0, -500.0);
        assert_eq!(list.overscroll_total(), -25.0);
    }

    #[test]
    fn test_animated_changes_request_repaint() {
        let list = list();

        list.on_pointer_event(POINTER_DOWN);
        list.scroll_by(0.0, -60.0);
        // Live drag changes go through the host's normal damage path
        assert!(!list.take_needs_paint());

        list.on_pointer_event(POINTER_UP);
        list.tick(FRAME_MS);
        assert!(list.take_needs_paint());
        // Flag clears on take
        assert!(!list.take_needs_paint());
    }

    #[test]
    fn test_with_config_applies_everything() {
        let config = BouncyConfig {
            start_index_offset: 1,
            end_index_offset: 2,
            tension: 1.5,
            strength: 0.5,
            start_overscroll_color: Color::RED,
            end_overscroll_color: Color::BLUE,
        };
        let list = BouncyList::with_config(pinned_layout(), &metrics(), &config);

        assert_eq!(list.start_index_offset(), 1);
        assert_eq!(list.end_index_offset(), 2);
        assert_eq!(list.tension(), 1.5);
        assert_eq!(list.strength(), 0.5);
        assert_eq!(list.start_overscroll_color(), Color::RED);
        assert_eq!(list.end_overscroll_color(), Color::BLUE);
    }

    #[test]
    fn test_draw_paints_gap_through_facade() {
        let mut list = list();
        list.set_start_overscroll_color(Color::RED);

        list.on_pointer_event(POINTER_DOWN);
        list.scroll_by(0.0, -50.0);

        let mut ctx = PaintContext::new();
        list.draw(&mut ctx, 360.0, 400.0);

        assert_eq!(ctx.commands().len(), 1);
        assert!(matches!(
            ctx.commands()[0],
            PaintCommand::FillRect { color, .. } if color == Color::RED
        ));
    }

    #[test]
    fn test_facade_listener_round_trip() {
        use std::sync::atomic::AtomicUsize;

        let list = list();
        let hits = Arc::new(AtomicUsize::new(0));
        let id = {
            let hits = Arc::clone(&hits);
            list.register_on_overscroll(move |_| {
                hits.fetch_add(1, Ordering::Relaxed);
            })
        };

        list.on_pointer_event(POINTER_DOWN);
        list.scroll_by(0.0, -10.0);
        assert_eq!(hits.load(Ordering::Relaxed), 1);

        assert!(list.unregister_on_overscroll(id));
        list.scroll_by(0.0, -10.0);
        assert_eq!(hits.load(Ordering::Relaxed), 1);
    }
}
