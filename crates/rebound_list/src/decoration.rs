//! Overscroll gap decoration
//!
//! Fills the gap the translated rows reveal at the stretched edge. The
//! painter reads the controller's live total at draw time - draws and
//! overscroll updates interleave within a frame, so a cached copy would
//! lag a frame behind.

use rebound_core::DisplayMetrics;
use rebound_paint::{Color, PaintContext};

use crate::physics::OverscrollController;

/// Hosts leave a hairline gap between rows; the fill is grown by one
/// density pixel to close it
const GAP_FUDGE_DP: f32 = 1.0;

/// Per-frame draw decorator painting the revealed overscroll gap
pub struct OverscrollGapPainter {
    start_overscroll_color: Color,
    end_overscroll_color: Color,
    fudge: f32,
}

impl OverscrollGapPainter {
    /// Both edge colors default to transparent, which disables painting
    pub fn new(metrics: &DisplayMetrics) -> Self {
        Self {
            start_overscroll_color: Color::TRANSPARENT,
            end_overscroll_color: Color::TRANSPARENT,
            fudge: metrics.dip(GAP_FUDGE_DP),
        }
    }

    pub fn start_overscroll_color(&self) -> Color {
        self.start_overscroll_color
    }

    pub fn set_start_overscroll_color(&mut self, color: Color) {
        self.start_overscroll_color = color;
    }

    pub fn end_overscroll_color(&self) -> Color {
        self.end_overscroll_color
    }

    pub fn set_end_overscroll_color(&mut self, color: Color) {
        self.end_overscroll_color = color;
    }

    /// Draw pass: paint the gap adjacent to the boundary row, or nothing
    /// when there is no overscroll or the edge color is transparent
    pub fn on_draw(
        &self,
        ctx: &mut PaintContext,
        controller: &OverscrollController,
        canvas_width: f32,
        canvas_height: f32,
    ) {
        let total = controller.overscroll_total();
        if total.abs() < f64::EPSILON {
            return;
        }

        if total < 0.0 && !self.start_overscroll_color.is_transparent() {
            // The row the gap opens above (or left of)
            let index = controller.start_index_offset();
            self.draw_gap_region(
                ctx,
                controller,
                index,
                true,
                self.start_overscroll_color,
                canvas_width,
                canvas_height,
            );
        } else if total > 0.0 && !self.end_overscroll_color.is_transparent() {
            // The row the gap opens below (or right of)
            let Some(index) = controller
                .layout()
                .child_count()
                .checked_sub(controller.end_index_offset() + 1)
            else {
                return;
            };
            self.draw_gap_region(
                ctx,
                controller,
                index,
                false,
                self.end_overscroll_color,
                canvas_width,
                canvas_height,
            );
        }
    }

    #[allow(clippy::too_many_arguments)]
    fn draw_gap_region(
        &self,
        ctx: &mut PaintContext,
        controller: &OverscrollController,
        index: usize,
        start: bool,
        color: Color,
        canvas_width: f32,
        canvas_height: f32,
    ) {
        let layout = controller.layout();
        let Some(row) = layout.child_at(index) else {
            return;
        };
        let Some(offset) = layout.row_offset(index) else {
            return;
        };

        let amount = controller.overscroll_total().abs() as f32;

        // Baseline covers the whole canvas; the scroll axis is then narrowed
        // to exactly the revealed gap
        let mut x = 0.0;
        let mut y = 0.0;
        let mut width = canvas_width;
        let mut height = canvas_height;

        let along = if start {
            // Un-translated leading edge of the boundary row
            offset - row.translation() - row.leading_margin() - self.fudge
        } else {
            // Translated trailing edge of the boundary row
            offset + row.main_size() + row.trailing_margin() + self.fudge
        };

        if controller.is_vertical() {
            y = along;
            height = amount + self.fudge;
        } else {
            x = along;
            width = amount + self.fudge;
        }

        ctx.fill_rect(x, y, width, height, color);
    }
}
