//! Linear list layout
//!
//! The plain layout primitive the overscroll controller decorates: rows
//! stacked along one axis with optional leading/trailing margins, a clamped
//! scroll offset, and a per-row translation channel the controller writes
//! through. Row placement and measurement stay here; the controller only
//! consumes `scroll_by` and the row accessors.
//!
//! The realized row window can be briefly inconsistent with a caller's view
//! of it during host layout passes, so every index-based accessor is
//! bounds-checked and out-of-range writes are silently ignored.

/// Scroll axis of the list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Orientation {
    #[default]
    Vertical,
    Horizontal,
}

impl Orientation {
    pub fn is_vertical(&self) -> bool {
        matches!(self, Orientation::Vertical)
    }
}

/// A realized row in the list
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Row {
    main_size: f32,
    leading_margin: f32,
    trailing_margin: f32,
    /// Stacked position along the axis, before scroll and translation
    position: f32,
    translation: f32,
}

impl Row {
    /// Measured extent along the scroll axis
    pub fn main_size(&self) -> f32 {
        self.main_size
    }

    /// Margin on the start-edge side of the row
    pub fn leading_margin(&self) -> f32 {
        self.leading_margin
    }

    /// Margin on the end-edge side of the row
    pub fn trailing_margin(&self) -> f32 {
        self.trailing_margin
    }

    /// Current visual displacement along the scroll axis
    pub fn translation(&self) -> f32 {
        self.translation
    }
}

/// Rows stacked along one axis with clamped scrolling
#[derive(Debug, Clone)]
pub struct LinearListLayout {
    orientation: Orientation,
    viewport_extent: f32,
    rows: Vec<Row>,
    content_extent: f32,
    scroll_offset: f32,
}

impl LinearListLayout {
    pub fn new(orientation: Orientation, viewport_extent: f32) -> Self {
        Self {
            orientation,
            viewport_extent,
            rows: Vec::new(),
            content_extent: 0.0,
            scroll_offset: 0.0,
        }
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    pub fn is_vertical(&self) -> bool {
        self.orientation.is_vertical()
    }

    pub fn viewport_extent(&self) -> f32 {
        self.viewport_extent
    }

    /// Append a row with no margins
    pub fn push_row(&mut self, main_size: f32) {
        self.push_row_with_margins(main_size, 0.0, 0.0);
    }

    /// Append a row; its position is stacked after the rows already present
    pub fn push_row_with_margins(
        &mut self,
        main_size: f32,
        leading_margin: f32,
        trailing_margin: f32,
    ) {
        let position = self.content_extent + leading_margin;
        self.rows.push(Row {
            main_size,
            leading_margin,
            trailing_margin,
            position,
            translation: 0.0,
        });
        self.content_extent += leading_margin + main_size + trailing_margin;
    }

    pub fn child_count(&self) -> usize {
        self.rows.len()
    }

    /// Bounds-checked row access; None outside the realized window
    pub fn child_at(&self, index: usize) -> Option<&Row> {
        self.rows.get(index)
    }

    /// On-screen position of a row's leading edge along the scroll axis,
    /// including the current scroll offset and the row's translation
    pub fn row_offset(&self, index: usize) -> Option<f32> {
        self.rows
            .get(index)
            .map(|row| row.position - self.scroll_offset + row.translation)
    }

    pub fn translation(&self, index: usize) -> Option<f32> {
        self.rows.get(index).map(|row| row.translation)
    }

    /// Displace a row along the scroll axis. Out-of-range indices are
    /// silently skipped.
    pub fn set_translation(&mut self, index: usize, translation: f32) {
        if let Some(row) = self.rows.get_mut(index) {
            row.translation = translation;
        }
    }

    pub fn clear_translations(&mut self) {
        for row in self.rows.iter_mut() {
            row.translation = 0.0;
        }
    }

    /// Total stacked extent of all rows including margins
    pub fn content_extent(&self) -> f32 {
        self.content_extent
    }

    pub fn scroll_offset(&self) -> f32 {
        self.scroll_offset
    }

    /// Furthest the content can scroll; 0 when it fits the viewport
    pub fn max_scroll(&self) -> f32 {
        (self.content_extent - self.viewport_extent).max(0.0)
    }

    /// Scroll by `delta` (positive toward the end edge), clamped to content
    /// bounds. Returns the distance actually scrolled - the contract the
    /// overscroll controller relies on to compute the unconsumed remainder.
    pub fn scroll_by(&mut self, delta: f32) -> f32 {
        let old = self.scroll_offset;
        self.scroll_offset = (old + delta).clamp(0.0, self.max_scroll());
        self.scroll_offset - old
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn layout_with_rows(count: usize, size: f32) -> LinearListLayout {
        let mut layout = LinearListLayout::new(Orientation::Vertical, 400.0);
        for _ in 0..count {
            layout.push_row(size);
        }
        layout
    }

    #[test]
    fn test_rows_stack_with_margins() {
        let mut layout = LinearListLayout::new(Orientation::Vertical, 400.0);
        layout.push_row_with_margins(100.0, 8.0, 4.0);
        layout.push_row_with_margins(50.0, 8.0, 4.0);

        assert_eq!(layout.child_count(), 2);
        assert_eq!(layout.row_offset(0), Some(8.0));
        assert_eq!(layout.row_offset(1), Some(120.0)); // 8+100+4 + 8
        assert_eq!(layout.content_extent(), 174.0);
    }

    #[test]
    fn test_scroll_by_clamps_and_reports_consumed() {
        let mut layout = layout_with_rows(10, 100.0); // content 1000, viewport 400

        assert_eq!(layout.max_scroll(), 600.0);
        assert_eq!(layout.scroll_by(250.0), 250.0);
        assert_eq!(layout.scroll_by(500.0), 350.0); // clamped at 600
        assert_eq!(layout.scroll_by(100.0), 0.0); // already at the end
        assert_eq!(layout.scroll_by(-700.0), -600.0); // clamped at 0
        assert_eq!(layout.scroll_offset(), 0.0);
    }

    #[test]
    fn test_unscrollable_content_consumes_nothing() {
        let mut layout = layout_with_rows(3, 100.0); // content 300 < viewport 400
        assert_eq!(layout.max_scroll(), 0.0);
        assert_eq!(layout.scroll_by(50.0), 0.0);
        assert_eq!(layout.scroll_by(-50.0), 0.0);
    }

    #[test]
    fn test_row_offset_tracks_scroll_and_translation() {
        let mut layout = layout_with_rows(10, 100.0);
        layout.scroll_by(150.0);
        assert_eq!(layout.row_offset(2), Some(50.0)); // 200 - 150

        layout.set_translation(2, 30.0);
        assert_eq!(layout.row_offset(2), Some(80.0));
        assert_eq!(layout.translation(2), Some(30.0));
    }

    #[test]
    fn test_out_of_range_access_is_silent() {
        let mut layout = layout_with_rows(2, 100.0);

        assert!(layout.child_at(2).is_none());
        assert!(layout.row_offset(99).is_none());
        assert!(layout.translation(99).is_none());
        layout.set_translation(99, 10.0); // must not panic
        assert_eq!(layout.child_count(), 2);
    }

    #[test]
    fn test_clear_translations() {
        let mut layout = layout_with_rows(3, 100.0);
        layout.set_translation(0, 12.0);
        layout.set_translation(2, -7.0);

        layout.clear_translations();
        for i in 0..3 {
            assert_eq!(layout.translation(i), Some(0.0));
        }
    }
}
