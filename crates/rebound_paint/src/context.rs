//! Command-recording paint context
//!
//! Widgets record solid-fill commands here during their draw pass; the host
//! replays the command list against its actual render backend once per frame.

use crate::color::Color;
use crate::primitives::Rect;

/// A recorded drawing command
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PaintCommand {
    FillRect { rect: Rect, color: Color },
}

/// The paint context used for custom drawing
#[derive(Default)]
pub struct PaintContext {
    commands: Vec<PaintCommand>,
}

impl PaintContext {
    pub fn new() -> Self {
        Self {
            commands: Vec::new(),
        }
    }

    /// Get all recorded commands
    pub fn commands(&self) -> &[PaintCommand] {
        &self.commands
    }

    /// Take ownership of recorded commands
    pub fn take_commands(&mut self) -> Vec<PaintCommand> {
        std::mem::take(&mut self.commands)
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    pub fn fill_rect(&mut self, x: f32, y: f32, width: f32, height: f32, color: Color) {
        self.commands.push(PaintCommand::FillRect {
            rect: Rect::new(x, y, width, height),
            color,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fill_rect_records() {
        let mut ctx = PaintContext::new();
        assert!(ctx.is_empty());

        ctx.fill_rect(0.0, 10.0, 100.0, 50.0, Color::RED);
        assert_eq!(ctx.commands().len(), 1);
        assert_eq!(
            ctx.commands()[0],
            PaintCommand::FillRect {
                rect: Rect::new(0.0, 10.0, 100.0, 50.0),
                color: Color::RED,
            }
        );
    }

    #[test]
    fn test_take_commands_drains() {
        let mut ctx = PaintContext::new();
        ctx.fill_rect(0.0, 0.0, 1.0, 1.0, Color::BLACK);

        let taken = ctx.take_commands();
        assert_eq!(taken.len(), 1);
        assert!(ctx.is_empty());
    }
}
