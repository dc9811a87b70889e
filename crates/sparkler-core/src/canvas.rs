//! The drawing seam between the effect and whatever paints pixels

use crate::types::{Color, Rect, SurfaceSize, Transform};

/// A 2D surface that can fill transformed rectangles.
///
/// Every draw carries its own transform; implementations keep no
/// transform state between calls.
pub trait Canvas {
    /// Current surface size in pixels
    fn size(&self) -> SurfaceSize;

    /// Fill `rect` with `color` (source-over blending), after mapping it through `transform`
    fn fill_rect(&mut self, rect: Rect, color: Color, transform: Transform);
}

/// One recorded `fill_rect` call
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DrawCommand {
    pub rect: Rect,
    pub color: Color,
    pub transform: Transform,
}

/// A canvas that records draw commands in call order
#[derive(Clone, Debug, Default)]
pub struct DrawList {
    size: SurfaceSize,
    commands: Vec<DrawCommand>,
}

impl DrawList {
    pub fn new(size: SurfaceSize) -> Self {
        Self {
            size,
            commands: Vec::new(),
        }
    }

    pub fn resize(&mut self, size: SurfaceSize) {
        self.size = size;
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Drop recorded commands, keeping the allocation
    pub fn clear(&mut self) {
        self.commands.clear();
    }
}

impl Canvas for DrawList {
    fn size(&self) -> SurfaceSize {
        self.size
    }

    fn fill_rect(&mut self, rect: Rect, color: Color, transform: Transform) {
        self.commands.push(DrawCommand {
            rect,
            color,
            transform,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_records_in_order() {
        let mut list = DrawList::new(SurfaceSize::new(100.0, 50.0));
        assert!(list.is_empty());

        list.fill_rect(Rect::new(0.0, 0.0, 1.0, 1.0), Color::BLACK, Transform::IDENTITY);
        list.fill_rect(Rect::new(5.0, 5.0, 2.0, 2.0), Color::WHITE, Transform::IDENTITY);

        assert_eq!(list.len(), 2);
        assert_eq!(list.commands()[0].color, Color::BLACK);
        assert_eq!(list.commands()[1].rect.x, 5.0);
        assert_eq!(list.size(), SurfaceSize::new(100.0, 50.0));

        list.clear();
        assert!(list.is_empty());
    }
}
