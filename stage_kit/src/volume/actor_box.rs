/// ActorBox: 2D rectangle produced by flattening a paint volume.

use super::paint_volume::PaintVolume;

/// Axis-aligned 2D rectangle, `(x1, y1)` top-left to `(x2, y2)` bottom-right
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ActorBox {
    pub x1: f32,
    pub y1: f32,
    pub x2: f32,
    pub y2: f32,
}

impl ActorBox {
    pub fn new(x1: f32, y1: f32, x2: f32, y2: f32) -> Self {
        Self { x1, y1, x2, y2 }
    }

    pub fn width(&self) -> f32 {
        self.x2 - self.x1
    }

    pub fn height(&self) -> f32 {
        self.y2 - self.y1
    }

    pub fn area(&self) -> f32 {
        self.width() * self.height()
    }

    /// Grow the box outward to whole pixels
    pub fn clamp_to_pixel(&mut self) {
        self.x1 = self.x1.floor();
        self.y1 = self.y1.floor();
        self.x2 = self.x2.ceil();
        self.y2 = self.y2.ceil();
    }
}

impl PaintVolume {
    /// Reduce the volume to its 2D extent (min/max X and Y).
    ///
    /// Z is ignored, so this is normally called on a projected volume. An
    /// empty volume yields a zero-area box at vertex 0.
    pub fn bounding_box(&mut self) -> ActorBox {
        let vertices = self.completed_vertices();
        let first = vertices[0];

        vertices[1..].iter().fold(
            ActorBox::new(first.x, first.y, first.x, first.y),
            |b, v| ActorBox::new(b.x1.min(v.x), b.y1.min(v.y), b.x2.max(v.x), b.y2.max(v.y)),
        )
    }
}

#[cfg(test)]
#[path = "actor_box_tests.rs"]
mod tests;
