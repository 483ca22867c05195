/// Paint effects: per-node hooks that may change what a node paints.
///
/// An effect that paints outside the node's allocation (a drop shadow, a
/// blur) must grow the paint volume accordingly, or the node will be culled
/// or clipped too eagerly.

use glam::Vec3;
use crate::error::Result;
use crate::volume::PaintVolume;

/// Hook run on a node's default paint volume before it is used.
pub trait PaintEffect: Send + Sync {
    /// Adjust `volume` (expressed in the node's local space).
    ///
    /// Return `false` when the effect cannot bound what it paints; the node
    /// then has no usable paint volume and is never culled.
    fn modify_paint_volume(&self, _volume: &mut PaintVolume) -> bool {
        true
    }
}

/// Grows the paint volume by fixed margins, for effects that bleed outside
/// the allocation by a known amount.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PaddingEffect {
    pub left: f32,
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
}

impl PaddingEffect {
    pub fn new(left: f32, top: f32, right: f32, bottom: f32) -> Self {
        Self { left, top, right, bottom }
    }

    /// Same margin on every side
    pub fn uniform(margin: f32) -> Self {
        Self::new(margin, margin, margin, margin)
    }
}

impl PaintEffect for PaddingEffect {
    fn modify_paint_volume(&self, volume: &mut PaintVolume) -> bool {
        if volume.is_empty() {
            return true;
        }

        self.pad(volume).is_ok()
    }
}

impl PaddingEffect {
    fn pad(&self, volume: &mut PaintVolume) -> Result<()> {
        let width = volume.width()? + self.left + self.right;
        let height = volume.height()? + self.top + self.bottom;
        let origin = volume.origin() - Vec3::new(self.left, self.top, 0.0);
        volume.set_origin(origin)?;
        volume.set_width(width.max(0.0))?;
        volume.set_height(height.max(0.0))?;
        Ok(())
    }
}

/// Effect whose output cannot be bounded (e.g. a shader that displaces
/// vertices arbitrarily).
#[derive(Debug, Clone, Copy, Default)]
pub struct UnboundedEffect;

impl PaintEffect for UnboundedEffect {
    fn modify_paint_volume(&self, _volume: &mut PaintVolume) -> bool {
        false
    }
}

#[cfg(test)]
#[path = "effect_tests.rs"]
mod tests;
