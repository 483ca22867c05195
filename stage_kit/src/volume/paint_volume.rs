/// PaintVolume: the 3D box a scene node occupies on screen.
///
/// Only four "key" vertices are stored authoritatively; the remaining four
/// are derived lazily by `complete()`. Vertex layout:
///
/// ```text
///        4 ────────── 5
///       /│           /│
///      0 ────────── 1 │
///      │ │          │ │
///      │ 7 ─────────│─ 6
///      │/           │/
///      3 ────────── 2
/// ```
///
/// Key vertices: 0 (origin), 1 (+width), 3 (+height), 4 (+depth).
/// Derived vertices: 2, 5, 6, 7.

use bitflags::bitflags;
use glam::Vec3;
use crate::error::Result;
use crate::scene::NodeKey;

/// Indices of the explicitly stored corners
pub const KEY_VERTICES: [usize; 4] = [0, 1, 3, 4];

/// Number of vertices touched when the volume is flat
pub(crate) const FLAT_VERTEX_COUNT: usize = 4;

/// Number of vertices touched for a full 3D box
pub(crate) const FULL_VERTEX_COUNT: usize = 8;

const SOURCE: &str = "stagekit::PaintVolume";

bitflags! {
    /// State bits of a [`PaintVolume`]
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct VolumeFlags: u8 {
        /// Width, height and depth are all zero; only vertex 0 is meaningful
        const EMPTY        = 1 << 0;
        /// Edges are parallel to the coordinate axes
        const AXIS_ALIGNED = 1 << 1;
        /// Derived vertices 2, 5, 6, 7 are up to date
        const COMPLETE     = 1 << 2;
        /// Depth is zero: the back face coincides with the front face
        const FLAT         = 1 << 3;
    }
}

/// Bounding volume of a scene node.
///
/// A value type: `clone()` is the copy operation and dropping it frees it.
/// For per-frame scratch copies see [`VolumeStack`](super::VolumeStack).
#[derive(Debug, Clone, PartialEq)]
pub struct PaintVolume {
    pub(crate) vertices: [Vec3; 8],
    pub(crate) flags: VolumeFlags,
    /// Node whose local space the vertices are expressed in.
    /// `None` once the volume is in eye space.
    pub(crate) reference_node: Option<NodeKey>,
}

impl Default for PaintVolume {
    fn default() -> Self {
        Self::new(None)
    }
}

impl PaintVolume {
    /// Create an empty volume at the origin of `reference_node`'s space
    pub fn new(reference_node: Option<NodeKey>) -> Self {
        Self {
            vertices: [Vec3::ZERO; 8],
            flags: VolumeFlags::EMPTY
                | VolumeFlags::AXIS_ALIGNED
                | VolumeFlags::COMPLETE
                | VolumeFlags::FLAT,
            reference_node,
        }
    }

    /// Overwrite this volume with a copy of `other`
    pub fn set_from_volume(&mut self, other: &PaintVolume) {
        self.clone_from(other);
    }

    /// Put the volume back into its freshly created state
    pub(crate) fn reset(&mut self, reference_node: Option<NodeKey>) {
        *self = Self::new(reference_node);
    }

    // ===== STATE =====

    pub fn flags(&self) -> VolumeFlags {
        self.flags
    }

    pub fn is_empty(&self) -> bool {
        self.flags.contains(VolumeFlags::EMPTY)
    }

    pub fn is_axis_aligned(&self) -> bool {
        self.flags.contains(VolumeFlags::AXIS_ALIGNED)
    }

    pub fn is_complete(&self) -> bool {
        self.flags.contains(VolumeFlags::COMPLETE)
    }

    /// Whether only the four front vertices need processing
    pub fn is_flat(&self) -> bool {
        self.flags.contains(VolumeFlags::FLAT)
    }

    pub fn reference_node(&self) -> Option<NodeKey> {
        self.reference_node
    }

    /// Re-tag the space the volume is expressed in.
    ///
    /// Bookkeeping only: the vertices are not touched.
    pub fn set_reference_node(&mut self, node: Option<NodeKey>) {
        self.reference_node = node;
    }

    /// Raw vertex storage. Derived vertices are stale unless `is_complete()`.
    pub fn vertices(&self) -> &[Vec3; 8] {
        &self.vertices
    }

    /// Number of vertices that matter for the current shape (4 or 8)
    pub(crate) fn vertex_count(&self) -> usize {
        if self.is_flat() { FLAT_VERTEX_COUNT } else { FULL_VERTEX_COUNT }
    }

    /// Complete the volume and return the vertices that matter (4 or 8).
    /// An empty volume yields vertex 0 only.
    pub fn completed_vertices(&mut self) -> &[Vec3] {
        if self.is_empty() {
            return &self.vertices[..1];
        }
        self.complete();
        let count = self.vertex_count();
        &self.vertices[..count]
    }

    // ===== MUTATOR =====

    /// Move the volume so that vertex 0 sits at `origin`.
    ///
    /// Only valid on axis-aligned volumes: re-anchoring an arbitrarily
    /// oriented box needs a full transform.
    pub fn set_origin(&mut self, origin: Vec3) -> Result<()> {
        self.require_axis_aligned("set_origin")?;

        let delta = origin - self.vertices[0];
        for &i in &KEY_VERTICES {
            self.vertices[i] += delta;
        }

        self.flags.remove(VolumeFlags::COMPLETE);
        Ok(())
    }

    pub fn origin(&self) -> Vec3 {
        self.vertices[0]
    }

    /// Set the extent along +X relative to the origin
    pub fn set_width(&mut self, width: f32) -> Result<()> {
        self.prepare_extent("set_width", width)?;
        self.vertices[1].x = self.vertices[0].x + width;
        self.finish_extent_change();
        Ok(())
    }

    /// Set the extent along +Y relative to the origin
    pub fn set_height(&mut self, height: f32) -> Result<()> {
        self.prepare_extent("set_height", height)?;
        self.vertices[3].y = self.vertices[0].y + height;
        self.finish_extent_change();
        Ok(())
    }

    /// Set the extent along +Z relative to the origin
    pub fn set_depth(&mut self, depth: f32) -> Result<()> {
        self.prepare_extent("set_depth", depth)?;
        self.vertices[4].z = self.vertices[0].z + depth;
        self.flags.set(VolumeFlags::FLAT, depth == 0.0);
        self.finish_extent_change();
        Ok(())
    }

    pub fn width(&self) -> Result<f32> {
        self.require_axis_aligned("width")?;
        if self.is_empty() {
            return Ok(0.0);
        }
        Ok(self.vertices[1].x - self.vertices[0].x)
    }

    pub fn height(&self) -> Result<f32> {
        self.require_axis_aligned("height")?;
        if self.is_empty() {
            return Ok(0.0);
        }
        Ok(self.vertices[3].y - self.vertices[0].y)
    }

    pub fn depth(&self) -> Result<f32> {
        self.require_axis_aligned("depth")?;
        if self.is_empty() {
            return Ok(0.0);
        }
        Ok(self.vertices[4].z - self.vertices[0].z)
    }

    /// Shared validation for the extent setters.
    ///
    /// When the volume is empty only vertex 0 is trustworthy, so the other
    /// key vertices are snapped onto it before any extent is applied.
    fn prepare_extent(&mut self, op: &str, extent: f32) -> Result<()> {
        self.require_axis_aligned(op)?;
        if !extent.is_finite() || extent < 0.0 {
            return Err(crate::stagekit_err!(
                InvalidArgument,
                SOURCE,
                "{} expects a finite, non-negative extent (got {})",
                op,
                extent
            ));
        }

        if self.is_empty() {
            let origin = self.vertices[0];
            self.vertices[1] = origin;
            self.vertices[3] = origin;
            self.vertices[4] = origin;
        }
        Ok(())
    }

    fn finish_extent_change(&mut self) {
        self.flags.remove(VolumeFlags::COMPLETE);
        self.update_is_empty();
    }

    fn update_is_empty(&mut self) {
        let v = &self.vertices;
        let empty = v[0].x == v[1].x && v[0].y == v[3].y && v[0].z == v[4].z;
        self.flags.set(VolumeFlags::EMPTY, empty);
    }

    pub(crate) fn require_axis_aligned(&self, op: &str) -> Result<()> {
        if self.is_axis_aligned() {
            Ok(())
        } else {
            Err(crate::stagekit_err!(
                InvalidState,
                SOURCE,
                "{} requires an axis-aligned volume; call axis_align() first",
                op
            ))
        }
    }

    // ===== COMPLETION =====

    /// Derive vertices 2, 5, 6, 7 from the key vertices.
    ///
    /// No-op when already complete or empty. Flat volumes only derive
    /// vertex 2; their back face is never read.
    pub fn complete(&mut self) {
        if self.is_complete() || self.is_empty() {
            return;
        }

        // Transforms complete before dropping alignment, so an incomplete
        // volume is always axis-aligned.
        debug_assert!(self.is_axis_aligned(), "incomplete volume lost axis alignment");

        let v = &mut self.vertices;

        // front-bottom-right
        v[2] = Vec3::new(v[1].x, v[3].y, v[0].z);

        if !self.flags.contains(VolumeFlags::FLAT) {
            // back-top-right
            v[5] = Vec3::new(v[1].x, v[0].y, v[4].z);
            // back-bottom-right
            v[6] = Vec3::new(v[1].x, v[3].y, v[4].z);
            // back-bottom-left
            v[7] = Vec3::new(v[0].x, v[3].y, v[4].z);
        }

        self.flags.insert(VolumeFlags::COMPLETE);
    }
}

#[cfg(test)]
#[path = "paint_volume_tests.rs"]
mod tests;
