/// Transform pipeline and axis realignment.
///
/// Once a volume has been pushed through an arbitrary matrix its derived
/// vertices can no longer be recomputed from the key vertices, so every
/// operation here completes the volume first and then works on the full
/// vertex set (4 vertices when flat, 8 otherwise).

use glam::{Mat4, Vec3, Vec4Swizzles};
use crate::error::Result;
use crate::stage::Viewport;
use super::paint_volume::{PaintVolume, VolumeFlags};

const SOURCE: &str = "stagekit::PaintVolume";

/// Transform a point, dividing by w when the matrix is projective.
#[inline]
fn transform_point(matrix: &Mat4, point: Vec3) -> Vec3 {
    let p = *matrix * point.extend(1.0);
    if p.w != 1.0 && p.w != 0.0 {
        p.xyz() / p.w
    } else {
        p.xyz()
    }
}

/// Map a point through modelview-projection, perspective divide and
/// viewport, yielding window coordinates (y grows downward).
#[inline]
pub(crate) fn fully_transform_point(mvp: &Mat4, viewport: &Viewport, point: Vec3) -> Vec3 {
    let clip = *mvp * point.extend(1.0);
    let ndc = if clip.w != 0.0 { clip.xyz() / clip.w } else { clip.xyz() };

    Vec3::new(
        viewport.x + (ndc.x + 1.0) * 0.5 * viewport.width,
        viewport.y + viewport.height - (ndc.y + 1.0) * 0.5 * viewport.height,
        viewport.min_depth + (ndc.z + 1.0) * 0.5 * (viewport.max_depth - viewport.min_depth),
    )
}

impl PaintVolume {
    /// Apply a 4×4 transform to the volume in place.
    ///
    /// The result is flagged as not axis-aligned even when the matrix happens
    /// to preserve alignment; call [`axis_align`](Self::axis_align) when an
    /// AABB is needed.
    pub fn transform(&mut self, matrix: &Mat4) {
        if self.is_empty() {
            self.vertices[0] = transform_point(matrix, self.vertices[0]);
            return;
        }

        self.complete();

        let count = self.vertex_count();
        for vertex in &mut self.vertices[..count] {
            *vertex = transform_point(matrix, *vertex);
        }

        self.flags.remove(VolumeFlags::AXIS_ALIGNED);
    }

    /// Project the volume into window (pixel) coordinates.
    ///
    /// `modelview` maps the volume's space to eye space, `projection` maps
    /// eye space to clip space, then the perspective divide and `viewport`
    /// mapping are applied.
    pub fn project(&mut self, modelview: &Mat4, projection: &Mat4, viewport: &Viewport) {
        let mvp = *projection * *modelview;

        if self.is_empty() {
            self.vertices[0] = fully_transform_point(&mvp, viewport, self.vertices[0]);
            return;
        }

        self.complete();

        let count = self.vertex_count();
        for vertex in &mut self.vertices[..count] {
            *vertex = fully_transform_point(&mvp, viewport, *vertex);
        }

        self.flags.remove(VolumeFlags::AXIS_ALIGNED);
    }

    /// Replace an arbitrarily oriented volume by its enclosing AABB.
    ///
    /// No-op for empty or already aligned volumes. The new box keeps only its
    /// key vertices valid; derived vertices are recomputed on demand.
    ///
    /// # Errors
    ///
    /// `InvalidState` if the volume is incomplete: alignment cannot be
    /// recovered from key vertices alone once orientation is lost.
    pub fn axis_align(&mut self) -> Result<()> {
        if self.is_empty() || self.is_axis_aligned() {
            return Ok(());
        }

        if !self.is_complete() {
            return Err(crate::stagekit_err!(
                InvalidState,
                SOURCE,
                "axis_align requires a complete volume"
            ));
        }

        if self.is_canonical_box() {
            // The back face of a flat volume was never transformed
            if self.is_flat() {
                self.vertices[4] = self.vertices[0];
            }
            self.flags.set(VolumeFlags::FLAT, self.vertices[4].z == self.vertices[0].z);
            self.flags.insert(VolumeFlags::AXIS_ALIGNED);
            return Ok(());
        }

        let count = self.vertex_count();
        let (min, max) = self.vertices[1..count]
            .iter()
            .fold((self.vertices[0], self.vertices[0]), |(min, max), v| {
                (min.min(*v), max.max(*v))
            });

        self.vertices[0] = min;
        self.vertices[1] = Vec3::new(max.x, min.y, min.z);
        self.vertices[3] = Vec3::new(min.x, max.y, min.z);
        self.vertices[4] = Vec3::new(min.x, min.y, max.z);

        self.flags.set(VolumeFlags::FLAT, max.z == min.z);
        self.flags.remove(VolumeFlags::COMPLETE);
        self.flags.insert(VolumeFlags::AXIS_ALIGNED);
        Ok(())
    }

    /// Whether the (complete) vertices still form a box whose key edges
    /// run along +X, +Y and +Z from vertex 0, with every derived vertex
    /// where completion would put it.
    ///
    /// Each key edge is checked on all three axes: checking a single
    /// coordinate per edge accepts a box rotated by 90°.
    fn is_canonical_box(&self) -> bool {
        let v = &self.vertices;
        let o = v[0];

        let along_x = v[1].y == o.y && v[1].z == o.z && v[1].x >= o.x;
        let along_y = v[3].x == o.x && v[3].z == o.z && v[3].y >= o.y;
        let front_ok = v[2] == Vec3::new(v[1].x, v[3].y, o.z);

        if !(along_x && along_y && front_ok) {
            return false;
        }

        if self.is_flat() {
            return true;
        }

        let along_z = v[4].x == o.x && v[4].y == o.y && v[4].z >= o.z;
        along_z
            && v[5] == Vec3::new(v[1].x, o.y, v[4].z)
            && v[6] == Vec3::new(v[1].x, v[3].y, v[4].z)
            && v[7] == Vec3::new(o.x, v[3].y, v[4].z)
    }
}

#[cfg(test)]
#[path = "transform_tests.rs"]
mod tests;
