/// Union of two paint volumes.
///
/// Used to accumulate a container's volume from its children one at a time,
/// so each call is a constant-time update of the four key vertices.

use crate::error::Result;
use super::paint_volume::{PaintVolume, VolumeFlags, KEY_VERTICES};

impl PaintVolume {
    /// Grow `self` into the smallest axis-aligned box enclosing both volumes.
    ///
    /// - An empty `other` contributes nothing (its origin is not pulled in).
    /// - An empty `self` becomes the axis-aligned form of `other`.
    /// - A non axis-aligned `other` is realigned on a scratch copy first.
    ///
    /// Leaves `self` non-empty and incomplete.
    pub fn union(&mut self, other: &PaintVolume) -> Result<()> {
        self.require_axis_aligned("union")?;

        if other.is_empty() {
            return Ok(());
        }

        let aligned;
        let other = if other.is_axis_aligned() {
            other
        } else {
            let mut scratch = other.clone();
            scratch.axis_align()?;
            aligned = scratch;
            &aligned
        };

        if self.is_empty() {
            for &i in &KEY_VERTICES {
                self.vertices[i] = other.vertices[i];
            }
            self.flags.set(VolumeFlags::FLAT, other.is_flat());
        } else {
            self.grow_to_enclose(other);
        }

        self.flags.remove(VolumeFlags::EMPTY | VolumeFlags::COMPLETE);
        Ok(())
    }

    /// Push each face of `self` outward to meet `other`. Never shrinks.
    fn grow_to_enclose(&mut self, other: &PaintVolume) {
        let o = &other.vertices;
        let v = &mut self.vertices;

        // left face: 0, 3, 4 (and 7)
        if o[0].x < v[0].x {
            let min_x = o[0].x;
            v[0].x = min_x;
            v[3].x = min_x;
            v[4].x = min_x;
        }

        // right face: 1 (and 2, 5, 6)
        if o[1].x > v[1].x {
            v[1].x = o[1].x;
        }

        // top face: 0, 1, 4 (and 5)
        if o[0].y < v[0].y {
            let min_y = o[0].y;
            v[0].y = min_y;
            v[1].y = min_y;
            v[4].y = min_y;
        }

        // bottom face: 3 (and 2, 6, 7)
        if o[3].y > v[3].y {
            v[3].y = o[3].y;
        }

        // front face: 0, 1, 3 (and 2)
        if o[0].z < v[0].z {
            let min_z = o[0].z;
            v[0].z = min_z;
            v[1].z = min_z;
            v[3].z = min_z;
        }

        // back face: 4 (and 5, 6, 7)
        if o[4].z > v[4].z {
            v[4].z = o[4].z;
        }

        let flat = v[4].z == v[0].z;
        self.flags.set(VolumeFlags::FLAT, flat);
    }
}

#[cfg(test)]
#[path = "union_tests.rs"]
mod tests;
