/// Frustum: four side clipping planes for paint-volume culling.
///
/// Each plane is stored as a point on the plane plus an inward-pointing
/// normal. A point P is on the visible side when
/// `dot(normal, P - origin) >= 0`.
///
/// Only the four side planes are kept: near/far rejection is left to the
/// depth test, so a paint volume is never culled for being too close or too
/// far away.

use glam::{Mat4, Vec3};
use crate::volume::{CullResult, PaintVolume};

/// Frustum plane indices
pub const PLANE_LEFT: usize = 0;
pub const PLANE_RIGHT: usize = 1;
pub const PLANE_BOTTOM: usize = 2;
pub const PLANE_TOP: usize = 3;

/// A clipping plane in point/normal form
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Plane {
    /// Any point on the plane
    pub origin: Vec3,
    /// Normal pointing toward the visible half-space
    pub normal: Vec3,
}

impl Plane {
    pub fn new(origin: Vec3, normal: Vec3) -> Self {
        Self { origin, normal }
    }

    /// Signed distance of `point` scaled by the normal length.
    /// Negative means outside.
    #[inline]
    pub fn signed_distance(&self, point: Vec3) -> f32 {
        self.normal.dot(point - self.origin)
    }
}

/// Four side planes of a view frustum, in eye space
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Frustum {
    /// Frustum planes: left, right, bottom, top
    pub planes: [Plane; 4],
}

impl Frustum {
    pub fn from_planes(planes: [Plane; 4]) -> Self {
        Self { planes }
    }

    /// Derive the side planes from a projection matrix.
    ///
    /// The NDC rectangle edges are unprojected at two depths; each plane
    /// passes through the resulting points and is oriented so that the
    /// center of the view is on its positive side. Works for perspective and
    /// orthographic projections, with either clip-space depth convention.
    pub fn from_projection(projection: &Mat4) -> Self {
        let inverse = projection.inverse();

        // Both depths lie inside the [0, 1] and [-1, 1] NDC depth ranges
        const NEAR_Z: f32 = 0.0;
        const FAR_Z: f32 = 0.5;

        let unproject = |x: f32, y: f32, z: f32| inverse.project_point3(Vec3::new(x, y, z));
        let center = unproject(0.0, 0.0, NEAR_Z);

        // Edges as (start, end) NDC corners
        let edges = [
            ((-1.0, -1.0), (-1.0, 1.0)), // left
            ((1.0, 1.0), (1.0, -1.0)),   // right
            ((1.0, -1.0), (-1.0, -1.0)), // bottom
            ((-1.0, 1.0), (1.0, 1.0)),   // top
        ];

        let planes = edges.map(|((ax, ay), (bx, by))| {
            let a_near = unproject(ax, ay, NEAR_Z);
            let b_near = unproject(bx, by, NEAR_Z);
            let a_far = unproject(ax, ay, FAR_Z);

            let mut normal = (b_near - a_near).cross(a_far - a_near).normalize_or_zero();
            if normal.dot(center - a_near) < 0.0 {
                normal = -normal;
            }
            Plane::new(a_near, normal)
        });

        Self { planes }
    }

    /// Classify an eye-space paint volume against this frustum
    pub fn classify(&self, volume: &PaintVolume) -> CullResult {
        volume.cull(&self.planes)
    }
}

#[cfg(test)]
#[path = "frustum_tests.rs"]
mod tests;
