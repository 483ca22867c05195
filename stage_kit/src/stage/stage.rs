/// Stage: passive description of the root of a scene.
///
/// Holds the stage root node, the stage-to-eye transform, the projection
/// and the viewport. Node modelview chains stop at the stage root; the
/// `eye_transform` is the one extra step from stage coordinates to eye
/// coordinates and must be applied explicitly.

use glam::{Mat4, Vec3};
use crate::scene::NodeKey;
use crate::volume::fully_transform_point;
use super::frustum::Frustum;

/// Default vertical field of view, in degrees
pub const DEFAULT_FOVY: f32 = 60.0;
/// Default near clipping distance
pub const DEFAULT_Z_NEAR: f32 = 0.1;
/// Default far clipping distance
pub const DEFAULT_Z_FAR: f32 = 100.0;
/// Distance from the eye of the plane where one stage unit is one pixel
pub const DEFAULT_Z_2D: f32 = 50.0;

/// Viewport rectangle (pixels) and depth range
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub min_depth: f32,
    pub max_depth: f32,
}

impl Viewport {
    /// Viewport with the standard `[0, 1]` depth range
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self { x, y, width, height, min_depth: 0.0, max_depth: 1.0 }
    }
}

/// Stage description. Computes nothing except its cached clip frustum.
#[derive(Debug, Clone)]
pub struct Stage {
    root: NodeKey,
    eye_transform: Mat4,
    projection: Mat4,
    viewport: Viewport,
    frustum: Frustum,
}

impl Stage {
    /// Create a stage with an identity stage-to-eye transform
    pub fn new(root: NodeKey, projection: Mat4, viewport: Viewport) -> Self {
        Self {
            root,
            eye_transform: Mat4::IDENTITY,
            projection,
            viewport,
            frustum: Frustum::from_projection(&projection),
        }
    }

    /// Create a `width` × `height` stage with the default perspective.
    ///
    /// Stage coordinates are pixels with y growing downward: a node at
    /// stage position (x, y) with z = 0 lands on window pixel (x, y).
    pub fn with_default_perspective(root: NodeKey, width: f32, height: f32) -> Self {
        let aspect = width / height;
        let projection = Mat4::perspective_rh_gl(
            DEFAULT_FOVY.to_radians(),
            aspect,
            DEFAULT_Z_NEAR,
            DEFAULT_Z_FAR,
        );

        let mut stage = Self::new(root, projection, Viewport::new(0.0, 0.0, width, height));
        stage.eye_transform = view_2d_in_perspective(
            DEFAULT_FOVY, aspect, DEFAULT_Z_NEAR, DEFAULT_Z_2D, width, height,
        );
        stage
    }

    // ===== GETTERS =====

    pub fn root(&self) -> NodeKey {
        self.root
    }

    /// Stage-to-eye transform
    pub fn eye_transform(&self) -> &Mat4 {
        &self.eye_transform
    }

    pub fn projection(&self) -> &Mat4 {
        &self.projection
    }

    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    /// Eye-space side planes derived from the projection
    pub fn clip_frustum(&self) -> &Frustum {
        &self.frustum
    }

    /// Map a stage-space point to window coordinates
    pub fn project_point(&self, point: Vec3) -> Vec3 {
        let mvp = self.projection * self.eye_transform;
        fully_transform_point(&mvp, &self.viewport, point)
    }

    // ===== SETTERS =====

    pub fn set_eye_transform(&mut self, matrix: Mat4) {
        self.eye_transform = matrix;
    }

    /// Set the projection; the clip frustum is rebuilt from it
    pub fn set_projection(&mut self, matrix: Mat4) {
        self.projection = matrix;
        self.frustum = Frustum::from_projection(&matrix);
    }

    pub fn set_viewport(&mut self, viewport: Viewport) {
        self.viewport = viewport;
    }
}

/// Eye transform placing a `width_2d` × `height_2d` pixel plane at
/// distance `z_2d` so that it exactly fills a perspective frustum.
///
/// The y axis is flipped so stage coordinates grow downward.
pub fn view_2d_in_perspective(
    fovy_degrees: f32,
    aspect: f32,
    z_near: f32,
    z_2d: f32,
    width_2d: f32,
    height_2d: f32,
) -> Mat4 {
    let top = z_near * (fovy_degrees.to_radians() * 0.5).tan();
    let right = top * aspect;

    let left_2d = -right / z_near * z_2d;
    let right_2d = right / z_near * z_2d;
    let bottom_2d = -top / z_near * z_2d;
    let top_2d = top / z_near * z_2d;

    let width_scale = (right_2d - left_2d) / width_2d;
    let height_scale = (top_2d - bottom_2d) / height_2d;

    Mat4::from_translation(Vec3::new(left_2d, top_2d, -z_2d))
        * Mat4::from_scale(Vec3::new(width_scale, -height_scale, width_scale))
}

#[cfg(test)]
#[path = "stage_tests.rs"]
mod tests;
