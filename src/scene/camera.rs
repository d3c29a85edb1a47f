//! Camera
//!
//! Perspective camera looking down −z from a fixed position, and the
//! viewport it projects onto.

use glam::Vec3;

use super::params::SceneParams;

/// Output size in pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Viewport {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Width over height; 1.0 for a degenerate viewport
    pub fn aspect(&self) -> f32 {
        if self.height == 0 {
            1.0
        } else {
            self.width as f32 / self.height as f32
        }
    }
}

/// A projected point in pixel coordinates
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScreenPoint {
    pub x: f32,
    pub y: f32,
    /// Distance in front of the camera
    pub depth: f32,
}

/// Perspective camera
#[derive(Debug, Clone, PartialEq)]
pub struct PerspectiveCamera {
    /// Vertical field of view in degrees
    pub fov: f32,
    pub aspect: f32,
    pub near: f32,
    pub far: f32,
    pub position: Vec3,
}

impl PerspectiveCamera {
    pub fn new(params: &SceneParams, viewport: Viewport) -> Self {
        Self {
            fov: params.camera_fov,
            aspect: viewport.aspect(),
            near: params.camera_near,
            far: params.camera_far,
            position: Vec3::from(params.camera_position),
        }
    }

    /// Follow a viewport size change
    pub fn set_viewport(&mut self, viewport: Viewport) {
        self.aspect = viewport.aspect();
    }

    fn tan_half_fov(&self) -> f32 {
        (self.fov.to_radians() / 2.0).tan()
    }

    /// Project a world point to pixels; `None` outside the depth range
    pub fn project(&self, point: Vec3, viewport: Viewport) -> Option<ScreenPoint> {
        let view = point - self.position;
        let depth = -view.z;
        if depth < self.near || depth > self.far {
            return None;
        }

        let tan_half = self.tan_half_fov();
        let ndc_x = view.x / (depth * tan_half * self.aspect);
        let ndc_y = view.y / (depth * tan_half);

        Some(ScreenPoint {
            x: (ndc_x + 1.0) * 0.5 * viewport.width as f32,
            y: (1.0 - ndc_y) * 0.5 * viewport.height as f32,
            depth,
        })
    }

    /// Pixels per world unit at a given depth
    pub fn pixels_per_unit(&self, depth: f32, viewport: Viewport) -> f32 {
        viewport.height as f32 / (2.0 * depth * self.tan_half_fov())
    }
}
