//! Scene Model
//!
//! World-space contents of the background (stars, strands, markers) plus
//! the per-frame rotation state, and the projection of all of it into a
//! screen-space draw list.

use glam::{Quat, Vec3};
use rand::Rng;

use super::camera::{PerspectiveCamera, ScreenPoint, Viewport};
use super::helix::{place_markers, Artifact, Helix, Marker};
use super::params::SceneParams;
use super::starfield::Starfield;

/// The whole background scene
#[derive(Debug, Clone)]
pub struct Scene {
    pub starfield: Starfield,
    pub helix: Helix,
    pub markers: Vec<Marker>,
    star_size: f32,
    marker_radius: f32,
    scene_spin: f32,
    star_spin: f32,
    rotation: f32,
    star_rotation: f32,
    frames: u64,
}

impl Scene {
    /// Generate stars, strands and markers for a list of artifacts
    pub fn build<R: Rng>(params: &SceneParams, artifacts: &[Artifact], rng: &mut R) -> Self {
        let starfield = Starfield::generate(params.star_count, params.star_spread, rng);
        let helix = Helix::build(params);
        let markers = place_markers(&helix, artifacts, params.marker_stride);

        Self {
            starfield,
            helix,
            markers,
            star_size: params.star_size,
            marker_radius: params.marker_radius,
            scene_spin: params.scene_spin,
            star_spin: params.star_spin,
            rotation: 0.0,
            star_rotation: 0.0,
            frames: 0,
        }
    }

    /// Step the animation by one frame
    pub fn advance(&mut self) {
        self.rotation += self.scene_spin;
        self.star_rotation += self.star_spin;
        self.frames += 1;
    }

    /// Scene rotation about y, radians
    pub fn rotation(&self) -> f32 {
        self.rotation
    }

    /// Starfield rotation relative to the scene, radians
    pub fn star_rotation(&self) -> f32 {
        self.star_rotation
    }

    /// Frames advanced so far
    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Project the current state for one redraw
    pub fn frame(&self, camera: &PerspectiveCamera, viewport: Viewport) -> SceneFrame {
        let scene_rot = Quat::from_rotation_y(self.rotation);
        // Stars are children of the rotating scene
        let star_rot = Quat::from_rotation_y(self.rotation + self.star_rotation);

        let project = |rot: Quat, p: Vec3| camera.project(rot * p, viewport);

        let stars = self
            .starfield
            .points
            .iter()
            .filter_map(|&p| project(star_rot, p))
            .map(|point| StarSprite {
                point,
                radius: (self.star_size * camera.pixels_per_unit(point.depth, viewport)).max(0.5),
            })
            .collect();

        let strand = |points: &[Vec3]| -> Vec<ScreenPoint> {
            points.iter().filter_map(|&p| project(scene_rot, p)).collect()
        };
        let strands = [strand(&self.helix.strand_a), strand(&self.helix.strand_b)];

        let mut markers: Vec<MarkerSprite> = self
            .markers
            .iter()
            .filter_map(|m| {
                project(scene_rot, m.position).map(|point| MarkerSprite {
                    point,
                    radius: self.marker_radius * camera.pixels_per_unit(point.depth, viewport),
                    color: m.artifact.color,
                    emoji: m.artifact.emoji.clone(),
                })
            })
            .collect();

        // Painter's order: far markers first
        markers.sort_by(|a, b| b.point.depth.total_cmp(&a.point.depth));

        SceneFrame {
            viewport,
            stars,
            strands,
            markers,
        }
    }
}

/// A projected star
#[derive(Debug, Clone, PartialEq)]
pub struct StarSprite {
    pub point: ScreenPoint,
    /// Radius in pixels
    pub radius: f32,
}

/// A projected marker sphere
#[derive(Debug, Clone, PartialEq)]
pub struct MarkerSprite {
    pub point: ScreenPoint,
    /// Radius in pixels
    pub radius: f32,
    pub color: &'static str,
    pub emoji: String,
}

/// Screen-space draw list for one frame
#[derive(Debug, Clone, PartialEq)]
pub struct SceneFrame {
    pub viewport: Viewport,
    pub stars: Vec<StarSprite>,
    /// Visible points of strand A and strand B, in sample order
    pub strands: [Vec<ScreenPoint>; 2],
    /// Markers sorted far to near
    pub markers: Vec<MarkerSprite>,
}
