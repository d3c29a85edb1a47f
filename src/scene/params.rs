//! Scene Parameters
//!
//! Every constant of the background scene. Defaults reproduce the
//! published site; the `[scene]` config table can override any of them.

use serde::Deserialize;

/// Tunables for the starfield, helix, markers, camera and animation
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct SceneParams {
    /// Points in the starfield
    pub star_count: usize,
    /// Side of the cube the stars are scattered in
    pub star_spread: f32,
    /// Star size in world units
    pub star_size: f32,

    /// Full turns of each helix strand
    pub helix_turns: f32,
    /// Samples per strand
    pub helix_points: usize,
    pub helix_radius: f32,
    pub helix_height: f32,

    /// A marker is placed every `marker_stride` samples
    pub marker_stride: usize,
    /// At most this many events become artifacts
    pub max_artifacts: usize,
    pub marker_radius: f32,

    /// Scene rotation per frame (radians, about y)
    pub scene_spin: f32,
    /// Extra starfield rotation per frame (radians, about y)
    pub star_spin: f32,

    /// Vertical field of view in degrees
    pub camera_fov: f32,
    pub camera_near: f32,
    pub camera_far: f32,
    pub camera_position: [f32; 3],

    /// Fixed starfield seed; the host picks one when unset
    pub seed: Option<u64>,
}

impl Default for SceneParams {
    fn default() -> Self {
        Self {
            star_count: 1500,
            star_spread: 60.0,
            star_size: 0.01,
            helix_turns: 10.0,
            helix_points: 400,
            helix_radius: 1.2,
            helix_height: 10.0,
            marker_stride: 35,
            max_artifacts: 12,
            marker_radius: 0.1,
            scene_spin: 0.01,
            star_spin: 0.001,
            camera_fov: 75.0,
            camera_near: 0.1,
            camera_far: 1000.0,
            camera_position: [0.0, 1.0, 8.0],
            seed: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_override_keeps_defaults() {
        let params: SceneParams = serde_json::from_str(r#"{"star_count": 10, "seed": 7}"#).unwrap();
        assert_eq!(params.star_count, 10);
        assert_eq!(params.seed, Some(7));
        assert_eq!(params.helix_points, 400);
        assert_eq!(params.marker_stride, 35);
    }
}
