//! Starfield
//!
//! Random point cloud scattered uniformly in a cube centred on the origin.

use glam::Vec3;
use rand::Rng;

/// Static star positions; rotation is applied at projection time
#[derive(Debug, Clone, Default)]
pub struct Starfield {
    pub points: Vec<Vec3>,
}

impl Starfield {
    /// Scatter `count` points in a cube of side `spread`.
    ///
    /// A spread that is not a positive finite number collapses every star
    /// onto the origin.
    pub fn generate<R: Rng>(count: usize, spread: f32, rng: &mut R) -> Self {
        let half = spread / 2.0;
        let mut coord = || {
            if half.is_finite() && half > 0.0 {
                rng.gen_range(-half..half)
            } else {
                0.0
            }
        };

        let points = (0..count)
            .map(|_| {
                let x = coord();
                let y = coord();
                let z = coord();
                Vec3::new(x, y, z)
            })
            .collect();

        Self { points }
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}
