//! Double Helix
//!
//! Two mirrored strands sampled along a shared parameter, and the
//! artifact markers placed on strand A at a fixed stride.

use glam::Vec3;
use std::f32::consts::TAU;

use super::params::SceneParams;
use crate::content::{category, Event};

/// Decorative marker payload derived from an event
#[derive(Debug, Clone, PartialEq)]
pub struct Artifact {
    pub name: String,
    /// `#rrggbb` display color from the category table
    pub color: &'static str,
    pub emoji: String,
    pub category: String,
}

impl Artifact {
    pub fn from_event(event: &Event) -> Self {
        Self {
            name: event.title.clone(),
            color: category::color_for(&event.category),
            emoji: event.emoji.clone(),
            category: event.category.clone(),
        }
    }
}

/// First `max` events as artifacts, in list order
pub fn artifacts_from_events(events: &[Event], max: usize) -> Vec<Artifact> {
    events.iter().take(max).map(Artifact::from_event).collect()
}

/// Sampled strands; `strand_b[i]` is the point reflection of `strand_a[i]`
/// through the helix axis
#[derive(Debug, Clone, Default)]
pub struct Helix {
    pub strand_a: Vec<Vec3>,
    pub strand_b: Vec<Vec3>,
}

impl Helix {
    /// Sample both strands
    pub fn build(params: &SceneParams) -> Self {
        let count = params.helix_points;
        let mut strand_a = Vec::with_capacity(count);
        let mut strand_b = Vec::with_capacity(count);

        for i in 0..count {
            let (a, b) = sample(params, i);
            strand_a.push(a);
            strand_b.push(b);
        }

        Self { strand_a, strand_b }
    }

    pub fn len(&self) -> usize {
        self.strand_a.len()
    }

    pub fn is_empty(&self) -> bool {
        self.strand_a.is_empty()
    }
}

/// Position of sample `i` on both strands
pub fn sample(params: &SceneParams, i: usize) -> (Vec3, Vec3) {
    let fraction = i as f32 / params.helix_points as f32;
    let t = fraction * TAU * params.helix_turns;
    let y = fraction * params.helix_height - params.helix_height / 2.0;
    let (sin, cos) = t.sin_cos();
    let r = params.helix_radius;

    (Vec3::new(r * cos, y, r * sin), Vec3::new(-r * cos, y, -r * sin))
}

/// A sphere on strand A carrying an artifact
#[derive(Debug, Clone, PartialEq)]
pub struct Marker {
    /// Helix sample index the marker sits on
    pub sample: usize,
    pub position: Vec3,
    pub artifact: Artifact,
}

/// Place one marker every `stride` samples, cycling through `artifacts`.
///
/// Yields `ceil(len / stride)` markers, or none when there are no
/// artifacts (or the stride is zero).
pub fn place_markers(helix: &Helix, artifacts: &[Artifact], stride: usize) -> Vec<Marker> {
    if artifacts.is_empty() || stride == 0 {
        return Vec::new();
    }

    helix
        .strand_a
        .iter()
        .enumerate()
        .step_by(stride)
        .map(|(i, &position)| Marker {
            sample: i,
            position,
            artifact: artifacts[(i / stride) % artifacts.len()].clone(),
        })
        .collect()
}
