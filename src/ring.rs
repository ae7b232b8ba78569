//! Progress ring geometry
//!
//! The ring is sampled on a unit circle with y pointing up. The filled arc
//! starts at 12 o'clock and runs clockwise for `progress` of a full turn; the
//! rest of the ring is the background track.

use std::f64::consts::PI;

const OUTER_RADIUS: f64 = 1.0;
const INNER_RADIUS: f64 = 0.8;
const RADIAL_STEPS: usize = 4;

/// Points of the ring split into the filled arc and the background track
#[derive(Debug, Default, Clone, PartialEq)]
pub struct RingArcs {
    pub filled: Vec<(f64, f64)>,
    pub track: Vec<(f64, f64)>,
}

#[derive(Debug, Clone, Copy)]
pub struct Ring {
    samples: usize,
}

impl Ring {
    /// `samples` is the number of angular steps around the circle
    pub fn new(samples: usize) -> Self {
        Self {
            samples: samples.max(1),
        }
    }

    pub fn arcs(&self, progress: f64) -> RingArcs {
        let progress = if progress.is_nan() {
            0.0
        } else {
            progress.clamp(0.0, 1.0)
        };

        let mut arcs = RingArcs::default();
        for step in 0..self.samples {
            let fraction = step as f64 / self.samples as f64;
            let angle = fraction * 2.0 * PI;
            let target = if fraction < progress {
                &mut arcs.filled
            } else {
                &mut arcs.track
            };
            for r in 0..RADIAL_STEPS {
                let radius = INNER_RADIUS
                    + (OUTER_RADIUS - INNER_RADIUS) * r as f64 / (RADIAL_STEPS - 1) as f64;
                // Clockwise from the top: x follows sin, y follows cos
                target.push((radius * angle.sin(), radius * angle.cos()));
            }
        }
        arcs
    }
}
