use nalgebra::{Vector3, Vector4};

use crate::simulation::driver::InitialState;
use crate::utils::frame_axes::BodyFrame;

#[derive(Debug, Clone, PartialEq)]
pub struct TimelineSample {
    pub time: f64,
    pub angular_velocity: Vector3<f64>,
    pub quaternion: Vector4<f64>,
    /// Filled in by the driver when the sample is reached.
    pub body_frame: Option<BodyFrame>,
}

/// Fixed-length record of a run, one row per sampling instant.
#[derive(Debug, Clone, PartialEq)]
pub struct Timeline {
    sampling_period: f64,
    samples: Vec<TimelineSample>,
}

impl Timeline {
    /// Allocates `sample_count` rows at times `k * sampling_period`, with row 0
    /// seeded from `initial_state`.
    pub fn new(initial_state: &InitialState, sampling_period: f64, sample_count: usize) -> Self {
        let samples = (0..sample_count)
            .map(|k| {
                let (angular_velocity, quaternion) = if k == 0 {
                    (initial_state.angular_velocity, initial_state.quaternion)
                } else {
                    (Vector3::zeros(), Vector4::zeros())
                };
                TimelineSample {
                    time: k as f64 * sampling_period,
                    angular_velocity,
                    quaternion,
                    body_frame: None,
                }
            })
            .collect();

        Timeline {
            sampling_period,
            samples,
        }
    }

    pub(crate) fn record_body_frame(&mut self, index: usize, body_frame: BodyFrame) {
        self.samples[index].body_frame = Some(body_frame);
    }

    pub(crate) fn record_state(
        &mut self,
        index: usize,
        angular_velocity: Vector3<f64>,
        quaternion: Vector4<f64>,
    ) {
        let sample = &mut self.samples[index];
        sample.angular_velocity = angular_velocity;
        sample.quaternion = quaternion;
    }

    pub fn sampling_period(&self) -> f64 {
        self.sampling_period
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn samples(&self) -> &[TimelineSample] {
        &self.samples
    }

    pub fn get(&self, index: usize) -> Option<&TimelineSample> {
        self.samples.get(index)
    }

    pub fn last(&self) -> Option<&TimelineSample> {
        self.samples.last()
    }

    pub fn times(&self) -> impl Iterator<Item = f64> + '_ {
        self.samples.iter().map(|s| s.time)
    }

    /// Smallest and largest quaternion norm over the run.
    pub fn quaternion_norm_bounds(&self) -> Option<(f64, f64)> {
        self.samples.iter().map(|s| s.quaternion.norm()).fold(None, |acc, n| {
            Some(match acc {
                None => (n, n),
                Some((lo, hi)) => (lo.min(n), hi.max(n)),
            })
        })
    }
}
