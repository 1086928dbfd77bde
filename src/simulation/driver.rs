use nalgebra::{Vector3, Vector4};
use serde::Deserialize;
use tracing::{info, trace, warn};

use crate::attitude_system::integrator::rk4_step;
use crate::attitude_system::kinematics::differential_kinematics;
use crate::attitude_system::rigid_body::RigidBodyModel;
use crate::constants::MAX_SAMPLE_COUNT;
use crate::control::disturbance::DisturbanceSource;
use crate::errors::SimulationError;
use crate::telemetry_system::timeline::Timeline;
use crate::utils::frame_axes::ReferenceFrame;
use crate::utils::frame_math::{check_quaternion_norm, quaternion_to_dcm};

/// State seeding row 0 of the timeline.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InitialState {
    /// Body rate relative to the inertial frame, rad/s.
    pub angular_velocity: Vector3<f64>,
    /// Scalar-last attitude quaternion.
    pub quaternion: Vector4<f64>,
}

impl InitialState {
    pub fn new(angular_velocity: Vector3<f64>, quaternion: Vector4<f64>) -> Self {
        InitialState {
            angular_velocity,
            quaternion,
        }
    }
}

/// What to do when a quaternion leaves the allowed norm band.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NormPolicy {
    /// Log a warning and keep propagating.
    #[default]
    Advisory,
    /// Abort the run.
    Strict,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SimulationSettings {
    duration: f64,
    sampling_period: f64,
    norm_policy: NormPolicy,
}

impl SimulationSettings {
    pub fn new(duration: f64, sampling_period: f64) -> Result<Self, SimulationError> {
        if !(duration.is_finite() && duration >= 0.0) {
            return Err(SimulationError::ConfigurationError(format!(
                "duration must be non-negative, got {duration}"
            )));
        }
        if !(sampling_period.is_finite() && sampling_period > 0.0) {
            return Err(SimulationError::ConfigurationError(format!(
                "sampling period must be positive, got {sampling_period}"
            )));
        }
        let steps = (duration / sampling_period).floor();
        if !steps.is_finite() || steps >= MAX_SAMPLE_COUNT as f64 {
            return Err(SimulationError::ConfigurationError(format!(
                "duration {duration} with sampling period {sampling_period} exceeds \
                 {MAX_SAMPLE_COUNT} samples"
            )));
        }
        Ok(SimulationSettings {
            duration,
            sampling_period,
            norm_policy: NormPolicy::default(),
        })
    }

    pub fn with_norm_policy(mut self, norm_policy: NormPolicy) -> Self {
        self.norm_policy = norm_policy;
        self
    }

    pub fn duration(&self) -> f64 {
        self.duration
    }

    pub fn sampling_period(&self) -> f64 {
        self.sampling_period
    }

    pub fn norm_policy(&self) -> NormPolicy {
        self.norm_policy
    }

    /// `floor(duration / sampling_period) + 1`
    pub fn sample_count(&self) -> usize {
        (self.duration / self.sampling_period).floor() as usize + 1
    }
}

/// A configured spacecraft ready to be propagated.
#[derive(Debug, Clone)]
pub struct Simulation {
    model: RigidBodyModel,
    reference_frame: ReferenceFrame,
    settings: SimulationSettings,
}

impl Simulation {
    pub fn new(
        model: RigidBodyModel,
        reference_frame: ReferenceFrame,
        settings: SimulationSettings,
    ) -> Self {
        Simulation {
            model,
            reference_frame,
            settings,
        }
    }

    pub fn model(&self) -> &RigidBodyModel {
        &self.model
    }

    pub fn reference_frame(&self) -> &ReferenceFrame {
        &self.reference_frame
    }

    pub fn settings(&self) -> &SimulationSettings {
        &self.settings
    }

    pub fn run<D>(
        &self,
        initial_state: &InitialState,
        disturbance: &mut D,
    ) -> Result<Timeline, SimulationError>
    where
        D: DisturbanceSource + ?Sized,
    {
        propagate(
            &self.model,
            &self.reference_frame,
            &self.settings,
            initial_state,
            disturbance,
        )
    }
}

/// Propagates `initial_state` for `duration` seconds with a fixed step of
/// `sampling_period`, warning on (but tolerating) quaternion norm drift.
pub fn run_simulation<D>(
    model: &RigidBodyModel,
    reference_frame: &ReferenceFrame,
    initial_state: &InitialState,
    disturbance: &mut D,
    duration: f64,
    sampling_period: f64,
) -> Result<Timeline, SimulationError>
where
    D: DisturbanceSource + ?Sized,
{
    let settings = SimulationSettings::new(duration, sampling_period)?;
    propagate(model, reference_frame, &settings, initial_state, disturbance)
}

pub(crate) fn propagate<D>(
    model: &RigidBodyModel,
    reference_frame: &ReferenceFrame,
    settings: &SimulationSettings,
    initial_state: &InitialState,
    disturbance: &mut D,
) -> Result<Timeline, SimulationError>
where
    D: DisturbanceSource + ?Sized,
{
    let sample_count = settings.sample_count();
    let h = settings.sampling_period();
    let mut timeline = Timeline::new(initial_state, h, sample_count);

    info!(
        samples = sample_count,
        step = h,
        duration = settings.duration(),
        "Starting attitude propagation"
    );

    for k in 0..sample_count {
        let sample = &timeline.samples()[k];
        let (time, omega, q) = (sample.time, sample.angular_velocity, sample.quaternion);

        if let Err(e) = check_quaternion_norm(&q) {
            match settings.norm_policy() {
                NormPolicy::Advisory => warn!(
                    step = k,
                    time,
                    norm_squared = q.norm_squared(),
                    "Quaternion norm outside tolerance band"
                ),
                NormPolicy::Strict => return Err(e),
            }
        }

        let body_frame = reference_frame.rotated_by(&quaternion_to_dcm(&q));
        timeline.record_body_frame(k, body_frame);

        let torque = disturbance.torque(time);

        if k + 1 < sample_count {
            let c = *body_frame.matrix();
            let next_omega = rk4_step(|w| model.differential_dynamics(w, &c, &torque), &omega, h);
            // Quaternion step uses the rate sampled at the start of the step.
            let next_q = rk4_step(|q| differential_kinematics(&omega, q), &q, h);

            trace!(step = k + 1, omega = %next_omega.transpose(), q = %next_q.transpose());
            timeline.record_state(k + 1, next_omega, next_q);
        }
    }

    info!(samples = timeline.len(), "Attitude propagation complete");
    Ok(timeline)
}
