use rayon::prelude::*;

use super::driver::{propagate, InitialState, SimulationSettings};
use crate::attitude_system::rigid_body::RigidBodyModel;
use crate::control::disturbance::DisturbanceSource;
use crate::errors::SimulationError;
use crate::telemetry_system::timeline::Timeline;
use crate::utils::frame_axes::ReferenceFrame;

/// One independent run of a parameter sweep.
pub struct SweepCase {
    pub model: RigidBodyModel,
    pub reference_frame: ReferenceFrame,
    pub initial_state: InitialState,
    pub disturbance: Box<dyn DisturbanceSource + Send>,
}

/// Runs every case in parallel with shared timing settings.
///
/// Results are returned in the order of `cases`; a failing case does not
/// affect the others.
pub fn run_sweep(
    cases: Vec<SweepCase>,
    settings: &SimulationSettings,
) -> Vec<Result<Timeline, SimulationError>> {
    cases
        .into_par_iter()
        .map(|mut case| {
            propagate(
                &case.model,
                &case.reference_frame,
                settings,
                &case.initial_state,
                &mut case.disturbance,
            )
        })
        .collect()
}
