pub mod attitude_system;
pub mod constants;
pub mod control;
pub mod errors;
pub mod orbit_system;
pub mod simulation;
pub mod telemetry_system;
pub mod utils;

pub use constants::*;
pub use errors::SimulationError;

// Re-export commonly used items from attitude_system
pub use attitude_system::integrator::rk4_step;
pub use attitude_system::kinematics::differential_kinematics;
pub use attitude_system::rigid_body::RigidBodyModel;

// Re-export commonly used items from orbit_system
pub use orbit_system::circular_orbit::{CircularOrbit, PeriodUnit};
pub use orbit_system::orbital_elements::OrbitalElements;
pub use orbit_system::transforms::{
    eci_to_lvlh, eci_to_orbital_plane, orbital_plane_to_radial_along_track,
    radial_along_track_to_lvlh,
};

// Re-export commonly used items from control and simulation
pub use control::disturbance::{
    ConstantTorque, DisturbanceConfig, DisturbanceSource, NoDisturbance, RandomTorque, TorqueFn,
};
pub use control::scenario::{Scenario, ScenarioConfig};
pub use simulation::driver::{
    run_simulation, InitialState, NormPolicy, Simulation, SimulationSettings,
};
pub use simulation::sweep::{run_sweep, SweepCase};

// Re-export commonly used items from telemetry_system
pub use telemetry_system::telemetry::Telemetry;
pub use telemetry_system::timeline::{Timeline, TimelineSample};

// Re-export commonly used utilities
pub use utils::frame_axes::{BodyFrame, FrameAxes, ReferenceFrame};
pub use utils::frame_math::{check_quaternion_norm, quaternion_to_dcm, skew_symmetric};
