pub mod integrator;
pub mod kinematics;
pub mod rigid_body;
