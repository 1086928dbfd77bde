pub mod disturbance;
pub mod scenario;
