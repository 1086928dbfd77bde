// Central Body Constants
pub const EARTH_RADIUS: f64 = 6_378_000.0; // meters
pub const EARTH_GRAVITATIONAL_PARAMETER: f64 = 3.986e14; // m³/s²

// Quaternion Constraints
pub const QUATERNION_NORM_SQUARED_MIN: f64 = 0.995;
pub const QUATERNION_NORM_SQUARED_MAX: f64 = 1.005;

// Inertia Validation
pub const INERTIA_SYMMETRY_TOLERANCE: f64 = 1e-9; // relative to the largest entry
pub const INERTIA_SINGULARITY_TOLERANCE: f64 = 1e-12; // |det| relative to the largest entry cubed

// Reference Frame Validation
pub const ORTHONORMALITY_TOLERANCE: f64 = 1e-6;

// Simulation Parameters
pub const DEFAULT_DURATION: f64 = 1.0; // s
pub const DEFAULT_SAMPLING_PERIOD: f64 = 0.1; // s
pub const MAX_SAMPLE_COUNT: usize = 10_000_000; // timeline rows per run

// Nominal Spacecraft
pub const DEFAULT_INERTIA_DIAGONAL: [f64; 3] = [1.0, 2.0, 3.0]; // kg⋅m²
pub const DEFAULT_ANGULAR_VELOCITY: [f64; 3] = [0.0, 0.0, 0.1]; // rad/s
pub const DEFAULT_QUATERNION: [f64; 4] = [0.0, 0.0, 0.0, 1.0]; // scalar-last
