use nalgebra::{Matrix3, Vector3};

use crate::constants::{INERTIA_SINGULARITY_TOLERANCE, INERTIA_SYMMETRY_TOLERANCE};
use crate::errors::SimulationError;
use crate::utils::frame_math::skew_symmetric;

/// Rigid spacecraft described by its inertia tensor.
#[derive(Debug, Clone, PartialEq)]
pub struct RigidBodyModel {
    inertia: Matrix3<f64>,
    inverse_inertia: Matrix3<f64>,
}

impl RigidBodyModel {
    /// Builds a model from a symmetric positive-definite inertia tensor (kg⋅m²).
    pub fn new(inertia: Matrix3<f64>) -> Result<Self, SimulationError> {
        if inertia.iter().any(|v| !v.is_finite()) {
            return Err(SimulationError::ConfigurationError(
                "inertia tensor contains non-finite entries".to_string(),
            ));
        }

        let scale = inertia.amax().max(f64::MIN_POSITIVE);
        let asymmetry = (inertia - inertia.transpose()).amax();
        if asymmetry > INERTIA_SYMMETRY_TOLERANCE * scale {
            return Err(SimulationError::ConfigurationError(format!(
                "inertia tensor is not symmetric (asymmetry {asymmetry:.3e})"
            )));
        }

        if inertia.determinant().abs() <= INERTIA_SINGULARITY_TOLERANCE * scale.powi(3) {
            return Err(SimulationError::ConfigurationError(
                "inertia tensor is singular".to_string(),
            ));
        }

        if inertia.cholesky().is_none() {
            return Err(SimulationError::ConfigurationError(
                "inertia tensor is not positive definite".to_string(),
            ));
        }

        let inverse_inertia = inertia.try_inverse().ok_or_else(|| {
            SimulationError::ConfigurationError("inertia tensor is singular".to_string())
        })?;

        Ok(RigidBodyModel {
            inertia,
            inverse_inertia,
        })
    }

    pub fn from_principal_moments(ixx: f64, iyy: f64, izz: f64) -> Result<Self, SimulationError> {
        Self::new(Matrix3::from_diagonal(&Vector3::new(ixx, iyy, izz)))
    }

    pub fn inertia(&self) -> &Matrix3<f64> {
        &self.inertia
    }

    pub fn inverse_inertia(&self) -> &Matrix3<f64> {
        &self.inverse_inertia
    }

    /// Time derivative of the body angular velocity.
    ///
    /// `body_frame` holds the current body axes (inertial coordinates) as
    /// columns and `torque` is the disturbance torque. Evaluates
    /// `I⁻¹ (τ − Cᵀ I [ω]× C Cᵀ ω)` with the products taken in that order.
    pub fn differential_dynamics(
        &self,
        angular_velocity: &Vector3<f64>,
        body_frame: &Matrix3<f64>,
        torque: &Vector3<f64>,
    ) -> Vector3<f64> {
        let c = body_frame;
        let gyroscopic = c.transpose()
            * self.inertia
            * skew_symmetric(angular_velocity)
            * c
            * c.transpose()
            * angular_velocity;
        self.inverse_inertia * (torque - gyroscopic)
    }
}
