use nalgebra::{Matrix3, Vector3};

use crate::constants::ORTHONORMALITY_TOLERANCE;
use crate::errors::SimulationError;

/// Ordered triple of unit axis vectors expressed in inertial coordinates.
///
/// The axes are stored as the columns of a 3×3 matrix.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameAxes {
    matrix: Matrix3<f64>,
}

/// Body axes of the spacecraft at one instant.
pub type BodyFrame = FrameAxes;

/// Fixed axes the attitude quaternion is measured against.
pub type ReferenceFrame = FrameAxes;

impl FrameAxes {
    pub fn new(
        x_axis: Vector3<f64>,
        y_axis: Vector3<f64>,
        z_axis: Vector3<f64>,
    ) -> Result<Self, SimulationError> {
        let matrix = Matrix3::from_columns(&[x_axis, y_axis, z_axis]);
        let deviation = (matrix.transpose() * matrix - Matrix3::identity()).amax();
        if deviation > ORTHONORMALITY_TOLERANCE {
            return Err(SimulationError::ConfigurationError(format!(
                "frame axes are not orthonormal (deviation {deviation:.3e})"
            )));
        }
        Ok(FrameAxes { matrix })
    }

    /// The inertial frame itself.
    pub fn inertial() -> Self {
        FrameAxes {
            matrix: Matrix3::identity(),
        }
    }

    /// Axes of the frame that `rotation` maps inertial coordinates into,
    /// i.e. the rows of `rotation`.
    pub fn from_rotation(rotation: &Matrix3<f64>) -> Result<Self, SimulationError> {
        let axes = rotation.transpose();
        Self::new(
            axes.column(0).into_owned(),
            axes.column(1).into_owned(),
            axes.column(2).into_owned(),
        )
    }

    /// Frame reached from `self` through the direction cosine matrix `dcm`
    /// (which maps `self` coordinates into the new frame's coordinates).
    ///
    /// The new axes are the rows of `dcm` resolved in `self`, so the result is
    /// `self · dcmᵀ`, not `dcm · self`.
    pub fn rotated_by(&self, dcm: &Matrix3<f64>) -> Self {
        FrameAxes {
            matrix: self.matrix * dcm.transpose(),
        }
    }

    pub fn x_axis(&self) -> Vector3<f64> {
        self.matrix.column(0).into_owned()
    }

    pub fn y_axis(&self) -> Vector3<f64> {
        self.matrix.column(1).into_owned()
    }

    pub fn z_axis(&self) -> Vector3<f64> {
        self.matrix.column(2).into_owned()
    }

    pub fn axes(&self) -> [Vector3<f64>; 3] {
        [self.x_axis(), self.y_axis(), self.z_axis()]
    }

    /// Matrix whose columns are the axes.
    pub fn matrix(&self) -> &Matrix3<f64> {
        &self.matrix
    }
}

impl Default for FrameAxes {
    fn default() -> Self {
        Self::inertial()
    }
}
