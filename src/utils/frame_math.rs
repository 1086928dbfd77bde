use nalgebra::{Matrix3, Vector3, Vector4};

use crate::constants::{QUATERNION_NORM_SQUARED_MAX, QUATERNION_NORM_SQUARED_MIN};
use crate::errors::SimulationError;

/// Cross-product matrix of `v`, so that `skew_symmetric(v) * x == v.cross(x)`.
pub fn skew_symmetric(v: &Vector3<f64>) -> Matrix3<f64> {
    Matrix3::new(
        0.0, -v.z, v.y, //
        v.z, 0.0, -v.x, //
        -v.y, v.x, 0.0,
    )
}

/// Direction cosine matrix taking inertial coordinates into body coordinates.
///
/// `q` is scalar-last (`q[3]` is the scalar part). The quaternion is used as
/// given; callers that care about its norm should run
/// [`check_quaternion_norm`] first.
pub fn quaternion_to_dcm(q: &Vector4<f64>) -> Matrix3<f64> {
    let (q1, q2, q3, q4) = (q[0], q[1], q[2], q[3]);

    Matrix3::new(
        q1 * q1 - q2 * q2 - q3 * q3 + q4 * q4,
        2.0 * (q1 * q2 + q3 * q4),
        2.0 * (q1 * q3 - q2 * q4),
        2.0 * (q1 * q2 - q3 * q4),
        -q1 * q1 + q2 * q2 - q3 * q3 + q4 * q4,
        2.0 * (q2 * q3 + q1 * q4),
        2.0 * (q1 * q3 + q2 * q4),
        2.0 * (q2 * q3 - q1 * q4),
        -q1 * q1 - q2 * q2 + q3 * q3 + q4 * q4,
    )
}

pub fn check_quaternion_norm(q: &Vector4<f64>) -> Result<(), SimulationError> {
    let norm_squared = q.norm_squared();
    if (QUATERNION_NORM_SQUARED_MIN..=QUATERNION_NORM_SQUARED_MAX).contains(&norm_squared) {
        Ok(())
    } else {
        Err(SimulationError::NumericalConstraint(format!(
            "quaternion norm squared {norm_squared:.6} outside [{QUATERNION_NORM_SQUARED_MIN}, {QUATERNION_NORM_SQUARED_MAX}]"
        )))
    }
}

/// Right-handed frame rotation about the x axis by `angle` radians.
pub fn frame_rotation_x(angle: f64) -> Matrix3<f64> {
    let (s, c) = angle.sin_cos();
    Matrix3::new(
        1.0, 0.0, 0.0, //
        0.0, c, s, //
        0.0, -s, c,
    )
}

/// Right-handed frame rotation about the z axis by `angle` radians.
pub fn frame_rotation_z(angle: f64) -> Matrix3<f64> {
    let (s, c) = angle.sin_cos();
    Matrix3::new(
        c, s, 0.0, //
        -s, c, 0.0, //
        0.0, 0.0, 1.0,
    )
}
