use nalgebra::{Matrix4, Vector3, Vector4};

/// 4×4 rate matrix Ω(ω) for a scalar-last quaternion, such that
/// `q̇ = ½ Ω(ω) q`.
pub fn omega_matrix(angular_velocity: &Vector3<f64>) -> Matrix4<f64> {
    let (w1, w2, w3) = (angular_velocity.x, angular_velocity.y, angular_velocity.z);
    Matrix4::new(
        0.0, w3, -w2, w1, //
        -w3, 0.0, w1, w2, //
        w2, -w1, 0.0, w3, //
        -w1, -w2, -w3, 0.0,
    )
}

/// Time derivative of the attitude quaternion for body rate `angular_velocity`.
pub fn differential_kinematics(
    angular_velocity: &Vector3<f64>,
    quaternion: &Vector4<f64>,
) -> Vector4<f64> {
    0.5 * omega_matrix(angular_velocity) * quaternion
}
