use nalgebra::Matrix3;

use super::orbital_elements::OrbitalElements;
use crate::utils::frame_math::{frame_rotation_x, frame_rotation_z};

/// ECI to orbital-plane rotation: `Rx(inclination) * Rz(ascending node)`.
pub fn eci_to_orbital_plane(elements: &OrbitalElements) -> Matrix3<f64> {
    frame_rotation_x(elements.inclination().to_radians())
        * frame_rotation_z(elements.ascending_node().to_radians())
}

/// Rotation about the orbit normal by the argument of latitude swept since
/// the epoch: true anomaly plus `angular_velocity * time`.
///
/// The first row of the result points radially outward, the second along
/// track and the third along the orbit normal.
pub fn orbital_plane_to_radial_along_track(
    elements: &OrbitalElements,
    angular_velocity: f64,
    time: f64,
) -> Matrix3<f64> {
    frame_rotation_z(elements.true_anomaly().to_radians() + angular_velocity * time)
}

/// Reorders (radial, along-track, cross-track) rows into LVLH
/// (along-track, -orbit normal, nadir).
pub fn radial_along_track_to_lvlh(c: &Matrix3<f64>) -> Matrix3<f64> {
    let mut lvlh = Matrix3::zeros();
    lvlh.set_row(0, &c.row(1));
    lvlh.set_row(1, &(-c.row(2)));
    lvlh.set_row(2, &(-c.row(0)));
    lvlh
}

/// ECI to LVLH rotation at `time` seconds after the epoch of `elements`.
pub fn eci_to_lvlh(elements: &OrbitalElements, angular_velocity: f64, time: f64) -> Matrix3<f64> {
    let radial_along_track = orbital_plane_to_radial_along_track(elements, angular_velocity, time)
        * eci_to_orbital_plane(elements);
    radial_along_track_to_lvlh(&radial_along_track)
}
