use std::f64::consts::PI;
use std::fmt;
use std::str::FromStr;

use crate::errors::SimulationError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PeriodUnit {
    #[default]
    Second,
    Minute,
}

impl FromStr for PeriodUnit {
    type Err = SimulationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "second" | "seconds" | "s" => Ok(PeriodUnit::Second),
            "minute" | "minutes" | "min" => Ok(PeriodUnit::Minute),
            other => Err(SimulationError::InvalidArgument(format!(
                "unrecognized period unit '{other}' (expected second or minute)"
            ))),
        }
    }
}

impl fmt::Display for PeriodUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PeriodUnit::Second => write!(f, "s"),
            PeriodUnit::Minute => write!(f, "min"),
        }
    }
}

/// Circular orbit around a central body.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CircularOrbit {
    radius: f64,
    gravitational_parameter: f64,
}

impl CircularOrbit {
    /// `radius` in meters from the body's center, `gravitational_parameter` in m³/s².
    pub fn new(radius: f64, gravitational_parameter: f64) -> Result<Self, SimulationError> {
        if !(radius.is_finite() && radius > 0.0) {
            return Err(SimulationError::ConfigurationError(format!(
                "orbit radius must be positive, got {radius}"
            )));
        }
        if !(gravitational_parameter.is_finite() && gravitational_parameter > 0.0) {
            return Err(SimulationError::ConfigurationError(format!(
                "gravitational parameter must be positive, got {gravitational_parameter}"
            )));
        }
        Ok(CircularOrbit {
            radius,
            gravitational_parameter,
        })
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }

    pub fn gravitational_parameter(&self) -> f64 {
        self.gravitational_parameter
    }

    /// Mean motion in rad/s.
    pub fn angular_velocity(&self) -> f64 {
        (self.gravitational_parameter / self.radius.powi(3)).sqrt()
    }

    /// Orbital speed in m/s.
    pub fn orbital_velocity(&self) -> f64 {
        (self.gravitational_parameter / self.radius).sqrt()
    }

    pub fn orbital_period(&self, unit: PeriodUnit) -> f64 {
        let seconds = 2.0 * PI / self.angular_velocity();
        match unit {
            PeriodUnit::Second => seconds,
            PeriodUnit::Minute => seconds / 60.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::{EARTH_GRAVITATIONAL_PARAMETER, EARTH_RADIUS};
    use approx::{assert_abs_diff_eq, assert_relative_eq};

    #[test]
    fn test_low_earth_orbit_rate_and_period() {
        // 500 km above the surface
        let orbit = CircularOrbit::new(EARTH_RADIUS + 500_000.0, EARTH_GRAVITATIONAL_PARAMETER)
            .unwrap();
        assert_abs_diff_eq!(orbit.angular_velocity(), 1.1068e-3, epsilon = 1e-7);
        assert_abs_diff_eq!(orbit.orbital_period(PeriodUnit::Minute), 94.6, epsilon = 0.05);
        assert_abs_diff_eq!(orbit.orbital_velocity(), 7612.6, epsilon = 1.0);
    }

    #[test]
    fn test_surface_radius_orbit() {
        let orbit = CircularOrbit::new(6.37e6, 3.986e14).unwrap();
        assert_relative_eq!(orbit.angular_velocity(), 1.24182e-3, max_relative = 1e-4);
        assert_abs_diff_eq!(orbit.orbital_period(PeriodUnit::Minute), 84.33, epsilon = 0.05);
    }

    #[test]
    fn test_period_units_agree() {
        for radius in [6.6e6, 7.0e6, 4.2164e7] {
            let orbit = CircularOrbit::new(radius, EARTH_GRAVITATIONAL_PARAMETER).unwrap();
            assert_relative_eq!(
                orbit.orbital_period(PeriodUnit::Second) / 60.0,
                orbit.orbital_period(PeriodUnit::Minute),
                max_relative = 1e-12
            );
        }
    }

    #[test]
    fn test_velocity_is_rate_times_radius() {
        let orbit = CircularOrbit::new(7.0e6, EARTH_GRAVITATIONAL_PARAMETER).unwrap();
        assert_relative_eq!(
            orbit.orbital_velocity(),
            orbit.angular_velocity() * orbit.radius(),
            max_relative = 1e-12
        );
    }

    #[test]
    fn test_invalid_orbit_parameters() {
        assert!(CircularOrbit::new(-1.0, EARTH_GRAVITATIONAL_PARAMETER).is_err());
        assert!(CircularOrbit::new(0.0, EARTH_GRAVITATIONAL_PARAMETER).is_err());
        assert!(CircularOrbit::new(7.0e6, -3.986e14).is_err());
        assert!(CircularOrbit::new(f64::NAN, EARTH_GRAVITATIONAL_PARAMETER).is_err());
        assert!(matches!(
            CircularOrbit::new(7.0e6, 0.0),
            Err(SimulationError::ConfigurationError(_))
        ));
    }

    #[test]
    fn test_period_unit_parsing() {
        assert_eq!("second".parse::<PeriodUnit>().unwrap(), PeriodUnit::Second);
        assert_eq!("Minute".parse::<PeriodUnit>().unwrap(), PeriodUnit::Minute);
        assert_eq!("min".parse::<PeriodUnit>().unwrap(), PeriodUnit::Minute);
        assert!(matches!(
            "hour".parse::<PeriodUnit>(),
            Err(SimulationError::InvalidArgument(_))
        ));
    }
}
