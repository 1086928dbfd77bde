use serde::Deserialize;

use crate::errors::SimulationError;

/// Classical Keplerian elements. Angles are in degrees within [0, 360).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrbitalElements {
    semimajor_axis: f64,
    eccentricity: f64,
    inclination: f64,
    ascending_node: f64,
    arg_perigee: f64,
    true_anomaly: f64,
}

fn check_angle(name: &str, value: f64) -> Result<(), SimulationError> {
    if (0.0..360.0).contains(&value) {
        Ok(())
    } else {
        Err(SimulationError::ConfigurationError(format!(
            "{name} must be in [0, 360) degrees, got {value}"
        )))
    }
}

impl OrbitalElements {
    pub fn new(
        semimajor_axis: f64,
        eccentricity: f64,
        inclination: f64,
        ascending_node: f64,
        arg_perigee: f64,
        true_anomaly: f64,
    ) -> Result<Self, SimulationError> {
        if !(semimajor_axis.is_finite() && semimajor_axis > 0.0) {
            return Err(SimulationError::ConfigurationError(format!(
                "semimajor axis must be positive, got {semimajor_axis}"
            )));
        }
        if !(eccentricity.is_finite() && eccentricity >= 0.0) {
            return Err(SimulationError::ConfigurationError(format!(
                "eccentricity must be non-negative, got {eccentricity}"
            )));
        }
        check_angle("inclination", inclination)?;
        check_angle("ascending node", ascending_node)?;
        check_angle("argument of perigee", arg_perigee)?;
        check_angle("true anomaly", true_anomaly)?;

        Ok(OrbitalElements {
            semimajor_axis,
            eccentricity,
            inclination,
            ascending_node,
            arg_perigee,
            true_anomaly,
        })
    }

    pub fn semimajor_axis(&self) -> f64 {
        self.semimajor_axis
    }

    pub fn eccentricity(&self) -> f64 {
        self.eccentricity
    }

    pub fn inclination(&self) -> f64 {
        self.inclination
    }

    pub fn ascending_node(&self) -> f64 {
        self.ascending_node
    }

    pub fn arg_perigee(&self) -> f64 {
        self.arg_perigee
    }

    pub fn true_anomaly(&self) -> f64 {
        self.true_anomaly
    }
}

/// Unvalidated element set as it appears in a scenario file.
#[derive(Clone, PartialEq, Debug, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct OrbitalElementsConfig {
    pub semimajor_axis: f64,
    #[serde(default)]
    pub eccentricity: f64,
    #[serde(default)]
    pub inclination: f64,
    #[serde(default)]
    pub ascending_node: f64,
    #[serde(default)]
    pub arg_perigee: f64,
    #[serde(default)]
    pub true_anomaly: f64,
}

impl TryFrom<&OrbitalElementsConfig> for OrbitalElements {
    type Error = SimulationError;

    fn try_from(cfg: &OrbitalElementsConfig) -> Result<Self, Self::Error> {
        OrbitalElements::new(
            cfg.semimajor_axis,
            cfg.eccentricity,
            cfg.inclination,
            cfg.ascending_node,
            cfg.arg_perigee,
            cfg.true_anomaly,
        )
    }
}
