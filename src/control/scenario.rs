use std::{fs, path::Path};

use nalgebra::{Matrix3, Vector3, Vector4};
use serde::Deserialize;
use tracing::debug;

use crate::attitude_system::rigid_body::RigidBodyModel;
use crate::constants::{
    DEFAULT_ANGULAR_VELOCITY, DEFAULT_DURATION, DEFAULT_INERTIA_DIAGONAL, DEFAULT_QUATERNION,
    DEFAULT_SAMPLING_PERIOD, EARTH_GRAVITATIONAL_PARAMETER,
};
use crate::control::disturbance::{DisturbanceConfig, DisturbanceSource};
use crate::errors::SimulationError;
use crate::orbit_system::circular_orbit::{CircularOrbit, PeriodUnit};
use crate::orbit_system::orbital_elements::{OrbitalElements, OrbitalElementsConfig};
use crate::orbit_system::transforms::eci_to_lvlh;
use crate::simulation::driver::{InitialState, NormPolicy, Simulation, SimulationSettings};
use crate::utils::frame_axes::ReferenceFrame;

fn default_gravitational_parameter() -> f64 {
    EARTH_GRAVITATIONAL_PARAMETER
}

fn default_period_unit() -> String {
    "second".to_string()
}

#[derive(Clone, PartialEq, Debug, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct OrbitConfig {
    pub radius: f64,
    #[serde(default = "default_gravitational_parameter", alias = "mu")]
    pub gravitational_parameter: f64,
    /// Parsed with `PeriodUnit::from_str` when the scenario is built.
    #[serde(default = "default_period_unit")]
    pub period_unit: String,
}

#[derive(Clone, PartialEq, Debug, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct ScenarioConfig {
    pub name: Option<String>,
    pub duration: f64,
    pub sampling_period: f64,
    pub norm_policy: NormPolicy,
    /// Inertia tensor rows, kg⋅m².
    pub inertia: [[f64; 3]; 3],
    pub initial_angular_velocity: [f64; 3],
    /// Scalar-last.
    pub initial_quaternion: [f64; 4],
    pub disturbance: DisturbanceConfig,
    pub orbit: Option<OrbitConfig>,
    pub elements: Option<OrbitalElementsConfig>,
}

impl Default for ScenarioConfig {
    fn default() -> Self {
        let [ixx, iyy, izz] = DEFAULT_INERTIA_DIAGONAL;
        ScenarioConfig {
            name: None,
            duration: DEFAULT_DURATION,
            sampling_period: DEFAULT_SAMPLING_PERIOD,
            norm_policy: NormPolicy::default(),
            inertia: [[ixx, 0.0, 0.0], [0.0, iyy, 0.0], [0.0, 0.0, izz]],
            initial_angular_velocity: DEFAULT_ANGULAR_VELOCITY,
            initial_quaternion: DEFAULT_QUATERNION,
            disturbance: DisturbanceConfig::default(),
            orbit: None,
            elements: None,
        }
    }
}

/// Everything needed to run one configured simulation.
pub struct Scenario {
    pub name: String,
    pub simulation: Simulation,
    pub initial_state: InitialState,
    pub disturbance: Box<dyn DisturbanceSource + Send>,
    pub orbit: Option<CircularOrbit>,
    pub period_unit: PeriodUnit,
}

impl Scenario {
    pub fn nominal() -> Result<Self, SimulationError> {
        ScenarioConfig::default().build()
    }
}

impl ScenarioConfig {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, SimulationError> {
        let content = fs::read_to_string(path)?;
        Self::from_str_checked(&content)
    }

    /// Parses and fully validates a scenario document.
    pub fn from_str_checked(s: &str) -> Result<Self, SimulationError> {
        let cfg: ScenarioConfig = toml::from_str(s)?;
        cfg.build()?;
        Ok(cfg)
    }

    pub fn build(&self) -> Result<Scenario, SimulationError> {
        let model = RigidBodyModel::new(Matrix3::from_fn(|i, j| self.inertia[i][j]))?;
        let settings = SimulationSettings::new(self.duration, self.sampling_period)?
            .with_norm_policy(self.norm_policy);

        let elements = self
            .elements
            .as_ref()
            .map(OrbitalElements::try_from)
            .transpose()?;

        let orbit = match (&self.orbit, &elements) {
            (Some(o), _) => Some(CircularOrbit::new(o.radius, o.gravitational_parameter)?),
            (None, Some(e)) => Some(CircularOrbit::new(
                e.semimajor_axis(),
                EARTH_GRAVITATIONAL_PARAMETER,
            )?),
            (None, None) => None,
        };

        let period_unit = match &self.orbit {
            Some(o) => o.period_unit.parse::<PeriodUnit>()?,
            None => PeriodUnit::default(),
        };

        let reference_frame = match (&orbit, &elements) {
            (Some(o), Some(e)) => {
                debug!(rate = o.angular_velocity(), "Using LVLH reference frame at epoch");
                ReferenceFrame::from_rotation(&eci_to_lvlh(e, o.angular_velocity(), 0.0))?
            }
            _ => ReferenceFrame::inertial(),
        };

        Ok(Scenario {
            name: self.name.clone().unwrap_or_else(|| "nominal".to_string()),
            simulation: Simulation::new(model, reference_frame, settings),
            initial_state: InitialState::new(
                Vector3::from(self.initial_angular_velocity),
                Vector4::from(self.initial_quaternion),
            ),
            disturbance: self.disturbance.build()?,
            orbit,
            period_unit,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use indoc::indoc;

    #[test]
    fn test_empty_document_is_nominal() {
        let cfg = ScenarioConfig::from_str_checked("").unwrap();
        assert_eq!(cfg, ScenarioConfig::default());

        let scenario = cfg.build().unwrap();
        assert_eq!(scenario.name, "nominal");
        assert_eq!(scenario.simulation.settings().sample_count(), 11);
        assert_eq!(*scenario.simulation.reference_frame(), ReferenceFrame::inertial());
        assert!(scenario.orbit.is_none());
    }

    #[test]
    fn test_full_document() {
        let cfg = ScenarioConfig::from_str_checked(indoc! {r#"
            name = "tumble"
            duration = 60.0
            sampling-period = 0.5
            norm-policy = "strict"
            inertia = [[10.0, 0.0, 0.0], [0.0, 12.0, 0.0], [0.0, 0.0, 8.0]]
            initial-angular-velocity = [0.01, -0.02, 0.03]
            initial-quaternion = [0.0, 0.0, 0.0, 1.0]

            [disturbance]
            type = "random"
            magnitude = 1e-4
            seed = 7

            [orbit]
            radius = 6878000.0
            mu = 3.986e14
            period-unit = "minute"

            [elements]
            semimajor-axis = 6878000.0
            inclination = 51.6
            ascending-node = 30.0
            true-anomaly = 0.0
        "#})
        .unwrap();

        assert_eq!(cfg.name.as_deref(), Some("tumble"));
        assert_eq!(cfg.norm_policy, NormPolicy::Strict);
        assert_eq!(
            cfg.disturbance,
            DisturbanceConfig::Random {
                magnitude: 1e-4,
                seed: 7
            }
        );

        let scenario = cfg.build().unwrap();
        assert_eq!(scenario.simulation.settings().sample_count(), 121);
        assert_eq!(scenario.period_unit, PeriodUnit::Minute);
        let orbit = scenario.orbit.unwrap();
        assert_relative_eq!(orbit.orbital_period(PeriodUnit::Minute), 94.6, epsilon = 0.05);

        let frame = scenario.simulation.reference_frame();
        assert_relative_eq!(frame.matrix().determinant(), 1.0, epsilon = 1e-12);
        assert!(*frame != ReferenceFrame::inertial());
    }

    #[test]
    fn test_elements_without_orbit_use_semimajor_axis() {
        let cfg = ScenarioConfig::from_str_checked(indoc! {r#"
            [elements]
            semimajor-axis = 7000000.0
        "#})
        .unwrap();
        let orbit = cfg.build().unwrap().orbit.unwrap();
        assert_eq!(orbit.radius(), 7.0e6);
    }

    #[test]
    fn test_period_unit_spellings() {
        let cfg = ScenarioConfig::from_str_checked(indoc! {r#"
            [orbit]
            radius = 7000000.0
            period-unit = "Min"
        "#})
        .unwrap();
        assert_eq!(cfg.build().unwrap().period_unit, PeriodUnit::Minute);

        let unspecified = ScenarioConfig::from_str_checked(indoc! {r#"
            [orbit]
            radius = 7000000.0
        "#})
        .unwrap();
        assert_eq!(unspecified.build().unwrap().period_unit, PeriodUnit::Second);
    }

    #[test]
    fn test_invalid_documents_are_rejected() {
        let bad_unit = indoc! {r#"
            [orbit]
            radius = 7000000.0
            period-unit = "fortnight"
        "#};
        assert!(matches!(
            ScenarioConfig::from_str_checked(bad_unit),
            Err(SimulationError::InvalidArgument(_))
        ));

        let singular = "inertia = [[1.0, 0.0, 0.0], [0.0, 0.0, 0.0], [0.0, 0.0, 1.0]]";
        assert!(matches!(
            ScenarioConfig::from_str_checked(singular),
            Err(SimulationError::ConfigurationError(_))
        ));

        let bad_elements = indoc! {r#"
            [elements]
            semimajor-axis = 7000000.0
            inclination = -1.0
        "#};
        assert!(ScenarioConfig::from_str_checked(bad_elements).is_err());

        assert!(ScenarioConfig::from_str_checked("sampling-period = 0.0").is_err());
        assert!(ScenarioConfig::from_str_checked("duration = \"long\"").is_err());
    }

    #[test]
    fn test_missing_file() {
        assert!(matches!(
            ScenarioConfig::load("/nonexistent/scenario.toml"),
            Err(SimulationError::Io(_))
        ));
    }
}
