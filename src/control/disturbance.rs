use nalgebra::Vector3;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::Deserialize;

use crate::errors::SimulationError;

/// Source of the external torque acting on the spacecraft.
///
/// The driver asks for the torque exactly once per step and holds it fixed
/// for the whole step.
pub trait DisturbanceSource {
    fn torque(&mut self, time: f64) -> Vector3<f64>;
}

impl<D: DisturbanceSource + ?Sized> DisturbanceSource for Box<D> {
    fn torque(&mut self, time: f64) -> Vector3<f64> {
        (**self).torque(time)
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct NoDisturbance;

impl DisturbanceSource for NoDisturbance {
    fn torque(&mut self, _time: f64) -> Vector3<f64> {
        Vector3::zeros()
    }
}

#[derive(Debug, Clone, Copy)]
pub struct ConstantTorque {
    pub torque: Vector3<f64>,
}

impl ConstantTorque {
    pub fn new(torque: Vector3<f64>) -> Self {
        ConstantTorque { torque }
    }
}

impl DisturbanceSource for ConstantTorque {
    fn torque(&mut self, _time: f64) -> Vector3<f64> {
        self.torque
    }
}

/// Independent uniform noise on each axis in `[-magnitude, magnitude]` N⋅m.
#[derive(Debug, Clone)]
pub struct RandomTorque {
    magnitude: f64,
    rng: StdRng,
}

impl RandomTorque {
    pub fn new(magnitude: f64, seed: u64) -> Result<Self, SimulationError> {
        if !(magnitude.is_finite() && magnitude >= 0.0) {
            return Err(SimulationError::ConfigurationError(format!(
                "random torque magnitude must be non-negative, got {magnitude}"
            )));
        }
        Ok(RandomTorque {
            magnitude,
            rng: StdRng::seed_from_u64(seed),
        })
    }
}

impl DisturbanceSource for RandomTorque {
    fn torque(&mut self, _time: f64) -> Vector3<f64> {
        if self.magnitude == 0.0 {
            return Vector3::zeros();
        }
        let m = self.magnitude;
        Vector3::new(
            self.rng.gen_range(-m..=m),
            self.rng.gen_range(-m..=m),
            self.rng.gen_range(-m..=m),
        )
    }
}

/// Adapts a closure of simulation time into a [`DisturbanceSource`].
pub struct TorqueFn<F>(pub F);

impl<F> DisturbanceSource for TorqueFn<F>
where
    F: FnMut(f64) -> Vector3<f64>,
{
    fn torque(&mut self, time: f64) -> Vector3<f64> {
        (self.0)(time)
    }
}

#[derive(Clone, PartialEq, Debug, Default, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum DisturbanceConfig {
    #[default]
    None,
    Constant {
        torque: [f64; 3],
    },
    Random {
        magnitude: f64,
        #[serde(default)]
        seed: u64,
    },
}

impl DisturbanceConfig {
    pub fn build(&self) -> Result<Box<dyn DisturbanceSource + Send>, SimulationError> {
        Ok(match self {
            DisturbanceConfig::None => Box::new(NoDisturbance),
            DisturbanceConfig::Constant { torque } => {
                Box::new(ConstantTorque::new(Vector3::from(*torque)))
            }
            DisturbanceConfig::Random { magnitude, seed } => {
                Box::new(RandomTorque::new(*magnitude, *seed)?)
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_disturbance() {
        let mut source = NoDisturbance;
        assert_eq!(source.torque(0.0), Vector3::zeros());
        assert_eq!(source.torque(100.0), Vector3::zeros());
    }

    #[test]
    fn test_constant_torque() {
        let mut source = ConstantTorque::new(Vector3::new(1e-3, 0.0, -2e-3));
        assert_eq!(source.torque(5.0), Vector3::new(1e-3, 0.0, -2e-3));
    }

    #[test]
    fn test_random_torque_is_bounded_and_reproducible() {
        let mut a = RandomTorque::new(0.01, 99).unwrap();
        let mut b = RandomTorque::new(0.01, 99).unwrap();
        for step in 0..200 {
            let t = step as f64 * 0.1;
            let ta = a.torque(t);
            assert_eq!(ta, b.torque(t));
            assert!(ta.iter().all(|v| v.abs() <= 0.01), "Torque out of range: {}", ta);
        }
    }

    #[test]
    fn test_random_torque_rejects_negative_magnitude() {
        assert!(RandomTorque::new(-1.0, 0).is_err());
    }

    #[test]
    fn test_torque_fn_sees_time() {
        let mut source = TorqueFn(|t: f64| Vector3::new(t, 0.0, 0.0));
        assert_eq!(source.torque(2.5), Vector3::new(2.5, 0.0, 0.0));
    }

    #[test]
    fn test_config_builds_sources() {
        let mut source = DisturbanceConfig::Constant {
            torque: [0.1, 0.2, 0.3],
        }
        .build()
        .unwrap();
        assert_eq!(source.torque(0.0), Vector3::new(0.1, 0.2, 0.3));

        let mut none = DisturbanceConfig::default().build().unwrap();
        assert_eq!(none.torque(0.0), Vector3::zeros());

        assert!(DisturbanceConfig::Random {
            magnitude: f64::NAN,
            seed: 1
        }
        .build()
        .is_err());
    }
}
