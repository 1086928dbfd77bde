use nalgebra::{Vector3, Vector4};

use crate::orbit_system::circular_orbit::{CircularOrbit, PeriodUnit};
use crate::telemetry_system::timeline::{Timeline, TimelineSample};

/// Human-readable report of a finished run.
pub struct Telemetry {
    pub log: Vec<String>,
    max_angular_rate: f64,
    min_quaternion_norm: f64,
    max_quaternion_norm: f64,
    final_sample: Option<TimelineSample>,
    orbit_summary: Option<String>,
}

impl Telemetry {
    pub fn new() -> Self {
        Telemetry {
            log: Vec::new(),
            max_angular_rate: 0.0,
            min_quaternion_norm: f64::MAX,
            max_quaternion_norm: 0.0,
            final_sample: None,
            orbit_summary: None,
        }
    }

    /// Collects every `every`-th sample of `timeline` (the last one always).
    pub fn from_timeline(timeline: &Timeline, every: usize) -> Self {
        let mut telemetry = Telemetry::new();
        let every = every.max(1);
        let last = timeline.len().saturating_sub(1);
        for (k, sample) in timeline.samples().iter().enumerate() {
            telemetry.update_metrics(sample);
            if k % every == 0 || k == last {
                telemetry.collect_data(sample);
            }
        }
        telemetry.final_sample = timeline.last().cloned();
        telemetry
    }

    pub fn with_orbit(mut self, orbit: &CircularOrbit, unit: PeriodUnit) -> Self {
        self.orbit_summary = Some(format!(
            "Orbit radius: {:.1} km, rate: {:.4e} rad/s, speed: {:.1} m/s, period: {:.2} {}",
            orbit.radius() / 1000.0,
            orbit.angular_velocity(),
            orbit.orbital_velocity(),
            orbit.orbital_period(unit),
            unit
        ));
        self
    }

    fn format_vector3(vec: &Vector3<f64>, precision: usize) -> String {
        format!(
            "[{:.precision$}, {:.precision$}, {:.precision$}]",
            vec.x,
            vec.y,
            vec.z,
            precision = precision
        )
    }

    fn format_quaternion(q: &Vector4<f64>, precision: usize) -> String {
        format!(
            "[{:.precision$}, {:.precision$}, {:.precision$} | {:.precision$}]",
            q[0],
            q[1],
            q[2],
            q[3],
            precision = precision
        )
    }

    fn format_time(elapsed_time: f64) -> String {
        if elapsed_time >= 3600.0 {
            let hours = (elapsed_time / 3600.0).floor();
            let minutes = ((elapsed_time % 3600.0) / 60.0).floor();
            let seconds = elapsed_time % 60.0;
            format!("{:.0}h {:.0}m {:.2}s", hours, minutes, seconds)
        } else if elapsed_time >= 60.0 {
            let minutes = (elapsed_time / 60.0).floor();
            let seconds = elapsed_time % 60.0;
            format!("{:.0}m {:.2}s", minutes, seconds)
        } else {
            format!("{:.2}s", elapsed_time)
        }
    }

    fn update_metrics(&mut self, sample: &TimelineSample) {
        let rate = sample.angular_velocity.norm();
        let norm = sample.quaternion.norm();
        if rate > self.max_angular_rate {
            self.max_angular_rate = rate;
        }
        if norm < self.min_quaternion_norm {
            self.min_quaternion_norm = norm;
        }
        if norm > self.max_quaternion_norm {
            self.max_quaternion_norm = norm;
        }
    }

    pub fn collect_data(&mut self, sample: &TimelineSample) {
        let mut data = format!(
            "Time: {}\n\
                 Angular Velocity: {} rad/s (Magnitude: {:.6} rad/s)\n\
                 Quaternion: {} (Norm: {:.6})\n",
            Self::format_time(sample.time),
            Self::format_vector3(&sample.angular_velocity, 6),
            sample.angular_velocity.norm(),
            Self::format_quaternion(&sample.quaternion, 6),
            sample.quaternion.norm(),
        );
        if let Some(frame) = &sample.body_frame {
            for (name, axis) in ["X", "Y", "Z"].iter().zip(frame.axes()) {
                data.push_str(&format!(
                    "Body {} Axis: {}\n",
                    name,
                    Self::format_vector3(&axis, 6)
                ));
            }
        }
        self.log.push(data);
    }

    pub fn max_angular_rate(&self) -> f64 {
        self.max_angular_rate
    }

    pub fn quaternion_norm_range(&self) -> (f64, f64) {
        (self.min_quaternion_norm, self.max_quaternion_norm)
    }

    pub fn display_data(&self) {
        println!("--- Telemetry Data ---");
        for entry in &self.log {
            println!("{}", entry);
        }
        println!("--- End of Telemetry ---");

        println!("\n--- Simulation Summary ---");
        if let Some(orbit) = &self.orbit_summary {
            println!("{}", orbit);
        }
        println!("Max Angular Rate: {:.6} rad/s", self.max_angular_rate);
        println!(
            "Quaternion Norm Range: [{:.6}, {:.6}]",
            self.min_quaternion_norm, self.max_quaternion_norm
        );
        if let Some(sample) = &self.final_sample {
            println!(
                "Final Attitude at {}: {}",
                Self::format_time(sample.time),
                Self::format_quaternion(&sample.quaternion, 6)
            );
        }
    }
}

impl Default for Telemetry {
    fn default() -> Self {
        Self::new()
    }
}
