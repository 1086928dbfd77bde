pub mod telemetry;
pub mod timeline;
