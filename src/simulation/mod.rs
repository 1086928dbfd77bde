pub mod driver;
pub mod sweep;
