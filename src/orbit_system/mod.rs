pub mod circular_orbit;
pub mod orbital_elements;
pub mod transforms;
