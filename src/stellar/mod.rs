//! Stars: classification tables, the star model and system formation

pub mod formation;
pub mod star;
pub mod tables;

pub use formation::{attach_companion, form_star, prune_orbits};
pub use star::{au_to_orbit, LuminosityClass, SpectralType, Star, StarRole};
