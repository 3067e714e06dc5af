//! Astromapper - seeded star system and sector generator
//!
//! A run owns one [`core::Dice`] seeded from a display code. Sectors are
//! assembled cell by cell; each occupied cell forms a primary star, its
//! orbits and companions, and derives any habitable world it finds.

pub mod core;
pub mod orbits;
pub mod output;
pub mod sector;
pub mod stellar;
pub mod worlds;

pub use crate::core::{AstroError, Density, Dice, GenerationType, GeneratorConfig, Result};
pub use crate::sector::{assemble, build_volume, Sector, Volume};
pub use crate::stellar::{form_star, Star};
