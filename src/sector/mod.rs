//! Sector grids of star systems

pub mod assembly;
pub mod grid;
pub mod names;
pub mod volume;

pub use assembly::{assemble, assemble_config};
pub use grid::{Sector, Subsector};
pub use volume::{build_volume, Volume};
