//! Read-only renderings of generated sectors and systems

pub mod json;
pub mod listing;
pub mod settlement;
pub mod svg;

pub use json::{sector_json, volume_json};
pub use listing::{sector_listing, volume_listing};
pub use settlement::{ehex, orbit_code, profile_code};
pub use svg::sector_svg;
