//! Orbital slots and what occupies them

pub mod classifier;
pub mod orbit;

pub use classifier::{classify, generate_moons};
pub use orbit::{Body, GiantSize, Moon, Orbit, OrbitKind, Profile, Zone};
