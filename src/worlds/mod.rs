//! Habitable worlds: derivation chain and classification

pub mod derivation;
pub mod trade;
pub mod world;

pub use derivation::derive_world;
pub use trade::TradeCode;
pub use world::{Base, Faction, Starport, Temperature, TravelCode, World};
