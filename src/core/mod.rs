pub mod config;
pub mod dice;
pub mod error;
pub mod seed;

pub use config::{Density, GenerationType, GeneratorConfig};
pub use dice::Dice;
pub use error::{AstroError, Result};
