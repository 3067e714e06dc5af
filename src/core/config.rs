//! Generation configuration
//!
//! Validated before the generator runs: the core itself never fails, so every
//! user-facing mistake has to be caught here.

use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::core::error::{AstroError, Result};

/// Conventional sector width in volumes
pub const SECTOR_WIDTH: u32 = 32;
/// Conventional sector height in volumes
pub const SECTOR_HEIGHT: u32 = 40;
/// Subsector width in volumes (4 subsectors across)
pub const SUBSECTOR_WIDTH: u32 = 8;
/// Subsector height in volumes (4 subsectors down)
pub const SUBSECTOR_HEIGHT: u32 = 10;
/// Largest accepted width or height, in volumes
pub const MAX_DIMENSION: u32 = 1024;

/// Named stellar density presets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum Density {
    ExtraGalactic,
    Rift,
    Sparse,
    Scattered,
    #[default]
    Standard,
    Dense,
    Cluster,
    Core,
}

impl Density {
    pub const ALL: [Density; 8] = [
        Density::ExtraGalactic,
        Density::Rift,
        Density::Sparse,
        Density::Scattered,
        Density::Standard,
        Density::Dense,
        Density::Cluster,
        Density::Core,
    ];

    /// Probability that any single volume holds a star system
    pub fn fraction(&self) -> f64 {
        match self {
            Density::ExtraGalactic => 0.01,
            Density::Rift => 0.03,
            Density::Sparse => 0.17,
            Density::Scattered => 0.33,
            Density::Standard => 0.50,
            Density::Dense => 0.66,
            Density::Cluster => 0.83,
            Density::Core => 0.91,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Density::ExtraGalactic => "extra-galactic",
            Density::Rift => "rift",
            Density::Sparse => "sparse",
            Density::Scattered => "scattered",
            Density::Standard => "standard",
            Density::Dense => "dense",
            Density::Cluster => "cluster",
            Density::Core => "core",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Density::ExtraGalactic => "Deep space between galaxies",
            Density::Rift => "Galactic voids",
            Density::Sparse => "Frontier regions",
            Density::Scattered => "Outer rim",
            Density::Standard => "Typical space",
            Density::Dense => "Inner systems",
            Density::Cluster => "Stellar clusters",
            Density::Core => "Galactic core",
        }
    }
}

impl fmt::Display for Density {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for Density {
    type Err = AstroError;

    fn from_str(s: &str) -> Result<Self> {
        Density::ALL
            .iter()
            .copied()
            .find(|d| d.name() == s)
            .ok_or_else(|| AstroError::InvalidDensity(s.to_string()))
    }
}

/// What a run produces
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum GenerationType {
    #[default]
    Sector,
    Volume,
}

impl GenerationType {
    pub fn name(&self) -> &'static str {
        match self {
            GenerationType::Sector => "sector",
            GenerationType::Volume => "volume",
        }
    }
}

impl FromStr for GenerationType {
    type Err = AstroError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "sector" => Ok(GenerationType::Sector),
            "volume" => Ok(GenerationType::Volume),
            other => Err(AstroError::InvalidGenerationType(other.to_string())),
        }
    }
}

/// Configuration for one generation run
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    /// Sector display name
    pub name: String,
    /// Grid width in volumes
    pub width: u32,
    /// Grid height in volumes
    pub height: u32,
    pub density: Density,
    pub generation: GenerationType,
    /// Seed text; a random display code is drawn when absent
    pub seed: Option<String>,
    /// Optional name list, one name per line
    pub names_file: Option<PathBuf>,
    /// Directory that receives the listing, JSON and SVG files
    pub output_dir: PathBuf,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            name: "Unnamed".to_string(),
            width: SECTOR_WIDTH,
            height: SECTOR_HEIGHT,
            density: Density::Standard,
            generation: GenerationType::Sector,
            seed: None,
            names_file: None,
            output_dir: PathBuf::from("output"),
        }
    }
}

impl GeneratorConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a TOML document; missing keys keep their defaults
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: GeneratorConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// Validate configuration for internal consistency
    pub fn validate(&self) -> Result<()> {
        let in_range = |d: u32| (1..=MAX_DIMENSION).contains(&d);
        if !in_range(self.width) || !in_range(self.height) {
            return Err(AstroError::InvalidDimensions {
                width: self.width,
                height: self.height,
            });
        }

        if self.name.trim().is_empty() {
            return Err(AstroError::InvalidConfig("sector name must not be empty".into()));
        }

        if matches!(&self.seed, Some(seed) if seed.is_empty()) {
            return Err(AstroError::InvalidConfig("seed must not be empty".into()));
        }

        Ok(())
    }
}
