//! Star model - spectral classification, orbit spacing and the system tree

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::orbits::{Body, Orbit, OrbitKind};
use crate::stellar::tables;
use crate::worlds::World;

#[allow(clippy::upper_case_acronyms)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SpectralType {
    O,
    B,
    A,
    F,
    G,
    K,
    M,
    D, // White dwarf
}

impl SpectralType {
    pub fn letter(&self) -> char {
        match self {
            SpectralType::O => 'O',
            SpectralType::B => 'B',
            SpectralType::A => 'A',
            SpectralType::F => 'F',
            SpectralType::G => 'G',
            SpectralType::K => 'K',
            SpectralType::M => 'M',
            SpectralType::D => 'D',
        }
    }
}

impl fmt::Display for SpectralType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letter())
    }
}

/// Luminosity (size) class. Numeric codes 0-6 index the stellar tables;
/// degenerate stars carry code 500.
#[allow(clippy::upper_case_acronyms)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LuminosityClass {
    IA,  // Bright supergiant
    IB,  // Supergiant
    II,  // Bright giant
    III, // Giant
    IV,  // Subgiant
    V,   // Main sequence
    VI,  // Subdwarf
    D,   // White dwarf
}

/// Numeric size code of a degenerate star
pub const DEGENERATE_SIZE: u16 = 500;

impl LuminosityClass {
    pub fn code(&self) -> u16 {
        match self {
            LuminosityClass::IA => 0,
            LuminosityClass::IB => 1,
            LuminosityClass::II => 2,
            LuminosityClass::III => 3,
            LuminosityClass::IV => 4,
            LuminosityClass::V => 5,
            LuminosityClass::VI => 6,
            LuminosityClass::D => DEGENERATE_SIZE,
        }
    }

    /// Codes outside the charted classes map to main sequence
    pub fn from_code(code: u16) -> Self {
        match code {
            0 => LuminosityClass::IA,
            1 => LuminosityClass::IB,
            2 => LuminosityClass::II,
            3 => LuminosityClass::III,
            4 => LuminosityClass::IV,
            6 => LuminosityClass::VI,
            DEGENERATE_SIZE => LuminosityClass::D,
            _ => LuminosityClass::V,
        }
    }

    pub fn numeral(&self) -> &'static str {
        match self {
            LuminosityClass::IA => "Ia",
            LuminosityClass::IB => "Ib",
            LuminosityClass::II => "II",
            LuminosityClass::III => "III",
            LuminosityClass::IV => "IV",
            LuminosityClass::V => "V",
            LuminosityClass::VI => "VI",
            LuminosityClass::D => "D",
        }
    }
}

impl fmt::Display for LuminosityClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.numeral())
    }
}

/// Position of a star in its system. Companions refer back to the primary by
/// their slot in the primary's `companions` list; the primary owns them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "role", rename_all = "snake_case")]
pub enum StarRole {
    Primary,
    Companion { index: usize },
}

/// A star and everything orbiting it
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Star {
    /// Final type; `D` for degenerate stars
    pub spectral_type: SpectralType,
    /// Type the subtype was drawn for (differs from `spectral_type` for white dwarfs)
    pub spectral_class: SpectralType,
    pub subtype: u8,
    pub luminosity_class: LuminosityClass,
    pub bode_constant: f64,
    /// Type roll, feeds companion classification
    pub type_dm: i32,
    /// Size roll, feeds companion classification
    pub size_dm: i32,
    /// Orbit slot around the primary (0 for primaries, may be negative)
    pub orbit: i32,
    #[serde(flatten)]
    pub role: StarRole,
    pub orbits: Vec<Orbit>,
    pub companions: Vec<Star>,
    #[serde(skip)]
    pub(crate) main_world: Option<usize>,
}

impl Star {
    /// Bare star with no orbits; formation fills in the rest
    pub fn new(
        spectral_type: SpectralType,
        luminosity_class: LuminosityClass,
        subtype: u8,
        bode_constant: f64,
    ) -> Self {
        Self {
            spectral_type,
            spectral_class: spectral_type,
            subtype,
            luminosity_class,
            bode_constant,
            type_dm: 0,
            size_dm: 0,
            orbit: 0,
            role: StarRole::Primary,
            orbits: Vec::new(),
            companions: Vec::new(),
            main_world: None,
        }
    }

    pub fn is_primary(&self) -> bool {
        self.role == StarRole::Primary
    }

    /// Numeric size class (0-6, or 500 for white dwarfs)
    pub fn size(&self) -> u16 {
        self.luminosity_class.code()
    }

    /// Spectral letter and subtype, e.g. "G2"
    pub fn spectral(&self) -> String {
        format!("{}{}", self.spectral_class, self.subtype)
    }

    /// Classification string, e.g. "G2V"; white dwarfs render as "DB"
    pub fn classification(&self) -> String {
        if self.spectral_type == SpectralType::D {
            return "DB".to_string();
        }
        format!("{}{}", self.spectral(), self.luminosity_class.numeral())
    }

    pub fn inner_limit(&self) -> f64 {
        tables::inner_limit(self.spectral_type, self.luminosity_class)
    }

    pub fn biozone(&self) -> (f64, f64) {
        tables::biozone(self.spectral_type, self.luminosity_class)
    }

    pub fn mass(&self) -> f64 {
        tables::mass(self.spectral_type, self.luminosity_class)
    }

    pub fn outer_limit(&self) -> f64 {
        40.0 * self.mass()
    }

    pub fn luminosity(&self) -> f64 {
        tables::luminosity(&self.spectral())
    }

    /// Surface temperature in kelvin, if the subclass is charted
    pub fn surface_temperature(&self) -> Option<u32> {
        tables::surface_temperature(&self.spectral())
    }

    pub fn snow_line(&self) -> f64 {
        4.85 * self.luminosity().sqrt()
    }

    /// Distance in AU of orbit slot `orbit`
    pub fn orbit_to_au(&self, orbit: i32) -> f64 {
        self.inner_limit() + self.bode_constant * 2f64.powi(orbit)
    }

    /// Inverse of [`Star::orbit_to_au`] using this star's constants
    pub fn au_to_orbit(&self, au: f64) -> i32 {
        au_to_orbit(au, self.bode_constant, self.inner_limit())
    }

    /// The canonical habitable world, if any
    pub fn world(&self) -> Option<&World> {
        self.world_orbit().and_then(|orbit| match &orbit.body {
            Body::World(world) => Some(world),
            _ => None,
        })
    }

    /// Orbit holding the canonical habitable world
    pub fn world_orbit(&self) -> Option<&Orbit> {
        self.main_world.and_then(|i| self.orbits.get(i))
    }

    pub fn has_world(&self) -> bool {
        self.main_world.is_some()
    }

    /// Companion star referenced by a companion-kind orbit
    pub fn companion_for(&self, orbit: &Orbit) -> Option<&Star> {
        match orbit.body {
            Body::Companion { companion } => self.companions.get(companion),
            _ => None,
        }
    }

    /// Classification of this star and its companions, e.g. "G2V/M4V"
    pub fn crib(&self) -> String {
        std::iter::once(self)
            .chain(self.companions.iter())
            .map(|s| s.classification())
            .collect::<Vec<_>>()
            .join("/")
    }

    /// One character per orbit, e.g. ".RWGG"
    pub fn orbit_crib(&self) -> String {
        self.orbits.iter().map(|o| o.kind().code()).collect()
    }

    /// Point `main_world` at the first world-kind orbit
    pub(crate) fn resolve_main_world(&mut self) {
        self.main_world = self
            .orbits
            .iter()
            .position(|o| o.kind() == OrbitKind::World);
    }
}

/// Inverse Bode relation used to place companions
///
/// Kept exactly as the rules state it: the absolute value of the base-2 log is
/// taken before the inner limit is subtracted, and the result is truncated
/// toward zero, so separations under one Bode step can land on a negative slot.
pub fn au_to_orbit(au: f64, bode_constant: f64, inner_limit: f64) -> i32 {
    let steps = ((au / bode_constant).ln() / 2f64.ln()).abs();
    (steps - inner_limit) as i32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classification_strings() {
        let sun = Star::new(SpectralType::G, LuminosityClass::V, 2, 0.3);
        assert_eq!(sun.classification(), "G2V");
        let giant = Star::new(SpectralType::K, LuminosityClass::III, 5, 0.3);
        assert_eq!(giant.classification(), "K5III");
        let mut dwarf = Star::new(SpectralType::M, LuminosityClass::D, 4, 0.3);
        dwarf.spectral_type = SpectralType::D;
        assert_eq!(dwarf.classification(), "DB");
        assert_eq!(dwarf.size(), 500);
    }

    #[test]
    fn test_orbit_distances_follow_bode_law() {
        let star = Star::new(SpectralType::K, LuminosityClass::IB, 0, 0.4);
        // inner limit for K Ib is 1.0
        assert_eq!(star.orbit_to_au(0), 1.0 + 0.4);
        assert_eq!(star.orbit_to_au(3), 1.0 + 0.4 * 8.0);
        for i in 0..10 {
            assert!(star.orbit_to_au(i) < star.orbit_to_au(i + 1));
        }
    }

    #[test]
    fn test_au_to_orbit_regression() {
        assert_eq!(au_to_orbit(1.0, 0.3, 0.0), 1);
        assert_eq!(au_to_orbit(0.05, 0.35, 0.0), 2);
        assert_eq!(au_to_orbit(5.0, 0.3, 1.0), 3);
        assert_eq!(au_to_orbit(0.02, 0.3, 3.1), 0);
        // log2(1.5) - 2.0 = -1.415, truncated toward zero
        assert_eq!(au_to_orbit(0.45, 0.3, 2.0), -1);
        // separations below one Bode step reflect through abs()
        assert_eq!(au_to_orbit(0.1, 0.3, 0.0), au_to_orbit(0.9, 0.3, 0.0));
    }

    #[test]
    fn test_luminosity_class_codes() {
        for code in [0u16, 1, 2, 3, 4, 5, 6, 500] {
            assert_eq!(LuminosityClass::from_code(code).code(), code);
        }
        assert_eq!(LuminosityClass::from_code(42), LuminosityClass::V);
    }

    #[test]
    fn test_snow_line_scales_with_luminosity() {
        let sun = Star::new(SpectralType::G, LuminosityClass::V, 2, 0.3);
        assert_eq!(sun.snow_line(), 4.85);
    }
}
