//! Stellar lookup tables
//!
//! Immutable process-wide constants. Every accessor is total: an index outside
//! a table returns a documented neutral value instead of panicking.

use std::collections::HashMap;
use std::sync::OnceLock;

use crate::stellar::star::{LuminosityClass, SpectralType};

// ============================================================================
// Primary and companion classification
// ============================================================================

/// Primary spectral type by clamped 2d6 (index 0-12)
pub const PRIMARY_TYPES: [SpectralType; 13] = [
    SpectralType::B,
    SpectralType::B,
    SpectralType::A,
    SpectralType::M,
    SpectralType::M,
    SpectralType::M,
    SpectralType::M,
    SpectralType::M,
    SpectralType::K,
    SpectralType::G,
    SpectralType::F,
    SpectralType::F,
    SpectralType::F,
];

/// Primary size class by clamped 2d6 (index 0-12)
pub const PRIMARY_SIZES: [u16; 13] = [0, 1, 2, 3, 4, 5, 5, 5, 5, 5, 5, 6, 500];

/// Companion spectral type by 2d6 + primary type DM, clamped to 12.
/// Index 0 is unreachable.
pub const COMPANION_TYPES: [SpectralType; 13] = [
    SpectralType::B,
    SpectralType::B,
    SpectralType::A,
    SpectralType::F,
    SpectralType::F,
    SpectralType::G,
    SpectralType::G,
    SpectralType::K,
    SpectralType::K,
    SpectralType::M,
    SpectralType::M,
    SpectralType::M,
    SpectralType::M,
];

/// Companion size class by 2d6 + primary size DM, clamped to 12
pub const COMPANION_SIZES: [u16; 13] = [0, 1, 2, 3, 4, 500, 500, 5, 5, 6, 500, 500, 500];

/// Companions per system by 2d6
pub const COMPANION_COUNTS: [usize; 13] = [0, 0, 0, 0, 0, 0, 0, 0, 1, 1, 1, 1, 2];

/// Separation multipliers in AU, indexed by 3d6 + 4 * companion - 2
pub const COMPANION_SEPARATION: [f64; 20] = [
    0.05, 0.05, 0.5, 0.5, 0.5, 2.0, 2.0, 10.0, 10.0, 10.0, 50.0, 50.0, 50.0, 50.0, 50.0, 50.0,
    50.0, 50.0, 50.0, 50.0,
];

/// Bode constants picked uniformly for every star except M V
pub const BODE_RATIOS: [f64; 11] = [0.3, 0.3, 0.3, 0.3, 0.35, 0.35, 0.35, 0.4, 0.4, 0.4, 0.4];

/// Bode constant for M-type main sequence stars
pub const RED_DWARF_BODE: f64 = 0.2;

/// Allowed decimal subtypes per spectral type
pub fn spectral_subtypes(spectral_type: SpectralType) -> &'static [u8] {
    match spectral_type {
        SpectralType::O => &[9],
        SpectralType::B => &[0, 2, 5, 8],
        SpectralType::A => &[0, 2, 5],
        SpectralType::F => &[0, 2, 5],
        SpectralType::G => &[0, 2, 5, 8],
        SpectralType::K => &[0, 2, 5],
        SpectralType::M => &[0, 2, 4, 6],
        SpectralType::D => &[],
    }
}

/// Clamped table lookup: `table[index]` or `default` when out of range
pub fn lookup<T: Copy>(table: &[T], index: i32, default: T) -> T {
    usize::try_from(index)
        .ok()
        .and_then(|i| table.get(i))
        .copied()
        .unwrap_or(default)
}

// ============================================================================
// Per (type, size) physical tables
// ============================================================================

fn inner_limits(spectral_type: SpectralType) -> &'static [f64] {
    match spectral_type {
        SpectralType::O => &[16.0, 13.0, 10.0],
        SpectralType::B => &[10.0, 6.3, 5.0, 4.0, 3.8, 0.6, 0.0],
        SpectralType::A => &[4.0, 1.0, 0.4, 0.0, 0.0, 0.0, 0.0],
        SpectralType::F => &[4.0, 1.0, 0.3, 0.1, 0.0, 0.0, 0.0],
        SpectralType::G => &[3.1, 1.0, 0.3, 0.1, 0.0, 0.0, 0.0],
        SpectralType::K => &[2.5, 1.0, 0.3, 0.1, 0.0, 0.0, 0.0],
        SpectralType::M => &[2.0, 1.0, 0.3, 0.1, 0.0, 0.0, 0.0],
        SpectralType::D => &[0.0],
    }
}

fn biozones(spectral_type: SpectralType) -> &'static [(f64, f64)] {
    match spectral_type {
        SpectralType::O => &[(790.0, 1190.0), (630.0, 950.0), (500.0, 750.0)],
        SpectralType::B => &[
            (500.0, 700.0),
            (320.0, 480.0),
            (250.0, 375.0),
            (200.0, 300.0),
            (180.0, 270.0),
            (30.0, 45.0),
        ],
        SpectralType::A => &[
            (200.0, 300.0),
            (50.0, 75.0),
            (20.0, 30.0),
            (5.0, 7.5),
            (4.0, 6.0),
            (3.1, 4.7),
        ],
        SpectralType::F | SpectralType::G => &[
            (200.0, 300.0),
            (50.0, 75.0),
            (13.0, 19.0),
            (2.5, 3.7),
            (2.0, 3.0),
            (1.6, 2.4),
            (0.5, 0.8),
        ],
        SpectralType::K => &[
            (125.0, 190.0),
            (50.0, 75.0),
            (13.0, 19.0),
            (4.0, 5.9),
            (1.0, 1.5),
            (0.5, 0.6),
            (0.2, 0.3),
        ],
        SpectralType::M => &[
            (100.0, 150.0),
            (50.0, 76.0),
            (16.0, 24.0),
            (5.0, 7.5),
            (0.0, 0.0),
            (0.1, 0.2),
            (0.1, 0.1),
        ],
        SpectralType::D => &[(0.03, 0.03)],
    }
}

fn masses(spectral_type: SpectralType) -> &'static [f64] {
    match spectral_type {
        SpectralType::O => &[70.0, 60.0, 0.0, 0.0, 50.0, 0.0],
        SpectralType::B => &[50.0, 40.0, 35.0, 30.0, 20.0, 10.0],
        SpectralType::A => &[30.0, 16.0, 10.0, 6.0, 4.0, 3.0],
        SpectralType::F => &[15.0, 13.0, 8.0, 2.5, 2.2, 1.9],
        SpectralType::G => &[12.0, 10.0, 6.0, 2.7, 1.8, 1.1, 0.8],
        SpectralType::K => &[15.0, 12.0, 6.0, 3.0, 2.3, 0.9, 0.5],
        SpectralType::M => &[20.0, 16.0, 8.0, 4.0, 0.3, 0.2],
        SpectralType::D => &[0.8, 0.8, 0.8, 0.8, 0.8, 0.8],
    }
}

/// Mass used when the (type, size) pair is outside the chart
pub const DEFAULT_MASS: f64 = 0.3;

/// Orbits closer than this are always empty. 0.0 outside the chart.
pub fn inner_limit(spectral_type: SpectralType, class: LuminosityClass) -> f64 {
    lookup(inner_limits(spectral_type), class.code() as i32, 0.0)
}

/// Habitable-zone bounds in AU. `(0.0, 0.0)` means no habitable zone.
pub fn biozone(spectral_type: SpectralType, class: LuminosityClass) -> (f64, f64) {
    lookup(biozones(spectral_type), class.code() as i32, (0.0, 0.0))
}

/// Stellar mass in solar masses, [`DEFAULT_MASS`] outside the chart
pub fn mass(spectral_type: SpectralType, class: LuminosityClass) -> f64 {
    lookup(masses(spectral_type), class.code() as i32, DEFAULT_MASS)
}

// ============================================================================
// Spectral chart
// ============================================================================

/// Reference data for one spectral subclass
#[derive(Debug, Clone, Copy)]
pub struct StarData {
    /// Surface temperature in kelvin
    pub temperature: u32,
    pub luminosity: f64,
}

const STAR_CHART: [(&str, StarData); 21] = [
    ("B0", StarData { temperature: 30000, luminosity: 16000.0 }),
    ("B2", StarData { temperature: 22000, luminosity: 8300.0 }),
    ("B5", StarData { temperature: 15000, luminosity: 750.0 }),
    ("B8", StarData { temperature: 12500, luminosity: 130.0 }),
    ("A0", StarData { temperature: 9500, luminosity: 63.0 }),
    ("A2", StarData { temperature: 9000, luminosity: 40.0 }),
    ("A5", StarData { temperature: 8700, luminosity: 24.0 }),
    ("F0", StarData { temperature: 7400, luminosity: 9.0 }),
    ("F2", StarData { temperature: 7100, luminosity: 6.3 }),
    ("F5", StarData { temperature: 6400, luminosity: 4.0 }),
    ("G0", StarData { temperature: 5900, luminosity: 1.45 }),
    ("G2", StarData { temperature: 5800, luminosity: 1.00 }),
    ("G5", StarData { temperature: 5600, luminosity: 0.70 }),
    ("G8", StarData { temperature: 5300, luminosity: 0.44 }),
    ("K0", StarData { temperature: 5100, luminosity: 0.36 }),
    ("K2", StarData { temperature: 4830, luminosity: 0.28 }),
    ("K5", StarData { temperature: 4370, luminosity: 0.18 }),
    ("M0", StarData { temperature: 3670, luminosity: 0.075 }),
    ("M2", StarData { temperature: 3400, luminosity: 0.03 }),
    ("M4", StarData { temperature: 3200, luminosity: 0.0005 }),
    ("M6", StarData { temperature: 3000, luminosity: 0.0002 }),
];

static CHART: OnceLock<HashMap<&'static str, StarData>> = OnceLock::new();

/// Spectral chart keyed by type letter + subtype digit, e.g. "G2"
pub fn star_chart() -> &'static HashMap<&'static str, StarData> {
    CHART.get_or_init(|| STAR_CHART.iter().copied().collect())
}

/// Luminosity in solar units, 1.0 when the subclass is not charted
pub fn luminosity(spectral: &str) -> f64 {
    star_chart().get(spectral).map_or(1.0, |data| data.luminosity)
}

/// Surface temperature in kelvin, if the subclass is charted
pub fn surface_temperature(spectral: &str) -> Option<u32> {
    star_chart().get(spectral).map(|data| data.temperature)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_out_of_range_is_default() {
        assert_eq!(lookup(&[1, 2, 3], -1, 0), 0);
        assert_eq!(lookup(&[1, 2, 3], 3, 0), 0);
        assert_eq!(lookup(&[1, 2, 3], 2, 0), 3);
    }

    #[test]
    fn test_white_dwarf_tables_fall_back() {
        let d = LuminosityClass::D;
        assert_eq!(inner_limit(SpectralType::D, d), 0.0);
        assert_eq!(biozone(SpectralType::D, d), (0.0, 0.0));
        assert_eq!(mass(SpectralType::D, d), DEFAULT_MASS);
    }

    #[test]
    fn test_sun_like_values() {
        let v = LuminosityClass::V;
        assert_eq!(biozone(SpectralType::G, v), (1.6, 2.4));
        assert_eq!(mass(SpectralType::G, v), 1.1);
        assert_eq!(inner_limit(SpectralType::G, v), 0.0);
        assert_eq!(luminosity("G2"), 1.0);
        assert_eq!(luminosity("Z9"), 1.0);
        assert_eq!(luminosity("M6"), 0.0002);
        assert_eq!(surface_temperature("G2"), Some(5800));
        assert_eq!(surface_temperature("Z9"), None);
    }

    #[test]
    fn test_red_dwarf_size_iv_has_no_biozone() {
        assert_eq!(biozone(SpectralType::M, LuminosityClass::IV), (0.0, 0.0));
    }

    #[test]
    fn test_every_main_type_has_subtypes() {
        for t in [
            SpectralType::O,
            SpectralType::B,
            SpectralType::A,
            SpectralType::F,
            SpectralType::G,
            SpectralType::K,
            SpectralType::M,
        ] {
            assert!(!spectral_subtypes(t).is_empty(), "{} has no subtypes", t);
        }
    }
}
