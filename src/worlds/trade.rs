//! Trade classifications

use serde::{Deserialize, Serialize};

use crate::orbits::Profile;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TradeCode {
    /// Agricultural
    Ag,
    /// Asteroid
    As,
    /// Barren
    Ba,
    /// Desert
    De,
    /// Fluid oceans
    Fl,
    /// Garden
    Ga,
    /// High population
    Hi,
    /// High tech
    Ht,
    /// Ice-capped
    Ic,
    /// Industrial
    In,
    /// Low population
    Lo,
    /// Low tech
    Lt,
    /// Non-agricultural
    Na,
    /// Non-industrial
    Ni,
    /// Poor
    Po,
    /// Rich
    Ri,
    /// Water world
    Wa,
    /// Vacuum
    Va,
}

impl TradeCode {
    pub const ALL: [TradeCode; 18] = [
        TradeCode::Ag,
        TradeCode::As,
        TradeCode::Ba,
        TradeCode::De,
        TradeCode::Fl,
        TradeCode::Ga,
        TradeCode::Hi,
        TradeCode::Ht,
        TradeCode::Ic,
        TradeCode::In,
        TradeCode::Lo,
        TradeCode::Lt,
        TradeCode::Na,
        TradeCode::Ni,
        TradeCode::Po,
        TradeCode::Ri,
        TradeCode::Wa,
        TradeCode::Va,
    ];

    pub fn code(&self) -> &'static str {
        match self {
            TradeCode::Ag => "Ag",
            TradeCode::As => "As",
            TradeCode::Ba => "Ba",
            TradeCode::De => "De",
            TradeCode::Fl => "Fl",
            TradeCode::Ga => "Ga",
            TradeCode::Hi => "Hi",
            TradeCode::Ht => "Ht",
            TradeCode::Ic => "Ic",
            TradeCode::In => "In",
            TradeCode::Lo => "Lo",
            TradeCode::Lt => "Lt",
            TradeCode::Na => "Na",
            TradeCode::Ni => "Ni",
            TradeCode::Po => "Po",
            TradeCode::Ri => "Ri",
            TradeCode::Wa => "Wa",
            TradeCode::Va => "Va",
        }
    }

    /// Whether a world with this profile qualifies
    pub fn applies(&self, p: &Profile) -> bool {
        let (siz, atm, hyd, pop) = (p.size, p.atmosphere, p.hydrographics, p.population);
        match self {
            TradeCode::Ag => {
                (4..=9).contains(&atm) && (4..=8).contains(&hyd) && (5..=7).contains(&pop)
            }
            TradeCode::As => siz == 0 && atm == 0 && hyd == 0,
            TradeCode::Ba => pop == 0 && p.government == 0 && p.law == 0,
            TradeCode::De => atm >= 2 && hyd == 0,
            TradeCode::Fl => atm >= 10 && hyd >= 1,
            TradeCode::Ga => siz >= 5 && (4..=9).contains(&atm) && (4..=9).contains(&hyd),
            TradeCode::Hi => pop >= 9,
            TradeCode::Ht => p.tech >= 12,
            TradeCode::Ic => atm <= 1 && hyd >= 1,
            TradeCode::In => matches!(atm, 0 | 1 | 2 | 4 | 7 | 9) && pop >= 9,
            TradeCode::Lo => (1..=3).contains(&pop),
            TradeCode::Lt => p.tech <= 5,
            TradeCode::Na => atm <= 3 && hyd <= 3 && pop >= 6,
            TradeCode::Ni => (4..=6).contains(&pop),
            TradeCode::Po => (2..=5).contains(&atm) && hyd <= 3,
            TradeCode::Ri => matches!(atm, 6 | 8) && (6..=8).contains(&pop),
            TradeCode::Wa => hyd == 10,
            TradeCode::Va => atm == 0,
        }
    }
}

/// Every trade code the profile qualifies for, in canonical order
pub fn classify(profile: &Profile) -> Vec<TradeCode> {
    TradeCode::ALL
        .iter()
        .copied()
        .filter(|code| code.applies(profile))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn profile(size: u8, atmosphere: u8, hydrographics: u8, population: u8) -> Profile {
        Profile {
            size,
            atmosphere,
            hydrographics,
            population,
            government: 4,
            law: 4,
            tech: 8,
            ..Profile::default()
        }
    }

    #[test]
    fn test_agricultural_garden() {
        let codes = classify(&profile(7, 6, 6, 6));
        assert!(codes.contains(&TradeCode::Ag));
        assert!(codes.contains(&TradeCode::Ga));
        assert!(codes.contains(&TradeCode::Ri));
        assert!(codes.contains(&TradeCode::Ni));
        assert!(!codes.contains(&TradeCode::Va));
    }

    #[test]
    fn test_asteroid_vacuum() {
        let codes = classify(&profile(0, 0, 0, 2));
        assert_eq!(codes, vec![TradeCode::As, TradeCode::Lo, TradeCode::Va]);
    }

    #[test]
    fn test_barren_needs_no_government() {
        let mut p = profile(5, 5, 0, 0);
        assert!(!TradeCode::Ba.applies(&p));
        p.government = 0;
        p.law = 0;
        assert!(TradeCode::Ba.applies(&p));
    }

    #[test]
    fn test_tech_bands() {
        let mut p = profile(5, 5, 5, 5);
        p.tech = 12;
        assert!(TradeCode::Ht.applies(&p));
        p.tech = 5;
        assert!(TradeCode::Lt.applies(&p));
        assert!(!TradeCode::Ht.applies(&p));
    }
}
