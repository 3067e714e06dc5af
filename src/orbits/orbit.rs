//! Orbit records and the bodies that occupy them

use serde::{Deserialize, Serialize, Serializer};

use crate::worlds::{Starport, World};

/// Position of an orbit relative to the star's habitable zone
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Zone {
    Inner,
    Biozone,
    Outer,
}

impl Zone {
    /// Classify a distance against habitable-zone bounds
    pub fn from_au(au: f64, biozone: (f64, f64)) -> Self {
        if au < biozone.0 {
            Zone::Inner
        } else if au > biozone.1 {
            Zone::Outer
        } else {
            Zone::Biozone
        }
    }
}

/// Physical and social profile shared by every orbit kind.
/// Bodies without a settlement keep starport X and zeroed fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    pub starport: Starport,
    pub size: u8,
    pub atmosphere: u8,
    pub hydrographics: u8,
    pub population: u8,
    pub government: u8,
    pub law: u8,
    pub tech: u8,
}

impl Default for Profile {
    fn default() -> Self {
        Self {
            starport: Starport::X,
            size: 0,
            atmosphere: 0,
            hydrographics: 0,
            population: 0,
            government: 0,
            law: 0,
            tech: 0,
        }
    }
}

/// A moon: size only, atmosphere and hydrographics are always zero
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Moon {
    pub index: usize,
    pub size: u8,
    pub atmosphere: u8,
    pub hydrographics: u8,
}

impl Moon {
    pub fn new(index: usize, size: u8) -> Self {
        Self {
            index,
            size,
            atmosphere: 0,
            hydrographics: 0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GiantSize {
    Small,
    Large,
}

impl GiantSize {
    pub fn code(&self) -> char {
        match self {
            GiantSize::Small => 'S',
            GiantSize::Large => 'L',
        }
    }
}

/// Tag for what occupies an orbit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OrbitKind {
    Empty,
    Belt,
    Rockball,
    Hostile,
    GasGiant,
    World,
    Companion,
}

impl OrbitKind {
    /// Single-character crib code
    pub fn code(&self) -> char {
        match self {
            OrbitKind::Empty => '.',
            OrbitKind::Belt => 'B',
            OrbitKind::Rockball => 'R',
            OrbitKind::Hostile => 'H',
            OrbitKind::GasGiant => 'G',
            OrbitKind::World => 'W',
            OrbitKind::Companion => 'S',
        }
    }
}

/// Kind-specific payload of an orbit
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Body {
    Empty,
    Belt,
    Rockball,
    Hostile,
    GasGiant { size: GiantSize },
    World(World),
    /// Index into the owning star's `companions`
    Companion { companion: usize },
}

impl Body {
    pub fn kind(&self) -> OrbitKind {
        match self {
            Body::Empty => OrbitKind::Empty,
            Body::Belt => OrbitKind::Belt,
            Body::Rockball => OrbitKind::Rockball,
            Body::Hostile => OrbitKind::Hostile,
            Body::GasGiant { .. } => OrbitKind::GasGiant,
            Body::World(_) => OrbitKind::World,
            Body::Companion { .. } => OrbitKind::Companion,
        }
    }
}

/// One orbital slot around a star
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Orbit {
    /// Position in the star's orbit list, contiguous from 0
    pub index: usize,
    /// Distance from the star
    #[serde(serialize_with = "round_tenths")]
    pub au: f64,
    pub zone: Zone,
    /// More than ten times the outer biozone bound
    pub distant: bool,
    pub profile: Profile,
    pub moons: Vec<Moon>,
    #[serde(flatten)]
    pub body: Body,
}

impl Orbit {
    pub fn new(index: usize, au: f64, zone: Zone, distant: bool, body: Body) -> Self {
        Self {
            index,
            au,
            zone,
            distant,
            profile: Profile::default(),
            moons: Vec::new(),
            body,
        }
    }

    pub fn kind(&self) -> OrbitKind {
        self.body.kind()
    }

    pub fn is_world(&self) -> bool {
        self.kind() == OrbitKind::World
    }

    pub fn world(&self) -> Option<&World> {
        match &self.body {
            Body::World(world) => Some(world),
            _ => None,
        }
    }

    pub fn world_mut(&mut self) -> Option<&mut World> {
        match &mut self.body {
            Body::World(world) => Some(world),
            _ => None,
        }
    }
}

/// Orbital distances are written with one decimal place everywhere
pub fn round_tenths<S: Serializer>(au: &f64, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_f64((au * 10.0).round() / 10.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zone_boundaries_are_inclusive() {
        let bounds = (1.6, 2.4);
        assert_eq!(Zone::from_au(1.5, bounds), Zone::Inner);
        assert_eq!(Zone::from_au(1.6, bounds), Zone::Biozone);
        assert_eq!(Zone::from_au(2.4, bounds), Zone::Biozone);
        assert_eq!(Zone::from_au(2.5, bounds), Zone::Outer);
    }

    #[test]
    fn test_no_biozone_puts_everything_outside() {
        assert_eq!(Zone::from_au(0.7, (0.0, 0.0)), Zone::Outer);
    }

    #[test]
    fn test_kind_codes() {
        let codes: String = [
            OrbitKind::Empty,
            OrbitKind::Belt,
            OrbitKind::Rockball,
            OrbitKind::Hostile,
            OrbitKind::GasGiant,
            OrbitKind::World,
            OrbitKind::Companion,
        ]
        .iter()
        .map(|k| k.code())
        .collect();
        assert_eq!(codes, ".BRHGWS");
    }

    #[test]
    fn test_json_rounds_distance() {
        let large = Body::GasGiant { size: GiantSize::Large };
        let orbit = Orbit::new(2, 1.234, Zone::Outer, false, large);
        let json = serde_json::to_value(&orbit).unwrap();
        assert_eq!(json["au"], 1.2);
        assert_eq!(json["kind"], "gas_giant");
        assert_eq!(json["size"], "large");
    }
}
