//! Habitable world payload

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::worlds::trade::TradeCode;

/// Starport quality, best to worst
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Starport {
    A,
    B,
    C,
    D,
    E,
    X,
}

impl Starport {
    /// Threshold a starport roll (2d6 - 7 + population)
    pub fn from_roll(roll: i32) -> Self {
        match roll {
            i32::MIN..=2 => Starport::X,
            3..=4 => Starport::E,
            5..=6 => Starport::D,
            7..=8 => Starport::C,
            9..=10 => Starport::B,
            _ => Starport::A,
        }
    }

    /// Contribution to the tech level roll
    pub fn tech_modifier(&self) -> i32 {
        match self {
            Starport::A => 6,
            Starport::B => 4,
            Starport::C => 2,
            Starport::D | Starport::E => 0,
            Starport::X => -4,
        }
    }

    pub fn code(&self) -> char {
        match self {
            Starport::A => 'A',
            Starport::B => 'B',
            Starport::C => 'C',
            Starport::D => 'D',
            Starport::E => 'E',
            Starport::X => 'X',
        }
    }
}

impl fmt::Display for Starport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Temperature {
    Frozen,
    Cold,
    Temperate,
    Hot,
    Roasting,
}

impl Temperature {
    pub fn code(&self) -> char {
        match self {
            Temperature::Frozen => 'F',
            Temperature::Cold => 'C',
            Temperature::Temperate => 'T',
            Temperature::Hot => 'H',
            Temperature::Roasting => 'R',
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Temperature::Frozen => "Frozen",
            Temperature::Cold => "Cold",
            Temperature::Temperate => "Temperate",
            Temperature::Hot => "Hot",
            Temperature::Roasting => "Roasting",
        }
    }
}

/// Strength of a political faction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Faction {
    Obscure,
    Fringe,
    Minor,
    Notable,
    Significant,
    Powerful,
}

impl Faction {
    pub fn code(&self) -> char {
        match self {
            Faction::Obscure => 'O',
            Faction::Fringe => 'F',
            Faction::Minor => 'M',
            Faction::Notable => 'N',
            Faction::Significant => 'S',
            Faction::Powerful => 'P',
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Base {
    Naval,
    Scout,
    Research,
}

impl Base {
    pub fn code(&self) -> char {
        match self {
            Base::Naval => 'N',
            Base::Scout => 'S',
            Base::Research => 'R',
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum TravelCode {
    #[default]
    Green,
    Amber,
}

impl TravelCode {
    /// Amber for anarchies and heavily policed worlds
    pub fn assess(government: u8, law: u8) -> Self {
        if (government == 0 && law == 0) || law >= 9 {
            TravelCode::Amber
        } else {
            TravelCode::Green
        }
    }

    pub fn code(&self) -> char {
        match self {
            TravelCode::Green => '.',
            TravelCode::Amber => 'A',
        }
    }
}

/// Extras carried by a habitable world on top of the orbit profile
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct World {
    pub temperature: Temperature,
    pub factions: Vec<Faction>,
    pub trade_codes: Vec<TradeCode>,
    pub bases: Vec<Base>,
    pub travel_code: TravelCode,
    /// Set once the whole system is formed
    pub gas_giant: bool,
}

impl World {
    /// Concatenated base codes, "." when there are none
    pub fn bases_code(&self) -> String {
        if self.bases.is_empty() {
            return ".".to_string();
        }
        self.bases.iter().map(|b| b.code()).collect()
    }

    pub fn factions_code(&self) -> String {
        self.factions.iter().map(|f| f.code()).collect()
    }

    /// Space-separated trade codes, e.g. "Ag Ni"
    pub fn trade_code_list(&self) -> String {
        self.trade_codes
            .iter()
            .map(|t| t.code())
            .collect::<Vec<_>>()
            .join(" ")
    }
}
