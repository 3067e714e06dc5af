//! Habitable world derivation
//!
//! Every step reads the results of the steps before it and the dice are
//! consumed in exactly this order:
//! size, atmosphere, temperature, hydrographics, population, government, law,
//! starport, tech, factions, bases, moons.

use crate::core::Dice;
use crate::orbits::classifier::generate_moons;
use crate::orbits::{Body, Orbit, Profile, Zone};
use crate::stellar::tables::lookup;
use crate::stellar::Star;
use crate::worlds::trade;
use crate::worlds::world::{Base, Faction, Starport, Temperature, TravelCode, World};

/// Temperature roll modifier by atmosphere
const ATMOSPHERE_TEMPERATURE: [i32; 16] = [0, 0, -2, -2, -1, -1, 0, 0, 1, 1, 2, 6, 6, 2, -1, 2];

/// Temperature band by modified 2d6
const TEMPERATURE_BANDS: [Temperature; 17] = [
    Temperature::Frozen,
    Temperature::Frozen,
    Temperature::Frozen,
    Temperature::Cold,
    Temperature::Cold,
    Temperature::Temperate,
    Temperature::Temperate,
    Temperature::Temperate,
    Temperature::Temperate,
    Temperature::Temperate,
    Temperature::Hot,
    Temperature::Hot,
    Temperature::Roasting,
    Temperature::Roasting,
    Temperature::Roasting,
    Temperature::Roasting,
    Temperature::Roasting,
];

/// Population modifier by atmosphere; thin, standard and dense
/// breathable air attract settlers
const ATMOSPHERE_POPULATION: [i32; 16] = [
    -1, -1, -1, -1, -1, 1, 1, -1, 1, -1, -1, -1, -1, -1, -1, -1,
];

const SIZE_TECH: [i32; 16] = [2, 2, 1, 1, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0];
const ATMOSPHERE_TECH: [i32; 16] = [1, 1, 1, 1, 0, 0, 0, 0, 0, 0, 1, 1, 1, 1, 1, 1];
const HYDROGRAPHICS_TECH: [i32; 11] = [1, 0, 0, 0, 0, 0, 0, 0, 0, 1, 2];
const POPULATION_TECH: [i32; 13] = [0, 1, 1, 1, 1, 1, 0, 0, 0, 1, 2, 3, 4];
const GOVERNMENT_TECH: [i32; 16] = [1, 0, 0, 0, 0, 1, 0, 2, 0, 0, 0, 0, 0, -2, -2, 0];

/// Highest tech level a world can sustain, by atmosphere
const TECH_CEILING: [i32; 16] = [8, 8, 8, 8, 8, 8, 8, 8, 8, 8, 8, 9, 10, 5, 5, 5];

/// Faction strength by 2d6
const FACTION_STRENGTHS: [Faction; 13] = [
    Faction::Obscure,
    Faction::Obscure,
    Faction::Obscure,
    Faction::Obscure,
    Faction::Fringe,
    Faction::Fringe,
    Faction::Minor,
    Faction::Minor,
    Faction::Notable,
    Faction::Notable,
    Faction::Significant,
    Faction::Significant,
    Faction::Powerful,
];

/// Atmospheres that cannot hold surface water without help
fn is_vacuum_like(atmosphere: u8) -> bool {
    matches!(atmosphere, 0 | 1 | 10..=12)
}

fn clamp_u8(value: i32, max: i32) -> u8 {
    value.clamp(0, max) as u8
}

/// Build the habitable world occupying slot `index` of `star`
pub fn derive_world(star: &Star, dice: &mut Dice, index: usize) -> Orbit {
    let au = star.orbit_to_au(index as i32);
    let biozone = star.biozone();
    let zone = Zone::from_au(au, biozone);
    let distant = au > biozone.1 * 10.0;

    let size = dice.two_d6() - 1;
    let atmosphere = atmosphere(size, dice.d6());
    let temperature = temperature(dice.two_d6() + lookup(&ATMOSPHERE_TEMPERATURE, atmosphere, 0));
    let hydrographics = hydrographics(dice, size, atmosphere, zone, temperature);

    let mut population = dice.d6();
    if !(3..=9).contains(&size) {
        population -= 1;
    }
    population = (population + lookup(&ATMOSPHERE_POPULATION, atmosphere, -1)).max(0);

    let government = (dice.two_d6() - 7 + population).clamp(0, 15);
    let law = (dice.two_d6() - 7 + government).clamp(0, 15);
    let starport = Starport::from_roll(dice.two_d6() - 7 + population);

    let mut profile = Profile {
        starport,
        size: clamp_u8(size, 15),
        atmosphere: clamp_u8(atmosphere, 15),
        hydrographics: clamp_u8(hydrographics, 10),
        population: clamp_u8(population, 15),
        government: clamp_u8(government, 15),
        law: clamp_u8(law, 15),
        tech: 0,
    };
    profile.tech = tech_level(dice, &profile);

    let factions = factions(dice, &profile);
    let trade_codes = trade::classify(&profile);
    let bases = bases(dice, starport);
    let travel_code = TravelCode::assess(profile.government, profile.law);

    let world = World {
        temperature,
        factions,
        trade_codes,
        bases,
        travel_code,
        gas_giant: false,
    };

    let mut orbit = Orbit::new(index, au, zone, distant, Body::World(world));
    orbit.profile = profile;
    let moons = dice.d6() - 3;
    orbit.moons = generate_moons(dice, moons);
    orbit
}

/// Small worlds cannot hold air; size 3-4 worlds end up thin or exotic
fn atmosphere(size: i32, roll: i32) -> i32 {
    match size {
        s if s < 3 => 0,
        3 | 4 if (3..=5).contains(&roll) => 1,
        3 | 4 if roll > 5 => 10,
        _ => roll,
    }
}

/// Map a modified 2d6 to a temperature band, clamping at both ends
fn temperature(roll: i32) -> Temperature {
    if roll < 0 {
        return Temperature::Frozen;
    }
    lookup(&TEMPERATURE_BANDS, roll, Temperature::Roasting)
}

/// Tiny worlds and worlds outside the biozone are dry and skip the roll
fn hydrographics(
    dice: &mut Dice,
    size: i32,
    atmosphere: i32,
    zone: Zone,
    temperature: Temperature,
) -> i32 {
    if size < 2 || zone != Zone::Biozone {
        return 0;
    }

    let offset = if is_vacuum_like(clamp_u8(atmosphere, 15)) { -11 } else { -7 };
    let mut hydro = dice.two_d6() + offset + size;
    match temperature {
        Temperature::Hot => hydro -= 2,
        Temperature::Roasting => hydro -= 6,
        _ => {}
    }
    hydro.clamp(0, 10)
}

/// Tech level: d6 plus modifiers, capped by what the atmosphere allows
fn tech_level(dice: &mut Dice, profile: &Profile) -> u8 {
    let modifier = profile.starport.tech_modifier()
        + lookup(&SIZE_TECH, profile.size as i32, 0)
        + lookup(&ATMOSPHERE_TECH, profile.atmosphere as i32, 0)
        + lookup(&HYDROGRAPHICS_TECH, profile.hydrographics as i32, 0)
        + lookup(&POPULATION_TECH, profile.population as i32, 0)
        + lookup(&GOVERNMENT_TECH, profile.government as i32, 0);

    let tech = dice.d6() + modifier;
    let ceiling = lookup(&TECH_CEILING, profile.atmosphere as i32, 15);
    clamp_u8(tech.min(ceiling), 15)
}

/// Uninhabited worlds have no factions and draw nothing
fn factions(dice: &mut Dice, profile: &Profile) -> Vec<Faction> {
    if profile.population == 0 {
        return Vec::new();
    }

    let mut count = dice.roll(1, 3).max(3);
    match profile.government {
        0 | 7 => count += 1,
        g if g > 9 => count -= 1,
        _ => {}
    }

    (0..count)
        .map(|_| lookup(&FACTION_STRENGTHS, dice.two_d6(), Faction::Obscure))
        .collect()
}

/// Naval and scout rolls depend on the starport; every world rolls for research
fn bases(dice: &mut Dice, starport: Starport) -> Vec<Base> {
    let mut bases = Vec::new();
    let (naval, scout) = match starport {
        Starport::A => (Some(8), Some(10)),
        Starport::B => (Some(8), Some(9)),
        Starport::C => (None, Some(8)),
        Starport::D => (None, Some(7)),
        Starport::E | Starport::X => (None, None),
    };

    if let Some(target) = naval {
        if dice.two_d6() >= target {
            bases.push(Base::Naval);
        }
    }
    if let Some(target) = scout {
        if dice.two_d6() >= target {
            bases.push(Base::Scout);
        }
    }
    if dice.two_d6() >= 10 {
        bases.push(Base::Research);
    }
    bases
}
