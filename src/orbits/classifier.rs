//! Orbital slot classification
//!
//! Decides what occupies one orbit of a star. Every dice outcome has a branch;
//! nothing is rerolled.

use crate::core::Dice;
use crate::orbits::orbit::{Body, GiantSize, Moon, Orbit, Profile, Zone};
use crate::stellar::Star;
use crate::worlds::derive_world;

/// Restricted atmospheres of hostile inner worlds
const HOSTILE_ATMOSPHERES: [u8; 5] = [10, 11, 12, 13, 14];

/// Classify slot `index` of `star`
pub fn classify(star: &Star, dice: &mut Dice, index: usize) -> Orbit {
    let au = star.orbit_to_au(index as i32);
    let biozone = star.biozone();
    let zone = Zone::from_au(au, biozone);
    let distant = au > biozone.1 * 10.0;

    if au < star.inner_limit() {
        return Orbit::new(index, au, zone, distant, Body::Empty);
    }

    match zone {
        Zone::Biozone => derive_world(star, dice, index),
        Zone::Inner => inner_orbit(dice, Orbit::new(index, au, zone, distant, Body::Empty)),
        Zone::Outer => outer_orbit(dice, Orbit::new(index, au, zone, distant, Body::Empty)),
    }
}

fn inner_orbit(dice: &mut Dice, mut orbit: Orbit) -> Orbit {
    match dice.two_d6() {
        i32::MIN..=4 => {}
        5..=6 => {
            let atmosphere = HOSTILE_ATMOSPHERES[dice.uniform(HOSTILE_ATMOSPHERES.len())];
            let hydrographics = (dice.two_d6() - 4).max(0) as u8;
            orbit.body = Body::Hostile;
            orbit.profile = Profile {
                atmosphere,
                hydrographics,
                ..Profile::default()
            };
        }
        7..=9 => orbit.body = Body::Rockball,
        10..=11 => orbit.body = Body::Belt,
        _ => {
            // Inner giants carry no moons
            orbit.body = Body::GasGiant {
                size: giant_size(dice),
            };
        }
    }
    orbit
}

fn outer_orbit(dice: &mut Dice, mut orbit: Orbit) -> Orbit {
    let mut roll = dice.d6();
    if orbit.distant {
        roll += 1;
    }

    match roll {
        1 => orbit.body = Body::Rockball,
        2 => orbit.body = Body::Belt,
        3 => {}
        4..=7 => {
            let size = giant_size(dice);
            let mut moons = dice.two_d6();
            if size == GiantSize::Small {
                moons = (moons - 4).max(0);
            }
            orbit.body = Body::GasGiant { size };
            orbit.moons = generate_moons(dice, moons);
        }
        _ => orbit.body = Body::Rockball,
    }
    orbit
}

fn giant_size(dice: &mut Dice) -> GiantSize {
    if dice.d6() < 4 {
        GiantSize::Small
    } else {
        GiantSize::Large
    }
}

/// `count` moons of size d6 - 3 (floored at 0). Non-positive counts draw nothing.
pub fn generate_moons(dice: &mut Dice, count: i32) -> Vec<Moon> {
    (0..count.max(0) as usize)
        .map(|i| Moon::new(i, (dice.d6() - 3).max(0) as u8))
        .collect()
}
