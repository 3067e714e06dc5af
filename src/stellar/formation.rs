//! Stellar formation
//!
//! Builds a star, populates its orbits through the slot classifier and
//! attaches companions. Draw order:
//! classification rolls, subtype, Bode constant, orbit count, then one
//! classification per orbit slot.

use crate::core::Dice;
use crate::orbits::{classify, Body, Orbit, OrbitKind, Zone};
use crate::stellar::star::{
    au_to_orbit, LuminosityClass, SpectralType, Star, StarRole, DEGENERATE_SIZE,
};
use crate::stellar::tables::{
    self, lookup, BODE_RATIOS, COMPANION_SEPARATION, COMPANION_SIZES, COMPANION_TYPES,
    PRIMARY_SIZES, PRIMARY_TYPES, RED_DWARF_BODE,
};

/// Companion exclusion band, as multiples of the companion's distance
pub const EXCLUSION_INNER: f64 = 0.67;
pub const EXCLUSION_OUTER: f64 = 3.0;

/// Form a primary star (`primary` is `None`) or the `companion_index`-th
/// companion of `primary`. Companions are returned detached; hand them to
/// [`attach_companion`].
pub fn form_star(dice: &mut Dice, primary: Option<&Star>, companion_index: usize) -> Star {
    let (spectral_type, size, type_dm, size_dm, orbit, role) = match primary {
        None => {
            let type_dm = dice.two_d6().min(12);
            let size_dm = dice.two_d6().min(12);
            (
                lookup(&PRIMARY_TYPES, type_dm, SpectralType::M),
                lookup(&PRIMARY_SIZES, size_dm, 5),
                type_dm,
                size_dm,
                0,
                StarRole::Primary,
            )
        }
        Some(primary) => {
            let ladder = (dice.three_d6() + 4 * companion_index as i32 - 2)
                .clamp(0, COMPANION_SEPARATION.len() as i32 - 1);
            let separation = dice.two_d6() as f64 * lookup(&COMPANION_SEPARATION, ladder, 50.0);
            let separation = (separation * 100.0).round() / 100.0;
            // The companion's own inner limit is unknown until it is classified
            let orbit = au_to_orbit(separation, primary.bode_constant, 0.0) - 1;

            let type_roll = (dice.two_d6() + primary.type_dm).min(12);
            let size_roll = (dice.two_d6() + primary.size_dm).min(12);
            (
                lookup(&COMPANION_TYPES, type_roll, SpectralType::M),
                lookup(&COMPANION_SIZES, size_roll, 5),
                0,
                0,
                orbit,
                StarRole::Companion { index: companion_index },
            )
        }
    };

    let subtype = dice
        .choose(tables::spectral_subtypes(spectral_type))
        .copied()
        .unwrap_or(0);
    let luminosity_class = LuminosityClass::from_code(size);
    let final_type = if size == DEGENERATE_SIZE {
        SpectralType::D
    } else {
        spectral_type
    };

    let bode_constant = if final_type == SpectralType::M && luminosity_class == LuminosityClass::V {
        RED_DWARF_BODE
    } else {
        BODE_RATIOS[dice.uniform(BODE_RATIOS.len())]
    };

    let mut star = Star::new(final_type, luminosity_class, subtype, bode_constant);
    star.spectral_class = spectral_type;
    star.type_dm = type_dm;
    star.size_dm = size_dm;
    star.orbit = orbit;
    star.role = role;

    populate_orbits(&mut star, dice);

    tracing::debug!(
        "Formed {} ({:?}) with {} orbits",
        star.classification(),
        star.role,
        star.orbits.len()
    );
    star
}

/// Orbit count modifier: giants and supergiants hold more orbits, cool
/// dwarfs fewer
fn orbit_dm(star: &Star) -> i32 {
    let mut dm = 0;
    match star.size() {
        3 => dm += 4,
        s if s < 3 => dm += 8,
        _ => {}
    }
    match star.spectral_type {
        SpectralType::M => dm -= 4,
        SpectralType::K => dm -= 2,
        _ => {}
    }
    dm
}

fn populate_orbits(star: &mut Star, dice: &mut Dice) {
    let count = (dice.two_d6() + orbit_dm(star)).max(0);
    let outer_limit = star.outer_limit();

    for i in 0..count {
        if star.orbit_to_au(i) > outer_limit {
            break;
        }
        let orbit = classify(star, dice, i as usize);
        star.orbits.push(orbit);
    }

    star.resolve_main_world();
    mark_gas_giant(star);
    prune_orbits(star);
}

/// Flag the canonical world when any gas giant shares its system
pub fn mark_gas_giant(star: &mut Star) {
    let has_giant = star.orbits.iter().any(|o| o.kind() == OrbitKind::GasGiant);
    let world = star
        .main_world
        .and_then(|i| star.orbits.get_mut(i))
        .and_then(Orbit::world_mut);
    if let Some(world) = world {
        world.gas_giant = has_giant;
    }
}

/// Drop the trailing run of empty orbits and renumber what is left.
/// A list of nothing but empty orbits is cleared.
pub fn prune_orbits(star: &mut Star) {
    let keep = star
        .orbits
        .iter()
        .rposition(|o| o.kind() != OrbitKind::Empty)
        .map_or(0, |last| last + 1);
    star.orbits.truncate(keep);
    renumber(star);
}

fn renumber(star: &mut Star) {
    for (i, orbit) in star.orbits.iter_mut().enumerate() {
        orbit.index = i;
    }
    star.resolve_main_world();
}

/// True when `au` lies in the exclusion band of a companion at `centre`
fn within_band(centre: f64, au: f64) -> bool {
    au >= centre * EXCLUSION_INNER && au <= centre * EXCLUSION_OUTER
}

/// True when a companion at `distance` and an attached companion would sit
/// inside each other's exclusion band
fn crowds_companion(primary: &Star, distance: f64) -> bool {
    primary
        .companions
        .iter()
        .map(|c| primary.orbit_to_au(c.orbit))
        .any(|other| within_band(distance, other) || within_band(other, distance))
}

/// Attach a formed companion to its primary.
///
/// Every orbit of the primary between 0.67 and 3 times the companion's
/// distance is removed and a single companion orbit is inserted at that
/// distance. Surviving orbits keep their distances; indices are renumbered.
/// A companion that would share an exclusion band with an earlier companion
/// moves outward one slot at a time until the bands are clear.
pub fn attach_companion(primary: &mut Star, mut companion: Star) {
    if primary.bode_constant > 0.0 {
        while crowds_companion(primary, primary.orbit_to_au(companion.orbit)) {
            companion.orbit += 1;
        }
    }

    let slot = primary.companions.len();
    companion.role = StarRole::Companion { index: slot };

    let distance = primary.orbit_to_au(companion.orbit);
    let (inner, outer) = (distance * EXCLUSION_INNER, distance * EXCLUSION_OUTER);
    let before = primary.orbits.len();
    primary.orbits.retain(|o| o.au < inner || o.au > outer);

    let biozone = primary.biozone();
    let marker = Orbit::new(
        0,
        distance,
        Zone::from_au(distance, biozone),
        distance > biozone.1 * 10.0,
        Body::Companion { companion: slot },
    );
    let position = primary
        .orbits
        .iter()
        .position(|o| o.au > distance)
        .unwrap_or(primary.orbits.len());
    primary.orbits.insert(position, marker);

    tracing::trace!(
        "Companion {} at {:.2} au cleared {} orbits",
        companion.classification(),
        distance,
        before + 1 - primary.orbits.len()
    );

    primary.companions.push(companion);
    prune_orbits(primary);
    mark_gas_giant(primary);
}
