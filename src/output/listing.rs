//! Fixed-column text listing of sectors and single systems

use crate::orbits::{Orbit, Zone};
use crate::output::settlement::{ehex, orbit_code, profile_code};
use crate::sector::{Sector, Volume};
use crate::stellar::Star;

const COLUMN_HEADER: &str =
    "Location UWP       Temp Bases TC          Factions     Stars         Orbits        Name";
const COLUMN_RULE: &str =
    "-------- --------- ---- ----- ----------- ------------ ------------- ------------- ----";

/// Listing of every system in the sector, grouped by subsector.
/// Subsectors without systems are left out.
pub fn sector_listing(sector: &Sector) -> String {
    let mut out = format!(
        "# Sector: {}\n# {} columns x {} rows\n{}\n{}\n",
        sector.name, sector.width, sector.height, COLUMN_HEADER, COLUMN_RULE
    );

    for subsector in sector.subsectors() {
        let mut systems = sector.subsector_systems(&subsector).peekable();
        if systems.peek().is_none() {
            continue;
        }
        out.push_str(&format!("\n# Subsector {}\n", subsector.letter));
        for volume in systems {
            out.push_str(&volume_listing(volume));
            out.push('\n');
        }
    }
    out
}

/// Summary line plus orbit lines for one system; empty for empty volumes
pub fn volume_listing(volume: &Volume) -> String {
    let Some(star) = volume.star.as_ref() else {
        return String::new();
    };
    let Some(orbit) = star.world_orbit() else {
        return String::new();
    };
    let Some(world) = orbit.world() else {
        return String::new();
    };

    let factions = world
        .factions
        .iter()
        .map(|f| f.code().to_string())
        .collect::<Vec<_>>()
        .join(" ");

    let mut out = format!(
        "{:<8} {:<9} {:<4} {:<5} {:<11} {:<12} {:<13} {:<13} {}",
        volume.location(),
        profile_code(&orbit.profile),
        world.temperature.code(),
        world.bases_code(),
        world.trade_code_list(),
        factions,
        star.crib(),
        star.orbit_crib(),
        volume.name
    );

    if !star.orbits.is_empty() {
        out.push('\n');
        let lines: Vec<String> = star.orbits.iter().map(|o| orbit_line(star, o)).collect();
        out.push_str(&lines.join("\n"));
        out.push('\n');
    }
    out
}

/// `*` marks the biozone, `-` an orbit past the outer limit
fn orbit_line(star: &Star, orbit: &Orbit) -> String {
    let marker = if orbit.au > star.outer_limit() {
        '-'
    } else if orbit.zone == Zone::Biozone {
        '*'
    } else {
        ' '
    };

    let mut line = format!(
        "  -- {:>2}. {}  {} // {} // {:>4.1} au",
        orbit.index + 1,
        marker,
        orbit.kind().code(),
        orbit_code(star, orbit),
        orbit.au
    );
    for moon in &orbit.moons {
        line.push_str(&format!(
            "\n     -- Moon {}: Size {} Atmo {} Hydro {}",
            moon.index + 1,
            ehex(moon.size),
            ehex(moon.atmosphere),
            ehex(moon.hydrographics)
        ));
    }
    line
}
