//! Integration tests for sector and system generation
//!
//! These drive the public API end to end:
//! - Same seed, same sector
//! - Orbit lists are ordered, pruned and numbered
//! - Companions clear their exclusion band
//! - World attributes stay inside their ranges

use astromapper::core::seed::display_code;
use astromapper::core::{Density, Dice, GeneratorConfig};
use astromapper::orbits::OrbitKind;
use astromapper::output::{sector_json, sector_listing};
use astromapper::sector::{assemble, assemble_config, build_volume, Sector};
use astromapper::stellar::Star;
use astromapper::worlds::{Starport, TravelCode};

fn alpha7() -> Sector {
    let mut dice = Dice::from_seed_str(&display_code("ALPHA7"));
    assemble("Alpha", 32, 40, Density::Standard.fraction(), &[], &mut dice)
}

/// Primary stars of every generated volume, plus their companions
fn all_stars(sector: &Sector) -> Vec<&Star> {
    sector
        .volumes()
        .filter_map(|v| v.star.as_ref())
        .flat_map(|s| std::iter::once(s).chain(s.companions.iter()))
        .collect()
}

#[test]
fn test_alpha7_is_reproducible() {
    let a = alpha7();
    let b = alpha7();

    assert_eq!(a.occupancy(), b.occupancy());
    let cribs = |s: &Sector| {
        s.volumes()
            .map(|v| (v.location(), v.star.as_ref().map(Star::crib)))
            .collect::<Vec<_>>()
    };
    assert_eq!(cribs(&a), cribs(&b));
    assert_eq!(sector_json(&a).unwrap(), sector_json(&b).unwrap());
    assert_eq!(sector_listing(&a), sector_listing(&b));
}

#[test]
fn test_alpha7_matches_recorded_sector() {
    assert_eq!(display_code("ALPHA7"), "WF866-4FJD4");

    let sector = alpha7();
    let occupancy = sector.occupancy();
    assert!(!occupancy[0]);
    assert!(occupancy[1]);
    assert!(sector.get(0, 0).is_none());

    let first = sector.get(1, 0).unwrap();
    assert_eq!(first.location(), "0201");
    assert_eq!(first.star.as_ref().map(Star::classification), Some("K5V".to_string()));
}

#[test]
fn test_standard_density_fills_about_half() {
    let sector = alpha7();
    let occupied = sector.occupancy().iter().filter(|&&o| o).count();
    // 1280 cells at p = 0.5
    assert!((500..=780).contains(&occupied), "occupied {}", occupied);
    assert!(sector.system_count() <= occupied);
}

#[test]
fn test_raw_seed_and_display_code_agree() {
    let code = display_code("ALPHA7");
    assert_eq!(display_code(&code), code);

    let from_code = assemble("A", 8, 10, 0.5, &[], &mut Dice::from_seed_str(&code));
    let again = assemble("A", 8, 10, 0.5, &[], &mut Dice::from_seed_str(&display_code(&code)));
    assert_eq!(from_code.occupancy(), again.occupancy());
}

#[test]
fn test_config_drives_assembly() {
    let config = GeneratorConfig::from_toml_str(
        r#"
        name = "Frontier"
        width = 16
        height = 20
        density = "sparse"
        "#,
    )
    .unwrap();
    let mut dice = Dice::from_seed_str("FRONTIER");
    let sector = assemble_config(&config, &[], &mut dice);
    assert_eq!(sector.name, "Frontier");
    assert_eq!((sector.width, sector.height), (16, 20));
    assert_eq!(sector.subsectors().len(), 4);
}

#[test]
fn test_orbits_are_ordered_pruned_and_numbered() {
    let sector = alpha7();
    for star in all_stars(&sector) {
        for pair in star.orbits.windows(2) {
            assert!(pair[0].au < pair[1].au, "{} orbits out of order", star.crib());
        }
        for (i, orbit) in star.orbits.iter().enumerate() {
            assert_eq!(orbit.index, i);
        }
        if let Some(last) = star.orbits.last() {
            assert_ne!(last.kind(), OrbitKind::Empty);
        }
    }
}

#[test]
fn test_canonical_world_is_first_world_orbit() {
    let sector = alpha7();
    for star in all_stars(&sector) {
        let first = star.orbits.iter().position(|o| o.kind() == OrbitKind::World);
        assert_eq!(star.world_orbit().map(|o| o.index), first);
        assert_eq!(star.has_world(), star.world().is_some());
    }
}

#[test]
fn test_companions_clear_their_band() {
    let sector = alpha7();
    let mut seen = 0;
    for primary in sector.volumes().filter_map(|v| v.star.as_ref()) {
        let markers = primary
            .orbits
            .iter()
            .filter(|o| o.kind() == OrbitKind::Companion)
            .count();
        assert_eq!(markers, primary.companions.len());

        for companion in &primary.companions {
            seen += 1;
            let distance = primary.orbit_to_au(companion.orbit);
            for orbit in &primary.orbits {
                if orbit.kind() == OrbitKind::Companion && orbit.au == distance {
                    continue;
                }
                assert!(
                    orbit.au <= 0.67 * distance || orbit.au >= 3.0 * distance,
                    "{} keeps an orbit at {} au inside the band of a companion at {} au",
                    primary.crib(),
                    orbit.au,
                    distance
                );
            }
        }
    }
    assert!(seen > 0, "expected at least one companion in a full sector");
}

#[test]
fn test_multiple_companions_keep_separate_bands() {
    let mut checked = 0;
    for seed in 0..4000u64 {
        let volume = build_volume(1, 1, &[], &mut Dice::from_seed(seed));
        let Some(primary) = volume.star.as_ref() else { continue };
        if primary.companions.len() < 2 {
            continue;
        }
        checked += 1;
        for companion in &primary.companions {
            let distance = primary.orbit_to_au(companion.orbit);
            let crowded: Vec<(OrbitKind, f64)> = primary
                .orbits
                .iter()
                .filter(|o| o.au != distance)
                .filter(|o| o.au >= 0.67 * distance && o.au <= 3.0 * distance)
                .map(|o| (o.kind(), o.au))
                .collect();
            assert!(
                crowded.is_empty(),
                "seed {} companion at {} au shares its band with {:?}",
                seed,
                distance,
                crowded
            );
        }
    }
    assert!(checked > 0, "expected some systems with two companions");
}

#[test]
fn test_world_attributes_within_bounds() {
    let sector = alpha7();
    for star in all_stars(&sector) {
        for orbit in star.orbits.iter().filter(|o| o.is_world()) {
            let p = &orbit.profile;
            for value in [p.size, p.atmosphere, p.population, p.government, p.law, p.tech] {
                assert!(value <= 15);
            }
            assert!(p.hydrographics <= 10);
            assert!(matches!(
                p.starport,
                Starport::A | Starport::B | Starport::C | Starport::D | Starport::E | Starport::X
            ));
            let world = orbit.world().unwrap();
            assert_eq!(world.travel_code, TravelCode::assess(p.government, p.law));
            if p.population == 0 {
                assert!(world.factions.is_empty());
            }
        }
    }
}

#[test]
fn test_smallest_worlds_are_airless_and_dry() {
    // 2d6 - 1 bottoms out at size 1; size 0 and 1 share the same rules
    let mut dice = Dice::from_seed_str("TINY");
    let mut found = 0;
    for _ in 0..3000 {
        let volume = build_volume(1, 1, &[], &mut dice);
        let Some(star) = volume.star.as_ref() else { continue };
        for orbit in star.orbits.iter().filter(|o| o.is_world() && o.profile.size <= 1) {
            found += 1;
            assert_eq!(orbit.profile.atmosphere, 0);
            assert_eq!(orbit.profile.hydrographics, 0);
        }
    }
    assert!(found > 0);
}

#[test]
fn test_travel_code_scenarios() {
    assert_eq!(TravelCode::assess(0, 0).code(), 'A');
    assert_eq!(TravelCode::assess(5, 5).code(), '.');
}

#[test]
fn test_starport_x_tech_penalty() {
    assert_eq!(Starport::X.tech_modifier(), -4);
}

#[test]
fn test_gas_giant_flag_matches_system() {
    let sector = alpha7();
    for star in sector.volumes().filter_map(|v| v.star.as_ref()) {
        if let Some(world) = star.world() {
            let has_giant = star.orbits.iter().any(|o| o.kind() == OrbitKind::GasGiant);
            assert_eq!(world.gas_giant, has_giant);
        }
    }
}
