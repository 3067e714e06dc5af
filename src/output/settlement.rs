//! Settlement code formatting

use crate::orbits::{Body, GiantSize, Orbit, Profile};
use crate::stellar::Star;

/// Code written for an empty orbit
pub const EMPTY_CODE: &str = ".......-.";
/// Code written for every asteroid belt
pub const BELT_CODE: &str = "XR00000-0";

/// Extended-hex digit: 0-9 then A-F. Values above 15 render as F.
pub fn ehex(value: u8) -> char {
    match value {
        0..=9 => (b'0' + value) as char,
        10..=15 => (b'A' + value - 10) as char,
        _ => 'F',
    }
}

/// Eight-field profile code, e.g. "A867974-C"
pub fn profile_code(profile: &Profile) -> String {
    format!(
        "{}{}{}{}{}{}{}-{}",
        profile.starport,
        ehex(profile.size),
        ehex(profile.atmosphere),
        ehex(profile.hydrographics),
        ehex(profile.population),
        ehex(profile.government),
        ehex(profile.law),
        ehex(profile.tech)
    )
}

/// Settlement code of any orbit of `star`. Always nine characters wide.
pub fn orbit_code(star: &Star, orbit: &Orbit) -> String {
    match orbit.body {
        Body::Empty => EMPTY_CODE.to_string(),
        Body::Belt => BELT_CODE.to_string(),
        Body::GasGiant { size: GiantSize::Small } => "Small GG ".to_string(),
        Body::GasGiant { size: GiantSize::Large } => "Large GG ".to_string(),
        Body::Companion { .. } => {
            let class = star.companion_for(orbit).map(Star::classification).unwrap_or_default();
            format!("{:<9}", class)
        }
        Body::Rockball | Body::Hostile | Body::World(_) => profile_code(&orbit.profile),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::orbits::Zone;
    use crate::stellar::{LuminosityClass, SpectralType};
    use crate::worlds::Starport;

    #[test]
    fn test_ehex_digits() {
        let digits: String = (0..=16).map(ehex).collect();
        assert_eq!(digits, "0123456789ABCDEFF");
    }

    #[test]
    fn test_fixed_codes() {
        let star = Star::new(SpectralType::G, LuminosityClass::V, 2, 0.3);
        let empty = Orbit::new(0, 0.3, Zone::Inner, false, Body::Empty);
        let belt = Orbit::new(1, 0.6, Zone::Inner, false, Body::Belt);
        let small = Body::GasGiant { size: GiantSize::Small };
        let giant = Orbit::new(4, 4.8, Zone::Outer, false, small);
        assert_eq!(orbit_code(&star, &empty), ".......-.");
        assert_eq!(orbit_code(&star, &belt), "XR00000-0");
        assert_eq!(orbit_code(&star, &giant), "Small GG ");
    }

    #[test]
    fn test_rockball_uses_profile() {
        let star = Star::new(SpectralType::G, LuminosityClass::V, 2, 0.3);
        let rock = Orbit::new(0, 0.3, Zone::Inner, false, Body::Rockball);
        assert_eq!(orbit_code(&star, &rock), "X000000-0");
    }

    #[test]
    fn test_profile_code() {
        let profile = Profile {
            starport: Starport::A,
            size: 8,
            atmosphere: 6,
            hydrographics: 7,
            population: 9,
            government: 7,
            law: 4,
            tech: 12,
        };
        assert_eq!(profile_code(&profile), "A867974-C");
    }

    #[test]
    fn test_companion_code_padded() {
        let mut star = Star::new(SpectralType::G, LuminosityClass::V, 2, 0.3);
        star.companions.push(Star::new(SpectralType::M, LuminosityClass::V, 4, 0.2));
        let marker = Orbit::new(1, 0.6, Zone::Inner, false, Body::Companion { companion: 0 });
        assert_eq!(orbit_code(&star, &marker), "M4V      ");
    }
}
