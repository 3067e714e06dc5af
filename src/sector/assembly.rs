//! Sector assembly

use crate::core::{Dice, GeneratorConfig};
use crate::sector::grid::Sector;
use crate::sector::volume::build_volume;

/// Fill a `width` x `height` grid row by row. Each cell draws one uniform
/// sample and holds a system when the sample falls below `density`.
pub fn assemble(
    name: &str,
    width: u32,
    height: u32,
    density: f64,
    names: &[String],
    dice: &mut Dice,
) -> Sector {
    let mut sector = Sector::new(name, width, height);

    for row in 0..height {
        for column in 0..width {
            if dice.unit() < density {
                let volume = build_volume(column + 1, row + 1, names, dice);
                sector.set(column, row, volume);
            }
        }
    }

    tracing::info!(
        "Assembled sector {} ({}x{}): {} volumes, {} systems",
        sector.name,
        width,
        height,
        sector.volumes().count(),
        sector.system_count()
    );
    sector
}

/// Assemble the sector a configuration describes
pub fn assemble_config(config: &GeneratorConfig, names: &[String], dice: &mut Dice) -> Sector {
    assemble(
        &config.name,
        config.width,
        config.height,
        config.density.fraction(),
        names,
        dice,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_density_is_empty() {
        let mut dice = Dice::from_seed(1);
        let sector = assemble("Void", 8, 10, 0.0, &[], &mut dice);
        assert_eq!(sector.volumes().count(), 0);
    }

    #[test]
    fn test_full_density_fills_every_cell() {
        let mut dice = Dice::from_seed(2);
        let sector = assemble("Core", 4, 4, 1.0, &[], &mut dice);
        assert_eq!(sector.volumes().count(), 16);
        let v = sector.get(2, 3).unwrap();
        assert_eq!((v.column, v.row), (3, 4));
    }

    #[test]
    fn test_same_seed_same_occupancy() {
        let a = assemble("A", 16, 20, 0.5, &[], &mut Dice::from_seed_str("ALPHA7"));
        let b = assemble("A", 16, 20, 0.5, &[], &mut Dice::from_seed_str("ALPHA7"));
        assert_eq!(a.occupancy(), b.occupancy());
        let cribs = |s: &Sector| {
            s.volumes()
                .map(|v| v.star.as_ref().map(|s| s.crib()))
                .collect::<Vec<_>>()
        };
        assert_eq!(cribs(&a), cribs(&b));
    }
}
