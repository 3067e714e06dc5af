//! Sector grid and subsector partitioning

use crate::core::config::{SUBSECTOR_HEIGHT, SUBSECTOR_WIDTH};
use crate::sector::volume::Volume;

/// Rectangular grid of optional volumes, stored row-major.
/// Coordinates passed to accessors are 0-based.
#[derive(Debug, Clone)]
pub struct Sector {
    pub name: String,
    pub width: u32,
    pub height: u32,
    data: Vec<Option<Volume>>,
}

/// Display block of a sector, lettered A, B, C... row by row
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Subsector {
    pub letter: char,
    pub column: u32,
    pub row: u32,
    pub width: u32,
    pub height: u32,
}

impl Subsector {
    pub fn contains(&self, column: u32, row: u32) -> bool {
        (self.column..self.column + self.width).contains(&column)
            && (self.row..self.row + self.height).contains(&row)
    }
}

impl Sector {
    /// Empty grid. A cell count that does not fit in memory yields a grid
    /// that holds nothing; configured sizes are bounded before they get here.
    pub fn new(name: impl Into<String>, width: u32, height: u32) -> Self {
        let cells = (width as usize).checked_mul(height as usize).unwrap_or(0);
        Self {
            name: name.into(),
            width,
            height,
            data: vec![None; cells],
        }
    }

    #[inline]
    fn offset(&self, column: u32, row: u32) -> Option<usize> {
        if column < self.width && row < self.height {
            (row as usize)
                .checked_mul(self.width as usize)?
                .checked_add(column as usize)
        } else {
            None
        }
    }

    #[inline]
    pub fn get(&self, column: u32, row: u32) -> Option<&Volume> {
        self.offset(column, row)
            .and_then(|i| self.data.get(i))
            .and_then(Option::as_ref)
    }

    #[inline]
    pub fn set(&mut self, column: u32, row: u32, volume: Volume) {
        if let Some(cell) = self.offset(column, row).and_then(|i| self.data.get_mut(i)) {
            *cell = Some(volume);
        }
    }

    /// Every generated volume, including those without a habitable world
    pub fn volumes(&self) -> impl Iterator<Item = &Volume> {
        self.data.iter().flatten()
    }

    /// Volumes that hold a habitable world, in row-major order
    pub fn systems(&self) -> impl Iterator<Item = &Volume> {
        self.volumes().filter(|v| !v.is_empty())
    }

    pub fn system_count(&self) -> usize {
        self.systems().count()
    }

    /// Occupancy bitmap, row-major: true where a volume was generated
    pub fn occupancy(&self) -> Vec<bool> {
        self.data.iter().map(Option::is_some).collect()
    }

    /// Subsector blocks covering the grid, partial blocks at the edges included
    pub fn subsectors(&self) -> Vec<Subsector> {
        let across = self.width.div_ceil(SUBSECTOR_WIDTH);
        let down = self.height.div_ceil(SUBSECTOR_HEIGHT);
        (0..down)
            .flat_map(|r| (0..across).map(move |c| (r, c)))
            .enumerate()
            .map(|(i, (r, c))| {
                let column = c * SUBSECTOR_WIDTH;
                let row = r * SUBSECTOR_HEIGHT;
                Subsector {
                    letter: char::from_u32('A' as u32 + i as u32).unwrap_or('?'),
                    column,
                    row,
                    width: SUBSECTOR_WIDTH.min(self.width - column),
                    height: SUBSECTOR_HEIGHT.min(self.height - row),
                }
            })
            .collect()
    }

    /// Systems inside one subsector, row by row
    pub fn subsector_systems<'a>(
        &'a self,
        subsector: &'a Subsector,
    ) -> impl Iterator<Item = &'a Volume> + 'a {
        (subsector.row..subsector.row + subsector.height).flat_map(move |row| {
            (subsector.column..subsector.column + subsector.width)
                .filter_map(move |column| self.get(column, row))
                .filter(|v| !v.is_empty())
        })
    }
}
