//! One grid cell and the system it holds

use serde::{Deserialize, Serialize};

use crate::core::Dice;
use crate::stellar::tables::{lookup, COMPANION_COUNTS};
use crate::stellar::{attach_companion, form_star, Star};

/// A sector cell. Columns and rows are 1-based.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Volume {
    pub name: String,
    pub column: u32,
    pub row: u32,
    pub star: Option<Star>,
}

impl Volume {
    /// Zero-padded "CCRR" location
    pub fn location(&self) -> String {
        format!("{:02}{:02}", self.column, self.row)
    }

    /// No star, or a star without a habitable world
    pub fn is_empty(&self) -> bool {
        self.star.as_ref().map_or(true, |s| !s.has_world())
    }
}

/// Build the system at (`column`, `row`).
///
/// Draws, in order: the name pick (only with a name list), the primary star,
/// the companion count, then each companion.
pub fn build_volume(column: u32, row: u32, names: &[String], dice: &mut Dice) -> Volume {
    let name = match dice.choose(names) {
        Some(name) => name.clone(),
        None => format!("{:02}{:02}", column, row),
    };

    let mut primary = form_star(dice, None, 0);
    let companions = lookup(&COMPANION_COUNTS, dice.two_d6(), 0);
    for i in 0..companions {
        let companion = form_star(dice, Some(&primary), i);
        attach_companion(&mut primary, companion);
    }

    tracing::trace!("Volume {:02}{:02} {} -> {}", column, row, name, primary.crib());

    Volume {
        name,
        column,
        row,
        star: Some(primary),
    }
}
