//! JSON documents

use std::collections::BTreeMap;

use serde::{Serialize, Serializer};

use crate::core::Result;
use crate::sector::{Sector, Volume};

/// Sector as written to disk: systems keyed by "CCRR" location
#[derive(Serialize)]
struct SectorDocument<'a> {
    name: &'a str,
    width: u32,
    height: u32,
    volumes: BTreeMap<String, &'a Volume>,
}

impl<'a> From<&'a Sector> for SectorDocument<'a> {
    fn from(sector: &'a Sector) -> Self {
        Self {
            name: &sector.name,
            width: sector.width,
            height: sector.height,
            volumes: sector.systems().map(|v| (v.location(), v)).collect(),
        }
    }
}

impl Serialize for Sector {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        SectorDocument::from(self).serialize(serializer)
    }
}

pub fn sector_json(sector: &Sector) -> Result<String> {
    Ok(serde_json::to_string_pretty(sector)?)
}

pub fn volume_json(volume: &Volume) -> Result<String> {
    Ok(serde_json::to_string_pretty(volume)?)
}
