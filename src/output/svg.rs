//! Hex map of a sector as an SVG document
//!
//! Columns are flat-topped hexes laid out left to right, odd columns sitting
//! half a hex higher than even ones. Only volumes holding a habitable world
//! get a marker; every cell gets its "CCRR" number.

use crate::output::settlement::profile_code;
use crate::sector::{Sector, Volume};
use crate::stellar::Star;
use crate::worlds::{Base, TravelCode, World};

/// Hex side length in pixels
const SIDE: f64 = 40.0;
/// Hex height over side length
const FACTOR: f64 = 1.732;

const STYLE: &str = r#"  <style>
  text { text-anchor: middle; font: 8px sans-serif; fill: #ABB2BF; }
  .tract text { text-anchor: start; font: 120px sans-serif; fill: #FFF; opacity: 0.1; }
  text.namestamp { text-anchor: start; font-size: 36px; opacity: 1; }
  text.symbol { font-size: 14px; }
  text.symbol.N { font-size: 9px; }
  g.volumes text { opacity: 0.5; }
  rect.background { fill: #121417; }
  .tract rect, polygon, polyline { fill: none; stroke: #434649; stroke-width: 1; }
  circle { fill: #999; stroke: none; }
  g.gas-giant circle { fill: #ABB2BF; stroke: #ABB2BF; stroke-width: 2; }
  g.gas-giant ellipse { fill: none; stroke: #ABB2BF; stroke-width: 1; }
  .zone { fill: none; stroke: #FC3; stroke-width: 3; stroke-dasharray: 3,6; }
  </style>
"#;

/// Pixel geometry of one sector map
#[derive(Debug, Clone, Copy)]
struct MapGeometry {
    columns: u32,
    rows: u32,
    width: u32,
    height: u32,
}

impl MapGeometry {
    fn new(columns: u32, rows: u32) -> Self {
        Self {
            columns,
            rows,
            width: (SIDE * (columns as f64 * 1.5 + 0.5)).ceil() as u32,
            height: (SIDE * FACTOR * (rows as f64 + 0.5)).ceil() as u32,
        }
    }

    /// Pixel centre of the hex at 1-based (`column`, `row`)
    fn centre(&self, column: u32, row: u32) -> (f64, f64) {
        let x = SIDE + (column as f64 - 1.0) * SIDE * 1.5;
        let lift = if column % 2 == 1 { 2.0 } else { 1.0 };
        let y = (row as f64 - 1.0) * SIDE * FACTOR + SIDE * FACTOR / lift;
        (x, y)
    }
}

/// Render the sector map
pub fn sector_svg(sector: &Sector) -> String {
    let map = MapGeometry::new(sector.width, sector.height);

    let mut out = header(&sector.name, &map);
    out.push_str(&tract_marks(sector, &map));
    out.push_str(&hex_grid(&map));
    for volume in sector.systems() {
        out.push_str(&system_marker(volume, &map));
    }
    out.push_str(&volume_numbers(&map));
    out.push_str(&format!(
        "  <polyline class='frame' points='0,0 {w},0 {w},{h} 0,{h} 0,0' />\n",
        w = map.width,
        h = map.height
    ));
    out.push_str("</svg>\n");
    out
}

fn header(name: &str, map: &MapGeometry) -> String {
    format!(
        "<?xml version=\"1.0\" standalone=\"no\"?>\n\
         <svg width=\"{w}px\" height=\"{h}px\" viewBox=\"0 0 {w} {h}\" version=\"1.1\" \
         xmlns=\"http://www.w3.org/2000/svg\">\n  \
         <desc>{name} Sector Map</desc>\n{style}  \
         <rect class='background' width='{w}' height='{h}' />\n",
        w = map.width,
        h = map.height,
        name = escape(name),
        style = STYLE
    )
}

/// Subsector outlines and letters, plus the sector name stamp
fn tract_marks(sector: &Sector, map: &MapGeometry) -> String {
    let mut out = String::from("  <g class='tract'>\n");
    for subsector in sector.subsectors() {
        let x = subsector.column as f64 * SIDE * 1.5;
        let y = subsector.row as f64 * SIDE * FACTOR;
        let width = subsector.width as f64 * SIDE * 1.5;
        let height = subsector.height as f64 * SIDE * FACTOR;
        out.push_str(&format!(
            "    <rect x='{:.0}' y='{:.0}' width='{:.0}' height='{:.0}' />\
             <text x='{:.0}' y='{:.0}'>{}</text>\n",
            x,
            y,
            width,
            height,
            x + 70.0,
            y + 110.0,
            subsector.letter
        ));
    }
    out.push_str("  </g>\n");
    out.push_str(&format!(
        "  <text class='namestamp' x='30' y='{}'>{}</text>\n",
        map.height.saturating_sub(40),
        escape(&sector.name)
    ));
    out
}

fn hex_grid(map: &MapGeometry) -> String {
    let half_height = SIDE * FACTOR / 2.0;
    let mut out = String::from("  <g class='grid'>\n");
    for row in 1..=map.rows {
        for column in 1..=map.columns {
            let (cx, cy) = map.centre(column, row);
            let corners = [
                (cx - SIDE, cy),
                (cx - SIDE / 2.0, cy - half_height),
                (cx + SIDE / 2.0, cy - half_height),
                (cx + SIDE, cy),
                (cx + SIDE / 2.0, cy + half_height),
                (cx - SIDE / 2.0, cy + half_height),
            ];
            let points: Vec<String> = corners
                .iter()
                .map(|(x, y)| format!("{},{}", *x as i32, *y as i32))
                .collect();
            out.push_str(&format!("    <polygon points='{}' />\n", points.join(" ")));
        }
    }
    out.push_str("  </g>\n");
    out
}

fn volume_numbers(map: &MapGeometry) -> String {
    let mut out = String::from("  <g class='volumes'>\n");
    for row in 1..=map.rows {
        for column in 1..=map.columns {
            let (cx, cy) = map.centre(column, row);
            let y = cy - SIDE * FACTOR / 2.0 + SIDE * 0.2;
            out.push_str(&format!(
                "    <text x='{}' y='{}'>{:02}{:02}</text>\n",
                cx as i32, y as i32, column, row
            ));
        }
    }
    out.push_str("  </g>\n");
    out
}

/// World glyph, starport, code, name, zone, bases, gas giant and stars
fn system_marker(volume: &Volume, map: &MapGeometry) -> String {
    let Some(star) = volume.star.as_ref() else {
        return String::new();
    };
    let (Some(orbit), Some(world)) = (star.world_orbit(), star.world()) else {
        return String::new();
    };

    let (cx, cy) = map.centre(volume.column, volume.row);
    let mut out = format!("  <g class='system'><!-- Volume: {} -->\n", volume.location());
    out.push_str(&format!("    <title>{}</title>\n", escape(&tooltip(volume, star, world))));

    if orbit.profile.size == 0 {
        out.push_str(&belt(cx, cy));
    } else {
        out.push_str(&format!(
            "    <circle class='planet' cx='{}' cy='{}' r='{}' />\n",
            cx as i32,
            cy as i32,
            (SIDE / 7.0) as i32
        ));
    }

    out.push_str(&label(cx, cy + SIDE / 2.0, "spaceport", &orbit.profile.starport.to_string()));
    out.push_str(&label(cx, cy + SIDE / 1.3, "code", &profile_code(&orbit.profile)));
    out.push_str(&label(cx, cy - SIDE / 2.1, "name", &escape(&volume.name)));

    if world.travel_code == TravelCode::Amber {
        let curve = SIDE / 2.0;
        out.push_str(&format!(
            "    <path class='zone' d='M {} {} a {:.0} {:.0} 0 1 0 20 0' />\n",
            (cx - curve / 2.0) as i32,
            (cy - curve / 1.4) as i32,
            curve,
            curve
        ));
    }
    if world.bases.contains(&Base::Naval) {
        out.push_str(&symbol("N", "\u{2693}", cx - SIDE / 1.8, cy - SIDE / 6.0));
    }
    if world.bases.contains(&Base::Scout) {
        out.push_str(&symbol("S", "\u{269C}", cx - SIDE / 1.8, cy + SIDE / 2.4));
    }
    if world.gas_giant {
        out.push_str(&gas_giant(cx + SIDE / 1.8, cy + SIDE / 3.0));
    }
    out.push_str(&stars(cx, cy, star));
    out.push_str("  </g>\n");
    out
}

fn tooltip(volume: &Volume, star: &Star, world: &World) -> String {
    let surface = star
        .surface_temperature()
        .map(|k| format!(" ({} K)", k))
        .unwrap_or_default();
    format!(
        "{} {}: {} world, {}{}",
        volume.location(),
        volume.name,
        world.temperature.name(),
        star.crib(),
        surface
    )
}

fn label(x: f64, y: f64, class: &str, text: &str) -> String {
    format!(
        "    <text class='{}' x='{}' y='{}'>{}</text>\n",
        class, x as i32, y as i32, text
    )
}

fn symbol(name: &str, glyph: &str, x: f64, y: f64) -> String {
    format!(
        "    <text class='symbol {}' x='{}' y='{}'>{}</text>\n",
        name, x as i32, y as i32, glyph
    )
}

/// Seven scattered dots in place of a planet disc
fn belt(cx: f64, cy: f64) -> String {
    let spread = SIDE / 3.0;
    let mut out = String::from("    <g class='belt'>\n");
    for i in 0..7u32 {
        let x = cx + ((i * 17) as f64 % spread).floor() - SIDE / 6.0;
        let y = cy + ((i * 23) as f64 % spread).floor() - SIDE / 6.0;
        out.push_str(&format!(
            "      <circle cx='{}' cy='{}' r='{:.1}' />\n",
            x as i32,
            y as i32,
            SIDE / 15.0
        ));
    }
    out.push_str("    </g>\n");
    out
}

fn gas_giant(x: f64, y: f64) -> String {
    let mark = 13.0;
    format!(
        "    <g class='gas-giant'>\n      \
         <ellipse cx='{x}' cy='{y}' rx='{rx}' ry='{ry:.1}' />\n      \
         <circle cx='{x}' cy='{y}' r='{r}' />\n    </g>\n",
        x = x as i32,
        y = y as i32,
        rx = (SIDE / (mark * 0.5)) as i32,
        ry = SIDE / mark * 0.3,
        r = (SIDE / (mark * 1.2)) as i32
    )
}

/// Two-character class of the primary, then each companion stepped down
fn stars(cx: f64, cy: f64, star: &Star) -> String {
    let mut x = cx + SIDE / 1.8 + 2.0;
    let mut y = cy - SIDE / 3.0 + 3.0;
    let mut out = label(x, y, "star", &short_class(star));
    for companion in &star.companions {
        x += 3.0;
        y += 7.0;
        out.push_str(&label(x, y, "star", &short_class(companion)));
    }
    out
}

fn short_class(star: &Star) -> String {
    star.classification().chars().take(2).collect()
}

/// Escape text for use inside SVG elements
fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '\'' => out.push_str("&apos;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Dice;
    use crate::sector::assemble;

    #[test]
    fn test_standard_sector_canvas() {
        let map = MapGeometry::new(32, 40);
        assert_eq!((map.width, map.height), (1940, 2806));
        assert_eq!(map.centre(1, 1), (40.0, SIDE * FACTOR / 2.0));
        assert_eq!(map.centre(2, 1), (100.0, SIDE * FACTOR));
    }

    #[test]
    fn test_one_marker_per_system() {
        let mut dice = Dice::from_seed_str("SVG");
        let sector = assemble("Map", 16, 20, 0.5, &[], &mut dice);
        let svg = sector_svg(&sector);
        assert!(svg.starts_with("<?xml"));
        assert!(svg.trim_end().ends_with("</svg>"));
        assert_eq!(svg.matches("<!-- Volume: ").count(), sector.system_count());
        assert_eq!(svg.matches("<polygon ").count(), 16 * 20);
        assert_eq!(svg.matches("<rect x=").count(), sector.subsectors().len());
        for volume in sector.systems() {
            assert!(svg.contains(&format!("<!-- Volume: {} -->", volume.location())));
        }
    }

    #[test]
    fn test_markers_follow_world_flags() {
        let mut dice = Dice::from_seed_str("SVG-FLAGS");
        let sector = assemble("Flags", 32, 40, 0.8, &[], &mut dice);
        let worlds: Vec<&World> = sector
            .systems()
            .filter_map(|v| v.star.as_ref())
            .filter_map(Star::world)
            .collect();
        let svg = sector_svg(&sector);

        let amber = worlds.iter().filter(|w| w.travel_code == TravelCode::Amber).count();
        let giants = worlds.iter().filter(|w| w.gas_giant).count();
        let naval = worlds.iter().filter(|w| w.bases.contains(&Base::Naval)).count();
        assert_eq!(svg.matches("class='zone'").count(), amber);
        assert_eq!(svg.matches("<g class='gas-giant'>").count(), giants);
        assert_eq!(svg.matches("class='symbol N'").count(), naval);
    }

    #[test]
    fn test_tooltip_names_temperatures() {
        let mut dice = Dice::from_seed_str("SVG-TIPS");
        let sector = assemble("Tips", 8, 10, 0.9, &[], &mut dice);
        let volume = sector.systems().next().unwrap();
        let star = volume.star.as_ref().unwrap();
        let world = star.world().unwrap();
        let tip = tooltip(volume, star, world);
        assert!(tip.starts_with(&format!("{} {}: ", volume.location(), volume.name)));
        assert!(tip.contains(world.temperature.name()));
        assert!(tip.contains(&star.crib()));
        match star.surface_temperature() {
            Some(kelvin) => assert!(tip.ends_with(&format!("({} K)", kelvin))),
            None => assert!(!tip.contains(" K)")),
        }
    }

    #[test]
    fn test_names_are_escaped() {
        assert_eq!(escape("Tom & <Jerry>"), "Tom &amp; &lt;Jerry&gt;");
        let sector = Sector::new("A&B", 2, 2);
        let svg = sector_svg(&sector);
        assert!(svg.contains("<desc>A&amp;B Sector Map</desc>"));
        assert!(!svg.contains("A&B"));
    }
}
