//! Astromapper - command line entry point
//!
//! Generates a sector or a single system and writes the text listing and
//! JSON document to the output directory. Sectors also get an SVG map.

use std::fs;
use std::path::PathBuf;

use astromapper::core::seed::{display_code, random_code};
use astromapper::core::{Density, Dice, GenerationType, GeneratorConfig, Result};
use astromapper::output::{
    sector_json, sector_listing, sector_svg, volume_json, volume_listing,
};
use astromapper::sector::names::{builtin_names, load_names};
use astromapper::sector::{assemble_config, build_volume};
use clap::Parser;

/// Astromapper - star map generator
#[derive(Parser, Debug)]
#[command(name = "astromapper")]
#[command(about = "Generate star systems and sectors from a reproducible seed")]
struct Args {
    /// Generation type: sector or volume
    #[arg(long = "type")]
    generation: Option<String>,

    /// Stellar density preset (see --list-densities)
    #[arg(long)]
    density: Option<String>,

    /// Seed text; a random code is generated when omitted
    #[arg(long)]
    seed: Option<String>,

    /// Sector name
    #[arg(long)]
    name: Option<String>,

    /// TOML configuration file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Name list, one name per line
    #[arg(long)]
    names: Option<PathBuf>,

    /// Output directory
    #[arg(long)]
    output: Option<PathBuf>,

    /// List density presets and exit
    #[arg(long, default_value_t = false)]
    list_densities: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let args = Args::parse();

    if args.list_densities {
        println!("Available density options:");
        for density in Density::ALL {
            println!(
                "  {:<15} ({:>2.0}%)  - {}",
                density.name(),
                density.fraction() * 100.0,
                density.description()
            );
        }
        return Ok(());
    }

    let config = resolve_config(&args)?;

    let code = match &config.seed {
        Some(seed) => display_code(seed),
        None => random_code(&mut rand::thread_rng()),
    };
    if config.seed.as_deref() != Some(code.as_str()) {
        println!("Seed code: {}", code);
    }
    let mut dice = Dice::from_seed_str(&code);

    let names = match &config.names_file {
        Some(path) => load_names(path)?,
        None => builtin_names(),
    };

    let (listing, json, map) = match config.generation {
        GenerationType::Sector => {
            tracing::info!(
                "Generating sector {} with {} density ({:.0}%)",
                config.name,
                config.density,
                config.density.fraction() * 100.0
            );
            let sector = assemble_config(&config, &names, &mut dice);
            println!("Generated {} star systems in sector", sector.system_count());
            (
                sector_listing(&sector),
                sector_json(&sector)?,
                Some(sector_svg(&sector)),
            )
        }
        GenerationType::Volume => {
            let volume = build_volume(1, 1, &names, &mut dice);
            if volume.is_empty() {
                println!("Generated empty hex");
            } else {
                println!("Generated system: {}", volume.name);
            }
            (volume_listing(&volume), volume_json(&volume)?, None)
        }
    };

    fs::create_dir_all(&config.output_dir)?;
    let base = format!("{}_{}", config.generation.name(), code);
    let listing_path = config.output_dir.join(format!("{}.txt", base));
    let json_path = config.output_dir.join(format!("{}.json", base));
    fs::write(&listing_path, listing)?;
    fs::write(&json_path, json)?;

    println!("Listing saved to: {}", listing_path.display());
    println!("JSON saved to:    {}", json_path.display());
    if let Some(map) = map {
        let svg_path = config.output_dir.join(format!("{}.svg", base));
        fs::write(&svg_path, map)?;
        println!("SVG saved to:     {}", svg_path.display());
    }
    Ok(())
}

/// Defaults, then the config file, then command line flags
fn resolve_config(args: &Args) -> Result<GeneratorConfig> {
    let mut config = match &args.config {
        Some(path) => GeneratorConfig::load(path)?,
        None => GeneratorConfig::default(),
    };

    if let Some(generation) = &args.generation {
        config.generation = generation.parse()?;
    }
    if let Some(density) = &args.density {
        config.density = density.parse()?;
    }
    if let Some(seed) = &args.seed {
        config.seed = Some(seed.clone());
    }
    if let Some(name) = &args.name {
        config.name = name.clone();
    }
    if let Some(names) = &args.names {
        config.names_file = Some(names.clone());
    }
    if let Some(output) = &args.output {
        config.output_dir = output.clone();
    }

    config.validate()?;
    Ok(config)
}
