//! # Tile Map Generator
//!
//! Generates a tile map, then either opens the viewer window (with the `gui`
//! feature) or prints the map as text.
//!
//! ```text
//! tilemap_gen --size 12 --seed 42
//! tilemap_gen --config map.json --headless
//! ```

use clap::Parser;
use log::info;
use std::error::Error;
use std::path::PathBuf;
use tilemap_gen::config::GeneratorConfig;
use tilemap_gen::generator::generate_with_config;
use tilemap_gen::render::{render_map, AsciiRenderer, TileSet};

#[derive(Debug, Parser)]
#[command(version, about = "Procedural tile map generator")]
struct Args {
    /// JSON config file; flags below override its values.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Grid side length.
    #[arg(short, long, allow_negative_numbers = true)]
    size: Option<i32>,

    /// Exclusive upper bound for random cell weights.
    #[arg(short, long, allow_negative_numbers = true)]
    weight_range: Option<i32>,

    /// RNG seed for a reproducible map.
    #[arg(long)]
    seed: Option<u64>,

    /// Print the map as text instead of opening a window.
    #[arg(long)]
    headless: bool,
}

impl Args {
    fn into_config(self) -> Result<(GeneratorConfig, bool), Box<dyn Error>> {
        let mut config = match &self.config {
            Some(path) => GeneratorConfig::load(path)?,
            None => GeneratorConfig::default(),
        };
        if let Some(size) = self.size {
            config.size = size;
        }
        if let Some(weight_range) = self.weight_range {
            config.weight_range = weight_range;
        }
        if self.seed.is_some() {
            config.rng_seed = self.seed;
        }
        Ok((config, self.headless))
    }
}

fn print_map(map: &tilemap_gen::MapResult, tiles: &TileSet) {
    let mut ascii = AsciiRenderer::new(map.size());
    render_map(map, tiles, &mut ascii);
    print!("{}", ascii);
}

fn main() -> Result<(), Box<dyn Error>> {
    // Initialize logging.
    env_logger::init();
    info!("Tile map generator starting...");

    let (config, headless) = Args::parse().into_config()?;
    let map = generate_with_config(&config)?;
    let tiles = TileSet::unit_squares();

    if headless || cfg!(not(feature = "gui")) {
        print_map(&map, &tiles);
    } else {
        #[cfg(feature = "gui")]
        tilemap_gen::render::viewer::run_viewer(&map, &tiles)?;
    }

    info!("Tile map generator exiting.");
    Ok(())
}
