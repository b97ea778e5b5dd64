use std::path::PathBuf;
use std::time::Duration;

use anyhow::Result;
use clap::Parser;

use life::export::{self, ExportConfig};
use life::game::{Grid, DEFAULT_DIMENSION};
use life::patterns;
use life::terminal;

/// Row/col offset at which seeded patterns are stamped.
const PATTERN_OFFSET: usize = 1;

#[derive(Parser, Debug)]
#[clap(name = "life", about = "Conway's Game of Life on a toroidal grid")]
struct Cli {
    /// Grid side length.
    #[clap(long, default_value_t = DEFAULT_DIMENSION)]
    dimension: usize,
    /// Milliseconds between generations.
    #[clap(long, default_value_t = 50)]
    interval: u64,
    /// Seed a single glider instead of a random grid.
    #[clap(long)]
    glider: bool,
    /// Seed a Gosper glider gun instead of a random grid.
    #[clap(long)]
    gosper: bool,
    /// Export the animation to this GIF file instead of displaying it.
    #[clap(long)]
    mov_file: Option<PathBuf>,
    /// Number of generations to export with --mov-file.
    #[clap(long, default_value_t = 50)]
    frames: u32,
}

fn main() -> Result<()> {
    // install global collector configured based on RUST_LOG env var.
    tracing_subscriber::fmt::init();

    let args = Cli::parse();

    let mut grid = if args.glider {
        patterns::glider_grid(args.dimension, PATTERN_OFFSET, PATTERN_OFFSET)?
    } else if args.gosper {
        patterns::gosper_gun_grid(args.dimension, PATTERN_OFFSET, PATTERN_OFFSET)?
    } else {
        Grid::random(args.dimension)?
    };
    log::info!(
        "seeded {}x{} grid with {} live cells",
        args.dimension,
        args.dimension,
        grid.live_count()
    );

    match args.mov_file {
        Some(path) => {
            let config = ExportConfig {
                frames: args.frames,
                // GIF delays are in hundredths of a second.
                frame_delay: (args.interval / 10).max(1) as u16,
                ..ExportConfig::default()
            };
            export::export_animation(&mut grid, &path, &config)?;
            log::info!("wrote {} frames to {}", args.frames, path.display());
        }
        None => terminal::run(&mut grid, Duration::from_millis(args.interval))?,
    }

    Ok(())
}
