/// Animation export: encodes successive generations as a looping GIF.

use std::borrow::Cow;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use anyhow::{bail, Context, Result};
use gif::{Encoder, Frame, Repeat};

use crate::game::Grid;
use crate::render;

/// Two-entry grayscale palette: index 0 dead, index 1 alive.
const PALETTE: &[u8] = &[0x00, 0x00, 0x00, 0xFF, 0xFF, 0xFF];

#[derive(Debug, Clone)]
pub struct ExportConfig {
    /// Number of generations to encode.
    pub frames: u32,
    /// Delay between frames in hundredths of a second.
    pub frame_delay: u16,
    /// Each cell is rendered as a scale x scale pixel block.
    pub cell_scale: usize,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            frames: 50,
            frame_delay: 5,
            cell_scale: 4,
        }
    }
}

/// Encode `config.frames` generations into a GIF file, advancing the
/// grid one generation per frame. The grid is left at the generation
/// following the last encoded frame.
pub fn export_animation(grid: &mut Grid, path: &Path, config: &ExportConfig) -> Result<()> {
    let dimension = grid.dimension();
    log::info!(
        "exporting {} generations of a {dimension}x{dimension} grid to {}",
        config.frames,
        path.display()
    );
    let file = File::create(path)
        .with_context(|| format!("failed to create {}", path.display()))?;
    write_animation(grid, BufWriter::new(file), config)
}

/// Encode the animation into any writer.
pub fn write_animation<W: Write>(grid: &mut Grid, out: W, config: &ExportConfig) -> Result<()> {
    let side = grid.dimension() * config.cell_scale;
    if side == 0 || side > usize::from(u16::MAX) {
        bail!("frame side {side} is out of range for GIF encoding");
    }
    let side = side as u16;

    let mut encoder =
        Encoder::new(out, side, side, PALETTE).context("failed to create GIF encoder")?;
    encoder
        .set_repeat(Repeat::Infinite)
        .context("failed to set GIF repeat")?;

    for _ in 0..config.frames {
        let indices: Vec<u8> = render::rasterize(grid, config.cell_scale)
            .iter()
            .map(|&luma| u8::from(luma == render::ALIVE_LUMA))
            .collect();

        let mut frame = Frame::default();
        frame.width = side;
        frame.height = side;
        frame.buffer = Cow::Owned(indices);
        frame.delay = config.frame_delay;
        encoder.write_frame(&frame).context("failed to write GIF frame")?;

        grid.step();
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::patterns;

    #[test]
    fn test_write_animation_emits_gif_and_advances_grid() {
        let mut grid = patterns::glider_grid(10, 1, 1).unwrap();
        let config = ExportConfig {
            frames: 4,
            frame_delay: 5,
            cell_scale: 1,
        };

        let mut out = Vec::new();
        write_animation(&mut grid, &mut out, &config).unwrap();

        assert_eq!(&out[..6], b"GIF89a");
        // One step per encoded frame: four generations moves the glider
        // down-right by one cell.
        assert_eq!(grid, patterns::glider_grid(10, 2, 2).unwrap());
    }

    #[test]
    fn test_write_animation_rejects_oversized_frames() {
        let mut grid = patterns::glider_grid(100, 1, 1).unwrap();
        let config = ExportConfig {
            frames: 1,
            frame_delay: 5,
            cell_scale: 1_000,
        };
        assert!(write_animation(&mut grid, Vec::new(), &config).is_err());
    }
}
