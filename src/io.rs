// Loading line art into a PixelBuffer and exporting the result as PNG.

use std::path::Path;

use image::{ImageFormat, RgbaImage};
use log::info;

use crate::color::Color;
use crate::error::Error;
use crate::fill::fill;
use crate::types::{Coordinate, PixelBuffer};

/// Decode any format the `image` crate knows into RGBA8, alpha preserved.
pub fn load_line_art(path: &Path) -> Result<PixelBuffer, Error> {
    let img = image::open(path)?.into_rgba8();
    let (w, h) = img.dimensions();
    info!("Loaded line art {} ({}x{})", path.display(), w, h);
    PixelBuffer::from_rgba(w as usize, h as usize, img.into_raw())
}

/// Copy the buffer into an `image` RGBA image (1:1, no zoom).
pub fn to_rgba_image(buffer: &PixelBuffer) -> Result<RgbaImage, Error> {
    let (w, h) = (buffer.width(), buffer.height());
    let size_err = || Error::BufferSize {
        width: w,
        height: h,
        expected: w * h * 4,
        actual: buffer.as_bytes().len(),
    };
    let w32 = u32::try_from(w).map_err(|_| size_err())?;
    let h32 = u32::try_from(h).map_err(|_| size_err())?;
    RgbaImage::from_raw(w32, h32, buffer.as_bytes().to_vec()).ok_or_else(size_err)
}

/// Write the buffer as a PNG, whatever the file extension says.
pub fn export_png(buffer: &PixelBuffer, path: &Path) -> Result<(), Error> {
    to_rgba_image(buffer)?.save_with_format(path, ImageFormat::Png)?;
    info!("Saved {}x{} drawing to {}", buffer.width(), buffer.height(), path.display());
    Ok(())
}

/// Headless bucket: load `input`, fill from each seed in order with `color`,
/// write the result to `output` as PNG. Seeds outside the image are skipped.
/// Returns how many seeds were inside the image.
pub fn fill_image_file(input: &Path, output: &Path, color: Color, seeds: &[Coordinate]) -> Result<usize, Error> {
    let mut canvas = load_line_art(input)?;
    let mut applied = 0;
    for &seed in seeds {
        if canvas.get(seed).is_none() {
            info!("Seed ({}, {}) is outside the image, skipped", seed.x, seed.y);
            continue;
        }
        fill(&mut canvas, seed, color);
        applied += 1;
        info!("Filled from ({}, {}) with {}", seed.x, seed.y, color);
    }
    export_png(&canvas, output)?;
    Ok(applied)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn png_round_trip_keeps_alpha() {
        let mut buf = PixelBuffer::new(4, 3, Color::rgba(0, 0, 0, 0));
        buf.put(Coordinate::new(1, 2), Color::rgba(12, 34, 56, 78));

        let path = std::env::temp_dir().join(format!("coloring-canvas-io-{}.png", std::process::id()));
        export_png(&buf, &path).unwrap();
        let back = load_line_art(&path).unwrap();
        let _ = std::fs::remove_file(&path);

        assert_eq!(back, buf);
    }

    #[test]
    fn fill_image_file_applies_seeds_in_order() {
        // White on the left, transparent black on the right, split by a blue wall.
        let white = Color::rgb(255, 255, 255);
        let blue = Color::rgb(0, 0, 255);
        let mut art = PixelBuffer::new(5, 2, Color::rgba(0, 0, 0, 0));
        for y in 0..2 {
            art.put(Coordinate::new(0, y), white);
            art.put(Coordinate::new(1, y), white);
            art.put(Coordinate::new(2, y), blue);
        }

        let dir = std::env::temp_dir();
        let input = dir.join(format!("coloring-canvas-headless-in-{}.png", std::process::id()));
        let output = dir.join(format!("coloring-canvas-headless-out-{}.png", std::process::id()));
        export_png(&art, &input).unwrap();

        let red = Color::rgb(255, 0, 0);
        // The second seed hits the region the first one just painted red,
        // so order matters: red -> red is a no-op. The third seed is off-image.
        let seeds = [Coordinate::new(0, 0), Coordinate::new(1, 1), Coordinate::new(9, 0), Coordinate::new(4, 1)];
        let applied = fill_image_file(&input, &output, red, &seeds).unwrap();
        let result = load_line_art(&output).unwrap();
        let _ = std::fs::remove_file(&input);
        let _ = std::fs::remove_file(&output);

        assert_eq!(applied, 3);
        let mut expected = PixelBuffer::new(5, 2, red);
        for y in 0..2 {
            expected.put(Coordinate::new(2, y), blue);
        }
        assert_eq!(result, expected);
    }

    #[test]
    fn fill_image_file_with_missing_input_writes_nothing() {
        let dir = std::env::temp_dir();
        let input = dir.join("coloring-canvas-headless-missing.png");
        let output = dir.join(format!("coloring-canvas-headless-never-{}.png", std::process::id()));
        let err = fill_image_file(&input, &output, Color::BLACK, &[Coordinate::new(0, 0)]).unwrap_err();
        assert!(matches!(err, Error::Image(_)));
        assert!(!output.exists());
    }

    #[test]
    fn missing_file_is_an_image_error() {
        let path = std::env::temp_dir().join("coloring-canvas-missing-art.png");
        assert!(matches!(load_line_art(&path), Err(Error::Image(_))));
    }
}
