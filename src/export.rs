//! Offscreen rendering of the grid and PNG encoding

use crate::color;
use crate::constants::{COLS, EXPORT_FILE_NAME, PNG_TILE_LENGTH, ROWS};
use crate::error::ExportError;
use crate::types::Grid;
use image::RgbaImage;
use std::io::Cursor;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Source of the bitmap the grid is drawn onto.
pub trait SurfaceProvider: Send + Sync {
    /// Returns `None` when a surface of that size cannot be obtained.
    fn acquire(&self, width: u32, height: u32) -> Option<RgbaImage>;
}

/// In-memory RGBA bitmap.
pub struct BitmapSurface;

impl SurfaceProvider for BitmapSurface {
    fn acquire(&self, width: u32, height: u32) -> Option<RgbaImage> {
        let len = (width as usize)
            .checked_mul(height as usize)?
            .checked_mul(4)?;
        RgbaImage::from_raw(width, height, vec![0; len])
    }
}

pub struct Exporter {
    surface: Box<dyn SurfaceProvider>,
}

impl Default for Exporter {
    fn default() -> Self {
        Self::new(Box::new(BitmapSurface))
    }
}

impl Exporter {
    pub fn new(surface: Box<dyn SurfaceProvider>) -> Self {
        Self { surface }
    }

    /// Draw every cell as a `PNG_TILE_LENGTH` square.
    pub fn render_image(&self, grid: &Grid) -> Result<RgbaImage, ExportError> {
        self.render_tiles(grid, PNG_TILE_LENGTH)
    }

    pub fn render_tiles(&self, grid: &Grid, tile: u32) -> Result<RgbaImage, ExportError> {
        let width = COLS as u32 * tile;
        let height = ROWS as u32 * tile;
        let mut img = self
            .surface
            .acquire(width, height)
            .ok_or(ExportError::SurfaceUnavailable { width, height })?;

        for (row, col, value) in grid.cells() {
            fill_square(&mut img, col as u32 * tile, row as u32 * tile, tile, color::to_rgba(value));
        }

        debug!(width, height, "Rendered grid image");
        Ok(img)
    }

    /// Render, encode and write `matrix-image.png` into `dir`.
    pub fn save_png(&self, grid: &Grid, dir: &Path) -> Result<PathBuf, ExportError> {
        let img = self.render_image(grid)?;
        let bytes = encode_png(&img)?;
        let path = dir.join(EXPORT_FILE_NAME);
        std::fs::write(&path, &bytes).map_err(|source| ExportError::Write {
            path: path.clone(),
            source,
        })?;
        debug!(path = %path.display(), bytes = bytes.len(), "PNG written");
        Ok(path)
    }
}

fn fill_square(img: &mut RgbaImage, x: u32, y: u32, side: u32, px: image::Rgba<u8>) {
    for py in y..(y + side).min(img.height()) {
        for px_x in x..(x + side).min(img.width()) {
            img.put_pixel(px_x, py, px);
        }
    }
}

pub fn encode_png(img: &RgbaImage) -> Result<Vec<u8>, ExportError> {
    let mut bytes = Vec::new();
    img.write_to(&mut Cursor::new(&mut bytes), image::ImageFormat::Png)?;
    if bytes.is_empty() {
        return Err(ExportError::EmptyEncoding);
    }
    Ok(bytes)
}

/// Window icon: a diagonal gradient drawn with the export renderer.
pub fn icon_image() -> Option<RgbaImage> {
    let mut grid = Grid::new();
    let span = (ROWS + COLS - 2).max(1) as f64;
    for row in 0..ROWS {
        for col in 0..COLS {
            grid.set(row, col, (row + col) as f64 / span);
        }
    }
    Exporter::default().render_tiles(&grid, 8).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    struct NoSurface;

    impl SurfaceProvider for NoSurface {
        fn acquire(&self, _width: u32, _height: u32) -> Option<RgbaImage> {
            None
        }
    }

    fn block_is(img: &RgbaImage, row: u32, col: u32, level: u8) -> bool {
        let x0 = col * PNG_TILE_LENGTH;
        let y0 = row * PNG_TILE_LENGTH;
        (y0..y0 + PNG_TILE_LENGTH).all(|y| {
            (x0..x0 + PNG_TILE_LENGTH).all(|x| img.get_pixel(x, y).0 == [level, level, level, 255])
        })
    }

    fn scenario_grid() -> Grid {
        let mut grid = Grid::new();
        for row in 0..ROWS {
            for col in 0..COLS {
                grid.set(row, col, 0.5);
            }
        }
        grid.set(0, 0, 0.0);
        grid.set(0, 1, 1.0);
        grid
    }

    #[test]
    fn test_render_dimensions() {
        let img = Exporter::default().render_image(&Grid::new()).unwrap();
        assert_eq!(img.width(), 1000);
        assert_eq!(img.height(), 1000);
    }

    #[test]
    fn test_render_scenario_blocks() {
        let img = Exporter::default().render_image(&scenario_grid()).unwrap();
        assert!(block_is(&img, 0, 0, 0));
        assert!(block_is(&img, 0, 1, 255));
        for row in 0..ROWS as u32 {
            for col in 0..COLS as u32 {
                if row == 0 && col < 2 {
                    continue;
                }
                assert!(block_is(&img, row, col, 128), "block ({row}, {col})");
            }
        }
    }

    #[test]
    fn test_render_tolerates_nan_and_out_of_range() {
        let mut grid = Grid::new();
        grid.set(4, 4, f64::NAN);
        grid.set(4, 3, -5.0);
        grid.set(4, 2, 9.0);
        let img = Exporter::default().render_image(&grid).unwrap();
        assert!(block_is(&img, 4, 4, 0));
        assert!(block_is(&img, 4, 3, 0));
        assert!(block_is(&img, 4, 2, 255));
    }

    #[test]
    fn test_missing_surface_is_reported() {
        let exporter = Exporter::new(Box::new(NoSurface));
        let err = exporter.render_image(&Grid::new()).unwrap_err();
        assert!(matches!(err, ExportError::SurfaceUnavailable { width: 1000, height: 1000 }));
    }

    #[test]
    fn test_save_png_writes_decodable_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = Exporter::default().save_png(&scenario_grid(), dir.path()).unwrap();
        assert_eq!(path.file_name().unwrap(), EXPORT_FILE_NAME);

        let decoded = image::open(&path).unwrap().to_rgba8();
        assert_eq!(decoded.dimensions(), (1000, 1000));
        assert_eq!(decoded.get_pixel(0, 0).0, [0, 0, 0, 255]);
        assert_eq!(decoded.get_pixel(200, 0).0, [255, 255, 255, 255]);
        assert_eq!(decoded.get_pixel(999, 999).0, [128, 128, 128, 255]);
    }

    #[test]
    fn test_save_png_without_surface_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let result = Exporter::new(Box::new(NoSurface)).save_png(&Grid::new(), dir.path());
        assert!(result.is_err());
        assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
    }

    #[test]
    fn test_save_png_into_missing_dir_fails_with_write() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope");
        let err = Exporter::default().save_png(&Grid::new(), &missing).unwrap_err();
        assert!(matches!(err, ExportError::Write { .. }));
    }

    #[test]
    fn test_icon_is_small_gradient() {
        let icon = icon_image().unwrap();
        assert_eq!(icon.dimensions(), (40, 40));
        assert_eq!(icon.get_pixel(0, 0).0, [0, 0, 0, 255]);
        assert_eq!(icon.get_pixel(39, 39).0, [255, 255, 255, 255]);
    }
}
