//! The grid container: owns the cell values and runs both export paths

use crate::clipboard::{ClipboardSink, PendingCopy};
use crate::constants::{DEFAULT_TILE_VALUE, UNEXPECTED_ERROR_MESSAGE};
use crate::error::ExportError;
use crate::export::Exporter;
use crate::notify::Notifier;
use crate::types::Grid;
use image::RgbaImage;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::{error, info, warn};

pub struct Matrix {
    grid: Grid,
    exporter: Exporter,
    clipboard: Arc<dyn ClipboardSink>,
    notifier: Box<dyn Notifier>,
}

impl Matrix {
    pub fn new(
        exporter: Exporter,
        clipboard: Arc<dyn ClipboardSink>,
        notifier: Box<dyn Notifier>,
    ) -> Self {
        Self {
            grid: Grid::new(),
            exporter,
            clipboard,
            notifier,
        }
    }

    pub fn value(&self, row: usize, col: usize) -> f64 {
        self.grid.get(row, col).unwrap_or(DEFAULT_TILE_VALUE)
    }

    pub fn update_cell(&mut self, row: usize, col: usize, value: f64) {
        if !self.grid.set(row, col, value) {
            warn!(row, col, "Ignoring update outside the grid");
        }
    }

    /// Log the detail, show the generic message.
    pub fn report(&self, err: &ExportError) {
        error!(error = %err, kind = err.kind().as_str(), "Export failed");
        self.notifier.unexpected_error(UNEXPECTED_ERROR_MESSAGE);
    }

    fn make_image(&self) -> Option<RgbaImage> {
        match self.exporter.render_image(&self.grid) {
            Ok(img) => Some(img),
            Err(e) => {
                self.report(&e);
                None
            }
        }
    }

    /// Write `matrix-image.png` into `dir`. Failures are reported to the user.
    pub fn export_png(&self, dir: &Path) -> Option<PathBuf> {
        match self.exporter.save_png(&self.grid, dir) {
            Ok(path) => {
                info!(path = %path.display(), "Exported PNG");
                Some(path)
            }
            Err(e) => {
                self.report(&e);
                None
            }
        }
    }

    /// Snapshot the grid and start writing it to the clipboard.
    /// Returns `None` if the image could not be produced.
    pub fn copy_image(
        &self,
        runtime: &tokio::runtime::Handle,
        on_done: impl FnOnce() + Send + 'static,
    ) -> Option<PendingCopy> {
        let img = self.make_image()?;
        Some(PendingCopy::spawn(runtime, self.clipboard.clone(), img, on_done))
    }

    /// Handle the outcome of a clipboard write. Returns true on success.
    pub fn finish_copy(&self, result: Result<(), ExportError>) -> bool {
        match result {
            Ok(()) => {
                info!("Image copied to clipboard");
                true
            }
            Err(e) => {
                self.report(&e);
                false
            }
        }
    }
}
