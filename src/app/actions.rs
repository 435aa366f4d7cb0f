//! Export button handlers

use super::App;
use crate::constants::EXPORT_FILE_NAME;
use crate::settings::prepare_export_dir;
use eframe::egui;
use tracing::debug;

impl App {
    pub fn export_png(&mut self) {
        let dir = self.settings.export_dir.clone();
        prepare_export_dir(&dir);
        if self.matrix.export_png(&dir).is_some() {
            self.show_toast(format!("Saved {} to {}", EXPORT_FILE_NAME, dir.display()));
        }
    }

    pub fn copy_image(&mut self, ctx: &egui::Context) {
        if self.copy_in_flight() {
            debug!("Clipboard write already pending, ignoring copy");
            return;
        }
        let ctx = ctx.clone();
        self.pending_copy = self
            .matrix
            .copy_image(self.runtime.handle(), move || ctx.request_repaint());
    }

    /// Check whether a pending clipboard write has finished.
    pub fn poll_copy(&mut self) {
        let Some(pending) = self.pending_copy.as_mut() else {
            return;
        };
        let Some(result) = pending.poll() else {
            return;
        };
        self.pending_copy = None;
        if self.matrix.finish_copy(result) {
            self.show_toast("Image copied to clipboard");
        }
    }

    pub fn set_cell(&mut self, row: usize, col: usize, value: f64) {
        debug!(row, col, value, "Cell updated");
        self.matrix.update_cell(row, col, value);
    }
}
