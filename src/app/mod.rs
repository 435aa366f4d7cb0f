//! App module - contains the main application state and logic

mod actions;

use crate::clipboard::{PendingCopy, SystemClipboard};
use crate::constants::*;
use crate::export::Exporter;
use crate::matrix::Matrix;
use crate::notify::DialogNotifier;
use crate::settings::Settings;
use crate::theme;
use crate::types::format_step;
use eframe::egui;
use std::sync::Arc;

// ============================================================================
// APP STATE
// ============================================================================

pub struct App {
    pub(crate) matrix: Matrix,
    /// Raw text of each cell input, kept separately so partial input survives
    pub(crate) cell_text: [[String; COLS]; ROWS],
    pub(crate) settings: Settings,
    pub(crate) runtime: tokio::runtime::Runtime,
    pub(crate) pending_copy: Option<PendingCopy>,
    // Toast notification
    pub(crate) toast_message: Option<String>,
    pub(crate) toast_start: Option<std::time::Instant>,
    // Central panel rect for toast positioning
    pub(crate) central_panel_rect: Option<egui::Rect>,
}

// ============================================================================
// APP INITIALIZATION & HELPERS
// ============================================================================

impl App {
    pub fn new(cc: &eframe::CreationContext<'_>, settings: Settings) -> std::io::Result<Self> {
        cc.egui_ctx.set_theme(egui::Theme::Dark);

        let mut fonts = egui::FontDefinitions::default();
        egui_phosphor::add_to_fonts(&mut fonts, egui_phosphor::Variant::Regular);
        cc.egui_ctx.set_fonts(fonts);

        theme::apply_visuals(&cc.egui_ctx);

        let runtime = tokio::runtime::Builder::new_multi_thread()
            .worker_threads(1)
            .thread_name("clipboard")
            .build()?;

        let matrix = Matrix::new(
            Exporter::default(),
            Arc::new(SystemClipboard::default()),
            Box::new(DialogNotifier),
        );

        Ok(Self {
            matrix,
            cell_text: std::array::from_fn(|_| {
                std::array::from_fn(|_| format_step(DEFAULT_TILE_VALUE))
            }),
            settings,
            runtime,
            pending_copy: None,
            toast_message: None,
            toast_start: None,
            central_panel_rect: None,
        })
    }

    pub fn show_toast(&mut self, message: impl Into<String>) {
        self.toast_message = Some(message.into());
        self.toast_start = Some(std::time::Instant::now());
    }

    pub fn copy_in_flight(&self) -> bool {
        self.pending_copy.is_some()
    }
}
