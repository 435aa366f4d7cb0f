#![windows_subsystem = "windows"]
//! Matrix Visualizer - Main entry point

use mimalloc::MiMalloc;

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

mod app;
mod clipboard;
mod color;
mod constants;
mod error;
mod export;
mod matrix;
mod notify;
mod settings;
mod theme;
mod types;
mod ui;

use app::App;
use constants::*;
use eframe::egui;
use settings::Settings;
use tracing::info;

/// Initialize file logging. Returns a guard that must be held for the app lifetime.
fn init_logging(data_dir: &std::path::Path) -> tracing_appender::non_blocking::WorkerGuard {
    use tracing_subscriber::{fmt, EnvFilter, prelude::*};

    let logs_dir = data_dir.join("logs");
    std::fs::create_dir_all(&logs_dir).ok();

    let file_appender = tracing_appender::rolling::daily(&logs_dir, "matrix-visualizer.log");
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,matrix_visualizer=debug"));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            fmt::layer()
                .with_writer(non_blocking)
                .with_ansi(false)
                .with_target(true)
                .with_thread_ids(false)
                .with_file(true)
                .with_line_number(true),
        )
        .init();

    guard
}

fn main() -> eframe::Result<()> {
    let settings = Settings::from_env();

    // Initialize logging - guard must live for entire app lifetime
    let _log_guard = init_logging(&settings.data_dir);

    info!(
        version = APP_VERSION,
        data_dir = %settings.data_dir.display(),
        export_dir = %settings.export_dir.display(),
        "Matrix Visualizer starting"
    );

    let mut viewport = egui::ViewportBuilder::default()
        .with_inner_size(egui::vec2(640.0, 760.0))
        .with_min_inner_size([360.0, 480.0])
        .with_title(APP_NAME);

    if let Some(icon_img) = export::icon_image() {
        let (w, h) = (icon_img.width(), icon_img.height());
        let icon = egui::IconData { rgba: icon_img.into_raw(), width: w, height: h };
        viewport = viewport.with_icon(std::sync::Arc::new(icon));
    }

    let options = eframe::NativeOptions {
        viewport,
        ..Default::default()
    };

    eframe::run_native(
        APP_NAME,
        options,
        Box::new(move |cc| Ok(Box::new(App::new(cc, settings)?))),
    )
}

// ============================================================================
// MAIN UPDATE LOOP & UI RENDERING
// ============================================================================

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.poll_copy();

        // Shortcuts: Cmd/Ctrl+S exports, Cmd/Ctrl+Shift+C copies
        let (copy, save) = ctx.input_mut(|i| {
            let copy = i.consume_shortcut(&egui::KeyboardShortcut::new(
                egui::Modifiers::COMMAND | egui::Modifiers::SHIFT,
                egui::Key::C,
            ));
            let save = i.consume_shortcut(&egui::KeyboardShortcut::new(
                egui::Modifiers::COMMAND,
                egui::Key::S,
            ));
            (copy, save)
        });
        if save {
            self.export_png();
        }
        if copy {
            self.copy_image(ctx);
        }

        // Export buttons (must be added BEFORE CentralPanel)
        egui::TopBottomPanel::bottom("export_bar")
            .exact_height(theme::FOOTER_HEIGHT)
            .show_separator_line(false)
            .frame(egui::Frame::new().fill(theme::BG_BASE))
            .show(ctx, |ui| {
                ui.horizontal_centered(|ui| {
                    let total = theme::BUTTON_WIDTH * 2.0 + ui.spacing().item_spacing.x;
                    ui.add_space(((ui.available_width() - total) / 2.0).max(0.0));

                    let export_label = format!("{}  Export as PNG", egui_phosphor::regular::DOWNLOAD_SIMPLE);
                    if ui.add(theme::button_accent(export_label)).clicked() {
                        self.export_png();
                    }

                    let copy_label = format!("{}  Copy Image", egui_phosphor::regular::COPY);
                    let in_flight = self.copy_in_flight();
                    if ui.add_enabled(!in_flight, theme::button(copy_label)).clicked() {
                        self.copy_image(ctx);
                    }
                });
            });

        egui::CentralPanel::default()
            .frame(
                egui::Frame::new()
                    .fill(theme::BG_BASE)
                    .inner_margin(egui::Margin::same(theme::PANEL_MARGIN)),
            )
            .show(ctx, |ui| {
                self.central_panel_rect = Some(ui.max_rect());

                ui.allocate_ui(egui::vec2(ui.available_width(), theme::HEADER_HEIGHT), |ui| {
                    ui.vertical_centered(|ui| {
                        ui.label(
                            egui::RichText::new("5x5 Matrix Visualizer")
                                .size(theme::FONT_TITLE)
                                .color(theme::TEXT_PRIMARY),
                        );
                        ui.add_space(theme::SPACING_SM);
                        ui.label(
                            egui::RichText::new("Click each number to edit")
                                .size(theme::FONT_BODY)
                                .color(theme::TEXT_DIM),
                        );
                    });
                });
                ui.add_space(theme::SPACING_LG);

                self.render_grid(ui);
            });

        self.render_toast(ctx);
    }

    fn on_exit(&mut self, _gl: Option<&eframe::glow::Context>) {
        info!("Application shutting down");
    }
}

// ============================================================================
// GRID & TOAST RENDERING
// ============================================================================

impl App {
    /// Largest square that fits the remaining space, split into ROWS x COLS cells.
    fn render_grid(&mut self, ui: &mut egui::Ui) {
        let avail = ui.available_size();
        let side = avail.x.min(avail.y).max(0.0);
        let (area, _) = ui.allocate_exact_size(egui::vec2(avail.x, side), egui::Sense::hover());
        let grid_rect = egui::Rect::from_center_size(area.center(), egui::vec2(side, side));
        let cell_w = side / COLS as f32;
        let cell_h = side / ROWS as f32;

        for row in 0..ROWS {
            for col in 0..COLS {
                let rect = egui::Rect::from_min_size(
                    grid_rect.min + egui::vec2(col as f32 * cell_w, row as f32 * cell_h),
                    egui::vec2(cell_w, cell_h),
                );
                let id = egui::Id::new(("cell", row, col));
                let value = self.matrix.value(row, col);
                if let Some(new_value) =
                    ui::cell::cell(ui, rect, id, value, &mut self.cell_text[row][col])
                {
                    self.set_cell(row, col, new_value);
                }
            }
        }

        ui.painter().rect_stroke(
            grid_rect,
            0.0,
            theme::grid_stroke(),
            egui::StrokeKind::Outside,
        );
    }

    /// Bottom-right of the central panel, visible then fading, paused on hover
    fn render_toast(&mut self, ctx: &egui::Context) {
        let (Some(msg), Some(panel_rect)) = (self.toast_message.clone(), self.central_panel_rect) else {
            return;
        };
        let total_duration = theme::TOAST_VISIBLE_SECS + theme::TOAST_FADE_SECS;
        let margin = theme::SPACING_LG;
        let toast_pos = egui::pos2(panel_rect.right() - margin, panel_rect.bottom() - margin);
        let elapsed = self.toast_start.map(|t| t.elapsed().as_secs_f32()).unwrap_or(0.0);
        let alpha = if elapsed > theme::TOAST_VISIBLE_SECS {
            ((total_duration - elapsed) / theme::TOAST_FADE_SECS).clamp(0.0, 1.0)
        } else {
            1.0
        };

        let response = egui::Area::new(egui::Id::new("export_toast"))
            .fixed_pos(toast_pos)
            .pivot(egui::Align2::RIGHT_BOTTOM)
            .show(ctx, |ui| {
                theme::toast_frame(alpha).show(ui, |ui| {
                    ui.label(egui::RichText::new(msg).color(
                        egui::Color32::from_rgba_unmultiplied(255, 255, 255, (255.0 * alpha) as u8),
                    ));
                });
            });

        if response.response.hovered() {
            self.toast_start = Some(std::time::Instant::now());
        }

        if elapsed >= total_duration {
            self.toast_message = None;
            self.toast_start = None;
        } else {
            ctx.request_repaint();
        }
    }
}
