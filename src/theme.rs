//! Centralized theme constants for Matrix Visualizer
//! All colors, sizes, and styling should reference these constants

use egui::Color32;

// =============================================================================
// COLORS
// =============================================================================
pub const BG_BASE: Color32 = Color32::from_rgb(0x09, 0x09, 0x0b); // zinc-950
pub const BG_ELEVATED: Color32 = Color32::from_rgb(0x18, 0x18, 0x1b); // zinc-900
pub const BG_HOVER: Color32 = Color32::from_rgb(0x0f, 0x1a, 0x19); // subtle teal hover

pub const ACCENT: Color32 = Color32::from_rgb(0x2d, 0xd4, 0xbf); // teal-400

pub const TEXT_PRIMARY: Color32 = Color32::WHITE;
pub const TEXT_SECONDARY: Color32 = Color32::from_rgb(0xe4, 0xe4, 0xe7); // zinc-200
pub const TEXT_DIM: Color32 = Color32::from_rgb(0x71, 0x71, 0x7a); // zinc-500

pub const BORDER_SUBTLE: Color32 = Color32::from_rgb(0x27, 0x27, 0x2a); // zinc-800
pub const BORDER_DEFAULT: Color32 = Color32::from_rgb(0x3f, 0x3f, 0x46); // zinc-700

pub const BTN_DEFAULT: Color32 = Color32::from_rgb(0x3f, 0x3f, 0x46); // zinc-700
pub const BTN_ACCENT: Color32 = Color32::from_rgb(0x2d, 0xd4, 0xbf); // teal-400
pub const BTN_ACCENT_TEXT: Color32 = Color32::from_rgb(0x04, 0x2f, 0x2e); // teal-950

// =============================================================================
// TYPOGRAPHY
// =============================================================================
pub const FONT_TITLE: f32 = 28.0;
pub const FONT_BODY: f32 = 14.0;
pub const FONT_CELL_MIN: f32 = 12.0;
pub const FONT_CELL_MAX: f32 = 40.0;

// =============================================================================
// DIMENSIONS
// =============================================================================
pub const PANEL_MARGIN: i8 = 24;
pub const HEADER_HEIGHT: f32 = 72.0;
pub const FOOTER_HEIGHT: f32 = 56.0;
pub const BUTTON_HEIGHT_LARGE: f32 = 36.0;
pub const BUTTON_WIDTH: f32 = 160.0;
pub const CELL_PADDING: f32 = 4.0;

pub const RADIUS_DEFAULT: f32 = 4.0;
pub const STROKE_DEFAULT: f32 = 1.0;
pub const STROKE_MEDIUM: f32 = 1.5;

pub const SPACING_SM: f32 = 4.0;
pub const SPACING_MD: f32 = 8.0;
pub const SPACING_LG: f32 = 12.0;

// =============================================================================
// TOAST
// =============================================================================
pub const TOAST_VISIBLE_SECS: f32 = 3.0;
pub const TOAST_FADE_SECS: f32 = 0.5;

// =============================================================================
// HELPER - Apply global visuals
// =============================================================================
pub fn apply_visuals(ctx: &egui::Context) {
    ctx.set_visuals(egui::Visuals {
        dark_mode: true,
        panel_fill: BG_BASE,
        window_fill: Color32::from_rgb(0x1a, 0x1a, 0x1e),
        extreme_bg_color: BG_BASE,
        faint_bg_color: BG_ELEVATED,
        hyperlink_color: ACCENT,
        selection: egui::style::Selection {
            bg_fill: Color32::from_rgb(0x3a, 0x3a, 0x3f),
            stroke: egui::Stroke::new(STROKE_DEFAULT, ACCENT),
        },
        widgets: egui::style::Widgets {
            inactive: egui::style::WidgetVisuals {
                bg_fill: Color32::TRANSPARENT,
                weak_bg_fill: BG_ELEVATED,
                bg_stroke: egui::Stroke::new(STROKE_DEFAULT, BORDER_SUBTLE),
                fg_stroke: egui::Stroke::new(STROKE_DEFAULT, TEXT_SECONDARY),
                corner_radius: RADIUS_DEFAULT.into(),
                expansion: 0.0,
            },
            hovered: egui::style::WidgetVisuals {
                bg_fill: BG_HOVER,
                weak_bg_fill: Color32::from_rgb(0x30, 0x30, 0x35),
                bg_stroke: egui::Stroke::NONE,
                fg_stroke: egui::Stroke::new(STROKE_MEDIUM, TEXT_PRIMARY),
                corner_radius: RADIUS_DEFAULT.into(),
                expansion: 0.0,
            },
            ..egui::Visuals::dark().widgets
        },
        interact_cursor: Some(egui::CursorIcon::PointingHand),
        ..egui::Visuals::dark()
    });

    ctx.style_mut(|style| {
        style.interaction.selectable_labels = false;
        style.spacing.item_spacing = egui::vec2(SPACING_MD, 6.0);
        style.spacing.button_padding = egui::vec2(SPACING_LG, 6.0);
    });
}

// =============================================================================
// HELPER - Button styles
// =============================================================================

/// Default gray button
pub fn button(text: impl Into<String>) -> egui::Button<'static> {
    egui::Button::new(egui::RichText::new(text.into()).size(FONT_BODY))
        .fill(BTN_DEFAULT)
        .corner_radius(RADIUS_DEFAULT)
        .min_size(egui::vec2(BUTTON_WIDTH, BUTTON_HEIGHT_LARGE))
}

/// Accent teal button (primary action)
pub fn button_accent(text: impl Into<String>) -> egui::Button<'static> {
    egui::Button::new(
        egui::RichText::new(text.into())
            .size(FONT_BODY)
            .color(BTN_ACCENT_TEXT),
    )
    .fill(BTN_ACCENT)
    .corner_radius(RADIUS_DEFAULT)
    .min_size(egui::vec2(BUTTON_WIDTH, BUTTON_HEIGHT_LARGE))
}

// =============================================================================
// HELPER - Toast frame
// =============================================================================
pub fn toast_frame(alpha: f32) -> egui::Frame {
    egui::Frame::new()
        .fill(Color32::from_rgba_unmultiplied(0x1a, 0x1a, 0x1e, (230.0 * alpha) as u8))
        .stroke(egui::Stroke::new(
            STROKE_DEFAULT,
            Color32::from_rgba_unmultiplied(ACCENT.r(), ACCENT.g(), ACCENT.b(), (100.0 * alpha) as u8),
        ))
        .corner_radius(6.0)
        .inner_margin(egui::Margin::symmetric(16, 10))
}

/// Outline drawn around the grid
pub fn grid_stroke() -> egui::Stroke {
    egui::Stroke::new(STROKE_DEFAULT, BORDER_DEFAULT)
}
