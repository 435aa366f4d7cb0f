//! A single editable grid cell: grayscale swatch with a centered numeric input

use crate::color;
use crate::theme;
use crate::types::{format_step, parse_number, step_value};
use eframe::egui;

/// Draw the cell into `rect`. Returns the new value when the user changed it,
/// either by typing (parsed as-is, NaN for non-numbers) or with the arrow keys.
pub fn cell(
    ui: &mut egui::Ui,
    rect: egui::Rect,
    id: egui::Id,
    value: f64,
    text: &mut String,
) -> Option<f64> {
    let mut new_value = None;

    if ui.memory(|m| m.has_focus(id)) {
        let (up, down) = ui.input_mut(|i| {
            (
                i.count_and_consume_key(egui::Modifiers::NONE, egui::Key::ArrowUp),
                i.count_and_consume_key(egui::Modifiers::NONE, egui::Key::ArrowDown),
            )
        });
        let steps = up as i32 - down as i32;
        if steps != 0 {
            let stepped = step_value(value, steps);
            *text = format_step(stepped);
            new_value = Some(stepped);
        }
    }

    let shown = new_value.unwrap_or(value);
    ui.painter().rect_filled(rect, 0.0, color::to_color32(shown));

    let font_size = (rect.height() * 0.2).clamp(theme::FONT_CELL_MIN, theme::FONT_CELL_MAX);
    let inner = rect.shrink(theme::CELL_PADDING);
    let response = ui.put(
        inner,
        egui::TextEdit::singleline(text)
            .id(id)
            .frame(false)
            .font(egui::FontId::proportional(font_size))
            .text_color(color::text_color(shown))
            .horizontal_align(egui::Align::Center)
            .vertical_align(egui::Align::Center)
            .min_size(inner.size())
            .desired_width(inner.width()),
    );

    if response.changed() {
        new_value = Some(parse_number(text));
    }

    if response.has_focus() {
        ui.painter().rect_stroke(
            rect.shrink(1.0),
            0.0,
            egui::Stroke::new(theme::STROKE_MEDIUM, theme::ACCENT),
            egui::StrokeKind::Inside,
        );
    }

    new_value
}
