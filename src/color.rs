//! Intensity to grayscale mapping shared by the on-screen tiles and the export

use crate::constants::{RGB_MAX, TEXT_CONTRAST_THRESHOLD};
use egui::Color32;

/// Clamp a cell value to [0, 1]. NaN counts as 0.
pub fn intensity(value: f64) -> f64 {
    if value.is_nan() {
        0.0
    } else {
        value.clamp(0.0, 1.0)
    }
}

/// Channel value used for red, green and blue alike.
pub fn gray_level(value: f64) -> u8 {
    (RGB_MAX * intensity(value)).round() as u8
}

pub fn to_rgba(value: f64) -> image::Rgba<u8> {
    let level = gray_level(value);
    image::Rgba([level, level, level, u8::MAX])
}

pub fn to_color32(value: f64) -> Color32 {
    let level = gray_level(value);
    Color32::from_rgb(level, level, level)
}

/// Dark tiles get white text, light tiles black.
pub fn text_color(value: f64) -> Color32 {
    if value.is_nan() || value < TEXT_CONTRAST_THRESHOLD {
        Color32::WHITE
    } else {
        Color32::BLACK
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unit_interval_scales_to_channel() {
        assert_eq!(gray_level(0.0), 0);
        assert_eq!(gray_level(1.0), 255);
        assert_eq!(gray_level(0.5), 128);
        assert_eq!(gray_level(0.25), 64);
        for step in 0..=100 {
            let v = step as f64 / 100.0;
            assert_eq!(gray_level(v), (255.0 * v).round() as u8, "value {v}");
        }
    }

    #[test]
    fn test_mapping_is_idempotent() {
        for step in 0..=100 {
            let level = gray_level(step as f64 / 100.0);
            assert_eq!(gray_level(level as f64 / 255.0), level);
        }
    }

    #[test]
    fn test_out_of_range_and_nan_clamp() {
        assert_eq!(gray_level(f64::NAN), 0);
        assert_eq!(gray_level(-0.1), 0);
        assert_eq!(gray_level(-1e9), 0);
        assert_eq!(gray_level(f64::NEG_INFINITY), 0);
        assert_eq!(gray_level(1.0001), 255);
        assert_eq!(gray_level(42.0), 255);
        assert_eq!(gray_level(f64::INFINITY), 255);
    }

    #[test]
    fn test_channels_are_neutral_and_opaque() {
        let px = to_rgba(0.3);
        assert_eq!(px.0[0], px.0[1]);
        assert_eq!(px.0[1], px.0[2]);
        assert_eq!(px.0[3], 255);
        assert_eq!(to_color32(0.3), Color32::from_rgb(px.0[0], px.0[0], px.0[0]));
    }

    #[test]
    fn test_text_color_threshold() {
        assert_eq!(text_color(0.59), Color32::WHITE);
        assert_eq!(text_color(0.61), Color32::BLACK);
        assert_eq!(text_color(0.6), Color32::BLACK);
        assert_eq!(text_color(f64::NAN), Color32::WHITE);
        assert_eq!(text_color(-3.0), Color32::WHITE);
        assert_eq!(text_color(7.0), Color32::BLACK);
    }
}
