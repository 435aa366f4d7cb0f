//! Common types and data structures

use crate::constants::{COLS, DEFAULT_TILE_VALUE, INPUT_STEP, ROWS};

/// The 5x5 matrix of cell intensities.
///
/// Values are stored exactly as entered; NaN and out-of-range numbers are
/// only interpreted when they are turned into colors.
#[derive(Clone, Copy, Debug)]
pub struct Grid {
    values: [[f64; COLS]; ROWS],
}

impl Default for Grid {
    fn default() -> Self {
        Self {
            values: [[DEFAULT_TILE_VALUE; COLS]; ROWS],
        }
    }
}

impl Grid {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, row: usize, col: usize) -> Option<f64> {
        self.values.get(row).and_then(|r| r.get(col)).copied()
    }

    /// Replace a single cell. Returns false if the position is outside the grid.
    pub fn set(&mut self, row: usize, col: usize, value: f64) -> bool {
        match self.values.get_mut(row).and_then(|r| r.get_mut(col)) {
            Some(slot) => {
                *slot = value;
                true
            }
            None => false,
        }
    }

    /// Row-major iteration: row 0 left to right, then row 1, ...
    pub fn cells(&self) -> impl Iterator<Item = (usize, usize, f64)> + '_ {
        self.values
            .iter()
            .enumerate()
            .flat_map(|(row, r)| r.iter().enumerate().map(move |(col, &v)| (row, col, v)))
    }
}

/// Parse cell text the way a numeric input does: anything that is not a
/// finite decimal number becomes NaN, including "inf" and "NaN" spellings.
pub fn parse_number(text: &str) -> f64 {
    text.trim()
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .unwrap_or(f64::NAN)
}

/// Move `value` by `steps` increments of [`INPUT_STEP`], snapping to the step grid.
/// NaN steps from zero.
pub fn step_value(value: f64, steps: i32) -> f64 {
    let base = if value.is_nan() { 0.0 } else { value };
    let snapped = (base / INPUT_STEP).round() + steps as f64;
    snapped * INPUT_STEP
}

/// Text shown in a cell after a stepper change.
pub fn format_step(value: f64) -> String {
    let text = format!("{:.2}", value);
    let text = text.trim_end_matches('0').trim_end_matches('.');
    match text {
        "" | "-" | "-0" => "0".to_string(),
        t => t.to_string(),
    }
}
