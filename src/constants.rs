//! Application constants and configuration

pub const APP_NAME: &str = "Matrix Visualizer";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Grid dimensions
pub const ROWS: usize = 5;
pub const COLS: usize = 5;

/// Value every cell starts with
pub const DEFAULT_TILE_VALUE: f64 = 0.0;

/// Side length in pixels of one cell in the exported image
pub const PNG_TILE_LENGTH: u32 = 200;

pub const EXPORT_FILE_NAME: &str = "matrix-image.png";
pub const UNEXPECTED_ERROR_MESSAGE: &str = "Unexpected error. Please try again!";

pub const RGB_MAX: f64 = 255.0;

/// Below this intensity cell text is drawn white instead of black
pub const TEXT_CONTRAST_THRESHOLD: f64 = 0.6;

/// Increment applied by the arrow keys on a focused cell
pub const INPUT_STEP: f64 = 0.01;

/// Environment overrides
pub const ENV_DATA_DIR: &str = "MATRIX_VISUALIZER_DATA_DIR";
pub const ENV_EXPORT_DIR: &str = "MATRIX_VISUALIZER_EXPORT_DIR";
