//! Runtime configuration resolved from the environment and platform directories

use crate::constants::{APP_NAME, ENV_DATA_DIR, ENV_EXPORT_DIR};
use std::ffi::OsString;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

#[derive(Debug, Clone)]
pub struct Settings {
    /// Holds the `logs` directory
    pub data_dir: PathBuf,
    /// Where `matrix-image.png` is written
    pub export_dir: PathBuf,
}

impl Settings {
    pub fn from_env() -> Self {
        let settings = Self::resolve(
            std::env::var_os(ENV_DATA_DIR),
            std::env::var_os(ENV_EXPORT_DIR),
            dirs::data_local_dir(),
            dirs::download_dir(),
        );
        debug!(
            data_dir = %settings.data_dir.display(),
            export_dir = %settings.export_dir.display(),
            "Settings resolved"
        );
        settings
    }

    /// Environment overrides win, then platform directories, then the working directory.
    pub fn resolve(
        data_override: Option<OsString>,
        export_override: Option<OsString>,
        local_data: Option<PathBuf>,
        downloads: Option<PathBuf>,
    ) -> Self {
        let non_empty = |v: Option<OsString>| v.filter(|s| !s.is_empty()).map(PathBuf::from);

        let data_dir = non_empty(data_override).unwrap_or_else(|| {
            local_data
                .unwrap_or_else(|| PathBuf::from("."))
                .join(APP_NAME)
        });
        let export_dir = non_empty(export_override)
            .or(downloads)
            .unwrap_or_else(|| PathBuf::from("."));

        Self { data_dir, export_dir }
    }
}

/// Create the export directory if needed. A failure is logged and left for
/// the write itself to report.
pub fn prepare_export_dir(dir: &Path) -> bool {
    match std::fs::create_dir_all(dir) {
        Ok(()) => true,
        Err(e) => {
            warn!(error = %e, dir = %dir.display(), "Could not create export directory");
            false
        }
    }
}
