//! Export error types

use std::path::PathBuf;
use thiserror::Error;

/// Which of the two user-facing failure kinds an error belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ErrorKind {
    /// The offscreen drawing surface could not be acquired
    Surface,
    /// Encoding, writing or clipboard transfer failed
    Output,
}

impl ErrorKind {
    pub fn as_str(self) -> &'static str {
        match self {
            ErrorKind::Surface => "surface",
            ErrorKind::Output => "output",
        }
    }
}

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("drawing surface of {width}x{height} could not be acquired")]
    SurfaceUnavailable { width: u32, height: u32 },

    #[error("failed to encode image: {0}")]
    Encode(#[from] image::ImageError),

    #[error("image encoder produced no data")]
    EmptyEncoding,

    #[error("failed to write {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("clipboard write failed: {0}")]
    Clipboard(#[from] arboard::Error),

    #[error("clipboard task ended without reporting a result")]
    ClipboardTaskLost,
}

impl ExportError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            ExportError::SurfaceUnavailable { .. } => ErrorKind::Surface,
            _ => ErrorKind::Output,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kinds() {
        let surface = ExportError::SurfaceUnavailable { width: 1000, height: 1000 };
        assert_eq!(surface.kind(), ErrorKind::Surface);
        assert_eq!(ExportError::EmptyEncoding.kind(), ErrorKind::Output);
        assert_eq!(ExportError::ClipboardTaskLost.kind(), ErrorKind::Output);
        assert_eq!(
            ExportError::Clipboard(arboard::Error::ClipboardNotSupported).kind(),
            ErrorKind::Output
        );
    }

    #[test]
    fn test_messages_carry_detail() {
        let err = ExportError::SurfaceUnavailable { width: 10, height: 20 };
        assert_eq!(err.to_string(), "drawing surface of 10x20 could not be acquired");

        let err = ExportError::Write {
            path: PathBuf::from("out/matrix-image.png"),
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        };
        assert!(err.to_string().contains("matrix-image.png"));
        assert!(err.to_string().contains("denied"));
    }
}
