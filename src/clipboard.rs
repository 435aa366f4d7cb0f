//! Image clipboard access and the deferred clipboard write

use crate::error::ExportError;
use arboard::{Clipboard, ImageData};
use image::RgbaImage;
use std::borrow::Cow;
use std::sync::{Arc, Mutex};
use tokio::sync::oneshot;
use tracing::debug;

pub trait ClipboardSink: Send + Sync {
    fn write_image(&self, image: &RgbaImage) -> Result<(), ExportError>;
}

/// System clipboard through arboard.
///
/// The handle is created on first use and kept for the session; on X11 and
/// Wayland the contents are served by it and disappear once it is dropped.
#[derive(Default)]
pub struct SystemClipboard {
    handle: Mutex<Option<Clipboard>>,
}

impl ClipboardSink for SystemClipboard {
    fn write_image(&self, image: &RgbaImage) -> Result<(), ExportError> {
        let mut guard = self
            .handle
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        let clipboard = match guard.take() {
            Some(clipboard) => clipboard,
            None => Clipboard::new()?,
        };
        let clipboard = guard.insert(clipboard);
        clipboard.set_image(ImageData {
            width: image.width() as usize,
            height: image.height() as usize,
            bytes: Cow::Borrowed(image.as_raw().as_slice()),
        })?;
        debug!(width = image.width(), height = image.height(), "Image placed on clipboard");
        Ok(())
    }
}

/// A clipboard write running off the UI thread.
pub struct PendingCopy {
    rx: oneshot::Receiver<Result<(), ExportError>>,
}

impl PendingCopy {
    /// Start writing `image` on a blocking worker. `on_done` runs after the
    /// result has been sent.
    pub fn spawn(
        runtime: &tokio::runtime::Handle,
        sink: Arc<dyn ClipboardSink>,
        image: RgbaImage,
        on_done: impl FnOnce() + Send + 'static,
    ) -> Self {
        let (tx, rx) = oneshot::channel();
        runtime.spawn_blocking(move || {
            let _ = tx.send(sink.write_image(&image));
            on_done();
        });
        Self { rx }
    }

    /// `None` while the write is still running.
    pub fn poll(&mut self) -> Option<Result<(), ExportError>> {
        match self.rx.try_recv() {
            Ok(result) => Some(result),
            Err(oneshot::error::TryRecvError::Empty) => None,
            Err(oneshot::error::TryRecvError::Closed) => Some(Err(ExportError::ClipboardTaskLost)),
        }
    }

    #[cfg(test)]
    pub fn wait(self) -> Result<(), ExportError> {
        self.rx
            .blocking_recv()
            .unwrap_or(Err(ExportError::ClipboardTaskLost))
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// Counts writes and keeps the last image; fails every write when `fail` is set.
    #[derive(Default)]
    pub(crate) struct RecordingSink {
        pub writes: AtomicUsize,
        pub last: Mutex<Option<RgbaImage>>,
        pub fail: bool,
    }

    impl RecordingSink {
        pub fn last_image(&self) -> Option<RgbaImage> {
            self.last.lock().unwrap().clone()
        }
    }

    impl ClipboardSink for RecordingSink {
        fn write_image(&self, image: &RgbaImage) -> Result<(), ExportError> {
            self.writes.fetch_add(1, Ordering::SeqCst);
            *self.last.lock().unwrap() = Some(image.clone());
            if self.fail {
                Err(ExportError::Clipboard(arboard::Error::ClipboardNotSupported))
            } else {
                Ok(())
            }
        }
    }

    #[test]
    fn test_pending_copy_reports_success() {
        let runtime = tokio::runtime::Runtime::new().unwrap();
        let sink = Arc::new(RecordingSink::default());
        let done = Arc::new(AtomicUsize::new(0));
        let done_flag = done.clone();

        let pending = PendingCopy::spawn(
            runtime.handle(),
            sink.clone(),
            RgbaImage::new(1000, 1000),
            move || {
                done_flag.fetch_add(1, Ordering::SeqCst);
            },
        );
        assert!(pending.wait().is_ok());
        assert_eq!(sink.writes.load(Ordering::SeqCst), 1);
        assert_eq!(sink.last_image().unwrap().dimensions(), (1000, 1000));
        runtime.shutdown_timeout(std::time::Duration::from_secs(1));
        assert_eq!(done.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_pending_copy_reports_failure() {
        let runtime = tokio::runtime::Runtime::new().unwrap();
        let sink = Arc::new(RecordingSink { fail: true, ..Default::default() });
        let pending = PendingCopy::spawn(runtime.handle(), sink, RgbaImage::new(1000, 1000), || {});
        assert!(matches!(pending.wait(), Err(ExportError::Clipboard(_))));
    }

    #[test]
    fn test_poll_eventually_yields_result() {
        let runtime = tokio::runtime::Runtime::new().unwrap();
        let sink = Arc::new(RecordingSink::default());
        let mut pending = PendingCopy::spawn(runtime.handle(), sink, RgbaImage::new(1000, 1000), || {});
        let deadline = std::time::Instant::now() + std::time::Duration::from_secs(5);
        let result = loop {
            if let Some(result) = pending.poll() {
                break result;
            }
            assert!(std::time::Instant::now() < deadline, "clipboard write never finished");
            std::thread::sleep(std::time::Duration::from_millis(5));
        };
        assert!(result.is_ok());
    }
}
