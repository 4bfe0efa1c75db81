//! System clipboard access for the embed snippet.
//!
//! [`ClipboardSink`] is the seam the deployment hub writes through, so hub
//! logic can be tested without a display server. [`SystemClipboard`] is the
//! real implementation on top of `arboard`.

use arboard::Clipboard;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ClipboardError {
    #[error("clipboard unavailable: {0}")]
    Access(String),
    #[error("clipboard write failed: {0}")]
    Write(String),
}

/// Destination for copied text.
pub trait ClipboardSink {
    fn write_text(&mut self, text: &str) -> Result<(), ClipboardError>;
}

/// The operating system clipboard.
///
/// The handle is opened lazily on first write. On X11 and Wayland the copied
/// text is served by this process and disappears when it exits, so callers
/// should [`persist`](Self::persist) once they have reported success.
#[derive(Default)]
pub struct SystemClipboard {
    inner: Option<Clipboard>,
    last: Option<String>,
}

impl SystemClipboard {
    pub fn new() -> Self {
        Self::default()
    }

    fn handle(&mut self) -> Result<&mut Clipboard, ClipboardError> {
        if self.inner.is_none() {
            let clipboard = Clipboard::new().map_err(|e| ClipboardError::Access(e.to_string()))?;
            self.inner = Some(clipboard);
        }
        self.inner
            .as_mut()
            .ok_or_else(|| ClipboardError::Access("clipboard handle missing".into()))
    }

    /// Whether [`persist`](Self::persist) blocks on this platform.
    pub fn serves_selection() -> bool {
        cfg!(target_os = "linux")
    }

    /// Keep the last written text available after this process would exit.
    ///
    /// On Linux this blocks until another application takes clipboard
    /// ownership. Elsewhere the OS keeps the contents and this returns at
    /// once. Without a prior write there is nothing to serve.
    pub fn persist(&mut self) -> Result<(), ClipboardError> {
        let Some(text) = self.last.take() else {
            return Ok(());
        };
        #[cfg(target_os = "linux")]
        {
            use arboard::SetExtLinux;
            self.handle()?
                .set()
                .wait()
                .text(text)
                .map_err(|e| ClipboardError::Write(e.to_string()))?;
        }
        #[cfg(not(target_os = "linux"))]
        drop(text);
        Ok(())
    }
}

impl ClipboardSink for SystemClipboard {
    fn write_text(&mut self, text: &str) -> Result<(), ClipboardError> {
        self.handle()?
            .set_text(text)
            .map_err(|e| ClipboardError::Write(e.to_string()))?;
        self.last = Some(text.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::{Duration, Instant};

    #[test]
    fn clipboard_error_display() {
        let err = ClipboardError::Access("no display".to_string());
        assert!(err.to_string().contains("no display"));

        let err = ClipboardError::Write("denied".to_string());
        assert!(err.to_string().contains("denied"));
    }

    #[test]
    fn persist_without_write_returns_immediately() {
        let mut clipboard = SystemClipboard::new();
        let start = Instant::now();
        assert!(clipboard.persist().is_ok());
        assert!(start.elapsed() < Duration::from_secs(1));
        assert!(clipboard.inner.is_none());
    }

    #[test]
    fn only_linux_serves_the_selection() {
        assert_eq!(
            SystemClipboard::serves_selection(),
            cfg!(target_os = "linux")
        );
    }

    // Writing to the real clipboard needs a display server, which CI
    // environments usually lack.
}
