//! System clipboard access for the copy buttons.

use anyhow::{Context, Result};

/// Destination for copied usernames
pub trait ClipboardSink {
    fn set_text(&mut self, text: &str) -> Result<()>;
}

/// The OS clipboard via arboard.
///
/// The handle is opened on first use and then kept alive, since on X11 the
/// copied text is only served while the owning handle exists.
#[derive(Default)]
pub struct SystemClipboard {
    inner: Option<arboard::Clipboard>,
}

impl ClipboardSink for SystemClipboard {
    fn set_text(&mut self, text: &str) -> Result<()> {
        if self.inner.is_none() {
            self.inner = Some(arboard::Clipboard::new().context("Failed to open system clipboard")?);
        }
        if let Some(clipboard) = self.inner.as_mut() {
            clipboard
                .set_text(text)
                .context("Failed to write to system clipboard")?;
        }
        Ok(())
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};

    /// In-memory clipboard recording every write
    #[derive(Clone, Default)]
    pub struct RecordingClipboard {
        writes: Arc<Mutex<Vec<String>>>,
        fail: bool,
    }

    impl RecordingClipboard {
        pub fn failing() -> Self {
            Self {
                fail: true,
                ..Self::default()
            }
        }

        pub fn contents(&self) -> Vec<String> {
            self.writes.lock().unwrap().clone()
        }
    }

    impl ClipboardSink for RecordingClipboard {
        fn set_text(&mut self, text: &str) -> Result<()> {
            if self.fail {
                anyhow::bail!("clipboard not available");
            }
            self.writes.lock().unwrap().push(text.to_string());
            Ok(())
        }
    }

    #[test]
    fn test_recording_clipboard_through_trait_object() {
        let recorder = RecordingClipboard::default();
        let mut sink: Box<dyn ClipboardSink> = Box::new(recorder.clone());
        sink.set_text("gamer1").unwrap();
        sink.set_text("pro_gm").unwrap();
        assert_eq!(recorder.contents(), vec!["gamer1", "pro_gm"]);

        let mut failing: Box<dyn ClipboardSink> = Box::new(RecordingClipboard::failing());
        assert!(failing.set_text("gamer1").is_err());
    }
}
