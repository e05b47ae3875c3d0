use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::content::SelectedContent;
use crate::error::{SniffrError, SniffrResult};

/// Persisted single-slot handoff between the capture side (context commands,
/// selection relay) and the panel. Holds at most one `SelectedContent`; a new
/// write overwrites whatever is pending. The panel's `take()` is
/// read-then-clear, which matches the at-most-one-producer use.
#[derive(Debug, Clone)]
pub struct PendingSlot {
    path: PathBuf,
}

impl PendingSlot {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Store content, replacing any pending value. Written to a temp file
    /// first so a reader never sees a half-written slot.
    pub fn put(&self, content: &SelectedContent) -> SniffrResult<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)
                    .map_err(|e| SniffrError::file_io(parent.to_string_lossy().to_string(), e))?;
            }
        }

        let json = serde_json::to_string_pretty(content)
            .map_err(|e| SniffrError::General(anyhow::anyhow!("slot serialization failed: {}", e)))?;

        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, json)
            .map_err(|e| SniffrError::file_io(tmp.to_string_lossy().to_string(), e))?;
        fs::rename(&tmp, &self.path)
            .map_err(|e| SniffrError::file_io(self.path.to_string_lossy().to_string(), e))?;

        info!(kind = content.kind.label(), "📌 Pending content stored");
        Ok(())
    }

    /// Read without clearing; used by the status command
    pub fn peek(&self) -> SniffrResult<Option<SelectedContent>> {
        if !self.path.exists() {
            return Ok(None);
        }
        let json = fs::read_to_string(&self.path)
            .map_err(|e| SniffrError::file_io(self.path.to_string_lossy().to_string(), e))?;
        let content: SelectedContent = serde_json::from_str(&json)
            .map_err(|e| SniffrError::General(anyhow::anyhow!("corrupt slot file: {}", e)))?;
        Ok(Some(content))
    }

    /// Read and clear in one call. At-most-once delivery: the value is gone
    /// after a successful take even if the caller drops it.
    pub fn take(&self) -> SniffrResult<Option<SelectedContent>> {
        let content = match self.peek()? {
            Some(content) => content,
            None => return Ok(None),
        };
        self.clear()?;
        debug!("Pending content consumed");
        Ok(Some(content))
    }

    pub fn clear(&self) -> SniffrResult<()> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(SniffrError::file_io(
                self.path.to_string_lossy().to_string(),
                e,
            )),
        }
    }
}

/// Background-lifetime mediator: owns the slot and accepts content from both
/// the direct context-capture path and relay reports. Performs no validation
/// or normalization of its own.
#[derive(Debug, Clone)]
pub struct Coordinator {
    slot: PendingSlot,
}

impl Coordinator {
    pub fn new(slot: PendingSlot) -> Self {
        Self { slot }
    }

    pub fn slot(&self) -> &PendingSlot {
        &self.slot
    }

    /// Context-menu path: capture highlighted text directly, bypassing the relay
    pub fn capture_text(&self, text: impl Into<String>) -> SniffrResult<()> {
        self.slot.put(&SelectedContent::text(text))
    }

    /// Context-menu path: capture a clicked image URL directly
    pub fn capture_image(&self, url: impl Into<String>) -> SniffrResult<()> {
        self.slot.put(&SelectedContent::image(url))
    }

    /// Relay path: store whatever the relay captured
    pub fn report(&self, content: &SelectedContent) -> SniffrResult<()> {
        self.slot.put(content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::ContentKind;
    use tempfile::tempdir;

    fn slot_in_tempdir() -> (tempfile::TempDir, PendingSlot) {
        let dir = tempdir().unwrap();
        let slot = PendingSlot::new(dir.path().join("pending.json"));
        (dir, slot)
    }

    #[test]
    fn test_empty_slot_takes_none() {
        let (_dir, slot) = slot_in_tempdir();
        assert!(slot.take().unwrap().is_none());
    }

    #[test]
    fn test_put_take_roundtrip_clears_slot() {
        let (_dir, slot) = slot_in_tempdir();
        slot.put(&SelectedContent::text("hello world")).unwrap();

        let taken = slot.take().unwrap().unwrap();
        assert_eq!(taken.kind, ContentKind::Text);
        assert_eq!(taken.payload, "hello world");

        // At-most-once: a second take finds nothing
        assert!(slot.take().unwrap().is_none());
    }

    #[test]
    fn test_second_put_overwrites_pending_value() {
        let (_dir, slot) = slot_in_tempdir();
        slot.put(&SelectedContent::text("first")).unwrap();
        slot.put(&SelectedContent::image("https://example.com/x.png"))
            .unwrap();

        let taken = slot.take().unwrap().unwrap();
        assert_eq!(taken.kind, ContentKind::Image);
    }

    #[test]
    fn test_peek_does_not_clear() {
        let (_dir, slot) = slot_in_tempdir();
        slot.put(&SelectedContent::text("still here")).unwrap();
        assert!(slot.peek().unwrap().is_some());
        assert!(slot.peek().unwrap().is_some());
    }

    #[test]
    fn test_coordinator_paths_share_slot() {
        let (_dir, slot) = slot_in_tempdir();
        let coordinator = Coordinator::new(slot);

        coordinator.capture_text("from context menu").unwrap();
        let taken = coordinator.slot().take().unwrap().unwrap();
        assert_eq!(taken.payload, "from context menu");

        coordinator
            .report(&SelectedContent::image("https://example.com/y.jpg"))
            .unwrap();
        let taken = coordinator.slot().take().unwrap().unwrap();
        assert_eq!(taken.kind, ContentKind::Image);
    }

    #[test]
    fn test_corrupt_slot_is_malformed_error() {
        let (_dir, slot) = slot_in_tempdir();
        std::fs::write(slot.path(), "{ not json").unwrap();
        assert!(matches!(slot.peek(), Err(SniffrError::General(_))));
    }
}
