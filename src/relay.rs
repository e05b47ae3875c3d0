use tracing::debug;

use crate::content::SelectedContent;

/// Events arriving from the page context while a capture is armed
#[derive(Debug, Clone)]
pub enum PageEvent {
    TextSelected(String),
    ImageClicked(String),
}

/// Capture-once selection relay.
///
/// After `activate()`, the first of {non-empty text selection, image click}
/// completes the capture and the relay disarms itself; further events are
/// ignored until the next activation. There is no cancellation signal other
/// than completion.
#[derive(Debug, Default)]
pub struct SelectionRelay {
    active: bool,
}

impl SelectionRelay {
    pub fn new() -> Self {
        Self { active: false }
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn activate(&mut self) {
        debug!("Selection relay armed");
        self.active = true;
    }

    /// Feed one page event; returns the captured content when this event
    /// completes the capture.
    pub fn observe(&mut self, event: PageEvent) -> Option<SelectedContent> {
        if !self.active {
            return None;
        }

        let captured = match event {
            PageEvent::TextSelected(text) => {
                if text.trim().is_empty() {
                    // Empty selections don't complete the capture
                    return None;
                }
                SelectedContent::text(text)
            }
            PageEvent::ImageClicked(url) => SelectedContent::image(url),
        };

        self.active = false;
        debug!(kind = captured.kind.label(), "Selection relay captured content");
        Some(captured)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::ContentKind;

    #[test]
    fn test_inactive_relay_ignores_events() {
        let mut relay = SelectionRelay::new();
        assert!(relay
            .observe(PageEvent::TextSelected("hello".to_string()))
            .is_none());
    }

    #[test]
    fn test_captures_first_event_then_disarms() {
        let mut relay = SelectionRelay::new();
        relay.activate();

        let captured = relay
            .observe(PageEvent::TextSelected("hello world".to_string()))
            .unwrap();
        assert_eq!(captured.kind, ContentKind::Text);
        assert_eq!(captured.payload, "hello world");
        assert!(!relay.is_active());

        // Second event after capture is dropped
        assert!(relay
            .observe(PageEvent::ImageClicked("https://example.com/a.png".to_string()))
            .is_none());
    }

    #[test]
    fn test_empty_selection_keeps_relay_armed() {
        let mut relay = SelectionRelay::new();
        relay.activate();

        assert!(relay
            .observe(PageEvent::TextSelected("   ".to_string()))
            .is_none());
        assert!(relay.is_active());

        let captured = relay
            .observe(PageEvent::ImageClicked("https://example.com/b.jpg".to_string()))
            .unwrap();
        assert_eq!(captured.kind, ContentKind::Image);
        assert!(!relay.is_active());
    }

    #[test]
    fn test_reactivation_allows_new_capture() {
        let mut relay = SelectionRelay::new();
        relay.activate();
        relay
            .observe(PageEvent::TextSelected("first".to_string()))
            .unwrap();

        relay.activate();
        let second = relay
            .observe(PageEvent::TextSelected("second".to_string()))
            .unwrap();
        assert_eq!(second.payload, "second");
    }
}
