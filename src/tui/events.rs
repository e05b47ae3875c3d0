// Event handling for the SNIFFR panel
// Clean, action-based event system

use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyModifiers};
use std::time::Duration;

#[derive(Debug, Clone)]
pub enum PanelAction {
    // Navigation (by page id; unknown ids fall through as no-ops)
    Quit,
    Navigate(String),

    // Select-page capture input
    InputChar(char),
    InputBackspace,
    ToggleCaptureKind,
    SubmitCapture,

    // Analysis trigger (Preview/Result pages)
    Analyze,

    // Internal tick for slot polling and redraws
    Update,
}

pub struct EventHandler;

impl EventHandler {
    pub fn new() -> Self {
        Self {}
    }

    /// Non-blocking event polling with a small timeout; quiet ticks come
    /// back as `Update` so the slot gets polled regularly.
    pub fn handle_events(&mut self, capture_input_active: bool) -> Result<Option<PanelAction>> {
        if event::poll(Duration::from_millis(50))? {
            match event::read()? {
                Event::Key(key_event) => {
                    return Ok(self.handle_key_event(key_event, capture_input_active));
                }
                Event::Resize(_, _) => {
                    return Ok(Some(PanelAction::Update));
                }
                _ => {}
            }
        }

        Ok(Some(PanelAction::Update))
    }

    fn handle_key_event(
        &self,
        key_event: crossterm::event::KeyEvent,
        capture_input_active: bool,
    ) -> Option<PanelAction> {
        // Ctrl+Q quits from anywhere, input mode included
        if key_event.modifiers.contains(KeyModifiers::CONTROL) {
            if let KeyCode::Char('q') = key_event.code {
                return Some(PanelAction::Quit);
            }
        }

        if capture_input_active {
            return match key_event.code {
                KeyCode::Enter => Some(PanelAction::SubmitCapture),
                KeyCode::Tab => Some(PanelAction::ToggleCaptureKind),
                KeyCode::Esc => Some(PanelAction::Navigate("intro".to_string())),
                KeyCode::Backspace => Some(PanelAction::InputBackspace),
                KeyCode::Char(c) => Some(PanelAction::InputChar(c)),
                _ => None,
            };
        }

        match key_event.code {
            KeyCode::Char('q') | KeyCode::Esc => Some(PanelAction::Quit),

            // Direct page navigation
            KeyCode::Char('1') | KeyCode::Char('i') => {
                Some(PanelAction::Navigate("intro".to_string()))
            }
            KeyCode::Char('2') | KeyCode::Char('s') => {
                Some(PanelAction::Navigate("select".to_string()))
            }
            KeyCode::Char('3') | KeyCode::Char('p') => {
                Some(PanelAction::Navigate("preview".to_string()))
            }
            KeyCode::Char('4') => Some(PanelAction::Navigate("result".to_string())),

            // Analyze / retry
            KeyCode::Char('a') | KeyCode::Char('r') | KeyCode::Enter => {
                Some(PanelAction::Analyze)
            }

            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyEvent, KeyEventKind, KeyEventState};

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent {
            code,
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Press,
            state: KeyEventState::NONE,
        }
    }

    #[test]
    fn test_navigation_keys_map_to_page_ids() {
        let handler = EventHandler::new();
        for (code, id) in [
            (KeyCode::Char('1'), "intro"),
            (KeyCode::Char('2'), "select"),
            (KeyCode::Char('3'), "preview"),
            (KeyCode::Char('4'), "result"),
        ] {
            match handler.handle_key_event(key(code), false) {
                Some(PanelAction::Navigate(target)) => assert_eq!(target, id),
                other => panic!("unexpected action {:?}", other),
            }
        }
    }

    #[test]
    fn test_input_mode_swallows_plain_chars() {
        let handler = EventHandler::new();
        assert!(matches!(
            handler.handle_key_event(key(KeyCode::Char('q')), true),
            Some(PanelAction::InputChar('q'))
        ));
        assert!(matches!(
            handler.handle_key_event(key(KeyCode::Enter), true),
            Some(PanelAction::SubmitCapture)
        ));
    }

    #[test]
    fn test_ctrl_q_quits_even_in_input_mode() {
        let handler = EventHandler::new();
        let event = KeyEvent {
            code: KeyCode::Char('q'),
            modifiers: KeyModifiers::CONTROL,
            kind: KeyEventKind::Press,
            state: KeyEventState::NONE,
        };
        assert!(matches!(
            handler.handle_key_event(event, true),
            Some(PanelAction::Quit)
        ));
    }
}
