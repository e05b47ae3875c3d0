// SNIFFR panel TUI
// Four-page panel fed by the pending-content slot, talking to the
// classification service through the analyzer.

pub mod events;
pub mod layout;
pub mod render;
pub mod state;

use std::io;
use std::time::Duration;

use anyhow::{Context, Result};
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tracing::{error, info, warn};

use crate::analyze::Analyzer;
use crate::config::SniffrConfig;
use crate::content::{ContentKind, SelectedContent};
use crate::coordinator::{Coordinator, PendingSlot};
use crate::relay::{PageEvent, SelectionRelay};

use events::{EventHandler, PanelAction};
use state::{PanelPage, PanelState};

/// Everything the panel owns while it is open. Dropped wholesale on close;
/// only the slot file outlives it.
pub struct PanelApp {
    pub state: PanelState,
    pub relay: SelectionRelay,
    pub coordinator: Coordinator,
    pub analyzer: Analyzer,
    pub input_buffer: String,
    pub capture_kind: ContentKind,
    pub max_keywords: usize,
}

impl PanelApp {
    pub fn new(config: &SniffrConfig) -> Result<Self> {
        let analyzer = Analyzer::new(&config.api).context("Failed to build analyzer")?;
        let coordinator = Coordinator::new(PendingSlot::new(&config.storage.slot_path));

        Ok(Self {
            state: PanelState::new(),
            relay: SelectionRelay::new(),
            coordinator,
            analyzer,
            input_buffer: String::new(),
            capture_kind: ContentKind::Text,
            max_keywords: config.ui.max_keywords,
        })
    }

    fn capture_input_active(&self) -> bool {
        self.state.is_visible(PanelPage::Select)
    }

    /// Entering the Select page doubles as the activation signal: the relay
    /// arms and stays armed until it captures once.
    fn enter_select(&mut self) {
        self.relay.activate();
        self.state.selection_mode = true;
        self.state.status_message = "✂️ Selection armed — first capture wins".to_string();
        self.state.navigate(PanelPage::Select);
    }

    fn toggle_capture_kind(&mut self) {
        self.capture_kind = match self.capture_kind {
            ContentKind::Text => ContentKind::Image,
            ContentKind::Image => ContentKind::Text,
        };
    }

    /// Run the typed buffer through the relay. A blank buffer leaves the
    /// relay armed; a real capture disarms it and lands in the slot, where
    /// the next tick picks it up.
    fn submit_capture(&mut self) {
        let event = match self.capture_kind {
            ContentKind::Text => PageEvent::TextSelected(self.input_buffer.clone()),
            ContentKind::Image => PageEvent::ImageClicked(self.input_buffer.clone()),
        };

        match self.relay.observe(event) {
            Some(content) => {
                self.input_buffer.clear();
                if let Err(e) = self.coordinator.report(&content) {
                    error!("Failed to store captured content: {}", e);
                    self.state.status_message = e.user_message();
                }
            }
            None => {
                self.state.status_message = "🐶 Nothing to capture yet".to_string();
            }
        }
    }

    /// Drain the pending slot; any content found forces the Preview page.
    fn poll_slot(&mut self) {
        match self.coordinator.slot().take() {
            Ok(Some(content)) => {
                info!(kind = content.kind.label(), "Content arrived from slot");
                self.show_content(content);
            }
            Ok(None) => {}
            Err(e) => {
                warn!("Pending slot unreadable: {}", e);
                self.state.status_message = e.user_message();
                // Drop the bad slot so the warning doesn't repeat every tick
                if let Err(e) = self.coordinator.slot().clear() {
                    error!("Failed to clear slot: {}", e);
                }
            }
        }
    }

    fn show_content(&mut self, content: SelectedContent) {
        self.state.show_content(content);
    }

    async fn run_analysis(&mut self) {
        let request = match self.state.analysis_request() {
            Some(request) => request,
            None => {
                self.state.status_message = "🐶 Capture something to analyze first".to_string();
                return;
            }
        };

        match self.analyzer.analyze(&request).await {
            Ok(report) => self.state.analysis_succeeded(report),
            Err(e) => {
                error!("Analysis failed: {}", e);
                self.state.analysis_failed(&e);
            }
        }
    }
}

/// Open the panel and run until quit.
pub async fn run_tui(config: SniffrConfig) -> Result<()> {
    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen).context("Failed to enter alternate screen")?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend).context("Failed to create terminal")?;

    let result = run_panel(&mut terminal, config).await;

    disable_raw_mode().context("Failed to disable raw mode")?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)
        .context("Failed to leave alternate screen")?;
    terminal.show_cursor().context("Failed to show cursor")?;

    result
}

async fn run_panel(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    config: SniffrConfig,
) -> Result<()> {
    let mut app = PanelApp::new(&config)?;
    let mut event_handler = EventHandler::new();

    // Brief branded loading state before the Intro page
    if config.ui.splash_ms > 0 {
        terminal.draw(render::render_splash)?;
        tokio::time::sleep(Duration::from_millis(config.ui.splash_ms)).await;
    }

    info!("Panel opened");

    loop {
        terminal.draw(|frame| render::render(frame, &app))?;

        let action = event_handler.handle_events(app.capture_input_active())?;
        match action {
            Some(PanelAction::Quit) => {
                app.state.should_quit = true;
            }
            Some(PanelAction::Navigate(id)) => {
                if id == "select" {
                    app.enter_select();
                } else {
                    app.state.navigate_id(&id);
                }
            }
            Some(PanelAction::InputChar(c)) => {
                app.input_buffer.push(c);
            }
            Some(PanelAction::InputBackspace) => {
                app.input_buffer.pop();
            }
            Some(PanelAction::ToggleCaptureKind) => {
                app.toggle_capture_kind();
            }
            Some(PanelAction::SubmitCapture) => {
                app.submit_capture();
                app.poll_slot();
            }
            Some(PanelAction::Analyze) => {
                if app.state.retry_enabled() && app.state.analysis_request().is_some() {
                    app.state.begin_analysis();
                    // Paint the in-progress frame before awaiting the service
                    terminal.draw(|frame| render::render(frame, &app))?;
                    app.run_analysis().await;
                }
            }
            Some(PanelAction::Update) => {
                app.poll_slot();
            }
            None => {}
        }

        if app.state.should_quit {
            break;
        }
    }

    info!("Panel closed");
    Ok(())
}
