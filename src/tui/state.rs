// Panel state for the SNIFFR TUI
// One page visible at a time; transitions only via explicit navigation,
// content arrival, and analysis completion.

use crate::analyze::AnalysisReport;
use crate::content::{AnalysisRequest, SelectedContent};
use crate::error::SniffrError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelPage {
    Intro,
    Select,
    Preview,
    Result,
}

impl PanelPage {
    pub const ALL: [PanelPage; 4] = [
        PanelPage::Intro,
        PanelPage::Select,
        PanelPage::Preview,
        PanelPage::Result,
    ];

    pub fn id(&self) -> &'static str {
        match self {
            PanelPage::Intro => "intro",
            PanelPage::Select => "select",
            PanelPage::Preview => "preview",
            PanelPage::Result => "result",
        }
    }

    pub fn from_id(id: &str) -> Option<Self> {
        match id {
            "intro" => Some(PanelPage::Intro),
            "select" => Some(PanelPage::Select),
            "preview" => Some(PanelPage::Preview),
            "result" => Some(PanelPage::Result),
            _ => None,
        }
    }

    /// Positional indicator slot, derived purely from page identity
    pub fn indicator_index(&self) -> usize {
        match self {
            PanelPage::Intro => 0,
            PanelPage::Select => 1,
            PanelPage::Preview => 2,
            PanelPage::Result => 3,
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            PanelPage::Intro => "Intro",
            PanelPage::Select => "Select",
            PanelPage::Preview => "Preview",
            PanelPage::Result => "Result",
        }
    }
}

#[derive(Debug, Clone)]
pub enum AnalysisState {
    Idle,
    Running,
    Done(AnalysisReport),
    Failed(String),
}

/// Panel state. Created fresh each time the TUI is opened; nothing here
/// survives a close/reopen other than the externally-owned pending slot.
#[derive(Debug)]
pub struct PanelState {
    pub page: PanelPage,
    pub indicator: usize,
    /// Typed copy of whatever the preview area shows, kept from the moment
    /// it is rendered instead of being re-derived from markup
    pub preview: Option<SelectedContent>,
    pub analysis: AnalysisState,
    /// "Selection active" visual mode on the Select page
    pub selection_mode: bool,
    pub status_message: String,
    pub should_quit: bool,
}

impl PanelState {
    pub fn new() -> Self {
        Self {
            page: PanelPage::Intro,
            indicator: PanelPage::Intro.indicator_index(),
            preview: None,
            analysis: AnalysisState::Idle,
            selection_mode: false,
            status_message: "🐶 SNIFFR ready! Capture something to analyze".to_string(),
            should_quit: false,
        }
    }

    pub fn is_visible(&self, page: PanelPage) -> bool {
        self.page == page
    }

    /// Unconditional navigation: show the target, hide everything else,
    /// update the positional indicator from the target's identity.
    pub fn navigate(&mut self, page: PanelPage) {
        self.page = page;
        self.indicator = page.indicator_index();
    }

    /// Navigation by page id; an unrecognized id changes nothing,
    /// indicator included.
    pub fn navigate_id(&mut self, id: &str) {
        if let Some(page) = PanelPage::from_id(id) {
            self.navigate(page);
        }
    }

    /// New content arrived from the coordinator: render it, drop selection
    /// mode, and force-switch to Preview regardless of the current page.
    pub fn show_content(&mut self, content: SelectedContent) {
        self.selection_mode = false;
        self.status_message = format!("📌 Captured {} content", content.kind.label());
        self.preview = Some(content);
        self.navigate(PanelPage::Preview);
    }

    /// Build the outbound request from whatever the preview shows
    pub fn analysis_request(&self) -> Option<AnalysisRequest> {
        self.preview.as_ref().map(AnalysisRequest::from)
    }

    pub fn is_analyzing(&self) -> bool {
        matches!(self.analysis, AnalysisState::Running)
    }

    /// Retry affordance: enabled whenever no call is in flight
    pub fn retry_enabled(&self) -> bool {
        !self.is_analyzing()
    }

    pub fn begin_analysis(&mut self) {
        self.analysis = AnalysisState::Running;
        self.status_message = "🔎 Analyzing...".to_string();
        self.navigate(PanelPage::Result);
    }

    pub fn analysis_succeeded(&mut self, report: AnalysisReport) {
        self.status_message = format!(
            "✅ Analysis complete: {}",
            report.chart.confidence.verdict().label()
        );
        self.analysis = AnalysisState::Done(report);
        self.navigate(PanelPage::Result);
    }

    pub fn analysis_failed(&mut self, error: &SniffrError) {
        self.status_message = "❌ Analysis failed".to_string();
        self.analysis = AnalysisState::Failed(error.user_message());
        self.navigate(PanelPage::Result);
    }
}

impl Default for PanelState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analyze::normalize_response;

    fn sample_report() -> AnalysisReport {
        let raw = serde_json::from_str(
            r#"{
                "confidence": {"Real News": 0.734, "Fake News": 0.266},
                "words": [{"word": "reuters", "weight": 1.2}]
            }"#,
        )
        .unwrap();
        normalize_response(raw).unwrap()
    }

    #[test]
    fn test_navigation_shows_exactly_one_page() {
        let mut state = PanelState::new();
        for target in PanelPage::ALL {
            state.navigate(target);
            for page in PanelPage::ALL {
                assert_eq!(state.is_visible(page), page == target);
            }
            assert_eq!(state.indicator, target.indicator_index());
        }
    }

    #[test]
    fn test_unknown_page_id_is_a_noop() {
        let mut state = PanelState::new();
        state.navigate(PanelPage::Select);
        state.navigate_id("settings");
        assert_eq!(state.page, PanelPage::Select);
        assert_eq!(state.indicator, 1);
    }

    #[test]
    fn test_indicator_positions() {
        assert_eq!(PanelPage::Intro.indicator_index(), 0);
        assert_eq!(PanelPage::Select.indicator_index(), 1);
        assert_eq!(PanelPage::Preview.indicator_index(), 2);
        assert_eq!(PanelPage::Result.indicator_index(), 3);
    }

    #[test]
    fn test_content_arrival_forces_preview_from_any_page() {
        for start in PanelPage::ALL {
            let mut state = PanelState::new();
            state.navigate(start);
            state.selection_mode = true;
            state.show_content(SelectedContent::text("hello world"));
            assert_eq!(state.page, PanelPage::Preview);
            assert!(!state.selection_mode);
            assert_eq!(state.preview.as_ref().unwrap().payload, "hello world");
        }
    }

    #[test]
    fn test_success_lands_on_result_with_retry_enabled() {
        let mut state = PanelState::new();
        state.show_content(SelectedContent::text("hello world"));
        state.begin_analysis();
        assert!(!state.retry_enabled());

        state.analysis_succeeded(sample_report());
        assert_eq!(state.page, PanelPage::Result);
        assert!(state.retry_enabled());
        assert!(matches!(state.analysis, AnalysisState::Done(_)));
    }

    #[test]
    fn test_failure_lands_on_result_with_message_and_retry() {
        let mut state = PanelState::new();
        state.show_content(SelectedContent::text("hello world"));
        state.begin_analysis();
        state.analysis_failed(&SniffrError::Server { status: 500 });

        assert_eq!(state.page, PanelPage::Result);
        assert!(state.retry_enabled());
        match &state.analysis {
            AnalysisState::Failed(message) => assert!(message.contains("500")),
            other => panic!("expected failure state, got {:?}", other),
        }
    }

    #[test]
    fn test_request_derived_from_preview() {
        let mut state = PanelState::new();
        assert!(state.analysis_request().is_none());
        state.show_content(SelectedContent::image("https://example.com/a.png"));
        let request = state.analysis_request().unwrap();
        assert_eq!(request.value, "https://example.com/a.png");
    }
}
