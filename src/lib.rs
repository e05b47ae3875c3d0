// SNIFFR - Real/Fake news sniffer
// Capture text or images, send them to the classification service, and
// read the verdict with per-word contribution charts in a terminal panel.

pub mod analyze;
pub mod chart;
pub mod cli;
pub mod config;
pub mod content;
pub mod coordinator;
pub mod error;
pub mod logging;
pub mod relay;

#[cfg(feature = "tui")]
pub mod tui;

pub use analyze::{AnalysisReport, Analyzer};
pub use chart::{ChartData, ConfidenceSplit, Keyword, Polarity, Verdict};
pub use config::SniffrConfig;
pub use content::{AnalysisRequest, ContentKind, SelectedContent};
pub use coordinator::{Coordinator, PendingSlot};
pub use error::{SniffrError, SniffrResult};
pub use relay::{PageEvent, SelectionRelay};
