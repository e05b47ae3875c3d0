// Page renderers for the SNIFFR panel
// Every view is rebuilt from ChartData on each frame; nothing is kept
// between draws.

use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Tabs},
    Frame,
};

use crate::chart::{ChartData, Keyword, Polarity, Verdict};
use crate::content::ContentKind;

use super::layout::{PanelColors, PanelLayout, ResultLayout};
use super::state::{AnalysisState, PanelPage};
use super::PanelApp;

const KEYWORD_BAR_HALF_WIDTH: usize = 20;
const KEYWORD_WORD_WIDTH: usize = 16;

/// Transient loading pseudo-state shown before the Intro page
pub fn render_splash(frame: &mut Frame) {
    let splash = Paragraph::new("\n\n  /^ ^\\\n ( ·.· )  SNIFFR\n  / - \\   sniffing out fake news...")
        .style(Style::default().fg(PanelColors::ACCENT))
        .alignment(Alignment::Center);
    frame.render_widget(splash, frame.size());
}

pub fn render(frame: &mut Frame, app: &PanelApp) {
    let layout = PanelLayout::new(frame.size());

    render_tabs(frame, app, layout.tabs);

    match app.state.page {
        PanelPage::Intro => render_intro(frame, layout.content),
        PanelPage::Select => render_select(frame, app, layout.content),
        PanelPage::Preview => render_preview(frame, app, layout.content),
        PanelPage::Result => render_result(frame, app, layout.content),
    }

    render_status_bar(frame, app, layout.status_bar);
}

fn render_tabs(frame: &mut Frame, app: &PanelApp, area: Rect) {
    let titles: Vec<Line> = PanelPage::ALL
        .iter()
        .map(|page| Line::from(page.title()))
        .collect();

    let tabs = Tabs::new(titles)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" 🐶 SNIFFR ")
                .border_style(PanelColors::border(false)),
        )
        .style(Style::default().fg(PanelColors::TEXT_MUTED))
        .highlight_style(
            Style::default()
                .fg(PanelColors::ACCENT)
                .add_modifier(Modifier::BOLD),
        )
        .select(app.state.indicator);
    frame.render_widget(tabs, area);
}

fn render_intro(frame: &mut Frame, area: Rect) {
    let text = "\
 /^ ^\\
( ·.· )  SNIFFR checks whether content smells like real or fake news.
 / - \\

Capture text or an image URL, preview it, then send it to the
classification service for a confidence breakdown with word-level
contribution bars.

  [2] Capture content    [3] Preview    [4] Results    [Q] Quit";

    let intro = Paragraph::new(text)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Welcome ")
                .border_style(PanelColors::border(true)),
        )
        .style(Style::default().fg(PanelColors::TEXT_PRIMARY));
    frame.render_widget(intro, area);
}

fn render_select(frame: &mut Frame, app: &PanelApp, area: Rect) {
    let kind_label = match app.capture_kind {
        ContentKind::Text => "text selection",
        ContentKind::Image => "image URL",
    };
    let armed = if app.relay.is_active() {
        "armed — first capture wins"
    } else {
        "idle"
    };

    let lines = vec![
        Line::from(vec![
            Span::styled("Capture mode: ", Style::default().fg(PanelColors::TEXT_MUTED)),
            Span::styled(
                kind_label,
                Style::default()
                    .fg(PanelColors::ACCENT)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                format!("   (relay {})", armed),
                Style::default().fg(PanelColors::TEXT_MUTED),
            ),
        ]),
        Line::from(""),
        Line::from(vec![
            Span::styled("> ", Style::default().fg(PanelColors::ACCENT)),
            Span::styled(
                app.input_buffer.as_str(),
                Style::default().fg(PanelColors::TEXT_PRIMARY),
            ),
            Span::styled("▋", Style::default().fg(PanelColors::ACCENT)),
        ]),
        Line::from(""),
        Line::from(Span::styled(
            "[Enter] Capture   [Tab] Toggle text/image   [Esc] Back   [Ctrl+Q] Quit",
            Style::default().fg(PanelColors::TEXT_MUTED),
        )),
    ];

    let select = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .title(" Select content ")
            .border_style(PanelColors::border(true)),
    );
    frame.render_widget(select, area);
}

fn render_preview(frame: &mut Frame, app: &PanelApp, area: Rect) {
    let lines = match &app.state.preview {
        Some(content) => match content.kind {
            ContentKind::Text => vec![
                Line::from(Span::styled(
                    "Captured text:",
                    Style::default().fg(PanelColors::TEXT_MUTED),
                )),
                Line::from(""),
                Line::from(Span::styled(
                    format!("“{}”", content.payload),
                    Style::default().fg(PanelColors::TEXT_PRIMARY),
                )),
                Line::from(""),
                Line::from(analyze_hint(app)),
            ],
            ContentKind::Image => vec![
                Line::from(Span::styled(
                    "Captured image:",
                    Style::default().fg(PanelColors::TEXT_MUTED),
                )),
                Line::from(""),
                Line::from(Span::styled(
                    format!("🖼️  {}", content.payload),
                    Style::default().fg(PanelColors::TEXT_PRIMARY),
                )),
                Line::from(""),
                Line::from(analyze_hint(app)),
            ],
        },
        None => vec![
            Line::from(Span::styled(
                "Nothing captured yet.",
                Style::default().fg(PanelColors::TEXT_MUTED),
            )),
            Line::from(""),
            Line::from(Span::styled(
                "Press [2] to capture content first.",
                Style::default().fg(PanelColors::TEXT_MUTED),
            )),
        ],
    };

    let preview = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .title(" Preview ")
            .border_style(PanelColors::border(true)),
    );
    frame.render_widget(preview, area);
}

fn analyze_hint(app: &PanelApp) -> Span<'static> {
    if app.state.is_analyzing() {
        Span::styled(
            "Analyzing... (trigger disabled)",
            Style::default().fg(PanelColors::TEXT_MUTED),
        )
    } else {
        Span::styled(
            "[A] Analyze this content",
            Style::default().fg(PanelColors::ACCENT),
        )
    }
}

fn render_result(frame: &mut Frame, app: &PanelApp, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Result ")
        .border_style(PanelColors::border(true));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    match &app.state.analysis {
        AnalysisState::Idle => {
            let placeholder = Paragraph::new("No analysis yet.\n\nPreview some content and press [A].")
                .style(Style::default().fg(PanelColors::TEXT_MUTED));
            frame.render_widget(placeholder, inner);
        }
        AnalysisState::Running => {
            let running = Paragraph::new("🔎 Analyzing...")
                .style(Style::default().fg(PanelColors::ACCENT));
            frame.render_widget(running, inner);
        }
        AnalysisState::Failed(message) => {
            let text = format!("{}\n\n[R] Retry", message);
            let failed = Paragraph::new(text).style(Style::default().fg(PanelColors::STATUS_ERROR));
            frame.render_widget(failed, inner);
        }
        AnalysisState::Done(report) => {
            let layout = ResultLayout::new(inner);
            render_headline(frame, report, layout.headline);
            render_confidence_chart(frame, &report.chart, layout.confidence);
            render_keyword_chart(frame, &report.chart, app.max_keywords, layout.keywords);
        }
    }
}

fn render_headline(frame: &mut Frame, report: &crate::analyze::AnalysisReport, area: Rect) {
    let verdict = report.chart.confidence.verdict();
    let color = match verdict {
        Verdict::RealNews => PanelColors::STATUS_OK,
        Verdict::FakeNews => PanelColors::STATUS_ERROR,
    };

    let headline = Paragraph::new(vec![
        Line::from(vec![
            Span::styled(
                format!("Verdict: {} ", verdict.label()),
                Style::default().fg(color).add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                format!("[{}]", verdict.as_str()),
                Style::default().fg(PanelColors::TEXT_MUTED),
            ),
        ]),
        Line::from(Span::styled(
            format!(
                "Analyzed at {}   [R] Retry",
                report.analyzed_at.format("%Y-%m-%d %H:%M:%S")
            ),
            Style::default().fg(PanelColors::TEXT_MUTED),
        )),
    ]);
    frame.render_widget(headline, area);
}

fn render_confidence_chart(frame: &mut Frame, chart: &ChartData, area: Rect) {
    let width = area.width.saturating_sub(22) as usize;
    let lines = vec![
        confidence_line("Fake News", chart.confidence.fake, PanelColors::FAKE_RED, width),
        confidence_line(
            "Neutral",
            chart.confidence.neutral,
            PanelColors::NEUTRAL_GRAY,
            width,
        ),
        confidence_line(
            "Real News",
            chart.confidence.real,
            PanelColors::REAL_GREEN,
            width,
        ),
    ];

    let confidence = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::TOP)
            .title(" Confidence ")
            .border_style(PanelColors::border(false)),
    );
    frame.render_widget(confidence, area);
}

fn confidence_line(label: &str, percent: u32, color: ratatui::style::Color, width: usize) -> Line<'static> {
    let filled = (percent as usize * width) / 100;
    Line::from(vec![
        Span::styled(
            format!("{:>10} {:>3}% ", label, percent),
            Style::default().fg(PanelColors::TEXT_PRIMARY),
        ),
        Span::styled("█".repeat(filled.min(width)), Style::default().fg(color)),
    ])
}

fn render_keyword_chart(frame: &mut Frame, chart: &ChartData, max_keywords: usize, area: Rect) {
    let ceiling = chart.axis_ceiling();

    let mut lines = Vec::new();
    for keyword in chart.keywords.iter().take(max_keywords) {
        lines.push(keyword_line(keyword, ceiling));
    }
    if chart.keywords.is_empty() {
        lines.push(Line::from(Span::styled(
            "No keyword contributions returned.",
            Style::default().fg(PanelColors::TEXT_MUTED),
        )));
    }

    let keywords = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::TOP)
            .title(format!(" Keyword contributions (axis ±{}) ", ceiling))
            .border_style(PanelColors::border(false)),
    );
    frame.render_widget(keywords, area);
}

/// One horizontal bar on the [-ceiling, +ceiling] axis: negative scores grow
/// left from the center line, positive to the right.
fn keyword_line(keyword: &Keyword, ceiling: f64) -> Line<'static> {
    let half = KEYWORD_BAR_HALF_WIDTH;
    let filled = ((keyword.score.abs() / ceiling) * half as f64).round() as usize;
    let filled = filled.min(half);

    let color = match keyword.polarity() {
        Polarity::Positive => PanelColors::REAL_GREEN,
        Polarity::Negative => PanelColors::FAKE_RED,
        Polarity::Neutral => PanelColors::NEUTRAL_GRAY,
    };

    let mut word = keyword.word.clone();
    if word.chars().count() > KEYWORD_WORD_WIDTH {
        word = word.chars().take(KEYWORD_WORD_WIDTH - 1).collect::<String>() + "…";
    }

    let (left, right) = if keyword.score < 0.0 {
        (
            format!("{}{}", " ".repeat(half - filled), "█".repeat(filled)),
            " ".repeat(half),
        )
    } else {
        (" ".repeat(half), "█".repeat(filled))
    };

    Line::from(vec![
        Span::styled(
            format!("{:<width$} ", word, width = KEYWORD_WORD_WIDTH),
            Style::default().fg(PanelColors::TEXT_PRIMARY),
        ),
        Span::styled(left, Style::default().fg(color)),
        Span::styled("│", Style::default().fg(PanelColors::BORDER)),
        Span::styled(right, Style::default().fg(color)),
        Span::styled(
            format!(" {}", keyword.bar_label()),
            Style::default().fg(PanelColors::TEXT_MUTED),
        ),
    ])
}

fn render_status_bar(frame: &mut Frame, app: &PanelApp, area: Rect) {
    let status = Paragraph::new(app.state.status_message.as_str())
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Status ")
                .border_style(PanelColors::border(false)),
        )
        .style(Style::default().fg(PanelColors::STATUS_OK));
    frame.render_widget(status, area);
}
