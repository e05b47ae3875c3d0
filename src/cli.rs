use std::path::PathBuf;

use anyhow::Result;
use tracing::info;

use crate::analyze::Analyzer;
use crate::chart::Polarity;
use crate::config::SniffrConfig;
use crate::content::{AnalysisRequest, ContentKind};
use crate::coordinator::{Coordinator, PendingSlot};

/// One-shot analysis without opening the panel
pub async fn analyze_command(
    text: Option<String>,
    image: Option<String>,
    config: &SniffrConfig,
) -> Result<()> {
    let request = match (text, image) {
        (Some(text), None) => AnalysisRequest {
            kind: ContentKind::Text,
            value: text,
        },
        (None, Some(url)) => AnalysisRequest {
            kind: ContentKind::Image,
            value: url,
        },
        (Some(_), Some(_)) => {
            return Err(anyhow::anyhow!("Pass either --text or --image, not both"));
        }
        (None, None) => {
            return Err(anyhow::anyhow!("Pass --text or --image to analyze"));
        }
    };

    info!("🔎 Analyzing {} content", request.kind.label());

    let analyzer = Analyzer::new(&config.api)?;
    let report = analyzer.analyze(&request).await?;

    let verdict = report.chart.confidence.verdict();

    // Print summary with properly spaced mascot
    println!("   /^ ^\\");
    println!("  ( ·.· )  🎉 Analysis Complete!");
    println!("   / - \\   Verdict: {}", verdict.label());
    println!();
    println!("   Confidence:");
    println!("     Real News: {:>3}%", report.chart.confidence.real);
    println!("     Fake News: {:>3}%", report.chart.confidence.fake);
    println!("     Neutral:   {:>3}%", report.chart.confidence.neutral);

    if !report.chart.keywords.is_empty() {
        println!();
        println!(
            "   Keyword contributions (axis ±{}):",
            report.chart.axis_ceiling()
        );
        for keyword in report.chart.keywords.iter().take(config.ui.max_keywords) {
            let marker = match keyword.polarity() {
                Polarity::Positive => "🟢",
                Polarity::Negative => "🔴",
                Polarity::Neutral => "⚪",
            };
            println!("     {} {:<16} {}", marker, keyword.word, keyword.bar_label());
        }
    }

    Ok(())
}

/// Store highlighted text in the pending slot for the next panel session
pub fn capture_text_command(text: String, config: &SniffrConfig) -> Result<()> {
    let coordinator = Coordinator::new(PendingSlot::new(&config.storage.slot_path));
    coordinator.capture_text(text)?;

    println!("📌 Text captured!");
    println!("   Open the panel (run `sniffr`) to preview and analyze it.");
    Ok(())
}

/// Store an image URL in the pending slot for the next panel session
pub fn capture_image_command(url: String, config: &SniffrConfig) -> Result<()> {
    let coordinator = Coordinator::new(PendingSlot::new(&config.storage.slot_path));
    coordinator.capture_image(url)?;

    println!("📌 Image captured!");
    println!("   Open the panel (run `sniffr`) to preview and analyze it.");
    Ok(())
}

/// Show pending-slot and endpoint status
pub fn status_command(config: &SniffrConfig) -> Result<()> {
    let slot = PendingSlot::new(&config.storage.slot_path);

    println!("🐶 SNIFFR Status");
    println!("================");
    println!("Endpoint: {}", config.api.endpoint);
    println!("Timeout:  {}s", config.api.timeout_seconds);
    println!("Slot:     {}", slot.path().display());

    match slot.peek()? {
        Some(content) => {
            println!();
            println!("Pending {} content:", content.kind.label());
            println!("  {}", content.payload);
        }
        None => {
            println!();
            println!("Nothing pending.");
        }
    }

    Ok(())
}

/// Write a default configuration file
pub fn config_init_command(path: Option<PathBuf>, config: &SniffrConfig) -> Result<()> {
    let path = path.unwrap_or_else(|| PathBuf::from("sniffr.toml"));
    config.save_to_file(&path)?;

    println!("🎉 Configuration written to {}", path.display());
    println!("   Edit it and pass --config {} to use it.", path.display());
    Ok(())
}
