use serde::{Deserialize, Serialize};

/// Scores inside this band around zero count as neutral; absorbs
/// floating-point noise from the tanh normalization.
pub const NEUTRAL_BAND: f64 = 1e-6;

/// Minimum visible axis range when every score is exactly zero
pub const MIN_AXIS_RANGE: f64 = 0.01;

/// Overall call on a piece of content, derived from the rounded
/// confidence percentages so it always matches what is displayed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Verdict {
    RealNews,
    FakeNews,
}

impl Verdict {
    pub fn as_str(&self) -> &'static str {
        match self {
            Verdict::RealNews => "real-news",
            Verdict::FakeNews => "fake-news",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Verdict::RealNews => "Real News",
            Verdict::FakeNews => "Fake News",
        }
    }
}

/// Three-way confidence split in whole percentages. `real` and `fake` are
/// rounded independently and need not sum to 100; `neutral` is always 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfidenceSplit {
    pub real: u32,
    pub fake: u32,
    pub neutral: u32,
}

impl ConfidenceSplit {
    pub fn from_raw(real: f64, fake: f64) -> Self {
        Self {
            real: (real * 100.0).round().max(0.0) as u32,
            fake: (fake * 100.0).round().max(0.0) as u32,
            neutral: 0,
        }
    }

    /// Compare the already-rounded percentages; a tie favors real
    pub fn verdict(&self) -> Verdict {
        if self.real >= self.fake {
            Verdict::RealNews
        } else {
            Verdict::FakeNews
        }
    }
}

/// Color class for a keyword bar
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Polarity {
    Positive,
    Negative,
    Neutral,
}

impl Polarity {
    pub fn classify(score: f64) -> Self {
        if score > NEUTRAL_BAND {
            Polarity::Positive
        } else if score < -NEUTRAL_BAND {
            Polarity::Negative
        } else {
            Polarity::Neutral
        }
    }
}

/// One keyword contribution: `score` is tanh(weight), bounded in (-1, 1);
/// `weight` is the raw pre-normalization value from the service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Keyword {
    pub word: String,
    pub score: f64,
    pub weight: f64,
}

impl Keyword {
    pub fn new(word: impl Into<String>, weight: f64) -> Self {
        Self {
            word: word.into(),
            score: weight.tanh(),
            weight,
        }
    }

    pub fn polarity(&self) -> Polarity {
        Polarity::classify(self.score)
    }

    /// Label text: normalized percentage (2 decimals) plus raw weight (4 decimals)
    pub fn bar_label(&self) -> String {
        format!("{:.2}% ({:.4})", self.score * 100.0, self.weight)
    }
}

/// Normalized, render-ready representation of one analysis result.
/// Rebuilt from scratch for every response; never updated in place.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartData {
    pub confidence: ConfidenceSplit,
    pub keywords: Vec<Keyword>,
}

impl ChartData {
    pub fn from_raw(real: f64, fake: f64, words: Vec<(String, f64)>) -> Self {
        Self {
            confidence: ConfidenceSplit::from_raw(real, fake),
            keywords: words
                .into_iter()
                .map(|(word, weight)| Keyword::new(word, weight))
                .collect(),
        }
    }

    pub fn max_abs_score(&self) -> f64 {
        self.keywords
            .iter()
            .map(|k| k.score.abs())
            .fold(0.0, f64::max)
    }

    /// Axis ceiling covering the largest absolute score
    pub fn axis_ceiling(&self) -> f64 {
        axis_ceiling(self.max_abs_score())
    }
}

/// Pick the keyword-axis ceiling: a fixed 1.0 once any score clears 0.1,
/// otherwise the smallest power-of-ten-aligned multiple covering `max_abs`,
/// with a minimum visible range when everything is zero.
pub fn axis_ceiling(max_abs: f64) -> f64 {
    if max_abs > 0.1 {
        return 1.0;
    }
    if max_abs <= 0.0 {
        return MIN_AXIS_RANGE;
    }
    let magnitude = 10f64.powi(max_abs.log10().floor() as i32);
    // Tolerate ratios that land epsilon above an integer (0.05/0.01 = 5.000..01)
    let steps = (max_abs / magnitude - 1e-9).ceil();
    steps * magnitude
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tanh_score_bounds() {
        for weight in [-1000.0, -3.2, -0.5, 0.5, 3.2, 1000.0] {
            let keyword = Keyword::new("w", weight);
            assert!(keyword.score > -1.0 && keyword.score < 1.0);
        }
        assert_eq!(Keyword::new("zero", 0.0).score, 0.0);
    }

    #[test]
    fn test_polarity_band() {
        assert_eq!(Polarity::classify(2e-6), Polarity::Positive);
        assert_eq!(Polarity::classify(-2e-6), Polarity::Negative);
        assert_eq!(Polarity::classify(0.0), Polarity::Neutral);
        assert_eq!(Polarity::classify(1e-6), Polarity::Neutral);
        assert_eq!(Polarity::classify(-1e-6), Polarity::Neutral);
    }

    #[test]
    fn test_verdict_uses_rounded_values() {
        let fake_heavy = ConfidenceSplit::from_raw(0.40, 0.60);
        assert_eq!(fake_heavy.verdict(), Verdict::FakeNews);

        // Tie favors real
        let tie = ConfidenceSplit::from_raw(0.50, 0.50);
        assert_eq!(tie.verdict(), Verdict::RealNews);

        // 0.495 vs 0.504 both round to 50: still a tie after rounding
        let rounded_tie = ConfidenceSplit::from_raw(0.495, 0.504);
        assert_eq!(rounded_tie.real, 50);
        assert_eq!(rounded_tie.fake, 50);
        assert_eq!(rounded_tie.verdict(), Verdict::RealNews);
    }

    #[test]
    fn test_confidence_rounding() {
        let split = ConfidenceSplit::from_raw(0.734, 0.266);
        assert_eq!(split.real, 73);
        assert_eq!(split.fake, 27);
        assert_eq!(split.neutral, 0);
    }

    #[test]
    fn test_axis_ceiling() {
        assert_eq!(axis_ceiling(0.15), 1.0);
        assert_eq!(axis_ceiling(0.0), 0.01);
        let c = axis_ceiling(0.05);
        assert!((c - 0.05).abs() < 1e-12, "got {}", c);
        let c = axis_ceiling(0.042);
        assert!((c - 0.05).abs() < 1e-12, "got {}", c);
        let c = axis_ceiling(0.003);
        assert!((c - 0.003).abs() < 1e-12, "got {}", c);
    }

    #[test]
    fn test_bar_label_formats_both_values() {
        let keyword = Keyword::new("hoax", 0.1234);
        let label = keyword.bar_label();
        assert!(label.ends_with("(0.1234)"), "label was {}", label);
        assert!(label.contains('%'));
    }

    #[test]
    fn test_chart_data_from_raw() {
        let data = ChartData::from_raw(
            0.734,
            0.266,
            vec![("hoax".to_string(), -0.8), ("reuters".to_string(), 1.2)],
        );
        assert_eq!(data.confidence.real, 73);
        assert_eq!(data.keywords.len(), 2);
        assert_eq!(data.keywords[0].polarity(), Polarity::Negative);
        assert_eq!(data.keywords[1].polarity(), Polarity::Positive);
        assert_eq!(data.axis_ceiling(), 1.0);
    }
}
