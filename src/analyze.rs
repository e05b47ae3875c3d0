use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use chrono::{DateTime, Local};
use serde::Deserialize;
use tracing::{info, warn};

use crate::chart::ChartData;
use crate::config::ApiConfig;
use crate::content::AnalysisRequest;
use crate::error::{SniffrError, SniffrResult};

const REAL_LABEL: &str = "Real News";
const FAKE_LABEL: &str = "Fake News";

/// A confidence or weight value from the service. The backend formats these
/// as decimal strings ("0.73", "-0.0421") but plain numbers are accepted too.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum FlexValue {
    Number(f64),
    Text(String),
}

impl FlexValue {
    fn as_f64(&self) -> SniffrResult<f64> {
        match self {
            FlexValue::Number(n) => Ok(*n),
            FlexValue::Text(s) => s
                .trim()
                .parse::<f64>()
                .map_err(|_| SniffrError::malformed(format!("non-numeric value {:?}", s))),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawKeyword {
    pub word: String,
    pub weight: FlexValue,
}

/// Raw response contract of the classification service; not owned here.
/// `confidence` and `words` are required, `verdict` is informational.
#[derive(Debug, Clone, Deserialize)]
pub struct AnalysisResponse {
    #[serde(default)]
    pub verdict: Option<String>,
    #[serde(default)]
    pub confidence: Option<HashMap<String, FlexValue>>,
    #[serde(default)]
    pub words: Option<Vec<RawKeyword>>,
}

/// One finished analysis, ready for the Result page or CLI summary
#[derive(Debug, Clone)]
pub struct AnalysisReport {
    pub chart: ChartData,
    pub service_verdict: Option<String>,
    pub analyzed_at: DateTime<Local>,
}

/// Request/normalize pipeline. Single-flight: overlapping calls are rejected
/// by the pipeline itself, not just by UI disablement.
pub struct Analyzer {
    client: reqwest::Client,
    endpoint: String,
    in_flight: AtomicBool,
}

impl Analyzer {
    pub fn new(config: &ApiConfig) -> SniffrResult<Self> {
        let mut builder = reqwest::Client::builder();
        if config.timeout_seconds > 0 {
            builder = builder.timeout(Duration::from_secs(config.timeout_seconds));
        }
        let client = builder
            .build()
            .map_err(|e| SniffrError::configuration(format!("HTTP client setup failed: {}", e)))?;

        Ok(Self {
            client,
            endpoint: config.endpoint.clone(),
            in_flight: AtomicBool::new(false),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Run one analysis: validate, POST, check, normalize. No retries; a
    /// failed attempt needs a fresh user-triggered call.
    pub async fn analyze(&self, request: &AnalysisRequest) -> SniffrResult<AnalysisReport> {
        if self
            .in_flight
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_err()
        {
            warn!("Rejected overlapping analyze call");
            return Err(SniffrError::AnalysisInFlight);
        }
        let _guard = InFlightGuard(&self.in_flight);

        request.validate()?;

        info!(
            kind = request.kind.label(),
            chars = request.value.len(),
            "🔎 Sending content for analysis"
        );

        let response = self
            .client
            .post(&self.endpoint)
            .json(request)
            .send()
            .await
            .map_err(|source| SniffrError::Network { source })?;

        let status = response.status();
        if !status.is_success() {
            return Err(SniffrError::Server {
                status: status.as_u16(),
            });
        }

        let raw: AnalysisResponse = response
            .json()
            .await
            .map_err(|e| SniffrError::malformed(format!("invalid JSON body: {}", e)))?;

        let report = normalize_response(raw)?;
        info!(
            real = report.chart.confidence.real,
            fake = report.chart.confidence.fake,
            keywords = report.chart.keywords.len(),
            "🔎 Analysis complete"
        );
        Ok(report)
    }
}

struct InFlightGuard<'a>(&'a AtomicBool);

impl Drop for InFlightGuard<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}

/// Turn a raw service response into chart-ready values. Absent `confidence`
/// or `words` fails fast rather than degrading to an empty chart.
pub fn normalize_response(raw: AnalysisResponse) -> SniffrResult<AnalysisReport> {
    let confidence = raw
        .confidence
        .ok_or_else(|| SniffrError::malformed("missing field \"confidence\""))?;
    let words = raw
        .words
        .ok_or_else(|| SniffrError::malformed("missing field \"words\""))?;

    let real = confidence
        .get(REAL_LABEL)
        .ok_or_else(|| SniffrError::malformed(format!("confidence missing {:?}", REAL_LABEL)))?
        .as_f64()?;
    let fake = confidence
        .get(FAKE_LABEL)
        .ok_or_else(|| SniffrError::malformed(format!("confidence missing {:?}", FAKE_LABEL)))?
        .as_f64()?;

    let mut keywords = Vec::with_capacity(words.len());
    for entry in words {
        keywords.push((entry.word, entry.weight.as_f64()?));
    }

    Ok(AnalysisReport {
        chart: ChartData::from_raw(real, fake, keywords),
        service_verdict: raw.verdict,
        analyzed_at: Local::now(),
    })
}
