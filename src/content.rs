use serde::{Deserialize, Serialize};

use crate::error::{SniffrError, SniffrResult};

/// What kind of page content was captured
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentKind {
    Text,
    Image,
}

impl ContentKind {
    pub fn label(&self) -> &'static str {
        match self {
            ContentKind::Text => "text",
            ContentKind::Image => "image",
        }
    }
}

/// A single captured selection: highlighted text or a clicked image URL.
/// Immutable once created; consumed after being shown once.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SelectedContent {
    pub kind: ContentKind,
    pub payload: String,
}

impl SelectedContent {
    pub fn text(payload: impl Into<String>) -> Self {
        Self {
            kind: ContentKind::Text,
            payload: payload.into(),
        }
    }

    pub fn image(url: impl Into<String>) -> Self {
        Self {
            kind: ContentKind::Image,
            payload: url.into(),
        }
    }
}

/// Outbound request body for the classification service:
/// `{ "kind": "text"|"image", "value": "..." }`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisRequest {
    pub kind: ContentKind,
    pub value: String,
}

impl AnalysisRequest {
    /// Reject empty content before any network call is made
    pub fn validate(&self) -> SniffrResult<()> {
        if self.value.trim().is_empty() {
            return Err(SniffrError::empty_content(format!(
                "{} payload is empty",
                self.kind.label()
            )));
        }
        Ok(())
    }
}

impl From<&SelectedContent> for AnalysisRequest {
    fn from(content: &SelectedContent) -> Self {
        Self {
            kind: content.kind,
            value: content.payload.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_wire_format() {
        let request = AnalysisRequest {
            kind: ContentKind::Text,
            value: "hello world".to_string(),
        };
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["kind"], "text");
        assert_eq!(json["value"], "hello world");

        let image = AnalysisRequest {
            kind: ContentKind::Image,
            value: "https://example.com/a.png".to_string(),
        };
        assert_eq!(serde_json::to_value(&image).unwrap()["kind"], "image");
    }

    #[test]
    fn test_validation_rejects_empty_value() {
        let request = AnalysisRequest {
            kind: ContentKind::Text,
            value: "   ".to_string(),
        };
        assert!(matches!(
            request.validate(),
            Err(SniffrError::EmptyContent { .. })
        ));

        let ok = AnalysisRequest {
            kind: ContentKind::Text,
            value: "real content".to_string(),
        };
        assert!(ok.validate().is_ok());
    }

    #[test]
    fn test_request_from_selected_content() {
        let content = SelectedContent::image("https://example.com/pic.jpg");
        let request = AnalysisRequest::from(&content);
        assert_eq!(request.kind, ContentKind::Image);
        assert_eq!(request.value, "https://example.com/pic.jpg");
    }
}
