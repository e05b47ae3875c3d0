use thiserror::Error;

/// Main error type for the SNIFFR application
#[derive(Error, Debug)]
pub enum SniffrError {
    #[error("Nothing to analyze: {message}")]
    EmptyContent { message: String },

    #[error("Analysis already in progress")]
    AnalysisInFlight,

    #[error("Network request failed")]
    Network {
        #[source]
        source: reqwest::Error,
    },

    #[error("Classification service returned HTTP {status}")]
    Server { status: u16 },

    #[error("Malformed service response: {message}")]
    MalformedResponse { message: String },

    #[error("File I/O error: {path}")]
    FileIo {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Configuration error: {message}")]
    Configuration { message: String },

    #[error("General error: {0}")]
    General(#[from] anyhow::Error),
}

impl SniffrError {
    /// Create a validation error for empty content
    pub fn empty_content(message: impl Into<String>) -> Self {
        Self::EmptyContent {
            message: message.into(),
        }
    }

    /// Create a malformed-response error
    pub fn malformed(message: impl Into<String>) -> Self {
        Self::MalformedResponse {
            message: message.into(),
        }
    }

    /// Create a file I/O error
    pub fn file_io(path: impl Into<String>, source: std::io::Error) -> Self {
        Self::FileIo {
            path: path.into(),
            source,
        }
    }

    /// Create a configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Check if error is recoverable (panel stays interactive with retry)
    pub fn is_recoverable(&self) -> bool {
        match self {
            SniffrError::EmptyContent { .. } => true,
            SniffrError::AnalysisInFlight => true,
            SniffrError::Network { .. } => true,
            SniffrError::Server { .. } => true,
            SniffrError::MalformedResponse { .. } => true,
            SniffrError::Configuration { .. } => false,
            _ => true,
        }
    }

    /// Get user-friendly error message for the Result page
    pub fn user_message(&self) -> String {
        match self {
            SniffrError::EmptyContent { .. } => {
                "🐶 Nothing selected yet. Capture some text or an image first.".to_string()
            }
            SniffrError::AnalysisInFlight => {
                "🐶 Hold on, an analysis is already running.".to_string()
            }
            SniffrError::Network { .. } => {
                "📡 Couldn't reach the classification service. Is the backend running?".to_string()
            }
            SniffrError::Server { status } => {
                format!("📡 The classification service failed (HTTP {}). Try again.", status)
            }
            SniffrError::MalformedResponse { .. } => {
                "📡 The service sent back something SNIFFR couldn't read.".to_string()
            }
            SniffrError::FileIo { .. } => {
                "📁 File access error. Check permissions and disk space.".to_string()
            }
            _ => "🐶 Something went wrong. Check the logs for details.".to_string(),
        }
    }
}

/// Result type alias for convenience
pub type SniffrResult<T> = Result<T, SniffrError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pipeline_errors_are_recoverable() {
        assert!(SniffrError::empty_content("empty").is_recoverable());
        assert!(SniffrError::Server { status: 500 }.is_recoverable());
        assert!(SniffrError::malformed("missing confidence").is_recoverable());
        assert!(SniffrError::AnalysisInFlight.is_recoverable());
        assert!(!SniffrError::configuration("bad endpoint").is_recoverable());
    }

    #[test]
    fn test_user_message_mentions_status() {
        let msg = SniffrError::Server { status: 503 }.user_message();
        assert!(msg.contains("503"));
    }
}
