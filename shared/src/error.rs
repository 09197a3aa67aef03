use thiserror::Error;

pub const CONNECT_FAILED_MESSAGE: &str =
    "Failed to connect to the server. Please check your connection and try again.";
pub const MODEL_UNAVAILABLE_MESSAGE: &str =
    "The AI model service is currently unavailable. Please try again later.";
pub const GENERIC_FAILURE_MESSAGE: &str =
    "Something went wrong while analysing the image. Please try again.";

// Backend wording for an unreachable upstream model service.
const UPSTREAM_MODEL_MARKER: &str = "communicating with ai model";

#[derive(Debug, Clone, PartialEq, Error)]
pub enum FetchError {
    #[error("transport error: {0}")]
    Transport(String),
    #[error("backend returned {status}: {}", .message.as_deref().unwrap_or("<no error field>"))]
    Backend { status: u16, message: Option<String> },
    #[error("malformed response: {0}")]
    Malformed(String),
    #[error("could not build request: {0}")]
    Request(String),
}

impl FetchError {
    pub fn backend(status: u16, body: &str) -> Self {
        FetchError::Backend {
            status,
            message: crate::model::ErrorBody::extract(body),
        }
    }

    /// Text shown to the user. The `Display` impl is kept for logs.
    pub fn user_message(&self) -> String {
        match self {
            FetchError::Transport(_) => CONNECT_FAILED_MESSAGE.to_string(),
            FetchError::Backend { message: Some(message), .. } => {
                if message.to_lowercase().contains(UPSTREAM_MODEL_MARKER) {
                    MODEL_UNAVAILABLE_MESSAGE.to_string()
                } else {
                    message.clone()
                }
            }
            FetchError::Backend { message: None, .. }
            | FetchError::Malformed(_)
            | FetchError::Request(_) => {
                GENERIC_FAILURE_MESSAGE.to_string()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn upstream_model_failure_is_reworded() {
        let err = FetchError::backend(500, r#"{"error": "Error communicating with AI model"}"#);
        assert_eq!(err.user_message(), MODEL_UNAVAILABLE_MESSAGE);
        assert!(err.to_string().contains("Error communicating with AI model"));
    }

    #[test]
    fn backend_message_is_surfaced() {
        let err = FetchError::backend(400, r#"{"error": "Invalid image format"}"#);
        assert_eq!(err.user_message(), "Invalid image format");
    }

    #[test]
    fn unparseable_body_falls_back_to_generic() {
        let err = FetchError::backend(502, "Bad Gateway");
        assert_eq!(err, FetchError::Backend { status: 502, message: None });
        assert_eq!(err.user_message(), GENERIC_FAILURE_MESSAGE);
        assert_eq!(
            FetchError::Malformed("missing field `processing_time`".into()).user_message(),
            GENERIC_FAILURE_MESSAGE
        );
    }

    #[test]
    fn transport_failure_reports_connectivity() {
        let err = FetchError::Transport("TypeError: Failed to fetch".into());
        assert_eq!(err.user_message(), CONNECT_FAILED_MESSAGE);
    }
}
