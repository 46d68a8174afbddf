//! Error types for Orbitdeck query operations

use thiserror::Error;

/// Main error type for document-query operations
#[derive(Error, Debug)]
pub enum ApiError {
    /// The query matched no documents
    #[error("document not found")]
    NotFound,

    /// The server answered with a non-success HTTP status
    #[error("query failed with status {status}: {text}")]
    Status { status: u16, text: String },

    /// The request never produced a usable response (connection,
    /// DNS, or body decode failure)
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),
}

impl ApiError {
    /// Normalize any failure into the `{code, text}` shape the error
    /// surface displays. `NotFound` is synthesized as a 404; transport
    /// failures without an HTTP status report code 0.
    pub fn notice(&self) -> ErrorNotice {
        match self {
            ApiError::NotFound => ErrorNotice {
                code: 404,
                text: "Not Found".to_string(),
            },
            ApiError::Status { status, text } => ErrorNotice {
                code: *status,
                text: text.clone(),
            },
            ApiError::Transport(err) => match err.status() {
                Some(status) => ErrorNotice {
                    code: status.as_u16(),
                    text: status
                        .canonical_reason()
                        .unwrap_or("Unknown Error")
                        .to_string(),
                },
                None => ErrorNotice {
                    code: 0,
                    text: "Network Error".to_string(),
                },
            },
        }
    }
}

/// Result type alias using ApiError
pub type ApiResult<T> = Result<T, ApiError>;

/// The normalized failure payload handed to the error surface.
///
/// Every failure kind funnels into this one shape; the error page
/// renders it without knowing what went wrong.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorNotice {
    /// HTTP status code, 404 for a missing document, 0 when the
    /// transport produced no response at all
    pub code: u16,
    /// Human-readable status text
    pub text: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_synthesizes_404() {
        let notice = ApiError::NotFound.notice();
        assert_eq!(notice.code, 404);
        assert_eq!(notice.text, "Not Found");
    }

    #[test]
    fn status_error_forwards_code_and_text() {
        let err = ApiError::Status {
            status: 503,
            text: "Service Unavailable".to_string(),
        };
        let notice = err.notice();
        assert_eq!(notice.code, 503);
        assert_eq!(notice.text, "Service Unavailable");
    }

    #[test]
    fn error_display() {
        let err = ApiError::Status {
            status: 500,
            text: "Internal Server Error".to_string(),
        };
        assert_eq!(
            format!("{}", err),
            "query failed with status 500: Internal Server Error"
        );
        assert_eq!(format!("{}", ApiError::NotFound), "document not found");
    }
}
