//! Catalog client error types.

use std::time::Duration;

use thiserror::Error;

/// Result type for catalog operations.
pub type CatalogResult<T> = Result<T, CatalogError>;

/// Errors that can occur when talking to the catalog service.
///
/// Produced by the client layer only. Callers above the client receive these
/// unchanged.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("not found: {0}")]
    NotFound(String),

    #[error("access denied: {0}")]
    AccessDenied(String),

    #[error("validation failed: {0}")]
    Validation(String),

    #[error("conflict: {0}")]
    Conflict(String),

    #[error("throttled: {message}")]
    Throttled {
        message: String,
        retry_after_secs: Option<u64>,
    },

    #[error("service error {status}: {message}")]
    Service {
        status: u16,
        code: Option<String>,
        message: String,
    },

    #[error("invalid configuration: {0}")]
    Config(String),
}

impl CatalogError {
    /// Classifies a non-success response.
    ///
    /// `error_type` is the raw `x-amzn-ErrorType` header value, if any; only
    /// the part before the first `:` is kept as the error code.
    pub fn from_response(
        status: u16,
        error_type: Option<&str>,
        retry_after_secs: Option<u64>,
        body: &str,
    ) -> Self {
        let message = extract_message(body).unwrap_or_else(|| {
            let trimmed = body.trim();
            if trimmed.is_empty() {
                format!("request failed with status {status}")
            } else {
                trimmed.to_string()
            }
        });
        let code = error_type
            .map(|raw| raw.split(':').next().unwrap_or(raw).trim().to_string())
            .filter(|code| !code.is_empty());

        match status {
            400 | 422 => CatalogError::Validation(message),
            401 | 403 => CatalogError::AccessDenied(message),
            404 => CatalogError::NotFound(message),
            409 => CatalogError::Conflict(message),
            429 => CatalogError::Throttled { message, retry_after_secs },
            _ => CatalogError::Service { status, code, message },
        }
    }

    /// HTTP status behind this error, when there was a response.
    pub fn status(&self) -> Option<u16> {
        match self {
            CatalogError::Http(e) => e.status().map(|s| s.as_u16()),
            CatalogError::NotFound(_) => Some(404),
            CatalogError::AccessDenied(_) => Some(403),
            CatalogError::Validation(_) => Some(400),
            CatalogError::Conflict(_) => Some(409),
            CatalogError::Throttled { .. } => Some(429),
            CatalogError::Service { status, .. } => Some(*status),
            CatalogError::Serialization(_) | CatalogError::Config(_) => None,
        }
    }

    /// Returns true for failures a caller may reasonably retry: throttling,
    /// server-side errors and transport timeouts or connection failures.
    pub fn is_retryable(&self) -> bool {
        match self {
            CatalogError::Throttled { .. } => true,
            CatalogError::Service { status, .. } => *status >= 500,
            CatalogError::Http(e) => e.is_timeout() || e.is_connect(),
            _ => false,
        }
    }

    /// Returns the retry-after duration if the service sent one.
    pub fn retry_after(&self) -> Option<Duration> {
        match self {
            CatalogError::Throttled { retry_after_secs: Some(secs), .. } => {
                Some(Duration::from_secs(*secs))
            }
            _ => None,
        }
    }
}

fn extract_message(body: &str) -> Option<String> {
    if body.trim().is_empty() {
        return None;
    }

    let parsed = serde_json::from_str::<serde_json::Value>(body).ok()?;
    ["message", "Message"]
        .iter()
        .find_map(|key| parsed.get(key).and_then(|m| m.as_str()))
        .map(ToOwned::to_owned)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_status_codes() {
        assert!(matches!(
            CatalogError::from_response(400, None, None, ""),
            CatalogError::Validation(_)
        ));
        assert!(matches!(
            CatalogError::from_response(403, None, None, ""),
            CatalogError::AccessDenied(_)
        ));
        assert!(matches!(
            CatalogError::from_response(404, None, None, ""),
            CatalogError::NotFound(_)
        ));
        assert!(matches!(
            CatalogError::from_response(409, None, None, ""),
            CatalogError::Conflict(_)
        ));
        assert!(matches!(
            CatalogError::from_response(429, None, Some(3), ""),
            CatalogError::Throttled { retry_after_secs: Some(3), .. }
        ));
        assert!(matches!(
            CatalogError::from_response(503, None, None, ""),
            CatalogError::Service { status: 503, .. }
        ));
    }

    #[test]
    fn prefers_json_message() {
        let body = r#"{"message":"Glossary not found"}"#;
        let err = CatalogError::from_response(404, None, None, body);
        assert_eq!(err.to_string(), "not found: Glossary not found");

        let err = CatalogError::from_response(400, None, None, r#"{"Message":"bad name"}"#);
        assert_eq!(err.to_string(), "validation failed: bad name");
    }

    #[test]
    fn falls_back_to_raw_body_then_status() {
        let err = CatalogError::from_response(502, None, None, "  upstream gone  ");
        assert_eq!(err.to_string(), "service error 502: upstream gone");

        let err = CatalogError::from_response(500, None, None, "");
        assert_eq!(err.to_string(), "service error 500: request failed with status 500");
    }

    #[test]
    fn keeps_error_code_prefix() {
        let err = CatalogError::from_response(
            500,
            Some("InternalServerException:http://internal.amazon.com/coral/"),
            None,
            "{}",
        );
        match err {
            CatalogError::Service { code, .. } => {
                assert_eq!(code.as_deref(), Some("InternalServerException"))
            }
            other => panic!("unexpected error variant: {other}"),
        }
    }

    #[test]
    fn retryable_classification() {
        assert!(CatalogError::from_response(429, None, None, "").is_retryable());
        assert!(CatalogError::from_response(500, None, None, "").is_retryable());
        assert!(!CatalogError::from_response(400, None, None, "").is_retryable());
        assert!(!CatalogError::from_response(404, None, None, "").is_retryable());
        assert!(!CatalogError::Config("x".into()).is_retryable());
    }

    #[test]
    fn retry_after_only_for_throttled() {
        let err = CatalogError::from_response(429, None, Some(7), "");
        assert_eq!(err.retry_after(), Some(Duration::from_secs(7)));
        assert_eq!(CatalogError::from_response(500, None, None, "").retry_after(), None);
    }
}
