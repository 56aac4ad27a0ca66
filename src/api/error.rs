use std::time::Duration;

use thiserror::Error;

use crate::api::request::Payload;

pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Everything a call into this crate can fail with.
#[derive(Error, Debug)]
pub enum Error {
    /// The call was malformed and never left the process.
    #[error(transparent)]
    Argument(#[from] ArgumentError),
    #[error(transparent)]
    Config(#[from] ConfigError),
    /// The remote service rejected the call or could not be reached.
    #[error(transparent)]
    Api(#[from] ApiError),
    #[error("serializing the request for {endpoint} failed: {source:?}")]
    Encode { endpoint: String, source: anyhow::Error },
    #[error("deserializing the response of {endpoint} failed: {source:?}")]
    Decode { endpoint: String, source: anyhow::Error },
}

impl Error {
    /// The classified API error, if this is one.
    pub fn api(&self) -> Option<&ApiError> {
        match self {
            Error::Api(error) => Some(error),
            _ => None,
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ArgumentError {
    #[error("{0} is required")]
    Required(&'static str),
    #[error("{field} must be numeric, found {value:?}")]
    NotNumeric { field: &'static str, value: String },
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Optimizely token is required")]
    MissingToken,
    #[error("Optimizely token cannot be empty")]
    EmptyToken,
    #[error("Optimizely token contains invalid whitespace")]
    MalformedToken,
    #[error("the request timeout must be positive")]
    ZeroTimeout,
}

/// Diagnostics attached to every [`ApiError`].
#[derive(Debug, Clone, PartialEq)]
pub struct ErrorDetails {
    pub endpoint: String,
    pub status: Option<u16>,
    /// The error body as received, if there was one.
    pub response: Option<Payload>,
    /// The timeout that elapsed, for timed out requests.
    pub timeout: Option<Duration>,
}

/// An error response of the API, or a failure to get any response at all.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ApiError {
    #[error("{message}")]
    Authentication { message: String, details: ErrorDetails },
    #[error("{message}")]
    Authorization { message: String, details: ErrorDetails },
    #[error("{message}")]
    NotFound { message: String, details: ErrorDetails },
    #[error("{message}")]
    Validation { message: String, details: ErrorDetails },
    #[error("{message}")]
    RateLimit { message: String, details: ErrorDetails },
    #[error("{message}")]
    Server { status: u16, message: String, details: ErrorDetails },
    #[error("{message}")]
    Network { message: String, details: ErrorDetails },
    #[error("{status} {message}")]
    Other { status: u16, message: String, details: ErrorDetails },
}

const DEFAULT_MESSAGE: &str = "API request failed";

impl ApiError {
    /// Classifies a non-2xx response.
    pub fn from_response(status: u16, response: Payload, endpoint: &str) -> Self {
        let message = error_message(&response);
        let details = ErrorDetails {
            endpoint: endpoint.to_owned(),
            status: Some(status),
            response: Some(response),
            timeout: None,
        };

        match status {
            400 => ApiError::Validation { message, details },
            401 => ApiError::Authentication { message, details },
            403 => ApiError::Authorization { message, details },
            404 => ApiError::NotFound { message, details },
            429 => ApiError::RateLimit { message, details },
            500 | 502 | 503 | 504 => ApiError::Server { status, message, details },
            _ => ApiError::Other { status, message, details },
        }
    }

    pub(crate) fn network(message: String, endpoint: &str, timeout: Option<Duration>) -> Self {
        ApiError::Network {
            message,
            details: ErrorDetails {
                endpoint: endpoint.to_owned(),
                status: None,
                response: None,
                timeout,
            },
        }
    }

    pub fn message(&self) -> &str {
        match self {
            ApiError::Authentication { message, .. }
            | ApiError::Authorization { message, .. }
            | ApiError::NotFound { message, .. }
            | ApiError::Validation { message, .. }
            | ApiError::RateLimit { message, .. }
            | ApiError::Server { message, .. }
            | ApiError::Network { message, .. }
            | ApiError::Other { message, .. } => message,
        }
    }

    pub fn details(&self) -> &ErrorDetails {
        match self {
            ApiError::Authentication { details, .. }
            | ApiError::Authorization { details, .. }
            | ApiError::NotFound { details, .. }
            | ApiError::Validation { details, .. }
            | ApiError::RateLimit { details, .. }
            | ApiError::Server { details, .. }
            | ApiError::Network { details, .. }
            | ApiError::Other { details, .. } => details,
        }
    }

    /// The HTTP status; `None` for network failures.
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Authentication { .. } => Some(401),
            ApiError::Authorization { .. } => Some(403),
            ApiError::NotFound { .. } => Some(404),
            ApiError::Validation { .. } => Some(400),
            ApiError::RateLimit { .. } => Some(429),
            ApiError::Server { status, .. } | ApiError::Other { status, .. } => Some(*status),
            ApiError::Network { .. } => None,
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            ApiError::Authentication { .. } => "AUTHENTICATION_ERROR",
            ApiError::Authorization { .. } => "AUTHORIZATION_ERROR",
            ApiError::NotFound { .. } => "NOT_FOUND",
            ApiError::Validation { .. } => "VALIDATION_ERROR",
            ApiError::RateLimit { .. } => "RATE_LIMIT_ERROR",
            ApiError::Server { .. } => "SERVER_ERROR",
            ApiError::Network { .. } => "NETWORK_ERROR",
            ApiError::Other { .. } => "API_ERROR",
        }
    }
}

fn error_message(response: &Payload) -> String {
    let message = match response {
        Payload::Json(serde_json::Value::String(text)) => Some(text.as_str()),
        Payload::Json(body) => body
            .get("message")
            .and_then(|message| message.as_str())
            .or_else(|| body.get("error").and_then(|error| error.as_str())),
        Payload::Text(text) => Some(text.as_str()),
    };
    match message {
        Some(message) if !message.is_empty() => message.to_owned(),
        _ => DEFAULT_MESSAGE.to_owned(),
    }
}

#[cfg(test)]
mod tests {
    use super::ApiError;
    use crate::api::request::Payload;
    use serde_json::json;

    fn classify(status: u16) -> ApiError {
        ApiError::from_response(status, Payload::Json(json!({ "message": "nope" })), "/projects")
    }

    #[test]
    fn known_statuses_map_to_named_variants() {
        let cases = [
            (400, "VALIDATION_ERROR"),
            (401, "AUTHENTICATION_ERROR"),
            (403, "AUTHORIZATION_ERROR"),
            (404, "NOT_FOUND"),
            (429, "RATE_LIMIT_ERROR"),
            (500, "SERVER_ERROR"),
            (502, "SERVER_ERROR"),
            (503, "SERVER_ERROR"),
            (504, "SERVER_ERROR"),
        ];
        for (status, code) in cases {
            let error = classify(status);
            assert_eq!(error.code(), code, "status {}", status);
            assert_eq!(error.status(), Some(status));
            assert_eq!(error.details().status, Some(status));
        }
        assert!(matches!(classify(401), ApiError::Authentication { .. }));
        assert!(matches!(classify(503), ApiError::Server { status: 503, .. }));
    }

    #[test]
    fn other_statuses_are_generic_api_errors() {
        for status in [402, 405, 409, 418, 422, 501, 505] {
            let error = classify(status);
            assert!(matches!(error, ApiError::Other { .. }), "status {}", status);
            assert_eq!(error.code(), "API_ERROR");
            assert_eq!(error.status(), Some(status));
        }
    }

    #[test]
    fn message_prefers_message_then_error_field() {
        let both = Payload::Json(json!({ "message": "bad name", "error": "invalid" }));
        assert_eq!(ApiError::from_response(400, both, "/pages").message(), "bad name");

        let error_only = Payload::Json(json!({ "error": "invalid token" }));
        assert_eq!(ApiError::from_response(401, error_only, "/pages").message(), "invalid token");

        let neither = Payload::Json(json!({ "code": "X" }));
        assert_eq!(ApiError::from_response(400, neither, "/pages").message(), "API request failed");

        let text = Payload::Text("Bad Gateway".to_owned());
        assert_eq!(ApiError::from_response(502, text, "/pages").message(), "Bad Gateway");
    }

    #[test]
    fn bare_json_strings_are_the_message() {
        let body = Payload::Json(json!("token expired"));
        let error = ApiError::from_response(401, body, "/projects");
        assert!(matches!(error, ApiError::Authentication { .. }));
        assert_eq!(error.message(), "token expired");

        let empty = Payload::Json(json!(""));
        let error = ApiError::from_response(401, empty, "/projects");
        assert_eq!(error.message(), "API request failed");
    }

    #[test]
    fn details_keep_endpoint_and_raw_body() {
        let body = Payload::Json(json!({ "message": "missing", "code": "NOT_FOUND" }));
        let error = ApiError::from_response(404, body.clone(), "/experiments/1");
        let details = error.details();
        assert_eq!(details.endpoint, "/experiments/1");
        assert_eq!(details.response, Some(body));
        assert_eq!(details.timeout, None);
    }
}
