// Workflow error types and operator-facing messages
use serde_json::Value;
use thiserror::Error;

/// Failure of a single call against the Superset API.
///
/// `Display` yields the message shown to the operator: the server's own
/// `message` field when it sent one, otherwise the transport or status error.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    #[error("{message}")]
    Server { status: u16, message: String },
    #[error("Request failed with status code {status}")]
    Status { status: u16 },
    #[error("{0}")]
    Transport(String),
    #[error("{0}")]
    Decode(String),
    #[error("Unknown error")]
    Unknown,
}

impl ApiError {
    /// Build an error from a non-success response body.
    pub fn from_error_body(status: u16, body: &str) -> Self {
        let message = serde_json::from_str::<Value>(body)
            .ok()
            .and_then(|value| value.get("message").cloned());

        match message {
            Some(Value::String(text)) if !text.trim().is_empty() => Self::Server {
                status,
                message: text,
            },
            Some(Value::Null) | Some(Value::String(_)) | None => Self::Status { status },
            // Validation failures come back as objects keyed by field
            Some(other) => Self::Server {
                status,
                message: other.to_string(),
            },
        }
    }

    pub fn transport(message: impl Into<String>) -> Self {
        let message = message.into();
        if message.trim().is_empty() {
            Self::Unknown
        } else {
            Self::Transport(message)
        }
    }

    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Server { status, .. } | Self::Status { status } => Some(*status),
            _ => None,
        }
    }
}

/// Problem turning a dashboard's serialized fields into copy metadata.
#[derive(Debug, Error)]
pub enum MetadataError {
    #[error("{field} is not valid JSON: {source}")]
    InvalidJson {
        field: &'static str,
        #[source]
        source: serde_json::Error,
    },
    #[error("json_metadata is not a JSON object")]
    NotAnObject,
}

/// Any failure of the copy workflow. The first error aborts the sequence.
#[derive(Debug, Error)]
pub enum WorkflowError {
    #[error("{0}")]
    InvalidInput(String),
    #[error("A dashboard copy is already in progress")]
    Busy,
    #[error("{0}")]
    Auth(ApiError),
    #[error("{0}")]
    Fetch(ApiError),
    #[error(transparent)]
    Transform(#[from] MetadataError),
    #[error("{0}")]
    Copy(ApiError),
}

impl WorkflowError {
    /// Short name of the step that failed, for logs.
    pub fn step(&self) -> &'static str {
        match self {
            Self::InvalidInput(_) => "validate",
            Self::Busy => "acquire",
            Self::Auth(_) => "login",
            Self::Fetch(_) => "fetch",
            Self::Transform(_) => "transform",
            Self::Copy(_) => "copy",
        }
    }

    /// HTTP status returned by Superset, when the failure came from a response.
    pub fn http_status(&self) -> Option<u16> {
        match self {
            Self::Auth(e) | Self::Fetch(e) | Self::Copy(e) => e.status(),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_server_message_is_preferred() {
        let err = ApiError::from_error_body(500, r#"{"message":"boom"}"#);
        assert_eq!(err, ApiError::Server { status: 500, message: "boom".into() });
        assert_eq!(err.to_string(), "boom");
        assert_eq!(err.status(), Some(500));
    }

    #[test]
    fn test_falls_back_to_status_message() {
        for body in ["", "not json", r#"{"msg":"x"}"#, r#"{"message":null}"#, r#"{"message":""}"#] {
            let err = ApiError::from_error_body(404, body);
            assert_eq!(err.to_string(), "Request failed with status code 404", "body: {body}");
        }
    }

    #[test]
    fn test_structured_message_rendered_as_json() {
        let err = ApiError::from_error_body(
            422,
            r#"{"message":{"dashboard_title":["Missing data"]}}"#,
        );
        assert_eq!(err.to_string(), r#"{"dashboard_title":["Missing data"]}"#);
    }

    #[test]
    fn test_empty_transport_message_is_unknown() {
        assert_eq!(ApiError::transport("  "), ApiError::Unknown);
        assert_eq!(ApiError::transport("").to_string(), "Unknown error");
        assert_eq!(
            ApiError::transport("connection refused").to_string(),
            "connection refused"
        );
    }

    #[test]
    fn test_workflow_error_displays_inner_message() {
        let err = WorkflowError::Auth(ApiError::Server {
            status: 401,
            message: "Not authorized".into(),
        });
        assert_eq!(err.to_string(), "Not authorized");
        assert_eq!(err.step(), "login");
        assert_eq!(err.http_status(), Some(401));
        assert_eq!(WorkflowError::Busy.step(), "acquire");
        assert_eq!(WorkflowError::Busy.http_status(), None);
    }
}
