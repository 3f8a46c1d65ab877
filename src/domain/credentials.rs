// Operator credentials and copy requests
use super::error::WorkflowError;
use std::fmt;

/// Login details for one Superset server, held only for the duration of a request.
#[derive(Clone)]
pub struct Credentials {
    pub base_url: String,
    pub username: String,
    pub password: String,
}

impl Credentials {
    pub fn new(base_url: String, username: String, password: String) -> Self {
        Self {
            base_url,
            username,
            password,
        }
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("base_url", &self.base_url)
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Bearer token returned by the login endpoint.
#[derive(Clone, PartialEq, Eq)]
pub struct AccessToken(String);

impl AccessToken {
    pub fn new(token: String) -> Self {
        Self(token)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for AccessToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("AccessToken(<redacted>)")
    }
}

/// One form submission: who to log in as, which dashboard to copy, and the new title.
#[derive(Debug, Clone)]
pub struct CopyRequest {
    pub credentials: Credentials,
    pub dashboard_id: String,
    pub copy_title: String,
}

impl CopyRequest {
    pub fn new(credentials: Credentials, dashboard_id: String, copy_title: String) -> Self {
        Self {
            credentials,
            dashboard_id,
            copy_title,
        }
    }

    /// Trim the base URL and dashboard id, and reject blank required fields.
    pub fn normalized(mut self) -> Result<Self, WorkflowError> {
        self.credentials.base_url = self
            .credentials
            .base_url
            .trim()
            .trim_end_matches('/')
            .to_string();
        self.dashboard_id = self.dashboard_id.trim().to_string();

        if self.credentials.base_url.is_empty() {
            return Err(WorkflowError::InvalidInput(
                "Superset base URL is required".to_string(),
            ));
        }
        if self.dashboard_id.is_empty() {
            return Err(WorkflowError::InvalidInput(
                "Dashboard ID is required".to_string(),
            ));
        }
        if self.copy_title.trim().is_empty() {
            return Err(WorkflowError::InvalidInput(
                "New dashboard title is required".to_string(),
            ));
        }

        Ok(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(base_url: &str, id: &str, title: &str) -> CopyRequest {
        CopyRequest::new(
            Credentials::new(base_url.to_string(), "a".to_string(), "b".to_string()),
            id.to_string(),
            title.to_string(),
        )
    }

    #[test]
    fn test_normalized_trims_base_url_and_id() {
        let req = request("  https://x/ ", " 7 ", "Copy of X")
            .normalized()
            .unwrap();
        assert_eq!(req.credentials.base_url, "https://x");
        assert_eq!(req.dashboard_id, "7");
        assert_eq!(req.copy_title, "Copy of X");
    }

    #[test]
    fn test_normalized_rejects_blank_fields() {
        let err = request("   ", "7", "t").normalized().unwrap_err();
        assert_eq!(err.to_string(), "Superset base URL is required");

        let err = request("https://x", "", "t").normalized().unwrap_err();
        assert_eq!(err.to_string(), "Dashboard ID is required");

        let err = request("https://x", "7", "  ").normalized().unwrap_err();
        assert_eq!(err.to_string(), "New dashboard title is required");
    }

    #[test]
    fn test_debug_redacts_secrets() {
        let creds = Credentials::new("https://x".into(), "alice".into(), "hunter2".into());
        let printed = format!("{:?}", creds);
        assert!(printed.contains("alice"));
        assert!(!printed.contains("hunter2"));

        let token = AccessToken::new("secret-token".into());
        assert!(!format!("{:?}", token).contains("secret-token"));
        assert_eq!(token.as_str(), "secret-token");
    }
}
