// Status banner shown after a copy attempt
use super::dashboard::CopyOutcome;
use super::error::WorkflowError;

pub const SUCCESS_MARKER: &str = "✅";
pub const ERROR_MARKER: &str = "❌";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CopyStatus {
    Copied,
    Failed(String),
}

impl CopyStatus {
    pub fn from_result(result: &Result<CopyOutcome, WorkflowError>) -> Self {
        match result {
            Ok(_) => Self::Copied,
            Err(e) => Self::Failed(e.to_string()),
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Self::Copied)
    }

    pub fn banner(&self) -> String {
        match self {
            Self::Copied => format!("{} Dashboard copied successfully!", SUCCESS_MARKER),
            Self::Failed(message) => format!("{} Error: {}", ERROR_MARKER, message),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::error::ApiError;

    #[test]
    fn test_banner_text() {
        let ok = CopyStatus::from_result(&Ok(CopyOutcome {
            source_id: "7".into(),
            new_dashboard_id: None,
        }));
        assert!(ok.is_success());
        assert_eq!(ok.banner(), "✅ Dashboard copied successfully!");

        let failed = CopyStatus::from_result(&Err(WorkflowError::Copy(ApiError::Server {
            status: 500,
            message: "boom".into(),
        })));
        assert!(!failed.is_success());
        assert_eq!(failed.banner(), "❌ Error: boom");
    }
}
