// Gateway trait for the Superset REST API
use crate::domain::credentials::{AccessToken, Credentials};
use crate::domain::dashboard::{CopyPayload, DashboardDescriptor};
use crate::domain::error::ApiError;
use async_trait::async_trait;

#[async_trait]
pub trait SupersetGateway: Send + Sync {
    /// Exchange username/password for a bearer token
    async fn login(&self, credentials: &Credentials) -> Result<AccessToken, ApiError>;

    /// Read one dashboard's layout fields
    async fn fetch_dashboard(
        &self,
        base_url: &str,
        token: &AccessToken,
        dashboard_id: &str,
    ) -> Result<DashboardDescriptor, ApiError>;

    /// Create a duplicate of a dashboard, returning the new id when the server reports it
    async fn copy_dashboard(
        &self,
        base_url: &str,
        token: &AccessToken,
        dashboard_id: &str,
        payload: &CopyPayload,
    ) -> Result<Option<i64>, ApiError>;
}
