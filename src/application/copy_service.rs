// Dashboard copy service - login, fetch, transform, duplicate
use crate::application::superset_gateway::SupersetGateway;
use crate::domain::credentials::CopyRequest;
use crate::domain::dashboard::{CopyOutcome, CopyPayload};
use crate::domain::error::WorkflowError;
use std::sync::Arc;
use tokio::sync::Mutex;

#[derive(Clone)]
pub struct DashboardCopyService {
    gateway: Arc<dyn SupersetGateway>,
    in_flight: Arc<Mutex<()>>,
}

impl DashboardCopyService {
    pub fn new(gateway: Arc<dyn SupersetGateway>) -> Self {
        Self {
            gateway,
            in_flight: Arc::new(Mutex::new(())),
        }
    }

    /// Run the full copy sequence. Steps are strictly sequential and the first
    /// failure aborts the rest; nothing is retried.
    pub async fn copy_dashboard(&self, request: CopyRequest) -> Result<CopyOutcome, WorkflowError> {
        let request = request.normalized()?;
        let _guard = self.in_flight.try_lock().map_err(|_| WorkflowError::Busy)?;

        let base_url = request.credentials.base_url.as_str();
        let dashboard_id = request.dashboard_id.as_str();

        tracing::debug!("Logging in to {}", base_url);
        let token = self
            .gateway
            .login(&request.credentials)
            .await
            .map_err(WorkflowError::Auth)?;

        tracing::debug!("Fetching dashboard {}", dashboard_id);
        let descriptor = self
            .gateway
            .fetch_dashboard(base_url, &token, dashboard_id)
            .await
            .map_err(WorkflowError::Fetch)?;
        if let Some(id) = descriptor.id {
            tracing::debug!("Fetched dashboard {} layout", id);
        }

        let payload = CopyPayload::from_descriptor(&descriptor, request.copy_title.clone())?;

        tracing::debug!(
            "Copying dashboard {} as {:?} ({} bytes of metadata)",
            dashboard_id,
            payload.dashboard_title,
            payload.json_metadata.len()
        );
        let new_dashboard_id = self
            .gateway
            .copy_dashboard(base_url, &token, dashboard_id, &payload)
            .await
            .map_err(WorkflowError::Copy)?;

        Ok(CopyOutcome {
            source_id: request.dashboard_id,
            new_dashboard_id,
        })
    }
}
