// Superset REST client implementation
use crate::application::superset_gateway::SupersetGateway;
use crate::domain::credentials::{AccessToken, Credentials};
use crate::domain::dashboard::{CopyPayload, DashboardDescriptor};
use crate::domain::error::ApiError;
use anyhow::Context;
use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

const LOGIN_PROVIDER: &str = "db";

#[derive(Debug, Clone)]
pub struct SupersetClient {
    http: reqwest::Client,
}

#[derive(Serialize)]
struct LoginBody<'a> {
    username: &'a str,
    password: &'a str,
    provider: &'static str,
    refresh: bool,
}

#[derive(Debug, Deserialize)]
struct LoginResponse {
    #[serde(default)]
    access_token: Option<String>,
}

#[derive(Debug, Deserialize)]
struct DashboardEnvelope {
    result: DashboardResult,
}

#[derive(Debug, Deserialize)]
struct DashboardResult {
    #[serde(default)]
    id: Option<i64>,
    #[serde(default)]
    json_metadata: Option<String>,
    #[serde(default)]
    position_json: Option<String>,
}

#[derive(Debug, Deserialize)]
struct CopyResponse {
    #[serde(default)]
    id: Option<i64>,
    #[serde(default)]
    result: Option<CreatedDashboard>,
}

#[derive(Debug, Deserialize)]
struct CreatedDashboard {
    #[serde(default)]
    id: Option<i64>,
}

impl SupersetClient {
    pub fn new() -> anyhow::Result<Self> {
        let http = reqwest::Client::builder()
            .user_agent(concat!("dashboard-copier/", env!("CARGO_PKG_VERSION")))
            .build()
            .context("Failed to build HTTP client")?;
        Ok(Self { http })
    }

    fn dashboard_url(base_url: &str, dashboard_id: &str) -> String {
        format!(
            "{}/api/v1/dashboard/{}",
            base_url.trim_end_matches('/'),
            urlencoding::encode(dashboard_id)
        )
    }

    async fn send(request: reqwest::RequestBuilder) -> Result<reqwest::Response, ApiError> {
        let response = request
            .send()
            .await
            .map_err(|e| ApiError::transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ApiError::from_error_body(status.as_u16(), &body));
        }

        Ok(response)
    }

    async fn read_json<T: DeserializeOwned>(response: reqwest::Response) -> Result<T, ApiError> {
        response
            .json::<T>()
            .await
            .map_err(|e| ApiError::Decode(format!("invalid response from Superset: {}", e)))
    }
}

#[async_trait]
impl SupersetGateway for SupersetClient {
    async fn login(&self, credentials: &Credentials) -> Result<AccessToken, ApiError> {
        let url = format!(
            "{}/api/v1/security/login",
            credentials.base_url.trim_end_matches('/')
        );
        let body = LoginBody {
            username: &credentials.username,
            password: &credentials.password,
            provider: LOGIN_PROVIDER,
            refresh: true,
        };

        let response = Self::send(self.http.post(&url).json(&body)).await?;
        let login: LoginResponse = Self::read_json(response).await?;

        match login.access_token {
            Some(token) if !token.is_empty() => Ok(AccessToken::new(token)),
            _ => Err(ApiError::Decode(
                "login response did not include an access token".to_string(),
            )),
        }
    }

    async fn fetch_dashboard(
        &self,
        base_url: &str,
        token: &AccessToken,
        dashboard_id: &str,
    ) -> Result<DashboardDescriptor, ApiError> {
        let url = Self::dashboard_url(base_url, dashboard_id);

        let response = Self::send(self.http.get(&url).bearer_auth(token.as_str())).await?;
        let envelope: DashboardEnvelope = Self::read_json(response).await?;
        let result = envelope.result;

        Ok(DashboardDescriptor::new(
            result.id,
            result.json_metadata,
            result.position_json,
        ))
    }

    async fn copy_dashboard(
        &self,
        base_url: &str,
        token: &AccessToken,
        dashboard_id: &str,
        payload: &CopyPayload,
    ) -> Result<Option<i64>, ApiError> {
        let url = format!("{}/copy/", Self::dashboard_url(base_url, dashboard_id));

        // .json() sets Content-Type: application/json
        let response = Self::send(
            self.http
                .post(&url)
                .bearer_auth(token.as_str())
                .json(payload),
        )
        .await?;

        // Only success matters; the created id is informational
        let body = response.text().await.unwrap_or_default();
        let new_id = serde_json::from_str::<CopyResponse>(&body)
            .ok()
            .and_then(|r| r.result.and_then(|c| c.id).or(r.id));

        Ok(new_id)
    }
}
