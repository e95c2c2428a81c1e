use anyhow::Result;
use async_trait::async_trait;
use reqwest::Client;
use tracing::{info, instrument};

use super::errors::ApiError;
use super::types::*;
use super::ChangeOrderApi;
use crate::wizard::types::OrderTeamMember;

/// Mount point of the change order service on the host CRM.
pub const DEFAULT_BASE_URL: &str = "/services/change-order";

/// HTTP client for the change order service endpoints
#[derive(Clone)]
pub struct CrmClient {
    http_client: Client,
    base_url: String,
}

impl CrmClient {
    pub fn new() -> Self {
        Self::with_base_url(DEFAULT_BASE_URL)
    }

    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            http_client: Client::builder()
                .user_agent("change-order-wizard/1.0")
                .build()
                .expect("Failed to create HTTP client"),
            base_url: base_url.into(),
        }
    }

    #[instrument(skip(self), err)]
    async fn fetch_roles(&self) -> Result<Vec<String>, ApiError> {
        let url = format!("{}/roles", self.base_url);
        let response = self
            .http_client
            .get(&url)
            .send()
            .await
            .map_err(|e| ApiError::Network {
                message: format!("Failed to call {}: {}", url, e),
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ApiError::from_response_body(status.as_u16(), &body));
        }

        let roles: Vec<String> = response.json().await.map_err(|e| ApiError::InvalidResponse {
            message: format!("Failed to parse roles response: {}", e),
        })?;
        info!("Loaded {} team member roles", roles.len());
        Ok(roles)
    }

    #[instrument(skip(self), err)]
    async fn fetch_order_team(&self, record_id: &str) -> Result<Vec<OrderTeamMember>, ApiError> {
        let url = format!("{}/team?recordId={}", self.base_url, record_id);
        let response = self
            .http_client
            .get(&url)
            .send()
            .await
            .map_err(|e| ApiError::Network {
                message: format!("Failed to call {}: {}", url, e),
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ApiError::from_response_body(status.as_u16(), &body));
        }

        let members: Vec<OrderTeamMemberDto> =
            response.json().await.map_err(|e| ApiError::InvalidResponse {
                message: format!("Failed to parse order team response: {}", e),
            })?;
        info!("Loaded {} order team members for {}", members.len(), record_id);
        Ok(members.into_iter().map(OrderTeamMember::from).collect())
    }

    #[instrument(skip(self, request), err)]
    async fn post_change_order(
        &self,
        request: &ProcessChangeOrderRequest,
    ) -> Result<String, ApiError> {
        let url = format!("{}/process", self.base_url);
        let response = self
            .http_client
            .post(&url)
            .header("Content-Type", "application/json")
            .json(request)
            .send()
            .await
            .map_err(|e| ApiError::Network {
                message: format!("Failed to call {}: {}", url, e),
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ApiError::from_response_body(status.as_u16(), &body));
        }

        let created: ProcessChangeOrderResponse =
            response.json().await.map_err(|e| ApiError::InvalidResponse {
                message: format!("Failed to parse process response: {}", e),
            })?;
        info!(
            "Change order {} processed, new record {}",
            request.change_order_type, created.record_id
        );
        Ok(created.record_id)
    }
}

impl Default for CrmClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait(?Send)]
impl ChangeOrderApi for CrmClient {
    async fn get_team_member_roles(&self) -> Result<Vec<String>, ApiError> {
        self.fetch_roles().await
    }

    async fn get_order_team(&self, record_id: &str) -> Result<Vec<OrderTeamMember>, ApiError> {
        self.fetch_order_team(record_id).await
    }

    async fn process_change_order(
        &self,
        request: &ProcessChangeOrderRequest,
    ) -> Result<String, ApiError> {
        self.post_change_order(request).await
    }
}
