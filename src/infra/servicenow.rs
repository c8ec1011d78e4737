use async_trait::async_trait;
use base64::prelude::{BASE64_STANDARD, Engine as _};
use reqwest::{
    Client,
    header::{ACCEPT, AUTHORIZATION, CONTENT_TYPE},
};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::config::TicketingConfig;
use crate::domain::ticket::{TicketFailure, TicketRequest, TicketResult};
use crate::error::{AppError, AppResult};
use crate::services::TicketingService;

const INCIDENT_PATH: &str = "/api/now/table/incident";
const LOW_PRIORITY: &str = "3";

pub struct ServiceNowClient {
    http: Client,
    instance: Option<String>,
    username: Option<String>,
    password: Option<String>,
}

impl ServiceNowClient {
    pub fn new(config: TicketingConfig) -> AppResult<Self> {
        let http = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|err| AppError::Configuration(format!("failed to build HTTP client: {err}")))?;

        Ok(Self {
            http,
            instance: config.instance,
            username: config.username,
            password: config.password,
        })
    }

    fn api_details(&self) -> Option<(&str, &str, &str)> {
        let instance = self.instance.as_deref()?;
        let username = self.username.as_deref()?;
        let password = self.password.as_deref()?;
        Some((instance, username, password))
    }

    fn auth_header(username: &str, password: &str) -> String {
        let credentials = format!("{username}:{password}");
        let encoded = BASE64_STANDARD.encode(credentials);
        format!("Basic {encoded}")
    }

    /// Bare instance names expand to the hosted domain; full URLs are used as-is.
    fn incident_endpoint(instance: &str) -> String {
        let instance = instance.trim();
        if instance.starts_with("http://") || instance.starts_with("https://") {
            format!("{}{INCIDENT_PATH}", instance.trim_end_matches('/'))
        } else {
            format!("https://{instance}.service-now.com{INCIDENT_PATH}")
        }
    }
}

#[async_trait]
impl TicketingService for ServiceNowClient {
    async fn create_ticket(&self, request: &TicketRequest) -> TicketResult {
        let Some((instance, username, password)) = self.api_details() else {
            warn!(
                user_id = %request.user_id,
                "ticketing credentials not configured; skipping incident creation"
            );
            return TicketResult::Failed(TicketFailure::ConfigMissing);
        };

        let body = CreateIncidentRequest {
            caller_id: &request.user_id,
            short_description: &request.short_description,
            description: &request.details,
            urgency: LOW_PRIORITY,
            impact: LOW_PRIORITY,
        };

        let response = match self
            .http
            .post(Self::incident_endpoint(instance))
            .header(AUTHORIZATION, Self::auth_header(username, password))
            .header(ACCEPT, "application/json")
            .header(CONTENT_TYPE, "application/json")
            .json(&body)
            .send()
            .await
        {
            Ok(response) => response,
            Err(err) => {
                warn!(user_id = %request.user_id, error = %err, "failed to reach ticketing API");
                return TicketResult::Failed(TicketFailure::ConnectionError);
            }
        };

        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "<unable to read response>".to_string());
            warn!(%status, body = %body, "ticketing API rejected incident");
            return TicketResult::Failed(TicketFailure::ConnectionError);
        }

        let raw = match response.text().await {
            Ok(raw) => raw,
            Err(err) => {
                warn!(error = %err, "failed to read ticketing API response");
                return TicketResult::Failed(TicketFailure::ConnectionError);
            }
        };

        let number = serde_json::from_str::<CreateIncidentResponse>(&raw)
            .ok()
            .and_then(|payload| payload.result)
            .and_then(|record| record.number)
            .filter(|number| !number.trim().is_empty());

        match number {
            Some(number) => {
                info!(user_id = %request.user_id, ticket_number = %number, "incident created");
                TicketResult::Created(number)
            }
            None => {
                warn!(body = %raw, "ticketing API response has no result.number");
                TicketResult::Failed(TicketFailure::ApiError)
            }
        }
    }
}

#[derive(Serialize)]
struct CreateIncidentRequest<'a> {
    caller_id: &'a str,
    short_description: &'a str,
    description: &'a str,
    urgency: &'static str,
    impact: &'static str,
}

#[derive(Deserialize)]
struct CreateIncidentResponse {
    result: Option<IncidentRecord>,
}

#[derive(Deserialize)]
struct IncidentRecord {
    number: Option<String>,
}
