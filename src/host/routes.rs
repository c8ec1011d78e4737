use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde_json::json;
use tower_http::trace::TraceLayer;
use tracing::{error, warn};

use crate::context::AppContext;
use crate::error::AppError;
use crate::host::actions::HostAction;
use crate::host::protocol::{ActionCall, ActionListing, ActionResponse};

pub fn create_router(ctx: AppContext) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/actions", get(list_actions))
        .route("/webhook", post(webhook))
        .layer(TraceLayer::new_for_http())
        .with_state(ctx)
}

async fn health() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

async fn list_actions() -> Json<Vec<ActionListing>> {
    Json(
        HostAction::registered()
            .iter()
            .map(|action| ActionListing {
                name: action.name(),
            })
            .collect(),
    )
}

async fn webhook(
    State(ctx): State<AppContext>,
    Json(call): Json<ActionCall>,
) -> Result<Json<ActionResponse>, HostError> {
    let action = HostAction::from_name(&call.next_action)
        .ok_or_else(|| HostError::ActionNotFound(call.next_action.clone()))?;
    if call.user_id().trim().is_empty() {
        warn!(action = action.name(), "action call without sender_id");
        return Err(HostError::MissingSender(call.next_action.clone()));
    }
    let response = action.run(&ctx, &call).await?;
    Ok(Json(response))
}

#[derive(Debug)]
enum HostError {
    ActionNotFound(String),
    MissingSender(String),
    Internal(AppError),
}

impl From<AppError> for HostError {
    fn from(err: AppError) -> Self {
        HostError::Internal(err)
    }
}

impl IntoResponse for HostError {
    fn into_response(self) -> Response {
        match self {
            HostError::ActionNotFound(name) => (
                StatusCode::NOT_FOUND,
                Json(json!({
                    "error": format!("No registered action found for name '{name}'."),
                    "action_name": name,
                })),
            )
                .into_response(),
            HostError::MissingSender(name) => (
                StatusCode::BAD_REQUEST,
                Json(json!({
                    "error": "Action call carries no sender_id.",
                    "action_name": name,
                })),
            )
                .into_response(),
            HostError::Internal(err) => {
                error!(error = %err, "action failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "error": err.to_string() })),
                )
                    .into_response()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::body::{Body, to_bytes};
    use axum::http::Request;
    use serde_json::Value;
    use tower::ServiceExt;

    use super::*;
    use crate::domain::remediation::RemediationOutcome;
    use crate::domain::ticket::{TicketFailure, TicketResult};
    use crate::testing::{FixedTrigger, RecordingTicketing};

    fn router(
        outcome: RemediationOutcome,
        ticket: TicketResult,
    ) -> (Router, Arc<RecordingTicketing>) {
        let ticketing = Arc::new(RecordingTicketing::new(ticket));
        let ctx = AppContext::new(Arc::new(FixedTrigger::new(outcome)), ticketing.clone());
        (create_router(ctx), ticketing)
    }

    async fn post_webhook(router: Router, body: Value) -> (StatusCode, Value) {
        let response = router
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/webhook")
                    .header("content-type", "application/json")
                    .body(Body::from(body.to_string()))
                    .unwrap(),
            )
            .await
            .unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn confirms_successful_remediation() {
        let (router, ticketing) = router(
            RemediationOutcome::Succeeded,
            TicketResult::Created("INC1".to_string()),
        );
        let (status, body) = post_webhook(
            router,
            json!({"next_action": "action_fix_printer", "sender_id": "alice", "tracker": {}}),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            body,
            json!({"events": [], "responses": [{"response": "utter_confirm_printer_fix"}]})
        );
        assert_eq!(ticketing.call_count(), 0);
    }

    #[tokio::test]
    async fn failed_remediation_reports_ticket_number() {
        let (router, _) = router(
            RemediationOutcome::Failed,
            TicketResult::Failed(TicketFailure::ConfigMissing),
        );
        let (status, body) = post_webhook(
            router,
            json!({"next_action": "action_reset_password", "sender_id": "bob"}),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            body["responses"][0],
            json!({"response": "utter_inform_ticket_number", "ticket_number": "N/A (Config Error)"})
        );
    }

    #[tokio::test]
    async fn fallback_sets_ticket_number_slot() {
        let (router, ticketing) = router(
            RemediationOutcome::Succeeded,
            TicketResult::Created("INC0012345".to_string()),
        );
        let (status, body) = post_webhook(
            router,
            json!({
                "next_action": "action_create_servicenow_ticket",
                "tracker": {"sender_id": "carol", "latest_message": {"text": "my vpn is down"}}
            }),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            body,
            json!({
                "events": [{"event": "slot", "name": "ticket_number", "value": "INC0012345"}],
                "responses": []
            })
        );
        let requests = ticketing.requests();
        assert_eq!(requests[0].user_id, "carol");
        assert!(requests[0].details.contains("my vpn is down"));
    }

    #[tokio::test]
    async fn unknown_action_is_not_found() {
        let (router, _) = router(
            RemediationOutcome::Succeeded,
            TicketResult::Created("INC1".to_string()),
        );
        let (status, body) =
            post_webhook(router, json!({"next_action": "action_order_pizza"})).await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["action_name"], "action_order_pizza");
    }

    #[tokio::test]
    async fn call_without_sender_is_rejected() {
        let (router, ticketing) = router(
            RemediationOutcome::Failed,
            TicketResult::Created("INC1".to_string()),
        );
        let (status, body) = post_webhook(
            router,
            json!({
                "next_action": "action_create_servicenow_ticket",
                "tracker": {"latest_message": {"text": "printer on fire"}}
            }),
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["action_name"], "action_create_servicenow_ticket");
        assert_eq!(ticketing.call_count(), 0);
    }

    #[tokio::test]
    async fn lists_registered_actions() {
        let (router, _) = router(
            RemediationOutcome::Succeeded,
            TicketResult::Created("INC1".to_string()),
        );
        let response = router
            .oneshot(Request::builder().uri("/actions").body(Body::empty()).unwrap())
            .await
            .unwrap();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body: Value = serde_json::from_slice(&bytes).unwrap();

        assert_eq!(
            body,
            json!([
                {"name": "action_fix_printer"},
                {"name": "action_reset_password"},
                {"name": "action_create_servicenow_ticket"}
            ])
        );
    }
}
