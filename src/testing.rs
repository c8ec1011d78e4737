//! Test doubles for the collaborator traits.

use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;

use crate::domain::remediation::{RemediationKind, RemediationOutcome};
use crate::domain::ticket::{TicketRequest, TicketResult};
use crate::services::{RemediationTrigger, TicketingService};

pub struct FixedTrigger {
    outcome: RemediationOutcome,
    calls: Mutex<Vec<(RemediationKind, String)>>,
}

impl FixedTrigger {
    pub fn new(outcome: RemediationOutcome) -> Self {
        Self {
            outcome,
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> Vec<(RemediationKind, String)> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl RemediationTrigger for FixedTrigger {
    async fn trigger(&self, kind: RemediationKind, user_id: &str) -> RemediationOutcome {
        self.calls.lock().unwrap().push((kind, user_id.to_string()));
        self.outcome
    }
}

pub struct RecordingTicketing {
    result: TicketResult,
    requests: Mutex<Vec<TicketRequest>>,
    calls: AtomicUsize,
}

impl RecordingTicketing {
    pub fn new(result: TicketResult) -> Self {
        Self {
            result,
            requests: Mutex::new(Vec::new()),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn requests(&self) -> Vec<TicketRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl TicketingService for RecordingTicketing {
    async fn create_ticket(&self, request: &TicketRequest) -> TicketResult {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.requests.lock().unwrap().push(request.clone());
        self.result.clone()
    }
}
