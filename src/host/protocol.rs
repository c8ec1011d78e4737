//! Wire types for the dialogue host's custom-action webhook.
//!
//! Only the fields this service reads are modelled; everything else the host
//! sends (domain, slots, event history) is ignored.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize)]
pub struct ActionCall {
    pub next_action: String,
    #[serde(default)]
    pub sender_id: Option<String>,
    #[serde(default)]
    pub tracker: Tracker,
}

impl ActionCall {
    pub fn user_id(&self) -> &str {
        self.sender_id
            .as_deref()
            .or(self.tracker.sender_id.as_deref())
            .unwrap_or_default()
    }

    pub fn latest_text(&self) -> &str {
        self.tracker
            .latest_message
            .text
            .as_deref()
            .unwrap_or_default()
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Tracker {
    #[serde(default)]
    pub sender_id: Option<String>,
    #[serde(default)]
    pub latest_message: LatestMessage,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct LatestMessage {
    #[serde(default)]
    pub text: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct ActionResponse {
    pub events: Vec<HostEvent>,
    pub responses: Vec<BotResponse>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(tag = "event")]
pub enum HostEvent {
    #[serde(rename = "slot")]
    SlotSet { name: String, value: String },
}

#[derive(Debug, Clone, Serialize)]
pub struct BotResponse {
    pub response: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ticket_number: Option<String>,
}

impl BotResponse {
    pub fn template(name: &str) -> Self {
        Self {
            response: name.to_string(),
            ticket_number: None,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ActionListing {
    pub name: &'static str,
}
