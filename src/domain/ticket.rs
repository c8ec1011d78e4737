use crate::domain::remediation::RemediationKind;

const SHORT_DESCRIPTION_LIMIT: usize = 160;
const FALLBACK_SHORT_DESCRIPTION: &str = "Chatbot Fallback: User query unclassified";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TicketRequest {
    pub user_id: String,
    pub short_description: String,
    pub details: String,
}

impl TicketRequest {
    pub fn new(user_id: &str, short_description: &str, details: &str) -> Self {
        Self {
            user_id: user_id.to_string(),
            short_description: single_line(short_description, SHORT_DESCRIPTION_LIMIT),
            details: details.to_string(),
        }
    }

    pub fn for_failed_remediation(kind: RemediationKind, user_id: &str) -> Self {
        Self::new(
            user_id,
            &format!("Automated fix failed for: {}", kind.issue_label()),
            &format!(
                "Attempted to run script '{}' for user '{user_id}' but it failed.",
                kind.script()
            ),
        )
    }

    pub fn for_unclassified_query(query: &str, user_id: &str) -> Self {
        Self::new(
            user_id,
            FALLBACK_SHORT_DESCRIPTION,
            &format!(
                "The user reported an issue that the chatbot could not categorize.\n\nUser Query: '{query}'"
            ),
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TicketFailure {
    ConfigMissing,
    ConnectionError,
    ApiError,
}

impl TicketFailure {
    pub fn sentinel(&self) -> &'static str {
        match self {
            TicketFailure::ConfigMissing => "N/A (Config Error)",
            TicketFailure::ConnectionError => "N/A (Connection Error)",
            TicketFailure::ApiError => "N/A (API Error)",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TicketResult {
    Created(String),
    Failed(TicketFailure),
}

impl TicketResult {
    /// Value shown to the user: the real number or a failure sentinel.
    pub fn ticket_number(&self) -> String {
        match self {
            TicketResult::Created(number) => number.clone(),
            TicketResult::Failed(reason) => reason.sentinel().to_string(),
        }
    }
}

fn single_line(input: &str, limit: usize) -> String {
    let flattened = input.split_whitespace().collect::<Vec<_>>().join(" ");
    flattened.chars().take(limit).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_description_is_single_line_and_bounded() {
        let long = format!("first line\nsecond {}", "x".repeat(400));
        let request = TicketRequest::new("alice", &long, "body");
        assert!(!request.short_description.contains('\n'));
        assert_eq!(request.short_description.chars().count(), 160);
        assert!(request.short_description.starts_with("first line second x"));
    }

    #[test]
    fn failed_remediation_ticket_names_script_and_user() {
        let request = TicketRequest::for_failed_remediation(RemediationKind::FixPrinter, "bob");
        assert_eq!(
            request.short_description,
            "Automated fix failed for: Printer Issue"
        );
        assert_eq!(
            request.details,
            "Attempted to run script 'Clear-Print-Spooler.ps1' for user 'bob' but it failed."
        );
        assert_eq!(request.user_id, "bob");
    }

    #[test]
    fn unclassified_query_ticket_keeps_query_verbatim() {
        let request = TicketRequest::for_unclassified_query("my  vpn\nis down", "carol");
        assert_eq!(request.short_description, FALLBACK_SHORT_DESCRIPTION);
        assert!(request.details.contains("my  vpn\nis down"));
    }

    #[test]
    fn failures_render_as_sentinels() {
        assert_eq!(
            TicketResult::Created("INC0012345".to_string()).ticket_number(),
            "INC0012345"
        );
        assert_eq!(
            TicketResult::Failed(TicketFailure::ConfigMissing).ticket_number(),
            "N/A (Config Error)"
        );
        assert_eq!(
            TicketResult::Failed(TicketFailure::ConnectionError).ticket_number(),
            "N/A (Connection Error)"
        );
        assert!(
            TicketResult::Failed(TicketFailure::ApiError)
                .ticket_number()
                .starts_with("N/A")
        );
    }
}
