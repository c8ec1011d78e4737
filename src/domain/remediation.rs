use std::fmt;

/// Remediations this service knows how to trigger.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RemediationKind {
    FixPrinter,
    ResetPassword,
}

struct RemediationEntry {
    kind: RemediationKind,
    id: &'static str,
    script: &'static str,
    issue_label: &'static str,
    action_name: &'static str,
    confirmation: &'static str,
}

const REMEDIATIONS: &[RemediationEntry] = &[
    RemediationEntry {
        kind: RemediationKind::FixPrinter,
        id: "fix-printer",
        script: "Clear-Print-Spooler.ps1",
        issue_label: "Printer Issue",
        action_name: "action_fix_printer",
        confirmation: "utter_confirm_printer_fix",
    },
    RemediationEntry {
        kind: RemediationKind::ResetPassword,
        id: "reset-password",
        script: "Initiate-Password-Reset.ps1",
        issue_label: "Password Reset",
        action_name: "action_reset_password",
        confirmation: "utter_confirm_password_reset_fix",
    },
];

impl RemediationKind {
    pub fn all() -> impl Iterator<Item = RemediationKind> {
        REMEDIATIONS.iter().map(|entry| entry.kind)
    }

    pub fn from_id(value: &str) -> Option<Self> {
        let needle = value.trim().to_lowercase();
        REMEDIATIONS
            .iter()
            .find(|entry| entry.id == needle)
            .map(|entry| entry.kind)
    }

    pub fn from_action_name(name: &str) -> Option<Self> {
        REMEDIATIONS
            .iter()
            .find(|entry| entry.action_name == name)
            .map(|entry| entry.kind)
    }

    pub fn id(&self) -> &'static str {
        self.entry().id
    }

    /// Script handed to the remediation trigger.
    pub fn script(&self) -> &'static str {
        self.entry().script
    }

    pub fn issue_label(&self) -> &'static str {
        self.entry().issue_label
    }

    pub fn action_name(&self) -> &'static str {
        self.entry().action_name
    }

    /// Host response template shown when the remediation worked.
    pub fn confirmation_template(&self) -> &'static str {
        self.entry().confirmation
    }

    fn entry(&self) -> &'static RemediationEntry {
        REMEDIATIONS
            .iter()
            .find(|entry| entry.kind == *self)
            .unwrap_or_else(|| unreachable!("every remediation kind has a table entry"))
    }
}

impl fmt::Display for RemediationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

#[derive(Debug, Clone)]
pub struct RemediationRequest {
    pub kind: RemediationKind,
    pub user_id: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RemediationOutcome {
    Succeeded,
    Failed,
}
