use std::fmt;

use serde::Deserialize;

/// Raw image payload for a match submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageUpload {
    pub file_name: String,
    pub bytes: Vec<u8>,
}

/// One ranked match as reported by the service. The service orders matches
/// by relevance and that order is preserved end to end.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct MatchResult {
    pub name: String,
    pub score: f64,
    pub link: String,
    #[serde(default)]
    pub thumbnail: Option<String>,
}

/// Body of a successful match submission.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct MatchResponse {
    #[serde(default)]
    pub matches: Vec<MatchResult>,
    #[serde(default)]
    pub total_matches: Option<u64>,
}

impl MatchResponse {
    /// Service-reported total, falling back to the returned row count when
    /// the field is absent.
    pub fn total(&self) -> u64 {
        self.total_matches.unwrap_or(self.matches.len() as u64)
    }
}

/// One prior search of the current session.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct HistoryEntry {
    pub query_file: String,
    #[serde(default)]
    pub matches: Vec<MatchResult>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub(crate) struct HistoryResponse {
    #[serde(default)]
    pub history: Vec<HistoryEntry>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub(crate) struct AuthStatus {
    pub authenticated: bool,
}

/// Failed API request, classified for the popup's rendering decisions.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{kind}: {message}")]
pub struct RequestError {
    pub kind: FailureKind,
    pub message: String,
}

impl RequestError {
    pub(crate) fn new(kind: FailureKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FailureKind {
    /// HTTP 401, whatever the body said. The session credential is missing
    /// or expired and the user has to sign in again.
    AuthRequired,
    /// Any other non-success status. The response body travels verbatim in
    /// the error message.
    Service { status: u16 },
    /// No usable response at all: connection failures, timeouts, or a
    /// success body that did not parse.
    Transport,
}

impl fmt::Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FailureKind::AuthRequired => write!(f, "authentication required"),
            FailureKind::Service { status } => write!(f, "service error (http {status})"),
            FailureKind::Transport => write!(f, "transport error"),
        }
    }
}
