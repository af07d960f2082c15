use crate::state::ResultView;
use crate::{HistoryEntry, MatchResult};

/// What the surrounding UI renders. The core guarantees order and content of
/// the entries; visual styling is the embedder's concern.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PopupViewModel {
    /// A request is in flight; submit and history triggers should be inert.
    pub busy: bool,
    pub pane: ResultPane,
}

/// The one visible result region. Every transition replaces it wholesale;
/// there is no partial update.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum ResultPane {
    #[default]
    Empty,
    /// Informational text: loading, or an empty result set. Never an error.
    Notice { text: String },
    /// No valid session; `text` tells the user to sign in.
    SignInPrompt { text: String },
    /// A failed workflow; `text` carries the failure detail verbatim.
    Failure { text: String },
    /// Ranked matches, exactly in service order.
    MatchList {
        heading: String,
        rows: Vec<MatchRowView>,
    },
    /// Prior searches, numbered in service order.
    HistoryList { rows: Vec<HistoryRowView> },
}

#[derive(Debug, Clone, PartialEq)]
pub struct MatchRowView {
    pub name: String,
    pub score: f64,
    pub link: String,
    pub thumbnail: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryRowView {
    /// 1-based position in the listing.
    pub position: usize,
    pub query_file: String,
    pub match_count: usize,
}

impl PopupViewModel {
    pub(crate) fn project(result: &ResultView, busy: bool) -> Self {
        let pane = match result {
            ResultView::Idle => ResultPane::Empty,
            ResultView::Loading { message } => ResultPane::Notice {
                text: message.clone(),
            },
            ResultView::Matches(listing) if listing.matches.is_empty() => ResultPane::Notice {
                text: "no matches found".to_string(),
            },
            ResultView::Matches(listing) => ResultPane::MatchList {
                heading: format!("{} matches found", listing.total),
                rows: listing.matches.iter().map(match_row).collect(),
            },
            ResultView::History(entries) if entries.is_empty() => ResultPane::Notice {
                text: "no search history found".to_string(),
            },
            ResultView::History(entries) => ResultPane::HistoryList {
                rows: entries
                    .iter()
                    .enumerate()
                    .map(|(idx, entry)| history_row(idx, entry))
                    .collect(),
            },
            ResultView::AuthRequired => ResultPane::SignInPrompt {
                text: "not signed in; use the sign-in button to connect your account".to_string(),
            },
            ResultView::Error { message } => ResultPane::Failure {
                text: message.clone(),
            },
        };
        Self { busy, pane }
    }
}

fn match_row(result: &MatchResult) -> MatchRowView {
    MatchRowView {
        name: result.name.clone(),
        score: result.score,
        link: result.link.clone(),
        thumbnail: result.thumbnail.clone(),
    }
}

fn history_row(index: usize, entry: &HistoryEntry) -> HistoryRowView {
    HistoryRowView {
        position: index + 1,
        query_file: entry.query_file.clone(),
        match_count: entry.matches.len(),
    }
}
