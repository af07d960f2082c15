use crate::view_model::PopupViewModel;

/// An image picked in the host file chooser, held until the user submits.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageSelection {
    pub file_name: String,
    pub bytes: Vec<u8>,
}

/// One ranked match as reported by the matching service. Rendered read-only;
/// the controller never reorders or rewrites entries.
#[derive(Debug, Clone, PartialEq)]
pub struct MatchResult {
    pub name: String,
    pub score: f64,
    pub link: String,
    pub thumbnail: Option<String>,
}

/// A completed match response. `total` is the service-reported count and may
/// exceed `matches.len()` when the service caps the returned list.
#[derive(Debug, Clone, PartialEq)]
pub struct MatchListing {
    pub matches: Vec<MatchResult>,
    pub total: u64,
}

/// One prior search; `matches.len()` is the count shown to the user.
#[derive(Debug, Clone, PartialEq)]
pub struct HistoryEntry {
    pub query_file: String,
    pub matches: Vec<MatchResult>,
}

/// Terminal failure of a single request. Never retried automatically; the
/// user re-triggers the action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RequestFailure {
    /// The service rejected the session credential (HTTP 401).
    AuthRequired,
    /// Validation, service or transport failure; `message` is surfaced to
    /// the user verbatim.
    Failed { message: String },
}

/// The single view-state cell. Exactly one variant is current at any time;
/// transitions happen only through `PopupState` methods.
#[derive(Debug, Clone, PartialEq, Default)]
pub(crate) enum ResultView {
    #[default]
    Idle,
    Loading {
        message: String,
    },
    /// Success state; an empty listing renders as "no matches found" and is
    /// distinct from `Error`.
    Matches(MatchListing),
    History(Vec<HistoryEntry>),
    AuthRequired,
    Error {
        message: String,
    },
}

/// Which request is currently in flight, if any. While set, further match
/// and history clicks are ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum PendingRequest {
    Match,
    History,
}

/// Controller policy knobs, fixed at construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PopupOptions {
    /// When set, an empty folder reference is rejected before any request.
    /// Off by default: an empty reference means "search the entire scope".
    pub require_folder_reference: bool,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct PopupState {
    result: ResultView,
    image: Option<ImageSelection>,
    folder_input: String,
    pending: Option<PendingRequest>,
    options: PopupOptions,
    dirty: bool,
}

impl PopupState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(options: PopupOptions) -> Self {
        Self {
            options,
            ..Self::default()
        }
    }

    pub fn view(&self) -> PopupViewModel {
        PopupViewModel::project(&self.result, self.pending.is_some())
    }

    /// Returns whether the visible state changed since the last call and
    /// clears the flag. Rendering the same view twice is a no-op for the
    /// shell, so it only re-renders when this reports true.
    pub fn consume_dirty(&mut self) -> bool {
        let was_dirty = self.dirty;
        self.dirty = false;
        was_dirty
    }

    pub(crate) fn image(&self) -> Option<&ImageSelection> {
        self.image.as_ref()
    }

    pub(crate) fn set_image(&mut self, selection: ImageSelection) {
        self.image = Some(selection);
    }

    pub(crate) fn folder_input(&self) -> &str {
        &self.folder_input
    }

    pub(crate) fn set_folder_input(&mut self, text: String) {
        self.folder_input = text;
    }

    pub(crate) fn options(&self) -> PopupOptions {
        self.options
    }

    pub(crate) fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Local validation failure: surfaced like any other error, but no
    /// request was (or will be) issued for it.
    pub(crate) fn fail_validation(&mut self, message: &str) {
        self.transition(ResultView::Error {
            message: message.to_string(),
        });
    }

    /// Enter `Loading` and mark the match request pending. The loading view
    /// replaces prior content before the request is issued.
    pub(crate) fn begin_match(&mut self) {
        self.pending = Some(PendingRequest::Match);
        self.transition(ResultView::Loading {
            message: "searching".to_string(),
        });
    }

    /// Mark the history request pending. The prior result stays visible
    /// until the response arrives; only the busy flag changes.
    pub(crate) fn begin_history(&mut self) {
        self.pending = Some(PendingRequest::History);
        self.dirty = true;
    }

    pub(crate) fn apply_match_result(&mut self, result: Result<MatchListing, RequestFailure>) {
        if !self.finish(PendingRequest::Match) {
            return;
        }
        match result {
            Ok(listing) => self.transition(ResultView::Matches(listing)),
            Err(failure) => self.apply_failure(failure),
        }
    }

    pub(crate) fn apply_history_result(
        &mut self,
        result: Result<Vec<HistoryEntry>, RequestFailure>,
    ) {
        if !self.finish(PendingRequest::History) {
            return;
        }
        match result {
            Ok(entries) => self.transition(ResultView::History(entries)),
            Err(failure) => self.apply_failure(failure),
        }
    }

    /// Outcome of the best-effort auth probe issued when the popup opens.
    /// Only flips an untouched popup to the sign-in prompt; once the user
    /// has started a workflow the probe result is stale and dropped.
    pub(crate) fn apply_auth_probe(&mut self, authenticated: bool) {
        if !authenticated && self.pending.is_none() && self.result == ResultView::Idle {
            self.transition(ResultView::AuthRequired);
        }
    }

    fn apply_failure(&mut self, failure: RequestFailure) {
        match failure {
            RequestFailure::AuthRequired => self.transition(ResultView::AuthRequired),
            RequestFailure::Failed { message } => self.transition(ResultView::Error { message }),
        }
    }

    /// Clears the pending marker if `kind` matches the request in flight.
    /// A completion for anything else is stale and must not touch the view.
    fn finish(&mut self, kind: PendingRequest) -> bool {
        if self.pending == Some(kind) {
            self.pending = None;
            self.dirty = true;
            true
        } else {
            false
        }
    }

    fn transition(&mut self, next: ResultView) {
        self.result = next;
        self.dirty = true;
    }
}
