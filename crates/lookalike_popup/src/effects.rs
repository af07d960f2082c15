use lookalike_client::{ClientEvent, ClientHandle, ClientSettings, ImageUpload};
use lookalike_core::{Effect, HistoryEntry, MatchListing, MatchResult, Msg, RequestFailure};
use popup_logging::popup_info;

/// Outward navigation seam. The embedding browser opens the sign-in page in
/// a new tab; tests substitute a recorder.
pub trait Navigator: Send {
    fn open(&mut self, url: &str);
}

pub(crate) fn run_effects(
    effects: Vec<Effect>,
    client: &ClientHandle,
    settings: &ClientSettings,
    navigator: &mut dyn Navigator,
) {
    for effect in effects {
        match effect {
            Effect::OpenSignIn => {
                let url = settings.sign_in_url();
                popup_info!("opening sign-in page {url}");
                navigator.open(&url);
            }
            Effect::SubmitImage { image, folder_id } => {
                popup_info!(
                    "submitting match file={:?} folder_id={:?}",
                    image.file_name,
                    folder_id
                );
                let upload = ImageUpload {
                    file_name: image.file_name,
                    bytes: image.bytes,
                };
                client.submit_match(upload, folder_id);
            }
            Effect::FetchHistory => {
                popup_info!("fetching search history");
                client.fetch_history();
            }
            Effect::CheckAuth => {
                client.check_auth();
            }
        }
    }
}

/// Translates a client completion into the controller message it answers.
pub(crate) fn event_to_msg(event: ClientEvent) -> Msg {
    match event {
        ClientEvent::MatchFinished(result) => Msg::MatchFinished(
            result
                .map(listing_from_response)
                .map_err(failure_from_error),
        ),
        ClientEvent::HistoryFinished(result) => Msg::HistoryFinished(
            result
                .map(|entries| entries.into_iter().map(history_from_entry).collect())
                .map_err(failure_from_error),
        ),
        ClientEvent::AuthChecked(result) => Msg::AuthChecked(result.map_err(failure_from_error)),
    }
}

fn listing_from_response(response: lookalike_client::MatchResponse) -> MatchListing {
    let total = response.total();
    MatchListing {
        matches: response
            .matches
            .into_iter()
            .map(match_from_result)
            .collect(),
        total,
    }
}

fn match_from_result(result: lookalike_client::MatchResult) -> MatchResult {
    MatchResult {
        name: result.name,
        score: result.score,
        link: result.link,
        thumbnail: result.thumbnail,
    }
}

fn history_from_entry(entry: lookalike_client::HistoryEntry) -> HistoryEntry {
    HistoryEntry {
        query_file: entry.query_file,
        matches: entry.matches.into_iter().map(match_from_result).collect(),
    }
}

fn failure_from_error(err: lookalike_client::RequestError) -> RequestFailure {
    match err.kind {
        lookalike_client::FailureKind::AuthRequired => RequestFailure::AuthRequired,
        lookalike_client::FailureKind::Service { .. } | lookalike_client::FailureKind::Transport => {
            RequestFailure::Failed {
                message: err.message,
            }
        }
    }
}
