use crate::folder::normalize_folder_reference;
use crate::{Effect, Msg, PopupState};

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: PopupState, msg: Msg) -> (PopupState, Vec<Effect>) {
    let effects = match msg {
        Msg::Opened => vec![Effect::CheckAuth],
        Msg::ImagePicked(selection) => {
            state.set_image(selection);
            Vec::new()
        }
        Msg::FolderInputChanged(text) => {
            state.set_folder_input(text);
            Vec::new()
        }
        // Fire-and-forget navigation; the popup state does not change.
        Msg::SignInClicked => vec![Effect::OpenSignIn],
        Msg::MatchClicked => {
            if state.is_pending() {
                return (state, Vec::new());
            }
            let Some(image) = state.image().cloned() else {
                state.fail_validation("no file selected");
                return (state, Vec::new());
            };
            let folder_id = normalize_folder_reference(state.folder_input());
            if state.options().require_folder_reference && folder_id.is_empty() {
                state.fail_validation("no folder reference given");
                return (state, Vec::new());
            }
            state.begin_match();
            vec![Effect::SubmitImage { image, folder_id }]
        }
        Msg::HistoryClicked => {
            if state.is_pending() {
                return (state, Vec::new());
            }
            state.begin_history();
            vec![Effect::FetchHistory]
        }
        Msg::MatchFinished(result) => {
            state.apply_match_result(result);
            Vec::new()
        }
        Msg::HistoryFinished(result) => {
            state.apply_history_result(result);
            Vec::new()
        }
        Msg::AuthChecked(result) => {
            // A failed probe is logged by the shell and otherwise ignored;
            // the popup stays interactive either way.
            if let Ok(authenticated) = result {
                state.apply_auth_probe(authenticated);
            }
            Vec::new()
        }
    };

    (state, effects)
}
