#[derive(Debug, Clone, PartialEq)]
pub enum Msg {
    /// Popup became visible; kicks off the best-effort auth probe.
    Opened,
    /// User picked an image in the file chooser.
    ImagePicked(crate::ImageSelection),
    /// User edited the folder reference input box.
    FolderInputChanged(String),
    /// User clicked the sign-in button.
    SignInClicked,
    /// User clicked the match button with the inputs currently held.
    MatchClicked,
    /// User clicked the history button.
    HistoryClicked,
    /// The match request completed.
    MatchFinished(Result<crate::MatchListing, crate::RequestFailure>),
    /// The history request completed.
    HistoryFinished(Result<Vec<crate::HistoryEntry>, crate::RequestFailure>),
    /// The auth probe completed with the reported session state.
    AuthChecked(Result<bool, crate::RequestFailure>),
}
