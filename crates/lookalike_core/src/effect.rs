#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Open the provider sign-in page in a new browsing context.
    OpenSignIn,
    /// Submit the image to the matching service. `folder_id` is already
    /// normalized and may be empty (search the entire scope).
    SubmitImage {
        image: crate::ImageSelection,
        folder_id: String,
    },
    /// Request the session's search history.
    FetchHistory,
    /// Probe whether the session credential is still valid.
    CheckAuth,
}
