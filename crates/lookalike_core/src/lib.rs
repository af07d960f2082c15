//! Lookalike core: pure popup state machine and view-model helpers.
mod effect;
mod folder;
mod msg;
mod state;
mod update;
mod view_model;

pub use effect::Effect;
pub use folder::normalize_folder_reference;
pub use msg::Msg;
pub use state::{
    HistoryEntry, ImageSelection, MatchListing, MatchResult, PopupOptions, PopupState,
    RequestFailure,
};
pub use update::update;
pub use view_model::{HistoryRowView, MatchRowView, PopupViewModel, ResultPane};
