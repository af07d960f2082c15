//! Lookalike client: HTTP access to the image matching service.
mod client;
mod handle;
mod types;

pub use client::{ClientSettings, MatchClient, ReqwestMatchClient};
pub use handle::{ClientEvent, ClientHandle};
pub use types::{FailureKind, HistoryEntry, ImageUpload, MatchResponse, MatchResult, RequestError};
