use std::sync::{mpsc, Arc};
use std::thread;

use popup_logging::{popup_debug, popup_warn};

use crate::client::{ClientSettings, MatchClient, ReqwestMatchClient};
use crate::{HistoryEntry, ImageUpload, MatchResponse, RequestError};

enum ClientCommand {
    SubmitMatch { image: ImageUpload, folder_id: String },
    FetchHistory,
    CheckAuth,
}

/// Completion events drained by the popup's event loop.
#[derive(Debug, Clone, PartialEq)]
pub enum ClientEvent {
    MatchFinished(Result<MatchResponse, RequestError>),
    HistoryFinished(Result<Vec<HistoryEntry>, RequestError>),
    AuthChecked(Result<bool, RequestError>),
}

/// Bridge between the synchronous popup loop and the async HTTP client. A
/// dedicated thread owns the tokio runtime; commands go in over a channel
/// and completions come back over another, polled with `try_recv`.
pub struct ClientHandle {
    cmd_tx: mpsc::Sender<ClientCommand>,
    event_rx: mpsc::Receiver<ClientEvent>,
}

impl ClientHandle {
    pub fn new(settings: ClientSettings) -> Result<Self, RequestError> {
        let (cmd_tx, cmd_rx) = mpsc::channel();
        let (event_tx, event_rx) = mpsc::channel();
        let client = Arc::new(ReqwestMatchClient::new(settings)?);

        thread::spawn(move || {
            let runtime = tokio::runtime::Runtime::new().expect("tokio runtime");
            while let Ok(command) = cmd_rx.recv() {
                let client = client.clone();
                let event_tx = event_tx.clone();
                runtime.spawn(async move {
                    handle_command(client.as_ref(), command, event_tx).await;
                });
            }
        });

        Ok(Self { cmd_tx, event_rx })
    }

    pub fn submit_match(&self, image: ImageUpload, folder_id: impl Into<String>) {
        let _ = self.cmd_tx.send(ClientCommand::SubmitMatch {
            image,
            folder_id: folder_id.into(),
        });
    }

    pub fn fetch_history(&self) {
        let _ = self.cmd_tx.send(ClientCommand::FetchHistory);
    }

    pub fn check_auth(&self) {
        let _ = self.cmd_tx.send(ClientCommand::CheckAuth);
    }

    pub fn try_recv(&self) -> Option<ClientEvent> {
        self.event_rx.try_recv().ok()
    }
}

async fn handle_command(
    client: &dyn MatchClient,
    command: ClientCommand,
    event_tx: mpsc::Sender<ClientEvent>,
) {
    match command {
        ClientCommand::SubmitMatch { image, folder_id } => {
            popup_debug!(
                "submitting match file={:?} folder_id={:?}",
                image.file_name,
                folder_id
            );
            let result = client.submit_match(image, &folder_id).await;
            if let Err(err) = &result {
                popup_warn!("match request failed: {err}");
            }
            let _ = event_tx.send(ClientEvent::MatchFinished(result));
        }
        ClientCommand::FetchHistory => {
            popup_debug!("fetching history");
            let result = client.fetch_history().await;
            if let Err(err) = &result {
                popup_warn!("history request failed: {err}");
            }
            let _ = event_tx.send(ClientEvent::HistoryFinished(result));
        }
        ClientCommand::CheckAuth => {
            let result = client.auth_status().await;
            if let Err(err) = &result {
                popup_debug!("auth probe failed: {err}");
            }
            let _ = event_tx.send(ClientEvent::AuthChecked(result));
        }
    }
}
