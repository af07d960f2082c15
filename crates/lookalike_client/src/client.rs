use std::time::Duration;

use reqwest::multipart;
use serde::de::DeserializeOwned;

use crate::types::{AuthStatus, HistoryResponse};
use crate::{FailureKind, HistoryEntry, ImageUpload, MatchResponse, RequestError};

#[derive(Debug, Clone)]
pub struct ClientSettings {
    /// Base URL of the matching service, without a trailing slash.
    pub api_host: String,
    pub connect_timeout: Duration,
    pub request_timeout: Duration,
}

impl Default for ClientSettings {
    fn default() -> Self {
        Self {
            api_host: "http://127.0.0.1:8000".to_string(),
            connect_timeout: Duration::from_secs(10),
            request_timeout: Duration::from_secs(30),
        }
    }
}

impl ClientSettings {
    /// Provider sign-in page, opened in a fresh browsing context rather than
    /// called through this client.
    pub fn sign_in_url(&self) -> String {
        self.endpoint("login/")
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.api_host.trim_end_matches('/'), path)
    }
}

#[async_trait::async_trait]
pub trait MatchClient: Send + Sync {
    /// Submits an image plus normalized folder id and returns the ranked
    /// matches.
    async fn submit_match(
        &self,
        image: ImageUpload,
        folder_id: &str,
    ) -> Result<MatchResponse, RequestError>;

    /// Fetches the session's prior searches, in the order the service
    /// reports them.
    async fn fetch_history(&self) -> Result<Vec<HistoryEntry>, RequestError>;

    /// Reports whether the session credential is currently accepted.
    async fn auth_status(&self) -> Result<bool, RequestError>;
}

/// HTTP implementation backed by reqwest. A single underlying client is kept
/// for the whole session so the cookie jar carries the session credential
/// across requests.
#[derive(Debug, Clone)]
pub struct ReqwestMatchClient {
    settings: ClientSettings,
    client: reqwest::Client,
}

impl ReqwestMatchClient {
    pub fn new(settings: ClientSettings) -> Result<Self, RequestError> {
        let client = reqwest::Client::builder()
            .connect_timeout(settings.connect_timeout)
            .timeout(settings.request_timeout)
            .cookie_store(true)
            .build()
            .map_err(|err| RequestError::new(FailureKind::Transport, err.to_string()))?;
        Ok(Self { settings, client })
    }
}

#[async_trait::async_trait]
impl MatchClient for ReqwestMatchClient {
    async fn submit_match(
        &self,
        image: ImageUpload,
        folder_id: &str,
    ) -> Result<MatchResponse, RequestError> {
        let part = multipart::Part::bytes(image.bytes).file_name(image.file_name);
        let form = multipart::Form::new()
            .part("image", part)
            .text("folder_id", folder_id.to_string());

        let response = self
            .client
            .post(self.settings.endpoint("match-image/"))
            .multipart(form)
            .send()
            .await
            .map_err(map_reqwest_error)?;

        let body = classify(response).await?;
        parse_json::<MatchResponse>(&body)
    }

    async fn fetch_history(&self) -> Result<Vec<HistoryEntry>, RequestError> {
        let response = self
            .client
            .get(self.settings.endpoint("get-history/"))
            .send()
            .await
            .map_err(map_reqwest_error)?;

        let body = classify(response).await?;
        let parsed: HistoryResponse = parse_json(&body)?;
        Ok(parsed.history)
    }

    async fn auth_status(&self) -> Result<bool, RequestError> {
        let response = self
            .client
            .get(self.settings.endpoint("auth-status/"))
            .send()
            .await
            .map_err(map_reqwest_error)?;

        let body = classify(response).await?;
        let parsed: AuthStatus = parse_json(&body)?;
        Ok(parsed.authenticated)
    }
}

/// Sorts a response into the failure taxonomy. 401 wins outright, whatever
/// the body holds; any other non-success status carries its body text
/// verbatim so the popup can show exactly what the service said.
async fn classify(response: reqwest::Response) -> Result<String, RequestError> {
    let status = response.status();
    if status == reqwest::StatusCode::UNAUTHORIZED {
        return Err(RequestError::new(FailureKind::AuthRequired, "not signed in"));
    }

    let body = response.text().await.map_err(map_reqwest_error)?;
    if !status.is_success() {
        return Err(RequestError::new(
            FailureKind::Service {
                status: status.as_u16(),
            },
            body,
        ));
    }
    Ok(body)
}

fn parse_json<T: DeserializeOwned>(body: &str) -> Result<T, RequestError> {
    serde_json::from_str(body).map_err(|err| {
        RequestError::new(FailureKind::Transport, format!("malformed response: {err}"))
    })
}

fn map_reqwest_error(err: reqwest::Error) -> RequestError {
    RequestError::new(FailureKind::Transport, err.to_string())
}
