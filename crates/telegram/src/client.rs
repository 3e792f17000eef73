//! Outbound Bot API calls and file retrieval.

use {
    bytes::Bytes,
    reqwest::Client,
    secrecy::{ExposeSecret, Secret},
    serde::Deserialize,
    serde_json::json,
    tracing::{debug, warn},
};

use crate::error::{Error, Result};

/// Bot API base URL.
const API_BASE: &str = "https://api.telegram.org";

/// HTTP client for the Bot API surface the relay uses.
#[derive(Clone)]
pub struct TelegramClient {
    http: Client,
    token: Secret<String>,
    api_base: String,
}

impl std::fmt::Debug for TelegramClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TelegramClient")
            .field("token", &"[REDACTED]")
            .field("api_base", &self.api_base)
            .finish()
    }
}

#[derive(Debug, Deserialize)]
struct GetFileResponse {
    #[serde(default)]
    ok: bool,
    #[serde(default)]
    result: Option<FileInfo>,
}

#[derive(Debug, Deserialize)]
struct FileInfo {
    #[serde(default)]
    file_path: Option<String>,
}

impl TelegramClient {
    #[must_use]
    pub fn new(token: Secret<String>) -> Self {
        Self {
            http: Client::new(),
            token,
            api_base: API_BASE.into(),
        }
    }

    /// Override the API base URL (local Bot API servers, tests).
    #[must_use]
    pub fn with_api_base(mut self, api_base: impl Into<String>) -> Self {
        self.api_base = api_base.into();
        self
    }

    fn api_url(&self, method: &str) -> String {
        format!("{}/bot{}/{method}", self.api_base, self.token.expose_secret())
    }

    /// Send a text message, optionally threaded as a reply.
    pub async fn send_message(
        &self,
        chat_id: i64,
        text: &str,
        reply_to: Option<i64>,
    ) -> Result<()> {
        let mut body = json!({ "chat_id": chat_id, "text": text });
        if let Some(message_id) = reply_to {
            body["reply_to_message_id"] = message_id.into();
        }

        let response = self
            .http
            .post(self.api_url("sendMessage"))
            .json(&body)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(Error::Api {
                method: "sendMessage",
                status: response.status(),
            });
        }
        Ok(())
    }

    /// Show the "typing…" indicator in a chat.
    ///
    /// Best-effort: the indicator is cosmetic, so failures are logged at
    /// debug level and swallowed. Callers get no error to react to.
    pub async fn send_typing(&self, chat_id: i64) {
        let body = json!({ "chat_id": chat_id, "action": "typing" });
        match self
            .http
            .post(self.api_url("sendChatAction"))
            .json(&body)
            .send()
            .await
        {
            Ok(response) if !response.status().is_success() => {
                debug!(chat_id, status = %response.status(), "typing indicator rejected");
            },
            Err(e) => debug!(chat_id, error = %e, "typing indicator failed"),
            Ok(_) => {},
        }
    }

    /// Resolve a file id to a CDN download URL via `getFile`.
    ///
    /// Returns `None` for any failure (malformed id, expired file, platform
    /// outage): resolution failure is a recoverable condition the pipeline
    /// reports to the user, not an error to propagate.
    pub async fn resolve_file(&self, file_id: &str) -> Option<String> {
        let response = match self
            .http
            .post(self.api_url("getFile"))
            .json(&json!({ "file_id": file_id }))
            .send()
            .await
        {
            Ok(r) => r,
            Err(e) => {
                warn!(file_id, error = %e, "getFile request failed");
                return None;
            },
        };

        if !response.status().is_success() {
            warn!(file_id, status = %response.status(), "getFile returned non-success");
            return None;
        }

        let parsed: GetFileResponse = match response.json().await {
            Ok(p) => p,
            Err(e) => {
                warn!(file_id, error = %e, "getFile response unparsable");
                return None;
            },
        };

        if !parsed.ok {
            warn!(file_id, "getFile reported ok=false");
            return None;
        }

        let file_path = parsed.result.and_then(|r| r.file_path)?;
        Some(format!(
            "{}/file/bot{}/{file_path}",
            self.api_base,
            self.token.expose_secret()
        ))
    }

    /// Download a resolved file URL. Single attempt, fail fast.
    pub async fn download(&self, url: &str) -> Result<Bytes> {
        let response = self.http.get(url).send().await?;
        if !response.status().is_success() {
            return Err(Error::Download {
                status: response.status(),
            });
        }
        Ok(response.bytes().await?)
    }
}
