//! reqwest-backed [`Transport`] implementation.
//!
//! # Endpoints
//!
//! ```text
//! GET  {base}/chatbot/conversations/active/
//! POST {base}/chatbot/conversations/
//! GET  {base}/chatbot/conversations/{id}/
//! POST {base}/chatbot/conversations/{id}/send_message/   {"message": …}
//! GET  {base}/chatbot/conversations/
//! ```
//!
//! Status mapping: 401 is `Unauthenticated`; other non-2xx responses become
//! `Api` with the display message pulled from the backend's error envelope
//! (`error` or `detail`), falling back to the raw body. Network failures
//! are `Http`, body decode failures `Decode`.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::StatusCode;
use serde::Deserialize;
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::debug;

use scholia_core::models::{Conversation, ConversationPage};
use scholia_session::transport::{Transport, TransportError};

use crate::config::{RestConfig, TokenProvider};

/// Error envelope the backend returns on non-2xx responses.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: Option<String>,
    detail: Option<String>,
}

#[derive(Debug, Serialize)]
struct SendMessageBody<'a> {
    message: &'a str,
}

/// HTTP transport for the Scholia backend.
pub struct RestTransport {
    http: reqwest::Client,
    config: RestConfig,
    tokens: Box<dyn TokenProvider>,
}

impl RestTransport {
    /// # Panics
    ///
    /// Panics if the reqwest client cannot be built.
    pub fn new(config: RestConfig, tokens: impl TokenProvider + 'static) -> Self {
        Self {
            http: reqwest::Client::builder()
                .connect_timeout(Duration::from_secs(5))
                .timeout(config.timeout)
                .build()
                .expect("reqwest client"),
            config,
            tokens: Box::new(tokens),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.config.base_url)
    }

    fn authorize(&self, request: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        match self.tokens.token() {
            Some(token) => request.bearer_auth(token),
            None => request,
        }
    }

    async fn get<O: DeserializeOwned>(&self, path: &str) -> Result<O, TransportError> {
        debug!(path, "GET");
        let response = self
            .authorize(self.http.get(self.url(path)))
            .send()
            .await
            .map_err(|e| TransportError::Http(e.to_string()))?;
        decode(response).await
    }

    async fn post<I, O>(&self, path: &str, body: &I) -> Result<O, TransportError>
    where
        I: Serialize + Sync,
        O: DeserializeOwned,
    {
        debug!(path, "POST");
        let response = self
            .authorize(self.http.post(self.url(path)))
            .json(body)
            .send()
            .await
            .map_err(|e| TransportError::Http(e.to_string()))?;
        decode(response).await
    }
}

async fn decode<O: DeserializeOwned>(response: reqwest::Response) -> Result<O, TransportError> {
    let status = response.status();
    let bytes = response
        .bytes()
        .await
        .map_err(|e| TransportError::Http(e.to_string()))?;

    if status == StatusCode::UNAUTHORIZED {
        return Err(TransportError::Unauthenticated);
    }
    if !status.is_success() {
        return Err(TransportError::Api {
            status: status.as_u16(),
            message: error_message(&bytes),
        });
    }

    Ok(serde_json::from_slice(&bytes)?)
}

/// The display message from the backend's error envelope, falling back to
/// the raw body.
fn error_message(bytes: &[u8]) -> String {
    if let Ok(body) = serde_json::from_slice::<ErrorBody>(bytes) {
        if let Some(message) = body.error.or(body.detail) {
            return message;
        }
    }
    String::from_utf8_lossy(bytes).into_owned()
}

#[async_trait]
impl Transport for RestTransport {
    async fn active_conversation(&self) -> Result<Conversation, TransportError> {
        self.get("/chatbot/conversations/active/").await
    }

    async fn create_conversation(&self) -> Result<Conversation, TransportError> {
        self.post("/chatbot/conversations/", &serde_json::json!({}))
            .await
    }

    async fn conversation(&self, conversation_id: &str) -> Result<Conversation, TransportError> {
        self.get(&format!("/chatbot/conversations/{conversation_id}/"))
            .await
    }

    async fn send_message(
        &self,
        conversation_id: &str,
        text: &str,
    ) -> Result<Conversation, TransportError> {
        self.post(
            &format!("/chatbot/conversations/{conversation_id}/send_message/"),
            &SendMessageBody { message: text },
        )
        .await
    }

    async fn list_conversations(&self) -> Result<ConversationPage, TransportError> {
        self.get("/chatbot/conversations/").await
    }
}
