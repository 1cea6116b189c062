use crate::config::ClientConfig;
use crate::event::{Event, HistoryEntry, HistoryResponse, PublishResult};
use reqwest::header::CONTENT_TYPE;
use reqwest::{Client, RequestBuilder, Response, StatusCode, Url};
use serde_json::Value;
use tracing::{debug, info, warn};

mod error;

pub use error::ClientError;

/// Header carrying the application's API key
pub const API_KEY_HEADER: &str = "X-API-Key";

/// HTTP client for the realtime engine's channel API.
///
/// Holds immutable connection settings and a `reqwest::Client`. Each call is
/// a single request/response: no retries, no caching, no pagination.
///
/// # Example
/// ```no_run
/// use polyglot_client::{ClientConfig, EventClient};
/// use serde_json::json;
///
/// # async fn run() -> Result<(), polyglot_client::ClientError> {
/// let client = EventClient::new(ClientConfig::default());
/// let published = client
///     .publish("room:general", "message", json!({"text": "hi"}))
///     .await?;
/// println!("assigned id {}", published.id);
///
/// for entry in client.history("room:general").await? {
///     println!("- {:?}: {:?}", entry.event_type(), entry.data());
/// }
/// # Ok(())
/// # }
/// ```
pub struct EventClient {
    config: ClientConfig,
    http_client: Client,
}

impl EventClient {
    /// Create a client with its own HTTP transport.
    ///
    /// The config is taken as is; bad URLs or keys fail at request time.
    pub fn new(config: ClientConfig) -> Self {
        Self::with_http_client(config, Client::new())
    }

    /// Create a client on top of an existing `reqwest::Client` (shared pool,
    /// custom TLS, proxies).
    pub fn with_http_client(config: ClientConfig, http_client: Client) -> Self {
        Self {
            config,
            http_client,
        }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Handle bound to one channel
    pub fn channel(&self, name: impl Into<String>) -> Channel<'_> {
        Channel {
            client: self,
            name: name.into(),
        }
    }

    /// Publish an event to a channel.
    ///
    /// POST /apps/{app_id}/channels/{channel}/publish with body
    /// `{"type": ..., "data": ...}`. Returns the id the engine assigned.
    ///
    /// # Errors
    /// - `Api` if the engine answers with anything but 200
    /// - `Transport` / `InvalidUrl` if the engine cannot be reached
    /// - `Decode` if a 200 body has no `id`
    pub async fn publish(
        &self,
        channel: &str,
        event_type: &str,
        data: Value,
    ) -> Result<PublishResult, ClientError> {
        let url = self.channel_url(channel, "publish")?;
        let event = Event::new(event_type, data);

        debug!(
            channel = %channel,
            event_type = %event.event_type,
            url = %url,
            "Publishing event"
        );

        let request = self
            .http_client
            .post(url)
            .header(CONTENT_TYPE, "application/json")
            .json(&event);
        let body = self.send(request).await?;

        let result: PublishResult = serde_json::from_str(&body)?;
        debug!(channel = %channel, event_id = %result.id, "Event accepted");
        Ok(result)
    }

    /// Fetch a channel's event history, in the order the engine returns it.
    ///
    /// GET /apps/{app_id}/channels/{channel}/history. The `events` array is
    /// returned unmodified.
    pub async fn history(&self, channel: &str) -> Result<Vec<HistoryEntry>, ClientError> {
        let url = self.channel_url(channel, "history")?;

        debug!(channel = %channel, url = %url, "Fetching history");

        let body = self.send(self.http_client.get(url)).await?;
        let response: HistoryResponse = serde_json::from_str(&body)?;

        debug!(channel = %channel, event_count = response.events.len(), "History received");
        Ok(response.events)
    }

    /// Publish, logging the outcome instead of failing on engine rejections.
    ///
    /// Returns `Ok(None)` when the engine answers with a non-200 status.
    /// Transport and decode failures are still returned as errors.
    pub async fn publish_or_log(
        &self,
        channel: &str,
        event_type: &str,
        data: Value,
    ) -> Result<Option<String>, ClientError> {
        match self.publish(channel, event_type, data).await {
            Ok(result) => {
                info!(channel = %channel, "Published event: {}", result.id);
                Ok(Some(result.id))
            }
            Err(ClientError::Api { status, body }) => {
                warn!(channel = %channel, status = status, "Failed to publish: {}", body);
                Ok(None)
            }
            Err(e) => Err(e),
        }
    }

    /// Fetch history, returning an empty list when the engine rejects the
    /// request. An empty result does not distinguish "no events" from
    /// "rejected"; use `history` for that.
    pub async fn history_or_empty(&self, channel: &str) -> Result<Vec<HistoryEntry>, ClientError> {
        match self.history(channel).await {
            Ok(events) => Ok(events),
            Err(ClientError::Api { status, body }) => {
                warn!(channel = %channel, status = status, "Failed to get history: {}", body);
                Ok(Vec::new())
            }
            Err(e) => Err(e),
        }
    }

    /// {base_url}/apps/{app_id}/channels/{channel}/{action}
    ///
    /// Each piece is pushed as one path segment, so `/`, `?`, `#` and spaces
    /// in a channel name are percent-encoded. `:` is left as is.
    fn channel_url(&self, channel: &str, action: &str) -> Result<Url, ClientError> {
        let base = &self.config.base_url;
        let mut url = Url::parse(base).map_err(|e| ClientError::InvalidUrl {
            url: base.clone(),
            reason: e.to_string(),
        })?;

        url.path_segments_mut()
            .map_err(|_| ClientError::InvalidUrl {
                url: base.clone(),
                reason: "URL cannot carry a path".to_string(),
            })?
            .pop_if_empty()
            .extend([
                "apps",
                self.config.app_id.as_str(),
                "channels",
                channel,
                action,
            ]);

        Ok(url)
    }

    /// Attach auth, send once, and return the raw body of a 200 response.
    async fn send(&self, request: RequestBuilder) -> Result<String, ClientError> {
        let mut request = request.header(API_KEY_HEADER, self.config.api_key.as_str());
        if let Some(timeout) = self.config.timeout() {
            request = request.timeout(timeout);
        }

        let response = request.send().await?;
        read_ok_body(response).await
    }
}

/// Only 200 counts as success; any other status becomes `ClientError::Api`
/// with the raw body.
async fn read_ok_body(response: Response) -> Result<String, ClientError> {
    let status = response.status();
    let body = response.text().await?;

    if status != StatusCode::OK {
        return Err(ClientError::Api {
            status: status.as_u16(),
            body,
        });
    }

    Ok(body)
}

/// A channel-scoped view of an `EventClient`.
///
/// # Example
/// ```no_run
/// # use polyglot_client::{ClientConfig, EventClient};
/// # use serde_json::json;
/// # async fn run() -> Result<(), polyglot_client::ClientError> {
/// let client = EventClient::new(ClientConfig::default());
/// let general = client.channel("room:general");
/// general.publish("message", json!({"text": "hi"})).await?;
/// let events = general.history().await?;
/// # Ok(())
/// # }
/// ```
pub struct Channel<'a> {
    client: &'a EventClient,
    name: String,
}

impl Channel<'_> {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub async fn publish(&self, event_type: &str, data: Value) -> Result<PublishResult, ClientError> {
        self.client.publish(&self.name, event_type, data).await
    }

    pub async fn history(&self) -> Result<Vec<HistoryEntry>, ClientError> {
        self.client.history(&self.name).await
    }
}
