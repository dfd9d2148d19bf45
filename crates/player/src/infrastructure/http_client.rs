//! reqwest client for the remote character store

use reqwest::{Client, Response};

use charbuild_domain::CharacterCollection;
use charbuild_shared::{character_path, FetchCharactersResponse, Owner, ServerAck};

use crate::config::PlayerConfig;
use crate::ports::outbound::{CharacterStorePort, TransportError};

/// Client for `{base}/{owner}/character`
#[derive(Clone)]
pub struct HttpCharacterStore {
    client: Client,
    base_url: String,
    owner: Owner,
}

impl HttpCharacterStore {
    pub fn new(base_url: &str, owner: Owner) -> Self {
        Self::with_client(Client::new(), base_url, owner)
    }

    /// Create a client whose requests give up after `timeout_secs`.
    ///
    /// Browsers own request timeouts on wasm, so the value is ignored there.
    pub fn with_timeout(base_url: &str, owner: Owner, timeout_secs: u64) -> Self {
        #[cfg(not(target_arch = "wasm32"))]
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(timeout_secs))
            .build()
            .unwrap_or_else(|_| Client::new());

        #[cfg(target_arch = "wasm32")]
        let client = {
            let _ = timeout_secs;
            Client::new()
        };

        Self::with_client(client, base_url, owner)
    }

    pub fn from_config(config: &PlayerConfig) -> Self {
        Self::with_timeout(
            &config.api_base_url,
            config.owner.clone(),
            config.http_timeout_secs,
        )
    }

    fn with_client(client: Client, base_url: &str, owner: Owner) -> Self {
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            owner,
        }
    }

    /// Full URL of the owner's roster.
    pub fn roster_url(&self) -> String {
        format!("{}{}", self.base_url, character_path(&self.owner))
    }
}

impl Default for HttpCharacterStore {
    fn default() -> Self {
        Self::from_config(&PlayerConfig::default())
    }
}

/// Pass a successful response through; turn any other into `HttpStatus`.
async fn check_status(response: Response) -> Result<Response, TransportError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let body = response
        .text()
        .await
        .map_err(|e| TransportError::RequestFailed(e.to_string()))?;
    Err(TransportError::HttpStatus {
        status: status.as_u16(),
        body,
    })
}

fn send_error(e: reqwest::Error) -> TransportError {
    if e.is_builder() {
        TransportError::SerializeError(e.to_string())
    } else {
        TransportError::RequestFailed(e.to_string())
    }
}

#[cfg_attr(not(target_arch = "wasm32"), async_trait::async_trait)]
#[cfg_attr(target_arch = "wasm32", async_trait::async_trait(?Send))]
impl CharacterStorePort for HttpCharacterStore {
    async fn save_all(&self, roster: &CharacterCollection) -> Result<ServerAck, TransportError> {
        let response = self
            .client
            .post(self.roster_url())
            .json(roster)
            .send()
            .await
            .map_err(send_error)?;

        let body = check_status(response)
            .await?
            .text()
            .await
            .map_err(|e| TransportError::RequestFailed(e.to_string()))?;
        let ack = ServerAck::from_body(&body);

        tracing::debug!(owner = %self.owner, records = roster.len(), "Saved roster");
        Ok(ack)
    }

    async fn fetch_all(&self) -> Result<CharacterCollection, TransportError> {
        let response = self
            .client
            .get(self.roster_url())
            .send()
            .await
            .map_err(send_error)?;

        let envelope: FetchCharactersResponse = check_status(response)
            .await?
            .json()
            .await
            .map_err(|e| TransportError::ParseError(e.to_string()))?;

        tracing::debug!(
            owner = %self.owner,
            records = envelope.body.len(),
            status_code = ?envelope.status_code,
            "Fetched roster"
        );
        Ok(envelope.body)
    }
}
