use crate::account::snapshot::AccountSnapshot;
use crate::foundation::error::FetchError;
use crate::net::endpoints::Endpoints;
use crate::net::http::HttpClient;

/// Source of account metadata.
pub trait AccountSource: Send + Sync {
    /// Look up one account. Exactly one upstream attempt.
    fn fetch(&self, uid: &str, region: &str) -> Result<AccountSnapshot, FetchError>;
}

/// [`AccountSource`] backed by the player-info HTTP API.
#[derive(Clone, Debug)]
pub struct HttpAccountSource {
    client: HttpClient,
    endpoints: Endpoints,
}

impl HttpAccountSource {
    /// Create a source that queries `endpoints.player_info`.
    pub fn new(client: HttpClient, endpoints: Endpoints) -> Self {
        Self { client, endpoints }
    }
}

impl AccountSource for HttpAccountSource {
    #[tracing::instrument(level = "debug", skip(self))]
    fn fetch(&self, uid: &str, region: &str) -> Result<AccountSnapshot, FetchError> {
        let url = self.endpoints.player_info_url(uid, region);
        let body = self.client.get_bytes(&url)?;
        AccountSnapshot::from_json(&body)
    }
}
