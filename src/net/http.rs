use std::io::Read as _;
use std::time::Duration;

use crate::foundation::error::FetchError;

/// Upper bound on a single upstream response body.
pub const MAX_BODY_BYTES: u64 = 32 * 1024 * 1024;

/// Options for [`HttpClient`].
#[derive(Clone, Debug)]
pub struct HttpSourceOpts {
    /// Whole-request timeout applied to every upstream call.
    pub timeout: Duration,
    /// Value of the `User-Agent` header.
    pub user_agent: String,
}

impl Default for HttpSourceOpts {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(10),
            user_agent: concat!("outfit-card/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }
}

/// Blocking HTTP client shared by the account and image sources.
///
/// One attempt per call; failures are mapped to [`FetchError`] and never retried.
#[derive(Clone, Debug)]
pub struct HttpClient {
    agent: ureq::Agent,
}

impl HttpClient {
    /// Build a client from options.
    pub fn new(opts: &HttpSourceOpts) -> Self {
        let agent = ureq::AgentBuilder::new()
            .timeout(opts.timeout)
            .user_agent(&opts.user_agent)
            .build();
        Self { agent }
    }

    /// GET `url` and return the full body.
    pub fn get_bytes(&self, url: &str) -> Result<Vec<u8>, FetchError> {
        let resp = self.agent.get(url).call().map_err(map_ureq_error)?;
        let mut buf = Vec::new();
        resp.into_reader()
            .take(MAX_BODY_BYTES)
            .read_to_end(&mut buf)
            .map_err(|e| FetchError::Body(e.to_string()))?;
        Ok(buf)
    }
}

impl Default for HttpClient {
    fn default() -> Self {
        Self::new(&HttpSourceOpts::default())
    }
}

fn map_ureq_error(err: ureq::Error) -> FetchError {
    match err {
        ureq::Error::Status(code, _) => FetchError::Status(code),
        ureq::Error::Transport(t) => FetchError::Transport(t.to_string()),
    }
}
