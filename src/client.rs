//! HTTP client for the remote suggestion endpoint.
//!
//! The endpoint contract is
//! `GET {base}/search-suggestions?type={category}&q={query}` returning a JSON
//! array of strings, ordered, possibly empty. There is no pagination and no
//! error envelope; any non-2xx status or non-parseable body is a failure.
//!
//! The client applies no request timeout: a slow lookup only delays the
//! render it belongs to, it never fails it.

use thiserror::Error;
use url::Url;

/// Errors from a suggestion lookup.
#[derive(Debug, Error)]
pub enum Error {
    /// The configured base address is not a valid URL.
    #[error("invalid suggestion endpoint: {0}")]
    InvalidEndpoint(#[from] url::ParseError),
    /// The base URL cannot carry a path (e.g. `data:` URLs).
    #[error("suggestion endpoint cannot carry a path: {0}")]
    NotABase(Url),
    /// The request failed, returned a non-2xx status, or the body was not a
    /// JSON array of strings.
    #[error("suggestion request failed: {0}")]
    Request(#[from] reqwest::Error),
}

/// A client for one suggestion endpoint, shared by clones across widgets.
///
/// # Examples
///
/// ```rust,no_run
/// use bubbletea_suggest::client::SuggestClient;
///
/// # async fn demo() -> Result<(), bubbletea_suggest::client::Error> {
/// let client = SuggestClient::new("https://shop.example.com")?;
/// let suggestions = client.fetch("brand", "mer").await?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct SuggestClient {
    http: reqwest::Client,
    base: Url,
}

impl SuggestClient {
    /// Creates a client for the endpoint rooted at `base`.
    pub fn new(base: impl AsRef<str>) -> Result<Self, Error> {
        let base = Url::parse(base.as_ref())?;
        if base.cannot_be_a_base() {
            return Err(Error::NotABase(base));
        }
        Ok(Self {
            http: reqwest::Client::new(),
            base,
        })
    }

    /// Returns the configured base URL.
    pub fn base(&self) -> &Url {
        &self.base
    }

    /// Fetches suggestions for `query` within `category`.
    ///
    /// The result order is the endpoint's; the caller renders it as-is.
    pub async fn fetch(&self, category: &str, query: &str) -> Result<Vec<String>, Error> {
        let url = self.endpoint(category, query);
        tracing::debug!(%url, "fetching suggestions");

        let suggestions: Vec<String> = self
            .http
            .get(url)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        tracing::debug!(count = suggestions.len(), "suggestions received");
        Ok(suggestions)
    }

    fn endpoint(&self, category: &str, query: &str) -> Url {
        let mut url = self.base.clone();
        // cannot_be_a_base was rejected in new(), so path_segments_mut succeeds
        if let Ok(mut segments) = url.path_segments_mut() {
            segments.pop_if_empty().push("search-suggestions");
        }
        url.query_pairs_mut()
            .append_pair("type", category)
            .append_pair("q", query);
        url
    }
}
