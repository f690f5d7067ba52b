//! The TCGdex client and builder.

use std::fmt;
use std::time::Duration;

use reqwest::Client;
use serde::{Serialize, de::DeserializeOwned};
use url::Url;

use crate::actions::{CardActions, ListActions, SerieActions, SetActions};
use crate::error::{Error, Result};
use crate::query;
use crate::response::decode;

/// Root of the public TCGdex REST API; the language code is appended.
const API_ROOT: &str = "https://api.tcgdex.net/v2";

/// Default timeout for requests.
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Languages served by TCGdex.
///
/// The language decides which localized card database answers, so card
/// names and texts come back in that language.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Language {
    #[default]
    En,
    Fr,
    Es,
    It,
    Pt,
    De,
    Nl,
    Pl,
    Ru,
    Ja,
    Ko,
    ZhTw,
    ZhCn,
    Id,
    Th,
}

impl Language {
    /// The code used in API paths, e.g. `en` or `zh-tw`.
    pub fn as_str(&self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Fr => "fr",
            Language::Es => "es",
            Language::It => "it",
            Language::Pt => "pt",
            Language::De => "de",
            Language::Nl => "nl",
            Language::Pl => "pl",
            Language::Ru => "ru",
            Language::Ja => "ja",
            Language::Ko => "ko",
            Language::ZhTw => "zh-tw",
            Language::ZhCn => "zh-cn",
            Language::Id => "id",
            Language::Th => "th",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The main client for the TCGdex API.
///
/// Cloning is cheap; clones share the underlying connection pool.
///
/// # Example
///
/// ```no_run
/// use tcgdex::{CardQueryOptions, TcgdexClient};
///
/// # async fn example() -> tcgdex::Result<()> {
/// let client = TcgdexClient::new()?;
///
/// let card = client.cards().get("swsh3-136").await?;
/// println!("{} from {}", card.name, card.set.name);
///
/// let pikachus = client
///     .cards()
///     .search(&CardQueryOptions::new().name("pikachu"))
///     .await?;
/// println!("{} Pikachu cards", pikachus.len());
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct TcgdexClient {
    http_client: Client,
    base_url: String,
}

impl TcgdexClient {
    /// Create a new client with default settings.
    ///
    /// Talks to `https://api.tcgdex.net/v2/en` with a 30 second timeout.
    pub fn new() -> Result<Self> {
        Self::builder().build()
    }

    /// Create a builder for custom client configuration.
    pub fn builder() -> ClientBuilder {
        ClientBuilder::new()
    }

    /// The base URL every request path is appended to.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Access card operations.
    pub fn cards(&self) -> CardActions<'_> {
        CardActions { client: self }
    }

    /// Access set operations.
    pub fn sets(&self) -> SetActions<'_> {
        SetActions { client: self }
    }

    /// Access serie operations.
    pub fn series(&self) -> SerieActions<'_> {
        SerieActions { client: self }
    }

    /// Access the value lists (types, rarities, illustrators...).
    pub fn lists(&self) -> ListActions<'_> {
        ListActions { client: self }
    }

    /// GET the endpoint made of `segments` and decode the response.
    pub(crate) async fn invoke<R>(&self, operation: &'static str, segments: &[&str]) -> Result<R>
    where
        R: DeserializeOwned,
    {
        let url = self.endpoint(operation, segments, "")?;
        self.send_request(operation, url).await
    }

    /// GET the endpoint with `options` encoded as the query string and decode the response.
    pub(crate) async fn invoke_with_query<Q, R>(
        &self,
        operation: &'static str,
        segments: &[&str],
        options: &Q,
    ) -> Result<R>
    where
        Q: Serialize,
        R: DeserializeOwned,
    {
        let query =
            query::encode(options).map_err(|source| Error::Encode { operation, source })?;
        let url = self.endpoint(operation, segments, &query)?;
        self.send_request(operation, url).await
    }

    /// Append `segments` to the base URL, one percent-encoded path segment each.
    fn endpoint(&self, operation: &'static str, segments: &[&str], query: &str) -> Result<Url> {
        if let Some(segment) = segments
            .iter()
            .find(|s| s.is_empty() || **s == "." || **s == "..")
        {
            return Err(Error::InvalidIdentifier {
                operation,
                identifier: segment.to_string(),
            });
        }

        let mut url =
            Url::parse(&self.base_url).map_err(|source| Error::InvalidUrl { operation, source })?;
        url.path_segments_mut()
            .map_err(|()| Error::InvalidUrl {
                operation,
                source: url::ParseError::RelativeUrlWithCannotBeABaseBase,
            })?
            .pop_if_empty()
            .extend(segments);

        if !query.is_empty() {
            url.set_query(Some(query));
        }
        Ok(url)
    }

    /// Send a GET request and run the body through the response decoder.
    async fn send_request<R>(&self, operation: &'static str, url: Url) -> Result<R>
    where
        R: DeserializeOwned,
    {
        tracing::debug!(operation, %url, "sending request");

        let response = self
            .http_client
            .get(url)
            .send()
            .await
            .map_err(|source| Error::Http { operation, source })?;

        let status = response.status();
        let body = response
            .bytes()
            .await
            .map_err(|source| Error::Http { operation, source })?;

        tracing::debug!(
            operation,
            status = status.as_u16(),
            bytes = body.len(),
            "received response"
        );

        decode(operation, status, &body)
    }
}

/// Builder for creating a customized [`TcgdexClient`].
///
/// # Example
///
/// ```no_run
/// use std::time::Duration;
/// use tcgdex::{Language, TcgdexClient};
///
/// # fn example() -> tcgdex::Result<()> {
/// let client = TcgdexClient::builder()
///     .language(Language::Fr)
///     .timeout(Duration::from_secs(5))
///     .build()?;
///
/// assert_eq!(client.base_url(), "https://api.tcgdex.net/v2/fr");
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct ClientBuilder {
    base_url: Option<String>,
    language: Language,
    timeout: Duration,
    http_client: Option<Client>,
}

impl ClientBuilder {
    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self {
            base_url: None,
            language: Language::default(),
            timeout: DEFAULT_TIMEOUT,
            http_client: None,
        }
    }

    /// Set an explicit base URL, e.g. a mirror or a test server.
    ///
    /// Takes precedence over [`language()`](Self::language).
    pub fn url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    /// Pick the language of the public API.
    ///
    /// Defaults to English.
    pub fn language(mut self, language: Language) -> Self {
        self.language = language;
        self
    }

    /// Set the request timeout.
    ///
    /// Defaults to 30 seconds. Ignored when a client is supplied through
    /// [`http_client()`](Self::http_client).
    pub fn timeout(mut self, duration: Duration) -> Self {
        self.timeout = duration;
        self
    }

    /// Use a preconfigured reqwest client as the transport.
    pub fn http_client(mut self, client: Client) -> Self {
        self.http_client = Some(client);
        self
    }

    /// Build the client.
    pub fn build(self) -> Result<TcgdexClient> {
        let http_client = match self.http_client {
            Some(client) => client,
            None => Client::builder()
                .timeout(self.timeout)
                .build()
                .map_err(|e| Error::Config(format!("failed to build HTTP client: {e}")))?,
        };

        let base_url = self
            .base_url
            .unwrap_or_else(|| format!("{API_ROOT}/{}", self.language));

        Ok(TcgdexClient {
            http_client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }
}

impl Default for ClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}
