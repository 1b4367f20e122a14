use crate::config::{Config, API_PORT};
use crate::ports::outbound::{ApiResponse, DependencyTrackApi};
use crate::report_retrieval::domain::Endpoint;
use crate::shared::error::DtError;
use crate::shared::Result;
use reqwest::blocking::Client;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue, ACCEPT};
use reqwest::Url;
use std::net::Ipv6Addr;
use std::time::Duration;

/// Header carrying the API key on every request
pub const API_KEY_HEADER: &str = "x-api-key";

/// Blocking HTTP session against a Dependency-Track server
///
/// Holds the base URL and sends the API key on every request. The `Accept`
/// header is chosen per endpoint.
///
/// # Security
/// - The API key header is marked sensitive so it is never printed in debug output
/// - Every request is bounded by a timeout (30 seconds by default)
/// - Failed requests are not retried
pub struct DependencyTrackClient {
    client: Client,
    base_url: Url,
}

impl DependencyTrackClient {
    pub const DEFAULT_TIMEOUT_SECONDS: u64 = 30;

    /// Creates a session for the server named in the configuration
    ///
    /// # Errors
    /// Returns `ConnectionFailure` if the parsed URL does not point at the
    /// configured host on port 8081
    pub fn new(config: &Config, timeout: Duration) -> Result<Self> {
        let base_url = config.base_url();
        let client = Self::with_base_url(&base_url, config.api_key(), timeout)?;

        let host_matches = client
            .base_url
            .host_str()
            .is_some_and(|host| same_host(host, config.host_name()));
        if !host_matches || client.base_url.port() != Some(API_PORT) {
            return Err(DtError::ConnectionFailure {
                base_url,
                details: format!(
                    "host_name '{}' does not resolve to a URL on port {}",
                    config.host_name(),
                    API_PORT
                ),
            }
            .into());
        }

        Ok(client)
    }

    /// Creates a session for an explicit base URL such as `http://host:8081`
    ///
    /// # Errors
    /// Returns `ConnectionFailure` if the URL is malformed, the API key is
    /// not a valid header value, or the HTTP client cannot be built
    pub fn with_base_url(base_url: &str, api_key: &str, timeout: Duration) -> Result<Self> {
        let connection_failure = |details: String| DtError::ConnectionFailure {
            base_url: base_url.to_string(),
            details,
        };

        let url = Url::parse(base_url).map_err(|e| connection_failure(e.to_string()))?;
        if url.cannot_be_a_base() || url.host_str().is_none() {
            return Err(connection_failure("URL has no host".to_string()).into());
        }

        let mut api_key_value = HeaderValue::from_str(api_key).map_err(|_| {
            connection_failure(
                "API key contains characters not allowed in an HTTP header".to_string(),
            )
        })?;
        api_key_value.set_sensitive(true);

        let mut headers = HeaderMap::new();
        headers.insert(HeaderName::from_static(API_KEY_HEADER), api_key_value);

        let version = env!("CARGO_PKG_VERSION");
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(format!("dtrack-report/{}", version))
            .default_headers(headers)
            .build()
            .map_err(|e| connection_failure(e.to_string()))?;

        tracing::debug!(base_url = %url, timeout_secs = timeout.as_secs(), "session created");

        Ok(Self {
            client,
            base_url: url,
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    fn url_for(&self, endpoint: &Endpoint) -> Result<Url> {
        let mut url = self.base_url.join(&endpoint.path())?;
        let query = endpoint.query();
        if !query.is_empty() {
            url.query_pairs_mut().extend_pairs(query);
        }
        Ok(url)
    }
}

/// Compares a parsed URL host with the configured one; IPv6 literals by address
fn same_host(parsed: &str, configured: &str) -> bool {
    let ipv6 = |host: &str| {
        host.strip_prefix('[')
            .and_then(|rest| rest.strip_suffix(']'))
            .and_then(|literal| literal.parse::<Ipv6Addr>().ok())
    };
    match (ipv6(parsed), ipv6(configured)) {
        (Some(a), Some(b)) => a == b,
        _ => parsed.eq_ignore_ascii_case(configured),
    }
}

impl DependencyTrackApi for DependencyTrackClient {
    fn get(&self, endpoint: &Endpoint) -> Result<ApiResponse> {
        let url = self.url_for(endpoint)?;
        tracing::debug!(%endpoint, "sending request");

        let response = self
            .client
            .get(url)
            .header(ACCEPT, endpoint.accept())
            .send()?;
        let status = response.status().as_u16();
        // The whole body is read before anyone looks at it
        let body = response.bytes()?.to_vec();

        tracing::debug!(%endpoint, status, bytes = body.len(), "response received");
        Ok(ApiResponse::new(endpoint.clone(), status, body))
    }
}
