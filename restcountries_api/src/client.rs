//! HTTP client for the REST Countries API.

use std::time::Duration;

use url::Url;

use crate::{
    config::ClientConfig,
    query::{
        AllQuery, CallingCodeQuery, CapitalQuery, CodesQuery, CurrencyQuery, LanguageQuery,
        NameQuery, Query, RegionQuery, RegionalBlocQuery,
    },
    response::normalize,
    transport::{ReqwestTransport, Transport},
    types::Country,
    Error,
};

/// HTTP client for the REST Countries API.
///
/// Configuration is set before issuing queries; the query methods only take
/// `&self`, so a configured client can be shared across tasks.
pub struct Client<T = ReqwestTransport> {
    config: ClientConfig,
    transport: T,
}

impl Client {
    /// Creates a client for the production API using `api_key`.
    pub fn new(api_key: &str) -> Self {
        Self::from_config(ClientConfig {
            api_key: Some(api_key.to_string()),
            ..ClientConfig::default()
        })
    }

    /// Creates a client with a custom base URL. Used for testing with wiremock.
    pub fn with_base_url(base_url: &str, api_key: &str) -> Self {
        Self::from_config(ClientConfig {
            api_root: base_url.to_string(),
            api_key: Some(api_key.to_string()),
            timeout: None,
        })
    }

    /// Creates a client from an explicit configuration.
    pub fn from_config(config: ClientConfig) -> Self {
        Self::with_transport(config, ReqwestTransport)
    }
}

impl<T: Transport> Client<T> {
    /// Creates a client that sends requests through `transport`.
    pub fn with_transport(config: ClientConfig, transport: T) -> Self {
        Self { config, transport }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Overrides the API root URL.
    pub fn set_api_root(&mut self, api_root: &str) {
        self.config.api_root = api_root.to_string();
    }

    /// Overrides the request timeout. Zero disables the client-side deadline.
    pub fn set_timeout(&mut self, timeout: Duration) {
        self.config.timeout = Some(timeout);
    }

    /// Sets the access key. An empty key omits `access_key` from requests.
    pub fn set_api_key(&mut self, api_key: &str) {
        self.config.api_key = Some(api_key.to_string());
    }

    /// Builds the request URL for `query`: root, endpoint path, escaped
    /// search term, then `access_key` and the query's own parameters.
    pub fn build_url(&self, query: &impl Query) -> Result<Url, Error> {
        let root = &self.config.api_root;
        let invalid = |reason: String| Error::InvalidApiRoot {
            root: root.clone(),
            reason,
        };

        let mut url = Url::parse(root).map_err(|e| invalid(e.to_string()))?;
        {
            let mut segments = url
                .path_segments_mut()
                .map_err(|_| invalid("URL cannot be a base".to_string()))?;
            segments
                .pop_if_empty()
                .extend(query.endpoint().path().split('/').skip(1));
            if let Some(term) = query.search_term() {
                // `push` skips these, and `%2E` spellings are normalized away too.
                if matches!(term, "." | "..") {
                    return Err(Error::DotSegmentSearchTerm(term.to_string()));
                }
                segments.push(term);
            }
        }
        if let Some(key) = self.config.access_key() {
            url.query_pairs_mut().append_pair("access_key", key);
        }
        Ok(query.add_to_url(&url))
    }

    async fn get<Q: Query>(&self, query: &Q) -> Result<Vec<Country>, Error> {
        query.validate()?;
        let endpoint = query.endpoint();
        let url = self.build_url(query)?;
        tracing::debug!(
            "Querying {} endpoint{}",
            endpoint,
            query
                .search_term()
                .map(|term| format!(" for {:?}", term))
                .unwrap_or_default()
        );
        let body = self.transport.get(url, self.config.timeout).await?;
        normalize(&body, endpoint)
    }

    /// Fetches every country.
    pub async fn all(&self, query: &AllQuery) -> Result<Vec<Country>, Error> {
        self.get(query).await
    }

    /// Searches countries by name, optionally requiring an exact match.
    pub async fn name(&self, query: &NameQuery) -> Result<Vec<Country>, Error> {
        self.get(query).await
    }

    /// Searches countries by capital city.
    pub async fn capital(&self, query: &CapitalQuery) -> Result<Vec<Country>, Error> {
        self.get(query).await
    }

    /// Searches countries by currency code.
    pub async fn currency(&self, query: &CurrencyQuery) -> Result<Vec<Country>, Error> {
        self.get(query).await
    }

    /// Searches countries by language code.
    pub async fn language(&self, query: &LanguageQuery) -> Result<Vec<Country>, Error> {
        self.get(query).await
    }

    /// Searches countries by region.
    pub async fn region(&self, query: &RegionQuery) -> Result<Vec<Country>, Error> {
        self.get(query).await
    }

    /// Searches countries by regional bloc.
    pub async fn regional_bloc(&self, query: &RegionalBlocQuery) -> Result<Vec<Country>, Error> {
        self.get(query).await
    }

    /// Searches countries by calling code.
    pub async fn calling_code(&self, query: &CallingCodeQuery) -> Result<Vec<Country>, Error> {
        self.get(query).await
    }

    /// Looks up countries by a list of alpha-2 or alpha-3 codes.
    pub async fn codes(&self, query: &CodesQuery) -> Result<Vec<Country>, Error> {
        self.get(query).await
    }
}
