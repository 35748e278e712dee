//! Error types for the API client.

/// Errors that can occur when querying the API.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// A required search term (or code list) was empty. No request is sent.
    #[error("Search term is empty")]
    EmptySearchTerm,
    /// The search term is `.` or `..`, which URL normalization would drop
    /// from the path. No request is sent.
    #[error("search term {0:?} cannot be used as a path segment")]
    DotSegmentSearchTerm(String),
    /// The configured API root could not be turned into a request URL.
    #[error("invalid API root {root:?}: {reason}")]
    InvalidApiRoot { root: String, reason: String },
    /// The HTTP request failed or the response body could not be read.
    #[error(transparent)]
    Transport(#[from] reqwest::Error),
    /// The body was neither a list of countries nor an error envelope.
    /// Carries the list-parse diagnostic.
    #[error(transparent)]
    Decode(#[from] serde_json::Error),
    /// The API answered with an error envelope whose status is not treated as empty.
    #[error("{message}")]
    Api { status: i32, message: String },
}
