//! Shared query infrastructure: the [`Query`] trait and [`QueryCommon`] fields.

use url::Url;

use super::{format::format_fields, Endpoint};
use crate::Error;

/// Trait implemented by all query builders. Describes which endpoint a query
/// targets, how it validates its input and which parameters it adds.
pub trait Query {
    /// The endpoint this query is sent to.
    fn endpoint(&self) -> Endpoint;

    /// The search term appended to the endpoint path, for keyed lookups.
    fn search_term(&self) -> Option<&str>;

    /// Appends this query's parameters to the given URL, returning the modified URL.
    fn add_to_url(&self, url: &Url) -> Url;

    /// Returns a mutable reference to the common query fields.
    fn get_common(&mut self) -> &mut QueryCommon;

    /// Rejects a query whose required search term is empty.
    fn validate(&self) -> Result<(), Error> {
        match self.search_term() {
            Some(term) if term.is_empty() => Err(Error::EmptySearchTerm),
            _ => Ok(()),
        }
    }

    /// Restricts the response to the given field (e.g. `"Name"` or `"capital"`).
    fn with_field(mut self, field: &str) -> Self
    where
        Self: Sized,
    {
        self.get_common().fields.push(field.to_string());
        self
    }

    /// Restricts the response to the given fields.
    fn with_fields(mut self, fields: &[String]) -> Self
    where
        Self: Sized,
    {
        self.get_common().fields.extend_from_slice(fields);
        self
    }
}

/// Fields shared by all query types.
#[derive(Clone, Debug, Default)]
pub struct QueryCommon {
    /// Field names to request. Empty requests every field.
    pub fields: Vec<String>,
}

impl QueryCommon {
    /// Appends the `fields` parameter. It is sent even when empty.
    pub fn add_to_url(&self, url: &Url) -> Url {
        let mut url = url.clone();
        url.query_pairs_mut()
            .append_pair("fields", &format_fields(&self.fields));
        url
    }
}
