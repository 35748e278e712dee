use url::Url;

use super::{common::QueryCommon, Endpoint, Query};

/// Searches countries by name. Partial matches are returned unless
/// [`NameQuery::with_full_text`] asks for an exact match.
#[derive(Clone, Debug, Default)]
pub struct NameQuery {
    pub common: QueryCommon,
    pub name: String,
    pub full_text: bool,
}

impl Query for NameQuery {
    fn endpoint(&self) -> Endpoint {
        Endpoint::Name
    }
    fn search_term(&self) -> Option<&str> {
        Some(&self.name)
    }
    fn get_common(&mut self) -> &mut QueryCommon {
        &mut self.common
    }
    fn add_to_url(&self, url: &Url) -> Url {
        let mut url = self.common.add_to_url(url);
        if self.full_text {
            url.query_pairs_mut().append_pair("fullText", "true");
        }
        url
    }
}

impl NameQuery {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            ..Self::default()
        }
    }

    pub fn with_full_text(mut self, full_text: bool) -> Self {
        self.full_text = full_text;
        self
    }
}
