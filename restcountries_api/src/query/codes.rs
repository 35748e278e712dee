use url::Url;

use super::{common::QueryCommon, format::format_codes, Endpoint, Query};
use crate::Error;

/// Looks up countries by ISO 3166-1 alpha-2 or alpha-3 codes.
/// The codes are sent as a query parameter, not in the path.
#[derive(Clone, Debug, Default)]
pub struct CodesQuery {
    pub common: QueryCommon,
    pub codes: Vec<String>,
}

impl Query for CodesQuery {
    fn endpoint(&self) -> Endpoint {
        Endpoint::Codes
    }
    fn search_term(&self) -> Option<&str> {
        None
    }
    fn get_common(&mut self) -> &mut QueryCommon {
        &mut self.common
    }
    fn validate(&self) -> Result<(), Error> {
        if self.codes.is_empty() {
            return Err(Error::EmptySearchTerm);
        }
        Ok(())
    }
    fn add_to_url(&self, url: &Url) -> Url {
        let mut url = url.clone();
        url.query_pairs_mut()
            .append_pair("codes", &format_codes(&self.codes));
        self.common.add_to_url(&url)
    }
}

impl CodesQuery {
    pub fn with_code(mut self, code: &str) -> Self {
        self.codes.push(code.to_string());
        self
    }
    pub fn with_codes(mut self, codes: &[String]) -> Self {
        self.codes.extend_from_slice(codes);
        self
    }
}

#[cfg(test)]
mod tests {
    use url::Url;

    use crate::query::{CodesQuery, Query};
    use crate::Error;

    #[test]
    fn test_codes_query() {
        let url = Url::parse("https://example.com").unwrap();

        insta::assert_snapshot!(
            CodesQuery::default()
                .with_code("CO")
                .with_codes(&["us".to_string(), "FRA".to_string()])
                .with_field("Name")
                .add_to_url(&url),
            @"https://example.com/?codes=CO%3Bus%3BFRA%3B&fields=name%3B"
        );
    }

    #[test]
    fn empty_code_list_is_rejected() {
        assert!(matches!(
            CodesQuery::default().validate(),
            Err(Error::EmptySearchTerm)
        ));
        assert!(CodesQuery::default().with_code("CO").validate().is_ok());
    }
}
