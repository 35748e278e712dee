use url::Url;

use super::{common::QueryCommon, Endpoint, Query};

/// Lists every country. Has no search term, so it never fails validation.
#[derive(Clone, Debug, Default)]
pub struct AllQuery {
    pub common: QueryCommon,
}

impl Query for AllQuery {
    fn endpoint(&self) -> Endpoint {
        Endpoint::All
    }
    fn search_term(&self) -> Option<&str> {
        None
    }
    fn get_common(&mut self) -> &mut QueryCommon {
        &mut self.common
    }
    fn add_to_url(&self, url: &Url) -> Url {
        self.common.add_to_url(url)
    }
}

#[cfg(test)]
mod tests {
    use url::Url;

    use crate::query::{AllQuery, Query};

    #[test]
    fn test_all_query() {
        let url = Url::parse("https://example.com").unwrap();

        insta::assert_snapshot!(AllQuery::default().add_to_url(&url), @"https://example.com/?fields=");
        insta::assert_snapshot!(
            AllQuery::default()
                .with_field("Name")
                .with_fields(&["Alpha2Code".to_string()])
                .add_to_url(&url),
            @"https://example.com/?fields=name%3Balpha2Code%3B"
        );
        assert!(AllQuery::default().validate().is_ok());
    }
}
