//! Keyed lookups that take a single search term in the path and nothing else.

use url::Url;

use super::{common::QueryCommon, Endpoint, Query};

macro_rules! term_query {
    ($(#[$meta:meta])* $name:ident, $term:ident, $endpoint:expr) => {
        $(#[$meta])*
        #[derive(Clone, Debug, Default)]
        pub struct $name {
            pub common: QueryCommon,
            pub $term: String,
        }

        impl Query for $name {
            fn endpoint(&self) -> Endpoint {
                $endpoint
            }
            fn search_term(&self) -> Option<&str> {
                Some(&self.$term)
            }
            fn get_common(&mut self) -> &mut QueryCommon {
                &mut self.common
            }
            fn add_to_url(&self, url: &Url) -> Url {
                self.common.add_to_url(url)
            }
        }

        impl $name {
            pub fn new($term: &str) -> Self {
                Self {
                    common: QueryCommon::default(),
                    $term: $term.to_string(),
                }
            }
        }
    };
}

term_query!(
    /// Searches countries by capital city (partial match).
    CapitalQuery,
    capital,
    Endpoint::Capital
);
term_query!(
    /// Searches countries by ISO 4217 currency code (exact match).
    CurrencyQuery,
    currency,
    Endpoint::Currency
);
term_query!(
    /// Searches countries by ISO 639-1 language code (exact match).
    LanguageQuery,
    language,
    Endpoint::Language
);
term_query!(
    /// Searches countries by region, e.g. `europe` (exact match).
    RegionQuery,
    region,
    Endpoint::Region
);
term_query!(
    /// Searches countries by regional bloc acronym, e.g. `eu` (exact match).
    RegionalBlocQuery,
    regional_bloc,
    Endpoint::RegionalBloc
);
term_query!(
    /// Searches countries by international calling code (exact match).
    CallingCodeQuery,
    calling_code,
    Endpoint::CallingCode
);
