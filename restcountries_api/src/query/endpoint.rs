//! The fixed set of query endpoints and their per-endpoint response policy.

/// A query endpoint of the API.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Endpoint {
    All,
    Name,
    Capital,
    Currency,
    Language,
    Region,
    RegionalBloc,
    CallingCode,
    Codes,
}

impl Endpoint {
    /// Every endpoint, in declaration order.
    pub const ALL: [Endpoint; 9] = [
        Endpoint::All,
        Endpoint::Name,
        Endpoint::Capital,
        Endpoint::Currency,
        Endpoint::Language,
        Endpoint::Region,
        Endpoint::RegionalBloc,
        Endpoint::CallingCode,
        Endpoint::Codes,
    ];

    /// Path appended to the API root. Keyed lookups append the search term
    /// as one more segment.
    pub fn path(&self) -> &'static str {
        match self {
            Endpoint::All => "/all",
            Endpoint::Name => "/name",
            Endpoint::Capital => "/capital",
            Endpoint::Currency => "/currency",
            Endpoint::Language => "/lang",
            Endpoint::Region => "/region",
            Endpoint::RegionalBloc => "/regionalbloc",
            Endpoint::CallingCode => "/callingcode",
            Endpoint::Codes => "/alpha/",
        }
    }

    /// Envelope statuses that mean "no matching countries" for this endpoint.
    ///
    /// The API answers an unknown currency with 400, a single unknown alpha
    /// code with 400, and a code list containing unknown codes with 500.
    pub fn empty_statuses(&self) -> &'static [i32] {
        match self {
            Endpoint::Currency => &[404, 400],
            Endpoint::Codes => &[404, 400, 500],
            _ => &[404],
        }
    }

    /// Whether an envelope with `status` should become an empty result.
    pub fn treats_as_empty(&self, status: i32) -> bool {
        self.empty_statuses().contains(&status)
    }
}

impl std::fmt::Display for Endpoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Endpoint::All => "all",
                Endpoint::Name => "name",
                Endpoint::Capital => "capital",
                Endpoint::Currency => "currency",
                Endpoint::Language => "language",
                Endpoint::Region => "region",
                Endpoint::RegionalBloc => "regionalbloc",
                Endpoint::CallingCode => "callingcode",
                Endpoint::Codes => "codes",
            }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::Endpoint;

    #[test]
    fn every_endpoint_treats_404_as_empty() {
        for endpoint in Endpoint::ALL {
            assert!(endpoint.treats_as_empty(404), "{endpoint} should accept 404");
        }
    }

    #[test]
    fn only_currency_and_codes_treat_400_as_empty() {
        let accepting: Vec<Endpoint> = Endpoint::ALL
            .into_iter()
            .filter(|e| e.treats_as_empty(400))
            .collect();
        assert_eq!(accepting, vec![Endpoint::Currency, Endpoint::Codes]);
    }

    #[test]
    fn only_codes_treats_500_as_empty() {
        let accepting: Vec<Endpoint> = Endpoint::ALL
            .into_iter()
            .filter(|e| e.treats_as_empty(500))
            .collect();
        assert_eq!(accepting, vec![Endpoint::Codes]);
    }

    #[test]
    fn other_statuses_are_never_empty() {
        for endpoint in Endpoint::ALL {
            for status in [0, 200, 401, 403, 429, 502] {
                assert!(!endpoint.treats_as_empty(status));
            }
        }
    }

    #[test]
    fn paths_match_the_api() {
        let paths: Vec<&str> = Endpoint::ALL.iter().map(|e| e.path()).collect();
        assert_eq!(
            paths,
            vec![
                "/all",
                "/name",
                "/capital",
                "/currency",
                "/lang",
                "/region",
                "/regionalbloc",
                "/callingcode",
                "/alpha/",
            ]
        );
    }
}
