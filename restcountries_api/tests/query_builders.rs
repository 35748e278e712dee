use restcountries_api::{
    format_codes, format_fields, AllQuery, CallingCodeQuery, Client, CodesQuery, NameQuery, Query,
    RegionalBlocQuery,
};
use url::Url;

fn base_url() -> Url {
    Url::parse("https://example.com").unwrap()
}

#[test]
fn fields_formatting() {
    assert_eq!(format_fields(&["Name", "Capital"]), "name;capital;");
    assert_eq!(format_fields::<String>(&[]), "");
}

#[test]
fn codes_formatting() {
    assert_eq!(format_codes(&["CO", "US"]), "CO;US;");
}

#[test]
fn all_query_defaults() {
    let url = AllQuery::default().add_to_url(&base_url());
    assert_eq!(url.query(), Some("fields="));
}

#[test]
fn name_query_full_text_is_last() {
    let url = NameQuery::new("France")
        .with_field("Name")
        .with_full_text(true)
        .add_to_url(&base_url());
    assert_eq!(url.query(), Some("fields=name%3B&fullText=true"));
}

#[test]
fn codes_query_with_fields() {
    let url = CodesQuery::default()
        .with_codes(&["CO".to_string(), "US".to_string()])
        .with_fields(&["Name".to_string(), "Alpha3Code".to_string()])
        .add_to_url(&base_url());
    let pairs: Vec<(String, String)> = url.query_pairs().into_owned().collect();
    assert_eq!(
        pairs,
        vec![
            ("codes".to_string(), "CO;US;".to_string()),
            ("fields".to_string(), "name;alpha3Code;".to_string()),
        ]
    );
}

#[test]
fn client_urls_for_keyed_lookups() {
    let client = Client::with_base_url("https://api.countrylayer.com/v2", "TEST_API_KEY");

    let url = client
        .build_url(&CallingCodeQuery::new("372"))
        .unwrap();
    assert_eq!(
        url.as_str(),
        "https://api.countrylayer.com/v2/callingcode/372?access_key=TEST_API_KEY&fields="
    );

    let url = client
        .build_url(&RegionalBlocQuery::new("eu").with_field("Name"))
        .unwrap();
    assert_eq!(
        url.as_str(),
        "https://api.countrylayer.com/v2/regionalbloc/eu?access_key=TEST_API_KEY&fields=name%3B"
    );
}
