//! Decoding of response bodies into country lists.
//!
//! The API answers either with a JSON list of countries or with an error
//! envelope `{"status": ..., "message": ...}`, regardless of the HTTP status
//! line. [`normalize`] turns both shapes into a single result.

use serde::{de, Deserialize, Deserializer};
use serde_json::{Map, Value};

use crate::{query::Endpoint, types::Country, Error};

/// The API's error object, sent in place of a country list.
///
/// Keys match case-insensitively, with an exact-case key taking precedence.
/// Missing or `null` fields take their defaults.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct ApiEnvelope {
    pub status: i32,
    pub message: String,
}

impl<'de> Deserialize<'de> for ApiEnvelope {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let object = Map::<String, Value>::deserialize(deserializer)?;
        Ok(ApiEnvelope {
            status: envelope_field(&object, "status")?,
            message: envelope_field(&object, "message")?,
        })
    }
}

fn envelope_field<T, E>(object: &Map<String, Value>, name: &str) -> Result<T, E>
where
    T: de::DeserializeOwned + Default,
    E: de::Error,
{
    let value = object.get(name).or_else(|| {
        object
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value)
    });
    match value {
        None | Some(Value::Null) => Ok(T::default()),
        Some(value) => T::deserialize(value).map_err(E::custom),
    }
}

/// Interprets a raw response body for `endpoint`.
///
/// 1. A list of countries is returned as is, even when empty.
/// 2. Otherwise the body is read as an [`ApiEnvelope`]. If that fails too,
///    the list-parse error is returned, not the envelope one.
/// 3. An envelope whose status is in [`Endpoint::empty_statuses`] becomes an
///    empty list; any other status becomes [`Error::Api`] carrying its message.
pub fn normalize(body: &str, endpoint: Endpoint) -> Result<Vec<Country>, Error> {
    let list_err = match serde_json::from_str::<Vec<Country>>(body) {
        Ok(countries) => return Ok(countries),
        Err(e) => e,
    };

    let envelope = match serde_json::from_str::<ApiEnvelope>(body) {
        Ok(envelope) => envelope,
        Err(envelope_err) => {
            tracing::debug!(
                "{} response is neither a list nor an envelope: {} (envelope: {})",
                endpoint,
                list_err,
                envelope_err
            );
            return Err(Error::Decode(list_err));
        }
    };

    if endpoint.treats_as_empty(envelope.status) {
        tracing::debug!(
            "{} returned status {}, treating as no results",
            endpoint,
            envelope.status
        );
        return Ok(Vec::new());
    }

    tracing::debug!(
        "{} returned status {}: {}",
        endpoint,
        envelope.status,
        envelope.message
    );
    Err(Error::Api {
        status: envelope.status,
        message: envelope.message,
    })
}
