//! Client for the REST Countries reference-data API.
//!
//! Every query method returns `Ok` with a (possibly empty) list of
//! [`types::Country`] records, or an [`Error`]. "Not found" style envelopes
//! are folded into empty lists according to [`Endpoint::empty_statuses`].

mod client;
mod config;
mod errors;
mod query;
pub mod response;
pub mod transport;
pub mod types;
pub use self::client::Client;
pub use self::config::ClientConfig;
pub use self::errors::Error;
pub use self::query::{
    format_codes, format_fields, AllQuery, CallingCodeQuery, CapitalQuery, CodesQuery,
    CurrencyQuery, Endpoint, LanguageQuery, NameQuery, Query, QueryCommon, RegionQuery,
    RegionalBlocQuery,
};
pub use self::transport::{ReqwestTransport, Transport};
