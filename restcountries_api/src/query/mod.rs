mod common;
pub use self::common::{Query, QueryCommon};
mod endpoint;
pub use self::endpoint::Endpoint;
mod format;
pub use self::format::{format_codes, format_fields};

mod all;
pub use self::all::AllQuery;

mod name;
pub use self::name::NameQuery;

mod term;
pub use self::term::{
    CallingCodeQuery, CapitalQuery, CurrencyQuery, LanguageQuery, RegionQuery,
    RegionalBlocQuery,
};

mod codes;
pub use self::codes::CodesQuery;
