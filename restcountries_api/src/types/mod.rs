mod country;
pub use self::country::{Country, Currency, Language, RegionalBloc, Translations};
