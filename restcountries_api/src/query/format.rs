//! Formatting of list-valued query parameters.

/// Joins field names into the API's `fields` parameter.
///
/// Each name has its first character lowercased and is followed by `;`, so
/// `["Name", "Capital"]` becomes `"name;capital;"`. An empty slice yields `""`.
pub fn format_fields<S: AsRef<str>>(fields: &[S]) -> String {
    fields.iter().fold(String::new(), |mut out, field| {
        let mut chars = field.as_ref().chars();
        if let Some(first) = chars.next() {
            out.extend(first.to_lowercase());
            out.push_str(chars.as_str());
        }
        out.push(';');
        out
    })
}

/// Joins country codes into the API's `codes` parameter, case preserved.
pub fn format_codes<S: AsRef<str>>(codes: &[S]) -> String {
    codes.iter().fold(String::new(), |mut out, code| {
        out.push_str(code.as_ref());
        out.push(';');
        out
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fields_are_lower_camel_cased() {
        assert_eq!(format_fields(&["Name", "Capital"]), "name;capital;");
        assert_eq!(
            format_fields(&["CallingCodes", "alpha2Code"]),
            "callingCodes;alpha2Code;"
        );
    }

    #[test]
    fn no_fields_is_empty_string() {
        assert_eq!(format_fields::<&str>(&[]), "");
    }

    #[test]
    fn empty_field_name_keeps_delimiter() {
        assert_eq!(format_fields(&["", "Region"]), ";region;");
    }

    #[test]
    fn non_ascii_first_letter_is_lowercased() {
        assert_eq!(format_fields(&["Äbc"]), "äbc;");
    }

    #[test]
    fn codes_keep_their_case() {
        assert_eq!(format_codes(&["CO", "US"]), "CO;US;");
        assert_eq!(format_codes(&["col", "Us"]), "col;Us;");
        assert_eq!(format_codes::<String>(&[]), "");
    }
}
