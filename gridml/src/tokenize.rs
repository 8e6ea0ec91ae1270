use crate::error::{Error, Result};

/// Separator between values in an embedded payload.
pub(crate) const DELIMITER: char = ';';

/// The tokens of a delimited payload, in order.
///
/// An empty input yields a single empty token, not zero tokens. The
/// payload format has always tokenized this way, and the observable size
/// of an empty vector depends on it, so it is preserved rather than
/// normalized to an empty sequence.
pub(crate) fn tokens(text: &str) -> impl Iterator<Item = &str> {
    text.split(DELIMITER)
}

/// Parses every token of `text` as a double.
///
/// Tokens may be wrapped in whitespace, as payloads are often indented
/// inside documents. A token that does not parse fails the whole read; no
/// partial buffer is returned.
pub(crate) fn parse_values(text: &str) -> Result<Vec<f64>> {
    tokens(text)
        .map(|token| {
            let token = token.trim();
            token
                .parse::<f64>()
                .map_err(|_| Error::NoNumber(token.to_string()))
        })
        .collect()
}

/// Joins values into a delimited payload.
///
/// Inverse of [`parse_values`] for every finite double: the `Display`
/// output of an `f64` round-trips through `str::parse`.
pub(crate) fn format_values(values: &[f64]) -> String {
    let mut payload = String::new();
    for (i, value) in values.iter().enumerate() {
        if i > 0 {
            payload.push(DELIMITER);
        }
        payload.push_str(&value.to_string());
    }
    payload
}
