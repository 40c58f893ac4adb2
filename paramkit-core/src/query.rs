//! Raw query string helpers.

use crate::case::camel_to_snake;
use url::form_urlencoded;

/// Rewrite every key of a raw query string from camelCase to snake_case.
///
/// Pairs keep their order and repeated keys stay repeated, so multi-valued
/// parameters survive the rewrite. Values keep their meaning but are
/// re-encoded, and percent-encoded bytes that are not valid UTF-8 are decoded
/// lossily (`%FF` comes back as `%EF%BF%BD`, the replacement character).
///
/// ```
/// use paramkit_core::query::normalize_incoming_query;
///
/// assert_eq!(
///     normalize_incoming_query("pageSize=10&userID=42&tag=a&tag=b"),
///     "page_size=10&user_id=42&tag=a&tag=b"
/// );
/// ```
pub fn normalize_incoming_query(raw_query: &str) -> String {
    let mut serializer = form_urlencoded::Serializer::new(String::with_capacity(raw_query.len()));

    for (key, value) in form_urlencoded::parse(raw_query.as_bytes()) {
        serializer.append_pair(&camel_to_snake(&key), &value);
    }

    serializer.finish()
}

/// Last value of `name` in a raw query string, percent-decoded.
pub fn query_value(raw_query: &str, name: &str) -> Option<String> {
    form_urlencoded::parse(raw_query.as_bytes())
        .filter(|(key, _)| key == name)
        .map(|(_, value)| value.into_owned())
        .last()
}
