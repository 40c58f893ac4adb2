//! snake_case / camelCase conversion for parameter and field names.
//!
//! The two directions are not exact inverses. `camel_to_snake(snake_to_camel(x)) == x`
//! holds for lower-case words joined by single underscores (`created_at`,
//! `my_query_param`) but not for names carrying digits after an underscore,
//! acronyms, repeated underscores or upper-case input:
//!
//! ```
//! use paramkit_core::case::{camel_to_snake, snake_to_camel};
//!
//! assert_eq!(camel_to_snake(&snake_to_camel("page_size")), "page_size");
//! // `field_1` becomes `field1` and stays that way
//! assert_eq!(camel_to_snake(&snake_to_camel("field_1")), "field1");
//! ```

/// Convert a snake_case name to camelCase.
///
/// The first segment is lower-cased; every following segment gets an upper-case
/// first character and a lower-cased remainder. Empty segments contribute nothing.
/// Names that are already camelCase (a lower-case letter followed by ASCII
/// letters and digits) are returned unchanged, so the conversion is idempotent
/// on its own output.
///
/// ```
/// use paramkit_core::case::snake_to_camel;
///
/// assert_eq!(snake_to_camel("my_query_param"), "myQueryParam");
/// assert_eq!(snake_to_camel("HTTP_response_code"), "httpResponseCode");
/// assert_eq!(snake_to_camel("pageSize"), "pageSize");
/// ```
pub fn snake_to_camel(value: &str) -> String {
    if is_camel_case(value) {
        return value.to_string();
    }

    let mut segments = value.split('_');
    let mut out = String::with_capacity(value.len());

    if let Some(first) = segments.next() {
        out.push_str(&first.to_lowercase());
    }

    for segment in segments {
        let mut chars = segment.chars();
        if let Some(head) = chars.next() {
            out.extend(head.to_uppercase());
            out.push_str(&chars.as_str().to_lowercase());
        }
    }

    out
}

fn is_camel_case(value: &str) -> bool {
    let mut chars = value.chars();
    chars.next().is_some_and(|first| first.is_ascii_lowercase()) && chars.all(|c| c.is_ascii_alphanumeric())
}

/// Convert a camelCase or PascalCase name to snake_case.
///
/// An underscore goes before an upper-case letter that follows a lower-case
/// letter or digit, or that starts a new word inside an acronym run
/// (`HTTPRequest` splits before `R`). The result is lower-cased.
///
/// ```
/// use paramkit_core::case::camel_to_snake;
///
/// assert_eq!(camel_to_snake("myQueryParam"), "my_query_param");
/// assert_eq!(camel_to_snake("HTTPRequest"), "http_request");
/// ```
pub fn camel_to_snake(value: &str) -> String {
    let chars: Vec<char> = value.chars().collect();
    let mut out = String::with_capacity(value.len() + 4);

    for (i, &c) in chars.iter().enumerate() {
        if c.is_ascii_uppercase() && i > 0 {
            let prev = chars[i - 1];
            let after_lower = prev.is_ascii_lowercase() || prev.is_ascii_digit();
            let before_lower = chars.get(i + 1).is_some_and(|next| next.is_ascii_lowercase());

            if after_lower || before_lower {
                out.push('_');
            }
        }
        out.extend(c.to_lowercase());
    }

    out
}
