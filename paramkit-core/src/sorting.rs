//! Sort query parameter parsing
//!
//! A sort value such as `-createdAt,name` is split into tokens, each token is
//! checked against an allow-list, and the result is an ordered list of
//! [`SortOption`]s in the order the client wrote them.

use crate::case::{camel_to_snake, snake_to_camel};
use crate::errors::{ParamError, ParamResult};
use crate::query::query_value;
use paramkit_config::SortingConfig;
use serde::{Deserialize, Serialize};

/// Sort direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    Asc,
    Desc,
}

/// One field to sort by, in snake_case
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SortOption {
    pub field: String,
    pub direction: SortDirection,
}

impl SortOption {
    pub fn new(field: impl Into<String>, direction: SortDirection) -> Self {
        Self {
            field: field.into(),
            direction,
        }
    }

    pub fn asc(field: impl Into<String>) -> Self {
        Self::new(field, SortDirection::Asc)
    }

    pub fn desc(field: impl Into<String>) -> Self {
        Self::new(field, SortDirection::Desc)
    }

    /// Parse a `-field` / `field` token without validation
    pub fn from_token(token: &str) -> Self {
        let token = token.trim();
        match token.strip_prefix('-') {
            Some(field) => Self::desc(field.trim_start_matches('-')),
            None => Self::asc(token),
        }
    }

    pub fn is_asc(&self) -> bool {
        self.direction == SortDirection::Asc
    }

    pub fn is_desc(&self) -> bool {
        self.direction == SortDirection::Desc
    }
}

/// Sort parameter definition for one endpoint
///
/// ```
/// use paramkit_core::sorting::{SortOption, Sorting};
///
/// let sorting = Sorting::new(["created_at", "name"]);
/// let options = sorting.parse(Some("-createdAt,name")).unwrap();
///
/// assert_eq!(options, vec![SortOption::desc("created_at"), SortOption::asc("name")]);
/// ```
#[derive(Debug, Clone)]
pub struct Sorting {
    config: SortingConfig,
    /// Tokens a client may send, in the client's naming convention
    choices: Vec<String>,
    default: Vec<String>,
}

impl Sorting {
    /// Allow sorting by `allowed` fields using the default configuration
    pub fn new<I, S>(allowed: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::with_config(SortingConfig::default(), allowed)
    }

    /// Allow sorting by `allowed` fields (snake_case) with an explicit configuration
    pub fn with_config<I, S>(config: SortingConfig, allowed: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut choices: Vec<String> = allowed.into_iter().map(Into::into).collect();

        // Negate first, then translate the whole set once
        if config.negative_sorting_allowed {
            let negated: Vec<String> = choices.iter().map(|choice| format!("-{}", choice)).collect();
            choices.extend(negated);
        }

        if config.translate_camel_case {
            choices = choices.iter().map(|choice| translate_token(choice)).collect();
        }

        Self {
            config,
            choices,
            default: Vec::new(),
        }
    }

    /// Tokens used when the parameter is absent, e.g. `["-id"]`
    pub fn with_default<I, S>(mut self, default: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.default = default.into_iter().map(Into::into).collect();
        self
    }

    pub fn config(&self) -> &SortingConfig {
        &self.config
    }

    pub fn query_param_name(&self) -> &str {
        &self.config.query_param_name
    }

    /// Every token a client may send, including `-` variants
    pub fn choices(&self) -> &[String] {
        &self.choices
    }

    /// Example value for API documentation: all ascending choices joined by the delimiter
    pub fn example(&self) -> String {
        self.choices
            .iter()
            .filter(|choice| !choice.starts_with('-'))
            .map(String::as_str)
            .collect::<Vec<_>>()
            .join(self.config.delimiter.as_str())
    }

    /// Parse a raw sort value such as `-createdAt,name`.
    ///
    /// `None` yields the default options. Empty tokens are skipped, so an
    /// empty string yields no options at all.
    pub fn parse(&self, raw: Option<&str>) -> ParamResult<Vec<SortOption>> {
        let Some(raw) = raw else {
            return Ok(self.default.iter().map(|token| SortOption::from_token(token)).collect());
        };

        let tokens: Vec<&str> = if self.config.delimiter.is_empty() {
            vec![raw]
        } else {
            raw.split(self.config.delimiter.as_str()).collect()
        };

        let mut parsed: Vec<(&str, SortDirection)> = Vec::with_capacity(tokens.len());

        for token in tokens {
            let token = token.trim();
            let (field, direction) = match token.strip_prefix('-') {
                Some(rest) => (rest.trim(), SortDirection::Desc),
                None => (token, SortDirection::Asc),
            };

            if field.is_empty() {
                continue;
            }

            let candidate = match direction {
                SortDirection::Asc => field.to_string(),
                SortDirection::Desc => format!("-{}", field),
            };

            if !self.choices.contains(&candidate) {
                tracing::debug!(param = %self.config.query_param_name, token = %candidate, "Rejected unknown sort key");
                return Err(ParamError::UnknownSortField {
                    param: self.config.query_param_name.clone(),
                    value: candidate,
                    allowed: self.choices.clone(),
                });
            }

            if parsed.iter().any(|(seen, _)| *seen == field) {
                tracing::debug!(param = %self.config.query_param_name, field, "Rejected duplicate sort key");
                return Err(ParamError::DuplicateSortField {
                    param: self.config.query_param_name.clone(),
                    value: field.to_string(),
                });
            }

            parsed.push((field, direction));
        }

        Ok(parsed
            .into_iter()
            .map(|(field, direction)| {
                let field = if self.config.translate_camel_case {
                    camel_to_snake(field)
                } else {
                    field.to_string()
                };
                SortOption::new(field, direction)
            })
            .collect())
    }

    /// Read this parameter out of a raw query string and parse it
    pub fn parse_query(&self, raw_query: Option<&str>) -> ParamResult<Vec<SortOption>> {
        let raw = raw_query.and_then(|query| query_value(query, &self.config.query_param_name));
        self.parse(raw.as_deref())
    }
}

/// camelCase form of a sort token, keeping its sign
fn translate_token(token: &str) -> String {
    match token.strip_prefix('-') {
        Some(field) => format!("-{}", snake_to_camel(field)),
        None => snake_to_camel(token),
    }
}

/// One-shot parse of a sort value against an allow-list
pub fn parse_sorting(raw: Option<&str>, allowed: &[&str], config: &SortingConfig) -> ParamResult<Vec<SortOption>> {
    Sorting::with_config(config.clone(), allowed.iter().copied()).parse(raw)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn users_sorting() -> Sorting {
        Sorting::new(["id", "age", "name", "is_active"])
    }

    #[test]
    fn test_parse_mixed_directions() {
        let sorting = Sorting::new(["created_at", "name"]);
        let options = sorting.parse(Some("-createdAt,name")).unwrap();

        assert_eq!(
            options,
            vec![
                SortOption::new("created_at", SortDirection::Desc),
                SortOption::new("name", SortDirection::Asc),
            ]
        );
        assert!(options[0].is_desc());
        assert!(options[1].is_asc());
    }

    #[test]
    fn test_output_follows_input_order() {
        let options = users_sorting().parse(Some("isActive,-age,id")).unwrap();
        let fields: Vec<&str> = options.iter().map(|o| o.field.as_str()).collect();
        assert_eq!(fields, vec!["is_active", "age", "id"]);
    }

    #[test]
    fn test_duplicate_field_is_rejected() {
        let err = users_sorting().parse(Some("name,name")).unwrap_err();
        assert_eq!(
            err,
            ParamError::DuplicateSortField {
                param: "sort".to_string(),
                value: "name".to_string(),
            }
        );
    }

    #[test]
    fn test_duplicate_detected_regardless_of_direction() {
        let err = users_sorting().parse(Some("-age,age")).unwrap_err();
        assert!(matches!(err, ParamError::DuplicateSortField { ref value, .. } if value == "age"));
    }

    #[test]
    fn test_unknown_field_is_rejected() {
        let err = Sorting::new(["id"]).parse(Some("unknown")).unwrap_err();
        match err {
            ParamError::UnknownSortField { param, value, allowed } => {
                assert_eq!(param, "sort");
                assert_eq!(value, "unknown");
                assert_eq!(allowed, vec!["id".to_string(), "-id".to_string()]);
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_snake_case_input_is_unknown_when_translating() {
        let err = users_sorting().parse(Some("is_active")).unwrap_err();
        assert!(matches!(err, ParamError::UnknownSortField { .. }));
    }

    #[test]
    fn test_absent_value_uses_default() {
        let sorting = Sorting::new(["id"]).with_default(["-id"]);
        assert_eq!(sorting.parse(None).unwrap(), vec![SortOption::desc("id")]);
        assert!(Sorting::new(["id"]).parse(None).unwrap().is_empty());
    }

    #[test]
    fn test_empty_tokens_are_skipped() {
        let options = users_sorting().parse(Some(" , name ,, - ,")).unwrap();
        assert_eq!(options, vec![SortOption::asc("name")]);
        assert!(users_sorting().parse(Some("")).unwrap().is_empty());
    }

    #[test]
    fn test_whitespace_around_sign() {
        let options = users_sorting().parse(Some(" - age , id")).unwrap();
        assert_eq!(options, vec![SortOption::desc("age"), SortOption::asc("id")]);
    }

    #[test]
    fn test_double_sign_is_unknown() {
        let err = users_sorting().parse(Some("--age")).unwrap_err();
        assert!(matches!(err, ParamError::UnknownSortField { ref value, .. } if value == "--age"));
    }

    #[test]
    fn test_negative_sorting_disabled() {
        let config = SortingConfig {
            negative_sorting_allowed: false,
            ..Default::default()
        };
        let sorting = Sorting::with_config(config, ["age"]);

        assert_eq!(sorting.choices(), ["age".to_string()]);
        assert_eq!(sorting.parse(Some("age")).unwrap(), vec![SortOption::asc("age")]);

        let err = sorting.parse(Some("-age")).unwrap_err();
        assert!(matches!(err, ParamError::UnknownSortField { ref value, .. } if value == "-age"));
    }

    #[test]
    fn test_translation_disabled_passes_names_through() {
        let config = SortingConfig {
            translate_camel_case: false,
            ..Default::default()
        };
        let sorting = Sorting::with_config(config, ["created_at"]);

        assert_eq!(sorting.parse(Some("-created_at")).unwrap(), vec![SortOption::desc("created_at")]);
        assert!(sorting.parse(Some("createdAt")).is_err());
    }

    #[test]
    fn test_custom_delimiter_and_param_name() {
        let config = SortingConfig {
            query_param_name: "orderBy".to_string(),
            delimiter: "|".to_string(),
            ..Default::default()
        };
        let sorting = Sorting::with_config(config, ["id", "name"]);

        assert_eq!(
            sorting.parse(Some("name|-id")).unwrap(),
            vec![SortOption::asc("name"), SortOption::desc("id")]
        );

        let err = sorting.parse(Some("name,id")).unwrap_err();
        assert_eq!(err.param(), "orderBy");
    }

    #[test]
    fn test_choices_negate_then_translate() {
        let sorting = Sorting::new(["created_at", "name"]);
        assert_eq!(sorting.choices(), ["createdAt", "name", "-createdAt", "-name"].map(String::from));
        assert_eq!(sorting.example(), "createdAt,name");
    }

    #[test]
    fn test_camel_case_allow_list_is_kept() {
        let sorting = Sorting::new(["createdAt", "user_name"]);
        assert_eq!(
            sorting.choices(),
            ["createdAt", "userName", "-createdAt", "-userName"].map(String::from)
        );

        let options = sorting.parse(Some("-createdAt,userName")).unwrap();
        assert_eq!(options, vec![SortOption::desc("created_at"), SortOption::asc("user_name")]);
    }

    #[test]
    fn test_parse_query() {
        let sorting = users_sorting();
        let options = sorting.parse_query(Some("page=2&sort=-isActive%2Cname")).unwrap();
        assert_eq!(options, vec![SortOption::desc("is_active"), SortOption::asc("name")]);

        let sorting = users_sorting().with_default(["id"]);
        assert_eq!(sorting.parse_query(Some("page=2")).unwrap(), vec![SortOption::asc("id")]);
        assert_eq!(sorting.parse_query(None).unwrap(), vec![SortOption::asc("id")]);
    }

    #[test]
    fn test_parse_sorting_helper() {
        let options = parse_sorting(Some("-createdAt"), &["created_at"], &SortingConfig::default()).unwrap();
        assert_eq!(options, vec![SortOption::desc("created_at")]);
    }

    #[test]
    fn test_sort_option_serialization() {
        let json = serde_json::to_value(SortOption::desc("created_at")).unwrap();
        assert_eq!(json, serde_json::json!({"field": "created_at", "direction": "desc"}));
    }
}
