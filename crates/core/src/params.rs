//! Request-scoped widget input: the widget kind plus its raw query parameters.

use std::collections::HashMap;

use crate::error::CoreError;
use crate::widget_kind::WidgetKind;

/// Query parameter selecting the widget kind.
pub const TYPE_PARAM: &str = "type";

/// Flat string parameters taken from the query string.
///
/// The first occurrence of a repeated key wins. Empty values count as missing,
/// so every lookup falls back to its default for `?tz=`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WidgetParams {
    values: HashMap<String, String>,
}

impl WidgetParams {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Non-empty value for `key`, if any.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str).filter(|v| !v.is_empty())
    }

    #[must_use]
    pub fn get_or<'a>(&'a self, key: &str, default: &'a str) -> &'a str {
        self.get(key).unwrap_or(default)
    }

    /// True only for the literal value `true`.
    #[must_use]
    pub fn flag(&self, key: &str) -> bool {
        self.get(key) == Some("true")
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.values.entry(key.into()).or_insert_with(|| value.into());
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for WidgetParams {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut params = Self::new();
        for (key, value) in iter {
            params.insert(key, value);
        }
        params
    }
}

/// A validated widget kind with the parameters that configure it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WidgetRequest {
    pub kind: WidgetKind,
    pub params: WidgetParams,
}

impl WidgetRequest {
    #[must_use]
    pub const fn new(kind: WidgetKind, params: WidgetParams) -> Self {
        Self { kind, params }
    }

    /// Builds a request from raw query pairs, validating the `type` parameter.
    pub fn from_params(params: WidgetParams) -> Result<Self, CoreError> {
        let kind = params.get(TYPE_PARAM).ok_or(CoreError::MissingWidgetType)?.parse()?;
        Ok(Self { kind, params })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_occurrence_of_repeated_key_wins() {
        let params: WidgetParams = [("tz", "Europe/Paris"), ("tz", "Asia/Tokyo")].into_iter().collect();
        assert_eq!(params.get("tz"), Some("Europe/Paris"));
        assert_eq!(params.len(), 1);
    }

    #[test]
    fn empty_value_counts_as_missing() {
        let params: WidgetParams = [("city", "")].into_iter().collect();
        assert_eq!(params.get("city"), None);
        assert_eq!(params.get_or("city", "New York"), "New York");
    }

    #[test]
    fn flag_requires_literal_true() {
        let params: WidgetParams =
            [("a", "true"), ("b", "TRUE"), ("c", "1"), ("d", "yes")].into_iter().collect();
        assert!(params.flag("a"));
        assert!(!params.flag("b"));
        assert!(!params.flag("c"));
        assert!(!params.flag("d"));
        assert!(!params.flag("missing"));
    }

    #[test]
    fn request_requires_type() {
        let params: WidgetParams = [("tz", "UTC")].into_iter().collect();
        assert!(matches!(WidgetRequest::from_params(params), Err(CoreError::MissingWidgetType)));
    }

    #[test]
    fn request_rejects_unknown_type() {
        let params: WidgetParams = [("type", "stocks")].into_iter().collect();
        let err = WidgetRequest::from_params(params).unwrap_err();
        assert!(err.is_client_error());
    }

    #[test]
    fn request_keeps_all_params() {
        let params: WidgetParams = [("type", "weather"), ("city", "Oslo")].into_iter().collect();
        let request = WidgetRequest::from_params(params).unwrap();
        assert_eq!(request.kind, WidgetKind::Weather);
        assert_eq!(request.params.get("city"), Some("Oslo"));
    }
}
