//! Query parameter assembly

use std::fmt;

/// A single query parameter value
#[derive(Debug, Clone, PartialEq)]
pub enum ParamValue {
    Text(String),
    Int(i64),
    Float(f64),
    Bool(bool),
}

impl fmt::Display for ParamValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(s) => f.write_str(s),
            Self::Int(n) => write!(f, "{}", n),
            Self::Float(x) => write!(f, "{}", x),
            // The API reads flags as 1/0
            Self::Bool(b) => f.write_str(if *b { "1" } else { "0" }),
        }
    }
}

impl From<&str> for ParamValue {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

impl From<String> for ParamValue {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

impl From<i64> for ParamValue {
    fn from(n: i64) -> Self {
        Self::Int(n)
    }
}

impl From<u32> for ParamValue {
    fn from(n: u32) -> Self {
        Self::Int(i64::from(n))
    }
}

impl From<f64> for ParamValue {
    fn from(x: f64) -> Self {
        Self::Float(x)
    }
}

impl From<bool> for ParamValue {
    fn from(b: bool) -> Self {
        Self::Bool(b)
    }
}

/// Insertion-ordered parameter mapping.
///
/// Re-inserting an existing name replaces its value in place.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RequestParameters {
    entries: Vec<(String, ParamValue)>,
}

impl RequestParameters {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<ParamValue>) {
        let name = name.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(k, _)| *k == name) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((name, value)),
        }
    }

    /// Builder-style insert
    pub fn with(mut self, name: impl Into<String>, value: impl Into<ParamValue>) -> Self {
        self.insert(name, value);
        self
    }

    pub fn get(&self, name: &str) -> Option<&ParamValue> {
        self.entries.iter().find(|(k, _)| k == name).map(|(_, v)| v)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &ParamValue)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Names in insertion order
    pub fn names(&self) -> Vec<&str> {
        self.entries.iter().map(|(k, _)| k.as_str()).collect()
    }
}

impl Extend<(String, ParamValue)> for RequestParameters {
    fn extend<I: IntoIterator<Item = (String, ParamValue)>>(&mut self, iter: I) {
        for (name, value) in iter {
            self.insert(name, value);
        }
    }
}

impl IntoIterator for RequestParameters {
    type Item = (String, ParamValue);
    type IntoIter = std::vec::IntoIter<(String, ParamValue)>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl<K: Into<String>, V: Into<ParamValue>> FromIterator<(K, V)> for RequestParameters {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut params = Self::new();
        for (name, value) in iter {
            params.insert(name, value);
        }
        params
    }
}

/// Add the account fields every request carries.
///
/// `auth_key`, `format` and `pretty` always take the given values, even when
/// `params` already holds entries with those names.
pub fn prepare(
    mut params: RequestParameters,
    api_key: &str,
    format: &str,
    pretty: bool,
) -> RequestParameters {
    params.insert("auth_key", api_key);
    params.insert("format", format);
    params.insert("pretty", pretty);
    params
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_keeps_order_and_overwrites_in_place() {
        let mut params = RequestParameters::new();
        params.insert("nl_fourpp", "6225");
        params.insert("range", 5000u32);
        params.insert("nl_fourpp", "6216");

        assert_eq!(params.names(), vec!["nl_fourpp", "range"]);
        assert_eq!(params.get("nl_fourpp"), Some(&ParamValue::from("6216")));
    }

    #[test]
    fn test_prepare_appends_account_fields() {
        let params = prepare(
            RequestParameters::new().with("lat", 50.85803),
            "secret",
            "json",
            false,
        );

        assert_eq!(params.names(), vec!["lat", "auth_key", "format", "pretty"]);
        assert_eq!(params.get("auth_key"), Some(&ParamValue::from("secret")));
        assert_eq!(params.get("pretty"), Some(&ParamValue::Bool(false)));
    }

    #[test]
    fn test_prepare_overrides_caller_format_and_auth_key() {
        let caller = RequestParameters::new()
            .with("format", "xml")
            .with("auth_key", "someone-else")
            .with("pretty", true)
            .with("nl_city", "Maast");

        let params = prepare(caller, "secret", "json", false);

        assert_eq!(params.get("format"), Some(&ParamValue::from("json")));
        assert_eq!(params.get("auth_key"), Some(&ParamValue::from("secret")));
        assert_eq!(params.get("pretty"), Some(&ParamValue::Bool(false)));
        assert_eq!(params.len(), 4);
    }

    #[test]
    fn test_value_encoding() {
        assert_eq!(ParamValue::Bool(true).to_string(), "1");
        assert_eq!(ParamValue::Bool(false).to_string(), "0");
        assert_eq!(ParamValue::Float(50.85803).to_string(), "50.85803");
        assert_eq!(ParamValue::Int(-3).to_string(), "-3");
    }

    #[test]
    fn test_collect_from_pairs() {
        let params: RequestParameters = vec![("lat", 50.1), ("lng", 5.7)].into_iter().collect();
        assert_eq!(params.names(), vec!["lat", "lng"]);
    }
}
