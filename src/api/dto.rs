//! Request and response types
//!
//! Query-string parameters are taken as optional strings and parsed
//! leniently: anything unparsable falls back to the default. A repeated
//! key keeps its first value.

use serde::Serialize;
use std::collections::HashMap;
use std::str::FromStr;

use crate::query::FilterParams;

/// First value of every key in query-string order
fn first_values(pairs: Vec<(String, String)>) -> HashMap<String, String> {
    let mut values = HashMap::new();
    for (key, value) in pairs {
        values.entry(key).or_insert(value);
    }
    values
}

/// Filter parameters of `GET /`
#[derive(Debug, Default)]
pub struct FilterQuery {
    pub creation_min: Option<String>,
    pub creation_max: Option<String>,
    pub album_min: Option<String>,
    pub album_max: Option<String>,
    pub members_min: Option<String>,
    pub members_max: Option<String>,
    /// Comma-separated location terms
    pub location: Option<String>,
}

impl FilterQuery {
    pub fn from_pairs(pairs: Vec<(String, String)>) -> Self {
        let mut values = first_values(pairs);
        Self {
            creation_min: values.remove("creation_min"),
            creation_max: values.remove("creation_max"),
            album_min: values.remove("album_min"),
            album_max: values.remove("album_max"),
            members_min: values.remove("members_min"),
            members_max: values.remove("members_max"),
            location: values.remove("location"),
        }
    }

    pub fn into_params(self) -> FilterParams {
        let defaults = FilterParams::default();

        FilterParams {
            creation_min: parse_or(self.creation_min, defaults.creation_min),
            creation_max: parse_or(self.creation_max, defaults.creation_max),
            first_album_min: parse_or(self.album_min, defaults.first_album_min),
            first_album_max: parse_or(self.album_max, defaults.first_album_max),
            members_min: parse_or(self.members_min, defaults.members_min),
            members_max: parse_or(self.members_max, defaults.members_max),
            locations: split_terms(self.location),
        }
    }
}

fn parse_or<T: FromStr>(value: Option<String>, default: T) -> T {
    value
        .filter(|v| !v.is_empty())
        .and_then(|v| v.trim().parse().ok())
        .unwrap_or(default)
}

fn split_terms(value: Option<String>) -> Vec<String> {
    value
        .map(|v| {
            v.split(',')
                .map(str::trim)
                .filter(|term| !term.is_empty())
                .map(str::to_string)
                .collect()
        })
        .unwrap_or_default()
}

/// `?q=` parameter of the search endpoints
#[derive(Debug, Default)]
pub struct SearchQuery {
    pub q: Option<String>,
}

impl SearchQuery {
    pub fn from_pairs(pairs: Vec<(String, String)>) -> Self {
        Self {
            q: first_values(pairs).remove("q"),
        }
    }

    /// Trimmed query text, empty when absent
    pub fn text(&self) -> &str {
        self.q.as_deref().map(str::trim).unwrap_or("")
    }
}

/// Health check response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// "healthy" or "degraded"
    pub status: String,
    /// Loader state: empty, loading or ready
    pub catalog: String,
    /// Artists in the published snapshot
    #[serde(skip_serializing_if = "Option::is_none")]
    pub artists: Option<usize>,
    /// Addresses held in the geocode cache
    pub geocoded_locations: usize,
    pub uptime_seconds: u64,
    pub version: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filter_query_defaults() {
        assert_eq!(FilterQuery::default().into_params(), FilterParams::default());
    }

    #[test]
    fn test_filter_query_parsing() {
        let query = FilterQuery {
            creation_min: Some("1980".to_string()),
            creation_max: Some("abc".to_string()),
            album_min: Some(String::new()),
            album_max: Some(" 2000 ".to_string()),
            members_min: Some("-1".to_string()),
            members_max: Some("4".to_string()),
            location: Some("usa, ,Japan,".to_string()),
        };

        let params = query.into_params();
        assert_eq!(params.creation_min, 1980);
        assert_eq!(params.creation_max, 9999);
        assert_eq!(params.first_album_min, 0);
        assert_eq!(params.first_album_max, 2000);
        assert_eq!(params.members_min, 0);
        assert_eq!(params.members_max, 4);
        assert_eq!(params.locations, vec!["usa".to_string(), "Japan".to_string()]);
    }

    fn pairs(items: &[(&str, &str)]) -> Vec<(String, String)> {
        items
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_repeated_keys_keep_first_value() {
        let params = FilterQuery::from_pairs(pairs(&[
            ("location", "usa"),
            ("creation_min", "1990"),
            ("location", "japan"),
            ("creation_min", "2000"),
            ("unknown", "x"),
        ]))
        .into_params();
        assert_eq!(params.locations, vec!["usa".to_string()]);
        assert_eq!(params.creation_min, 1990);

        let query = SearchQuery::from_pairs(pairs(&[("q", "queen"), ("q", "x")]));
        assert_eq!(query.text(), "queen");
        assert_eq!(SearchQuery::from_pairs(Vec::new()).text(), "");
    }

    #[test]
    fn test_search_query_text() {
        let query = SearchQuery {
            q: Some("  queen ".to_string()),
        };
        assert_eq!(query.text(), "queen");
        assert_eq!(SearchQuery::default().text(), "");
    }
}
