//! Query-string access with the listing conventions: unparseable numbers are
//! "no constraint", flags are on only for the literal `true`.

use url::form_urlencoded;

pub const SKIP: &str = "skip";
pub const LIMIT: &str = "limit";

/// Decoded query pairs in their original order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryParams {
    pairs: Vec<(String, String)>,
}

impl QueryParams {
    pub fn parse(query: &str) -> Self {
        let query = query.strip_prefix('?').unwrap_or(query);
        Self {
            pairs: form_urlencoded::parse(query.as_bytes())
                .map(|(k, v)| (k.into_owned(), v.into_owned()))
                .collect(),
        }
    }

    /// First value for `key`.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Finite number, or `None` when missing or unparseable.
    pub fn number(&self, key: &str) -> Option<f64> {
        self.get(key)
            .and_then(|v| v.trim().parse::<f64>().ok())
            .filter(|v| v.is_finite())
    }

    pub fn count(&self, key: &str) -> Option<usize> {
        self.get(key).and_then(|v| v.trim().parse::<usize>().ok())
    }

    pub fn flag(&self, key: &str) -> bool {
        self.get(key) == Some("true")
    }

    /// Comma-separated id list; unparseable entries are dropped.
    pub fn ids(&self, key: &str) -> Vec<i64> {
        self.get(key)
            .map(|v| {
                v.split(',')
                    .filter_map(|s| s.trim().parse::<i64>().ok())
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Pairs whose key is not in `owned`, for carrying through navigation.
    pub fn without(&self, owned: &[&str]) -> Vec<(String, String)> {
        self.pairs
            .iter()
            .filter(|(k, _)| !owned.contains(&k.as_str()))
            .cloned()
            .collect()
    }
}

/// Accumulates pairs and renders `path?query` navigation targets.
#[derive(Debug, Default)]
pub struct QueryWriter {
    pairs: Vec<(String, String)>,
}

impl QueryWriter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_pairs(pairs: Vec<(String, String)>) -> Self {
        Self { pairs }
    }

    pub fn push(&mut self, key: &str, value: impl ToString) -> &mut Self {
        self.pairs.push((key.to_string(), value.to_string()));
        self
    }

    pub fn push_if(&mut self, cond: bool, key: &str, value: impl ToString) -> &mut Self {
        if cond {
            self.push(key, value);
        }
        self
    }

    pub fn extend(&mut self, pairs: Vec<(String, String)>) -> &mut Self {
        self.pairs.extend(pairs);
        self
    }

    pub fn finish(&self) -> String {
        let mut ser = form_urlencoded::Serializer::new(String::new());
        for (k, v) in &self.pairs {
            ser.append_pair(k, v);
        }
        ser.finish()
    }

    /// `path` alone when there is nothing to write.
    pub fn href(&self, path: &str) -> String {
        let query = self.finish();
        if query.is_empty() {
            path.to_string()
        } else {
            format!("{path}?{query}")
        }
    }
}

/// Shortest decimal form: `4` rather than `4.0`.
pub fn format_number(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{}", value as i64)
    } else {
        format!("{value}")
    }
}
