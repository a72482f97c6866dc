//! Ordered cache keys.

use std::fmt;

/// An ordered tuple of key parts: `(domain, resource, parameters...)`.
///
/// Parameters are stored as `name=value` parts so two keys only match when
/// every parameter matches. A key is a prefix of another when its parts are a
/// leading subsequence of the other's; invalidation works on prefixes.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct QueryKey(Vec<String>);

impl QueryKey {
    pub fn new<I, S>(parts: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self(parts.into_iter().map(Into::into).collect())
    }

    /// Appends a bare part.
    pub fn push(mut self, part: impl Into<String>) -> Self {
        self.0.push(part.into());
        self
    }

    /// Appends a `name=value` parameter part.
    pub fn param(mut self, name: &str, value: impl fmt::Display) -> Self {
        self.0.push(format!("{}={}", name, value));
        self
    }

    pub fn parts(&self) -> &[String] {
        &self.0
    }

    /// The first part, e.g. `director` or `library`.
    pub fn domain(&self) -> &str {
        self.0.first().map(String::as_str).unwrap_or("")
    }

    pub fn starts_with(&self, prefix: &QueryKey) -> bool {
        self.0.starts_with(&prefix.0)
    }
}

impl fmt::Display for QueryKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0.join(":"))
    }
}
