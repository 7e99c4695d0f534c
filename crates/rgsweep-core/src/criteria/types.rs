use indexmap::IndexMap;

use super::errors::CriteriaError;

/// Tag criteria: tag key to wanted tag value, in insertion order.
///
/// Keys are matched case-sensitively against resource group tags; values are
/// compared case-insensitively. Order only decides which key is reported
/// first when several would match.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Criteria {
    entries: IndexMap<String, String>,
}

impl Criteria {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a criterion. A repeated key replaces the earlier value in place.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.entries.insert(key.into(), value.into());
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Layer `overrides` on top of `self`. Existing keys keep their position.
    pub fn merge(&mut self, overrides: Criteria) {
        self.entries.extend(overrides.entries);
    }

    /// Parse a single `KEY=VALUE` criterion.
    ///
    /// Splits on the first `=`. Both sides are trimmed; the key must not be
    /// empty, the value may be.
    pub fn parse_pair(input: &str) -> Result<(String, String), CriteriaError> {
        let (key, value) = input
            .split_once('=')
            .ok_or_else(|| CriteriaError::MissingSeparator {
                input: input.to_string(),
            })?;

        let key = key.trim();
        if key.is_empty() {
            return Err(CriteriaError::EmptyKey {
                input: input.to_string(),
            });
        }

        Ok((key.to_string(), value.trim().to_string()))
    }

    /// Parse a list of `KEY=VALUE` strings, stopping at the first invalid one.
    pub fn parse_pairs<I, S>(inputs: I) -> Result<Self, CriteriaError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut criteria = Self::new();
        for input in inputs {
            let (key, value) = Self::parse_pair(input.as_ref())?;
            criteria.insert(key, value);
        }
        Ok(criteria)
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Criteria {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        let mut criteria = Self::new();
        for (key, value) in iter {
            criteria.insert(key, value);
        }
        criteria
    }
}
