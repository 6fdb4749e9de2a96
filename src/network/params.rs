use indexmap::IndexMap;

use crate::error::ValidationError;

/// Ordered query parameters
///
/// Keys are unique: setting an existing key replaces its value but keeps its position
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Params(IndexMap<String, String>);

impl Params {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn with(mut self, key: impl ToString, value: impl ToString) -> Self {
        self.set(key, value);

        self
    }

    /// Set parameter only if the value is `Some`
    #[inline]
    pub fn with_opt(self, key: impl ToString, value: Option<impl ToString>) -> Self {
        match value {
            Some(value) => self.with(key, value),
            None => self
        }
    }

    #[inline]
    pub fn set(&mut self, key: impl ToString, value: impl ToString) {
        self.0.insert(key.to_string(), value.to_string());
    }

    #[inline]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    #[inline]
    pub fn contains(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(key, value)| (key.as_str(), value.as_str()))
    }

    #[inline]
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }
}

impl<K: ToString, V: ToString> FromIterator<(K, V)> for Params {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        Self(iter.into_iter()
            .map(|(key, value)| (key.to_string(), value.to_string()))
            .collect())
    }
}

impl<K: ToString, V: ToString, const N: usize> From<[(K, V); N]> for Params {
    #[inline]
    fn from(value: [(K, V); N]) -> Self {
        value.into_iter().collect()
    }
}

/// Presence rules checked before a request is sent
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct ParamRules {
    /// At least one of these must be given. Empty set means no requirement
    pub required_any: &'static [&'static str],

    /// Pairs that can't be given together
    pub conflicts: &'static [[&'static str; 2]]
}

impl ParamRules {
    pub const NONE: Self = Self {
        required_any: &[],
        conflicts: &[]
    };

    /// Check parameters against the rules, returning the first violated one
    pub fn check(&self, params: &Params) -> Result<(), ValidationError> {
        if !self.required_any.is_empty() && !self.required_any.iter().any(|key| params.contains(key)) {
            return Err(ValidationError::MissingRequired(self.required_any.iter()
                .map(|key| key.to_string())
                .collect()));
        }

        for [first, second] in self.conflicts {
            if params.contains(first) && params.contains(second) {
                return Err(ValidationError::Conflict {
                    first: first.to_string(),
                    second: second.to_string()
                });
            }
        }

        Ok(())
    }

    #[inline]
    pub fn validate(&self, params: &Params) -> bool {
        self.check(params).is_ok()
    }
}
