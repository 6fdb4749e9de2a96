use super::params::{Params, ParamRules};
use super::shape::ContentShape;

/// Static description of a single queryable route
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Endpoint {
    /// Path segment appended to the API base
    pub route: &'static str,

    /// Documented parameter names. Empty list disables the unknown parameters warning
    pub params: &'static [&'static str],

    pub rules: ParamRules,
    pub shape: ContentShape
}

impl Endpoint {
    #[inline]
    pub const fn new(route: &'static str, shape: ContentShape) -> Self {
        Self {
            route,
            params: &[],
            rules: ParamRules::NONE,
            shape
        }
    }

    #[inline]
    pub const fn with_params(self, params: &'static [&'static str]) -> Self {
        Self {
            params,
            ..self
        }
    }

    #[inline]
    pub const fn with_rules(self, rules: ParamRules) -> Self {
        Self {
            rules,
            ..self
        }
    }

    /// List given parameters this endpoint doesn't document
    pub fn unknown_params<'a>(&self, params: &'a Params) -> Vec<&'a str> {
        if self.params.is_empty() {
            return Vec::new();
        }

        params.keys()
            .filter(|key| !self.params.iter().any(|param| param == key))
            .collect()
    }
}
