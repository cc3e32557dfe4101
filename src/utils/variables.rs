use lazy_static::lazy_static;
use regex::{Captures, Regex};
use std::env;

lazy_static! {
    static ref ENV_VAR_RE: Regex = Regex::new(r"\$\{([^}]+)\}|\$([A-Za-z0-9_]+)").unwrap();
}

pub struct VariablesUtils {}

impl VariablesUtils {
    /// Expands ${VAR} or $VAR patterns using the current environment.
    pub fn expand_env_vars(input: &str) -> String {
        Self::expand_with(input, |key| env::var(key).ok())
    }

    /// Expands ${VAR} or $VAR patterns using `lookup`. Unknown names expand to "".
    pub fn expand_with<F>(input: &str, lookup: F) -> String
    where
        F: Fn(&str) -> Option<String>,
    {
        ENV_VAR_RE
            .replace_all(input, |caps: &Captures| {
                let key = caps
                    .get(1)
                    .or_else(|| caps.get(2))
                    .map_or("", |m| m.as_str());
                lookup(key).unwrap_or_default()
            })
            .into_owned()
    }
}
