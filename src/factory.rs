//! Building folding filters from analyzer configuration.
//!
//! Host pipelines usually describe their analysis chain as a list of named
//! components with string arguments. [`AsciiFoldingFilterFactory`] validates
//! those arguments once and then creates one filter per stream.
use crate::{filter::AsciiFoldingFilter, token::TokenStream};
use std::collections::HashMap;
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid boolean `{value}` for parameter `{key}`")]
    InvalidBool { key: &'static str, value: String },

    #[error("unknown parameters: {0}")]
    UnknownParameters(String),
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AsciiFoldingFilterFactory {
    preserve_original: bool,
}

impl AsciiFoldingFilterFactory {
    /// Name the component is registered under.
    pub const NAME: &'static str = "asciiFolding";
    pub const PRESERVE_ORIGINAL: &'static str = "preserveOriginal";

    pub const fn new(preserve_original: bool) -> Self {
        Self { preserve_original }
    }

    /// Build from string arguments. Every argument must be consumed.
    ///
    /// ```
    /// use std::collections::HashMap;
    /// use asciifold::AsciiFoldingFilterFactory;
    ///
    /// let args = HashMap::from([("preserveOriginal".to_string(), "true".to_string())]);
    /// let factory = AsciiFoldingFilterFactory::from_args(args).unwrap();
    /// assert!(factory.preserve_original());
    /// ```
    pub fn from_args(mut args: HashMap<String, String>) -> Result<Self, ConfigError> {
        let preserve_original = take_bool(&mut args, Self::PRESERVE_ORIGINAL, false)?;
        if !args.is_empty() {
            let mut keys: Vec<_> = args.into_keys().collect();
            keys.sort_unstable();
            return Err(ConfigError::UnknownParameters(keys.join(", ")));
        }
        debug!(preserve_original, "created {} filter factory", Self::NAME);
        Ok(Self::new(preserve_original))
    }

    #[inline]
    pub fn preserve_original(&self) -> bool {
        self.preserve_original
    }

    pub fn create<S: TokenStream>(&self, input: S) -> AsciiFoldingFilter<S> {
        AsciiFoldingFilter::with_preserve_original(input, self.preserve_original)
    }

    /// Variant used for wildcard, prefix and fuzzy query terms, which must
    /// analyze to exactly one term: never re-emits the original.
    pub fn multi_term_component(&self) -> Self {
        Self::new(false)
    }
}

fn take_bool(
    args: &mut HashMap<String, String>,
    key: &'static str,
    default: bool,
) -> Result<bool, ConfigError> {
    let Some(value) = args.remove(key) else {
        return Ok(default);
    };
    let parsed = match value.trim() {
        v if v.eq_ignore_ascii_case("true") => Some(true),
        v if v.eq_ignore_ascii_case("false") => Some(false),
        _ => None,
    };
    parsed.ok_or(ConfigError::InvalidBool { key, value })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::token::{PreTokenized, TokenStream};

    fn args(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|&(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_defaults_to_no_preserve() {
        let factory = AsciiFoldingFilterFactory::from_args(HashMap::new()).unwrap();
        assert!(!factory.preserve_original());
        assert_eq!(factory, AsciiFoldingFilterFactory::default());
    }

    #[test]
    fn test_parses_preserve_original() {
        for (raw, expected) in [("true", true), ("TRUE", true), (" false ", false)] {
            let factory =
                AsciiFoldingFilterFactory::from_args(args(&[("preserveOriginal", raw)])).unwrap();
            assert_eq!(factory.preserve_original(), expected, "{raw}");
        }
    }

    #[test]
    fn test_rejects_invalid_bool() {
        let err = AsciiFoldingFilterFactory::from_args(args(&[("preserveOriginal", "yes")]))
            .unwrap_err();
        assert_eq!(
            err,
            ConfigError::InvalidBool {
                key: "preserveOriginal",
                value: "yes".to_string()
            }
        );
        assert_eq!(
            err.to_string(),
            "invalid boolean `yes` for parameter `preserveOriginal`"
        );
    }

    #[test]
    fn test_rejects_unknown_parameters() {
        let err = AsciiFoldingFilterFactory::from_args(args(&[
            ("preserveOriginal", "true"),
            ("lowercase", "true"),
            ("bogus", "1"),
        ]))
        .unwrap_err();
        assert_eq!(
            err,
            ConfigError::UnknownParameters("bogus, lowercase".to_string())
        );
    }

    #[test]
    fn test_create_applies_setting() {
        let factory = AsciiFoldingFilterFactory::new(true);
        let texts: Vec<String> = factory
            .create(PreTokenized::whitespace("Ærø"))
            .tokens()
            .map(|t| t.unwrap().text)
            .collect();
        assert_eq!(texts, vec!["AEro", "Ærø"]);
    }

    #[test]
    fn test_multi_term_component_never_preserves() {
        let factory = AsciiFoldingFilterFactory::new(true);
        let multi_term = factory.multi_term_component();
        assert!(!multi_term.preserve_original());

        let texts: Vec<String> = multi_term
            .create(PreTokenized::whitespace("Ærø*"))
            .tokens()
            .map(|t| t.unwrap().text)
            .collect();
        assert_eq!(texts, vec!["AEro*"]);
    }
}
