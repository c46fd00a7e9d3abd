//! Provider credentials read once at startup.

use std::fmt;

use crate::defaults::{ENV_DEEPSEEK_API_KEY, ENV_OPENROUTER_API_KEY};

/// API keys for the inference providers.
///
/// Only the OpenRouter key is used for requests. The DeepSeek key is carried
/// so that deployments configured for both providers keep a single source of
/// truth for credentials.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct ProviderCredentials {
    pub openrouter_api_key: Option<String>,
    pub deepseek_api_key: Option<String>,
}

impl ProviderCredentials {
    /// Read credentials from the process environment.
    ///
    /// Empty values are treated as unset.
    pub fn from_env() -> Self {
        Self {
            openrouter_api_key: non_empty_var(ENV_OPENROUTER_API_KEY),
            deepseek_api_key: non_empty_var(ENV_DEEPSEEK_API_KEY),
        }
    }

    pub fn has_openrouter_key(&self) -> bool {
        self.openrouter_api_key.is_some()
    }

    pub fn has_deepseek_key(&self) -> bool {
        self.deepseek_api_key.is_some()
    }
}

/// Read an environment variable, treating unset, empty and whitespace-only
/// values alike.
pub fn non_empty_var(name: &str) -> Option<String> {
    std::env::var(name)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn redact(key: &Option<String>) -> &'static str {
    if key.is_some() {
        "<redacted>"
    } else {
        "<unset>"
    }
}

impl fmt::Debug for ProviderCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProviderCredentials")
            .field("openrouter_api_key", &redact(&self.openrouter_api_key))
            .field("deepseek_api_key", &redact(&self.deepseek_api_key))
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_debug_redacts_keys() {
        let creds = ProviderCredentials {
            openrouter_api_key: Some("sk-or-secret".to_string()),
            deepseek_api_key: None,
        };
        let debug = format!("{:?}", creds);
        assert!(!debug.contains("sk-or-secret"));
        assert!(debug.contains("<redacted>"));
        assert!(debug.contains("<unset>"));
    }

    #[test]
    fn test_non_empty_var_filters_blank_values() {
        std::env::set_var("MEDSCRIBE_TEST_BLANK_VAR", "   ");
        std::env::set_var("MEDSCRIBE_TEST_SET_VAR", " value ");
        assert_eq!(non_empty_var("MEDSCRIBE_TEST_BLANK_VAR"), None);
        assert_eq!(non_empty_var("MEDSCRIBE_TEST_UNSET_VAR"), None);
        assert_eq!(
            non_empty_var("MEDSCRIBE_TEST_SET_VAR").as_deref(),
            Some("value")
        );
    }

    #[test]
    fn test_presence_helpers() {
        let creds = ProviderCredentials {
            openrouter_api_key: Some("a".to_string()),
            deepseek_api_key: None,
        };
        assert!(creds.has_openrouter_key());
        assert!(!creds.has_deepseek_key());
        assert!(!ProviderCredentials::default().has_openrouter_key());
    }
}
