//! Application Configuration
//!
//! Credentials for the LLM and the hosted database, read once at start-up.
//! A `.env` file next to the binary is honoured via `dotenvy`.

/// Fixed model identifier, not user-configurable
pub const CLAUDE_MODEL: &str = "claude-3-5-sonnet-20241022";

/// Environment keys, each with the legacy `VITE_` name as fallback
const CLAUDE_API_KEY: [&str; 2] = ["CLAUDE_API_KEY", "VITE_CLAUDE_API_KEY"];
const SUPABASE_URL: [&str; 2] = ["SUPABASE_URL", "VITE_SUPABASE_URL"];
const SUPABASE_ANON_KEY: [&str; 2] = ["SUPABASE_ANON_KEY", "VITE_SUPABASE_ANON_KEY"];

/// Hosted database endpoint and public key
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SupabaseConfig {
    /// Project URL without trailing slash
    pub url: String,
    pub anon_key: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub claude_api_key: Option<String>,
    pub claude_model: &'static str,
    pub supabase: Option<SupabaseConfig>,
}

impl AppConfig {
    /// Load `.env` (if any) and read the process environment
    pub fn from_env() -> Self {
        if let Ok(path) = dotenvy::dotenv() {
            tracing::debug!(path = %path.display(), "Loaded .env file");
        }
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key lookup; empty values count as missing
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let read = |keys: [&str; 2]| {
            keys.into_iter()
                .filter_map(|k| lookup(k))
                .map(|v| v.trim().to_string())
                .find(|v| !v.is_empty())
        };

        let supabase = match (read(SUPABASE_URL), read(SUPABASE_ANON_KEY)) {
            (Some(url), Some(anon_key)) => Some(SupabaseConfig {
                url: url.trim_end_matches('/').to_string(),
                anon_key,
            }),
            _ => None,
        };

        Self {
            claude_api_key: read(CLAUDE_API_KEY),
            claude_model: CLAUDE_MODEL,
            supabase,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(pairs: &[(&str, &str)]) -> AppConfig {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        AppConfig::from_lookup(|k| vars.get(k).cloned())
    }

    #[test]
    fn test_full_config() {
        let config = config_from(&[
            ("CLAUDE_API_KEY", "sk-test"),
            ("SUPABASE_URL", "https://abc.supabase.co/"),
            ("SUPABASE_ANON_KEY", "anon"),
        ]);
        assert_eq!(config.claude_api_key.as_deref(), Some("sk-test"));
        assert_eq!(config.claude_model, CLAUDE_MODEL);
        assert_eq!(
            config.supabase,
            Some(SupabaseConfig {
                url: "https://abc.supabase.co".into(),
                anon_key: "anon".into(),
            })
        );
    }

    #[test]
    fn test_vite_fallback_keys() {
        let config = config_from(&[
            ("VITE_CLAUDE_API_KEY", "sk-vite"),
            ("VITE_SUPABASE_URL", "https://x.supabase.co"),
            ("VITE_SUPABASE_ANON_KEY", "k"),
        ]);
        assert_eq!(config.claude_api_key.as_deref(), Some("sk-vite"));
        assert!(config.supabase.is_some());
    }

    #[test]
    fn test_empty_and_partial_values_are_missing() {
        let config = config_from(&[
            ("CLAUDE_API_KEY", "  "),
            ("SUPABASE_URL", "https://x.supabase.co"),
        ]);
        assert_eq!(config.claude_api_key, None);
        assert_eq!(config.supabase, None);
    }
}
