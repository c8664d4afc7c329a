use pmhub_config::PmhubConfig;

/// Emit warnings for likely mistyped env var keys that silently fell back to defaults.
pub fn warn_unconfigured(config: &PmhubConfig) {
    for warning in collect_unconfigured_warnings(config, std::env::vars()) {
        tracing::warn!("{warning}");
    }
}

fn collect_unconfigured_warnings<I>(config: &PmhubConfig, env: I) -> Vec<String>
where
    I: IntoIterator<Item = (String, String)>,
{
    let env_keys = env.into_iter().map(|(key, _)| key).collect::<Vec<_>>();

    let mut warnings = Vec::new();

    if !config.auth.is_configured() && has_env_prefix(&env_keys, "PMHUB_AUTH") {
        warnings.push(
            "Auth config appears default while PMHUB_AUTH* env vars exist. Use double underscores (example: PMHUB_AUTH__ANON_KEY)."
                .to_string(),
        );
    }

    if config.content.base_url == pmhub_core::DEFAULT_CONTENT_API
        && has_env_prefix(&env_keys, "PMHUB_CONTENT_")
        && !has_env_prefix(&env_keys, "PMHUB_CONTENT__")
    {
        warnings.push(
            "Content API URL is the built-in default while PMHUB_CONTENT* env vars exist. Use double underscores (example: PMHUB_CONTENT__BASE_URL)."
                .to_string(),
        );
    }

    warnings
}

fn has_env_prefix(keys: &[String], prefix: &str) -> bool {
    keys.iter().any(|key| key.starts_with(prefix))
}

#[cfg(test)]
mod tests {
    use pmhub_config::{AuthConfig, PmhubConfig};

    use super::collect_unconfigured_warnings;

    #[test]
    fn warns_for_single_underscore_keys() {
        let config = PmhubConfig::default();
        let warnings = collect_unconfigured_warnings(
            &config,
            vec![
                ("PMHUB_AUTH_ANON_KEY".to_string(), "anon".to_string()),
                (
                    "PMHUB_CONTENT_BASE_URL".to_string(),
                    "http://localhost:8080".to_string(),
                ),
            ],
        );

        assert_eq!(warnings.len(), 2);
    }

    #[test]
    fn does_not_warn_when_sections_are_configured() {
        let config = PmhubConfig {
            auth: AuthConfig {
                url: "https://demo.supabase.co/auth/v1".to_string(),
                anon_key: "anon".to_string(),
                ..Default::default()
            },
            ..Default::default()
        };

        let warnings = collect_unconfigured_warnings(
            &config,
            vec![
                ("PMHUB_AUTH__ANON_KEY".to_string(), "anon".to_string()),
                ("PMHUB_LOG".to_string(), "debug".to_string()),
            ],
        );

        assert!(warnings.is_empty());
    }
}
