use std::{collections::HashMap, fs};

use serde::Deserialize;
use url::Url;

/// Client configuration. The service address is the only knob this
/// layer has; everything else about the HTTP contract is fixed.
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub service_url: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            service_url: "http://127.0.0.1:5000".into(),
        }
    }
}

/// Load settings from defaults, then `dashboard.toml` in the working
/// directory, then environment variables. Later sources win; invalid
/// values are ignored rather than fatal.
pub fn load_settings() -> Settings {
    let mut settings = Settings::default();

    if let Ok(raw) = fs::read_to_string("dashboard.toml") {
        if let Ok(file_cfg) = toml::from_str::<HashMap<String, String>>(&raw) {
            if let Some(v) = file_cfg.get("service_url") {
                apply_service_url(&mut settings, v);
            }
        }
    }

    if let Ok(v) = std::env::var("SERVICE_URL") {
        apply_service_url(&mut settings, &v);
    }
    if let Ok(v) = std::env::var("APP__SERVICE_URL") {
        apply_service_url(&mut settings, &v);
    }

    settings
}

fn apply_service_url(settings: &mut Settings, raw: &str) {
    match normalize_service_url(raw) {
        Some(normalized) => settings.service_url = normalized,
        None => tracing::warn!(raw, "ignoring invalid service_url"),
    }
}

/// Accept only absolute http(s) addresses; strip any trailing slash
/// so endpoint paths can be appended uniformly.
pub fn normalize_service_url(raw: &str) -> Option<String> {
    let raw = raw.trim();
    let parsed = Url::parse(raw).ok()?;
    if parsed.scheme() != "http" && parsed.scheme() != "https" {
        return None;
    }
    Some(raw.trim_end_matches('/').to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_points_at_local_service() {
        assert_eq!(Settings::default().service_url, "http://127.0.0.1:5000");
    }

    #[test]
    fn normalizes_trailing_slash() {
        assert_eq!(
            normalize_service_url("http://10.0.0.7:5000/").as_deref(),
            Some("http://10.0.0.7:5000")
        );
    }

    #[test]
    fn rejects_non_http_schemes_and_relative_paths() {
        assert_eq!(normalize_service_url("ftp://host:21"), None);
        assert_eq!(normalize_service_url("localhost:5000/metrics"), None);
        assert_eq!(normalize_service_url("not a url"), None);
    }

    #[test]
    fn invalid_override_keeps_previous_value() {
        let mut settings = Settings::default();
        apply_service_url(&mut settings, "::nope::");
        assert_eq!(settings.service_url, "http://127.0.0.1:5000");

        apply_service_url(&mut settings, "https://gold.example.com/");
        assert_eq!(settings.service_url, "https://gold.example.com");
    }
}
