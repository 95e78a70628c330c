use once_cell::sync::Lazy;
use serde::Deserialize;

const SITE_JSON: &str = include_str!("../site.json");

/// Field ids assigned by the external form host.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct FormEndpoint {
    pub action_url: String,
    pub name_field: String,
    pub email_field: String,
    pub phone_field: String,
    pub message_field: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SiteConfig {
    #[serde(default)]
    pub base_path: String,
    #[serde(default = "default_success_notice_ms")]
    pub success_notice_ms: u32,
    pub form: FormEndpoint,
}

fn default_success_notice_ms() -> u32 {
    5_000
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            base_path: String::new(),
            success_notice_ms: default_success_notice_ms(),
            form: FormEndpoint {
                action_url: String::new(),
                name_field: "entry.name".to_string(),
                email_field: "entry.email".to_string(),
                phone_field: "entry.phone".to_string(),
                message_field: "entry.message".to_string(),
            },
        }
    }
}

impl SiteConfig {
    pub fn parse(raw: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(raw)
    }
}

static SITE: Lazy<SiteConfig> = Lazy::new(|| {
    SiteConfig::parse(SITE_JSON).unwrap_or_else(|e| {
        log::error!("site.json is invalid, using defaults: {}", e);
        SiteConfig::default()
    })
});

pub fn site() -> &'static SiteConfig {
    &SITE
}

#[cfg(debug_assertions)]
pub fn asset_prefix() -> &'static str {
    ""  // trunk serve runs from the root
}

#[cfg(not(debug_assertions))]
pub fn asset_prefix() -> &'static str {
    site().base_path.as_str()
}

/// Router basename, `None` when the site is served from the root.
pub fn router_basename() -> Option<String> {
    let prefix = asset_prefix().trim_end_matches('/');
    (!prefix.is_empty()).then(|| prefix.to_string())
}

pub fn asset(path: &str) -> String {
    join_asset(asset_prefix(), path)
}

fn join_asset(prefix: &str, path: &str) -> String {
    if path.starts_with("http://") || path.starts_with("https://") {
        return path.to_string();
    }
    let prefix = prefix.trim_end_matches('/');
    let path = path.trim_start_matches('/');
    format!("{}/{}", prefix, path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bundled_site_json_parses() {
        let config = SiteConfig::parse(SITE_JSON).unwrap();
        assert_eq!(config.base_path, "/roofing");
        assert_eq!(config.success_notice_ms, 5_000);
        assert!(config.form.action_url.ends_with("/formResponse"));
    }

    #[test]
    fn missing_optional_keys_take_defaults() {
        let config = SiteConfig::parse(
            r#"{"form": {"action_url": "https://x", "name_field": "a",
                "email_field": "b", "phone_field": "c", "message_field": "d"}}"#,
        )
        .unwrap();
        assert_eq!(config.base_path, "");
        assert_eq!(config.success_notice_ms, 5_000);
    }

    #[test]
    fn assets_join_onto_prefix() {
        assert_eq!(join_asset("", "/assets/logo.png"), "/assets/logo.png");
        assert_eq!(join_asset("/roofing", "/assets/logo.png"), "/roofing/assets/logo.png");
        assert_eq!(join_asset("/roofing/", "assets/logo.png"), "/roofing/assets/logo.png");
    }

    #[test]
    fn remote_urls_are_left_alone() {
        let url = "https://placehold.co/600x400/grey/white.png?text=Project+1";
        assert_eq!(join_asset("/roofing", url), url);
    }
}
