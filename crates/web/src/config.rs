use serde::Deserialize;
use url::Url;

#[derive(Clone, Deserialize)]
pub struct Config {
    pub web: Web,
    pub api: Api,
    #[serde(default)]
    pub assets: Assets,
}

#[derive(Clone, Deserialize)]
pub struct Web {
    #[serde(default = "host_default")]
    pub host: String,
    #[serde(default = "port_default")]
    pub port: u16,
    #[serde(default = "title_default")]
    pub title: String,
    #[serde(default)]
    pub secure_cookies: bool,
    /// Sessions untouched for this long are dropped.
    #[serde(default = "session_idle_minutes_default")]
    pub session_idle_minutes: i64,
}

/// Upstream Instapro API.
#[derive(Clone, Deserialize)]
pub struct Api {
    pub base_url: Url,
    pub personal_key: String,
}

#[derive(Clone, Deserialize)]
pub struct Assets {
    #[serde(default = "assets_dir_default")]
    pub dir: String,
}

impl Default for Assets {
    fn default() -> Self {
        Assets {
            dir: assets_dir_default(),
        }
    }
}

fn host_default() -> String {
    String::from("0.0.0.0")
}

fn port_default() -> u16 {
    8080
}

fn title_default() -> String {
    String::from("Instapro")
}

fn session_idle_minutes_default() -> i64 {
    60
}

fn assets_dir_default() -> String {
    String::from("assets")
}

#[cfg(test)]
mod tests {
    use super::Config;

    #[test]
    fn defaults_fill_missing_keys() {
        let config: Config = toml::from_str(
            r#"
            [web]

            [api]
            base_url = "https://wedev-api.sky.pro"
            personal_key = "prod"
            "#,
        )
        .unwrap();

        assert_eq!(config.web.host, "0.0.0.0");
        assert_eq!(config.web.port, 8080);
        assert_eq!(config.web.title, "Instapro");
        assert!(!config.web.secure_cookies);
        assert_eq!(config.web.session_idle_minutes, 60);
        assert_eq!(config.assets.dir, "assets");
        assert_eq!(config.api.personal_key, "prod");
    }
}
