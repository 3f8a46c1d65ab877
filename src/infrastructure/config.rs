use serde::Deserialize;

pub const DEFAULT_LISTEN_ADDR: &str = "0.0.0.0:8080";
pub const DEFAULT_BASE_URL: &str = "https://superset.pvt.zluri.dev";

const CONFIG_FILE: &str = "config/copier";
const ENV_PREFIX: &str = "COPIER";

#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    pub server: ServerSettings,
    pub superset: SupersetSettings,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerSettings {
    pub listen_addr: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct SupersetSettings {
    /// Prefilled into the form's base URL field
    pub default_base_url: String,
}

/// Load `config/copier.{toml,yaml,json}` if present, overridden by
/// `COPIER__SECTION__KEY` environment variables.
pub fn load_app_config() -> anyhow::Result<AppConfig> {
    load_with_source(config::File::with_name(CONFIG_FILE).required(false))
}

fn load_with_source<S>(source: S) -> anyhow::Result<AppConfig>
where
    S: config::Source + Send + Sync + 'static,
{
    let settings = config::Config::builder()
        .set_default("server.listen_addr", DEFAULT_LISTEN_ADDR)?
        .set_default("superset.default_base_url", DEFAULT_BASE_URL)?
        .add_source(source)
        .add_source(config::Environment::with_prefix(ENV_PREFIX).separator("__"))
        .build()?;

    Ok(settings.try_deserialize()?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use config::{File, FileFormat};

    #[test]
    fn test_defaults_apply_without_file() {
        let cfg = load_with_source(File::from_str("", FileFormat::Toml)).unwrap();
        assert_eq!(cfg.server.listen_addr, DEFAULT_LISTEN_ADDR);
        assert_eq!(cfg.superset.default_base_url, DEFAULT_BASE_URL);
    }

    #[test]
    fn test_file_overrides_defaults() {
        let toml = r#"
[server]
listen_addr = "127.0.0.1:9000"

[superset]
default_base_url = "https://bi.example.com"
"#;
        let cfg = load_with_source(File::from_str(toml, FileFormat::Toml)).unwrap();
        assert_eq!(cfg.server.listen_addr, "127.0.0.1:9000");
        assert_eq!(cfg.superset.default_base_url, "https://bi.example.com");
    }
}
