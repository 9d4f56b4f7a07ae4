use config::{Config, ConfigError, Environment, File};
use once_cell::sync::OnceCell;
use serde_json::Value;
use std::env;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

pub mod models;
pub use models::*;

/// Marker value that is replaced by the environment variable named after the key path.
pub const SECRET_MARKER: &str = "secret_from_env";

/// Loads the configuration from the directory named by `CONFIG_DIR` (default `config`).
pub fn load_config() -> Result<AppConfig, ConfigError> {
    ensure_dotenv_loaded();
    let config_dir = env::var("CONFIG_DIR")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from("config"));
    load_config_from(&config_dir)
}

/// Layers `default`, then `{RUN_ENV}`, then `{PREFIX}__*` environment variables.
pub fn load_config_from(config_dir: &Path) -> Result<AppConfig, ConfigError> {
    let run_env = env::var("RUN_ENV").unwrap_or_else(|_| "debug".to_string());
    let prefix = env::var("PREFIX").unwrap_or_else(|_| "RENTIFY".to_string());

    let default_path = config_dir.join("default");
    let env_path = config_dir.join(&run_env);
    debug!(
        "Loading config from {} and {}",
        default_path.display(),
        env_path.display()
    );

    let builder = Config::builder()
        .add_source(File::with_name(&default_path.to_string_lossy()).required(false))
        .add_source(File::with_name(&env_path.to_string_lossy()).required(false))
        .add_source(
            Environment::with_prefix(&prefix)
                .separator("__")
                .try_parsing(true),
        );

    let raw_config: AppConfig = builder.build()?.try_deserialize()?;
    apply_env_overrides_from_marker(raw_config)
}

/// Recursively replaces all "secret_from_env" string values with environment variable values
fn inject_env_secrets(value: &mut Value) {
    fn walk(path: Vec<String>, obj: &mut Value) {
        match obj {
            Value::Object(map) => {
                for (k, v) in map.iter_mut() {
                    let mut new_path = path.clone();
                    new_path.push(k.to_string());
                    walk(new_path, v);
                }
            }
            Value::String(s) if s == SECRET_MARKER => {
                let env_key = path.join("_").to_uppercase();
                if let Ok(env_val) = env::var(&env_key) {
                    *obj = Value::String(env_val);
                } else {
                    warn!("env var {} not found for {}", env_key, SECRET_MARKER);
                }
            }
            _ => {}
        }
    }

    walk(vec![], value);
}

/// Applies environment overrides based on "secret_from_env" markers in serialized config
pub fn apply_env_overrides_from_marker(config: AppConfig) -> Result<AppConfig, ConfigError> {
    let mut json = serde_json::to_value(&config)
        .map_err(|err| ConfigError::Message(format!("failed to serialize config: {err}")))?;
    inject_env_secrets(&mut json);
    serde_json::from_value(json)
        .map_err(|err| ConfigError::Message(format!("failed to rebuild config: {err}")))
}

static INIT_DOTENV: OnceCell<()> = OnceCell::new();

/// Loads the dotenv file once per process.
///
/// `DOTENV_OVERRIDE` wins, then a first CLI argument starting with `.env`,
/// then `.env`. Returns the path that was tried.
pub fn ensure_dotenv_loaded() -> String {
    let dotenv_path_override = env::var("DOTENV_OVERRIDE").ok();
    let dotenv_path_arg = env::args().nth(1).filter(|s| s.starts_with(".env"));

    let dotenv_path = dotenv_path_override
        .or(dotenv_path_arg)
        .unwrap_or_else(|| ".env".to_string());

    INIT_DOTENV.get_or_init(|| {
        dotenv::from_filename(&dotenv_path).ok();
    });

    dotenv_path
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn sample_config(token: &str) -> AppConfig {
        AppConfig {
            server: ServerConfig {
                host: "127.0.0.1".to_string(),
                port: 8086,
            },
            notion: NotionConfig {
                api_base_url: "https://api.notion.com/v1".to_string(),
                notion_version: "2022-06-28".to_string(),
                token: token.to_string(),
                devices_database_id: "devices".to_string(),
                locations_database_id: "locations".to_string(),
                page_size: 100,
                timeout_secs: 30,
            },
            inventory: InventoryConfig::default(),
        }
    }

    #[test]
    fn test_secret_marker_is_replaced_from_env() {
        let mut value = serde_json::json!({
            "rentify_test_marker": { "token": SECRET_MARKER },
            "plain": "kept"
        });
        env::set_var("RENTIFY_TEST_MARKER_TOKEN", "from-env");

        inject_env_secrets(&mut value);

        assert_eq!(value["rentify_test_marker"]["token"], "from-env");
        assert_eq!(value["plain"], "kept");
    }

    #[test]
    fn test_missing_secret_env_keeps_marker() {
        let mut value = serde_json::json!({ "rentify_absent": { "key": SECRET_MARKER } });

        inject_env_secrets(&mut value);

        assert_eq!(value["rentify_absent"]["key"], SECRET_MARKER);
    }

    #[test]
    fn test_plain_config_survives_override_pass() {
        let config = apply_env_overrides_from_marker(sample_config("plain-token")).unwrap();
        assert_eq!(config.notion.token, "plain-token");
        assert_eq!(config.notion.page_size, 100);
    }

    #[test]
    fn test_load_config_from_directory_applies_defaults() {
        let dir = env::temp_dir().join(format!("rentify-config-test-{}", std::process::id()));
        fs::create_dir_all(&dir).unwrap();
        fs::write(
            dir.join("default.toml"),
            r#"
[server]
host = "0.0.0.0"
port = 9000

[notion]
token = "abc"
devices_database_id = "dev-db"
locations_database_id = "loc-db"
"#,
        )
        .unwrap();

        let config = load_config_from(&dir).unwrap();

        assert_eq!(config.server.port, 9000);
        assert_eq!(config.notion.api_base_url, "https://api.notion.com/v1");
        assert_eq!(config.notion.notion_version, "2022-06-28");
        assert_eq!(config.notion.page_size, 100);
        assert_eq!(config.notion.timeout_secs, 30);
        assert!(config.inventory.time_zone.is_none());

        fs::remove_dir_all(&dir).ok();
    }
}
