use std::env;
use std::path::PathBuf;

mod logging;
pub use logging::init_logging;

#[derive(Debug, Clone)]
pub struct AppConfig {
    /// JSON map of exchange name to `{ adapter, index }`.
    pub adapters_file: PathBuf,
    /// Build request to encode; stdin when unset.
    pub request_file: Option<PathBuf>,
    pub pretty_output: bool,
    pub log_level: String,
}

pub fn load_config() -> AppConfig {
    dotenv::dotenv().ok();

    let adapters_file = env::var("ADAPTERS_FILE")
        .map(PathBuf::from)
        .expect("ADAPTERS_FILE must be set");
    let request_file = match env::var("REQUEST_FILE") {
        Ok(value) if !value.trim().is_empty() => Some(PathBuf::from(value)),
        Ok(_) | Err(env::VarError::NotPresent) => None,
        Err(err) => panic!("Failed reading REQUEST_FILE: {err}"),
    };
    let log_level = env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

    AppConfig {
        adapters_file,
        request_file,
        pretty_output: parse_env_bool_strict("OUTPUT_PRETTY", false),
        log_level,
    }
}

fn parse_env_bool_strict(key: &str, default: bool) -> bool {
    let value = match env::var(key) {
        Ok(value) => value,
        Err(env::VarError::NotPresent) => return default,
        Err(err) => panic!("Failed reading {key}: {err}"),
    };
    parse_bool(&value).unwrap_or_else(|| {
        panic!("Invalid {key}: expected one of 1/0/true/false/yes/no, got {value}")
    })
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" => Some(true),
        "0" | "false" | "no" => Some(false),
        _ => None,
    }
}
