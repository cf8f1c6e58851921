use serde::Deserialize;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub store: StoreConfig,
    pub refresh: RefreshConfig,
    pub export: ExportConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct StoreConfig {
    /// Base URL of the record store endpoint.
    pub base_url: String,
    /// Page size used when paging through the store.
    pub page_size: u32,
}

#[derive(Debug, Deserialize, Clone)]
pub struct RefreshConfig {
    /// Debounce window before a filter change triggers a re-fetch.
    pub debounce_ms: u64,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ExportConfig {
    /// Directory exported documents are written to.
    pub output_dir: String,
}

/// Default configuration embedded in the binary
const DEFAULT_CONFIG: &str = r#"
[store]
base_url = "http://127.0.0.1:8080"
page_size = 200

[refresh]
debounce_ms = 400

[export]
output_dir = "target/exports"
"#;

/// Load configuration from config.toml file
///
/// Search order:
/// 1. Next to the executable (for production)
/// 2. Falls back to embedded default config
pub fn load_config() -> anyhow::Result<Config> {
    // Try to find config.toml next to the executable
    if let Ok(exe_path) = std::env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            let config_path = exe_dir.join("config.toml");

            if config_path.exists() {
                tracing::info!("Loading config from: {}", config_path.display());
                let contents = std::fs::read_to_string(&config_path)?;
                let config: Config = toml::from_str(&contents)?;
                return Ok(config);
            } else {
                tracing::warn!("config.toml not found at: {}", config_path.display());
            }
        }
    }

    // Fall back to default config
    tracing::info!("Using default embedded configuration");
    let config: Config = toml::from_str(DEFAULT_CONFIG)?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_loads() {
        let config: Result<Config, _> = toml::from_str(DEFAULT_CONFIG);
        assert!(config.is_ok());
        let config = config.unwrap();
        assert_eq!(config.store.page_size, 200);
        assert_eq!(config.refresh.debounce_ms, 400);
        assert_eq!(config.export.output_dir, "target/exports");
    }
}
