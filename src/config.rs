//! Configuration System
//!
//! Handles loading configuration from files and environment variables.
//! Supports TOML config files and environment variable overrides.

use async_trait::async_trait;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::content::Resource;
use crate::loader::{DirSource, HttpSource, LoadPolicy, LoadResult, ResourceSource};
use crate::scene::SceneParams;

/// Main configuration structure
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub data: DataConfig,

    #[serde(default)]
    pub server: ServerConfig,

    #[serde(default)]
    pub scene: SceneParams,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Where the site documents come from
#[derive(Debug, Clone, Deserialize)]
pub struct DataConfig {
    /// Directory holding events.json, nfts.json, projetos.json, ajudas.json
    #[serde(default = "default_data_dir")]
    pub dir: String,

    /// Base URL to fetch the documents from instead of `dir`
    #[serde(default)]
    pub url: Option<String>,

    #[serde(default)]
    pub policy: LoadPolicy,

    #[serde(default = "default_request_timeout")]
    pub request_timeout_secs: u64,
}

fn default_data_dir() -> String {
    "./public".to_string()
}

fn default_request_timeout() -> u64 {
    10
}

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            dir: default_data_dir(),
            url: None,
            policy: LoadPolicy::default(),
            request_timeout_secs: default_request_timeout(),
        }
    }
}

impl DataConfig {
    /// Build the configured source: the URL when set, the directory otherwise
    pub fn source(&self) -> Result<DataSource, ConfigError> {
        match self.url.as_deref().filter(|u| !u.is_empty()) {
            Some(url) => {
                let timeout = Duration::from_secs(self.request_timeout_secs);
                HttpSource::new(url, timeout)
                    .map(DataSource::Http)
                    .map_err(|e| ConfigError::Source {
                        error: e.to_string(),
                    })
            }
            None => Ok(DataSource::Dir(DirSource::new(&self.dir))),
        }
    }
}

/// Preview server configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    8080
}

impl ServerConfig {
    /// Get the socket address string
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,

    #[serde(default = "default_log_format")]
    pub format: String,

    pub file: Option<String>,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
            file: None,
        }
    }
}

/// Source selected by [`DataConfig::source`]
#[derive(Debug, Clone)]
pub enum DataSource {
    Dir(DirSource),
    Http(HttpSource),
}

#[async_trait]
impl ResourceSource for DataSource {
    fn describe(&self) -> String {
        match self {
            DataSource::Dir(s) => s.describe(),
            DataSource::Http(s) => s.describe(),
        }
    }

    async fn fetch(&self, resource: Resource) -> LoadResult<Vec<u8>> {
        match self {
            DataSource::Dir(s) => s.fetch(resource).await,
            DataSource::Http(s) => s.fetch(resource).await,
        }
    }
}

/// Environment lookup, swappable in tests
trait Env {
    fn var(&self, key: &str) -> Option<String>;
}

struct ProcessEnv;

impl Env for ProcessEnv {
    fn var(&self, key: &str) -> Option<String> {
        std::env::var(key).ok()
    }
}

impl Config {
    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            error: e.to_string(),
        })?;

        Self::parse(path, &content)
    }

    fn parse(path: &Path, content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|e| ConfigError::Parse {
            path: path.to_path_buf(),
            error: e.to_string(),
        })
    }

    /// Load configuration from environment variables only
    pub fn from_env() -> Self {
        let mut config = Config::default();
        config.apply_env_overrides();
        config
    }

    /// Load configuration with environment variable overrides
    pub fn load_with_env(path: &Path) -> Result<Self, ConfigError> {
        let mut config = Self::load(path)?;
        config.apply_env_overrides();
        Ok(config)
    }

    /// Default config file locations, in search order
    pub fn default_paths() -> Vec<PathBuf> {
        [
            dirs::config_dir().map(|p| p.join("dois-de-muitos").join("config.toml")),
            Some(PathBuf::from("./dois-de-muitos.toml")),
        ]
        .into_iter()
        .flatten()
        .collect()
    }

    /// Load from default locations or environment.
    ///
    /// Runs before logging is installed, so nothing is logged here; call
    /// [`ConfigOrigin::log`] once the subscriber is up.
    pub fn load_default() -> (Self, ConfigOrigin) {
        Self::load_first(&Self::default_paths())
    }

    /// First of `paths` that exists and parses, else defaults
    fn load_first(paths: &[PathBuf]) -> (Self, ConfigOrigin) {
        let mut origin = ConfigOrigin::default();

        for path in paths {
            if path.exists() {
                match Self::load_with_env(path) {
                    Ok(config) => {
                        origin.path = Some(path.clone());
                        return (config, origin);
                    }
                    Err(e) => origin.rejected.push((path.clone(), e.to_string())),
                }
            }
        }

        (Self::from_env(), origin)
    }

    /// Apply environment variable overrides to an existing config
    pub fn apply_env_overrides(&mut self) {
        self.apply_overrides_from(&ProcessEnv);
    }

    fn apply_overrides_from(&mut self, env: &dyn Env) {
        // Data overrides
        if let Some(dir) = env.var("DDM_DATA_DIR") {
            self.data.dir = dir;
        }
        if let Some(url) = env.var("DDM_DATA_URL") {
            self.data.url = Some(url).filter(|u| !u.is_empty());
        }
        if let Some(policy) = env.var("DDM_LOAD_POLICY") {
            match policy.parse() {
                Ok(p) => self.data.policy = p,
                Err(e) => tracing::warn!("Ignoring DDM_LOAD_POLICY: {}", e),
            }
        }

        // Server overrides
        if let Some(host) = env.var("DDM_HOST") {
            self.server.host = host;
        }
        if let Some(port) = env.var("DDM_PORT") {
            if let Ok(p) = port.parse() {
                self.server.port = p;
            }
        }

        // Logging overrides
        if let Some(level) = env.var("DDM_LOG_LEVEL") {
            self.logging.level = level;
        }
        if let Some(format) = env.var("DDM_LOG_FORMAT") {
            self.logging.format = format;
        }
    }
}

/// Where [`Config::load_default`] got its configuration from
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ConfigOrigin {
    /// File that was loaded, `None` when running on defaults
    pub path: Option<PathBuf>,
    /// Files that exist but failed to load, with the error
    pub rejected: Vec<(PathBuf, String)>,
}

impl ConfigOrigin {
    pub fn log(&self) {
        for (path, error) in &self.rejected {
            tracing::warn!("Failed to load config from {:?}: {}", path, error);
        }
        match &self.path {
            Some(path) => tracing::info!("Loaded config from {:?}", path),
            None => tracing::info!("Using default config with environment overrides"),
        }
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path:?}: {error}")]
    Io { path: PathBuf, error: String },

    #[error("Failed to parse config file {path:?}: {error}")]
    Parse { path: PathBuf, error: String },

    #[error("Failed to build data source: {error}")]
    Source { error: String },
}

/// Generate a default config file content
pub fn generate_default_config() -> String {
    r#"# Dois de Muitos Configuration
#
# Environment variables override these settings:
# - DDM_DATA_DIR
# - DDM_DATA_URL
# - DDM_LOAD_POLICY
# - DDM_HOST
# - DDM_PORT
# - DDM_LOG_LEVEL
# - DDM_LOG_FORMAT

[data]
# Directory holding events.json, nfts.json, projetos.json and ajudas.json
dir = "./public"

# Fetch the documents from this base URL instead of the directory
# url = "https://coletivo.example/"

# What to keep when some documents fail to load:
# all_or_nothing (any failure empties everything) or per_resource
policy = "all_or_nothing"

# HTTP timeout in seconds when `url` is set
request_timeout_secs = 10

[server]
# Preview server host
host = "127.0.0.1"

# Preview server port
port = 8080

[scene]
# Background scene tunables; omitted keys keep the published values
star_count = 1500
star_spread = 60.0
helix_turns = 10.0
helix_points = 400
helix_radius = 1.2
helix_height = 10.0
marker_stride = 35
max_artifacts = 12
# seed = 42

[logging]
# Log level: trace, debug, info, warn, error
level = "info"

# Log format: pretty (for development) or json (for production)
format = "pretty"

# Optional log file path
# file = "/var/log/dois-de-muitos/preview.log"
"#
    .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use tempfile::tempdir;

    struct MapEnv(HashMap<&'static str, &'static str>);

    impl Env for MapEnv {
        fn var(&self, key: &str) -> Option<String> {
            self.0.get(key).map(|v| v.to_string())
        }
    }

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.data.dir, "./public");
        assert_eq!(config.data.url, None);
        assert_eq!(config.data.policy, LoadPolicy::AllOrNothing);
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.scene, SceneParams::default());
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn test_generated_config_parses() {
        let config = Config::parse(Path::new("generated"), &generate_default_config()).unwrap();
        assert_eq!(config.data.dir, "./public");
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.scene, SceneParams::default());
        assert_eq!(config.logging.format, "pretty");
    }

    #[test]
    fn test_load_partial_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(
            &path,
            "[data]\npolicy = \"per_resource\"\n\n[scene]\nstar_count = 10\nseed = 7\n",
        )
        .unwrap();

        let config = Config::load(&path).unwrap();
        assert_eq!(config.data.policy, LoadPolicy::PerResource);
        assert_eq!(config.data.dir, "./public");
        assert_eq!(config.scene.star_count, 10);
        assert_eq!(config.scene.seed, Some(7));
        assert_eq!(config.scene.helix_points, 400);
    }

    #[test]
    fn test_load_errors() {
        let dir = tempdir().unwrap();

        let missing = Config::load(&dir.path().join("nope.toml")).unwrap_err();
        assert!(matches!(missing, ConfigError::Io { .. }));

        let path = dir.path().join("bad.toml");
        std::fs::write(&path, "[data\n").unwrap();
        let bad = Config::load(&path).unwrap_err();
        assert!(matches!(bad, ConfigError::Parse { .. }));
    }

    #[test]
    fn test_env_overrides() {
        let env = MapEnv(HashMap::from([
            ("DDM_DATA_DIR", "/srv/site"),
            ("DDM_DATA_URL", "https://coletivo.test"),
            ("DDM_LOAD_POLICY", "per-resource"),
            ("DDM_PORT", "9000"),
            ("DDM_LOG_FORMAT", "json"),
        ]));

        let mut config = Config::default();
        config.apply_overrides_from(&env);

        assert_eq!(config.data.dir, "/srv/site");
        assert_eq!(config.data.url.as_deref(), Some("https://coletivo.test"));
        assert_eq!(config.data.policy, LoadPolicy::PerResource);
        assert_eq!(config.server.port, 9000);
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.logging.format, "json");
    }

    #[test]
    fn test_invalid_env_values_ignored() {
        let env = MapEnv(HashMap::from([
            ("DDM_LOAD_POLICY", "sometimes"),
            ("DDM_PORT", "eighty"),
        ]));

        let mut config = Config::default();
        config.apply_overrides_from(&env);

        assert_eq!(config.data.policy, LoadPolicy::AllOrNothing);
        assert_eq!(config.server.port, 8080);
    }

    #[test]
    fn test_load_first_skips_broken_files() {
        let dir = tempdir().unwrap();
        let broken = dir.path().join("broken.toml");
        let good = dir.path().join("good.toml");
        std::fs::write(&broken, "[server\n").unwrap();
        std::fs::write(&good, "[server]\nport = 9100\n").unwrap();

        let paths = vec![dir.path().join("absent.toml"), broken.clone(), good.clone()];
        let (config, origin) = Config::load_first(&paths);

        assert_eq!(config.server.port, 9100);
        assert_eq!(origin.path, Some(good));
        assert_eq!(origin.rejected.len(), 1);
        assert_eq!(origin.rejected[0].0, broken);
    }

    #[test]
    fn test_load_first_falls_back_to_defaults() {
        let dir = tempdir().unwrap();
        let (config, origin) = Config::load_first(&[dir.path().join("absent.toml")]);

        assert_eq!(config.data.dir, Config::default().data.dir);
        assert_eq!(origin, ConfigOrigin::default());
    }

    #[test]
    fn test_origin_logs_through_installed_subscriber() {
        use std::io::Write;
        use std::sync::{Arc, Mutex};

        #[derive(Clone, Default)]
        struct Captured(Arc<Mutex<Vec<u8>>>);

        impl Write for Captured {
            fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
                self.0.lock().unwrap().extend_from_slice(buf);
                Ok(buf.len())
            }

            fn flush(&mut self) -> std::io::Result<()> {
                Ok(())
            }
        }

        let origin = ConfigOrigin {
            path: Some(PathBuf::from("./dois-de-muitos.toml")),
            rejected: vec![(PathBuf::from("/etc/broken.toml"), "bad toml".into())],
        };

        let captured = Captured::default();
        let writer = captured.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_writer(move || writer.clone())
            .with_ansi(false)
            .finish();
        tracing::subscriber::with_default(subscriber, || origin.log());

        let output = String::from_utf8(captured.0.lock().unwrap().clone()).unwrap();
        assert!(output.contains("Failed to load config from \"/etc/broken.toml\": bad toml"));
        assert!(output.contains("Loaded config from \"./dois-de-muitos.toml\""));
    }

    #[test]
    fn test_infinite_star_spread_builds_scene() {
        use crate::scene::Scene;
        use rand::SeedableRng;

        let config =
            Config::parse(Path::new("scene.toml"), "[scene]\nstar_spread = inf\n").unwrap();
        assert!(config.scene.star_spread.is_infinite());

        let mut rng = rand::rngs::StdRng::seed_from_u64(0);
        let scene = Scene::build(&config.scene, &[], &mut rng);
        assert_eq!(scene.starfield.len(), config.scene.star_count);
    }

    #[test]
    fn test_source_selection() {
        let mut data = DataConfig::default();
        assert!(matches!(data.source().unwrap(), DataSource::Dir(_)));

        data.url = Some("http://localhost:3000".into());
        let source = data.source().unwrap();
        assert!(matches!(source, DataSource::Http(_)));
        assert_eq!(source.describe(), "http://localhost:3000");
    }
}
