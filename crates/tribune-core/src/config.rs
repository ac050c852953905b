//! Configuration types for Tribune.
//!
//! Loaded from TOML, then overlaid with API keys from the environment:
//!
//! ```toml
//! [model]
//! endpoint = "https://generativelanguage.googleapis.com"
//! model = "gemini-2.5-flash"
//! api_keys = ["key-a", "key-b"]
//! structured_output = true
//!
//! [pool]
//! workers = 4
//! invocation_timeout_secs = 90
//! request_timeout_secs = 10
//!
//! [prompts]
//! judge = "You are the Judge agent. ..."
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;
use std::time::Duration;
use tracing::{debug, info};
use tribune_council::{AgentRole, Instructions};
use tribune_pool::{AgentPoolConfig, Credential};

use crate::error::TribuneError;
use crate::gemini::{DEFAULT_ENDPOINT, DEFAULT_MODEL};
use crate::Result;

/// Default configuration file location, relative to the working directory.
pub const DEFAULT_CONFIG_PATH: &str = "config/tribune.toml";

/// Environment variables consulted for API keys, highest priority first.
///
/// Each holds a comma-separated list. The first variable that yields at
/// least one key replaces the keys from the configuration file.
pub const KEY_ENV_VARS: [&str; 4] = [
    "GEMINI_API_KEYS",
    "GOOGLE_API_KEYS",
    "GOOGLE_API_KEY",
    "GEMINI_API_KEY",
];

/// Top-level Tribune configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TribuneConfig {
    /// Model endpoint and credentials.
    pub model: ModelConfig,

    /// Worker pool settings.
    pub pool: PoolConfig,

    /// Instruction template overrides.
    pub prompts: PromptConfig,
}

/// Model endpoint and credentials.
#[derive(Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ModelConfig {
    /// Base URL of the Generative Language API.
    pub endpoint: String,

    /// Model name.
    pub model: String,

    /// API keys in rotation order.
    pub api_keys: Vec<String>,

    /// Ask for JSON output first, falling back to plain text if unsupported.
    pub structured_output: bool,
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            model: DEFAULT_MODEL.to_string(),
            api_keys: Vec::new(),
            structured_output: true,
        }
    }
}

impl fmt::Debug for ModelConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ModelConfig")
            .field("endpoint", &self.endpoint)
            .field("model", &self.model)
            .field("api_keys", &format_args!("[{} redacted]", self.api_keys.len()))
            .field("structured_output", &self.structured_output)
            .finish()
    }
}

/// Worker pool settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PoolConfig {
    /// Maximum concurrent model invocations, shared by all debates.
    pub workers: usize,

    /// Deadline for a single invocation. Absent means no deadline.
    pub invocation_timeout_secs: Option<u64>,

    /// Connect timeout for the HTTP client.
    pub request_timeout_secs: u64,
}

impl Default for PoolConfig {
    fn default() -> Self {
        Self {
            workers: 4,
            invocation_timeout_secs: None,
            request_timeout_secs: 10,
        }
    }
}

impl PoolConfig {
    /// Converts to the worker pool's own configuration.
    pub fn agent_pool_config(&self) -> AgentPoolConfig {
        let config = AgentPoolConfig::new().with_workers(self.workers);
        match self.invocation_timeout_secs {
            Some(secs) => config.with_task_timeout(Duration::from_secs(secs)),
            None => config,
        }
    }

    /// HTTP connect timeout.
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}

/// Per-role instruction overrides.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PromptConfig {
    /// Optimist instruction.
    pub optimist: Option<String>,
    /// Critic instruction.
    pub critic: Option<String>,
    /// Judge instruction.
    pub judge: Option<String>,
}

impl PromptConfig {
    /// Built-in instructions with any configured overrides applied.
    pub fn instructions(&self) -> Instructions {
        let overrides = [
            (AgentRole::Optimist, &self.optimist),
            (AgentRole::Critic, &self.critic),
            (AgentRole::Judge, &self.judge),
        ];
        overrides
            .into_iter()
            .fold(Instructions::default(), |acc, (role, text)| match text {
                Some(text) if !text.trim().is_empty() => acc.with_override(role, text.trim()),
                _ => acc,
            })
    }
}

impl TribuneConfig {
    /// Parses a configuration from TOML text.
    ///
    /// # Errors
    ///
    /// Returns [`TribuneError::Parse`] if the text is not valid.
    pub fn from_toml(text: &str) -> Result<Self> {
        Ok(toml::from_str(text)?)
    }

    /// Loads a configuration file. A missing file yields the defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        match std::fs::read_to_string(path) {
            Ok(text) => {
                debug!(path = %path.display(), "loaded configuration file");
                Self::from_toml(&text)
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                debug!(path = %path.display(), "no configuration file, using defaults");
                Ok(Self::default())
            }
            Err(source) => Err(TribuneError::Io {
                path: path.to_path_buf(),
                source,
            }),
        }
    }

    /// Loads `path`, applies environment overrides, and validates.
    ///
    /// # Errors
    ///
    /// Returns an error if loading fails or the result is invalid.
    pub fn resolve(path: impl AsRef<Path>) -> Result<Self> {
        let mut config = Self::load(path)?;
        config.apply_env();
        config.validate()?;
        Ok(config)
    }

    /// Applies API-key overrides from the process environment.
    pub fn apply_env(&mut self) {
        self.apply_env_with(|name| std::env::var(name).ok());
    }

    /// Applies API-key overrides using `lookup` in place of the environment.
    pub fn apply_env_with<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        for var in KEY_ENV_VARS {
            let Some(value) = lookup(var) else { continue };
            let keys = parse_key_list(&value);
            if !keys.is_empty() {
                info!(source = var, count = keys.len(), "api keys loaded from environment");
                self.model.api_keys = keys;
                return;
            }
        }
    }

    /// The configured credentials, blanks removed.
    pub fn credentials(&self) -> Vec<Credential> {
        self.model
            .api_keys
            .iter()
            .map(|k| k.trim())
            .filter(|k| !k.is_empty())
            .map(Credential::new)
            .collect()
    }

    /// Checks the configuration for startup errors.
    ///
    /// # Errors
    ///
    /// Returns [`TribuneError::Config`] if there are no credentials, no
    /// workers, or no model name.
    pub fn validate(&self) -> Result<()> {
        if self.credentials().is_empty() {
            return Err(TribuneError::Config(format!(
                "no API keys configured (set [model].api_keys or one of {})",
                KEY_ENV_VARS.join(", ")
            )));
        }
        if self.pool.workers == 0 {
            return Err(TribuneError::Config("pool.workers must be at least 1".into()));
        }
        if self.model.model.trim().is_empty() {
            return Err(TribuneError::Config("model.model cannot be empty".into()));
        }
        if self.model.endpoint.trim().is_empty() {
            return Err(TribuneError::Config("model.endpoint cannot be empty".into()));
        }
        Ok(())
    }
}

/// Splits a comma-separated key list, trimming each key and dropping blanks.
pub fn parse_key_list(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(str::trim)
        .filter(|k| !k.is_empty())
        .map(String::from)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::io::Write;

    fn env(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| map.get(name).cloned()
    }

    #[test]
    fn test_default_config() {
        let config = TribuneConfig::default();
        assert_eq!(config.model.model, "gemini-2.5-flash");
        assert_eq!(config.model.endpoint, "https://generativelanguage.googleapis.com");
        assert!(config.model.structured_output);
        assert_eq!(config.pool.workers, 4);
        assert!(config.pool.invocation_timeout_secs.is_none());
        assert_eq!(config.pool.request_timeout_secs, 10);
    }

    #[test]
    fn test_parse_key_list() {
        assert_eq!(parse_key_list(" a , b,,c ,"), vec!["a", "b", "c"]);
        assert!(parse_key_list(" , ").is_empty());
        assert!(parse_key_list("").is_empty());
    }

    #[test]
    fn test_env_priority_first_non_empty_wins() {
        let mut config = TribuneConfig::default();
        config.apply_env_with(env(&[
            ("GEMINI_API_KEYS", " , "),
            ("GOOGLE_API_KEYS", "g1,g2"),
            ("GEMINI_API_KEY", "single"),
        ]));
        assert_eq!(config.model.api_keys, vec!["g1", "g2"]);
    }

    #[test]
    fn test_env_overrides_file_keys() {
        let mut config = TribuneConfig::from_toml("[model]\napi_keys = [\"file\"]").unwrap();
        config.apply_env_with(env(&[("GEMINI_API_KEY", "env")]));
        assert_eq!(config.model.api_keys, vec!["env"]);
    }

    #[test]
    fn test_no_env_keeps_file_keys() {
        let mut config = TribuneConfig::from_toml("[model]\napi_keys = [\"file\"]").unwrap();
        config.apply_env_with(env(&[]));
        assert_eq!(config.model.api_keys, vec!["file"]);
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config = TribuneConfig::from_toml("[pool]\ninvocation_timeout_secs = 30").unwrap();
        assert_eq!(config.pool.workers, 4);
        assert_eq!(config.pool.invocation_timeout_secs, Some(30));
        assert_eq!(config.model.model, DEFAULT_MODEL);
    }

    #[test]
    fn test_invalid_toml() {
        let result = TribuneConfig::from_toml("[pool]\nworkers = \"many\"");
        assert!(matches!(result, Err(TribuneError::Parse(_))));
    }

    #[test]
    fn test_validate_rejects_missing_credentials() {
        let mut config = TribuneConfig::default();
        config.model.api_keys = vec!["  ".into()];
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("GEMINI_API_KEYS"));
    }

    #[test]
    fn test_validate_rejects_zero_workers() {
        let mut config = TribuneConfig::default();
        config.model.api_keys = vec!["k".into()];
        config.pool.workers = 0;
        assert!(matches!(config.validate(), Err(TribuneError::Config(_))));
    }

    #[test]
    fn test_validate_rejects_empty_model() {
        let mut config = TribuneConfig::default();
        config.model.api_keys = vec!["k".into()];
        config.model.model = " ".into();
        assert!(matches!(config.validate(), Err(TribuneError::Config(_))));
    }

    #[test]
    fn test_credentials_trimmed_and_ordered() {
        let mut config = TribuneConfig::default();
        config.model.api_keys = vec![" a ".into(), "".into(), "b".into()];
        let keys: Vec<String> = config
            .credentials()
            .iter()
            .map(|c| c.expose().to_string())
            .collect();
        assert_eq!(keys, vec!["a", "b"]);
    }

    #[test]
    fn test_debug_redacts_keys() {
        let mut config = TribuneConfig::default();
        config.model.api_keys = vec!["super-secret".into()];
        let debug = format!("{:?}", config);
        assert!(!debug.contains("super-secret"));
        assert!(debug.contains("1 redacted"));
    }

    #[test]
    fn test_prompt_overrides() {
        let config = TribuneConfig::from_toml("[prompts]\njudge = \"Be brief.\"\ncritic = \"  \"").unwrap();
        let instructions = config.prompts.instructions();
        assert_eq!(instructions.for_role(AgentRole::Judge), "Be brief.");
        assert_eq!(
            instructions.for_role(AgentRole::Critic),
            AgentRole::Critic.default_instruction()
        );
    }

    #[test]
    fn test_pool_conversion() {
        let mut pool = PoolConfig::default();
        assert!(pool.agent_pool_config().task_timeout.is_none());
        pool.invocation_timeout_secs = Some(45);
        pool.workers = 2;
        let converted = pool.agent_pool_config();
        assert_eq!(converted.workers, 2);
        assert_eq!(converted.task_timeout, Some(Duration::from_secs(45)));
    }

    #[test]
    fn test_load_missing_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = TribuneConfig::load(dir.path().join("absent.toml")).unwrap();
        assert_eq!(config.pool.workers, 4);
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            "[model]\nmodel = \"gemini-2.0-flash\"\napi_keys = [\"a\", \"b\"]\n\n[pool]\nworkers = 8"
        )
        .unwrap();
        let config = TribuneConfig::load(file.path()).unwrap();
        assert_eq!(config.model.model, "gemini-2.0-flash");
        assert_eq!(config.model.api_keys.len(), 2);
        assert_eq!(config.pool.workers, 8);
    }
}
