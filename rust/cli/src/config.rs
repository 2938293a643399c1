use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fs;

/// How an exact tie is tallied by `sort`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum TiePolicy {
    /// A tie counts only as a tie.
    Separate,
    /// A tie counts as a tie and also as a player 2 win, matching the historical tally output.
    Legacy,
}

/// What `sort` does with a malformed line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ErrorPolicy {
    /// Stop at the first malformed line without printing a tally.
    Abort,
    /// Warn, skip the line, and keep tallying.
    Skip,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Config {
    pub tie_policy: TiePolicy,
    pub on_error: ErrorPolicy,
    pub seed: Option<u64>,
}

#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ValueSource {
    Default,
    File,
    Env,
}

#[derive(Debug, Clone, Copy)]
pub struct ConfigSources {
    pub tie_policy: ValueSource,
    pub on_error: ValueSource,
    pub seed: ValueSource,
}

impl Default for ConfigSources {
    fn default() -> Self {
        Self {
            tie_policy: ValueSource::Default,
            on_error: ValueSource::Default,
            seed: ValueSource::Default,
        }
    }
}

#[derive(Debug, Clone)]
pub struct ConfigResolved {
    pub config: Config,
    pub sources: ConfigSources,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            tie_policy: TiePolicy::Separate,
            on_error: ErrorPolicy::Abort,
            seed: None,
        }
    }
}

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
    Invalid(String),
}

impl From<std::io::Error> for ConfigError {
    fn from(e: std::io::Error) -> Self {
        ConfigError::Io(e)
    }
}
impl From<toml::de::Error> for ConfigError {
    fn from(e: toml::de::Error) -> Self {
        ConfigError::Parse(e)
    }
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "cannot read config file: {}", e),
            ConfigError::Parse(e) => write!(f, "cannot parse config file: {}", e),
            ConfigError::Invalid(msg) => f.write_str(msg),
        }
    }
}

pub fn load() -> Result<Config, ConfigError> {
    load_with_sources().map(|resolved| resolved.config)
}

/// Resolves configuration: defaults, then the TOML file named by
/// `HANDSORT_CONFIG`, then `HANDSORT_*` environment variables.
pub fn load_with_sources() -> Result<ConfigResolved, ConfigError> {
    let mut cfg = Config::default();
    let mut sources = ConfigSources::default();

    if let Ok(path) = std::env::var("HANDSORT_CONFIG") {
        let s = fs::read_to_string(path)?;
        let f: FileConfig = toml::from_str(&s)?;
        if let Some(v) = f.tie_policy {
            cfg.tie_policy = v;
            sources.tie_policy = ValueSource::File;
        }
        if let Some(v) = f.on_error {
            cfg.on_error = v;
            sources.on_error = ValueSource::File;
        }
        if let Some(v) = f.seed {
            cfg.seed = Some(v);
            sources.seed = ValueSource::File;
        }
    }

    if let Ok(policy) = std::env::var("HANDSORT_TIE_POLICY")
        && !policy.is_empty()
    {
        cfg.tie_policy = TiePolicy::from_str(&policy, true)
            .map_err(|_| ConfigError::Invalid(format!("Invalid tie policy: {}", policy)))?;
        sources.tie_policy = ValueSource::Env;
    }
    if let Ok(policy) = std::env::var("HANDSORT_ON_ERROR")
        && !policy.is_empty()
    {
        cfg.on_error = ErrorPolicy::from_str(&policy, true)
            .map_err(|_| ConfigError::Invalid(format!("Invalid error policy: {}", policy)))?;
        sources.on_error = ValueSource::Env;
    }
    if let Ok(seed) = std::env::var("HANDSORT_SEED")
        && !seed.is_empty()
    {
        cfg.seed = Some(
            seed.parse()
                .map_err(|_| ConfigError::Invalid("Invalid seed".into()))?,
        );
        sources.seed = ValueSource::Env;
    }

    Ok(ConfigResolved {
        config: cfg,
        sources,
    })
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct FileConfig {
    #[serde(default)]
    tie_policy: Option<TiePolicy>,
    #[serde(default)]
    on_error: Option<ErrorPolicy>,
    #[serde(default)]
    seed: Option<u64>,
}
