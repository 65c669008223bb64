//! Build configuration for Folio
//!
//! Resolution order:
//! 1. CLI flags (highest priority, applied by the binary)
//! 2. Environment variables (FOLIO_*)
//! 3. Project config (`folio.toml` next to `site.toml`)
//! 4. Built-in defaults (lowest priority)

use std::fs;
use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::error::{FolioError, FolioResult};

/// Config file name inside the source directory
pub const CONFIG_FILE: &str = "folio.toml";

/// Content file name inside the source directory
pub const CONTENT_FILE: &str = "site.toml";

/// Non-fatal warning surfaced to CLI users (e.g. unknown keys).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConfigWarning {
    pub key: String,
    pub file: PathBuf,
    pub line: Option<usize>,
    pub suggestion: Option<String>,
}

impl std::fmt::Display for ConfigWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.line {
            Some(line) => write!(f, "unknown key '{}' in {}:{}", self.key, self.file.display(), line)?,
            None => write!(f, "unknown key '{}' in {}", self.key, self.file.display())?,
        }
        if let Some(suggestion) = &self.suggestion {
            write!(f, " (did you mean '{}'?)", suggestion)?;
        }
        Ok(())
    }
}

/// Output paths and reproducibility settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BuildSection {
    /// Output directory, relative to the source directory
    #[serde(default = "default_output")]
    pub output: PathBuf,

    /// Directory copied verbatim into the output (resume, favicon, images)
    #[serde(default = "default_static_dir")]
    pub static_dir: PathBuf,

    /// Seed for the loading schedule and particle field
    #[serde(default = "default_seed")]
    pub seed: u64,
}

impl Default for BuildSection {
    fn default() -> Self {
        Self {
            output: default_output(),
            static_dir: default_static_dir(),
            seed: default_seed(),
        }
    }
}

fn default_output() -> PathBuf {
    PathBuf::from("dist")
}

fn default_static_dir() -> PathBuf {
    PathBuf::from("static")
}

fn default_seed() -> u64 {
    0x5EED_F0_11
}

fn default_true() -> bool {
    true
}

/// Scroll and reveal animation settings
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MotionSection {
    #[serde(default = "default_true")]
    pub enabled: bool,

    /// Simulated loading screen before the page is revealed
    #[serde(default = "default_true")]
    pub loading_screen: bool,
}

impl Default for MotionSection {
    fn default() -> Self {
        Self {
            enabled: true,
            loading_screen: true,
        }
    }
}

/// 3D hero background settings
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SceneSection {
    #[serde(default = "default_true")]
    pub enabled: bool,

    #[serde(default = "default_particles")]
    pub particles: usize,
}

impl Default for SceneSection {
    fn default() -> Self {
        Self {
            enabled: true,
            particles: default_particles(),
        }
    }
}

fn default_particles() -> usize {
    2000
}

/// Verbosity level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Verbosity {
    Quiet,
    #[default]
    Normal,
    Verbose,
    Debug,
}

impl Verbosity {
    /// Equivalent `-v` count
    pub fn level(self) -> u8 {
        match self {
            Verbosity::Quiet | Verbosity::Normal => 0,
            Verbosity::Verbose => 1,
            Verbosity::Debug => 2,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
pub struct OutputSection {
    #[serde(default)]
    pub verbosity: Verbosity,
}

/// Main configuration structure
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct BuildConfig {
    #[serde(default)]
    pub build: BuildSection,

    #[serde(default)]
    pub motion: MotionSection,

    #[serde(default)]
    pub scene: SceneSection,

    #[serde(default)]
    pub output: OutputSection,
}

impl BuildConfig {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> FolioResult<Self> {
        Self::load_with_warnings(path).map(|(config, _)| config)
    }

    /// Load configuration and collect unknown keys as warnings
    pub fn load_with_warnings(path: &Path) -> FolioResult<(Self, Vec<ConfigWarning>)> {
        let content = fs::read_to_string(path)?;
        parse_toml_with_warnings(&content, path)
    }

    /// Load `folio.toml` from the source directory, or defaults when absent.
    /// Environment overrides are applied in both cases.
    pub fn load_or_default(source: &Path) -> FolioResult<(Self, Vec<ConfigWarning>)> {
        let path = source.join(CONFIG_FILE);
        let (config, warnings) = if path.exists() {
            Self::load_with_warnings(&path)?
        } else {
            (Self::default(), Vec::new())
        };
        Ok((with_env_overrides(config), warnings))
    }
}

/// Deserialize TOML, recording every ignored key as a `ConfigWarning`
pub fn parse_toml_with_warnings<T: DeserializeOwned>(
    content: &str,
    path: &Path,
) -> FolioResult<(T, Vec<ConfigWarning>)> {
    let mut unknown_paths: Vec<String> = Vec::new();
    let deserializer = toml::de::Deserializer::new(content);

    let value: T = serde_ignored::deserialize(deserializer, |p| {
        unknown_paths.push(p.to_string());
    })
    .map_err(|e| FolioError::InvalidToml {
        file: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let warnings = unknown_paths
        .into_iter()
        .map(|path_str| {
            let key = path_str
                .split('.')
                .next_back()
                .unwrap_or(path_str.as_str())
                .to_string();
            ConfigWarning {
                line: find_line_number(content, &key),
                suggestion: suggest_key(&key),
                key,
                file: path.to_path_buf(),
            }
        })
        .collect();

    Ok((value, warnings))
}

fn find_line_number(content: &str, key: &str) -> Option<usize> {
    content
        .lines()
        .position(|line| {
            let trimmed = line.trim_start();
            trimmed.starts_with(key)
                && trimmed[key.len()..].trim_start().starts_with('=')
        })
        .map(|idx| idx + 1)
}

const KNOWN_KEYS: &[&str] = &[
    "output",
    "static_dir",
    "seed",
    "enabled",
    "loading_screen",
    "particles",
    "verbosity",
    "resume_url",
    "long_description",
    "page_title",
    "page_description",
    "twitter_description",
    "base_url",
    "technologies",
    "highlights",
    "paragraphs",
];

fn suggest_key(key: &str) -> Option<String> {
    let normalized = key.replace('-', "_").to_lowercase();
    if normalized != key && KNOWN_KEYS.contains(&normalized.as_str()) {
        return Some(normalized);
    }
    KNOWN_KEYS
        .iter()
        .find(|known| {
            let (a, b) = (known.as_bytes(), normalized.as_bytes());
            a.len() == b.len() && a.iter().zip(b).filter(|(x, y)| x != y).count() == 1
        })
        .map(|s| s.to_string())
}

/// Apply environment variable overrides (FOLIO_* prefix)
pub fn with_env_overrides(config: BuildConfig) -> BuildConfig {
    apply_env(config, |key| std::env::var(key).ok())
}

const FLAG_VALUES: &[&str] = &["true", "false", "1", "0", "on", "off", "yes", "no"];
const VERBOSITY_VALUES: &[&str] = &["quiet", "normal", "verbose", "debug"];

/// Overrides read through `get_env`. Invalid values are logged and leave the
/// file value in place.
fn apply_env(mut config: BuildConfig, get_env: impl Fn(&str) -> Option<String>) -> BuildConfig {
    if let Some(output) = get_env("FOLIO_OUTPUT") {
        if !output.trim().is_empty() {
            config.build.output = PathBuf::from(output);
        }
    }

    if let Some(seed) = get_env("FOLIO_SEED").and_then(|v| EnvVar::new("FOLIO_SEED", &[]).parse(&v, parse_seed)) {
        config.build.seed = seed;
    }

    if let Some(enabled) = get_env("FOLIO_MOTION").and_then(|v| EnvVar::new("FOLIO_MOTION", FLAG_VALUES).parse(&v, parse_flag)) {
        config.motion.enabled = enabled;
    }

    if let Some(enabled) = get_env("FOLIO_SCENE").and_then(|v| EnvVar::new("FOLIO_SCENE", FLAG_VALUES).parse(&v, parse_flag)) {
        config.scene.enabled = enabled;
    }

    if let Some(verbosity) =
        get_env("FOLIO_VERBOSITY").and_then(|v| EnvVar::new("FOLIO_VERBOSITY", VERBOSITY_VALUES).parse(&v, parse_verbosity))
    {
        config.output.verbosity = verbosity;
    }

    config
}

/// One `FOLIO_*` variable and the spellings it accepts
struct EnvVar<'a> {
    name: &'a str,
    valid_values: &'a [&'a str],
}

impl<'a> EnvVar<'a> {
    fn new(name: &'a str, valid_values: &'a [&'a str]) -> Self {
        Self { name, valid_values }
    }

    fn parse<T>(&self, value: &str, parser: impl Fn(&str) -> Option<T>) -> Option<T> {
        let parsed = parser(value);
        if parsed.is_none() {
            let valid = if self.valid_values.is_empty() {
                "an integer (decimal or 0x hex)".to_string()
            } else {
                self.valid_values.join(", ")
            };
            match self.suggest(value) {
                Some(suggestion) => tracing::warn!(
                    var = self.name,
                    value,
                    valid = %valid,
                    "invalid value ignored, did you mean '{}'?",
                    suggestion
                ),
                None => tracing::warn!(var = self.name, value, valid = %valid, "invalid value ignored"),
            }
        }
        parsed
    }

    /// Closest valid spelling within two edits
    fn suggest(&self, value: &str) -> Option<&'a str> {
        let input = value.trim().to_lowercase();
        self.valid_values
            .iter()
            .map(|valid| (*valid, levenshtein(&input, valid)))
            .filter(|(_, dist)| *dist > 0 && *dist <= 2)
            .min_by_key(|(_, dist)| *dist)
            .map(|(valid, _)| valid)
    }
}

fn levenshtein(a: &str, b: &str) -> usize {
    let b: Vec<char> = b.chars().collect();
    let mut prev: Vec<usize> = (0..=b.len()).collect();
    for (i, ca) in a.chars().enumerate() {
        let mut curr = vec![i + 1; b.len() + 1];
        for (j, cb) in b.iter().enumerate() {
            let cost = usize::from(ca != *cb);
            curr[j + 1] = (prev[j + 1] + 1).min(curr[j] + 1).min(prev[j] + cost);
        }
        prev = curr;
    }
    prev[b.len()]
}

fn parse_seed(val: &str) -> Option<u64> {
    let val = val.trim().replace('_', "");
    match val.strip_prefix("0x").or_else(|| val.strip_prefix("0X")) {
        Some(hex) => u64::from_str_radix(hex, 16).ok(),
        None => val.parse().ok(),
    }
}

fn parse_flag(val: &str) -> Option<bool> {
    match val.trim().to_lowercase().as_str() {
        "true" | "1" | "on" | "yes" => Some(true),
        "false" | "0" | "off" | "no" => Some(false),
        _ => None,
    }
}

fn parse_verbosity(val: &str) -> Option<Verbosity> {
    match val.trim().to_lowercase().as_str() {
        "quiet" => Some(Verbosity::Quiet),
        "normal" => Some(Verbosity::Normal),
        "verbose" => Some(Verbosity::Verbose),
        "debug" => Some(Verbosity::Debug),
        _ => None,
    }
}
