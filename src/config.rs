use anyhow::Result;
use once_cell::sync::OnceCell;
use regex::Regex;
use serde::{Deserialize, Serialize};
use tracing::warn;

/// Engine configuration, injected by the host per command invocation.
///
/// The engine itself never stores one of these; it reads the flags it is
/// handed and nothing else. Every field has a serde default so a partial
/// (or missing) settings file deserializes to the documented defaults.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Selection deletion refuses to unbalance brackets when set.
    #[serde(default = "default_true")]
    pub strict_mode: bool,

    /// Master switch; a disabled engine passes every command through
    /// untouched.
    #[serde(default = "default_true")]
    pub enabled: bool,

    /// Regexes matched against the host's syntax name to decide whether the
    /// engine should engage. The default matches everything.
    #[serde(default = "default_match_all")]
    pub syntax: Vec<String>,

    /// Regexes matched against the file name, as a fallback to `syntax`.
    #[serde(default = "default_match_all")]
    pub file_name: Vec<String>,

    #[serde(skip)]
    syntax_patterns: OnceCell<Vec<Regex>>,

    #[serde(skip)]
    file_name_patterns: OnceCell<Vec<Regex>>,
}

fn default_true() -> bool {
    true
}

fn default_match_all() -> Vec<String> {
    vec![".".to_string()]
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            strict_mode: true,
            enabled: true,
            syntax: default_match_all(),
            file_name: default_match_all(),
            syntax_patterns: OnceCell::new(),
            file_name_patterns: OnceCell::new(),
        }
    }
}

impl EngineConfig {
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Host-side implementation of the `toggle-enabled` command.
    pub fn toggle_enabled(&mut self) {
        self.enabled = !self.enabled;
    }

    /// Whether the engine should handle commands for a buffer with the
    /// given syntax name and file name: enabled, and at least one
    /// allow-list matches.
    pub fn should_engage(&self, syntax: &str, file_name: Option<&str>) -> bool {
        if !self.enabled {
            return false;
        }
        matches_any(self.syntax_regexes(), syntax)
            || file_name.is_some_and(|name| matches_any(self.file_name_regexes(), name))
    }

    fn syntax_regexes(&self) -> &[Regex] {
        self.syntax_patterns
            .get_or_init(|| compile_patterns(&self.syntax))
    }

    fn file_name_regexes(&self) -> &[Regex] {
        self.file_name_patterns
            .get_or_init(|| compile_patterns(&self.file_name))
    }
}

fn compile_patterns(patterns: &[String]) -> Vec<Regex> {
    patterns
        .iter()
        .filter_map(|pattern| match Regex::new(pattern) {
            Ok(regex) => Some(regex),
            Err(err) => {
                warn!(%pattern, %err, "ignoring invalid allow-list pattern");
                None
            }
        })
        .collect()
}

fn matches_any(regexes: &[Regex], text: &str) -> bool {
    regexes.iter().any(|regex| regex.is_match(text))
}
