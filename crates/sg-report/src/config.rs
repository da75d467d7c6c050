//! Report configuration, loadable from TOML.

use serde::Deserialize;

/// Top-level configuration for a report run.
#[derive(Debug, Clone, Deserialize)]
pub struct ReportConfig {
    /// Individual sar files, parsed in the listed order.
    #[serde(default)]
    pub files: Vec<String>,
    /// Optional `sarNN` range, parsed after `files`.
    #[serde(default)]
    pub range: Option<RangeConfig>,
    /// Where to write the JSON hand-off. None writes to stdout.
    #[serde(default)]
    pub output: Option<String>,
}

/// Two sar paths in the same directory, e.g. `sar28` to `sar03`.
#[derive(Debug, Clone, Deserialize)]
pub struct RangeConfig {
    pub from: String,
    pub to: String,
}

impl ReportConfig {
    /// Load config from a TOML file path.
    pub fn from_file(path: &str) -> anyhow::Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        let config: Self = toml::from_str(&contents)?;
        Ok(config)
    }

    /// Every file to parse: explicit files first, then the expanded range.
    pub fn input_paths(&self) -> anyhow::Result<Vec<String>> {
        let mut paths = self.files.clone();
        if let Some(range) = &self.range {
            paths.extend(sg_parser::expand_range(&range.from, &range.to)?);
        }
        if paths.is_empty() {
            anyhow::bail!("no sar files configured: set `files` or `[range]`");
        }
        Ok(paths)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserialize_minimal_config() {
        let toml = r#"
files = ["/var/log/sa/sar04"]
"#;
        let config: ReportConfig = toml::from_str(toml).unwrap();
        assert_eq!(config.files, vec!["/var/log/sa/sar04"]);
        assert!(config.range.is_none());
        assert!(config.output.is_none());
        assert_eq!(config.input_paths().unwrap(), vec!["/var/log/sa/sar04"]);
    }

    #[test]
    fn deserialize_full_config() {
        let toml = r#"
files = ["/archive/sar15"]
output = "/tmp/report.json"

[range]
from = "/var/log/sa/sar30"
to = "/var/log/sa/sar01"
"#;
        let config: ReportConfig = toml::from_str(toml).unwrap();
        assert_eq!(config.output.as_deref(), Some("/tmp/report.json"));
        assert_eq!(
            config.input_paths().unwrap(),
            vec![
                "/archive/sar15",
                "/var/log/sa/sar30",
                "/var/log/sa/sar31",
                "/var/log/sa/sar01"
            ]
        );
    }

    #[test]
    fn empty_config_has_no_inputs() {
        let config: ReportConfig = toml::from_str("").unwrap();
        assert!(config.input_paths().is_err());
    }

    #[test]
    fn bad_range_is_an_error() {
        let toml = r#"
[range]
from = "/a/sar01"
to = "/b/sar02"
"#;
        let config: ReportConfig = toml::from_str(toml).unwrap();
        let err = config.input_paths().unwrap_err();
        assert!(err.to_string().contains("different directories"));
    }
}
