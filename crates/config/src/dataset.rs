//! Dataset source configuration

use serde::Deserialize;

/// Where the sales table is loaded from
///
/// # Example
///
/// ```toml
/// [dataset]
/// source = "data/sales.csv"
///
/// # or a remote dataset
/// [dataset]
/// source = "https://example.com/sales.csv"
/// ```
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(default)]
pub struct DatasetConfig {
    /// Local CSV path or http(s) URL
    ///
    /// Required unless the CLI passes `--data`.
    pub source: Option<String>,
}

impl DatasetConfig {
    /// Whether the configured source is a remote URL
    pub fn is_remote(&self) -> bool {
        matches!(
            &self.source,
            Some(s) if s.starts_with("http://") || s.starts_with("https://")
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_has_no_source() {
        let config = DatasetConfig::default();
        assert!(config.source.is_none());
        assert!(!config.is_remote());
    }

    #[test]
    fn test_local_source() {
        let config: DatasetConfig = toml::from_str("source = \"data/sales.csv\"").unwrap();
        assert_eq!(config.source.as_deref(), Some("data/sales.csv"));
        assert!(!config.is_remote());
    }

    #[test]
    fn test_remote_source() {
        let config: DatasetConfig =
            toml::from_str("source = \"https://example.com/sales.csv\"").unwrap();
        assert!(config.is_remote());
    }
}
