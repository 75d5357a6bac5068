use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use fintrack_core::categories::DEFAULT_CATEGORIES;
use fintrack_core::export::DEFAULT_EXPORT_FILE;
use fintrack_core::{CategorySet, ExportFormat};

/// Startup configuration, read once per process.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct TrackerConfig {
    #[serde(default)]
    pub categories: CategoriesSection,
    #[serde(default)]
    pub export: ExportSection,
    #[serde(default)]
    pub ui: UiSection,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct CategoriesSection {
    pub labels: Vec<String>,
}

impl Default for CategoriesSection {
    fn default() -> Self {
        Self {
            labels: DEFAULT_CATEGORIES.iter().map(|s| s.to_string()).collect(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ExportSection {
    #[serde(default = "default_export_path")]
    pub path: String,
    #[serde(default = "default_export_format")]
    pub format: String,
}

impl Default for ExportSection {
    fn default() -> Self {
        Self {
            path: default_export_path(),
            format: default_export_format(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct UiSection {
    #[serde(default = "default_currency_symbol")]
    pub currency_symbol: String,
}

impl Default for UiSection {
    fn default() -> Self {
        Self {
            currency_symbol: default_currency_symbol(),
        }
    }
}

fn default_export_path() -> String {
    DEFAULT_EXPORT_FILE.to_string()
}

fn default_export_format() -> String {
    "json".to_string()
}

fn default_currency_symbol() -> String {
    "$".to_string()
}

impl TrackerConfig {
    pub fn category_set(&self) -> anyhow::Result<CategorySet> {
        CategorySet::new(self.categories.labels.iter().cloned())
            .map_err(|e| anyhow::Error::new(e).context("Invalid [categories] section"))
    }

    pub fn export_format(&self) -> anyhow::Result<ExportFormat> {
        self.export
            .format
            .parse()
            .map_err(|e| anyhow::Error::new(e).context("Invalid [export] section"))
    }

    pub fn export_path(&self) -> PathBuf {
        PathBuf::from(&self.export.path)
    }
}

pub fn default_config_path() -> anyhow::Result<PathBuf> {
    Ok(xdg_config_dir()?.join("config.toml"))
}

pub fn read_config(path: &Path) -> anyhow::Result<TrackerConfig> {
    let contents = std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Failed to read config {}: {}", path.display(), e))?;
    parse_config(&contents)
        .map_err(|e| anyhow::anyhow!("Failed to parse config {}: {}", path.display(), e))
}

pub fn parse_config(contents: &str) -> Result<TrackerConfig, toml::de::Error> {
    toml::from_str(contents)
}

pub fn xdg_config_dir() -> anyhow::Result<PathBuf> {
    if let Ok(value) = std::env::var("XDG_CONFIG_HOME") {
        if !value.trim().is_empty() {
            return Ok(PathBuf::from(value).join("fintrack"));
        }
    }
    Ok(home_dir()?.join(".config").join("fintrack"))
}

fn home_dir() -> anyhow::Result<PathBuf> {
    let home = std::env::var("HOME")
        .map_err(|_| anyhow::anyhow!("HOME is not set; cannot resolve default paths"))?;
    Ok(PathBuf::from(home))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_file_uses_defaults() {
        let config = parse_config("").unwrap();
        assert_eq!(config.category_set().unwrap(), CategorySet::default());
        assert_eq!(config.export.path, "transactions.json");
        assert_eq!(config.export_format().unwrap(), ExportFormat::Json);
        assert_eq!(config.ui.currency_symbol, "$");
    }

    #[test]
    fn test_custom_sections() {
        let config = parse_config(
            "[categories]\nlabels = [\"Rent\", \"Food\"]\n\n[export]\npath = \"out.jsonl\"\nformat = \"jsonl\"\n\n[ui]\ncurrency_symbol = \"EUR \"\n",
        )
        .unwrap();
        let categories = config.category_set().unwrap();
        assert_eq!(categories.len(), 2);
        assert!(categories.contains("Rent"));
        assert_eq!(config.export_path(), PathBuf::from("out.jsonl"));
        assert_eq!(config.export_format().unwrap(), ExportFormat::Jsonl);
        assert_eq!(config.ui.currency_symbol, "EUR ");
    }

    #[test]
    fn test_export_section_partial_defaults() {
        let config = parse_config("[export]\nformat = \"jsonl\"\n").unwrap();
        assert_eq!(config.export.path, "transactions.json");
    }

    #[test]
    fn test_empty_category_list_is_rejected() {
        let config = parse_config("[categories]\nlabels = []\n").unwrap();
        assert!(config.category_set().is_err());
    }

    #[test]
    fn test_unknown_export_format_is_rejected() {
        let config = parse_config("[export]\nformat = \"csv\"\n").unwrap();
        assert!(config.export_format().is_err());
    }
}
