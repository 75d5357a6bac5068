//! Config path resolution and the starting ledger.

use std::path::{Path, PathBuf};

use fintrack_core::export::read_export;
use fintrack_core::{CategorySet, Ledger, NewTransaction, TransactionDraft};

use crate::cli::Cli;
use crate::config::{default_config_path, read_config, TrackerConfig};
use crate::errors::CliError;

/// Where the config file comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    /// `--config` or `FINTRACK_CONFIG`; must exist
    Explicit(PathBuf),
    /// XDG default; may be absent
    Default(PathBuf),
    /// No usable location (no HOME, no XDG_CONFIG_HOME)
    None,
}

/// Resolve the config file path: `--config`, `FINTRACK_CONFIG`, then the XDG default.
pub fn resolve_config_path(cli: &Cli) -> ConfigSource {
    if let Some(value) = cli.config.as_deref() {
        if !value.trim().is_empty() {
            return ConfigSource::Explicit(PathBuf::from(value));
        }
    }
    match default_config_path() {
        Ok(path) => ConfigSource::Default(path),
        Err(err) => {
            tracing::debug!(error = %err, "no default config location");
            ConfigSource::None
        }
    }
}

/// Load the startup configuration.
///
/// A missing default file yields built-in defaults; a missing explicit file
/// is an error.
pub fn load_config(cli: &Cli) -> anyhow::Result<TrackerConfig> {
    match resolve_config_path(cli) {
        ConfigSource::Explicit(path) => {
            if !path.exists() {
                return Err(CliError::config(format!(
                    "Config file not found: {}",
                    path.display()
                ))
                .into());
            }
            read_config_file(&path)
        }
        ConfigSource::Default(path) if path.exists() => read_config_file(&path),
        ConfigSource::Default(_) | ConfigSource::None => {
            tracing::debug!("using built-in configuration");
            Ok(TrackerConfig::default())
        }
    }
}

fn read_config_file(path: &Path) -> anyhow::Result<TrackerConfig> {
    let config = read_config(path).map_err(|e| CliError::config(e.to_string()))?;
    tracing::debug!(path = %path.display(), "loaded config");
    Ok(config)
}

/// The two sample records used by `--demo`.
pub fn demo_transactions(categories: &CategorySet) -> anyhow::Result<Vec<NewTransaction>> {
    let samples = [
        ("2023-04-01", "200", "Income", "Salary"),
        ("2023-04-02", "50", "Expense", "Groceries"),
    ];
    samples
        .iter()
        .map(|(date, amount, kind, category)| {
            TransactionDraft {
                date: Some(date.to_string()),
                amount: Some(amount.to_string()),
                kind: Some(kind.to_string()),
                category: Some(category.to_string()),
            }
            .validate(categories)
            .map_err(|e| {
                anyhow::Error::new(CliError::config(format!(
                    "Demo data needs the Salary and Groceries categories: {}",
                    e
                )))
            })
        })
        .collect()
}

/// Build the ledger the session starts with.
pub fn initial_ledger(cli: &Cli, categories: &CategorySet) -> anyhow::Result<Ledger> {
    if let Some(seed) = cli.seed.as_deref() {
        let path = Path::new(seed);
        if !path.exists() {
            return Err(CliError::not_found(
                format!("Seed file not found: {}", path.display()),
                "Hint: Create one with `export <PATH>` inside a session.",
            )
            .into());
        }
        let records = read_export(path)
            .map_err(|e| anyhow::Error::new(e).context(format!("Failed to read {}", seed)))?;
        let ledger = Ledger::with_transactions(categories.clone(), records)
            .map_err(|e| anyhow::Error::new(e).context(format!("Failed to load {}", seed)))?;
        tracing::info!(path = %path.display(), len = ledger.len(), "seeded ledger");
        return Ok(ledger);
    }

    let mut ledger = Ledger::new(categories.clone());
    if cli.demo {
        for new in demo_transactions(categories)? {
            ledger.add(new)?;
        }
    }
    Ok(ledger)
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use fintrack_core::export::write_export;
    use fintrack_core::ExportFormat;
    use tempfile::TempDir;

    fn cli(args: &[&str]) -> Cli {
        let mut full = vec!["fintrack"];
        full.extend_from_slice(args);
        Cli::parse_from(full)
    }

    #[test]
    fn test_explicit_config_path_wins() {
        let cli = cli(&["--config", "/tmp/custom.toml"]);
        assert_eq!(
            resolve_config_path(&cli),
            ConfigSource::Explicit(PathBuf::from("/tmp/custom.toml"))
        );
    }

    #[test]
    fn test_missing_explicit_config_is_error() {
        let dir = TempDir::new().unwrap();
        let missing = dir.path().join("nope.toml");
        let cli = cli(&["--config", missing.to_str().unwrap()]);
        let err = load_config(&cli).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<CliError>(),
            Some(CliError::Config(_))
        ));
    }

    #[test]
    fn test_explicit_config_is_read() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[categories]\nlabels = [\"Rent\"]\n").unwrap();
        let cli = cli(&["--config", path.to_str().unwrap()]);
        let config = load_config(&cli).unwrap();
        assert_eq!(config.categories.labels, vec!["Rent".to_string()]);
    }

    #[test]
    fn test_malformed_config_is_config_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[categories\n").unwrap();
        let cli = cli(&["--config", path.to_str().unwrap()]);
        let err = load_config(&cli).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<CliError>(),
            Some(CliError::Config(_))
        ));
    }

    #[test]
    fn test_demo_ledger_has_two_records() {
        let cli = cli(&["--demo"]);
        let ledger = initial_ledger(&cli, &CategorySet::default()).unwrap();
        assert_eq!(ledger.len(), 2);
        assert_eq!(ledger.snapshot()[0].category, "Salary");
        assert_eq!(ledger.snapshot()[1].category, "Groceries");
    }

    #[test]
    fn test_demo_needs_sample_categories() {
        let categories = CategorySet::new(["Rent"]).unwrap();
        assert!(demo_transactions(&categories).is_err());
    }

    #[test]
    fn test_seed_file_loads_records() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("seed.json");
        let categories = CategorySet::default();
        let mut source = Ledger::new(categories.clone());
        for new in demo_transactions(&categories).unwrap() {
            source.add(new).unwrap();
        }
        write_export(&path, source.snapshot(), ExportFormat::Json).unwrap();

        let cli = cli(&["--seed", path.to_str().unwrap()]);
        let ledger = initial_ledger(&cli, &categories).unwrap();
        assert_eq!(ledger.snapshot(), source.snapshot());
    }

    #[test]
    fn test_missing_seed_is_not_found() {
        let cli = cli(&["--seed", "/definitely/not/here.json"]);
        let err = initial_ledger(&cli, &CategorySet::default()).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<CliError>(),
            Some(CliError::NotFound { .. })
        ));
    }
}
