//! Demo configuration stored as TOML (default `fluent-builder.toml`).

use std::fs;
use std::path::Path;

use anyhow::{Context, Result, anyhow};
use serde::{Deserialize, Serialize};

/// Values the demo feeds into its builder chain.
///
/// Missing fields fall back to [`DemoConfig::default`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(default)]
pub struct DemoConfig {
    pub point: PointDefaults,
    pub guard: GuardConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct PointDefaults {
    pub x: i64,
    pub y: i64,
    pub label: String,
}

impl Default for PointDefaults {
    fn default() -> Self {
        Self {
            x: 0,
            y: 0,
            label: "origin".to_string(),
        }
    }
}

/// Inclusive range an `x` value must fall in before it is applied.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct GuardConfig {
    pub min_x: i64,
    pub max_x: i64,
}

impl Default for GuardConfig {
    fn default() -> Self {
        Self {
            min_x: -1_000,
            max_x: 1_000,
        }
    }
}

impl GuardConfig {
    pub fn admits_x(&self, x: i64) -> bool {
        (self.min_x..=self.max_x).contains(&x)
    }
}

impl DemoConfig {
    pub fn validate(&self) -> Result<()> {
        if self.point.label.trim().is_empty() {
            return Err(anyhow!("point.label must be non-empty"));
        }
        if self.guard.min_x > self.guard.max_x {
            return Err(anyhow!(
                "guard.min_x ({}) must not exceed guard.max_x ({})",
                self.guard.min_x,
                self.guard.max_x
            ));
        }
        Ok(())
    }
}

/// Load config from a TOML file.
///
/// If the file is missing, returns `DemoConfig::default()`.
pub fn load_config(path: &Path) -> Result<DemoConfig> {
    if !path.exists() {
        let cfg = DemoConfig::default();
        cfg.validate()?;
        return Ok(cfg);
    }
    let contents = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    let cfg: DemoConfig =
        toml::from_str(&contents).with_context(|| format!("parse {}", path.display()))?;
    cfg.validate()?;
    Ok(cfg)
}

const HEADER: &str = "# fluent-builder demo config. `x` is only applied inside [guard].\n\n";

/// Write `cfg` as TOML, replacing `path` via a temp file and rename.
pub fn write_config(path: &Path, cfg: &DemoConfig) -> Result<()> {
    cfg.validate()?;
    let body = toml::to_string_pretty(cfg).context("serialize config toml")?;
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("create directory {}", parent.display()))?;
    }
    let staged = path.with_extension("toml.tmp");
    fs::write(&staged, format!("{HEADER}{body}"))
        .with_context(|| format!("stage config {}", staged.display()))?;
    fs::rename(&staged, path).with_context(|| format!("replace config {}", path.display()))
}

/// Write the default config unless one exists (or `force` is set).
///
/// Returns whether a file was written.
pub fn init_config(path: &Path, force: bool) -> Result<bool> {
    if path.exists() && !force {
        return Ok(false);
    }
    write_config(path, &DemoConfig::default())?;
    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn load_missing_returns_default() {
        let temp = tempfile::tempdir().expect("tempdir");
        let cfg = load_config(&temp.path().join("missing.toml")).expect("load");
        assert_eq!(cfg, DemoConfig::default());
    }

    #[test]
    fn partial_file_keeps_defaults_for_missing_fields() {
        let temp = tempfile::tempdir().expect("tempdir");
        let path = temp.path().join("config.toml");
        fs::write(&path, "[point]\nx = 3\n").expect("write");

        let cfg = load_config(&path).expect("load");
        assert_eq!(cfg.point.x, 3);
        assert_eq!(cfg.point.label, "origin");
        assert_eq!(cfg.guard, GuardConfig::default());
    }

    /// An existing config survives `init_config` unless forced.
    #[test]
    fn init_config_keeps_existing_file_without_force() {
        let temp = tempfile::tempdir().expect("tempdir");
        let path = temp.path().join("config.toml");
        fs::write(&path, "[point]\nx = 9\n").expect("write");

        assert!(!init_config(&path, false).expect("init"));
        assert_eq!(load_config(&path).expect("load").point.x, 9);

        assert!(init_config(&path, true).expect("forced init"));
        assert_eq!(load_config(&path).expect("load"), DemoConfig::default());
    }

    #[test]
    fn written_config_starts_with_header() {
        let temp = tempfile::tempdir().expect("tempdir");
        let path = temp.path().join("config.toml");
        assert!(init_config(&path, false).expect("init"));

        let contents = fs::read_to_string(&path).expect("read");
        assert!(contents.starts_with("# fluent-builder demo config"));
        assert!(!path.with_extension("toml.tmp").exists());
    }

    #[test]
    fn write_then_load_round_trips() {
        let temp = tempfile::tempdir().expect("tempdir");
        let path = temp.path().join("nested").join("config.toml");
        let mut cfg = DemoConfig::default();
        cfg.point.label = "corner".to_string();
        write_config(&path, &cfg).expect("write");
        assert_eq!(load_config(&path).expect("load"), cfg);
    }

    /// An inverted guard range is rejected at load time.
    #[test]
    fn load_rejects_inverted_guard_range() {
        let temp = tempfile::tempdir().expect("tempdir");
        let path = temp.path().join("config.toml");
        fs::write(&path, "[guard]\nmin_x = 5\nmax_x = 1\n").expect("write");

        let err = load_config(&path).expect_err("invalid");
        assert!(format!("{err:#}").contains("guard.min_x"));
    }

    #[test]
    fn blank_label_is_invalid() {
        let mut cfg = DemoConfig::default();
        cfg.point.label = "  ".to_string();
        assert!(cfg.validate().is_err());
    }
}
