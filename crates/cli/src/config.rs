//! Demo configuration, read from the environment.

use std::path::PathBuf;

use anyhow::Context;

use stockkeep_core::Quantity;
use stockkeep_inventory::{DEFAULT_INVENTORY_PATH, DEFAULT_LOW_STOCK_THRESHOLD};

pub const INVENTORY_PATH_ENV: &str = "STOCKKEEP_INVENTORY_PATH";
pub const LOW_STOCK_THRESHOLD_ENV: &str = "STOCKKEEP_LOW_STOCK_THRESHOLD";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DemoConfig {
    pub inventory_path: PathBuf,
    pub low_stock_threshold: Quantity,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            inventory_path: PathBuf::from(DEFAULT_INVENTORY_PATH),
            low_stock_threshold: DEFAULT_LOW_STOCK_THRESHOLD,
        }
    }
}

impl DemoConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary variable source; unset variables keep their defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let mut config = Self::default();

        if let Some(path) = lookup(INVENTORY_PATH_ENV).filter(|p| !p.trim().is_empty()) {
            config.inventory_path = PathBuf::from(path);
        }

        if let Some(raw) = lookup(LOW_STOCK_THRESHOLD_ENV) {
            config.low_stock_threshold = raw
                .trim()
                .parse()
                .with_context(|| format!("{LOW_STOCK_THRESHOLD_ENV} must be an integer, got `{raw}`"))?;
        }

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn defaults_when_unset() {
        let config = DemoConfig::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(config, DemoConfig::default());
        assert_eq!(config.inventory_path, PathBuf::from("inventory.json"));
        assert_eq!(config.low_stock_threshold, 5);
    }

    #[test]
    fn reads_overrides() {
        let config = DemoConfig::from_lookup(lookup_from(&[
            (INVENTORY_PATH_ENV, "/tmp/stock.json"),
            (LOW_STOCK_THRESHOLD_ENV, " 12 "),
        ]))
        .unwrap();
        assert_eq!(config.inventory_path, PathBuf::from("/tmp/stock.json"));
        assert_eq!(config.low_stock_threshold, 12);
    }

    #[test]
    fn blank_path_keeps_default() {
        let config = DemoConfig::from_lookup(lookup_from(&[(INVENTORY_PATH_ENV, "  ")])).unwrap();
        assert_eq!(config.inventory_path, PathBuf::from(DEFAULT_INVENTORY_PATH));
    }

    #[test]
    fn rejects_non_integer_threshold() {
        let err = DemoConfig::from_lookup(lookup_from(&[(LOW_STOCK_THRESHOLD_ENV, "five")]))
            .unwrap_err();
        assert!(err.to_string().contains(LOW_STOCK_THRESHOLD_ENV));
    }
}
