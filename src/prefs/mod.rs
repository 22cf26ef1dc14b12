//! On-device display preferences: currency, theme, monthly budget. Loaded
//! once at startup, written atomically on every change. Purely cosmetic for
//! the aggregation engine except the budget figure.

use std::{fs, path::PathBuf};

use serde::{Deserialize, Serialize};

use crate::{
    errors::StoreError,
    utils::{app_data_dir, ensure_dir, prefs_file_in, write_atomic},
};

/// Display currency; a symbol/label pair substituted at render time only.
/// Stored amounts are currency-agnostic.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Currency {
    pub symbol: String,
    pub label: String,
}

impl Currency {
    pub fn new(symbol: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            symbol: symbol.into(),
            label: label.into(),
        }
    }

    /// The currencies offered on the settings page.
    pub fn presets() -> Vec<Currency> {
        vec![
            Currency::new("$", "USD"),
            Currency::new("₦", "NGN"),
            Currency::new("£", "GBP"),
            Currency::new("€", "EUR"),
            Currency::new("¥", "JPY"),
            Currency::new("₵", "GHS"),
        ]
    }
}

impl Default for Currency {
    fn default() -> Self {
        Currency::new("$", "USD")
    }
}

/// Available dashboard themes.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Midnight,
    Stealth,
    Rose,
    Emerald,
}

impl Theme {
    pub fn name(&self) -> &'static str {
        match self {
            Theme::Midnight => "Midnight",
            Theme::Stealth => "Stealth",
            Theme::Rose => "Rose",
            Theme::Emerald => "Emerald",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Preferences {
    #[serde(default)]
    pub currency: Currency,
    #[serde(default)]
    pub theme: Theme,
    #[serde(default)]
    pub monthly_budget: f64,
}

impl Default for Preferences {
    fn default() -> Self {
        Self {
            currency: Currency::default(),
            theme: Theme::default(),
            monthly_budget: 0.0,
        }
    }
}

/// Loads and saves [`Preferences`] under the app data directory.
pub struct PrefsManager {
    path: PathBuf,
}

impl PrefsManager {
    /// Opens the manager under `root`, defaulting to the application data
    /// directory.
    pub fn new(root: Option<PathBuf>) -> Result<Self, StoreError> {
        let base = root.unwrap_or_else(app_data_dir);
        ensure_dir(&base)?;
        Ok(Self {
            path: prefs_file_in(&base),
        })
    }

    pub fn new_default() -> Result<Self, StoreError> {
        Self::new(None)
    }

    pub fn load(&self) -> Result<Preferences, StoreError> {
        if self.path.exists() {
            let data = fs::read_to_string(&self.path)?;
            Ok(serde_json::from_str(&data)?)
        } else {
            Ok(Preferences::default())
        }
    }

    pub fn save(&self, prefs: &Preferences) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent() {
            ensure_dir(parent)?;
        }
        let json = serde_json::to_string_pretty(prefs)?;
        write_atomic(&self.path, &json)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn missing_file_loads_defaults() {
        let dir = tempdir().unwrap();
        let manager = PrefsManager::new(Some(dir.path().to_path_buf())).unwrap();
        assert_eq!(manager.load().unwrap(), Preferences::default());
    }

    #[test]
    fn save_then_load_round_trips() {
        let dir = tempdir().unwrap();
        let manager = PrefsManager::new(Some(dir.path().to_path_buf())).unwrap();
        let prefs = Preferences {
            currency: Currency::new("€", "EUR"),
            theme: Theme::Emerald,
            monthly_budget: 2000.0,
        };
        manager.save(&prefs).unwrap();
        assert_eq!(manager.load().unwrap(), prefs);
    }

    #[test]
    fn partial_file_fills_in_defaults() {
        let dir = tempdir().unwrap();
        let manager = PrefsManager::new(Some(dir.path().to_path_buf())).unwrap();
        fs::write(prefs_file_in(dir.path()), "{\"theme\":\"rose\"}").unwrap();
        let prefs = manager.load().unwrap();
        assert_eq!(prefs.theme, Theme::Rose);
        assert_eq!(prefs.currency, Currency::default());
        assert_eq!(prefs.monthly_budget, 0.0);
    }
}
