// ── Local UI preferences ──
//
// A single tiny TOML file for per-operator UI state. Reads and writes
// are best-effort: a missing, corrupt, or unwritable file degrades to
// defaults and never surfaces an error to the caller.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::debug;

/// Persisted UI state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UiPrefs {
    /// Whether the navigation sidebar is collapsed.
    #[serde(default)]
    pub sidebar_collapsed: bool,
}

/// Resolve the prefs file path next to the main config.
pub fn prefs_path() -> PathBuf {
    let mut path = super::config_path();
    path.set_file_name("prefs.toml");
    path
}

/// Read prefs, falling back to defaults on any failure.
pub fn load_prefs() -> UiPrefs {
    load_prefs_from(&prefs_path())
}

/// Read prefs from an explicit path, falling back to defaults.
pub fn load_prefs_from(path: &Path) -> UiPrefs {
    match std::fs::read_to_string(path) {
        Ok(raw) => toml::from_str(&raw).unwrap_or_else(|e| {
            debug!(error = %e, "prefs file unparsable, using defaults");
            UiPrefs::default()
        }),
        Err(e) => {
            debug!(error = %e, "prefs file unreadable, using defaults");
            UiPrefs::default()
        }
    }
}

/// Write prefs, swallowing any failure.
pub fn save_prefs(prefs: &UiPrefs) {
    save_prefs_to(&prefs_path(), prefs);
}

/// Write prefs to an explicit path, swallowing any failure.
pub fn save_prefs_to(path: &Path, prefs: &UiPrefs) {
    let Ok(raw) = toml::to_string_pretty(prefs) else {
        return;
    };
    if let Some(parent) = path.parent() {
        let _ = std::fs::create_dir_all(parent);
    }
    if let Err(e) = std::fs::write(path, raw) {
        debug!(error = %e, "prefs write failed (ignored)");
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn round_trips_through_a_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("prefs.toml");

        let prefs = UiPrefs {
            sidebar_collapsed: true,
        };
        save_prefs_to(&path, &prefs);
        assert_eq!(load_prefs_from(&path), prefs);
    }

    #[test]
    fn missing_file_degrades_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let prefs = load_prefs_from(&dir.path().join("nope.toml"));
        assert_eq!(prefs, UiPrefs::default());
    }

    #[test]
    fn corrupt_file_degrades_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("prefs.toml");
        std::fs::write(&path, "sidebar_collapsed = \"maybe\"").unwrap();
        assert_eq!(load_prefs_from(&path), UiPrefs::default());
    }

    #[test]
    fn unwritable_target_is_swallowed() {
        let dir = tempfile::tempdir().unwrap();
        // A directory where the file should be: the write fails silently.
        let path = dir.path().join("prefs.toml");
        std::fs::create_dir(&path).unwrap();
        save_prefs_to(&path, &UiPrefs::default());
    }
}
