//! Path resolution for the servers preference file.
//!
//! Uses an env var when set, otherwise XDG defaults.

use std::path::{Path, PathBuf};

/// Resolved location of the servers preference file.
#[derive(Debug, Clone)]
pub struct Paths {
    pub servers_file: PathBuf,
}

impl Paths {
    /// Resolve paths from environment, falling back to XDG/defaults.
    pub fn resolve() -> Self {
        let servers_file = resolve_path(
            "GLANCES_SERVERS_PATH",
            dirs::config_dir().map(|p| p.join("glances/servers.json")),
            "~/.config/glances/servers.json",
        );

        Self { servers_file }
    }

    /// Preference file holding the nickname -> address map.
    pub fn servers_path(&self) -> &Path {
        &self.servers_file
    }
}

fn resolve_path(env_var: &str, xdg_default: Option<PathBuf>, fallback: &str) -> PathBuf {
    if let Ok(val) = std::env::var(env_var) {
        let trimmed = val.trim();
        if !trimmed.is_empty() {
            return expand_tilde(trimmed);
        }
    }
    xdg_default.unwrap_or_else(|| expand_tilde(fallback))
}

fn expand_tilde(path: &str) -> PathBuf {
    let expanded = shellexpand::tilde(path);
    PathBuf::from(expanded.as_ref())
}
