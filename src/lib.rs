//! glancectl - Glances server manager
//!
//! Keeps a registry of named Glances monitoring endpoints and persists it
//! to a per-user preference file.

pub mod address;
pub mod paths;
pub mod prefs;
pub mod registry;

pub use address::{normalize, validate_input, AddressError, DEFAULT_PORT};
pub use paths::Paths;
pub use prefs::{JsonPrefs, PrefStore, PrefsError};
pub use registry::{GlancesServer, ServerRegistry};
