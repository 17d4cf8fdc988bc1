//! In-memory registry of configured Glances servers.

use serde::Serialize;

use crate::prefs::{PrefStore, PrefsError};

/// One configured endpoint: a unique nickname and its canonical address.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GlancesServer {
    pub nickname: String,
    pub address: String,
}

/// Source of truth for configured endpoints between load and save.
/// Enumeration order is insertion order from the last load.
#[derive(Debug, Default)]
pub struct ServerRegistry {
    servers: Vec<GlancesServer>,
}

impl ServerRegistry {
    pub fn new() -> Self {
        Self {
            servers: Vec::new(),
        }
    }

    /// Insert a record, overwriting any existing record with the same
    /// nickname (last write wins). Input is validated by the caller.
    pub fn add_or_replace(&mut self, nickname: &str, address: &str) {
        match self.servers.iter_mut().find(|s| s.nickname == nickname) {
            Some(existing) => existing.address = address.to_string(),
            None => self.servers.push(GlancesServer {
                nickname: nickname.to_string(),
                address: address.to_string(),
            }),
        }
    }

    /// Delete the record for `nickname`. Returns whether one was present;
    /// removing an unknown nickname is a no-op, not a failure.
    pub fn remove(&mut self, nickname: &str) -> bool {
        let before = self.servers.len();
        self.servers.retain(|s| s.nickname != nickname);
        self.servers.len() < before
    }

    /// Drop every record.
    pub fn remove_all(&mut self) {
        self.servers.clear();
    }

    pub fn get(&self, nickname: &str) -> Option<&GlancesServer> {
        self.servers.iter().find(|s| s.nickname == nickname)
    }

    /// All records, in insertion order from the last load.
    pub fn servers(&self) -> &[GlancesServer] {
        &self.servers
    }

    /// Nicknames only, for contexts that need identity without addresses.
    pub fn nicknames(&self) -> Vec<&str> {
        self.servers.iter().map(|s| s.nickname.as_str()).collect()
    }

    pub fn len(&self) -> usize {
        self.servers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.servers.is_empty()
    }

    /// Read the store's whole key space back as nickname/address pairs.
    /// Stored entries are trusted as already normalized. Returns how many
    /// records were loaded.
    pub fn load_from(&mut self, store: &impl PrefStore) -> usize {
        let mut count = 0;
        for nickname in store.get_all().keys() {
            let address = store.get_string(nickname, "");
            self.add_or_replace(nickname, &address);
            count += 1;
        }
        count
    }

    /// Write every record to the store as one nickname -> address pair and
    /// commit. The store ends up holding exactly the current records.
    /// Returns the record count, the only diagnostic this emits.
    pub fn save_to(&self, store: &mut impl PrefStore) -> Result<usize, PrefsError> {
        store.clear();
        for server in &self.servers {
            store.put_string(&server.nickname, &server.address);
        }
        store.commit()?;
        Ok(self.servers.len())
    }
}
