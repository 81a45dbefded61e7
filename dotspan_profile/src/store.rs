// Copyright 2025 the DotSpan Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use std::collections::BTreeMap;

use crate::profile::Profile;

/// Storage key the current release persists the profile under.
pub const STORAGE_KEY: &str = "life-dots-profile-v2";

/// Keys written by earlier releases; the first hit migrates to
/// [`STORAGE_KEY`].
pub const LEGACY_STORAGE_KEYS: &[&str] = &["life-dots-profile"];

/// Key-value storage the profile persists through.
///
/// Hosts back this with whatever they have: web local storage, a settings
/// file on desktop, [`MemoryStore`] in tests.
pub trait ProfileStore {
    /// Returns the value stored under `key`, if any.
    fn get(&self, key: &str) -> Option<String>;
    /// Stores `value` under `key`.
    fn set(&mut self, key: &str, value: &str);
    /// Deletes `key` if present.
    fn remove(&mut self, key: &str);
}

/// In-memory [`ProfileStore`] for tests and headless hosts.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    entries: BTreeMap<String, String>,
}

impl MemoryStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl ProfileStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) {
        self.entries.insert(key.to_owned(), value.to_owned());
    }

    fn remove(&mut self, key: &str) {
        self.entries.remove(key);
    }
}

/// Loads the profile from storage.
///
/// Checks [`STORAGE_KEY`] first, then each legacy key in order, moving a
/// legacy hit to the current key before parsing it. Unreadable payloads fall
/// back to the default profile rather than erroring, and the result is run
/// through [`Profile::normalized`] so the expectancy fields are consistent.
pub fn load_profile(store: &mut impl ProfileStore) -> Profile {
    let mut raw = store.get(STORAGE_KEY);
    if raw.is_none() {
        for legacy in LEGACY_STORAGE_KEYS {
            if let Some(value) = store.get(legacy) {
                store.set(STORAGE_KEY, &value);
                store.remove(legacy);
                raw = Some(value);
                break;
            }
        }
    }
    raw.and_then(|json| serde_json::from_str::<Profile>(&json).ok())
        .unwrap_or_default()
        .normalized()
}

/// Serializes `profile` and stores it under [`STORAGE_KEY`].
pub fn persist_profile(
    store: &mut impl ProfileStore,
    profile: &Profile,
) -> Result<(), serde_json::Error> {
    let json = serde_json::to_string(profile)?;
    store.set(STORAGE_KEY, &json);
    Ok(())
}
