//! Loading and saving the user profile document.

use super::database::Database;
use super::kv::KeyValueStore;
use super::USER_DATA_KEY;
use crate::error::PersistenceError;
use crate::habit::{normalize_profile, UserProfile};

/// Reads and writes the single profile document of an installation.
pub struct ProfileRepository<S> {
    store: S,
}

impl ProfileRepository<Database> {
    /// Repository over the on-disk database in the data directory.
    pub fn open_default() -> Result<Self, PersistenceError> {
        Ok(Self::new(Database::open()?))
    }
}

impl<S: KeyValueStore> ProfileRepository<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Load the stored profile, or a fresh one on first use.
    ///
    /// The loaded profile is normalized: habit cap enforced, missing per-use
    /// spend filled from the catalogue, total re-derived.
    pub fn load(&self) -> Result<UserProfile, PersistenceError> {
        let Some(json) = self.store.get_item(USER_DATA_KEY)? else {
            tracing::debug!("no stored profile, starting fresh");
            return Ok(UserProfile::default());
        };
        let profile: UserProfile =
            serde_json::from_str(&json).map_err(|source| PersistenceError::Corrupt {
                key: USER_DATA_KEY.to_string(),
                source,
            })?;
        Ok(normalize_profile(profile))
    }

    /// Persist `profile`. On failure the caller still holds the value and
    /// may retry.
    pub fn save(&self, profile: &UserProfile) -> Result<(), PersistenceError> {
        let json = serde_json::to_string(profile).map_err(PersistenceError::Encode)?;
        if let Err(e) = self.store.set_item(USER_DATA_KEY, &json) {
            tracing::warn!(error = %e, "failed to save profile");
            return Err(e);
        }
        tracing::debug!(habits = profile.habits.len(), "profile saved");
        Ok(())
    }

    /// Delete the stored profile.
    pub fn clear(&self) -> Result<(), PersistenceError> {
        self.store.remove_item(USER_DATA_KEY)?;
        tracing::info!("user data cleared");
        Ok(())
    }
}
