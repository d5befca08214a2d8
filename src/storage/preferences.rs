//! Favorites and price alerts, persisted across sessions.

use std::collections::BTreeMap;

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::drug::DrugCard;
use crate::storage::error::{PreferenceError, StorageError};
use crate::storage::kv::KeyValueStore;

/// Storage key of the favorites list.
pub const FAVORITES_KEY: &str = "favoriteDrugs";
/// Storage key of the alert map.
pub const ALERTS_KEY: &str = "priceAlerts";

/// Owns the in-memory favorites and alerts and mirrors every change into the
/// key-value substrate.
///
/// Both collections are read once in [`PreferenceStore::load`]. Each mutation
/// overwrites the stored value with the full serialized collection. When the
/// write fails the in-memory collection keeps the change and the error is
/// returned to the caller.
pub struct PreferenceStore {
    backend: Box<dyn KeyValueStore>,
    favorites: Vec<DrugCard>,
    alerts: BTreeMap<String, f64>,
}

impl PreferenceStore {
    /// Read both collections. Unreadable or malformed values load as empty.
    ///
    /// Entries that break the collection rules are dropped: later favorites
    /// repeating an earlier name, and alerts without a positive target.
    pub fn load(backend: Box<dyn KeyValueStore>) -> Self {
        let favorites = unique_favorites(
            load_collection(backend.as_ref(), FAVORITES_KEY).unwrap_or_default(),
        );
        let alerts = valid_alerts(
            load_collection(backend.as_ref(), ALERTS_KEY).unwrap_or_default(),
        );

        tracing::debug!(
            favorites = favorites.len(),
            alerts = alerts.len(),
            "preferences loaded"
        );

        Self {
            backend,
            favorites,
            alerts,
        }
    }

    /// Favorites in the order they were added.
    pub fn favorites(&self) -> &[DrugCard] {
        &self.favorites
    }

    pub fn alerts(&self) -> &BTreeMap<String, f64> {
        &self.alerts
    }

    pub fn is_favorite(&self, name: &str) -> bool {
        self.favorites.iter().any(|fav| fav.name == name)
    }

    pub fn alert_for(&self, name: &str) -> Option<f64> {
        self.alerts.get(name).copied()
    }

    /// Target price of the alert `card` satisfies, if any.
    pub fn alert_hit(&self, card: &DrugCard) -> Option<f64> {
        let target = self.alert_for(&card.name)?;
        let price = card.price?;
        (price <= target).then_some(target)
    }

    /// Returns `false` when a favorite with the same name already exists.
    pub fn add_favorite(&mut self, drug: DrugCard) -> Result<bool, PreferenceError> {
        if self.is_favorite(&drug.name) {
            return Ok(false);
        }
        tracing::debug!(name = %drug.name, "adding favorite");
        self.favorites.push(drug);
        self.save(FAVORITES_KEY, &self.favorites)?;
        Ok(true)
    }

    /// Removes every favorite named `name`. The list is written back even
    /// when nothing matched.
    pub fn remove_favorite(&mut self, name: &str) -> Result<bool, PreferenceError> {
        let before = self.favorites.len();
        self.favorites.retain(|fav| fav.name != name);
        let removed = self.favorites.len() != before;
        self.save(FAVORITES_KEY, &self.favorites)?;
        Ok(removed)
    }

    /// Sets or replaces the alert for `name`.
    pub fn set_alert(&mut self, name: &str, target_price: f64) -> Result<(), PreferenceError> {
        if !is_valid_alert_price(target_price) {
            return Err(PreferenceError::InvalidAlertPrice {
                input: target_price.to_string(),
            });
        }
        tracing::debug!(name, target_price, "setting price alert");
        self.alerts.insert(name.to_string(), target_price);
        self.save(ALERTS_KEY, &self.alerts)?;
        Ok(())
    }

    pub fn remove_alert(&mut self, name: &str) -> Result<bool, PreferenceError> {
        let removed = self.alerts.remove(name).is_some();
        self.save(ALERTS_KEY, &self.alerts)?;
        Ok(removed)
    }

    fn save<T: Serialize>(&self, key: &str, value: &T) -> Result<(), StorageError> {
        let json = serde_json::to_string(value).map_err(|source| StorageError::Serialize {
            key: key.to_string(),
            source,
        })?;
        self.backend.set(key, &json)
    }
}

/// Parse user-entered alert text such as `4.99` or `$4.99`.
pub fn parse_alert_price(input: &str) -> Result<f64, PreferenceError> {
    let invalid = || PreferenceError::InvalidAlertPrice {
        input: input.to_string(),
    };
    let price: f64 = input
        .trim()
        .trim_start_matches('$')
        .parse()
        .map_err(|_| invalid())?;
    if !is_valid_alert_price(price) {
        return Err(invalid());
    }
    Ok(price)
}

fn is_valid_alert_price(price: f64) -> bool {
    price.is_finite() && price > 0.0
}

fn unique_favorites(stored: Vec<DrugCard>) -> Vec<DrugCard> {
    let mut favorites: Vec<DrugCard> = Vec::with_capacity(stored.len());
    for drug in stored {
        if favorites.iter().any(|fav| fav.name == drug.name) {
            tracing::warn!(
                key = FAVORITES_KEY,
                name = %drug.name,
                "dropping duplicate favorite"
            );
            continue;
        }
        favorites.push(drug);
    }
    favorites
}

fn valid_alerts(stored: BTreeMap<String, f64>) -> BTreeMap<String, f64> {
    stored
        .into_iter()
        .filter(|(name, target)| {
            let valid = is_valid_alert_price(*target);
            if !valid {
                tracing::warn!(
                    key = ALERTS_KEY,
                    name = %name,
                    target = *target,
                    "dropping invalid price alert"
                );
            }
            valid
        })
        .collect()
}

fn load_collection<T: DeserializeOwned>(backend: &dyn KeyValueStore, key: &str) -> Option<T> {
    let raw = match backend.get(key) {
        Ok(raw) => raw?,
        Err(err) => {
            tracing::warn!(key, error = %err, "failed to read preferences, starting empty");
            return None;
        }
    };

    match serde_json::from_str(&raw) {
        Ok(value) => Some(value),
        Err(err) => {
            tracing::warn!(key, error = %err, "malformed preferences, starting empty");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_accepts_dollar_prefix() {
        assert_eq!(parse_alert_price(" $4.99 ").unwrap(), 4.99);
    }

    #[test]
    fn parse_rejects_non_positive_and_garbage() {
        for input in ["0", "-3", "abc", "", "inf", "NaN"] {
            assert!(
                matches!(
                    parse_alert_price(input),
                    Err(PreferenceError::InvalidAlertPrice { .. })
                ),
                "{input} should be rejected"
            );
        }
    }
}
