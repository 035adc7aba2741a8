//! Run-scoped market-to-listing reference map.

use crate::entities::Market;
use crate::error::GeneratorError;
use std::collections::{BTreeMap, BTreeSet};
use std::sync::Mutex;
use tracing::debug;

struct RegistryState {
    markets: BTreeMap<String, (Market, BTreeSet<String>)>,
    sealed: bool,
}

/// Collects which listings referenced which market during a run.
///
/// This is the only mutable state shared between concurrently generated
/// listings, so every write goes through one mutex. Once [`seal`] has been
/// called the reference sets are frozen and further registrations fail.
///
/// [`seal`]: MarketRegistry::seal
pub struct MarketRegistry {
    state: Mutex<RegistryState>,
}

impl MarketRegistry {
    /// Create a registry holding the pending (not yet persisted) markets.
    pub fn new(markets: Vec<Market>) -> Self {
        let markets = markets
            .into_iter()
            .map(|m| (m.id.clone(), (m, BTreeSet::new())))
            .collect();
        Self {
            state: Mutex::new(RegistryState {
                markets,
                sealed: false,
            }),
        }
    }

    /// Record that `listing_id` references each of `market_ids`.
    pub fn register(&self, listing_id: &str, market_ids: &[String]) -> Result<(), GeneratorError> {
        let mut state = self.lock();
        if state.sealed {
            return Err(GeneratorError::RegistrySealed {
                listing_id: listing_id.to_string(),
            });
        }

        // Validate first so a bad reference leaves the map untouched
        if let Some(unknown) = market_ids.iter().find(|id| !state.markets.contains_key(*id)) {
            return Err(GeneratorError::UnknownReference {
                kind: "market",
                value: unknown.clone(),
            });
        }

        for market_id in market_ids {
            if let Some((_, listings)) = state.markets.get_mut(market_id) {
                listings.insert(listing_id.to_string());
            }
        }
        debug!(
            "Registered listing '{}' with {} market(s)",
            listing_id,
            market_ids.len()
        );
        Ok(())
    }

    /// Freeze the registry and return every market with its final listing set.
    pub fn seal(&self) -> Vec<Market> {
        let mut state = self.lock();
        state.sealed = true;
        state
            .markets
            .values()
            .map(|(market, listings)| Market {
                listing_ids: listings.iter().cloned().collect(),
                ..market.clone()
            })
            .collect()
    }

    pub fn is_sealed(&self) -> bool {
        self.lock().sealed
    }

    /// Listings registered so far for one market.
    pub fn listings_for(&self, market_id: &str) -> Option<BTreeSet<String>> {
        self.lock()
            .markets
            .get(market_id)
            .map(|(_, listings)| listings.clone())
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, RegistryState> {
        // A panic while holding the lock cannot leave the map half-written
        self.state.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}
