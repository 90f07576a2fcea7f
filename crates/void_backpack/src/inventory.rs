//! Inventory component

use crate::catalog::ItemCatalog;
use crate::config::InventoryConfig;
use crate::error::{InventoryError, Result};
use crate::events::{InventoryObservers, SubscriberId};
use crate::item::{InventorySlot, ItemDefinition};
use crate::placement::{ItemPlacer, Placement, SpawnHandle, SpawnRequest};
use crate::sort::merge_sort_by;
use std::fmt;
use std::sync::Arc;

/// Weight-limited inventory for a single owner
///
/// Slots are kept in insertion order until [`sort_by_weight`](Self::sort_by_weight)
/// reorders them. Item weight and stack limits come from the catalog, never
/// from the slot itself. Observers are notified after every successful
/// mutation.
pub struct Inventory {
    /// Occupied slots, never holding a zero quantity
    slots: Vec<InventorySlot>,
    /// Maximum total weight
    max_carry_weight: f32,
    /// Item definitions for weight and stack size lookup
    catalog: Option<Arc<dyn ItemCatalog>>,
    /// Change observers
    observers: InventoryObservers,
}

impl Inventory {
    /// Create an empty inventory with the given carry limit and no catalog
    pub fn new(max_carry_weight: f32) -> Self {
        Self {
            slots: Vec::new(),
            max_carry_weight: max_carry_weight.max(0.0),
            catalog: None,
            observers: InventoryObservers::new(),
        }
    }

    /// Create an inventory from configuration
    pub fn from_config(config: &InventoryConfig, catalog: Arc<dyn ItemCatalog>) -> Self {
        Self::new(config.max_carry_weight).with_catalog(catalog)
    }

    /// Set the item catalog
    pub fn with_catalog(mut self, catalog: Arc<dyn ItemCatalog>) -> Self {
        self.catalog = Some(catalog);
        self
    }

    /// Register a change listener
    pub fn subscribe<F>(&mut self, listener: F) -> SubscriberId
    where
        F: Fn() + Send + Sync + 'static,
    {
        let id = self.observers.subscribe(listener);
        log::debug!("Inventory observer {} subscribed", id.0);
        id
    }

    /// Remove a change listener
    pub fn unsubscribe(&mut self, id: SubscriberId) -> bool {
        self.observers.unsubscribe(id)
    }

    /// Number of registered listeners
    pub fn observer_count(&self) -> usize {
        self.observers.len()
    }

    /// Add `amount` units of an item, stacking onto existing slots first
    ///
    /// The carry limit is checked against the whole amount up front, so a
    /// request either fits completely or leaves the inventory untouched.
    pub fn add_item(&mut self, item_id: &str, amount: u32) -> Result<()> {
        if item_id.is_empty() {
            return Err(reject_add(item_id, InventoryError::InvalidItem));
        }
        if amount == 0 {
            return Err(reject_add(item_id, InventoryError::InvalidAmount));
        }

        let catalog = self
            .catalog
            .clone()
            .ok_or_else(|| reject_add(item_id, InventoryError::NoCatalog))?;
        let definition = catalog
            .lookup(item_id)
            .ok_or_else(|| reject_add(item_id, InventoryError::UnknownItem(item_id.to_string())))?;

        // A NaN weight must fail this check
        let required = definition.stack_weight(amount);
        let current = self.current_weight();
        if !(current + required <= self.max_carry_weight) {
            log::warn!("Cannot add item: {} max carry weight reached!", item_id);
            return Err(InventoryError::CapacityExceeded {
                item_id: item_id.to_string(),
                required,
                available: (self.max_carry_weight - current).max(0.0),
            });
        }

        let max_stack = definition.max_stack.max(1);
        let mut remaining = amount;

        // Top up partial stacks first
        for slot in &mut self.slots {
            if remaining == 0 {
                break;
            }
            if slot.holds(item_id) && slot.quantity < max_stack {
                remaining = slot.add(remaining, max_stack);
            }
        }

        while remaining > 0 {
            let quantity = remaining.min(max_stack);
            self.slots.push(InventorySlot::new(item_id, quantity));
            remaining -= quantity;
        }

        self.observers.notify();
        log::info!("Added item: {} x{}", item_id, amount);
        Ok(())
    }

    /// Remove up to `amount` units of an item, returning how many were removed
    ///
    /// Slots are drained from the back, so the most recently created stacks
    /// go first. Asking for more than is held removes everything held.
    /// Observers are notified whenever the arguments are valid, even if no
    /// slot matched.
    pub fn remove_item(&mut self, item_id: &str, amount: u32) -> u32 {
        if item_id.is_empty() || amount == 0 {
            return 0;
        }

        let mut remaining = amount;
        let mut index = self.slots.len();
        while index > 0 && remaining > 0 {
            index -= 1;
            let slot = &mut self.slots[index];
            if !slot.holds(item_id) {
                continue;
            }

            remaining -= slot.remove(remaining);
            if slot.is_empty() {
                self.slots.remove(index);
            }
        }

        self.observers.notify();
        let removed = amount - remaining;
        log::info!("Removed item: {} x{}", item_id, removed);
        removed
    }

    /// Look up an item definition through the catalog
    pub fn get_item_data(&self, item_id: &str) -> Option<&ItemDefinition> {
        self.catalog.as_ref()?.lookup(item_id)
    }

    /// Total weight of everything held
    ///
    /// Slots whose item is missing from the catalog weigh nothing.
    pub fn current_weight(&self) -> f32 {
        self.slots
            .iter()
            .filter_map(|slot| {
                self.get_item_data(&slot.item_id)
                    .map(|def| def.stack_weight(slot.quantity))
            })
            .sum()
    }

    /// Drop one unit of an item into the world
    ///
    /// The unit is only removed once the placer reports a successful spawn.
    pub fn drop_item<P>(
        &mut self,
        item_id: &str,
        placement: Placement,
        placer: &mut P,
    ) -> Result<SpawnHandle>
    where
        P: ItemPlacer + ?Sized,
    {
        if !self.contains(item_id) {
            log::warn!("Couldn't find item: {}. Unable to drop!", item_id);
            return Err(InventoryError::ItemNotHeld(item_id.to_string()));
        }

        let Some(catalog) = self.catalog.clone() else {
            log::warn!("No item catalog. Unable to drop {}!", item_id);
            return Err(InventoryError::NoCatalog);
        };
        let Some(definition) = catalog.lookup(item_id) else {
            log::warn!("No item data for {}. Unable to drop!", item_id);
            return Err(InventoryError::UnknownItem(item_id.to_string()));
        };

        let request = SpawnRequest {
            item_id,
            definition,
            placement,
        };
        let handle = placer.spawn_in_world(&request).map_err(|e| {
            log::warn!("Failed to spawn dropped item {}: {}", item_id, e);
            InventoryError::Placement(e)
        })?;

        log::info!("Dropped item: {}", item_id);
        self.remove_item(item_id, 1);
        Ok(handle)
    }

    /// Reorder slots by ascending per-unit item weight
    ///
    /// Stable: slots of equal weight keep their relative order. Observers are
    /// notified whenever there are at least two slots, even if nothing moved.
    pub fn sort_by_weight(&mut self) {
        if self.slots.len() < 2 {
            return;
        }

        let catalog = self.catalog.clone();
        let weight_of = |slot: &InventorySlot| {
            catalog
                .as_ref()
                .and_then(|c| c.lookup(&slot.item_id))
                .map_or(0.0, |def| def.weight)
        };
        merge_sort_by(&mut self.slots, |a, b| weight_of(a) <= weight_of(b));

        self.observers.notify();
        log::debug!("Sorted {} inventory slots by weight", self.slots.len());
    }

    /// All occupied slots in current order
    pub fn slots(&self) -> &[InventorySlot] {
        &self.slots
    }

    /// Get slot contents
    pub fn get_slot(&self, slot: usize) -> Option<&InventorySlot> {
        self.slots.get(slot)
    }

    /// Number of occupied slots
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Check if inventory is empty
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Find first slot containing specific item
    pub fn find_item(&self, item_id: &str) -> Option<usize> {
        self.slots.iter().position(|s| s.holds(item_id))
    }

    /// Check if any slot holds the item
    pub fn contains(&self, item_id: &str) -> bool {
        self.find_item(item_id).is_some()
    }

    /// Count total quantity of an item
    pub fn count_item(&self, item_id: &str) -> u64 {
        self.slots
            .iter()
            .filter(|s| s.holds(item_id))
            .map(|s| u64::from(s.quantity))
            .sum()
    }

    /// Configured carry limit
    pub fn max_carry_weight(&self) -> f32 {
        self.max_carry_weight
    }

    /// Weight that can still be added
    pub fn remaining_weight(&self) -> f32 {
        (self.max_carry_weight - self.current_weight()).max(0.0)
    }
}

fn reject_add(item_id: &str, error: InventoryError) -> InventoryError {
    log::warn!("Cannot add item '{}': {}", item_id, error);
    error
}

impl Default for Inventory {
    fn default() -> Self {
        Self::new(InventoryConfig::default().max_carry_weight)
    }
}

impl fmt::Debug for Inventory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Inventory")
            .field("slots", &self.slots)
            .field("max_carry_weight", &self.max_carry_weight)
            .field("has_catalog", &self.catalog.is_some())
            .field("observers", &self.observers)
            .finish()
    }
}
