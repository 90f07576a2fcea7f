//! Pickup of items lying in the world

use crate::inventory::Inventory;
use crate::placement::{Placement, SpawnRequest};

/// An item lying in the world, waiting to be picked up
#[derive(Debug, Clone, PartialEq)]
pub struct WorldItem {
    /// Item ID (references ItemDefinition)
    pub item_id: String,
    /// Units granted on pickup
    pub quantity: u32,
    /// World transform
    pub placement: Placement,
    /// Whether the item is still in the world
    pub enabled: bool,
    /// Allowed picker entity IDs (empty = anyone)
    pub allowed_pickers: Vec<u64>,
}

impl WorldItem {
    /// Create a single world item
    pub fn new(item_id: impl Into<String>, placement: Placement) -> Self {
        Self {
            item_id: item_id.into(),
            quantity: 1,
            placement,
            enabled: true,
            allowed_pickers: Vec::new(),
        }
    }

    /// Create the world item for a spawned drop
    pub fn from_spawn(request: &SpawnRequest<'_>) -> Self {
        Self::new(request.item_id, request.placement)
    }

    /// Set quantity
    pub fn with_quantity(mut self, quantity: u32) -> Self {
        self.quantity = quantity.max(1);
        self
    }

    /// Restrict who may pick the item up
    pub fn with_allowed_pickers(mut self, pickers: Vec<u64>) -> Self {
        self.allowed_pickers = pickers;
        self
    }

    /// Check if the picker may take this item
    pub fn can_pickup(&self, picker_id: u64) -> bool {
        self.enabled && (self.allowed_pickers.is_empty() || self.allowed_pickers.contains(&picker_id))
    }

    /// Try to move this item into the picker's inventory
    ///
    /// On success the item leaves the world (`enabled` becomes false). If the
    /// inventory rejects it, for example because it is too heavy, the item
    /// stays where it is.
    pub fn try_pickup(&mut self, picker_id: u64, inventory: &mut Inventory) -> bool {
        if !self.can_pickup(picker_id) {
            return false;
        }

        match inventory.add_item(&self.item_id, self.quantity) {
            Ok(()) => {
                self.enabled = false;
                true
            }
            Err(e) => {
                log::debug!("Pickup of {} by {} refused: {}", self.item_id, picker_id, e);
                false
            }
        }
    }
}
