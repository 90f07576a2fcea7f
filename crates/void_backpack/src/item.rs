//! Item definitions and inventory slots

use serde::{Deserialize, Serialize};

/// Item definition
///
/// Owned by an [`ItemCatalog`](crate::catalog::ItemCatalog) and read-only to
/// the inventory. Only `weight` and `max_stack` matter to inventory logic;
/// the remaining fields are presentation data handed to the world on drop.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ItemDefinition {
    /// Unique identifier
    pub id: String,
    /// Display name
    pub name: String,
    /// Description
    pub description: String,
    /// Weight per item
    pub weight: f32,
    /// Display value
    pub value: f32,
    /// Maximum quantity per slot (1 = not stackable)
    pub max_stack: u32,
    /// Icon path
    pub icon: String,
    /// Mesh path (for the dropped world item)
    pub mesh: String,
    /// Actor class to spawn when dropped
    pub actor_class: String,
}

impl ItemDefinition {
    /// Create a new item definition
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            ..Default::default()
        }
    }

    /// Set description
    pub fn with_description(mut self, desc: impl Into<String>) -> Self {
        self.description = desc.into();
        self
    }

    /// Set weight
    pub fn with_weight(mut self, weight: f32) -> Self {
        self.weight = weight.max(0.0);
        self
    }

    /// Set value
    pub fn with_value(mut self, value: f32) -> Self {
        self.value = value;
        self
    }

    /// Set max stack size
    pub fn with_max_stack(mut self, max: u32) -> Self {
        self.max_stack = max.max(1);
        self
    }

    /// Set icon path
    pub fn with_icon(mut self, path: impl Into<String>) -> Self {
        self.icon = path.into();
        self
    }

    /// Set mesh path
    pub fn with_mesh(mut self, path: impl Into<String>) -> Self {
        self.mesh = path.into();
        self
    }

    /// Set the actor class spawned on drop
    pub fn with_actor_class(mut self, class: impl Into<String>) -> Self {
        self.actor_class = class.into();
        self
    }

    /// Weight of `quantity` units
    pub fn stack_weight(&self, quantity: u32) -> f32 {
        self.weight * quantity as f32
    }

    /// Check the descriptor invariants, returning the first violation
    pub(crate) fn invalid_reason(&self) -> Option<&'static str> {
        if self.id.is_empty() {
            Some("empty id")
        } else if !self.weight.is_finite() || self.weight < 0.0 {
            Some("weight must be a non-negative number")
        } else if self.max_stack == 0 {
            Some("max_stack must be at least 1")
        } else {
            None
        }
    }
}

impl Default for ItemDefinition {
    fn default() -> Self {
        Self {
            id: String::new(),
            name: "My Item".to_string(),
            description: "This is an item.".to_string(),
            weight: 1.0,
            value: 1.0,
            max_stack: 2,
            icon: String::new(),
            mesh: String::new(),
            actor_class: String::new(),
        }
    }
}

/// A stack of one item type in an inventory
///
/// Live slots always hold `1..=max_stack` units; a slot that reaches zero is
/// removed from the inventory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InventorySlot {
    /// Item ID (references ItemDefinition)
    pub item_id: String,
    /// Quantity
    pub quantity: u32,
}

impl InventorySlot {
    /// Create a new slot
    pub fn new(item_id: impl Into<String>, quantity: u32) -> Self {
        Self {
            item_id: item_id.into(),
            quantity,
        }
    }

    /// Check if this slot holds the given item
    pub fn holds(&self, item_id: &str) -> bool {
        self.item_id == item_id
    }

    /// Add to this slot (returns overflow if any)
    pub fn add(&mut self, amount: u32, max_stack: u32) -> u32 {
        let space = max_stack.saturating_sub(self.quantity);
        let to_add = amount.min(space);
        self.quantity += to_add;
        amount - to_add
    }

    /// Remove from this slot (returns amount actually removed)
    pub fn remove(&mut self, amount: u32) -> u32 {
        let to_remove = amount.min(self.quantity);
        self.quantity -= to_remove;
        to_remove
    }

    /// Check if this slot is empty
    pub fn is_empty(&self) -> bool {
        self.quantity == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_item_definition() {
        let item = ItemDefinition::new("health_potion", "Health Potion")
            .with_weight(0.5)
            .with_max_stack(10)
            .with_value(50.0);

        assert_eq!(item.id, "health_potion");
        assert_eq!(item.max_stack, 10);
        assert_eq!(item.stack_weight(4), 2.0);
        assert!(item.invalid_reason().is_none());
    }

    #[test]
    fn test_builder_clamps() {
        let item = ItemDefinition::new("rock", "Rock")
            .with_weight(-3.0)
            .with_max_stack(0);

        assert_eq!(item.weight, 0.0);
        assert_eq!(item.max_stack, 1);
    }

    #[test]
    fn test_defaults_from_partial_json() {
        let item: ItemDefinition = serde_json::from_str(r#"{ "id": "apple" }"#).unwrap();

        assert_eq!(item.name, "My Item");
        assert_eq!(item.description, "This is an item.");
        assert_eq!(item.weight, 1.0);
        assert_eq!(item.max_stack, 2);
    }

    #[test]
    fn test_invalid_definitions() {
        let mut item = ItemDefinition::new("", "Nothing");
        assert_eq!(item.invalid_reason(), Some("empty id"));

        item.id = "heavy".into();
        item.weight = f32::NAN;
        assert!(item.invalid_reason().is_some());

        item.weight = 1.0;
        item.max_stack = 0;
        assert!(item.invalid_reason().is_some());
    }

    #[test]
    fn test_slot_add_remove() {
        let mut slot = InventorySlot::new("arrows", 1);

        let overflow = slot.add(5, 4);
        assert_eq!(slot.quantity, 4);
        assert_eq!(overflow, 2);

        let removed = slot.remove(10);
        assert_eq!(removed, 4);
        assert!(slot.is_empty());
    }
}
