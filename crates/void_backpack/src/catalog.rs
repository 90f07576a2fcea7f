//! Item catalog: identifier to definition lookup

use crate::error::CatalogError;
use crate::item::ItemDefinition;
use serde::Deserialize;
use std::collections::HashMap;
use std::fs;
use std::path::Path;

/// Read-only item lookup consumed by [`Inventory`](crate::inventory::Inventory)
///
/// Lookups must be deterministic and free of side effects.
pub trait ItemCatalog: Send + Sync {
    /// Find the definition for an item, `None` if unknown
    fn lookup(&self, item_id: &str) -> Option<&ItemDefinition>;
}

impl ItemCatalog for HashMap<String, ItemDefinition> {
    fn lookup(&self, item_id: &str) -> Option<&ItemDefinition> {
        self.get(item_id)
    }
}

/// On-disk catalog format
#[derive(Debug, Deserialize)]
struct ItemList {
    items: Vec<ItemDefinition>,
}

/// In-memory item table
#[derive(Debug, Clone, Default)]
pub struct ItemTable {
    items: HashMap<String, ItemDefinition>,
}

impl ItemTable {
    /// Create an empty table
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a table from JSON of the form `{ "items": [ { "id": ... }, ... ] }`
    pub fn from_json_str(json: &str) -> Result<Self, CatalogError> {
        let list: ItemList = serde_json::from_str(json)?;
        let mut table = Self::new();
        for item in list.items {
            table.register(item)?;
        }
        Ok(table)
    }

    /// Load a table from a JSON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let json = fs::read_to_string(path.as_ref())?;
        let table = Self::from_json_str(&json)?;
        log::info!(
            "Loaded {} item definitions from {}",
            table.len(),
            path.as_ref().display()
        );
        Ok(table)
    }

    /// Register a definition
    pub fn register(&mut self, item: ItemDefinition) -> Result<(), CatalogError> {
        if let Some(reason) = item.invalid_reason() {
            return Err(CatalogError::InvalidDefinition {
                id: item.id,
                reason: reason.to_string(),
            });
        }
        if self.items.contains_key(&item.id) {
            return Err(CatalogError::DuplicateItem(item.id));
        }
        self.items.insert(item.id.clone(), item);
        Ok(())
    }

    /// Register a definition (builder style)
    pub fn with_item(mut self, item: ItemDefinition) -> Result<Self, CatalogError> {
        self.register(item)?;
        Ok(self)
    }

    /// Number of definitions
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Check if the table is empty
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl ItemCatalog for ItemTable {
    fn lookup(&self, item_id: &str) -> Option<&ItemDefinition> {
        self.items.get(item_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ITEMS: &str = r#"{
        "items": [
            { "id": "iron_sword", "name": "Iron Sword", "weight": 8.0, "max_stack": 1 },
            { "id": "arrow", "name": "Arrow", "weight": 0.1, "max_stack": 50, "actor_class": "BP_Arrow" }
        ]
    }"#;

    #[test]
    fn test_from_json() {
        let table = ItemTable::from_json_str(ITEMS).unwrap();

        assert_eq!(table.len(), 2);
        let arrow = table.lookup("arrow").unwrap();
        assert_eq!(arrow.max_stack, 50);
        assert_eq!(arrow.actor_class, "BP_Arrow");
        assert!(table.lookup("shield").is_none());
    }

    #[test]
    fn test_duplicate_rejected() {
        let result = ItemTable::new()
            .with_item(ItemDefinition::new("gem", "Gem"))
            .and_then(|t| t.with_item(ItemDefinition::new("gem", "Other Gem")));

        assert!(matches!(result, Err(CatalogError::DuplicateItem(id)) if id == "gem"));
    }

    #[test]
    fn test_invalid_rejected() {
        let json = r#"{ "items": [ { "id": "bad", "max_stack": 0 } ] }"#;

        assert!(matches!(
            ItemTable::from_json_str(json),
            Err(CatalogError::InvalidDefinition { .. })
        ));
        assert!(matches!(
            ItemTable::from_json_str("not json"),
            Err(CatalogError::Json(_))
        ));
    }

    #[test]
    fn test_hashmap_catalog() {
        let mut map = HashMap::new();
        map.insert("coin".to_string(), ItemDefinition::new("coin", "Coin"));

        assert!(map.lookup("coin").is_some());
        assert!(map.lookup("gem").is_none());
    }

    #[test]
    fn test_load_missing_file() {
        assert!(matches!(
            ItemTable::load("does/not/exist.json"),
            Err(CatalogError::Io(_))
        ));
    }
}
