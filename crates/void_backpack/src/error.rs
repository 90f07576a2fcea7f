//! Error types for the backpack system

use thiserror::Error;

/// Inventory operation errors
#[derive(Debug, Error, Clone, PartialEq)]
pub enum InventoryError {
    /// Empty item identifier
    #[error("Invalid item identifier")]
    InvalidItem,

    /// Amount of zero requested
    #[error("Amount must be greater than zero")]
    InvalidAmount,

    /// Inventory has no item catalog to resolve identifiers
    #[error("No item catalog configured")]
    NoCatalog,

    /// Identifier not present in the catalog
    #[error("Unknown item: {0}")]
    UnknownItem(String),

    /// Adding would push the total weight over the carry limit
    #[error("Cannot add item {item_id}: requires {required} weight, {available} available")]
    CapacityExceeded {
        item_id: String,
        required: f32,
        available: f32,
    },

    /// No slot holds the item
    #[error("Item not held: {0}")]
    ItemNotHeld(String),

    /// The world placement collaborator refused to spawn the item
    #[error("Failed to place item in world: {0}")]
    Placement(#[from] PlacementError),
}

/// Item catalog errors
#[derive(Debug, Error)]
pub enum CatalogError {
    /// File I/O error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Malformed catalog data
    #[error("Could not parse catalog JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// Same identifier registered twice
    #[error("Duplicate item id: {0}")]
    DuplicateItem(String),

    /// Definition violates the descriptor invariants
    #[error("Invalid definition for item '{id}': {reason}")]
    InvalidDefinition { id: String, reason: String },
}

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Malformed configuration data
    #[error("Could not parse configuration JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// Value out of range
    #[error("Invalid value for {field}: {value}")]
    InvalidValue { field: &'static str, value: f32 },
}

/// World placement errors
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PlacementError {
    /// Definition has no prototype to spawn
    #[error("Item '{0}' has no actor class to spawn")]
    MissingPrototype(String),

    /// No owner to place the item relative to
    #[error("Owner not found")]
    OwnerNotFound,

    /// The world rejected the spawn
    #[error("Spawn rejected: {0}")]
    Rejected(String),
}

/// Result type for inventory operations
pub type Result<T> = std::result::Result<T, InventoryError>;
