//! Void Backpack - Weight-Limited Carry Inventory
//!
//! This crate provides the carry inventory for a single owning entity.
//!
//! # Features
//!
//! - Item definitions resolved through an injected catalog
//! - Automatic stacking with per-item max stack sizes
//! - Total carry weight enforced before every add
//! - Stable weight sort (iterative merge sort)
//! - Dropping items into the world through a placement callback
//! - Synchronous change notification for UI observers
//!
//! # Example
//!
//! ```ignore
//! use std::sync::Arc;
//! use void_backpack::prelude::*;
//!
//! let table = ItemTable::new()
//!     .with_item(ItemDefinition::new("arrow", "Arrow").with_weight(0.1).with_max_stack(50))?;
//!
//! let mut inventory = Inventory::new(150.0).with_catalog(Arc::new(table));
//! inventory.subscribe(|| println!("inventory changed"));
//!
//! inventory.add_item("arrow", 120)?;
//! inventory.sort_by_weight();
//! ```

pub mod catalog;
pub mod config;
pub mod error;
pub mod events;
pub mod inventory;
pub mod item;
pub mod pickup;
pub mod placement;
pub mod sort;

pub mod prelude {
    pub use crate::catalog::{ItemCatalog, ItemTable};
    pub use crate::config::InventoryConfig;
    pub use crate::error::{CatalogError, ConfigError, InventoryError, PlacementError};
    pub use crate::events::{InventoryObservers, SubscriberId};
    pub use crate::inventory::Inventory;
    pub use crate::item::{InventorySlot, ItemDefinition};
    pub use crate::pickup::WorldItem;
    pub use crate::placement::{ItemPlacer, Placement, SpawnHandle, SpawnRequest};
}

pub use prelude::*;
