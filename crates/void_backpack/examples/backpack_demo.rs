//! Backpack demonstration
//!
//! This example shows:
//! - Loading item definitions from JSON
//! - Stacking and the carry weight limit
//! - Sorting by weight
//! - Dropping an item and picking it back up
//!
//! Run with `RUST_LOG=debug` to see the inventory log output.

use std::sync::Arc;
use void_backpack::prelude::*;

const ITEMS: &str = r#"{
    "items": [
        { "id": "iron_ingot", "name": "Iron Ingot", "weight": 5.0, "max_stack": 4, "actor_class": "BP_Ingot" },
        { "id": "apple", "name": "Apple", "weight": 0.3, "max_stack": 10, "actor_class": "BP_Apple" },
        { "id": "longsword", "name": "Longsword", "weight": 12.0, "max_stack": 1, "actor_class": "BP_Sword" }
    ]
}"#;

struct ConsoleWorld {
    spawned: Vec<WorldItem>,
}

impl ItemPlacer for ConsoleWorld {
    fn spawn_in_world(&mut self, request: &SpawnRequest<'_>) -> Result<SpawnHandle, PlacementError> {
        if request.prototype().is_empty() {
            return Err(PlacementError::MissingPrototype(request.item_id.to_string()));
        }
        println!(
            "  spawned {} ({}) at {:?}",
            request.definition.name,
            request.prototype(),
            request.placement.position
        );
        self.spawned.push(WorldItem::from_spawn(request));
        Ok(SpawnHandle(self.spawned.len() as u64))
    }
}

fn print_inventory(inventory: &Inventory) {
    for (index, slot) in inventory.slots().iter().enumerate() {
        println!("  [{index}] {} x{}", slot.item_id, slot.quantity);
    }
    println!(
        "  weight {:.1} / {:.1}",
        inventory.current_weight(),
        inventory.max_carry_weight()
    );
}

fn main() {
    // Initialize logging
    env_logger::init();

    println!("Backpack Demo");
    println!("=============\n");

    let table = match ItemTable::from_json_str(ITEMS) {
        Ok(table) => table,
        Err(e) => {
            eprintln!("Failed to load items: {}", e);
            return;
        }
    };

    let config = InventoryConfig::default().with_max_carry_weight(40.0);
    let mut backpack = Inventory::from_config(&config, Arc::new(table));
    backpack.subscribe(|| println!("  (inventory updated)"));

    println!("Adding items...");
    for (id, amount) in [("longsword", 1), ("iron_ingot", 3), ("apple", 12), ("iron_ingot", 2)] {
        if let Err(e) = backpack.add_item(id, amount) {
            println!("  rejected {} x{}: {}", id, amount, e);
        }
    }
    print_inventory(&backpack);

    println!("\nSorting by weight...");
    backpack.sort_by_weight();
    print_inventory(&backpack);

    println!("\nDropping a longsword...");
    let mut world = ConsoleWorld { spawned: Vec::new() };
    let placement = Placement::in_front_of([0.0; 3], [1.0, 0.0, 0.0], [0.0; 3], config.drop_distance);
    if let Err(e) = backpack.drop_item("longsword", placement, &mut world) {
        println!("  drop failed: {}", e);
    }
    print_inventory(&backpack);

    println!("\nPicking it back up...");
    if let Some(sword) = world.spawned.first_mut() {
        let picked = sword.try_pickup(1, &mut backpack);
        println!("  picked up: {}", picked);
    }
    print_inventory(&backpack);
}
