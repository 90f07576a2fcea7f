//! World placement for dropped items

use crate::error::PlacementError;
use crate::item::ItemDefinition;

/// Where a dropped item appears in the world
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Placement {
    /// World position
    pub position: [f32; 3],
    /// Euler rotation (pitch, yaw, roll)
    pub rotation: [f32; 3],
}

impl Placement {
    /// Create a placement at a position with no rotation
    pub fn at(position: [f32; 3]) -> Self {
        Self {
            position,
            rotation: [0.0; 3],
        }
    }

    /// Place `distance` units along the owner's forward vector, facing the
    /// same way as the owner
    pub fn in_front_of(
        owner_position: [f32; 3],
        owner_forward: [f32; 3],
        owner_rotation: [f32; 3],
        distance: f32,
    ) -> Self {
        Self {
            position: [
                owner_position[0] + owner_forward[0] * distance,
                owner_position[1] + owner_forward[1] * distance,
                owner_position[2] + owner_forward[2] * distance,
            ],
            rotation: owner_rotation,
        }
    }
}

/// Handle to a spawned world item
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SpawnHandle(pub u64);

/// Everything the world needs to spawn a dropped item
#[derive(Debug, Clone, Copy)]
pub struct SpawnRequest<'a> {
    /// Dropped item
    pub item_id: &'a str,
    /// Definition carrying the actor class and presentation data
    pub definition: &'a ItemDefinition,
    /// Target transform
    pub placement: Placement,
}

impl SpawnRequest<'_> {
    /// Actor class to instantiate
    pub fn prototype(&self) -> &str {
        &self.definition.actor_class
    }
}

/// Spawns dropped items into the world
pub trait ItemPlacer {
    /// Spawn the item, returning a handle on success
    fn spawn_in_world(&mut self, request: &SpawnRequest<'_>) -> Result<SpawnHandle, PlacementError>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_in_front_of() {
        let placement = Placement::in_front_of([10.0, 0.0, 5.0], [0.0, 0.0, 1.0], [0.0, 90.0, 0.0], 100.0);

        assert_relative_eq!(placement.position[0], 10.0);
        assert_relative_eq!(placement.position[2], 105.0);
        assert_eq!(placement.rotation, [0.0, 90.0, 0.0]);
    }

    struct RecordingPlacer {
        spawned: Vec<String>,
    }

    impl ItemPlacer for RecordingPlacer {
        fn spawn_in_world(&mut self, request: &SpawnRequest<'_>) -> Result<SpawnHandle, PlacementError> {
            self.spawned.push(request.prototype().to_string());
            Ok(SpawnHandle(self.spawned.len() as u64))
        }
    }

    #[test]
    fn test_request_prototype() {
        let definition = ItemDefinition::new("torch", "Torch").with_actor_class("BP_Torch");
        let request = SpawnRequest {
            item_id: "torch",
            definition: &definition,
            placement: Placement::at([1.0, 2.0, 3.0]),
        };

        let mut placer = RecordingPlacer { spawned: Vec::new() };

        assert_eq!(placer.spawn_in_world(&request), Ok(SpawnHandle(1)));
        assert_eq!(placer.spawned, vec!["BP_Torch".to_string()]);
    }
}
