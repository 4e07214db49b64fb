//! Provides a Bevy `Plugin` for integrating seed-based random number generation.
//!
//! This plugin initializes the `SeedResource` and sets up an event handler
//! for `SeedChangedEvent` to update the resource when the seed policy changes.

use super::{events::SeedChangedEvent, resource::SeedResource};
use bevy::prelude::*;

/// A Bevy `Plugin` responsible for managing the global `SeedResource`.
pub struct SeedPlugin;

/// System set in which seed policy changes are applied. Systems that draw a
/// generator from `SeedResource` in the same frame should run after it.
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub struct SeedSystems;

impl Plugin for SeedPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<SeedResource>()
            .add_event::<SeedChangedEvent>()
            .add_systems(Update, seed_changed_event_handler.in_set(SeedSystems));
    }
}

/// Übernimmt neue Seed-Policies aus `SeedChangedEvent`s in die `SeedResource`.
fn seed_changed_event_handler(
    mut events: EventReader<SeedChangedEvent>,
    mut seed_resource: ResMut<SeedResource>,
) {
    for event in events.read() {
        info!(
            "SeedResource is being updated due to SeedChangedEvent: {:?}",
            event.new_policy
        );
        seed_resource.policy = event.new_policy;
    }
}
