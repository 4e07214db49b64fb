use super::resource::SeedPolicy;
use bevy::prelude::*;

#[derive(Event, Debug, Clone)]
pub struct SeedChangedEvent {
    pub new_policy: SeedPolicy,
}
