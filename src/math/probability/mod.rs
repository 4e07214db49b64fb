pub mod seed;

pub use seed::events::SeedChangedEvent;
pub use seed::plugin::{SeedPlugin, SeedSystems};
pub use seed::resource::{SeedPolicy, SeedResource};
