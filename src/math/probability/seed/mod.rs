pub mod events;
pub mod plugin;
pub mod resource;
