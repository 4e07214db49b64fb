// ./src/debug/visualization/mod.rs
pub mod diagram;
