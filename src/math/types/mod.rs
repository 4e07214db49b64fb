// src/math/types/mod.rs
pub mod bounds;
pub mod point;

pub use bounds::*;
pub use point::*;

// Re-export häufig verwendete externe Typen
pub use bevy::math::DVec2;
pub use spade::Point2;

// Einheitliche Typen für das gesamte Modul.
// f64, damit der ganzzahlige Skalierungspfad verlustfrei bleibt.
pub type Point2D = DVec2;
pub type SpadePoint = Point2<f64>;
