// src/diagram/mod.rs

// Zustand und Systeme der Demo: Parameter aus der UI, Generierung, Kamera
pub mod resources;
pub mod systems;
