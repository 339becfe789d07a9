//! Side-scrolling character controller demo: a per-state flipbook animation
//! machine over a hecs world, plus the kinematic movement, input routing and
//! SDL glue that feed it.

pub mod app;
pub mod camera;
pub mod components;
pub mod engine;
pub mod scene;
pub mod systems;
