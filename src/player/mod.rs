pub mod controller;
pub mod input;
pub mod physics;

pub use controller::SimulationState;
pub use input::{MouseTracker, PlayerInput};
pub use physics::{Collider, CylinderObstacle, Footprint};
