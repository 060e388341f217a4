//! Orbit camera for navigating the generated field.
//!
//! Left-drag orbits around the focus point, the wheel dollies within
//! fixed distance limits, and right-drag pans the focus across the
//! ground plane.

pub mod orbit_camera;

pub use orbit_camera::{OrbitCamera, camera_controller};
