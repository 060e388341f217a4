//! Shared constants for the cylinder field generator and render engine.

/// Grid layout, cylinder and ring dimensions shared by generation and rendering.
pub mod layout;

/// Parameter defaults/bounds and camera, orbit and fog settings.
pub mod render_settings;
