//! Scene composition: camera control, mesh conversion and regeneration.

/// Orbit camera resource and controller system for scene navigation.
pub mod camera;

/// Conversion of generated mesh data into renderable bevy meshes.
pub mod mesh;

/// Scene state, regeneration event handling and entity spawning.
pub mod scene;
