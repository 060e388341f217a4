//! Generated scene state and regeneration handling.
//!
//! A regeneration pass fully replaces the previous scene: the composer
//! only despawns the old entities once a fresh scene has been generated
//! successfully, so a failed pass leaves the last good scene on screen.

pub mod composer;

pub use composer::{
    RegenerateEvent, SceneBuilt, SceneSettings, regenerate_scene_system,
};
