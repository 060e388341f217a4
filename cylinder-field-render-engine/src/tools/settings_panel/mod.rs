//! Generator settings panel.
//!
//! A fixed panel in the top-left corner exposing the two generation
//! parameters as stepper rows, a toggle for the boundary ring and a
//! Generate button. Pressing Generate (or the G key) fires a
//! `RegenerateEvent`; the scene composer rebuilds on the same frame.
//! Parameter edits alone never rebuild the scene.

/// Button handlers for steppers, the ring toggle and Generate.
pub mod interactions;

/// State components identifying the panel's interactive nodes.
pub mod state;

/// Panel spawning and label refresh systems.
pub mod ui;

pub use interactions::{
    generate_button_interaction, param_button_interaction, regenerate_shortcut,
    ring_toggle_interaction,
};
pub use ui::{spawn_settings_panel, update_param_labels};
