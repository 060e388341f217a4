//! Interactive tooling layered over the generated scene.

/// Parameter panel for steering scene generation.
///
/// Stepper buttons for the numeric parameters, a ring toggle and a
/// regenerate button, plus the matching keyboard shortcut.
pub mod settings_panel;
