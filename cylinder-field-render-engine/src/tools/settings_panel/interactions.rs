use bevy::prelude::*;

use super::state::*;
use crate::engine::scene::{RegenerateEvent, SceneSettings};
use constants::render_settings::{PARAM_MAX, PARAM_MIN};

// Stepper buttons nudge their parameter, clamped to the accepted range
pub fn param_button_interaction(
    mut q: Query<
        (&Interaction, &ParamButton, &mut BackgroundColor),
        (Changed<Interaction>, With<Button>),
    >,
    mut settings: ResMut<SceneSettings>,
) {
    for (interaction, button, mut bg) in &mut q {
        match *interaction {
            Interaction::Pressed => {
                let target = match button.param {
                    ParamKind::CylinderCount => &mut settings.cylinder_count,
                    ParamKind::RingColor => &mut settings.ring_color_value,
                };
                *target = (*target + button.delta).clamp(PARAM_MIN, PARAM_MAX);
                *bg = BackgroundColor(Color::srgb(0.18, 0.20, 0.24));
            }
            Interaction::Hovered => *bg = BackgroundColor(Color::srgb(0.26, 0.28, 0.32)),
            Interaction::None => *bg = BackgroundColor(Color::srgb(0.22, 0.24, 0.28)),
        }
    }
}

// Ring toggle flips inclusion of the boundary ring, green while active
pub fn ring_toggle_interaction(
    mut q: Query<
        (&Interaction, &mut BackgroundColor),
        (Changed<Interaction>, With<Button>, With<RingToggleButton>),
    >,
    mut settings: ResMut<SceneSettings>,
) {
    for (interaction, mut bg) in &mut q {
        match *interaction {
            Interaction::Pressed => {
                settings.include_ring = !settings.include_ring;
                *bg = BackgroundColor(Color::srgb(0.18, 0.20, 0.24));
            }
            Interaction::Hovered => *bg = BackgroundColor(Color::srgb(0.26, 0.28, 0.32)),
            Interaction::None => {
                *bg = BackgroundColor(if settings.include_ring {
                    Color::srgb(0.0, 0.90, 0.0)
                } else {
                    Color::srgb(0.22, 0.24, 0.28)
                })
            }
        }
    }
}

// Generate button requests a fresh scene with the current settings
pub fn generate_button_interaction(
    mut q: Query<
        (&Interaction, &mut BackgroundColor),
        (Changed<Interaction>, With<Button>, With<GenerateButton>),
    >,
    mut events: EventWriter<RegenerateEvent>,
) {
    for (interaction, mut bg) in &mut q {
        match *interaction {
            Interaction::Pressed => {
                events.write(RegenerateEvent);
                *bg = BackgroundColor(Color::srgb(0.18, 0.20, 0.24));
            }
            Interaction::Hovered => *bg = BackgroundColor(Color::srgb(0.26, 0.28, 0.32)),
            Interaction::None => *bg = BackgroundColor(Color::srgb(0.22, 0.24, 0.28)),
        }
    }
}

/// Keyboard shortcut mirroring the generate button.
pub fn regenerate_shortcut(
    keys: Res<ButtonInput<KeyCode>>,
    mut events: EventWriter<RegenerateEvent>,
) {
    if keys.just_pressed(KeyCode::KeyG) {
        events.write(RegenerateEvent);
    }
}
