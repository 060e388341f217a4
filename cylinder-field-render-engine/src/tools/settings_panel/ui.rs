use bevy::prelude::*;

use super::state::*;
use crate::engine::scene::SceneSettings;

// Spawns the generator panel with parameter steppers and action buttons
pub fn spawn_settings_panel(mut commands: Commands, settings: Res<SceneSettings>) {
    commands
        .spawn((
            SettingsPanelRoot,
            Name::new("SettingsPanel"),
            BackgroundColor(Color::srgb(0.10, 0.11, 0.13)),
            Node {
                width: Val::Px(260.0),
                position_type: PositionType::Absolute,
                left: Val::Px(0.0),
                top: Val::Px(0.0),
                padding: UiRect::all(Val::Px(12.0)),
                display: Display::Flex,
                flex_direction: FlexDirection::Column,
                row_gap: Val::Px(8.0),
                ..default()
            },
        ))
        .with_children(|parent| {
            parent.spawn((
                Name::new("Title"),
                Text::new("Generator"),
                TextFont {
                    font_size: 18.0,
                    ..default()
                },
                TextColor(Color::srgb(1.0, 1.0, 1.0)),
            ));

            spawn_param_row(
                parent,
                "Cylinders",
                ParamKind::CylinderCount,
                settings.cylinder_count,
            );
            spawn_param_row(
                parent,
                "Ring colour",
                ParamKind::RingColor,
                settings.ring_color_value,
            );

            parent
                .spawn((
                    RingToggleButton,
                    Button,
                    Name::new("RingToggleButton"),
                    BackgroundColor(Color::srgb(0.0, 0.90, 0.0)),
                    BorderColor(Color::srgba(0.0, 0.0, 0.0, 0.25)),
                    Node {
                        width: Val::Percent(100.0),
                        height: Val::Px(32.0),
                        display: Display::Flex,
                        align_items: AlignItems::Center,
                        justify_content: JustifyContent::Center,
                        border: UiRect::all(Val::Px(1.0)),
                        ..default()
                    },
                ))
                .with_children(|btn| {
                    btn.spawn((
                        RingToggleLabel,
                        Text::new(ring_label(settings.include_ring)),
                        TextFont {
                            font_size: 14.0,
                            ..default()
                        },
                        TextColor(Color::srgb(1.0, 1.0, 1.0)),
                    ));
                });

            parent
                .spawn((
                    GenerateButton,
                    Button,
                    Name::new("GenerateButton"),
                    BackgroundColor(Color::srgb(0.22, 0.24, 0.28)),
                    BorderColor(Color::srgba(0.0, 0.0, 0.0, 0.25)),
                    Node {
                        width: Val::Percent(100.0),
                        height: Val::Px(36.0),
                        display: Display::Flex,
                        align_items: AlignItems::Center,
                        justify_content: JustifyContent::Center,
                        border: UiRect::all(Val::Px(1.0)),
                        ..default()
                    },
                ))
                .with_children(|btn| {
                    btn.spawn((
                        Text::new("Generate (G)"),
                        TextFont {
                            font_size: 16.0,
                            ..default()
                        },
                        TextColor(Color::srgb(1.0, 1.0, 1.0)),
                    ));
                });
        });
}

// One labelled row: -10 -1 [value] +1 +10
fn spawn_param_row(
    parent: &mut ChildSpawnerCommands,
    label: &str,
    param: ParamKind,
    value: i32,
) {
    parent.spawn((
        Name::new(format!("{label}Label")),
        Text::new(label),
        TextFont {
            font_size: 14.0,
            ..default()
        },
        TextColor(Color::srgb(0.8, 0.8, 0.8)),
    ));

    parent
        .spawn((Node {
            width: Val::Percent(100.0),
            display: Display::Flex,
            align_items: AlignItems::Center,
            justify_content: JustifyContent::SpaceBetween,
            column_gap: Val::Px(4.0),
            ..default()
        },))
        .with_children(|row| {
            spawn_step_button(row, param, -10);
            spawn_step_button(row, param, -1);
            row.spawn((
                ParamValueLabel(param),
                Text::new(value.to_string()),
                TextFont {
                    font_size: 16.0,
                    ..default()
                },
                TextColor(Color::srgb(1.0, 1.0, 1.0)),
            ));
            spawn_step_button(row, param, 1);
            spawn_step_button(row, param, 10);
        });
}

fn spawn_step_button(row: &mut ChildSpawnerCommands, param: ParamKind, delta: i32) {
    row.spawn((
        ParamButton { param, delta },
        Button,
        BackgroundColor(Color::srgb(0.22, 0.24, 0.28)),
        BorderColor(Color::srgba(0.0, 0.0, 0.0, 0.25)),
        Node {
            width: Val::Px(40.0),
            height: Val::Px(28.0),
            display: Display::Flex,
            align_items: AlignItems::Center,
            justify_content: JustifyContent::Center,
            border: UiRect::all(Val::Px(1.0)),
            ..default()
        },
    ))
    .with_children(|btn| {
        btn.spawn((
            Text::new(format!("{delta:+}")),
            TextFont {
                font_size: 14.0,
                ..default()
            },
            TextColor(Color::srgb(1.0, 1.0, 1.0)),
        ));
    });
}

pub fn ring_label(include_ring: bool) -> String {
    if include_ring {
        "Ring: on".to_string()
    } else {
        "Ring: off".to_string()
    }
}

// Keeps the value labels and ring toggle text in sync with the settings
pub fn update_param_labels(
    settings: Res<SceneSettings>,
    mut values: Query<(&ParamValueLabel, &mut Text), Without<RingToggleLabel>>,
    mut toggles: Query<&mut Text, With<RingToggleLabel>>,
) {
    if !settings.is_changed() {
        return;
    }

    for (label, mut text) in &mut values {
        let value = match label.0 {
            ParamKind::CylinderCount => settings.cylinder_count,
            ParamKind::RingColor => settings.ring_color_value,
        };
        let rendered = value.to_string();
        if text.0 != rendered {
            *text = Text::new(rendered);
        }
    }

    for mut text in &mut toggles {
        let rendered = ring_label(settings.include_ring);
        if text.0 != rendered {
            *text = Text::new(rendered);
        }
    }
}
