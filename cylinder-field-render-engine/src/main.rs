use bevy::diagnostic::{DiagnosticsStore, FrameTimeDiagnosticsPlugin};
use bevy::pbr::{DistanceFog, FogFalloff};
use bevy::prelude::*;
use bevy::window::PresentMode;

mod engine;
mod tools;

use constants::render_settings::{
    CAMERA_FAR, CAMERA_FOV_DEGREES, CAMERA_NEAR, CAMERA_START, FOG_DENSITY,
};
use engine::camera::{OrbitCamera, camera_controller};
use engine::scene::{RegenerateEvent, SceneBuilt, SceneSettings, regenerate_scene_system};
use tools::settings_panel::{
    generate_button_interaction, param_button_interaction, regenerate_shortcut,
    ring_toggle_interaction, spawn_settings_panel, update_param_labels,
};

fn main() {
    create_app().run();
}

/// Build the application: rendering, camera, regeneration and UI systems.
fn create_app() -> App {
    let mut app = App::new();

    app.add_plugins(create_default_plugins())
        .add_plugins(FrameTimeDiagnosticsPlugin::default())
        .insert_resource(ClearColor(Color::BLACK))
        .insert_resource(AmbientLight {
            color: Color::srgb_u8(0x22, 0x22, 0x22),
            brightness: 400.0,
            ..default()
        })
        .init_resource::<SceneSettings>()
        .init_resource::<SceneBuilt>()
        .init_resource::<OrbitCamera>()
        .add_event::<RegenerateEvent>()
        .add_systems(Startup, (setup, spawn_settings_panel))
        .add_systems(
            Update,
            (
                camera_controller,
                regenerate_scene_system,
                fps_text_update_system,
                param_button_interaction,
                ring_toggle_interaction,
                generate_button_interaction,
                regenerate_shortcut,
                update_param_labels,
            ),
        );

    app
}

fn create_default_plugins() -> impl PluginGroup {
    DefaultPlugins.set(WindowPlugin {
        primary_window: Some(Window {
            title: "Cylinder Field".into(),
            present_mode: PresentMode::AutoVsync,
            ..default()
        }),
        ..default()
    })
}

/// Spawn lighting, the scene camera and the FPS overlay.
fn setup(mut commands: Commands) {
    spawn_lighting(&mut commands);
    spawn_camera(&mut commands);
    spawn_fps_text(&mut commands);
}

/// Two directional lights plus the ambient resource configured in
/// `create_app`: a white key light and a deep blue fill from below.
fn spawn_lighting(commands: &mut Commands) {
    commands.spawn((
        DirectionalLight {
            color: Color::WHITE,
            shadows_enabled: false,
            ..default()
        },
        Transform::from_xyz(1.0, 1.0, 1.0).looking_at(Vec3::ZERO, Vec3::Y),
    ));

    commands.spawn((
        DirectionalLight {
            color: Color::srgb_u8(0x00, 0x22, 0x88),
            shadows_enabled: false,
            ..default()
        },
        Transform::from_xyz(-1.0, -1.0, -1.0).looking_at(Vec3::ZERO, Vec3::Y),
    ));
}

fn spawn_camera(commands: &mut Commands) {
    let start = Vec3::from_array(CAMERA_START);
    commands.spawn((
        Camera3d::default(),
        Projection::from(PerspectiveProjection {
            fov: CAMERA_FOV_DEGREES.to_radians(),
            near: CAMERA_NEAR,
            far: CAMERA_FAR,
            ..default()
        }),
        Transform::from_translation(start).looking_at(Vec3::ZERO, Vec3::Y),
        DistanceFog {
            color: Color::srgb(0.8, 0.8, 0.8),
            falloff: FogFalloff::Exponential {
                density: FOG_DENSITY,
            },
            ..default()
        },
    ));
}

#[derive(Component)]
struct FpsText;

fn spawn_fps_text(commands: &mut Commands) {
    commands.spawn((
        Text::new("FPS: "),
        TextFont {
            font_size: 16.0,
            ..default()
        },
        TextColor(Color::srgb(1.0, 0.0, 0.0)),
        Node {
            position_type: PositionType::Absolute,
            bottom: Val::Px(12.0),
            right: Val::Px(12.0),
            ..default()
        },
        FpsText,
    ));
}

fn fps_text_update_system(
    diagnostics: Res<DiagnosticsStore>,
    mut query: Query<&mut Text, With<FpsText>>,
) {
    for mut text in &mut query {
        if let Some(fps) = diagnostics.get(&FrameTimeDiagnosticsPlugin::FPS) {
            if let Some(value) = fps.smoothed() {
                text.0 = format!("FPS: {value:.1}");
            }
        }
    }
}
