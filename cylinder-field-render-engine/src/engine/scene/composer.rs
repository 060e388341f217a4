use bevy::prelude::*;
use constants::layout::CYLINDER_RADIUS;
use constants::render_settings::{DEFAULT_CYLINDER_COUNT, DEFAULT_RING_COLOR_VALUE};
use cylinder_field_core::params::GenerationParams;
use cylinder_field_core::scene::generate_scene;

use crate::engine::mesh::mesh_from_data;

/// Current UI-held generation parameters.
#[derive(Resource)]
pub struct SceneSettings {
    pub cylinder_count: i32,
    pub ring_color_value: i32,
    pub include_ring: bool,
}

impl Default for SceneSettings {
    fn default() -> Self {
        Self {
            cylinder_count: DEFAULT_CYLINDER_COUNT,
            ring_color_value: DEFAULT_RING_COLOR_VALUE,
            include_ring: true,
        }
    }
}

impl SceneSettings {
    pub fn as_params(&self) -> GenerationParams {
        GenerationParams {
            cylinder_count: self.cylinder_count,
            ring_color_value: self.ring_color_value,
            include_ring: self.include_ring,
        }
    }
}

/// Marks every entity spawned by a generation pass.
#[derive(Component)]
pub struct Generated;

/// Fired by the UI (or the keyboard shortcut) to rebuild the scene.
#[derive(Event, Default)]
pub struct RegenerateEvent;

/// Tracks whether the initial scene build has happened.
#[derive(Resource, Default)]
pub struct SceneBuilt {
    pub built: bool,
}

/// Rebuild the generated scene on startup and on demand.
///
/// Generation runs synchronously inside the frame; the previous pass's
/// entities are despawned only after the new description exists, so an
/// invalid parameter or a degenerate ring keeps the last good scene.
pub fn regenerate_scene_system(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    mut events: EventReader<RegenerateEvent>,
    settings: Res<SceneSettings>,
    mut built: ResMut<SceneBuilt>,
    previous: Query<Entity, With<Generated>>,
) {
    let requested = !events.is_empty();
    events.clear();
    if built.built && !requested {
        return;
    }

    let params = settings.as_params();
    let mut rng = rand::rng();
    let scene = match generate_scene(&params, &mut rng) {
        Ok(scene) => scene,
        Err(error) => {
            warn!("regeneration failed, keeping previous scene: {error}");
            built.built = true;
            return;
        }
    };

    for entity in &previous {
        commands.entity(entity).despawn();
    }

    for spec in &scene.cylinders {
        let [red, green, blue] = spec.color.to_f32();
        commands.spawn((
            Mesh3d(meshes.add(Cylinder::new(CYLINDER_RADIUS, spec.extrusion_length()))),
            MeshMaterial3d(materials.add(StandardMaterial {
                base_color: Color::srgb(red, green, blue),
                perceptual_roughness: 1.0,
                ..default()
            })),
            // World placement was baked during generation; nothing
            // recomputes it per frame.
            Transform::from_translation(Vec3::from_array(spec.position)),
            Generated,
        ));
    }

    if let Some(ring) = &scene.ring {
        let [red, green, blue] = ring.spec.color.to_f32();
        commands.spawn((
            Mesh3d(meshes.add(mesh_from_data(&ring.mesh))),
            MeshMaterial3d(materials.add(StandardMaterial {
                base_color: Color::srgb(red, green, blue),
                perceptual_roughness: 1.0,
                ..default()
            })),
            Transform::from_translation(Vec3::from_array(ring.position)),
            Generated,
        ));
    }

    if !built.built {
        built.built = true;
        info!(
            "initial scene: {} cylinders on a {}-wide grid",
            scene.cylinders.len(),
            scene.plan.side_length
        );
    } else {
        info!(
            "scene regenerated: {} cylinders, ring {}",
            scene.cylinders.len(),
            if scene.ring.is_some() { "on" } else { "off" }
        );
    }
}
