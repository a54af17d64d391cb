use bevy::prelude::*;

#[derive(Component)]
pub struct ViewerCamera;

/// Minimal hosting scene: a ground plane, lights for it (the character
/// itself renders unlit), and a camera framing the full figure.
pub fn setup_scene(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    commands.spawn((
        Name::new("ground"),
        Mesh3d(meshes.add(Mesh::from(Plane3d::default()))),
        MeshMaterial3d(materials.add(StandardMaterial {
            base_color: Color::srgb(0.21, 0.21, 0.24),
            perceptual_roughness: 1.0,
            ..Default::default()
        })),
        Transform::from_scale(Vec3::splat(8.0)),
    ));

    commands.spawn((
        DirectionalLight {
            shadows_enabled: true,
            illuminance: 18_000.0,
            ..Default::default()
        },
        Transform::from_xyz(4.0, 8.0, 4.0).looking_at(Vec3::ZERO, Vec3::Y),
    ));
    commands.insert_resource(AmbientLight {
        color: Color::srgb(0.5, 0.5, 0.55),
        brightness: 0.4,
        affects_lightmapped_meshes: true,
    });

    commands.spawn((
        ViewerCamera,
        Camera3d::default(),
        Transform::from_xyz(0.0, 1.5, 3.6).looking_at(Vec3::new(0.0, 1.0, 0.0), Vec3::Y),
    ));
}
