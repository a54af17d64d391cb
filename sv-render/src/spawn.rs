use bevy::prelude::*;
use tracing::{debug, warn};

use sv_skin::{CharacterRig, Face, PartId, SkinError};

use crate::material::face_standard_material;
use crate::mesh::face_quad;
use crate::{CharacterSources, OverlayVisibility};

/// One model pixel in world units.
const MODEL_UNIT: f32 = 1.0 / 16.0;
/// The rig's local origin is the hip line; lift by the leg length so the
/// feet rest on the ground plane.
const FEET_LIFT: f32 = 12.0;

#[derive(Component)]
pub struct CharacterRoot;

#[derive(Component, Debug, Clone, Copy)]
pub struct RigPart(pub PartId);

/// Marks the shoulder pivot the sway animation rotates.
#[derive(Component)]
pub struct CapePivotNode;

/// Tears down the previous rig and spawns the new one whenever the sources
/// change. The swap happens within one frame, so the displayed character is
/// never a mix of two texture generations. A build with no skin keeps
/// whatever was displayed before.
pub fn rebuild_character_system(
    mut commands: Commands,
    mut sources: ResMut<CharacterSources>,
    visibility: Res<OverlayVisibility>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut images: ResMut<Assets<Image>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    existing: Query<Entity, With<CharacterRoot>>,
) {
    if !sources.take_dirty() {
        return;
    }
    let rig = match CharacterRig::build(sources.skin(), sources.cape(), sources.variant()) {
        Ok(rig) => rig,
        Err(SkinError::SourceMissing) => {
            debug!("no skin bitmap yet, keeping current character");
            return;
        }
        Err(err) => {
            warn!("character rebuild failed: {err}");
            return;
        }
    };
    for entity in existing.iter() {
        commands.entity(entity).despawn();
    }
    spawn_rig(
        &mut commands,
        &mut meshes,
        &mut images,
        &mut materials,
        &rig,
        &visibility,
    );
}

pub fn spawn_rig(
    commands: &mut Commands,
    meshes: &mut Assets<Mesh>,
    images: &mut Assets<Image>,
    materials: &mut Assets<StandardMaterial>,
    rig: &CharacterRig,
    visibility: &OverlayVisibility,
) -> Entity {
    let root = commands
        .spawn((
            CharacterRoot,
            Name::new("character"),
            Transform::from_translation(Vec3::new(0.0, FEET_LIFT * MODEL_UNIT, 0.0))
                .with_scale(Vec3::splat(MODEL_UNIT)),
            GlobalTransform::default(),
            Visibility::Visible,
            InheritedVisibility::default(),
            ViewVisibility::default(),
        ))
        .id();

    // First spawn every part pivot, then attach children; the cape hangs
    // from its pivot rather than the root.
    let mut part_entities = [Entity::PLACEHOLDER; PartId::ALL.len()];
    for part in rig.parts() {
        let entity = commands
            .spawn((
                RigPart(part.id),
                Name::new(part.id.name()),
                Transform::from_translation(Vec3::from_array(part.offset)),
                GlobalTransform::default(),
                part_visibility(part.id, visibility),
                InheritedVisibility::default(),
                ViewVisibility::default(),
            ))
            .id();
        if part.id == PartId::CapePivot {
            commands.entity(entity).insert(CapePivotNode);
        }
        part_entities[part.id.index()] = entity;
    }

    for part in rig.parts() {
        let entity = part_entities[part.id.index()];
        let parent = part
            .parent
            .map(|p| part_entities[p.index()])
            .unwrap_or(root);
        commands.entity(parent).add_child(entity);

        let Some(geometry) = &part.geometry else {
            continue;
        };
        for face in Face::ALL {
            let mesh = meshes.add(face_quad(geometry.size, face));
            let material =
                materials.add(face_standard_material(&geometry.faces[face.index()], part, images));
            let face_entity = commands
                .spawn((
                    Mesh3d(mesh),
                    MeshMaterial3d(material),
                    Transform::IDENTITY,
                    GlobalTransform::default(),
                    Visibility::Inherited,
                    InheritedVisibility::default(),
                    ViewVisibility::default(),
                ))
                .id();
            commands.entity(entity).add_child(face_entity);
        }
    }

    root
}

/// Applies the overlay/cape toggles to the live entity tree; flipping a
/// toggle never rebuilds geometry.
pub fn apply_overlay_visibility(
    visibility: Res<OverlayVisibility>,
    mut query: Query<(&RigPart, &mut Visibility)>,
) {
    if !visibility.is_changed() {
        return;
    }
    for (part, mut vis) in query.iter_mut() {
        *vis = part_visibility(part.0, &visibility);
    }
}

fn part_visibility(part: PartId, visibility: &OverlayVisibility) -> Visibility {
    let shown = match part {
        PartId::Cape | PartId::CapePivot => visibility.cape,
        PartId::Hat
        | PartId::Jacket
        | PartId::RightSleeve
        | PartId::LeftSleeve
        | PartId::RightPants
        | PartId::LeftPants => visibility.skin_overlays,
        _ => true,
    };
    if shown {
        Visibility::Visible
    } else {
        Visibility::Hidden
    }
}
