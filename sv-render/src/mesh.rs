use bevy::prelude::*;
use bevy::render::mesh::Indices;
use bevy::render::mesh::PrimitiveTopology;
use bevy::render::render_asset::RenderAssetUsages;

use sv_skin::Face;

/// Builds the quad mesh for one face of a part box centered on its pivot.
///
/// Each face is its own mesh because each face carries its own material;
/// UVs span the full 0..1 of the face's sliced sub-image. Corners are laid
/// out so the texture strips wrap continuously around the box in atlas
/// order (front, right, back, left).
pub fn face_quad(size: [f32; 3], face: Face) -> Mesh {
    let [w, h, l] = size;
    let (hw, hh, hl) = (w / 2.0, h / 2.0, l / 2.0);

    // Corners as seen looking at the face from outside: TL, TR, BR, BL.
    let (verts, normal) = match face {
        Face::Front => (
            [[-hw, hh, hl], [hw, hh, hl], [hw, -hh, hl], [-hw, -hh, hl]],
            [0.0, 0.0, 1.0],
        ),
        Face::Right => (
            [[hw, hh, hl], [hw, hh, -hl], [hw, -hh, -hl], [hw, -hh, hl]],
            [1.0, 0.0, 0.0],
        ),
        Face::Back => (
            [[hw, hh, -hl], [-hw, hh, -hl], [-hw, -hh, -hl], [hw, -hh, -hl]],
            [0.0, 0.0, -1.0],
        ),
        Face::Left => (
            [[-hw, hh, -hl], [-hw, hh, hl], [-hw, -hh, hl], [-hw, -hh, -hl]],
            [-1.0, 0.0, 0.0],
        ),
        Face::Top => (
            [[-hw, hh, -hl], [hw, hh, -hl], [hw, hh, hl], [-hw, hh, hl]],
            [0.0, 1.0, 0.0],
        ),
        Face::Bottom => (
            [[-hw, -hh, hl], [hw, -hh, hl], [hw, -hh, -hl], [-hw, -hh, -hl]],
            [0.0, -1.0, 0.0],
        ),
    };

    let mut positions: Vec<[f32; 3]> = Vec::with_capacity(4);
    let mut normals: Vec<[f32; 3]> = Vec::with_capacity(4);
    let mut uvs: Vec<[f32; 2]> = Vec::with_capacity(4);
    let mut indices: Vec<u32> = Vec::with_capacity(6);
    push_quad(
        &mut positions,
        &mut normals,
        &mut uvs,
        &mut indices,
        verts,
        normal,
        [[0.0, 0.0], [1.0, 0.0], [1.0, 1.0], [0.0, 1.0]],
    );

    let mut mesh = Mesh::new(
        PrimitiveTopology::TriangleList,
        RenderAssetUsages::default(),
    );
    mesh.insert_attribute(Mesh::ATTRIBUTE_POSITION, positions);
    mesh.insert_attribute(Mesh::ATTRIBUTE_NORMAL, normals);
    mesh.insert_attribute(Mesh::ATTRIBUTE_UV_0, uvs);
    mesh.insert_indices(Indices::U32(indices));
    mesh
}

fn push_quad(
    positions: &mut Vec<[f32; 3]>,
    normals: &mut Vec<[f32; 3]>,
    uvs: &mut Vec<[f32; 2]>,
    indices: &mut Vec<u32>,
    mut verts: [[f32; 3]; 4],
    normal: [f32; 3],
    mut uv: [[f32; 2]; 4],
) {
    // Ensure both triangles are front-facing with respect to the normal.
    let a = Vec3::from_array(verts[0]);
    let b = Vec3::from_array(verts[1]);
    let c = Vec3::from_array(verts[2]);
    let actual = (b - a).cross(c - a);
    if actual.dot(Vec3::from_array(normal)) < 0.0 {
        verts = [verts[0], verts[3], verts[2], verts[1]];
        uv = [uv[0], uv[3], uv[2], uv[1]];
    }

    let base = positions.len() as u32;
    for i in 0..4 {
        positions.push(verts[i]);
        normals.push(normal);
        uvs.push(uv[i]);
    }
    indices.extend_from_slice(&[base, base + 1, base + 2, base, base + 2, base + 3]);
}
