use bevy::image::{ImageAddressMode, ImageSampler, ImageSamplerDescriptor};
use bevy::prelude::*;
use bevy::render::render_asset::RenderAssetUsages;
use bevy::render::render_resource::{Extent3d, TextureDimension, TextureFormat};

use sv_skin::{FaceImage, FaceMaterial, PartNode, SurfaceBlend};

/// Converts a sliced face image (or its placeholder color) into a GPU
/// texture with the sampling the atlas requires: nearest-neighbor filtering
/// and clamp-to-edge wrapping on every axis.
pub fn face_image(face: &FaceImage) -> Image {
    let mut image = match face {
        FaceImage::Sliced(buffer) => {
            let mut image = Image::new_fill(
                Extent3d {
                    width: buffer.width(),
                    height: buffer.height(),
                    depth_or_array_layers: 1,
                },
                TextureDimension::D2,
                &[0, 0, 0, 0],
                TextureFormat::Rgba8UnormSrgb,
                RenderAssetUsages::default(),
            );
            image.data = Some(buffer.as_raw().clone());
            image
        }
        FaceImage::Placeholder(color) => Image::new_fill(
            Extent3d {
                width: 1,
                height: 1,
                depth_or_array_layers: 1,
            },
            TextureDimension::D2,
            &color.0,
            TextureFormat::Rgba8UnormSrgb,
            RenderAssetUsages::default(),
        ),
    };

    let mut sampler = ImageSamplerDescriptor::nearest();
    sampler.address_mode_u = ImageAddressMode::ClampToEdge;
    sampler.address_mode_v = ImageAddressMode::ClampToEdge;
    sampler.address_mode_w = ImageAddressMode::ClampToEdge;
    image.sampler = ImageSampler::Descriptor(sampler);
    image
}

/// Builds the `StandardMaterial` for one face of one rig node.
pub fn face_standard_material(
    face: &FaceMaterial,
    node: &PartNode,
    images: &mut Assets<Image>,
) -> StandardMaterial {
    let texture = images.add(face_image(&face.image));
    let mut material = StandardMaterial {
        base_color: Color::WHITE,
        base_color_texture: Some(texture),
        unlit: true,
        perceptual_roughness: 1.0,
        metallic: 0.0,
        depth_bias: depth_bias_value(node),
        ..Default::default()
    };
    match face.blend {
        SurfaceBlend::Opaque => {
            material.alpha_mode = AlphaMode::Opaque;
        }
        SurfaceBlend::Blended {
            opacity,
            double_sided,
        } => {
            material.alpha_mode = AlphaMode::Blend;
            material.base_color = Color::srgba(1.0, 1.0, 1.0, opacity);
            material.double_sided = double_sided;
            if double_sided {
                material.cull_mode = None;
            }
        }
    }
    material
}

/// Bevy's 3D passes carry no explicit draw-order integer, so both layering
/// policy axes fold into the material depth bias: the order dominates, the
/// per-layer nudge refines within an order band.
pub fn depth_bias_value(node: &PartNode) -> f32 {
    node.render_order as f32 + node.depth_bias * 1000.0
}
