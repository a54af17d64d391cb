use image::{Rgba, RgbaImage};

use super::*;

fn uniform_skin(color: [u8; 4]) -> SkinTexture {
    let pixels = RgbaImage::from_pixel(64, 64, Rgba(color));
    SkinTexture::new(pixels, AlphaChannel::Absent).unwrap()
}

fn patterned_skin() -> SkinTexture {
    let pixels = RgbaImage::from_fn(64, 64, |x, y| Rgba([x as u8 * 4, y as u8 * 4, 7, 255]));
    SkinTexture::new(pixels, AlphaChannel::Absent).unwrap()
}

fn uniform_cape(alpha: AlphaChannel) -> CapeTexture {
    let pixels = RgbaImage::from_pixel(64, 32, Rgba([30, 30, 120, 255]));
    CapeTexture::new(pixels, alpha).unwrap()
}

#[test]
fn uniform_steve_build() {
    let skin = uniform_skin([200, 40, 40, 255]);
    let rig = CharacterRig::build(Some(&skin), None, ModelVariant::Steve).unwrap();

    assert_eq!(rig.parts().len(), 14);
    assert!(!rig.has_cape());
    for part in rig.parts() {
        assert_eq!(part.placeholder_faces(), 0);
        let Some(geometry) = &part.geometry else {
            assert!(matches!(part.id, PartId::CapePivot | PartId::Cape));
            continue;
        };
        for (face, material) in geometry.faces.iter().enumerate() {
            match part.id.layer() {
                Layer::Base => assert_eq!(material.blend, SurfaceBlend::Opaque, "{:?}/{face}", part.id),
                Layer::Overlay => assert!(matches!(material.blend, SurfaceBlend::Blended { .. })),
            }
        }
    }
}

#[test]
fn missing_skin_is_fatal() {
    let err = CharacterRig::build(None, None, ModelVariant::Steve).unwrap_err();
    assert!(matches!(err, SkinError::SourceMissing));
}

#[test]
fn invalid_skin_is_rejected_before_any_build() {
    let pixels = RgbaImage::from_pixel(60, 60, Rgba([1, 2, 3, 255]));
    let err = SkinTexture::new(pixels, AlphaChannel::Absent).unwrap_err();
    assert!(matches!(
        err,
        SkinError::DimensionMismatch {
            width: 60,
            height: 60,
            kind: TextureKind::Skin
        }
    ));
}

#[test]
fn undersized_bitmap_degrades_every_face_to_a_placeholder() {
    // A bitmap too small for any atlas rectangle: every slice fails and
    // every face falls back to its layer's diagnostic color, but the rig
    // still assembles all 14 nodes.
    let pixels = RgbaImage::from_pixel(2, 2, Rgba([9, 9, 9, 255]));
    let skin = SkinTexture::raw(pixels, AlphaChannel::Absent, 1);
    let rig = CharacterRig::build(Some(&skin), None, ModelVariant::Steve).unwrap();

    assert_eq!(rig.parts().len(), 14);
    let mut placeholders = 0;
    for part in rig.parts() {
        if let Some(geometry) = &part.geometry {
            for material in &geometry.faces {
                assert!(material.is_placeholder(), "{:?}", part.id);
                placeholders += 1;
            }
        }
    }
    // 12 skin-fed boxes, 6 faces each; the pivot and the untextured cape
    // carry no materials.
    assert_eq!(placeholders, 72);
}

#[test]
fn builds_are_deterministic() {
    let skin = patterned_skin();
    let cape = uniform_cape(AlphaChannel::Present);
    let a = CharacterRig::build(Some(&skin), Some(&cape), ModelVariant::Alex).unwrap();
    let b = CharacterRig::build(Some(&skin), Some(&cape), ModelVariant::Alex).unwrap();
    assert_eq!(a, b);
}

#[test]
fn variant_switch_touches_only_the_arm_parts() {
    let skin = patterned_skin();
    let steve = CharacterRig::build(Some(&skin), None, ModelVariant::Steve).unwrap();
    let alex = CharacterRig::build(Some(&skin), None, ModelVariant::Alex).unwrap();

    let arm_parts = [
        PartId::RightArm,
        PartId::LeftArm,
        PartId::RightSleeve,
        PartId::LeftSleeve,
    ];
    for part in PartId::ALL {
        if arm_parts.contains(&part) {
            assert_ne!(steve.part(part), alex.part(part), "{part:?}");
            let s = steve.part(part).geometry.as_ref().unwrap();
            let a = alex.part(part).geometry.as_ref().unwrap();
            assert_eq!(s.size[0] - a.size[0], 1.0, "{part:?}");
        } else {
            assert_eq!(steve.part(part), alex.part(part), "{part:?}");
        }
    }
}

#[test]
fn base_part_slices_account_for_every_declared_pixel() {
    let skin = patterned_skin();
    for part in [PartId::Head, PartId::Body, PartId::RightArm, PartId::LeftLeg] {
        let regions = skin_regions(part, ModelVariant::Steve, skin.scale()).unwrap();
        let mut sliced_pixels = 0u64;
        for region in regions {
            let sub = slice(skin.pixels(), region).unwrap();
            assert!(sub.width() > 0 && sub.height() > 0);
            sliced_pixels += u64::from(sub.width()) * u64::from(sub.height());
        }
        let declared: u64 = regions.iter().map(|r| r.area()).sum();
        assert_eq!(sliced_pixels, declared, "{part:?}");
    }
}

#[test]
fn cape_transparency_drives_blend_mode() {
    let skin = uniform_skin([90, 120, 200, 255]);

    let transparent = uniform_cape(AlphaChannel::Present);
    let rig = CharacterRig::build(Some(&skin), Some(&transparent), ModelVariant::Steve).unwrap();
    assert!(rig.has_cape());
    let faces = &rig.part(PartId::Cape).geometry.as_ref().unwrap().faces;
    assert_eq!(
        faces[Face::Front.index()].blend,
        SurfaceBlend::Blended {
            opacity: 1.0,
            double_sided: true
        }
    );

    let opaque = uniform_cape(AlphaChannel::Absent);
    let rig = CharacterRig::build(Some(&skin), Some(&opaque), ModelVariant::Steve).unwrap();
    let faces = &rig.part(PartId::Cape).geometry.as_ref().unwrap().faces;
    assert_eq!(
        faces[Face::Front.index()].blend,
        SurfaceBlend::Blended {
            opacity: OVERLAY_OPACITY,
            double_sided: false
        }
    );
}

#[test]
fn cape_hangs_from_a_shoulder_pivot() {
    let skin = uniform_skin([10, 10, 10, 255]);
    let cape = uniform_cape(AlphaChannel::Present);
    let rig = CharacterRig::build(Some(&skin), Some(&cape), ModelVariant::Steve).unwrap();

    let pivot = rig.part(PartId::CapePivot);
    let cloth = rig.part(PartId::Cape);
    assert!(pivot.geometry.is_none());
    assert_eq!(cloth.parent, Some(PartId::CapePivot));
    // Pivot at shoulder height behind the body; cloth hanging below it.
    assert_eq!(pivot.offset, [0.0, 12.0, -2.0]);
    assert!(cloth.offset[1] < 0.0);
    // Realistic thickness, not a flat plane.
    assert!(cloth.geometry.as_ref().unwrap().size[2] > 0.0);
}

#[test]
fn legacy_skin_builds_without_placeholders() {
    let pixels = RgbaImage::from_fn(64, 32, |x, y| Rgba([x as u8, y as u8, 50, 255]));
    let skin = SkinTexture::new(pixels, AlphaChannel::Absent).unwrap();
    let rig = CharacterRig::build(Some(&skin), None, ModelVariant::Steve).unwrap();

    for part in rig.parts() {
        assert_eq!(part.placeholder_faces(), 0, "{:?}", part.id);
    }

    // The upgraded left arm shows the mirrored right arm content.
    let left = rig.part(PartId::LeftArm).geometry.as_ref().unwrap();
    let right = rig.part(PartId::RightArm).geometry.as_ref().unwrap();
    let (FaceImage::Sliced(left_front), FaceImage::Sliced(right_front)) = (
        &left.faces[Face::Front.index()].image,
        &right.faces[Face::Front.index()].image,
    ) else {
        panic!("expected sliced faces");
    };
    assert_eq!(left_front.dimensions(), right_front.dimensions());
    for y in 0..left_front.height() {
        for x in 0..left_front.width() {
            let mirrored_x = left_front.width() - 1 - x;
            assert_eq!(left_front.get_pixel(x, y), right_front.get_pixel(mirrored_x, y));
        }
    }
}

#[test]
fn hd_skins_slice_scaled_regions() {
    let pixels = RgbaImage::from_fn(128, 128, |x, y| Rgba([x as u8, y as u8, 3, 255]));
    let skin = SkinTexture::new(pixels, AlphaChannel::Absent).unwrap();
    assert_eq!(skin.scale(), 2);
    let rig = CharacterRig::build(Some(&skin), None, ModelVariant::Steve).unwrap();

    let head = rig.part(PartId::Head).geometry.as_ref().unwrap();
    let FaceImage::Sliced(front) = &head.faces[Face::Front.index()].image else {
        panic!("expected sliced face");
    };
    // 8px base face doubled.
    assert_eq!(front.dimensions(), (16, 16));
    // Box geometry stays in model units regardless of texture resolution.
    assert_eq!(head.size, [8.0, 8.0, 8.0]);
}
