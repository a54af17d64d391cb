//! The 14 rig parts: identities, box dimensions, attachment offsets, and
//! per-part assembly from a sliced skin.

use crate::atlas::{self, Layer};
use crate::buffer::SkinTexture;
use crate::layers::render_policy;
use crate::material::{FaceMaterial, face_material};
use crate::slice::slice;
use crate::variant::ModelVariant;

/// Rig node identities, in rig order. Doubles as the typed index into the
/// rig's part collection; nothing in the pipeline looks parts up by name.
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq)]
pub enum PartId {
    Head,
    Hat,
    Body,
    Jacket,
    RightArm,
    LeftArm,
    RightSleeve,
    LeftSleeve,
    RightLeg,
    LeftLeg,
    RightPants,
    LeftPants,
    CapePivot,
    Cape,
}

impl PartId {
    pub const ALL: [PartId; 14] = [
        PartId::Head,
        PartId::Hat,
        PartId::Body,
        PartId::Jacket,
        PartId::RightArm,
        PartId::LeftArm,
        PartId::RightSleeve,
        PartId::LeftSleeve,
        PartId::RightLeg,
        PartId::LeftLeg,
        PartId::RightPants,
        PartId::LeftPants,
        PartId::CapePivot,
        PartId::Cape,
    ];

    pub const fn index(self) -> usize {
        match self {
            PartId::Head => 0,
            PartId::Hat => 1,
            PartId::Body => 2,
            PartId::Jacket => 3,
            PartId::RightArm => 4,
            PartId::LeftArm => 5,
            PartId::RightSleeve => 6,
            PartId::LeftSleeve => 7,
            PartId::RightLeg => 8,
            PartId::LeftLeg => 9,
            PartId::RightPants => 10,
            PartId::LeftPants => 11,
            PartId::CapePivot => 12,
            PartId::Cape => 13,
        }
    }

    /// Blend/visibility layer. The cape counts as base here: it toggles
    /// independently of the hat/jacket/sleeves group even though its faces
    /// blend like an overlay's.
    pub const fn layer(self) -> Layer {
        match self {
            PartId::Hat
            | PartId::Jacket
            | PartId::RightSleeve
            | PartId::LeftSleeve
            | PartId::RightPants
            | PartId::LeftPants => Layer::Overlay,
            _ => Layer::Base,
        }
    }

    pub const fn is_limb(self) -> bool {
        matches!(
            self,
            PartId::RightArm
                | PartId::LeftArm
                | PartId::RightSleeve
                | PartId::LeftSleeve
                | PartId::RightLeg
                | PartId::LeftLeg
                | PartId::RightPants
                | PartId::LeftPants
        )
    }

    /// Attachment parent; `None` hangs directly under the rig root.
    pub const fn parent(self) -> Option<PartId> {
        match self {
            PartId::Cape => Some(PartId::CapePivot),
            _ => None,
        }
    }

    /// Debug label for host scene-graph nodes. Identity lookups go through
    /// [`PartId::index`], never through this string.
    pub const fn name(self) -> &'static str {
        match self {
            PartId::Head => "head",
            PartId::Hat => "hat",
            PartId::Body => "body",
            PartId::Jacket => "jacket",
            PartId::RightArm => "right_arm",
            PartId::LeftArm => "left_arm",
            PartId::RightSleeve => "right_sleeve",
            PartId::LeftSleeve => "left_sleeve",
            PartId::RightLeg => "right_leg",
            PartId::LeftLeg => "left_leg",
            PartId::RightPants => "right_pants",
            PartId::LeftPants => "left_pants",
            PartId::CapePivot => "cape_pivot",
            PartId::Cape => "cape",
        }
    }
}

/// Box mesh description with one material per face, in [`Face::ALL`] order.
///
/// [`Face::ALL`]: crate::Face::ALL
#[derive(Clone, Debug, PartialEq)]
pub struct PartBox {
    pub size: [f32; 3],
    pub faces: [FaceMaterial; 6],
}

/// One node of the character rig.
#[derive(Clone, Debug, PartialEq)]
pub struct PartNode {
    pub id: PartId,
    pub parent: Option<PartId>,
    /// Local offset from the parent, in model units.
    pub offset: [f32; 3],
    /// `None` for pure attachment pivots and for a cape without a texture.
    pub geometry: Option<PartBox>,
    pub render_order: i32,
    pub depth_bias: f32,
}

impl PartNode {
    pub fn placeholder_faces(&self) -> usize {
        self.geometry
            .as_ref()
            .map_or(0, |b| b.faces.iter().filter(|f| f.is_placeholder()).count())
    }
}

/// Box dimensions in model units. Overlay boxes enclose their base part by
/// half a unit per axis. `None` only for the cape pivot, which has no box.
pub fn part_size(part: PartId, variant: ModelVariant) -> Option<[f32; 3]> {
    let dims = variant.dims();
    Some(match part {
        PartId::Head => [8.0, 8.0, 8.0],
        PartId::Hat => [9.0, 9.0, 9.0],
        PartId::Body => [8.0, 12.0, 4.0],
        PartId::Jacket => [8.5, 12.5, 4.5],
        PartId::RightArm | PartId::LeftArm => dims.arm_size,
        PartId::RightSleeve | PartId::LeftSleeve => dims.sleeve_size,
        PartId::RightLeg | PartId::LeftLeg => [4.0, 12.0, 4.0],
        PartId::RightPants | PartId::LeftPants => [4.5, 12.5, 4.5],
        PartId::Cape => [10.0, 16.0, 1.0],
        PartId::CapePivot => return None,
    })
}

/// Attachment offsets in model units, measured from the rig's hip-line
/// origin (the cape cloth hangs from the shoulder-level pivot instead).
pub fn part_offset(part: PartId, variant: ModelVariant) -> [f32; 3] {
    let dims = variant.dims();
    match part {
        PartId::Head | PartId::Hat => [0.0, 16.0, 0.0],
        PartId::Body | PartId::Jacket => [0.0, 6.0, 0.0],
        PartId::RightArm | PartId::RightSleeve => dims.right_arm_offset,
        PartId::LeftArm | PartId::LeftSleeve => dims.left_arm_offset,
        PartId::RightLeg | PartId::RightPants => [-2.0, -6.0, 0.0],
        PartId::LeftLeg | PartId::LeftPants => [2.0, -6.0, 0.0],
        PartId::CapePivot => [0.0, 12.0, -2.0],
        PartId::Cape => [0.0, -8.0, -0.5],
    }
}

/// Assembles one of the 12 skin-fed parts. Individual slice failures
/// degrade to placeholder faces; the part itself always assembles. `None`
/// for the cape pair, which is not fed by the skin texture.
pub(crate) fn build_skin_part(
    part: PartId,
    skin: &SkinTexture,
    variant: ModelVariant,
) -> Option<PartNode> {
    let regions = atlas::skin_regions(part, variant, skin.scale())?;
    let size = part_size(part, variant)?;
    let layer = part.layer();
    let faces = regions.map(|region| face_material(slice(skin.pixels(), region), layer, skin.alpha()));
    let policy = render_policy(part);
    Some(PartNode {
        id: part,
        parent: part.parent(),
        offset: part_offset(part, variant),
        geometry: Some(PartBox { size, faces }),
        render_order: policy.order,
        depth_bias: policy.bias,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn indices_match_rig_order() {
        for (i, part) in PartId::ALL.iter().enumerate() {
            assert_eq!(part.index(), i);
        }
    }

    #[test]
    fn overlay_boxes_enclose_their_base_part() {
        for variant in [ModelVariant::Steve, ModelVariant::Alex] {
            for (base, overlay) in [
                (PartId::Head, PartId::Hat),
                (PartId::Body, PartId::Jacket),
                (PartId::RightArm, PartId::RightSleeve),
                (PartId::RightLeg, PartId::RightPants),
            ] {
                let inner = part_size(base, variant).unwrap();
                let outer = part_size(overlay, variant).unwrap();
                for axis in 0..3 {
                    assert!(outer[axis] > inner[axis], "{overlay:?} axis {axis}");
                }
                assert_eq!(part_offset(base, variant), part_offset(overlay, variant));
            }
        }
    }

    #[test]
    fn torso_column_offsets() {
        let v = ModelVariant::Steve;
        assert_eq!(part_offset(PartId::Head, v), [0.0, 16.0, 0.0]);
        assert_eq!(part_offset(PartId::Body, v), [0.0, 6.0, 0.0]);
        assert_eq!(part_offset(PartId::RightLeg, v), [-2.0, -6.0, 0.0]);
        assert_eq!(part_offset(PartId::LeftLeg, v), [2.0, -6.0, 0.0]);
        assert_eq!(part_offset(PartId::CapePivot, v), [0.0, 12.0, -2.0]);
    }

    #[test]
    fn cape_pivot_has_no_box() {
        assert!(part_size(PartId::CapePivot, ModelVariant::Steve).is_none());
        assert_eq!(part_size(PartId::Cape, ModelVariant::Steve), Some([10.0, 16.0, 1.0]));
    }
}
