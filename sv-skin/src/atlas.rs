//! Static texture-atlas layout: which pixel rectangle feeds each face of
//! each body part, per render layer and model variant.
//!
//! Pure lookup, no state. Whether a rectangle actually fits the supplied
//! bitmap is the slicer's problem, not the table's.

use crate::parts::PartId;
use crate::variant::ModelVariant;

/// Box faces, in the order materials are stored on a part.
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq)]
pub enum Face {
    Front,
    Right,
    Back,
    Left,
    Top,
    Bottom,
}

impl Face {
    pub const ALL: [Face; 6] = [
        Face::Front,
        Face::Right,
        Face::Back,
        Face::Left,
        Face::Top,
        Face::Bottom,
    ];

    pub const fn index(self) -> usize {
        match self {
            Face::Front => 0,
            Face::Right => 1,
            Face::Back => 2,
            Face::Left => 3,
            Face::Top => 4,
            Face::Bottom => 5,
        }
    }
}

/// Base skin vs the larger outer overlay (hat, jacket, sleeves, pants).
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq)]
pub enum Layer {
    Base,
    Overlay,
}

/// A pixel rectangle within a source texture, plus whether the sliced
/// sub-image must be rotated 180 degrees before use.
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq)]
pub struct Region {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
    pub rotated: bool,
}

impl Region {
    pub const fn area(self) -> u64 {
        self.width as u64 * self.height as u64
    }
}

/// Derives the six face rectangles of one textured box from the front face's
/// top-left origin `(bx, by)` and the box's pixel dimensions.
///
/// Every box in the skin and cape atlases uses the same wrap-around layout:
/// side strips flank the front face, the back face sits one strip further,
/// and the top/bottom pair rides above the front:
///
/// ```text
///                 top(bx, by-d)    bottom(bx+w, by-d)
/// left(bx-d, by)  front(bx, by)    right(bx+w, by)    back(bx+w+d, by)
/// ```
///
/// The right and back faces start exactly `w` and `w+d` past the front
/// origin. For arms, `w` is the variant's arm width while `d` stays 4, so
/// those offsets are derived per variant, never hard-coded.
fn box_regions(
    front_x: u32,
    front_y: u32,
    w: u32,
    h: u32,
    d: u32,
    rotate_bottom: bool,
    scale: u32,
) -> [Region; 6] {
    let r = |x: u32, y: u32, width: u32, height: u32, rotated: bool| Region {
        x: x * scale,
        y: y * scale,
        width: width * scale,
        height: height * scale,
        rotated,
    };
    [
        r(front_x, front_y, w, h, false),
        r(front_x + w, front_y, d, h, false),
        r(front_x + w + d, front_y, w, h, false),
        r(front_x - d, front_y, d, h, false),
        r(front_x, front_y - d, w, d, false),
        r(front_x + w, front_y - d, w, d, rotate_bottom),
    ]
}

/// Face rectangles for one skin-fed part on a square (post-upgrade) skin of
/// the given integer scale. `None` for the cape pair, which slices from the
/// cape texture instead.
///
/// Bottom faces of the head/body family are stored upside down in the atlas
/// and flagged for rotation; limb bottoms are not.
pub fn skin_regions(part: PartId, variant: ModelVariant, scale: u32) -> Option<[Region; 6]> {
    let aw = variant.arm_width();
    let regions = match part {
        PartId::Head => box_regions(8, 8, 8, 8, 8, true, scale),
        PartId::Hat => box_regions(40, 8, 8, 8, 8, true, scale),
        PartId::Body => box_regions(20, 20, 8, 12, 4, true, scale),
        PartId::Jacket => box_regions(20, 36, 8, 12, 4, true, scale),
        PartId::RightArm => box_regions(44, 20, aw, 12, 4, false, scale),
        PartId::RightSleeve => box_regions(44, 36, aw, 12, 4, false, scale),
        PartId::LeftArm => box_regions(36, 52, aw, 12, 4, false, scale),
        PartId::LeftSleeve => box_regions(52, 52, aw, 12, 4, false, scale),
        PartId::RightLeg => box_regions(4, 20, 4, 12, 4, false, scale),
        PartId::RightPants => box_regions(4, 36, 4, 12, 4, false, scale),
        PartId::LeftLeg => box_regions(20, 52, 4, 12, 4, false, scale),
        PartId::LeftPants => box_regions(4, 52, 4, 12, 4, false, scale),
        PartId::CapePivot | PartId::Cape => return None,
    };
    Some(regions)
}

/// Face rectangles for the 10x16x1 cape cloth on a cape texture of the given
/// scale.
pub fn cape_regions(scale: u32) -> [Region; 6] {
    box_regions(1, 1, 10, 16, 1, false, scale)
}
