//! Fixed draw-order and depth-bias policy for composing the base and
//! overlay layers without z-fighting.

use crate::parts::PartId;

/// Draw priority and depth nudge for one rig node.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RenderPolicy {
    /// Explicit draw sequence; higher draws later, visually in front.
    pub order: i32,
    /// Signed view-depth nudge; more negative pulls toward the viewer.
    pub bias: f32,
}

pub const BASE_TORSO: RenderPolicy = RenderPolicy { order: 100, bias: 0.0 };
/// Limbs draw just after the torso to resolve the shoulder overlap.
pub const BASE_LIMB: RenderPolicy = RenderPolicy { order: 105, bias: -0.001 };
pub const OVERLAY_TORSO: RenderPolicy = RenderPolicy { order: 200, bias: -0.002 };
pub const OVERLAY_LIMB: RenderPolicy = RenderPolicy { order: 210, bias: -0.003 };

/// The whole layering policy in one table. Fixed and camera-independent:
/// it resolves the known base/overlay overlap pairs of this rig, not
/// general visibility. The cape pair shares the base torso values; the
/// cloth never occupies another part's depth range.
pub const fn render_policy(part: PartId) -> RenderPolicy {
    match part {
        PartId::Head | PartId::Body | PartId::CapePivot | PartId::Cape => BASE_TORSO,
        PartId::RightArm | PartId::LeftArm | PartId::RightLeg | PartId::LeftLeg => BASE_LIMB,
        PartId::Hat | PartId::Jacket => OVERLAY_TORSO,
        PartId::RightSleeve | PartId::LeftSleeve | PartId::RightPants | PartId::LeftPants => {
            OVERLAY_LIMB
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn overlays_always_draw_after_their_base_part() {
        let pairs = [
            (PartId::Head, PartId::Hat),
            (PartId::Body, PartId::Jacket),
            (PartId::RightArm, PartId::RightSleeve),
            (PartId::LeftArm, PartId::LeftSleeve),
            (PartId::RightLeg, PartId::RightPants),
            (PartId::LeftLeg, PartId::LeftPants),
        ];
        for (base, overlay) in pairs {
            assert!(render_policy(overlay).order > render_policy(base).order);
            assert!(render_policy(overlay).bias < render_policy(base).bias);
        }
    }

    #[test]
    fn policy_constants() {
        assert_eq!(render_policy(PartId::Head), RenderPolicy { order: 100, bias: 0.0 });
        assert_eq!(render_policy(PartId::LeftLeg), RenderPolicy { order: 105, bias: -0.001 });
        assert_eq!(render_policy(PartId::Jacket), RenderPolicy { order: 200, bias: -0.002 });
        assert_eq!(render_policy(PartId::RightPants), RenderPolicy { order: 210, bias: -0.003 });
    }
}
