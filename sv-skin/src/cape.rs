//! Cape attachment and idle sway.

use crate::atlas::{self, Layer};
use crate::buffer::CapeTexture;
use crate::layers::render_policy;
use crate::material::face_material;
use crate::parts::{PartBox, PartId, PartNode, part_offset, part_size};
use crate::slice::slice;
use crate::variant::ModelVariant;

/// Shoulder-level attachment node the cape cloth swings from. Keeping the
/// pivot separate from the cloth box means sway rotates around the
/// shoulders, not the cloth's center.
pub(crate) fn cape_pivot_node(variant: ModelVariant) -> PartNode {
    let policy = render_policy(PartId::CapePivot);
    PartNode {
        id: PartId::CapePivot,
        parent: None,
        offset: part_offset(PartId::CapePivot, variant),
        geometry: None,
        render_order: policy.order,
        depth_bias: policy.bias,
    }
}

/// Cape cloth, hanging below and behind the pivot. Without a valid texture
/// the node still exists, keeping rig indices stable, but carries no
/// geometry. Cape faces blend like overlay faces: detached cloth is seen
/// from both sides whenever it carries transparency.
pub(crate) fn cape_node(cape: Option<&CapeTexture>, variant: ModelVariant) -> PartNode {
    let policy = render_policy(PartId::Cape);
    let geometry = cape.and_then(|cape| {
        let size = part_size(PartId::Cape, variant)?;
        let faces = atlas::cape_regions(cape.scale())
            .map(|region| face_material(slice(cape.pixels(), region), Layer::Overlay, cape.alpha()));
        Some(PartBox { size, faces })
    });
    PartNode {
        id: PartId::Cape,
        parent: PartId::Cape.parent(),
        offset: part_offset(PartId::Cape, variant),
        geometry,
        render_order: policy.order,
        depth_bias: policy.bias,
    }
}

/// Parameters of the cape's idle sway: a looping two-axis rotation
/// oscillation with eased turnarounds.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CapeSway {
    pub period_secs: f32,
    /// Resting backward tilt about the pivot's x axis, radians.
    pub base_pitch: f32,
    pub pitch_amplitude: f32,
    pub roll_amplitude: f32,
}

impl Default for CapeSway {
    fn default() -> Self {
        Self {
            period_secs: 5.0,
            base_pitch: 0.18,
            pitch_amplitude: 0.14,
            roll_amplitude: 0.05,
        }
    }
}

/// Pivot rotation (pitch, roll) at `t` seconds into the loop.
///
/// The oscillation is a triangle wave pushed through smoothstep, so angular
/// velocity reaches zero at each turnaround. The host samples this every
/// frame while sway is enabled and simply stops sampling to disable it;
/// the cape then rests wherever it was, with no snap to a default pose.
pub fn sway_angles(sway: &CapeSway, t: f32) -> (f32, f32) {
    let phase = (t / sway.period_secs).rem_euclid(1.0);
    let tri = if phase < 0.5 {
        phase * 2.0
    } else {
        2.0 - phase * 2.0
    };
    let eased = tri * tri * (3.0 - 2.0 * tri);
    let swing = eased * 2.0 - 1.0;
    (
        sway.base_pitch + sway.pitch_amplitude * swing,
        sway.roll_amplitude * swing,
    )
}
