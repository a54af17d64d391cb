use bevy::prelude::*;

use sv_skin::{CapeSway, sway_angles};

use crate::spawn::{CapePivotNode, CharacterRoot};

/// Turntable rate, radians per second.
const SPIN_RATE: f32 = 0.6;

#[derive(Resource)]
pub struct AnimationSettings {
    pub spin: bool,
    pub sway: bool,
}

impl Default for AnimationSettings {
    fn default() -> Self {
        Self {
            spin: false,
            sway: true,
        }
    }
}

pub fn turntable_spin_system(
    time: Res<Time>,
    settings: Res<AnimationSettings>,
    mut query: Query<&mut Transform, With<CharacterRoot>>,
) {
    if !settings.spin {
        return;
    }
    for mut transform in query.iter_mut() {
        transform.rotate_y(SPIN_RATE * time.delta_secs());
    }
}

/// Advances the cape's idle sway. Disabling stops the clock and leaves the
/// pivot rotated wherever it was: the cape rests in place instead of
/// snapping back to a default pose.
pub fn cape_sway_system(
    time: Res<Time>,
    settings: Res<AnimationSettings>,
    mut clock: Local<f32>,
    mut query: Query<&mut Transform, With<CapePivotNode>>,
) {
    if !settings.sway {
        return;
    }
    *clock += time.delta_secs();
    let (pitch, roll) = sway_angles(&CapeSway::default(), *clock);
    for mut transform in query.iter_mut() {
        transform.rotation = Quat::from_euler(EulerRot::XYZ, pitch, 0.0, roll);
    }
}
