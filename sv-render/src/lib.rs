use bevy::prelude::*;

use sv_skin::{CapeTexture, ModelVariant, SkinTexture};

mod animate;
mod material;
mod mesh;
mod scene;
mod spawn;

pub use animate::AnimationSettings;
pub use scene::ViewerCamera;
pub use spawn::{CapePivotNode, CharacterRoot, RigPart};

/// The bitmaps and variant the displayed character is built from. Mutations
/// mark the rig dirty; one system rebuilds the whole entity tree on the next
/// frame, so the displayed rig never mixes two texture generations.
#[derive(Resource, Default)]
pub struct CharacterSources {
    skin: Option<SkinTexture>,
    cape: Option<CapeTexture>,
    variant: ModelVariant,
    dirty: bool,
}

impl CharacterSources {
    pub fn set_skin(&mut self, skin: SkinTexture) {
        self.skin = Some(skin);
        self.dirty = true;
    }

    pub fn set_cape(&mut self, cape: Option<CapeTexture>) {
        self.cape = cape;
        self.dirty = true;
    }

    pub fn set_variant(&mut self, variant: ModelVariant) {
        if self.variant != variant {
            self.variant = variant;
            self.dirty = true;
        }
    }

    pub fn skin(&self) -> Option<&SkinTexture> {
        self.skin.as_ref()
    }

    pub fn cape(&self) -> Option<&CapeTexture> {
        self.cape.as_ref()
    }

    pub fn variant(&self) -> ModelVariant {
        self.variant
    }

    fn take_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }
}

/// Visibility toggles applied to spawned parts without rebuilding. The
/// hat/jacket/sleeves group toggles together; the cape independently.
#[derive(Resource)]
pub struct OverlayVisibility {
    pub skin_overlays: bool,
    pub cape: bool,
}

impl Default for OverlayVisibility {
    fn default() -> Self {
        Self {
            skin_overlays: true,
            cape: true,
        }
    }
}

pub struct SkinRenderPlugin;

impl Plugin for SkinRenderPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<CharacterSources>()
            .init_resource::<OverlayVisibility>()
            .init_resource::<AnimationSettings>()
            .add_systems(Startup, scene::setup_scene)
            .add_systems(
                Update,
                (
                    spawn::rebuild_character_system,
                    spawn::apply_overlay_visibility.after(spawn::rebuild_character_system),
                    animate::turntable_spin_system,
                    animate::cape_sway_system,
                ),
            );
    }
}
