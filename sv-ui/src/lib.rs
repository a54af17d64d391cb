use std::path::PathBuf;

use bevy::prelude::*;
use bevy_egui::{
    EguiContexts, EguiPlugin, EguiPrimaryContextPass,
    egui::{self},
};

use sv_render::{AnimationSettings, CharacterSources, OverlayVisibility};
use sv_skin::{ModelVariant, TextureKind};

/// Request to load a texture file into one of the two texture slots.
/// Emitted by the panel; the application shell owns decoding.
#[derive(Event, Debug, Clone)]
pub struct LoadRequest {
    pub kind: TextureKind,
    pub path: PathBuf,
}

/// Last load/validation failure, shown in the panel. A rejected texture
/// only updates this line; the displayed character stays as it was.
#[derive(Resource, Default)]
pub struct UiStatus {
    pub last_error: Option<String>,
}

pub struct SkinUiPlugin;

impl Plugin for SkinUiPlugin {
    fn build(&self, app: &mut App) {
        app.add_plugins(EguiPlugin::default())
            .add_event::<LoadRequest>()
            .init_resource::<UiStatus>()
            .add_systems(EguiPrimaryContextPass, control_panel);
    }
}

fn control_panel(
    mut contexts: EguiContexts,
    mut sources: ResMut<CharacterSources>,
    mut visibility: ResMut<OverlayVisibility>,
    mut animation: ResMut<AnimationSettings>,
    status: Res<UiStatus>,
    mut load_requests: EventWriter<LoadRequest>,
) {
    let Ok(ctx) = contexts.ctx_mut() else {
        return;
    };

    egui::Window::new("Character").show(ctx, |ui| {
        ui.horizontal(|ui| {
            if ui.button("Open skin…").clicked() {
                if let Some(path) = pick_png() {
                    load_requests.write(LoadRequest {
                        kind: TextureKind::Skin,
                        path,
                    });
                }
            }
            if ui.button("Open cape…").clicked() {
                if let Some(path) = pick_png() {
                    load_requests.write(LoadRequest {
                        kind: TextureKind::Cape,
                        path,
                    });
                }
            }
            if ui.button("Clear cape").clicked() {
                sources.set_cape(None);
            }
        });

        ui.separator();
        ui.label("Model");
        let mut variant = sources.variant();
        ui.horizontal(|ui| {
            ui.radio_value(&mut variant, ModelVariant::Steve, "Steve (4px arms)");
            ui.radio_value(&mut variant, ModelVariant::Alex, "Alex (3px arms)");
        });
        if variant != sources.variant() {
            sources.set_variant(variant);
        }

        ui.separator();
        let mut overlays = visibility.skin_overlays;
        ui.checkbox(&mut overlays, "Outer layer");
        if overlays != visibility.skin_overlays {
            visibility.skin_overlays = overlays;
        }
        let mut cape = visibility.cape;
        ui.checkbox(&mut cape, "Cape");
        if cape != visibility.cape {
            visibility.cape = cape;
        }

        ui.separator();
        ui.checkbox(&mut animation.spin, "Turntable spin");
        ui.checkbox(&mut animation.sway, "Cape sway");

        if let Some(error) = &status.last_error {
            ui.separator();
            ui.colored_label(egui::Color32::LIGHT_RED, error);
        }

        ui.separator();
        ui.label("Drop a PNG onto the window to load it as a skin; use Open cape… for capes.");
    });
}

fn pick_png() -> Option<PathBuf> {
    rfd::FileDialog::new()
        .add_filter("PNG image", &["png"])
        .pick_file()
}
