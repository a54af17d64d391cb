use std::path::PathBuf;

use bevy::log::LogPlugin;
use bevy::prelude::*;
use clap::Parser;

use sv_skin::ModelVariant;

mod loader;
mod plugins;

#[derive(Parser, Debug, Clone)]
#[command(name = "sv-viewer", about = "3D viewer for Minecraft-style skins")]
struct Args {
    /// Skin PNG to load at startup.
    #[arg(long)]
    skin: Option<PathBuf>,

    /// Cape PNG to load at startup.
    #[arg(long)]
    cape: Option<PathBuf>,

    /// Body proportions to start with.
    #[arg(long, value_enum, default_value_t = VariantArg::Steve)]
    variant: VariantArg,
}

#[derive(clap::ValueEnum, Clone, Copy, Debug)]
enum VariantArg {
    Steve,
    Alex,
}

impl From<VariantArg> for ModelVariant {
    fn from(value: VariantArg) -> Self {
        match value {
            VariantArg::Steve => ModelVariant::Steve,
            VariantArg::Alex => ModelVariant::Alex,
        }
    }
}

fn main() {
    tracing_subscriber::fmt()
        .without_time()
        .compact()
        .init();

    let args = Args::parse();
    let startup = loader::StartupConfig {
        skin: args.skin,
        cape: args.cape,
        variant: args.variant.into(),
    };

    App::new()
        .add_plugins(
            DefaultPlugins
                .set(WindowPlugin {
                    primary_window: Some(Window {
                        title: "Skin Viewer".into(),
                        ..Default::default()
                    }),
                    ..Default::default()
                })
                // The subscriber above owns logging.
                .disable::<LogPlugin>(),
        )
        .add_plugins((
            sv_render::SkinRenderPlugin,
            sv_ui::SkinUiPlugin,
            plugins::ViewerCorePlugin { startup },
        ))
        .run();
}
