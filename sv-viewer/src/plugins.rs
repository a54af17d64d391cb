use bevy::prelude::*;

use crate::loader;

pub struct ViewerCorePlugin {
    pub startup: loader::StartupConfig,
}

impl Plugin for ViewerCorePlugin {
    fn build(&self, app: &mut App) {
        app.insert_resource(self.startup.clone())
            .init_resource::<loader::TextureLoader>()
            .add_systems(Startup, loader::apply_startup_config)
            .add_systems(
                Update,
                (
                    loader::forward_load_requests,
                    loader::handle_dropped_files,
                    loader::apply_loaded_textures.after(loader::forward_load_requests),
                ),
            );
    }
}
