//! Background texture decoding and ingestion.
//!
//! File reads and PNG decoding run on one worker thread; decoded buffers
//! come back through a channel and are validated/installed on the main
//! schedule. The rig build itself always sees an in-memory bitmap.

use std::path::PathBuf;
use std::thread;

use bevy::prelude::*;
use bevy::window::FileDragAndDrop;
use crossbeam::channel::{Receiver, Sender, unbounded};
use image::{ColorType, RgbaImage};
use tracing::{info, warn};

use sv_render::CharacterSources;
use sv_skin::{AlphaChannel, CapeTexture, ModelVariant, SkinError, SkinTexture, TextureKind};
use sv_ui::{LoadRequest, UiStatus};

/// Which slot a decoded file should land in. Dropped files are `Auto`:
/// tried as a skin first, then as a cape.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadSlot {
    Skin,
    Cape,
    Auto,
}

#[derive(Debug)]
struct DecodeRequest {
    slot: LoadSlot,
    path: PathBuf,
}

#[derive(Debug)]
struct DecodeResult {
    slot: LoadSlot,
    path: PathBuf,
    decoded: Result<(RgbaImage, ColorType), String>,
}

/// Handle to the decode worker.
#[derive(Resource)]
pub struct TextureLoader {
    request_tx: Sender<DecodeRequest>,
    result_rx: Receiver<DecodeResult>,
}

impl Default for TextureLoader {
    fn default() -> Self {
        let (request_tx, request_rx) = unbounded::<DecodeRequest>();
        let (result_tx, result_rx) = unbounded::<DecodeResult>();
        thread::spawn(move || decode_worker(request_rx, result_tx));
        Self {
            request_tx,
            result_rx,
        }
    }
}

impl TextureLoader {
    pub fn request(&self, slot: LoadSlot, path: PathBuf) {
        let _ = self.request_tx.send(DecodeRequest { slot, path });
    }
}

fn decode_worker(request_rx: Receiver<DecodeRequest>, result_tx: Sender<DecodeResult>) {
    while let Ok(request) = request_rx.recv() {
        let decoded = std::fs::read(&request.path)
            .map_err(|err| err.to_string())
            .and_then(|bytes| image::load_from_memory(&bytes).map_err(|err| err.to_string()))
            .map(|decoded| {
                // The pre-conversion color type feeds the transparency
                // classification; the buffer itself is always RGBA.
                let color = decoded.color();
                (decoded.to_rgba8(), color)
            });
        let _ = result_tx.send(DecodeResult {
            slot: request.slot,
            path: request.path,
            decoded,
        });
    }
}

/// Initial state from the command line.
#[derive(Resource, Debug, Clone, Default)]
pub struct StartupConfig {
    pub skin: Option<PathBuf>,
    pub cape: Option<PathBuf>,
    pub variant: ModelVariant,
}

pub fn apply_startup_config(
    startup: Res<StartupConfig>,
    loader: Res<TextureLoader>,
    mut sources: ResMut<CharacterSources>,
) {
    sources.set_variant(startup.variant);
    if let Some(path) = &startup.skin {
        loader.request(LoadSlot::Skin, path.clone());
    }
    if let Some(path) = &startup.cape {
        loader.request(LoadSlot::Cape, path.clone());
    }
}

pub fn forward_load_requests(
    mut requests: EventReader<LoadRequest>,
    loader: Res<TextureLoader>,
) {
    for request in requests.read() {
        let slot = match request.kind {
            TextureKind::Skin => LoadSlot::Skin,
            TextureKind::Cape => LoadSlot::Cape,
        };
        loader.request(slot, request.path.clone());
    }
}

pub fn handle_dropped_files(
    mut events: EventReader<FileDragAndDrop>,
    loader: Res<TextureLoader>,
) {
    for event in events.read() {
        if let FileDragAndDrop::DroppedFile { path_buf, .. } = event {
            loader.request(LoadSlot::Auto, path_buf.clone());
        }
    }
}

/// Drains finished decodes, validates them, and installs them as new
/// character sources. A failed validation only updates the status line;
/// the displayed character keeps its previous texture.
pub fn apply_loaded_textures(
    loader: Res<TextureLoader>,
    mut sources: ResMut<CharacterSources>,
    mut status: ResMut<UiStatus>,
) {
    while let Ok(result) = loader.result_rx.try_recv() {
        let (pixels, color) = match result.decoded {
            Ok(decoded) => decoded,
            Err(err) => {
                warn!("failed to decode {:?}: {err}", result.path);
                status.last_error = Some(format!("{}: {err}", result.path.display()));
                continue;
            }
        };
        let alpha = AlphaChannel::classify_lossy(color);
        match install(&mut sources, result.slot, pixels, alpha) {
            Ok(()) => {
                info!("loaded {:?}", result.path);
                status.last_error = None;
            }
            Err(err) => {
                warn!("rejected {:?}: {err}", result.path);
                status.last_error = Some(format!("{}: {err}", result.path.display()));
            }
        }
    }
}

fn install(
    sources: &mut CharacterSources,
    slot: LoadSlot,
    pixels: RgbaImage,
    alpha: AlphaChannel,
) -> Result<(), SkinError> {
    match slot {
        LoadSlot::Skin => sources.set_skin(SkinTexture::new(pixels, alpha)?),
        LoadSlot::Cape => sources.set_cape(Some(CapeTexture::new(pixels, alpha)?)),
        // 64x32 is both a legacy skin and a cape shape; dropped files lean
        // skin, the explicit cape slot is always available in the panel.
        LoadSlot::Auto => match SkinTexture::new(pixels.clone(), alpha) {
            Ok(skin) => sources.set_skin(skin),
            Err(skin_err) => match CapeTexture::new(pixels, alpha) {
                Ok(cape) => sources.set_cape(Some(cape)),
                Err(_) => return Err(skin_err),
            },
        },
    }
    Ok(())
}
