//! Skin-to-rig pipeline for a Minecraft-style humanoid character.
//!
//! Key constraints for this crate:
//! - No renderer dependency. The output is plain data (box sizes, offsets,
//!   sliced pixel buffers, blend policy) that a host scene turns into meshes
//!   and materials.
//! - All image transforms are pure: buffer in, new buffer out. Nothing draws
//!   into a shared context, so the whole pipeline tests headless.
//! - A build consumes one texture generation and returns a complete part
//!   set. There is no incremental update path; texture or variant changes
//!   rebuild the rig wholesale.

mod atlas;
mod buffer;
mod cape;
mod error;
mod layers;
mod material;
mod parts;
mod rig;
mod slice;
mod variant;

#[cfg(test)]
mod tests;

pub use atlas::*;
pub use buffer::*;
pub use cape::*;
pub use error::*;
pub use layers::*;
pub use material::*;
pub use parts::*;
pub use rig::*;
pub use slice::*;
pub use variant::*;
