//! Whole-character assembly.

use tracing::{debug, warn};

use crate::buffer::{CapeTexture, SkinTexture};
use crate::cape::{cape_node, cape_pivot_node};
use crate::error::SkinError;
use crate::parts::{PartId, PartNode, build_skin_part};
use crate::variant::ModelVariant;

/// The complete part set for one character, built atomically from one skin
/// generation plus an optional cape. Always holds exactly 14 nodes indexed
/// by [`PartId`]; a missing cape leaves the cape node without geometry
/// rather than shrinking the set.
#[derive(Clone, Debug, PartialEq)]
pub struct CharacterRig {
    variant: ModelVariant,
    parts: Vec<PartNode>,
}

impl CharacterRig {
    /// Builds every part from the given sources. The only fatal condition
    /// is a missing skin bitmap; individual slice failures degrade to
    /// placeholder faces and the build still completes, so one bad atlas
    /// rectangle never blanks the whole character.
    pub fn build(
        skin: Option<&SkinTexture>,
        cape: Option<&CapeTexture>,
        variant: ModelVariant,
    ) -> Result<Self, SkinError> {
        let skin = skin.ok_or(SkinError::SourceMissing)?;
        let mut parts = Vec::with_capacity(PartId::ALL.len());
        for part in PartId::ALL {
            let node = match part {
                PartId::CapePivot => cape_pivot_node(variant),
                PartId::Cape => cape_node(cape, variant),
                _ => match build_skin_part(part, skin, variant) {
                    Some(node) => node,
                    None => continue,
                },
            };
            debug_assert_eq!(node.id.index(), parts.len());
            parts.push(node);
        }

        let rig = Self { variant, parts };
        let placeholders: usize = rig.parts.iter().map(PartNode::placeholder_faces).sum();
        if placeholders > 0 {
            warn!("rig built with {placeholders} placeholder faces");
        }
        debug!("built {:?} rig with {} parts", rig.variant, rig.parts.len());
        Ok(rig)
    }

    pub fn variant(&self) -> ModelVariant {
        self.variant
    }

    pub fn part(&self, id: PartId) -> &PartNode {
        &self.parts[id.index()]
    }

    pub fn parts(&self) -> &[PartNode] {
        &self.parts
    }

    pub fn has_cape(&self) -> bool {
        self.part(PartId::Cape).geometry.is_some()
    }
}
