//! Per-face surface descriptions derived from sliced sub-images.

use image::{Rgba, RgbaImage};
use tracing::warn;

use crate::atlas::Layer;
use crate::buffer::AlphaChannel;
use crate::error::SkinError;

/// Diagnostic fill for a base-layer face whose atlas rectangle missed the
/// source bitmap.
pub const BASE_PLACEHOLDER: Rgba<u8> = Rgba([220, 30, 30, 255]);

/// Diagnostic fill for a failed overlay face; translucent so the base layer
/// underneath stays visible.
pub const OVERLAY_PLACEHOLDER: Rgba<u8> = Rgba([40, 90, 235, 110]);

/// Overlay faces without detected transparency still blend at slightly less
/// than full opacity. Overlay boxes enclose their base part, so a fully
/// opaque overlay would occlude the base layer completely from inside.
pub const OVERLAY_OPACITY: f32 = 0.9;

#[derive(Clone, Debug, PartialEq)]
pub enum FaceImage {
    /// A crop of the source texture at the face's declared size.
    Sliced(RgbaImage),
    /// Solid diagnostic color standing in for a failed slice.
    Placeholder(Rgba<u8>),
}

/// How the host should blend a face.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum SurfaceBlend {
    /// No blending, unlit flat texture color.
    Opaque,
    /// Alpha-blended at the given opacity. Double-sided faces stay visible
    /// from inside the enclosing overlay box.
    Blended { opacity: f32, double_sided: bool },
}

/// One renderable face surface.
///
/// Hosts must sample the image with nearest-neighbor filtering and
/// clamp-to-edge wrapping on both axes; anything else bleeds neighboring
/// atlas pixels across face seams and smears the pixel-art look.
#[derive(Clone, Debug, PartialEq)]
pub struct FaceMaterial {
    pub image: FaceImage,
    pub blend: SurfaceBlend,
}

impl FaceMaterial {
    pub fn is_placeholder(&self) -> bool {
        matches!(self.image, FaceImage::Placeholder(_))
    }
}

/// Builds the surface for one face from its slice result, degrading to a
/// colored placeholder when the slice failed. `layer` is the blend policy
/// selector: overlay faces (and the cape, which blends like one) are always
/// treated as potentially see-through, base faces never are.
pub fn face_material(
    slice: Result<RgbaImage, SkinError>,
    layer: Layer,
    alpha: AlphaChannel,
) -> FaceMaterial {
    let image = match slice {
        Ok(image) => FaceImage::Sliced(image),
        Err(err) => {
            warn!("face slice failed, using placeholder: {err}");
            FaceImage::Placeholder(match layer {
                Layer::Base => BASE_PLACEHOLDER,
                Layer::Overlay => OVERLAY_PLACEHOLDER,
            })
        }
    };
    let blend = match layer {
        Layer::Base => SurfaceBlend::Opaque,
        Layer::Overlay => match alpha {
            AlphaChannel::Present => SurfaceBlend::Blended {
                opacity: 1.0,
                double_sided: true,
            },
            AlphaChannel::Absent => SurfaceBlend::Blended {
                opacity: OVERLAY_OPACITY,
                double_sided: false,
            },
        },
    };
    FaceMaterial { image, blend }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::atlas::Region;
    use crate::error::TextureKind;

    fn ok_slice() -> Result<RgbaImage, SkinError> {
        Ok(RgbaImage::from_pixel(4, 4, Rgba([10, 20, 30, 255])))
    }

    fn failed_slice() -> Result<RgbaImage, SkinError> {
        Err(SkinError::RegionOutOfBounds {
            region: Region {
                x: 99,
                y: 99,
                width: 4,
                height: 4,
                rotated: false,
            },
            width: 16,
            height: 16,
        })
    }

    #[test]
    fn base_faces_are_opaque_and_unblended() {
        let mat = face_material(ok_slice(), Layer::Base, AlphaChannel::Present);
        assert_eq!(mat.blend, SurfaceBlend::Opaque);
        assert!(!mat.is_placeholder());
    }

    #[test]
    fn overlay_with_alpha_is_double_sided_full_blend() {
        let mat = face_material(ok_slice(), Layer::Overlay, AlphaChannel::Present);
        assert_eq!(
            mat.blend,
            SurfaceBlend::Blended {
                opacity: 1.0,
                double_sided: true
            }
        );
    }

    #[test]
    fn overlay_without_alpha_blends_near_opaque() {
        let mat = face_material(ok_slice(), Layer::Overlay, AlphaChannel::Absent);
        assert_eq!(
            mat.blend,
            SurfaceBlend::Blended {
                opacity: OVERLAY_OPACITY,
                double_sided: false
            }
        );
    }

    #[test]
    fn placeholders_pick_the_layer_color() {
        let base = face_material(failed_slice(), Layer::Base, AlphaChannel::Absent);
        assert_eq!(base.image, FaceImage::Placeholder(BASE_PLACEHOLDER));
        assert_eq!(base.blend, SurfaceBlend::Opaque);

        let overlay = face_material(failed_slice(), Layer::Overlay, AlphaChannel::Absent);
        assert_eq!(overlay.image, FaceImage::Placeholder(OVERLAY_PLACEHOLDER));
        assert!(matches!(overlay.blend, SurfaceBlend::Blended { .. }));
    }

    #[test]
    fn dimension_kind_display_names() {
        // Keep the error text stable for the status line.
        let err = SkinError::DimensionMismatch {
            width: 60,
            height: 60,
            kind: TextureKind::Skin,
        };
        assert_eq!(err.to_string(), "60x60 is not a valid skin texture size");
    }
}
