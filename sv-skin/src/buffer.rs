//! Validated source bitmaps and pure pixel-buffer transforms.

use image::{ColorType, RgbaImage};
use tracing::warn;

use crate::error::{SkinError, TextureKind};

/// Whether the decoded pixel format can carry non-opaque alpha at all.
///
/// This is a format-level classification, not a pixel scan: an RGBA image
/// whose pixels all happen to be opaque still classifies as `Present`.
/// Deliberately coarse; the cost is an occasionally needlessly double-sided
/// overlay, never a see-through base layer.
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq)]
pub enum AlphaChannel {
    Absent,
    Present,
}

impl AlphaChannel {
    pub fn classify(color: ColorType) -> Result<Self, SkinError> {
        match color {
            ColorType::L8 | ColorType::L16 | ColorType::Rgb8 | ColorType::Rgb16
            | ColorType::Rgb32F => Ok(Self::Absent),
            ColorType::La8 | ColorType::La16 | ColorType::Rgba8 | ColorType::Rgba16
            | ColorType::Rgba32F => Ok(Self::Present),
            other => Err(SkinError::UnsupportedColorFormat(other)),
        }
    }

    /// Like [`AlphaChannel::classify`], but an unrecognized format degrades
    /// to `Present` so layering still renders correctly.
    pub fn classify_lossy(color: ColorType) -> Self {
        Self::classify(color).unwrap_or_else(|err| {
            warn!("{err}; treating as alpha-capable");
            Self::Present
        })
    }
}

/// A validated, immutable skin bitmap. Legacy 2:1 skins are upgraded to the
/// square layout at construction, so slicing always sees a square texture.
#[derive(Clone, Debug, PartialEq)]
pub struct SkinTexture {
    pixels: RgbaImage,
    alpha: AlphaChannel,
    scale: u32,
}

impl SkinTexture {
    /// Accepts 64x64, legacy 64x32, or any exact integer multiple of either
    /// shape. Everything else is a [`SkinError::DimensionMismatch`]; nothing
    /// is ever silently resized.
    pub fn new(pixels: RgbaImage, alpha: AlphaChannel) -> Result<Self, SkinError> {
        let (width, height) = pixels.dimensions();
        let square = width == height;
        let legacy = height * 2 == width;
        if width == 0 || width % 64 != 0 || !(square || legacy) {
            return Err(SkinError::DimensionMismatch {
                width,
                height,
                kind: TextureKind::Skin,
            });
        }
        let scale = width / 64;
        let pixels = if legacy {
            upgrade_legacy_skin(&pixels, scale)
        } else {
            pixels
        };
        Ok(Self {
            pixels,
            alpha,
            scale,
        })
    }

    pub fn pixels(&self) -> &RgbaImage {
        &self.pixels
    }

    pub fn alpha(&self) -> AlphaChannel {
        self.alpha
    }

    /// Integer multiple over the 64px base layout.
    pub fn scale(&self) -> u32 {
        self.scale
    }

    #[cfg(test)]
    pub(crate) fn raw(pixels: RgbaImage, alpha: AlphaChannel, scale: u32) -> Self {
        Self {
            pixels,
            alpha,
            scale,
        }
    }
}

/// A validated, immutable cape bitmap: width twice the height, width a
/// multiple of 64.
#[derive(Clone, Debug, PartialEq)]
pub struct CapeTexture {
    pixels: RgbaImage,
    alpha: AlphaChannel,
    scale: u32,
}

impl CapeTexture {
    pub fn new(pixels: RgbaImage, alpha: AlphaChannel) -> Result<Self, SkinError> {
        let (width, height) = pixels.dimensions();
        if width == 0 || width % 64 != 0 || height * 2 != width {
            return Err(SkinError::DimensionMismatch {
                width,
                height,
                kind: TextureKind::Cape,
            });
        }
        Ok(Self {
            pixels,
            alpha,
            scale: width / 64,
        })
    }

    pub fn pixels(&self) -> &RgbaImage {
        &self.pixels
    }

    pub fn alpha(&self) -> AlphaChannel {
        self.alpha
    }

    pub fn scale(&self) -> u32 {
        self.scale
    }
}

// Face-by-face copy table for upgrading legacy skins: each right-limb face
// is mirrored into the matching left-limb slot of the square layout.
// (src_x, src_y, w, h, dst_x, dst_y), in 64px base units.
const LEGACY_MIRROR_COPIES: [(u32, u32, u32, u32, u32, u32); 12] = [
    (4, 16, 4, 4, 20, 48),   // leg top
    (8, 16, 4, 4, 24, 48),   // leg bottom
    (0, 20, 4, 12, 24, 52),  // leg outer
    (4, 20, 4, 12, 20, 52),  // leg front
    (8, 20, 4, 12, 16, 52),  // leg inner
    (12, 20, 4, 12, 28, 52), // leg back
    (44, 16, 4, 4, 36, 48),  // arm top
    (48, 16, 4, 4, 40, 48),  // arm bottom
    (40, 20, 4, 12, 40, 52), // arm outer
    (44, 20, 4, 12, 36, 52), // arm front
    (48, 20, 4, 12, 32, 52), // arm inner
    (52, 20, 4, 12, 44, 52), // arm back
];

/// Expands a 2:1 legacy skin into the square layout: the original content on
/// top, mirrored right-limb faces filling the left-limb slots below. Overlay
/// slots other than the hat stay fully transparent and render invisibly.
fn upgrade_legacy_skin(src: &RgbaImage, scale: u32) -> RgbaImage {
    let size = src.width();
    let mut out = RgbaImage::new(size, size);
    for (x, y, pixel) in src.enumerate_pixels() {
        out.put_pixel(x, y, *pixel);
    }
    for &(sx, sy, w, h, dx, dy) in &LEGACY_MIRROR_COPIES {
        blit_mirrored(
            src,
            &mut out,
            sx * scale,
            sy * scale,
            w * scale,
            h * scale,
            dx * scale,
            dy * scale,
        );
    }
    out
}

fn blit_mirrored(src: &RgbaImage, dst: &mut RgbaImage, sx: u32, sy: u32, w: u32, h: u32, dx: u32, dy: u32) {
    for y in 0..h {
        for x in 0..w {
            let pixel = *src.get_pixel(sx + x, sy + y);
            dst.put_pixel(dx + (w - 1 - x), dy + y, pixel);
        }
    }
}

#[cfg(test)]
mod tests {
    use image::Rgba;

    use super::*;

    fn solid(width: u32, height: u32) -> RgbaImage {
        RgbaImage::from_pixel(width, height, Rgba([120, 90, 60, 255]))
    }

    #[test]
    fn accepts_square_and_legacy_shapes() {
        for (w, h) in [(64, 64), (64, 32), (128, 128), (128, 64), (192, 192)] {
            assert!(SkinTexture::new(solid(w, h), AlphaChannel::Absent).is_ok(), "{w}x{h}");
        }
    }

    #[test]
    fn rejects_malformed_shapes() {
        for (w, h) in [(60, 60), (64, 48), (32, 32), (65, 65), (0, 0), (64, 128)] {
            let err = SkinTexture::new(solid(w, h), AlphaChannel::Absent).unwrap_err();
            assert!(
                matches!(err, SkinError::DimensionMismatch { width, height, kind: TextureKind::Skin } if width == w && height == h),
                "{w}x{h}: {err}"
            );
        }
    }

    #[test]
    fn cape_must_be_two_to_one() {
        assert!(CapeTexture::new(solid(64, 32), AlphaChannel::Present).is_ok());
        assert!(CapeTexture::new(solid(128, 64), AlphaChannel::Present).is_ok());
        for (w, h) in [(64, 64), (64, 33), (60, 30), (22, 17)] {
            let err = CapeTexture::new(solid(w, h), AlphaChannel::Present).unwrap_err();
            assert!(matches!(err, SkinError::DimensionMismatch { kind: TextureKind::Cape, .. }), "{w}x{h}");
        }
    }

    #[test]
    fn legacy_upgrade_mirrors_right_limbs() {
        let mut pixels = solid(64, 32);
        // Tag the top-left pixel of the right leg's front face.
        pixels.put_pixel(4, 20, Rgba([255, 0, 0, 255]));
        let skin = SkinTexture::new(pixels, AlphaChannel::Absent).unwrap();
        assert_eq!(skin.pixels().dimensions(), (64, 64));
        // It lands mirrored at the top-right of the left leg's front face.
        assert_eq!(*skin.pixels().get_pixel(23, 52), Rgba([255, 0, 0, 255]));
        // The hat slot is untouched original content; the jacket slot is
        // transparent filler below the legacy rows.
        assert_eq!(*skin.pixels().get_pixel(20, 36), Rgba([0, 0, 0, 0]));
    }

    #[test]
    fn legacy_upgrade_scales_with_hd_textures() {
        let mut pixels = solid(128, 64);
        pixels.put_pixel(8, 40, Rgba([0, 255, 0, 255]));
        let skin = SkinTexture::new(pixels, AlphaChannel::Absent).unwrap();
        assert_eq!(skin.scale(), 2);
        assert_eq!(skin.pixels().dimensions(), (128, 128));
        // (8, 40) is the top-left of the doubled right-leg front face; the
        // mirrored copy spans x 40..48, so the tagged pixel lands at x 47.
        assert_eq!(*skin.pixels().get_pixel(47, 104), Rgba([0, 255, 0, 255]));
    }

    #[test]
    fn classify_known_formats() {
        assert_eq!(AlphaChannel::classify(ColorType::Rgb8).unwrap(), AlphaChannel::Absent);
        assert_eq!(AlphaChannel::classify(ColorType::Rgba8).unwrap(), AlphaChannel::Present);
        assert_eq!(AlphaChannel::classify(ColorType::La8).unwrap(), AlphaChannel::Present);
        assert_eq!(AlphaChannel::classify(ColorType::L16).unwrap(), AlphaChannel::Absent);
    }
}
