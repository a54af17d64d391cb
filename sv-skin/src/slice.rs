//! Pure rectangle slicing out of a source bitmap.

use image::{RgbaImage, imageops};

use crate::atlas::Region;
use crate::error::SkinError;

/// Crops `region` out of `src` into a fresh buffer of the region's declared
/// size. The rectangle is clipped to the bitmap first; pixels falling
/// outside the source stay fully transparent, and a rectangle that misses
/// the bitmap entirely fails with [`SkinError::RegionOutOfBounds`] so the
/// caller can fall back to a placeholder for that one face.
pub fn slice(src: &RgbaImage, region: Region) -> Result<RgbaImage, SkinError> {
    let (src_w, src_h) = src.dimensions();
    let x1 = (region.x + region.width).min(src_w);
    let y1 = (region.y + region.height).min(src_h);
    if region.x >= x1 || region.y >= y1 {
        return Err(SkinError::RegionOutOfBounds {
            region,
            width: src_w,
            height: src_h,
        });
    }
    let mut out = RgbaImage::new(region.width, region.height);
    for y in region.y..y1 {
        for x in region.x..x1 {
            out.put_pixel(x - region.x, y - region.y, *src.get_pixel(x, y));
        }
    }
    Ok(if region.rotated { rotate180(&out) } else { out })
}

/// 180-degree rotation as a pure transform; applying it twice reproduces
/// the input buffer exactly. Only ever 180, so dimensions never swap.
pub fn rotate180(src: &RgbaImage) -> RgbaImage {
    imageops::rotate180(src)
}

#[cfg(test)]
mod tests {
    use image::Rgba;

    use super::*;

    fn region(x: u32, y: u32, width: u32, height: u32) -> Region {
        Region {
            x,
            y,
            width,
            height,
            rotated: false,
        }
    }

    fn checker(width: u32, height: u32) -> RgbaImage {
        RgbaImage::from_fn(width, height, |x, y| {
            if (x + y) % 2 == 0 {
                Rgba([255, 255, 255, 255])
            } else {
                Rgba([x as u8, y as u8, 0, 255])
            }
        })
    }

    #[test]
    fn in_bounds_slice_copies_exactly() {
        let src = checker(64, 64);
        let out = slice(&src, region(8, 8, 8, 8)).unwrap();
        assert_eq!(out.dimensions(), (8, 8));
        for y in 0..8 {
            for x in 0..8 {
                assert_eq!(out.get_pixel(x, y), src.get_pixel(x + 8, y + 8));
            }
        }
    }

    #[test]
    fn partial_overlap_pads_with_transparent_pixels() {
        let src = checker(16, 16);
        let out = slice(&src, region(12, 12, 8, 8)).unwrap();
        assert_eq!(out.dimensions(), (8, 8));
        assert_eq!(out.get_pixel(0, 0), src.get_pixel(12, 12));
        // Everything past the source edge is zero-filled.
        assert_eq!(*out.get_pixel(5, 5), Rgba([0, 0, 0, 0]));
    }

    #[test]
    fn empty_intersection_fails() {
        let src = checker(16, 16);
        let err = slice(&src, region(32, 0, 8, 8)).unwrap_err();
        assert!(matches!(err, SkinError::RegionOutOfBounds { .. }));
        assert!(slice(&src, region(0, 16, 4, 4)).is_err());
    }

    #[test]
    fn rotation_is_applied_and_idempotent_twice() {
        let src = checker(64, 64);
        let plain = slice(&src, region(16, 0, 8, 8)).unwrap();
        let rotated = slice(
            &src,
            Region {
                rotated: true,
                ..region(16, 0, 8, 8)
            },
        )
        .unwrap();
        assert_ne!(plain, rotated);
        assert_eq!(rotate180(&rotated), plain);
        assert_eq!(rotate180(&rotate180(&plain)), plain);
    }
}
