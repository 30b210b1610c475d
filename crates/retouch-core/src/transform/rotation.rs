//! Exact quarter-turn rotation.
//!
//! Rotations in the edit pipeline are always whole quarter turns (each
//! user rotation adds 90 degrees), so rotation is a lossless index remap:
//! no interpolation, no resampling, byte-identical results on every run.
//!
//! The remap uses inverse mapping: for each pixel in the output image we
//! compute the source pixel that lands there.

use crate::raster::Raster;

/// Rotate a raster clockwise by a cumulative rotation in degrees.
///
/// The rotation is reduced modulo 360 and snapped to the nearest quarter
/// turn; 90/270 outputs have swapped dimensions. Zero net rotation
/// returns a copy of the source.
pub fn rotate_quarter(image: &Raster, rotation_degrees: i32) -> Raster {
    let quarter_turns = (rotation_degrees.rem_euclid(360) + 45) / 90 % 4;

    // Fast path: no net rotation
    if quarter_turns == 0 {
        return image.clone();
    }

    let (src_w, src_h) = (image.width as usize, image.height as usize);
    let (dst_w, dst_h) = if quarter_turns % 2 == 1 {
        (src_h, src_w)
    } else {
        (src_w, src_h)
    };

    let mut output = vec![0u8; src_w * src_h * 3];

    for dst_y in 0..dst_h {
        for dst_x in 0..dst_w {
            let (src_x, src_y) = match quarter_turns {
                // 90 clockwise: the left column of the source becomes the top row
                1 => (dst_y, src_h - 1 - dst_x),
                2 => (src_w - 1 - dst_x, src_h - 1 - dst_y),
                // 270 clockwise (90 counter-clockwise)
                3 => (src_w - 1 - dst_y, dst_x),
                _ => unreachable!(),
            };

            let src_idx = (src_y * src_w + src_x) * 3;
            let dst_idx = (dst_y * dst_w + dst_x) * 3;
            output[dst_idx..dst_idx + 3].copy_from_slice(&image.pixels[src_idx..src_idx + 3]);
        }
    }

    Raster::new(dst_w as u32, dst_h as u32, output)
}
