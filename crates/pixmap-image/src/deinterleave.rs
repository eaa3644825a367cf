/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Routines to split interleaved wire data into separate channels
//!
//! Both pixel-map variants interleave samples per pixel on the wire,
//! `[R,G,B,R,G,B]`, while every routine in the pipeline wants one
//! plane per channel. The split happens exactly once, right after
//! decoding.
use pixmap_core::colorspace::ColorSpace;

use crate::channel::Channel;
use crate::errors::ImageErrors;

/// Separate interleaved 8 bit pixels into per-colorspace channels
///
/// The pixel length must be a multiple of the colorspace component
/// count, the caller has already verified it against the dimensions.
pub fn deinterleave_u8(pixels: &[u8], colorspace: ColorSpace) -> Result<Vec<Channel>, ImageErrors> {
    match colorspace.num_components() {
        1 => {
            let mut gray = Channel::try_new(pixels.len())?;

            gray.as_slice_mut().copy_from_slice(pixels);

            Ok(vec![gray])
        }
        3 => {
            let size = pixels.len() / 3;

            let mut c1 = Channel::try_new(size)?;
            let mut c2 = Channel::try_new(size)?;
            let mut c3 = Channel::try_new(size)?;

            for (((chunk, r), g), b) in pixels
                .chunks_exact(3)
                .zip(c1.as_slice_mut())
                .zip(c2.as_slice_mut())
                .zip(c3.as_slice_mut())
            {
                *r = chunk[0];
                *g = chunk[1];
                *b = chunk[2];
            }

            Ok(vec![c1, c2, c3])
        }
        _ => Err(ImageErrors::GenericStr(
            "Cannot de-interleave this colorspace"
        ))
    }
}

#[cfg(test)]
mod tests {
    use pixmap_core::colorspace::ColorSpace;

    use super::deinterleave_u8;

    #[test]
    fn three_channel_split() {
        let pixels = [1, 2, 3, 4, 5, 6];

        let channels = deinterleave_u8(&pixels, ColorSpace::RGB).unwrap();

        assert_eq!(channels[0].as_slice(), [1, 4]);
        assert_eq!(channels[1].as_slice(), [2, 5]);
        assert_eq!(channels[2].as_slice(), [3, 6]);
    }

    #[test]
    fn single_channel_passthrough() {
        let pixels = [9, 8, 7];

        let channels = deinterleave_u8(&pixels, ColorSpace::Luma).unwrap();

        assert_eq!(channels.len(), 1);
        assert_eq!(channels[0].as_slice(), pixels);
    }
}
