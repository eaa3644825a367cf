/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Sepia filter: antique a color image.
//!
//! Sepia is a fixed linear color transform, every output channel is a
//! weighted sum of all three input channels for the same pixel:
//!
//! ```text
//! r' = 0.393*R + 0.769*G + 0.189*B
//! g' = 0.349*R + 0.686*G + 0.168*B
//! b' = 0.272*R + 0.534*G + 0.131*B
//! ```
//!
//! Results are truncated toward zero and clamped to 255. Since every
//! output depends on every input of the same pixel, the three results
//! are computed into storage distinct from the channels being read.
use log::trace;
use pixmap_core::colorspace::ColorSpace;
use pixmap_image::channel::Channel;
use pixmap_image::errors::ImageErrors;
use pixmap_image::image::Image;
use pixmap_image::traits::OperationsTrait;

/// Antique a color image
pub struct Sepia;

impl Sepia {
    /// Create a new sepia operation
    #[must_use]
    pub fn new() -> Sepia {
        Sepia {}
    }
}

impl Default for Sepia {
    fn default() -> Self {
        Self::new()
    }
}

impl OperationsTrait for Sepia {
    fn name(&self) -> &'static str {
        "Sepia"
    }

    fn supported_colorspaces(&self) -> &'static [ColorSpace] {
        &[ColorSpace::RGB]
    }

    fn execute_impl(&self, image: &mut Image) -> Result<(), ImageErrors> {
        let (width, height) = image.dimensions();

        trace!("Applying sepia tone to a {width}x{height} image");

        let mut out_r = Channel::try_new(width * height)?;
        let mut out_g = Channel::try_new(width * height)?;
        let mut out_b = Channel::try_new(width * height)?;

        if let [r, g, b] = image.channels_ref() {
            sepia(
                (r.as_slice(), g.as_slice(), b.as_slice()),
                (
                    out_r.as_slice_mut(),
                    out_g.as_slice_mut(),
                    out_b.as_slice_mut()
                )
            );
        }
        image.replace_channels(
            vec![out_r, out_g, out_b],
            width,
            height,
            image.colorspace()
        )
    }
}

/// Apply the sepia weights to RGB samples
///
/// Inputs and outputs must not overlap, all three outputs for a pixel
/// are functions of all three original inputs.
pub fn sepia((r, g, b): (&[u8], &[u8], &[u8]), out: (&mut [u8], &mut [u8], &mut [u8])) {
    let (out_r, out_g, out_b) = out;

    for (index, ((r_v, g_v), b_v)) in r.iter().zip(g.iter()).zip(b.iter()).enumerate() {
        let (r_f, g_f, b_f) = (f32::from(*r_v), f32::from(*g_v), f32::from(*b_v));

        out_r[index] = clamp_sample(0.393 * r_f + 0.769 * g_f + 0.189 * b_f);
        out_g[index] = clamp_sample(0.349 * r_f + 0.686 * g_f + 0.168 * b_f);
        out_b[index] = clamp_sample(0.272 * r_f + 0.534 * g_f + 0.131 * b_f);
    }
}

/// Truncate toward zero and clamp to the sample maximum
///
/// Valid inputs can only overshoot, there is no lower clamp.
#[inline]
fn clamp_sample(value: f32) -> u8 {
    value.min(255.0) as u8
}

#[cfg(test)]
mod tests {
    use nanorand::Rng;
    use pixmap_core::colorspace::ColorSpace;
    use pixmap_image::image::Image;
    use pixmap_image::traits::OperationsTrait;

    use super::*;

    #[test]
    fn white_overshoots_and_clamps() {
        let input = ([255_u8], [255_u8], [255_u8]);
        let (mut r, mut g, mut b) = ([0_u8], [0_u8], [0_u8]);

        sepia((&input.0, &input.1, &input.2), (&mut r, &mut g, &mut b));

        // r' and g' clamp, b' = trunc(0.937 * 255) stays below the cap
        assert_eq!((r[0], g[0], b[0]), (255, 255, 238));
    }

    #[test]
    fn black_stays_black() {
        let (mut r, mut g, mut b) = ([9_u8], [9_u8], [9_u8]);

        sepia((&[0], &[0], &[0]), (&mut r, &mut g, &mut b));

        assert_eq!((r[0], g[0], b[0]), (0, 0, 0));
    }

    #[test]
    fn pure_green_maps_to_known_tone() {
        let mut probe = Image::from_interleaved_u8(&[0, 255, 0], 1, 1, ColorSpace::RGB).unwrap();

        Sepia::new().execute(&mut probe).unwrap();

        assert_eq!(probe.flatten_u8(), [196, 174, 136]);
    }

    #[test]
    fn warm_ordering_holds_for_random_input() {
        // every red weight dominates its green weight which dominates
        // its blue weight, so r' >= g' >= b' for any input pixel and
        // clamping keeps it that way
        let mut rng = nanorand::WyRand::new();

        let size = 64 * 64;
        let (mut r, mut g, mut b) = (vec![0_u8; size], vec![0_u8; size], vec![0_u8; size]);

        rng.fill(&mut r);
        rng.fill(&mut g);
        rng.fill(&mut b);

        let (mut out_r, mut out_g, mut out_b) =
            (vec![0_u8; size], vec![0_u8; size], vec![0_u8; size]);

        sepia((&r, &g, &b), (&mut out_r, &mut out_g, &mut out_b));

        for ((r_v, g_v), b_v) in out_r.iter().zip(out_g.iter()).zip(out_b.iter()) {
            assert!(r_v >= g_v && g_v >= b_v);
        }
    }

    #[test]
    fn sepia_keeps_three_channels() {
        let mut image = Image::from_interleaved_u8(&[1, 2, 3], 1, 1, ColorSpace::RGB).unwrap();

        Sepia::new().execute(&mut image).unwrap();

        assert_eq!(image.colorspace(), ColorSpace::RGB);
        assert_eq!(image.channels_ref().len(), 3);
        assert_eq!(image.dimensions(), (1, 1));
    }
}
