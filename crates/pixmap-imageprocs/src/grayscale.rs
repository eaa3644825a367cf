/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Convert an RGB image to grayscale
//!
//! Luminance is a weighted sum of the three channels,
//! `0.30 R + 0.60 G + 0.10 B`, rounded to the nearest integer. The
//! image comes out with a single channel and the grayscale emitters
//! take over at encode time.
use log::trace;
use pixmap_core::colorspace::ColorSpace;
use pixmap_image::channel::Channel;
use pixmap_image::errors::ImageErrors;
use pixmap_image::image::Image;
use pixmap_image::traits::OperationsTrait;

/// Convert an image from RGB to grayscale
pub struct RgbToGrayscale;

impl RgbToGrayscale {
    /// Create a new grayscale operation
    #[must_use]
    pub fn new() -> RgbToGrayscale {
        RgbToGrayscale {}
    }
}

impl Default for RgbToGrayscale {
    fn default() -> Self {
        Self::new()
    }
}

impl OperationsTrait for RgbToGrayscale {
    fn name(&self) -> &'static str {
        "RGB to Grayscale"
    }

    fn supported_colorspaces(&self) -> &'static [ColorSpace] {
        &[ColorSpace::RGB]
    }

    fn execute_impl(&self, image: &mut Image) -> Result<(), ImageErrors> {
        let (width, height) = image.dimensions();

        trace!("Reducing a {width}x{height} RGB image to grayscale");

        let mut gray = Channel::try_new(width * height)?;

        if let [r, g, b] = image.channels_ref() {
            rgb_to_grayscale(
                (r.as_slice(), g.as_slice(), b.as_slice()),
                gray.as_slice_mut()
            );
        }
        // the two color channels drop here, only the single gray
        // plane survives
        image.replace_channels(vec![gray], width, height, ColorSpace::Luma)
    }
}

/// Convert RGB samples to their rounded luminance
pub fn rgb_to_grayscale((r, g, b): (&[u8], &[u8], &[u8]), out: &mut [u8]) {
    for (((r_v, g_v), b_v), g_out) in r.iter().zip(g.iter()).zip(b.iter()).zip(out.iter_mut()) {
        let luma = 0.30 * f32::from(*r_v) + 0.60 * f32::from(*g_v) + 0.10 * f32::from(*b_v);

        // the weights sum to one so luma never leaves the sample range
        *g_out = luma.round() as u8;
    }
}

#[cfg(test)]
mod tests {
    use pixmap_core::colorspace::ColorSpace;
    use pixmap_image::image::Image;
    use pixmap_image::traits::OperationsTrait;

    use super::*;

    #[test]
    fn known_luminance_values() {
        let r = [255, 0, 100];
        let g = [255, 0, 150];
        let b = [255, 0, 50];
        let mut out = [0_u8; 3];

        rgb_to_grayscale((&r, &g, &b), &mut out);

        // 0.3*100 + 0.6*150 + 0.1*50 = 125
        assert_eq!(out, [255, 0, 125]);
    }

    #[test]
    fn image_reduces_to_one_channel() {
        let image =
            Image::from_interleaved_u8(&[10, 20, 30, 200, 200, 200], 1, 2, ColorSpace::RGB)
                .unwrap();

        let mut gray = image;
        RgbToGrayscale::new().execute(&mut gray).unwrap();

        assert_eq!(gray.colorspace(), ColorSpace::Luma);
        assert_eq!(gray.channels_ref().len(), 1);
        // 0.3*10 + 0.6*20 + 0.1*30 = 18
        assert_eq!(gray.flatten_u8(), [18, 200]);
    }

    #[test]
    fn grayscale_rejects_grayscale_input() {
        let image = Image::from_interleaved_u8(&[1, 2], 1, 2, ColorSpace::Luma).unwrap();

        let mut gray = image;
        assert!(RgbToGrayscale::new().execute(&mut gray).is_err());
    }
}
