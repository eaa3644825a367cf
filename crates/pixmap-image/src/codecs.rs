/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Entry and exit points of the pipeline
//!
//! This module glues the pixel-map codec to the [`Image`] container:
//! decoding produces a fully separated image plus its metadata,
//! encoding flattens the image back into wire order and hands it to
//! the matching emitter.
use std::io::Write;

use log::debug;
use pixmap_core::options::DecoderOptions;
use pixmap_pnm::{PnmDecoder, PnmEncoder, PnmVersions};

use crate::errors::ImageErrors;
use crate::image::Image;

/// All image formats the pipeline understands
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum ImageFormat {
    /// Any of the pixel-map variants
    Pnm
}

/// Guess the format of a byte stream from its opening bytes
///
/// Only the recognized input magic tokens are reported, everything
/// else returns None.
pub fn guess_format(data: &[u8]) -> Option<ImageFormat> {
    match data {
        [b'P', b'3' | b'6', x, ..] if x.is_ascii_whitespace() => Some(ImageFormat::Pnm),
        _ => None
    }
}

impl Image {
    /// Decode a pixel-map stream into an image
    ///
    /// The decoder carries dimensions, comments and the maximum
    /// sample value into the image metadata so a later encode can
    /// reproduce the header.
    pub fn decode_pnm(data: &[u8], options: DecoderOptions) -> Result<Image, ImageErrors> {
        let mut decoder = PnmDecoder::new_with_options(options, data);

        let pixels = decoder.decode()?;

        // headers are decoded once decode returns successfully
        let (width, height) = decoder
            .dimensions()
            .ok_or(ImageErrors::GenericStr("Headers were not decoded"))?;
        let colorspace = decoder
            .colorspace()
            .ok_or(ImageErrors::GenericStr("Headers were not decoded"))?;

        debug!("Decoded a {width}x{height} {colorspace:?} image");

        let mut image = Image::from_interleaved_u8(&pixels, width, height, colorspace)?;

        if let Some(max_value) = decoder.max_value() {
            image.metadata_mut().set_max_value(max_value);
        }
        image.metadata_mut().set_comments(decoder.take_comments());

        Ok(image)
    }

    /// Encode the image to `writer` as the given output variant
    ///
    /// The variant must agree with the image colorspace, the color
    /// emitters take three channels, the grayscale emitters one.
    pub fn encode_pnm<W: Write>(
        &self, writer: &mut W, version: PnmVersions
    ) -> Result<(), ImageErrors> {
        if version.num_components() != self.colorspace().num_components() {
            return Err(ImageErrors::GenericString(format!(
                "Cannot write a {:?} image as {version}",
                self.colorspace()
            )));
        }
        let (width, height) = self.dimensions();
        let data = self.flatten_u8();

        debug!("Encoding a {width}x{height} image as {version}");

        let mut encoder = PnmEncoder::new(writer);

        encoder.encode(
            version,
            width,
            height,
            self.metadata().comments(),
            self.metadata().max_value(),
            &data
        )?;

        Ok(())
    }
}
