/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! This module represents a single image
//!
//! An image is separated channels of 8 bit samples sharing one
//! `width x height` shape, together with the header metadata the
//! codec carries through the pipeline.
use pixmap_core::colorspace::ColorSpace;

use crate::channel::Channel;
use crate::deinterleave::deinterleave_u8;
use crate::errors::ImageErrors;
use crate::metadata::ImageMetadata;

/// Represents a single image
#[derive(Clone)]
pub struct Image {
    pub(crate) channels: Vec<Channel>,
    pub(crate) metadata: ImageMetadata
}

impl Image {
    /// Create a new image from already separated channels
    ///
    /// The shape invariant is enforced here once, channel count must
    /// match the colorspace and every channel must hold exactly
    /// `width * height` samples. Functions operating on an image may
    /// rely on it and never re-verify shapes ad hoc.
    pub fn new(
        channels: Vec<Channel>, width: usize, height: usize, colorspace: ColorSpace
    ) -> Result<Image, ImageErrors> {
        let mut metadata = ImageMetadata::default();

        metadata.set_dimensions(width, height);
        metadata.colorspace = colorspace;

        let image = Image { channels, metadata };

        image.confirm_shape()?;

        Ok(image)
    }

    fn confirm_shape(&self) -> Result<(), ImageErrors> {
        let (width, height) = self.metadata.dimensions();
        let colorspace = self.metadata.colorspace();

        if self.channels.len() != colorspace.num_components() {
            return Err(ImageErrors::DimensionsMisMatch(
                colorspace.num_components(),
                self.channels.len()
            ));
        }
        let length = width * height;

        for channel in &self.channels {
            if channel.len() != length {
                return Err(ImageErrors::DimensionsMisMatch(length, channel.len()));
            }
        }
        Ok(())
    }

    /// Get image dimensions as a tuple of (width, height)
    pub const fn dimensions(&self) -> (usize, usize) {
        self.metadata.dimensions()
    }

    /// Get the colorspace this image is stored in
    pub const fn colorspace(&self) -> ColorSpace {
        self.metadata.colorspace()
    }

    pub const fn metadata(&self) -> &ImageMetadata {
        &self.metadata
    }

    pub fn metadata_mut(&mut self) -> &mut ImageMetadata {
        &mut self.metadata
    }

    /// Return a reference to the underlying channels
    pub fn channels_ref(&self) -> &[Channel] {
        &self.channels
    }

    /// Return a mutable view into the image channels
    pub fn channels_mut(&mut self) -> &mut [Channel] {
        &mut self.channels
    }

    /// Replace pixel storage, dimensions and colorspace in one step
    ///
    /// Operations that permute or reduce channels go through here so
    /// the shape invariant is never observably broken in between
    /// swapping buffers and updating dimensions. The previous
    /// channels drop on return, bounding peak memory to the new
    /// result plus the old input.
    pub fn replace_channels(
        &mut self, channels: Vec<Channel>, width: usize, height: usize, colorspace: ColorSpace
    ) -> Result<(), ImageErrors> {
        let replacement = Image::new(channels, width, height, colorspace)?;

        self.channels = replacement.channels;
        self.metadata.set_dimensions(width, height);
        self.metadata.colorspace = colorspace;

        Ok(())
    }

    /// Create a new image from interleaved pixels
    ///
    /// Pixels are expected to be interleaved according to the
    /// colorspace, i.e if the image is RGB, pixel layout should be
    /// `[R,G,B,R,G,B]` in row-major order.
    pub fn from_interleaved_u8(
        pixels: &[u8], width: usize, height: usize, colorspace: ColorSpace
    ) -> Result<Image, ImageErrors> {
        let expected_len = width
            .checked_mul(height)
            .and_then(|x| x.checked_mul(colorspace.num_components()))
            .ok_or(ImageErrors::GenericStr("Image dimensions overflow a usize"))?;

        if pixels.len() != expected_len {
            return Err(ImageErrors::DimensionsMisMatch(expected_len, pixels.len()));
        }
        let channels = deinterleave_u8(pixels, colorspace)?;

        Image::new(channels, width, height, colorspace)
    }

    /// Interleave the image channels back into wire order
    ///
    /// For RGB data the result looks like `[R,G,B,R,G,B]`, grayscale
    /// data is returned as is.
    pub fn flatten_u8(&self) -> Vec<u8> {
        let components = self.colorspace().num_components();

        match self.channels_ref() {
            [gray] => gray.as_slice().to_vec(),
            [r, g, b] => {
                let mut out = vec![0_u8; r.len() * components];

                for (((chunk, r), g), b) in out
                    .chunks_exact_mut(3)
                    .zip(r.as_slice())
                    .zip(g.as_slice())
                    .zip(b.as_slice())
                {
                    chunk[0] = *r;
                    chunk[1] = *g;
                    chunk[2] = *b;
                }
                out
            }
            // the shape invariant leaves no other channel counts
            _ => vec![]
        }
    }
}
