/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Flip filter: mirror an image across one of its axes.
//!
use log::trace;
use pixmap_core::colorspace::ColorSpace;
use pixmap_image::channel::Channel;
use pixmap_image::errors::ImageErrors;
use pixmap_image::image::Image;
use pixmap_image::traits::OperationsTrait;

#[derive(Copy, Clone, Debug)]
pub enum FlipDirection {
    /// Mirror across the horizontal axis, reversing the row order
    ///
    /// ```text
    /// old image     new image
    /// ┌─────────┐   ┌──────────┐
    /// │a b c d e│   │f g h i j │
    /// │f g h i j│   │a b c d e │
    /// └─────────┘   └──────────┘
    /// ```
    Horizontal,
    /// Mirror across the vertical axis, reversing the column order
    ///
    /// ```text
    /// old image     new image
    /// ┌─────────┐   ┌──────────┐
    /// │a b c d e│   │e d c b a │
    /// │f g h i j│   │j i h g f │
    /// └─────────┘   └──────────┘
    /// ```
    Vertical
}

/// Flip an image across a certain axis
pub struct Flip {
    direction: FlipDirection
}

impl Flip {
    /// Create a new flip operation
    #[must_use]
    pub fn new(direction: FlipDirection) -> Flip {
        Self { direction }
    }
}

impl OperationsTrait for Flip {
    fn name(&self) -> &'static str {
        "Flip"
    }

    fn supported_colorspaces(&self) -> &'static [ColorSpace] {
        &[ColorSpace::RGB, ColorSpace::Luma]
    }

    fn execute_impl(&self, image: &mut Image) -> Result<(), ImageErrors> {
        let (width, height) = image.dimensions();

        trace!("Flipping a {width}x{height} image {:?}", self.direction);

        let mut flipped = Vec::with_capacity(image.channels_ref().len());

        for channel in image.channels_ref() {
            let mut out = Channel::try_new(channel.len())?;

            match self.direction {
                FlipDirection::Horizontal => {
                    flip_rows(channel.as_slice(), out.as_slice_mut(), width);
                }
                FlipDirection::Vertical => {
                    flip_cols(channel.as_slice(), out.as_slice_mut(), width);
                }
            }
            flipped.push(out);
        }
        image.replace_channels(flipped, width, height, image.colorspace())
    }
}

/// Reverse the row order of a single channel
///
/// ```text
/// old image     new image
/// ┌─────────┐   ┌──────────┐
/// │a b c d e│   │f g h i j │
/// │f g h i j│   │a b c d e │
/// └─────────┘   └──────────┘
/// ```
pub fn flip_rows<T: Copy>(in_matrix: &[T], out_matrix: &mut [T], width: usize) {
    assert_eq!(in_matrix.len(), out_matrix.len());

    if width == 0 {
        return;
    }
    assert_eq!(
        in_matrix.len() % width,
        0,
        "Width does not evenly divide image"
    );
    for (in_row, out_row) in in_matrix
        .chunks_exact(width)
        .zip(out_matrix.chunks_exact_mut(width).rev())
    {
        out_row.copy_from_slice(in_row);
    }
}

/// Reverse the column order of a single channel
///
/// ```text
/// old image     new image
/// ┌─────────┐   ┌──────────┐
/// │a b c d e│   │e d c b a │
/// │f g h i j│   │j i h g f │
/// └─────────┘   └──────────┘
/// ```
pub fn flip_cols<T: Copy>(in_matrix: &[T], out_matrix: &mut [T], width: usize) {
    assert_eq!(in_matrix.len(), out_matrix.len());

    if width == 0 {
        return;
    }
    assert_eq!(
        in_matrix.len() % width,
        0,
        "Width does not evenly divide image"
    );
    for (in_row, out_row) in in_matrix
        .chunks_exact(width)
        .zip(out_matrix.chunks_exact_mut(width))
    {
        for (pixel, out) in in_row.iter().zip(out_row.iter_mut().rev()) {
            *out = *pixel;
        }
    }
}
