/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Rotate an image by a quarter turn in either direction.
//!
//! A quarter turn swaps the image dimensions, so unlike the flips it
//! can never run in place, each channel is permuted into a freshly
//! allocated buffer.
use log::trace;
use pixmap_core::colorspace::ColorSpace;
use pixmap_image::channel::Channel;
use pixmap_image::errors::ImageErrors;
use pixmap_image::image::Image;
use pixmap_image::traits::OperationsTrait;

#[derive(Copy, Clone, Debug)]
pub enum RotateDirection {
    /// Rotate by 90 degrees clockwise
    ///
    /// ```text
    /// old image     new image
    /// ┌─────────┐   ┌─────┐
    /// │a b c d e│   │f a  │
    /// │f g h i j│   │g b  │
    /// └─────────┘   │h c  │
    ///               │i d  │
    ///               │j e  │
    ///               └─────┘
    /// ```
    Clockwise,
    /// Rotate by 90 degrees counter-clockwise
    ///
    /// ```text
    /// old image     new image
    /// ┌─────────┐   ┌─────┐
    /// │a b c d e│   │e j  │
    /// │f g h i j│   │d i  │
    /// └─────────┘   │c h  │
    ///               │b g  │
    ///               │a f  │
    ///               └─────┘
    /// ```
    CounterClockwise
}

/// Rotate an image by a quarter turn
pub struct Rotate {
    direction: RotateDirection
}

impl Rotate {
    /// Create a new rotate operation
    #[must_use]
    pub fn new(direction: RotateDirection) -> Rotate {
        Self { direction }
    }
}

impl OperationsTrait for Rotate {
    fn name(&self) -> &'static str {
        "Rotate"
    }

    fn supported_colorspaces(&self) -> &'static [ColorSpace] {
        &[ColorSpace::RGB, ColorSpace::Luma]
    }

    fn execute_impl(&self, image: &mut Image) -> Result<(), ImageErrors> {
        let (width, height) = image.dimensions();

        trace!("Rotating a {width}x{height} image {:?}", self.direction);

        let mut rotated = Vec::with_capacity(image.channels_ref().len());

        for channel in image.channels_ref() {
            let mut out = Channel::try_new(channel.len())?;

            match self.direction {
                RotateDirection::Clockwise => {
                    rotate_90_cw(channel.as_slice(), out.as_slice_mut(), width, height);
                }
                RotateDirection::CounterClockwise => {
                    rotate_90_ccw(channel.as_slice(), out.as_slice_mut(), width, height);
                }
            }
            rotated.push(out);
        }
        // a quarter turn swaps the dimensions
        image.replace_channels(rotated, height, width, image.colorspace())
    }
}

/// Rotate a single channel a quarter turn clockwise
///
/// Source pixel `(i,j)` lands on `(j, height-1-i)` in a matrix of
/// `height` columns, the result has shape `width x height`.
pub fn rotate_90_cw<T: Copy>(in_matrix: &[T], out_matrix: &mut [T], width: usize, height: usize) {
    let dimensions = width * height;

    assert_eq!(
        in_matrix.len(),
        dimensions,
        "In matrix dimensions do not match width and height"
    );
    assert_eq!(
        out_matrix.len(),
        dimensions,
        "Out matrix dimensions do not match width and height"
    );

    if width == 0 || height == 0 {
        return;
    }
    for (i, in_row) in in_matrix.chunks_exact(width).enumerate() {
        for (j, pixel) in in_row.iter().enumerate() {
            out_matrix[(j * height) + (height - 1 - i)] = *pixel;
        }
    }
}

/// Rotate a single channel a quarter turn counter-clockwise
///
/// Source pixel `(i,j)` lands on `(width-1-j, i)` in a matrix of
/// `height` columns, the result has shape `width x height`.
pub fn rotate_90_ccw<T: Copy>(in_matrix: &[T], out_matrix: &mut [T], width: usize, height: usize) {
    let dimensions = width * height;

    assert_eq!(
        in_matrix.len(),
        dimensions,
        "In matrix dimensions do not match width and height"
    );
    assert_eq!(
        out_matrix.len(),
        dimensions,
        "Out matrix dimensions do not match width and height"
    );

    if width == 0 || height == 0 {
        return;
    }
    for (i, in_row) in in_matrix.chunks_exact(width).enumerate() {
        for (j, pixel) in in_row.iter().enumerate() {
            out_matrix[((width - 1 - j) * height) + i] = *pixel;
        }
    }
}

#[cfg(test)]
mod tests {
    use nanorand::Rng;
    use pixmap_core::colorspace::ColorSpace;
    use pixmap_image::image::Image;
    use pixmap_image::traits::OperationsTrait;

    use super::*;

    #[test]
    fn clockwise_quarter_turn() {
        // 3x2 image
        // [1,2,3]    [4,1]
        // [4,5,6] -> [5,2]
        //            [6,3]
        let input: [u8; 6] = [1, 2, 3, 4, 5, 6];
        let mut out = [0_u8; 6];

        rotate_90_cw(&input, &mut out, 3, 2);

        assert_eq!(out, [4, 1, 5, 2, 6, 3]);
    }

    #[test]
    fn counter_clockwise_quarter_turn() {
        // [1,2,3]    [3,6]
        // [4,5,6] -> [2,5]
        //            [1,4]
        let input: [u8; 6] = [1, 2, 3, 4, 5, 6];
        let mut out = [0_u8; 6];

        rotate_90_ccw(&input, &mut out, 3, 2);

        assert_eq!(out, [3, 6, 2, 5, 1, 4]);
    }

    #[test]
    fn rotations_are_inverse_of_each_other() {
        let mut rng = nanorand::WyRand::new();

        let width: usize = 31;
        let height: usize = 17;

        let mut in_matrix: Vec<u8> = vec![0; width * height];
        rng.fill(&mut in_matrix);

        let mut cw = vec![0_u8; width * height];
        let mut back = vec![0_u8; width * height];

        rotate_90_cw(&in_matrix, &mut cw, width, height);
        // the intermediate has swapped dimensions
        rotate_90_ccw(&cw, &mut back, height, width);

        assert_eq!(in_matrix, back);

        rotate_90_ccw(&in_matrix, &mut cw, width, height);
        rotate_90_cw(&cw, &mut back, height, width);

        assert_eq!(in_matrix, back);
    }

    #[test]
    fn two_rows_one_column_scenario() {
        // rows=2, cols=1 with pixels (10,20,30) and (40,50,60)
        let image = Image::from_interleaved_u8(
            &[10, 20, 30, 40, 50, 60],
            1,
            2,
            ColorSpace::RGB
        )
        .unwrap();

        let mut rotated = image;
        Rotate::new(RotateDirection::Clockwise)
            .execute(&mut rotated)
            .unwrap();

        assert_eq!(rotated.dimensions(), (2, 1));
        assert_eq!(rotated.flatten_u8(), [40, 50, 60, 10, 20, 30]);
    }

    #[test]
    fn empty_image_rotates_to_empty_image() {
        let mut out: [u8; 0] = [];

        rotate_90_cw::<u8>(&[], &mut out, 0, 0);
        rotate_90_ccw::<u8>(&[], &mut out, 0, 3);
    }
}
