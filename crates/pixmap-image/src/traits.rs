/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use log::trace;
use pixmap_core::colorspace::ColorSpace;

use crate::errors::ImageErrors;
use crate::image::Image;

/// This encapsulates an image operation.
///
/// The pipeline applies at most one operation per run, between
/// decoding and encoding.
pub trait OperationsTrait {
    /// Get the name of this operation
    fn name(&self) -> &'static str;

    /// Colorspaces the operation knows how to handle
    fn supported_colorspaces(&self) -> &'static [ColorSpace];

    /// Execute the operation on the image, manipulating the
    /// image struct
    ///
    /// # Errors
    /// Any operations error will be propagated to the caller
    fn execute_impl(&self, image: &mut Image) -> Result<(), ImageErrors>;

    /// Execute the operation after checking that the image colorspace
    /// is one the operation supports
    fn execute(&self, image: &mut Image) -> Result<(), ImageErrors> {
        let colorspace = image.colorspace();

        if !self.supported_colorspaces().contains(&colorspace) {
            return Err(ImageErrors::UnsupportedColorspace(
                colorspace,
                self.name(),
                self.supported_colorspaces()
            ));
        }
        trace!("Executing operation {}", self.name());

        self.execute_impl(image)
    }
}
