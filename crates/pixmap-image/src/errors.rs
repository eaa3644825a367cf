/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Errors possible during image processing
use std::fmt::{Debug, Formatter};
use std::path::PathBuf;

use pixmap_core::colorspace::ColorSpace;
use pixmap_pnm::{PnmDecodeErrors, PnmErrors};

use crate::channel::ChannelErrors;

/// All possible image errors that can occur.
///
/// This is the grandfather of image errors and contains
/// all decoding, processing and encoding errors possible
pub enum ImageErrors {
    /// The input path could not be opened for reading
    FileOpen(PathBuf, std::io::Error),
    PnmDecodeErrors(PnmDecodeErrors),
    EncodeErrors(PnmErrors),
    /// Channel storage could not be allocated, (samples requested)
    AllocationFailed(usize),
    /// Channel lengths do not agree with dimensions, (expected, found)
    DimensionsMisMatch(usize, usize),
    UnsupportedColorspace(ColorSpace, &'static str, &'static [ColorSpace]),
    IoErrors(std::io::Error),
    GenericString(String),
    GenericStr(&'static str)
}

impl Debug for ImageErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::FileOpen(path, err) => {
                writeln!(f, "Unable to open input file {path:?}: {err}")
            }
            Self::PnmDecodeErrors(ref error) => {
                writeln!(f, "Pixel-map decoding failed: {error:?}")
            }
            Self::EncodeErrors(ref error) => {
                writeln!(f, "Pixel-map encoding failed: {error:?}")
            }
            Self::AllocationFailed(length) => {
                writeln!(f, "Could not allocate a channel of {length} samples")
            }
            Self::DimensionsMisMatch(expected, found) => {
                writeln!(f, "Dimensions mismatch, expected {expected} but found {found}")
            }
            Self::UnsupportedColorspace(present, operation, supported) => {
                writeln!(f,"Unsupported colorspace {present:?}, for the operation {operation}\nSupported colorspaces are {supported:?}")
            }
            Self::IoErrors(err) => {
                writeln!(f, "Underlying I/O error: {err}")
            }
            Self::GenericString(err) => {
                writeln!(f, "{err}")
            }
            Self::GenericStr(err) => {
                writeln!(f, "{err}")
            }
        }
    }
}

impl From<PnmDecodeErrors> for ImageErrors {
    fn from(from: PnmDecodeErrors) -> Self {
        ImageErrors::PnmDecodeErrors(from)
    }
}

impl From<PnmErrors> for ImageErrors {
    fn from(from: PnmErrors) -> Self {
        ImageErrors::EncodeErrors(from)
    }
}

impl From<ChannelErrors> for ImageErrors {
    fn from(from: ChannelErrors) -> Self {
        match from {
            ChannelErrors::AllocationFailed(length) => ImageErrors::AllocationFailed(length)
        }
    }
}

impl From<std::io::Error> for ImageErrors {
    fn from(from: std::io::Error) -> Self {
        ImageErrors::IoErrors(from)
    }
}

impl From<String> for ImageErrors {
    fn from(s: String) -> ImageErrors {
        ImageErrors::GenericString(s)
    }
}

impl From<&'static str> for ImageErrors {
    fn from(s: &'static str) -> ImageErrors {
        ImageErrors::GenericStr(s)
    }
}
