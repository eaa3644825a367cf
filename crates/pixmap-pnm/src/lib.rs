/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! A Portable Pixmap and Portable Graymap decoder and encoder
//!
//! The decoder understands the two color input variants, `P3`
//! (decimal text samples) and `P6` (raw byte samples), and keeps
//! header comments around so they can be written back out.
//!
//! The encoder emits all four output variants, `P3`/`P6` for three
//! channel color data and `P2`/`P5` for single channel grayscale data.
//!
//! # Example
//! ```
//! use pixmap_pnm::PnmDecoder;
//! let mut decoder = PnmDecoder::new(b"NOT A VALID PIXMAP");
//!
//! assert!(decoder.decode().is_err());
//! ```
use std::fmt::{Display, Formatter};

pub use crate::decoder::{PnmDecodeErrors, PnmDecoder};
pub use crate::encoder::{version_for, PnmEncoder, PnmErrors};

mod decoder;
mod encoder;

/// Recognized pixel-map format variants
///
/// `P3` and `P6` are the three channel color variants, with decimal
/// text and raw byte sample encoding respectively. `P2` and `P5` are
/// their single channel grayscale counterparts.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum PnmVersions {
    P2,
    P3,
    P5,
    P6
}

impl PnmVersions {
    /// Number of samples making up one pixel in this variant
    pub const fn num_components(self) -> usize {
        match self {
            Self::P3 | Self::P6 => 3,
            Self::P2 | Self::P5 => 1
        }
    }

    /// Return true if the variant stores samples as decimal text
    pub const fn is_ascii(self) -> bool {
        matches!(self, Self::P2 | Self::P3)
    }

    /// File extension conventionally carried by this variant
    pub const fn extension(self) -> &'static str {
        match self {
            Self::P3 | Self::P6 => "ppm",
            Self::P2 | Self::P5 => "pgm"
        }
    }
}

impl Display for PnmVersions {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::P2 => write!(f, "P2"),
            Self::P3 => write!(f, "P3"),
            Self::P5 => write!(f, "P5"),
            Self::P6 => write!(f, "P6")
        }
    }
}
