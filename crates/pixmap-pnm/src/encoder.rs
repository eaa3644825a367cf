/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use std::fmt::{Debug, Formatter};
use std::io;
use std::io::{Error, Write};

use pixmap_core::colorspace::ColorSpace;

use crate::PnmVersions;

/// Errors occurring during encoding
pub enum PnmErrors {
    Static(&'static str),
    IoErrors(io::Error)
}

impl From<io::Error> for PnmErrors {
    fn from(err: Error) -> Self {
        PnmErrors::IoErrors(err)
    }
}

impl Debug for PnmErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            PnmErrors::Static(ref errors) => {
                writeln!(f, "{errors}")
            }
            PnmErrors::IoErrors(ref err) => {
                writeln!(f, "{err}")
            }
        }
    }
}

/// A pixel-map encoder
///
/// One encoder drives all four output variants, the variant passed
/// to [`encode`](Self::encode) selects channel count and whether
/// samples are written as decimal text or raw bytes.
pub struct PnmEncoder<'a, W: Write> {
    writer: &'a mut W
}

impl<'a, W: Write> PnmEncoder<'a, W> {
    /// Create a new pixel-map encoder that writes to `writer`
    pub fn new(writer: &'a mut W) -> PnmEncoder<'a, W> {
        Self { writer }
    }

    /// Write the header shared by every variant: the magic token,
    /// comment lines kept from decode time, `columns rows` and the
    /// maximum sample value.
    fn write_headers(
        &mut self, version: PnmVersions, width: usize, height: usize, comments: &[String],
        max_value: usize
    ) -> Result<(), PnmErrors> {
        let mut header = format!("{version}\n");

        for comment in comments {
            header.push_str(comment);
            header.push('\n');
        }
        header.push_str(&format!("{width} {height}\n{max_value}\n"));

        self.writer.write_all(header.as_bytes())?;

        Ok(())
    }

    /// Encode `data` as an 8 bit pixel-map file
    ///
    /// `data` must be interleaved according to the channel count of
    /// `version`, i.e `[R,G,B,R,G,B]` for the color variants, in
    /// row-major pixel order.
    pub fn encode(
        &mut self, version: PnmVersions, width: usize, height: usize, comments: &[String],
        max_value: usize, data: &[u8]
    ) -> Result<(), PnmErrors> {
        if width * height * version.num_components() != data.len() {
            return Err(PnmErrors::Static(
                "Data length does not match image dimensions"
            ));
        }
        self.write_headers(version, width, height, comments, max_value)?;

        if version.is_ascii() {
            self.encode_ascii(data)
        } else {
            self.encode_raw(data)
        }
    }

    /// Every sample becomes a decimal integer on a line of its own
    fn encode_ascii(&mut self, data: &[u8]) -> Result<(), PnmErrors> {
        // four bytes per sample covers `255\n`
        let mut out = String::with_capacity(data.len() * 4);

        for sample in data {
            out.push_str(&sample.to_string());
            out.push('\n');
        }
        self.writer.write_all(out.as_bytes())?;

        Ok(())
    }

    fn encode_raw(&mut self, data: &[u8]) -> Result<(), PnmErrors> {
        self.writer.write_all(data)?;

        Ok(())
    }
}

/// Select the output variant for a colorspace and sample encoding pair
///
/// Returns None if the colorspace has no pixel-map representation
pub fn version_for(colorspace: ColorSpace, ascii: bool) -> Option<PnmVersions> {
    match (colorspace, ascii) {
        (ColorSpace::RGB, true) => Some(PnmVersions::P3),
        (ColorSpace::RGB, false) => Some(PnmVersions::P6),
        (ColorSpace::Luma, true) => Some(PnmVersions::P2),
        (ColorSpace::Luma, false) => Some(PnmVersions::P5),
        _ => None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ascii_color_layout() {
        let mut sink = vec![];
        let mut encoder = PnmEncoder::new(&mut sink);

        let comments = vec!["# made by hand".to_string()];

        encoder
            .encode(PnmVersions::P3, 2, 1, &comments, 255, &[1, 2, 3, 255, 50, 60])
            .unwrap();

        assert_eq!(
            sink,
            b"P3\n# made by hand\n2 1\n255\n1\n2\n3\n255\n50\n60\n"
        );
    }

    #[test]
    fn raw_color_layout() {
        let mut sink = vec![];
        let mut encoder = PnmEncoder::new(&mut sink);

        encoder
            .encode(PnmVersions::P6, 1, 2, &[], 255, &[9, 8, 7, 6, 5, 4])
            .unwrap();

        assert_eq!(sink, b"P6\n1 2\n255\n\x09\x08\x07\x06\x05\x04");
    }

    #[test]
    fn grayscale_variants_take_one_channel() {
        let mut ascii_sink = vec![];
        PnmEncoder::new(&mut ascii_sink)
            .encode(PnmVersions::P2, 2, 2, &[], 255, &[0, 100, 200, 255])
            .unwrap();

        assert_eq!(ascii_sink, b"P2\n2 2\n255\n0\n100\n200\n255\n");

        let mut raw_sink = vec![];
        PnmEncoder::new(&mut raw_sink)
            .encode(PnmVersions::P5, 2, 2, &[], 255, &[0, 100, 200, 255])
            .unwrap();

        assert_eq!(raw_sink, b"P5\n2 2\n255\n\x00\x64\xC8\xFF");
    }

    #[test]
    fn length_mismatch_is_rejected() {
        let mut sink: Vec<u8> = vec![];
        let mut encoder = PnmEncoder::new(&mut sink);

        let result = encoder.encode(PnmVersions::P3, 2, 2, &[], 255, &[1, 2, 3]);

        assert!(matches!(result, Err(PnmErrors::Static(_))));
        assert!(sink.is_empty());
    }
}
