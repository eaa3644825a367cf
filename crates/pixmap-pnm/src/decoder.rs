/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use std::fmt::{Debug, Formatter};

use log::{info, warn};
use pixmap_core::bytestream::ByteReader;
use pixmap_core::colorspace::ColorSpace;
use pixmap_core::options::DecoderOptions;

use crate::PnmVersions;

/// An instance of a pixel-map decoder
///
/// The decoder can currently decode the P3 and P6 input variants
pub struct PnmDecoder<'a> {
    width:           usize,
    height:          usize,
    decoded_headers: bool,
    reader:          ByteReader<'a>,
    colorspace:      ColorSpace,
    version:         PnmVersions,
    comments:        Vec<String>,
    max_value:       usize,
    options:         DecoderOptions
}

/// Errors possible when decoding a pixel-map stream
pub enum PnmDecodeErrors {
    Generic(String),
    GenericStatic(&'static str),
    /// The magic token is neither recognized input variant
    InvalidMagic(String),
    /// The dimensions or maximum value tokens are absent or not numbers
    MalformedHeader(String),
    /// Fewer samples available than the header promised, (expected, found)
    TruncatedData(usize, usize),
    /// A dimension above the decoder limits, (expected, found)
    LargeDimensions(usize, usize),
    /// A sample above the declared maximum, (maximum, found).
    /// Only raised under strict mode
    SampleOutOfRange(usize, usize)
}

impl Debug for PnmDecodeErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Generic(val) => {
                writeln!(f, "{val}")
            }
            Self::GenericStatic(val) => writeln!(f, "{val}"),
            Self::InvalidMagic(val) => {
                writeln!(f, "Invalid magic token, reason: {val}")
            }
            Self::MalformedHeader(val) => {
                writeln!(f, "Malformed header, reason: {val}")
            }
            Self::TruncatedData(expected, found) => {
                writeln!(
                    f,
                    "Truncated sample data, expected {expected} samples but stream ended after {found}"
                )
            }
            Self::LargeDimensions(expected, found) => {
                writeln!(
                    f,
                    "Too large dimensions, expected a value less than {expected} but found {found}"
                )
            }
            Self::SampleOutOfRange(maximum, found) => {
                writeln!(
                    f,
                    "Sample value {found} is above the declared maximum {maximum}"
                )
            }
        }
    }
}

impl<'a> PnmDecoder<'a> {
    /// Create a new pixel-map decoder with default options
    ///
    /// # Arguments
    /// - data: Pixel-map encoded bytes
    pub fn new(data: &'a [u8]) -> PnmDecoder<'a> {
        PnmDecoder::new_with_options(DecoderOptions::default(), data)
    }

    /// Create a new pixel-map decoder with the specified options
    ///
    /// # Arguments
    /// - options: Modified options for the decoder
    /// - data: Pixel-map encoded bytes
    pub fn new_with_options(options: DecoderOptions, data: &'a [u8]) -> PnmDecoder<'a> {
        let reader = ByteReader::new(data);

        PnmDecoder {
            width: 0,
            height: 0,
            decoded_headers: false,
            reader,
            colorspace: ColorSpace::Unknown,
            version: PnmVersions::P3,
            comments: vec![],
            max_value: 0,
            options
        }
    }

    /// Read pixel-map headers and store them in internal state
    ///
    /// No sample storage is touched before the magic token has been
    /// accepted, a stream opening with an unknown token is rejected
    /// without a single buffer allocation.
    pub fn read_headers(&mut self) -> Result<(), PnmDecodeErrors> {
        if self.decoded_headers {
            return Ok(());
        }
        if !self.reader.has(2) {
            let len = self.reader.remaining();
            let msg = format!("Expected at least 2 bytes in header but stream has {len}");

            return Err(PnmDecodeErrors::Generic(msg));
        }
        // the first whitespace delimited token selects the variant
        let magic = read_token(&mut self.reader);

        let version = match magic {
            b"P3" => PnmVersions::P3,
            b"P6" => PnmVersions::P6,
            _ => {
                let msg = format!(
                    "Unsupported magic token `{}`, supported input tokens are P3 and P6",
                    String::from_utf8_lossy(magic)
                );

                return Err(PnmDecodeErrors::InvalidMagic(msg));
            }
        };
        // exactly one delimiter byte separates the magic token from the
        // rest of the header
        self.reader.skip(1);

        self.version = version;
        self.colorspace = ColorSpace::RGB;

        info!("Version: {:?}", self.version);
        info!("Colorspace: {:?}", self.colorspace);

        // every line opening with `#` is a comment line, kept verbatim so
        // the encoder can write it back out, the first line that is not a
        // comment carries the dimensions
        let dims_line = loop {
            if self.reader.eof() {
                return Err(PnmDecodeErrors::MalformedHeader(
                    "No dimensions line found before end of stream".to_string()
                ));
            }
            let line = read_line(&mut self.reader);

            if line.first() == Some(&b'#') {
                self.comments
                    .push(String::from_utf8_lossy(line).into_owned());
            } else {
                break line;
            }
        };
        let (width, height) = parse_dimensions(dims_line)?;

        if width > self.options.max_width {
            return Err(PnmDecodeErrors::LargeDimensions(
                self.options.max_width,
                width
            ));
        }
        if height > self.options.max_height {
            return Err(PnmDecodeErrors::LargeDimensions(
                self.options.max_height,
                height
            ));
        }
        self.width = width;
        self.height = height;

        skip_spaces(&mut self.reader);

        let max_value = parse_integer(read_token(&mut self.reader))?;

        if max_value > 255 {
            if self.options.strict_mode {
                return Err(PnmDecodeErrors::MalformedHeader(format!(
                    "Maximum sample value {max_value} does not fit in 8 bits"
                )));
            }
            // the value is echoed to output untouched, samples are
            // still read as single bytes
            warn!("Maximum sample value {max_value} does not fit in 8 bits");
        }
        self.max_value = max_value;
        self.decoded_headers = true;

        info!("Width: {}, height: {}", self.width, self.height);
        info!("Maximum sample value: {}", self.max_value);

        Ok(())
    }

    /// Decode a pixel-map stream and return the interleaved samples
    ///
    /// Samples are laid out `[R,G,B,R,G,B]` in row-major pixel order,
    /// the same interleaving both input variants use on the wire.
    pub fn decode(&mut self) -> Result<Vec<u8>, PnmDecodeErrors> {
        self.read_headers()?;

        let size = self
            .width
            .checked_mul(self.height)
            .and_then(|x| x.checked_mul(self.colorspace.num_components()))
            .ok_or(PnmDecodeErrors::GenericStatic(
                "Image dimensions overflow a usize"
            ))?;

        match self.version {
            PnmVersions::P3 => self.decode_ascii(size),
            PnmVersions::P6 => self.decode_raw(size),
            _ => Err(PnmDecodeErrors::GenericStatic("Unsupported input variant"))
        }
    }

    fn decode_ascii(&mut self, size: usize) -> Result<Vec<u8>, PnmDecodeErrors> {
        let mut data = vec![0_u8; size];

        for (count, sample) in data.iter_mut().enumerate() {
            skip_spaces(&mut self.reader);

            if self.reader.eof() {
                return Err(PnmDecodeErrors::TruncatedData(size, count));
            }
            let token = read_token(&mut self.reader);

            let value = match parse_integer(token) {
                Ok(value) => value,
                // a token we cannot read a number from means no further
                // samples can be produced
                Err(_) => return Err(PnmDecodeErrors::TruncatedData(size, count))
            };

            if self.options.strict_mode && value > self.max_value {
                return Err(PnmDecodeErrors::SampleOutOfRange(self.max_value, value));
            }
            // the legacy readers narrow to a byte, keep that in
            // permissive mode
            *sample = value as u8;
        }
        Ok(data)
    }

    fn decode_raw(&mut self, size: usize) -> Result<Vec<u8>, PnmDecodeErrors> {
        // exactly one delimiter byte separates the maximum value token
        // from the raw samples
        self.reader.skip(1);

        let remaining = self.reader.remaining();

        if remaining < size {
            return Err(PnmDecodeErrors::TruncatedData(size, remaining));
        }
        let mut data = vec![0_u8; size];

        match self.reader.get_as_ref(size) {
            Ok(bytes) => data.copy_from_slice(bytes),
            Err(e) => return Err(PnmDecodeErrors::GenericStatic(e))
        }

        if self.options.strict_mode && self.max_value < 255 {
            let maximum = self.max_value;

            if let Some(bad) = data.iter().find(|x| usize::from(**x) > maximum) {
                return Err(PnmDecodeErrors::SampleOutOfRange(maximum, usize::from(*bad)));
            }
        }
        Ok(data)
    }

    /// Return image dimensions as `(width, height)` or none if headers
    /// are not decoded
    pub const fn dimensions(&self) -> Option<(usize, usize)> {
        if self.decoded_headers {
            Some((self.width, self.height))
        } else {
            None
        }
    }

    /// Return the image colorspace or none if headers aren't decoded
    pub const fn colorspace(&self) -> Option<ColorSpace> {
        if self.decoded_headers {
            Some(self.colorspace)
        } else {
            None
        }
    }

    /// Return the input variant or none if headers aren't decoded
    pub const fn version(&self) -> Option<PnmVersions> {
        if self.decoded_headers {
            Some(self.version)
        } else {
            None
        }
    }

    /// Maximum sample value declared by the header
    ///
    /// The value is read from input and meant to be echoed to output
    /// unmodified, it is not enforced against the actual data unless
    /// strict mode is on.
    pub const fn max_value(&self) -> Option<usize> {
        if self.decoded_headers {
            Some(self.max_value)
        } else {
            None
        }
    }

    /// Comment lines found in the header, verbatim and in order
    pub fn comments(&self) -> &[String] {
        &self.comments
    }

    /// Move the comment lines out of the decoder
    pub fn take_comments(&mut self) -> Vec<String> {
        core::mem::take(&mut self.comments)
    }
}

/// Skip all whitespace characters until one hits a character that
/// isn't a space or we reach eof
fn skip_spaces(reader: &mut ByteReader) {
    while let Some(byte) = reader.peek_u8() {
        if byte.is_ascii_whitespace() {
            reader.skip(1);
        } else {
            break;
        }
    }
}

/// Return a reference to all bytes preceding a whitespace.
///
/// The terminating whitespace byte is left in the stream.
fn read_token<'a>(reader: &mut ByteReader<'a>) -> &'a [u8] {
    let start = reader.position();

    while !reader.eof() {
        let byte = reader.get_u8();

        if byte.is_ascii_whitespace() {
            reader.rewind(1);
            break;
        }
    }
    let end = reader.position();

    reader.rewind(end - start);
    // the range was just walked so it is in bounds
    reader.get_as_ref(end - start).unwrap_or(&[])
}

/// Read one line, consuming its terminator.
///
/// The returned slice excludes the terminator, tolerating both
/// `\n` and `\r\n` line endings.
fn read_line<'a>(reader: &mut ByteReader<'a>) -> &'a [u8] {
    let start = reader.position();

    while !reader.eof() {
        if reader.get_u8() == b'\n' {
            break;
        }
    }
    let end = reader.position();

    reader.rewind(end - start);

    let mut line = reader.get_as_ref(end - start).unwrap_or(&[]);

    if line.last() == Some(&b'\n') {
        line = &line[..line.len() - 1];
    }
    if line.last() == Some(&b'\r') {
        line = &line[..line.len() - 1];
    }
    line
}

/// Parse the dimensions line, whose grammar is `COLS WS ROWS`.
///
/// The legacy readers split on the first space only, which
/// mis-reads lines with repeated interior blanks, the tokenizer here
/// accepts any amount of blank space between the two fields and
/// rejects everything else.
fn parse_dimensions(line: &[u8]) -> Result<(usize, usize), PnmDecodeErrors> {
    let mut fields = line
        .split(|x| x.is_ascii_whitespace())
        .filter(|x| !x.is_empty());

    let cols = fields.next();
    let rows = fields.next();
    let excess = fields.next();

    match (cols, rows, excess) {
        (Some(cols), Some(rows), None) => Ok((parse_integer(cols)?, parse_integer(rows)?)),
        _ => Err(PnmDecodeErrors::MalformedHeader(format!(
            "Expected `columns rows` in dimensions line but found `{}`",
            String::from_utf8_lossy(line)
        )))
    }
}

/// Parse a token holding a non-negative decimal integer
fn parse_integer(token: &[u8]) -> Result<usize, PnmDecodeErrors> {
    if token.is_empty() || !token.iter().all(u8::is_ascii_digit) {
        return Err(PnmDecodeErrors::MalformedHeader(format!(
            "`{}` is not a number",
            String::from_utf8_lossy(token)
        )));
    }
    let mut value = 0_usize;

    for byte in token {
        // if it overflows, we have bigger problems.
        value = value.wrapping_mul(10).wrapping_add(usize::from(byte - b'0'));
    }
    Ok(value)
}
