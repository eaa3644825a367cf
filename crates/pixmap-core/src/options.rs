/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Decoder options
//!
//! This module exposes a struct for which the decoder gets
//! shared options for decoding
//!

/// Decoder options
///
/// To remove the annoyance of getters and setters
/// all exposed options are declared public.
#[derive(Debug, Copy, Clone)]
pub struct DecoderOptions {
    /// Maximum width for which the decoder will
    /// not try to decode images larger than
    /// the specified width.
    ///
    /// - Default value: 16384
    pub max_width:   usize,
    /// Maximum height for which the decoder will not
    /// try to decode images larger than the
    /// specified height
    ///
    /// - Default value: 16384
    pub max_height:  usize,
    /// Treat recoverable header oddities as errors
    ///
    /// The legacy pixel-map readers echo the maximum sample value
    /// without ever checking the data against it. When set to true
    /// the decoder rejects samples above the declared maximum and
    /// maximum values that cannot be represented in 8 bits.
    ///
    /// When set to false such values are logged via the log crate
    /// and decoding continues.
    ///
    /// - Default value: false
    pub strict_mode: bool
}

impl Default for DecoderOptions {
    fn default() -> Self {
        Self {
            max_width:   1 << 14,
            max_height:  1 << 14,
            strict_mode: false
        }
    }
}
