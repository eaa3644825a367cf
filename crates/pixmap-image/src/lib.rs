/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! The image container shared by the pixmap pipeline
//!
//! An image is represented as
//!
//! - separated channels of 8 bit samples
//!     - representing a colorspace
//!         - with the same width and height
//!
//! plus the header metadata (comments, maximum sample value) that the
//! codec carries from input to output.
//!
//! One image exists per program run, it is built once by the decoder,
//! optionally reshaped by a single operation and then consumed by the
//! encoder.

pub mod channel;
pub mod codecs;
pub mod deinterleave;
pub mod errors;
pub mod image;
pub mod metadata;
pub mod traits;
