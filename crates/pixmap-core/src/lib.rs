/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Core routines shared by the pixmap family of crates
//!
//! This crate provides the small set of primitives the codec,
//! the image container and the processing routines all agree on.
//!
//! It currently contains
//!
//! - A positionable bytestream reader used by the decoder
//! - Colorspace information shared by images
//! - Decoder options
//!
//! # Features
//! - `serde`: Enables serializing of some of the data structures
//!   present in the crate

pub mod bytestream;
pub mod colorspace;
pub mod options;
#[cfg(feature = "serde")]
pub mod serde;
