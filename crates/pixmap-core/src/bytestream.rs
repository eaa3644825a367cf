/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! A simple implementation of a bytestream reader
//!
//! Useful for format readers that mix token based and raw
//! byte based parsing, it's put here to minimize code reuse
pub use reader::ByteReader;

mod reader;
