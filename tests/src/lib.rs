/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! End to end properties of the pixmap pipeline
//!
//! Tests here cross crate boundaries, driving decode, one operation
//! and encode together the way the command line tool does.

#[cfg(test)]
mod ops;
#[cfg(test)]
mod pnm;
