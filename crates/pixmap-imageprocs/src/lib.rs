/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Image processing routines for pixmap images
//!
//! Every operation here is a pure mapping from one set of channels
//! plus dimensions to a new set, the permutations write into fresh
//! buffers and never alias their input, the image is only updated
//! once the whole result exists.
//!
//! Operations implement
//! [`OperationsTrait`](pixmap_image::traits::OperationsTrait) and are
//! applied at most once per pipeline run.

pub mod flip;
pub mod grayscale;
pub mod rotate;
pub mod sepia;
