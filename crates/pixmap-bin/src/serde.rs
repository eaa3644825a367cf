/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use pixmap_pnm::PnmDecoder;
use serde::ser::SerializeStruct;
use serde::{Serialize, Serializer};

/// Decoded header metadata paired with the file it came from
pub(crate) struct Metadata<'a> {
    file:    &'a str,
    size:    usize,
    decoder: &'a PnmDecoder<'a>
}

impl<'a> Metadata<'a> {
    pub fn new(file: &'a str, size: usize, decoder: &'a PnmDecoder<'a>) -> Metadata<'a> {
        Metadata { file, size, decoder }
    }
}

impl Serialize for Metadata<'_> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer
    {
        let (width, height) = self.decoder.dimensions().unwrap_or((0, 0));

        let format = match self.decoder.version() {
            Some(version) => version.to_string(),
            None => "unknown".to_string()
        };

        let mut state = serializer.serialize_struct("ImageMetadata", 8)?;

        state.serialize_field("file", self.file)?;
        state.serialize_field("size", &self.size)?;
        state.serialize_field("format", &format)?;
        state.serialize_field("width", &width)?;
        state.serialize_field("height", &height)?;
        state.serialize_field("colorspace", &self.decoder.colorspace())?;
        state.serialize_field("max_value", &self.decoder.max_value())?;
        state.serialize_field("comments", &self.decoder.comments())?;

        state.end()
    }
}
