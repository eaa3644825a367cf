/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use clap::ArgMatches;
use log::error;
use pixmap_core::options::DecoderOptions;
use pixmap_image::codecs::guess_format;
use pixmap_pnm::PnmDecoder;

use crate::serde::Metadata;

/// Probe the input file, extract metadata, and print to standard output.
pub(crate) fn probe_input_file(args: &ArgMatches) {
    let Some(in_file) = args.get_one::<String>("probe") else {
        return;
    };

    let contents = match std::fs::read(in_file) {
        Ok(contents) => contents,
        Err(err) => {
            error!("Cannot read {in_file}: {err}");
            return;
        }
    };

    if guess_format(&contents).is_none() {
        error!("{in_file} does not hold a recognized pixel-map");
        return;
    }

    // only headers are read so the dimension limits do not matter,
    // lift them
    let options = DecoderOptions {
        max_width: usize::MAX,
        max_height: usize::MAX,
        ..DecoderOptions::default()
    };
    let mut decoder = PnmDecoder::new_with_options(options, &contents);

    match decoder.read_headers() {
        Ok(()) => {
            let metadata = Metadata::new(in_file, contents.len(), &decoder);

            match serde_json::to_string_pretty(&metadata) {
                Ok(json) => println!("{json}"),
                Err(err) => error!("Cannot serialize metadata: {err}")
            }
        }
        Err(err) => error!("Cannot read headers from {in_file}: {err:?}")
    }
}
