/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use std::path::{Path, PathBuf};

use clap::ArgMatches;
use log::{debug, info};
use pixmap_image::errors::ImageErrors;
use pixmap_image::image::Image;
use pixmap_pnm::version_for;

use crate::cmd_args::MmapOptions;
use crate::{cmd_parsers, file_io};

/// Run the whole pipeline for one invocation
///
/// Decode, apply the single selected operation if any, then encode
/// through the emitter picked by the output type flags and the image
/// colorspace.
pub(crate) fn convert_from_cmd(args: &ArgMatches) -> Result<(), ImageErrors> {
    let in_file = args
        .get_one::<String>("in")
        .ok_or(ImageErrors::GenericStr("No input file given"))?;

    let mmap_opt = args
        .get_one::<MmapOptions>("mmap")
        .copied()
        .unwrap_or(MmapOptions::Auto);

    info!("Reading {in_file}");
    let data = file_io::read_input(Path::new(in_file), mmap_opt)?;

    let options = cmd_parsers::decoder_options(args);

    let mut image = Image::decode_pnm(data.as_bytes(), options)?;

    if let Some(operation) = cmd_parsers::selected_operation(args) {
        debug!("Applying {}", operation.name());
        operation.execute(&mut image)?;
    }

    let ascii = if args.get_flag("ascii") {
        true
    } else if args.get_flag("binary") {
        false
    } else {
        return Err(ImageErrors::GenericStr(
            "Specify one of --ascii or --binary for the output type"
        ));
    };

    let version = version_for(image.colorspace(), ascii).ok_or(ImageErrors::GenericStr(
        "No output variant can hold this image"
    ))?;

    let basename = args
        .get_one::<String>("basename")
        .ok_or(ImageErrors::GenericStr("No output basename given"))?;

    let out_path = PathBuf::from(format!("{basename}.{}", version.extension()));

    info!("Writing output to {out_path:?}");

    file_io::write_output(&out_path, |writer| image.encode_pnm(writer, version))
}
