/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use clap::ArgMatches;
use log::{debug, info, Level};
use pixmap_core::options::DecoderOptions;
use pixmap_image::traits::OperationsTrait;
use pixmap_imageprocs::flip::{Flip, FlipDirection};
use pixmap_imageprocs::grayscale::RgbToGrayscale;
use pixmap_imageprocs::rotate::{Rotate, RotateDirection};
use pixmap_imageprocs::sepia::Sepia;

pub(crate) fn setup_logger(options: &ArgMatches) {
    let log_level;

    if *options.get_one::<bool>("debug").unwrap() {
        log_level = Level::Debug;
    } else if *options.get_one::<bool>("trace").unwrap() {
        log_level = Level::Trace;
    } else if *options.get_one::<bool>("warn").unwrap() {
        log_level = Level::Warn
    } else if *options.get_one::<bool>("info").unwrap() {
        log_level = Level::Info;
    } else {
        log_level = Level::Warn;
    }

    simple_logger::init_with_level(log_level).unwrap();

    info!("Initialized logger");
    info!("Log level :{}", log_level);
}

pub(crate) fn decoder_options(args: &ArgMatches) -> DecoderOptions {
    DecoderOptions {
        strict_mode: args.get_flag("strict"),
        ..DecoderOptions::default()
    }
}

/// Map the operation flag, if any, to the operation it stands for
///
/// The argument groups already guarantee at most one flag is set.
pub(crate) fn selected_operation(args: &ArgMatches) -> Option<Box<dyn OperationsTrait>> {
    if args.get_flag("flip-x") {
        debug!("Added flip across the horizontal axis");
        return Some(Box::new(Flip::new(FlipDirection::Horizontal)));
    }
    if args.get_flag("flip-y") {
        debug!("Added flip across the vertical axis");
        return Some(Box::new(Flip::new(FlipDirection::Vertical)));
    }
    if args.get_flag("rotate-cw") {
        debug!("Added clockwise rotation");
        return Some(Box::new(Rotate::new(RotateDirection::Clockwise)));
    }
    if args.get_flag("rotate-ccw") {
        debug!("Added counterclockwise rotation");
        return Some(Box::new(Rotate::new(RotateDirection::CounterClockwise)));
    }
    if args.get_flag("grayscale") {
        debug!("Added grayscale operation");
        return Some(Box::new(RgbToGrayscale::new()));
    }
    if args.get_flag("sepia") {
        debug!("Added sepia operation");
        return Some(Box::new(Sepia::new()));
    }
    None
}
