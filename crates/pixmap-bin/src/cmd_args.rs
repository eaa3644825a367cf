/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use clap::builder::PossibleValue;
use clap::{value_parser, Arg, ArgAction, ArgGroup, Command, ValueEnum};

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub(crate) enum MmapOptions {
    No,
    Always,
    Auto
}

impl ValueEnum for MmapOptions {
    fn value_variants<'a>() -> &'a [Self] {
        &[Self::No, Self::Auto, Self::Always]
    }

    fn to_possible_value(&self) -> Option<PossibleValue> {
        Some(match self {
            Self::No => PossibleValue::new("no"),
            Self::Always => PossibleValue::new("always"),
            Self::Auto => PossibleValue::new("auto")
        })
    }
}

#[rustfmt::skip]
pub(crate) fn create_cmd_args() -> Command {
    Command::new("pixmap")
        .about("Read a pixel-map image, optionally apply one transform and write it back out")
        .arg(Arg::new("basename")
            .help("Base name of the output file, the emitter picks the extension")
            .required_unless_present("probe"))
        .arg(Arg::new("in")
            .help("Input image file to read")
            .required_unless_present("probe"))
        .arg(Arg::new("ascii")
            .long("ascii")
            .action(ArgAction::SetTrue)
            .help_heading("OUTPUT TYPE")
            .help("Integer text numbers will be written for the data"))
        .arg(Arg::new("binary")
            .long("binary")
            .action(ArgAction::SetTrue)
            .help_heading("OUTPUT TYPE")
            .help("Integer numbers will be written in binary form"))
        .arg(Arg::new("flip-x")
            .long("flip-x")
            .action(ArgAction::SetTrue)
            .help_heading("OPERATIONS")
            .help("Flip the image across the horizontal axis"))
        .arg(Arg::new("flip-y")
            .long("flip-y")
            .action(ArgAction::SetTrue)
            .help_heading("OPERATIONS")
            .help("Flip the image across the vertical axis"))
        .arg(Arg::new("rotate-cw")
            .long("rotate-cw")
            .action(ArgAction::SetTrue)
            .help_heading("OPERATIONS")
            .help("Rotate the image clockwise"))
        .arg(Arg::new("rotate-ccw")
            .long("rotate-ccw")
            .action(ArgAction::SetTrue)
            .help_heading("OPERATIONS")
            .help("Rotate the image counterclockwise"))
        .arg(Arg::new("grayscale")
            .long("grayscale")
            .action(ArgAction::SetTrue)
            .help_heading("OPERATIONS")
            .help("Convert the image to grayscale")
            .long_help("Change image type from RGB to grayscale, the output becomes a single channel graymap"))
        .arg(Arg::new("sepia")
            .long("sepia")
            .action(ArgAction::SetTrue)
            .help_heading("OPERATIONS")
            .help("Antique a color image"))
        .arg(Arg::new("debug")
            .long("debug")
            .action(ArgAction::SetTrue)
            .help_heading("LOGGING")
            .help("Display debug information and higher"))
        .arg(Arg::new("trace")
            .long("trace")
            .action(ArgAction::SetTrue)
            .help_heading("LOGGING")
            .help("Display very verbose information"))
        .arg(Arg::new("warn")
            .long("warn")
            .action(ArgAction::SetTrue)
            .help_heading("LOGGING")
            .help("Display warnings and errors"))
        .arg(Arg::new("info")
            .long("info")
            .action(ArgAction::SetTrue)
            .help_heading("LOGGING")
            .help("Display information about the decoding options"))
        .arg(Arg::new("strict")
            .long("strict")
            .action(ArgAction::SetTrue)
            .help_heading("ADVANCED")
            .help("Treat recoverable decoder oddities as errors"))
        .arg(Arg::new("mmap")
            .long("mmap")
            .help_heading("ADVANCED")
            .help("Influence the use of memory maps")
            .long_help("Change use of memory maps and how they are used for decoding.\nMemory maps are preferred for large images to keep memory usage low.")
            .value_parser(value_parser!(MmapOptions)))
        .arg(Arg::new("probe")
            .long("probe")
            .value_name("FILE")
            .help_heading("ADVANCED")
            .help("Print image metadata as JSON and exit without converting"))
        .group(ArgGroup::new("operations")
            .args(["flip-x", "flip-y", "rotate-cw", "rotate-ccw", "grayscale", "sepia"]))
        .group(ArgGroup::new("encoding")
            .args(["ascii", "binary"]))
}
