/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use std::process::exit;

use log::error;

mod cmd_args;
mod cmd_parsers;
mod file_io;
mod probe_files;
mod serde;
mod workflow;

pub fn main() {
    let cmd = cmd_args::create_cmd_args();
    let options = cmd.get_matches();

    cmd_parsers::setup_logger(&options);

    if options.get_one::<String>("probe").is_some() {
        probe_files::probe_input_file(&options);
        return;
    }

    let result = workflow::convert_from_cmd(&options);

    if result.is_err() {
        println!();
        error!(
            " Could not complete workflow, reason {:?}",
            result.err().unwrap()
        );

        println!();
        exit(-1);
    }
}
