/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Read, Write};
use std::path::{Path, PathBuf};

use log::info;
use memmap2::Mmap;
use pixmap_image::errors::ImageErrors;

use crate::cmd_args::MmapOptions;

/// Bytes of an input file, either memory mapped or read to memory
pub(crate) enum InputData {
    Mapped(Mmap),
    Buffered(Vec<u8>)
}

impl InputData {
    pub(crate) fn as_bytes(&self) -> &[u8] {
        match self {
            InputData::Mapped(map) => map,
            InputData::Buffered(buf) => buf
        }
    }
}

/// Open and read the whole input file
///
/// Memory maps are preferred for large files to keep memory usage low.
pub(crate) fn read_input(path: &Path, mmap_opt: MmapOptions) -> Result<InputData, ImageErrors> {
    let mut fd =
        File::open(path).map_err(|err| ImageErrors::FileOpen(path.to_path_buf(), err))?;

    let use_mmap = match mmap_opt {
        MmapOptions::No => false,
        MmapOptions::Always => true,
        MmapOptions::Auto => fd.metadata().map(|m| m.len() > (1 << 20)).unwrap_or(false)
    };

    if use_mmap {
        info!("Reading file via memory maps");
        // the file is only read while the map is alive
        let map = unsafe { Mmap::map(&fd)? };

        Ok(InputData::Mapped(map))
    } else {
        info!("Reading file to memory");
        let mut buf = Vec::with_capacity(1 << 20);

        fd.read_to_end(&mut buf)?;

        Ok(InputData::Buffered(buf))
    }
}

/// Write the output through a temporary sibling file
///
/// The destination path only ever sees a complete file. On any
/// failure the temporary is removed and whatever was at the
/// destination before stays put.
pub(crate) fn write_output<F>(path: &Path, encode: F) -> Result<(), ImageErrors>
where
    F: FnOnce(&mut BufWriter<File>) -> Result<(), ImageErrors>
{
    let mut tmp_name = path.as_os_str().to_os_string();
    tmp_name.push(".tmp");

    let tmp_path = PathBuf::from(tmp_name);

    let file = OpenOptions::new()
        .write(true)
        .truncate(true)
        .create(true)
        .open(&tmp_path)?;

    let mut writer = BufWriter::new(file);

    let result = encode(&mut writer).and_then(|()| writer.flush().map_err(ImageErrors::from));

    match result {
        Ok(()) => {
            drop(writer);
            std::fs::rename(&tmp_path, path)?;

            Ok(())
        }
        Err(err) => {
            drop(writer);
            let _ = std::fs::remove_file(&tmp_path);

            Err(err)
        }
    }
}
