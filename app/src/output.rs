// Copyright (C) 2025 Intel Corporation
// SPDX-License-Identifier: MIT

use ipmi_fru::prelude::*;
use std::fs::File;
use std::io::{self, Write};
use std::path::Path;

fn create(path: &Path, force: bool) -> Result<File, Error> {
    let file = if force {
        File::create(path)
    } else {
        File::create_new(path)
    };

    Ok(file.inspect_err(|err| {
        if err.kind() == io::ErrorKind::AlreadyExists {
            log::error!("{} already exists, use --force to overwrite it", path.display())
        } else {
            log::error!("Failed to write file: {err}")
        }
    })?)
}

/// Opens the output file, or stdout if no path is given.
pub fn open(path: Option<&Path>, force: bool) -> Result<Box<dyn Write>, Error> {
    match path {
        Some(path) => Ok(Box::new(create(path, force)?)),
        None => Ok(Box::new(io::stdout().lock())),
    }
}

pub fn write_file(path: &Path, slice: &[u8], force: bool) -> Result<(), Error> {
    create(path, force)?.write_all(slice)?;
    log::info!("Wrote {} bytes to {}", slice.len(), path.display());
    Ok(())
}
