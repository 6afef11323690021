// Copyright (C) 2025 Intel Corporation
// SPDX-License-Identifier: MIT

use ipmi_fru::config;
use ipmi_fru::prelude::*;
use std::io::Write;

pub fn toml<O: Write>(record: &Record, mut output: O) -> Result<(), Error> {
    output.write_all(config::to_string(Some(record))?.as_bytes())?;
    Ok(())
}

pub fn json<O: Write>(record: &Record, mut output: O) -> Result<(), Error> {
    serde_json::to_writer_pretty(&mut output, record)?;
    Ok(writeln!(output)?)
}
