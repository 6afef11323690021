// Copyright (C) 2025 Intel Corporation
// SPDX-License-Identifier: MIT

use ipmi_fru::config;
use ipmi_fru::prelude::*;
use std::io::Write;

pub fn sample<O: Write>(mut output: O) -> Result<(), Error> {
    Ok(output.write_all(config::to_string(None)?.as_bytes())?)
}
