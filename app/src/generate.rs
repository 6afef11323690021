// Copyright (C) 2025 Intel Corporation
// SPDX-License-Identifier: MIT

use crate::output;
use ipmi_fru::config;
use ipmi_fru::prelude::*;
use std::path::Path;

pub fn generate(toml_file: &Path, fru_file: &Path, force: bool) -> Result<(), Error> {
    let record = config::from_path(toml_file)?;
    let blob = dump(&record)?;
    output::write_file(fru_file, &blob, force)
}
