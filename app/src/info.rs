// Copyright (C) 2025 Intel Corporation
// SPDX-License-Identifier: MIT

use ipmi_fru::area::FORMAT_VERSION_MASK;
use ipmi_fru::checksum;
use ipmi_fru::prelude::*;
use std::path::Path;

fn checksum_status(blob: &[u8], offset: usize, length: usize) -> &'static str {
    match checksum::validate_checksum(blob, offset, length) {
        Ok(()) => "Valid",
        Err(Error::ChecksumMismatch(_)) => "Invalid",
        Err(_) => "Truncated",
    }
}

pub fn compact(input: &Path) -> Result<(), Error> {
    let blob = std::fs::read(input)?;
    let header = Header::from_slice(&blob)?;

    println!(
        "Format version {}, {} bytes",
        header.format_version,
        blob.len()
    );
    println!();
    println!("Area      Offset  Length  Ver.  Checksum ");
    println!("--------- ------- ------- ----- ---------");
    for (kind, offset) in header.areas() {
        let version = blob
            .get(offset)
            .map(|byte| (byte & FORMAT_VERSION_MASK).to_string())
            .unwrap_or_default();

        let (length, checksum) = if kind == AreaKind::Internal {
            (header.internal_end(blob.len()).saturating_sub(offset), "")
        } else {
            let length = blob.get(offset + 1).map_or(0, |length| *length as usize * 8);
            (length, checksum_status(&blob, offset, length))
        };

        println!(
            "{:<9} {offset:#07x} {length:>7} {version:>5} {checksum}",
            kind.as_str()
        );
    }

    if header.multirecord_offset != 0 {
        println!(
            "{:<9} {:#07x} (not supported)",
            "multirec",
            header.multirecord_offset as usize * 8
        );
    }

    Ok(())
}
