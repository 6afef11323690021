// Copyright (C) 2025 Intel Corporation
// SPDX-License-Identifier: MIT

use super::{AreaKind, DEFAULT_FORMAT_VERSION, InfoArea};
use crate::Error;
#[cfg(not(feature = "std"))]
use alloc::{format, string::String, vec, vec::Vec};

/// Largest manufacturing date/time that fits in the 3 bytes of the board area.
pub const MAX_MFG_DATE_TIME: u32 = 0xFF_FFFF;

/// Board Info Area
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serialize", derive(serde::Serialize))]
pub struct BoardArea {
    pub format_version: u8,
    pub language_code: u8,
    /// Manufacturing date/time in minutes since 1996-01-01 00:00
    pub mfg_date_time: u32,
    pub manufacturer: String,
    pub product_name: String,
    pub serial_number: String,
    pub part_number: String,
    pub fru_file_id: String,
    pub custom_fields: Vec<String>,
}

impl Default for BoardArea {
    fn default() -> Self {
        Self {
            format_version: DEFAULT_FORMAT_VERSION,
            language_code: 0,
            mfg_date_time: 0,
            manufacturer: String::new(),
            product_name: String::new(),
            serial_number: String::new(),
            part_number: String::new(),
            fru_file_id: String::new(),
            custom_fields: Vec::new(),
        }
    }
}

impl InfoArea for BoardArea {
    const KIND: AreaKind = AreaKind::Board;
    const FIELD_NAMES: &'static [&'static str] = &[
        "manufacturer",
        "product_name",
        "serial_number",
        "part_number",
        "fru_file_id",
    ];

    fn format_version(&self) -> u8 {
        self.format_version
    }

    fn set_format_version(&mut self, format_version: u8) {
        self.format_version = format_version;
    }

    fn encode_fixed_fields(&self, out: &mut Vec<u8>) -> Result<(), Error> {
        if self.mfg_date_time > MAX_MFG_DATE_TIME {
            return Err(Error::DateTimeOutOfRange(format!(
                "{:#x} minutes",
                self.mfg_date_time
            )));
        }

        out.push(self.language_code);
        out.extend_from_slice(&self.mfg_date_time.to_le_bytes()[..3]);
        Ok(())
    }

    fn decode_fixed_fields(&mut self, s: &[u8]) -> Result<usize, Error> {
        let fixed = s.get(0..4).ok_or(Error::TruncatedBlob)?;
        self.language_code = fixed[0];
        self.mfg_date_time = u32::from_le_bytes([fixed[1], fixed[2], fixed[3], 0]);
        Ok(4)
    }

    fn fields(&self) -> Vec<&str> {
        vec![
            self.manufacturer.as_str(),
            self.product_name.as_str(),
            self.serial_number.as_str(),
            self.part_number.as_str(),
            self.fru_file_id.as_str(),
        ]
    }

    fn fields_mut(&mut self) -> Vec<&mut String> {
        vec![
            &mut self.manufacturer,
            &mut self.product_name,
            &mut self.serial_number,
            &mut self.part_number,
            &mut self.fru_file_id,
        ]
    }

    fn custom_fields(&self) -> &[String] {
        &self.custom_fields
    }

    fn custom_fields_mut(&mut self) -> &mut Vec<String> {
        &mut self.custom_fields
    }
}
