// Copyright (C) 2025 Intel Corporation
// SPDX-License-Identifier: MIT

use super::{AreaKind, DEFAULT_FORMAT_VERSION, InfoArea};
use crate::Error;
#[cfg(not(feature = "std"))]
use alloc::{string::String, vec, vec::Vec};

/// Chassis Info Area
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serialize", derive(serde::Serialize))]
pub struct ChassisArea {
    pub format_version: u8,
    /// Chassis type, as defined by the SMBIOS specification
    #[cfg_attr(feature = "serialize", serde(rename = "type"))]
    pub chassis_type: u8,
    pub part_number: String,
    pub serial_number: String,
    pub custom_fields: Vec<String>,
}

impl Default for ChassisArea {
    fn default() -> Self {
        Self {
            format_version: DEFAULT_FORMAT_VERSION,
            chassis_type: 0,
            part_number: String::new(),
            serial_number: String::new(),
            custom_fields: Vec::new(),
        }
    }
}

impl InfoArea for ChassisArea {
    const KIND: AreaKind = AreaKind::Chassis;
    const FIELD_NAMES: &'static [&'static str] = &["part_number", "serial_number"];

    fn format_version(&self) -> u8 {
        self.format_version
    }

    fn set_format_version(&mut self, format_version: u8) {
        self.format_version = format_version;
    }

    fn encode_fixed_fields(&self, out: &mut Vec<u8>) -> Result<(), Error> {
        out.push(self.chassis_type);
        Ok(())
    }

    fn decode_fixed_fields(&mut self, s: &[u8]) -> Result<usize, Error> {
        self.chassis_type = *s.first().ok_or(Error::TruncatedBlob)?;
        Ok(1)
    }

    fn fields(&self) -> Vec<&str> {
        vec![self.part_number.as_str(), self.serial_number.as_str()]
    }

    fn fields_mut(&mut self) -> Vec<&mut String> {
        vec![&mut self.part_number, &mut self.serial_number]
    }

    fn custom_fields(&self) -> &[String] {
        &self.custom_fields
    }

    fn custom_fields_mut(&mut self) -> &mut Vec<String> {
        &mut self.custom_fields
    }
}
