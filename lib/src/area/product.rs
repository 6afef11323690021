// Copyright (C) 2025 Intel Corporation
// SPDX-License-Identifier: MIT

use super::{AreaKind, DEFAULT_FORMAT_VERSION, InfoArea};
use crate::Error;
#[cfg(not(feature = "std"))]
use alloc::{string::String, vec, vec::Vec};

/// Product Info Area
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serialize", derive(serde::Serialize))]
pub struct ProductArea {
    pub format_version: u8,
    pub language_code: u8,
    pub manufacturer: String,
    pub product_name: String,
    pub part_number: String,
    pub product_version: String,
    pub serial_number: String,
    pub asset_tag: String,
    pub fru_file_id: String,
    pub custom_fields: Vec<String>,
}

impl Default for ProductArea {
    fn default() -> Self {
        Self {
            format_version: DEFAULT_FORMAT_VERSION,
            language_code: 0,
            manufacturer: String::new(),
            product_name: String::new(),
            part_number: String::new(),
            product_version: String::new(),
            serial_number: String::new(),
            asset_tag: String::new(),
            fru_file_id: String::new(),
            custom_fields: Vec::new(),
        }
    }
}

impl InfoArea for ProductArea {
    const KIND: AreaKind = AreaKind::Product;
    const FIELD_NAMES: &'static [&'static str] = &[
        "manufacturer",
        "product_name",
        "part_number",
        "product_version",
        "serial_number",
        "asset_tag",
        "fru_file_id",
    ];

    fn format_version(&self) -> u8 {
        self.format_version
    }

    fn set_format_version(&mut self, format_version: u8) {
        self.format_version = format_version;
    }

    fn encode_fixed_fields(&self, out: &mut Vec<u8>) -> Result<(), Error> {
        out.push(self.language_code);
        Ok(())
    }

    fn decode_fixed_fields(&mut self, s: &[u8]) -> Result<usize, Error> {
        self.language_code = *s.first().ok_or(Error::TruncatedBlob)?;
        Ok(1)
    }

    fn fields(&self) -> Vec<&str> {
        vec![
            self.manufacturer.as_str(),
            self.product_name.as_str(),
            self.part_number.as_str(),
            self.product_version.as_str(),
            self.serial_number.as_str(),
            self.asset_tag.as_str(),
            self.fru_file_id.as_str(),
        ]
    }

    fn fields_mut(&mut self) -> Vec<&mut String> {
        vec![
            &mut self.manufacturer,
            &mut self.product_name,
            &mut self.part_number,
            &mut self.product_version,
            &mut self.serial_number,
            &mut self.asset_tag,
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
