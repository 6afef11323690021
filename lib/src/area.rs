// Copyright (C) 2025 Intel Corporation
// SPDX-License-Identifier: MIT

//! Info areas stored in a FRU blob.
//!
//! The chassis, board and product info areas share the same layout:
//!
//! | Offset | Content                                             |
//! |--------|-----------------------------------------------------|
//! | 0      | Format version (low nibble)                         |
//! | 1      | Length of the area in multiples of 8 bytes          |
//! | 2      | Area-specific fixed fields                          |
//! | ..     | Positional fields, custom fields, end marker `0xC1` |
//! | ..     | Zero padding                                        |
//! | last   | Checksum of the area                                |
//!
//! The internal use area only holds a format version followed by opaque data.

mod board;
mod chassis;
mod internal;
mod product;
#[cfg(test)]
mod tests;

use crate::Error;
use crate::checksum;
use crate::field::{self, END_OF_FIELDS, FieldReader};
#[cfg(not(feature = "std"))]
use alloc::{fmt, string::String, vec::Vec};
#[cfg(feature = "std")]
use std::fmt;

pub use board::{BoardArea, MAX_MFG_DATE_TIME};
pub use chassis::ChassisArea;
pub use internal::InternalArea;
pub use product::ProductArea;

/// Areas and offsets are aligned on this many bytes.
pub const AREA_ALIGNMENT: usize = 8;
/// Mask of the format version in the first byte of an area or header.
pub const FORMAT_VERSION_MASK: u8 = 0x0F;
/// Format version of the areas when not specified.
pub const DEFAULT_FORMAT_VERSION: u8 = 1;

/// Size of the version and length bytes preceding the fixed fields.
const AREA_HEADER_SIZE: usize = 2;
const CHECKSUM_SIZE: usize = 1;

/// Identifies the info areas in their order of placement within a FRU blob.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum AreaKind {
    Internal,
    Chassis,
    Board,
    Product,
}

impl AreaKind {
    /// All the supported areas, in their order of placement.
    pub const ALL: [AreaKind; 4] = [
        AreaKind::Internal,
        AreaKind::Chassis,
        AreaKind::Board,
        AreaKind::Product,
    ];

    /// Returns the name of the area as used in the text configuration.
    pub fn as_str(&self) -> &'static str {
        match self {
            AreaKind::Internal => "internal",
            AreaKind::Chassis => "chassis",
            AreaKind::Board => "board",
            AreaKind::Product => "product",
        }
    }
}

impl fmt::Display for AreaKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A chassis, board or product info area.
///
/// Implementors describe their fixed fields and expose their positional fields in the order
/// defined by [`InfoArea::FIELD_NAMES`]. The encoding and decoding of the common layout is
/// provided by [`InfoArea::to_bytes`] and [`InfoArea::from_slice`].
pub trait InfoArea: Default {
    const KIND: AreaKind;
    /// Names of the positional fields, in their order of appearance in the area.
    const FIELD_NAMES: &'static [&'static str];

    fn format_version(&self) -> u8;
    fn set_format_version(&mut self, format_version: u8);

    /// Appends the area-specific fixed fields to `out`.
    fn encode_fixed_fields(&self, out: &mut Vec<u8>) -> Result<(), Error>;
    /// Decodes the area-specific fixed fields from `s` and returns their size in bytes.
    fn decode_fixed_fields(&mut self, s: &[u8]) -> Result<usize, Error>;

    /// Returns the positional fields, in the order of [`InfoArea::FIELD_NAMES`].
    fn fields(&self) -> Vec<&str>;
    fn fields_mut(&mut self) -> Vec<&mut String>;

    fn custom_fields(&self) -> &[String];
    fn custom_fields_mut(&mut self) -> &mut Vec<String>;

    /// Encodes the area, including its header, padding and checksum.
    fn to_bytes(&self) -> Result<Vec<u8>, Error> {
        let mut body = Vec::new();
        self.encode_fixed_fields(&mut body)?;

        for (name, value) in Self::FIELD_NAMES.iter().zip(self.fields()) {
            field::encode_positional_field(&mut body, name, value)?;
        }
        for value in self.custom_fields().iter().filter(|value| !value.is_empty()) {
            field::encode_field(&mut body, "custom_fields", value)?;
        }
        body.push(END_OF_FIELDS);

        let unpadded = AREA_HEADER_SIZE + body.len() + CHECKSUM_SIZE;
        body.resize(
            unpadded.next_multiple_of(AREA_ALIGNMENT) - AREA_HEADER_SIZE - CHECKSUM_SIZE,
            0,
        );

        let length = (AREA_HEADER_SIZE + body.len() + CHECKSUM_SIZE) / AREA_ALIGNMENT;
        let length = u8::try_from(length).map_err(|_| Error::AreaTooLarge(Self::KIND))?;
        log::debug!("Encoded {} area: {} bytes", Self::KIND, length as usize * 8);

        let mut bytes = Vec::with_capacity(length as usize * AREA_ALIGNMENT);
        bytes.push(self.format_version() & FORMAT_VERSION_MASK);
        bytes.push(length);
        bytes.append(&mut body);
        bytes.push(checksum::compute_checksum(&bytes));
        Ok(bytes)
    }

    /// Decodes the area located at `offset` in `blob`. The checksum of the area is validated
    /// before any field is decoded.
    fn from_slice(blob: &[u8], offset: usize) -> Result<Self, Error> {
        let length = *blob.get(offset + 1).ok_or(Error::TruncatedBlob)? as usize * AREA_ALIGNMENT;
        if length == 0 {
            return Err(Error::InvalidAreaLength(Self::KIND));
        }
        log::debug!("Decoding {} area at {offset:#x} ({length} bytes)", Self::KIND);

        checksum::validate_checksum(blob, offset, length)?;
        let data = &blob[offset..offset + length - CHECKSUM_SIZE];

        let mut area = Self::default();
        area.set_format_version(data[0] & FORMAT_VERSION_MASK);
        let fixed_size =
            area.decode_fixed_fields(data.get(AREA_HEADER_SIZE..).ok_or(Error::TruncatedBlob)?)?;

        let mut reader = FieldReader::new(data, AREA_HEADER_SIZE + fixed_size);
        let mut values = Vec::with_capacity(Self::FIELD_NAMES.len());
        for name in Self::FIELD_NAMES {
            match reader.next_field(name)? {
                Some(value) => values.push(value),
                None => break,
            }
        }

        let complete = values.len() == Self::FIELD_NAMES.len();
        for (field, value) in area.fields_mut().into_iter().zip(values) {
            *field = value;
        }

        if complete {
            while let Some(value) = reader.next_field("custom_fields")? {
                area.custom_fields_mut().push(value);
            }
        }

        Ok(area)
    }
}
