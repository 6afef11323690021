// Copyright (C) 2025 Intel Corporation
// SPDX-License-Identifier: MIT

//! Type/length encoded string fields of the chassis, board and product info areas.
//!
//! Each field starts with a type/length byte: the two most significant bits select the encoding
//! of the payload and the six least significant bits hold its length in bytes.

pub mod sixbit;
#[cfg(test)]
mod tests;

use crate::Error;
#[cfg(not(feature = "std"))]
use alloc::{string::String, vec::Vec};

/// Mask of the payload length in a type/length byte.
pub const LENGTH_MASK: u8 = 0x3F;
/// Mask of the encoding type in a type/length byte.
pub const ENCODING_MASK: u8 = 0xC0;
const ENCODING_SHIFT: u32 = 6;

/// Marks the end of the fields of an info area.
pub const END_OF_FIELDS: u8 = 0xC1;
/// Placeholder for an empty positional field.
pub const EMPTY_FIELD: u8 = 0x00;
/// Longest payload a type/length byte can describe.
pub const MAX_FIELD_LENGTH: usize = LENGTH_MASK as usize;

/// Lists the encodings selectable in a type/length byte.
pub mod encodings {
    pub const BINARY: u8 = 0b00;
    pub const BCD_PLUS: u8 = 0b01;
    pub const SIXBIT_ASCII: u8 = 0b10;
    pub const ASCII: u8 = 0b11;
}

/// Appends `value` to `out` as an 8-bit ASCII field.
///
/// A single character cannot be encoded: its type/length byte would be [`END_OF_FIELDS`].
pub fn encode_field(out: &mut Vec<u8>, name: &str, value: &str) -> Result<(), Error> {
    if !value.is_ascii() {
        return Err(Error::NonAsciiData(name.into()));
    }
    let length = value.len();
    if length > MAX_FIELD_LENGTH {
        return Err(Error::FieldTooLong(name.into(), length));
    }
    if length == 1 {
        return Err(Error::FieldTooShort(name.into()));
    }

    out.push((encodings::ASCII << ENCODING_SHIFT) | length as u8);
    out.extend_from_slice(value.as_bytes());
    Ok(())
}

/// Appends a positional field to `out`. Empty values are replaced by a placeholder to keep the
/// following fields at their position.
pub fn encode_positional_field(out: &mut Vec<u8>, name: &str, value: &str) -> Result<(), Error> {
    if value.is_empty() {
        out.push(EMPTY_FIELD);
        Ok(())
    } else {
        encode_field(out, name, value)
    }
}

/// Reads consecutive type/length encoded fields from an info area.
pub struct FieldReader<'a> {
    data: &'a [u8],
    cursor: usize,
}

impl<'a> FieldReader<'a> {
    /// Creates a reader over `data` starting at `offset`. The reader never goes beyond the end
    /// of `data`.
    pub fn new(data: &'a [u8], offset: usize) -> Self {
        Self {
            data,
            cursor: offset,
        }
    }

    /// Returns the current offset of the reader in the underlying data.
    pub fn offset(&self) -> usize {
        self.cursor
    }

    /// Decodes the next field. `name` is only used to report errors.
    ///
    /// Returns [`None`] once the end of fields marker is reached. The cursor is not moved past
    /// the marker, so subsequent calls keep returning [`None`].
    pub fn next_field(&mut self, name: &str) -> Result<Option<String>, Error> {
        let type_length = *self.data.get(self.cursor).ok_or(Error::TruncatedBlob)?;
        if type_length == END_OF_FIELDS {
            log::trace!("End of fields at offset {:#x}", self.cursor);
            return Ok(None);
        }

        let length = (type_length & LENGTH_MASK) as usize;
        let encoding = (type_length & ENCODING_MASK) >> ENCODING_SHIFT;
        let start = self.cursor + 1;
        let payload = self
            .data
            .get(start..start + length)
            .ok_or(Error::TruncatedBlob)?;

        let value = match encoding {
            encodings::SIXBIT_ASCII => sixbit::decode(payload),
            _ => {
                if !payload.is_ascii() {
                    return Err(Error::NonAsciiData(name.into()));
                }
                payload.iter().map(|byte| char::from(*byte)).collect()
            }
        };
        log::trace!(
            "Field {name} at offset {:#x}: encoding={encoding}, length={length}",
            self.cursor
        );

        self.cursor = start + length;
        Ok(Some(value))
    }
}
