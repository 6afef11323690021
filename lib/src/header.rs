// Copyright (C) 2025 Intel Corporation
// SPDX-License-Identifier: MIT

//! Common header of a FRU blob.

use crate::Error;
use crate::area::{AREA_ALIGNMENT, AreaKind, FORMAT_VERSION_MASK};
use crate::checksum;
#[cfg(not(feature = "std"))]
use alloc::{fmt, vec::Vec};
#[cfg(feature = "std")]
use std::fmt;

/// Size of the common header in bytes.
pub const HEADER_SIZE: usize = 8;

/// Common header of a FRU blob
///
/// The offsets are expressed in multiples of 8 bytes from the beginning of the blob. An offset
/// of 0 means that the area is not present.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Header {
    pub format_version: u8,
    pub internal_offset: u8,
    pub chassis_offset: u8,
    pub board_offset: u8,
    pub product_offset: u8,
    /// Always 0 as MultiRecord areas are not supported
    pub multirecord_offset: u8,
}

impl Header {
    /// Decodes the header at the beginning of `blob`. The checksum of the header is validated
    /// before anything else.
    pub fn from_slice(blob: &[u8]) -> Result<Self, Error> {
        checksum::validate_checksum(blob, 0, HEADER_SIZE)?;

        let header = Header {
            format_version: blob[0] & FORMAT_VERSION_MASK,
            internal_offset: blob[1],
            chassis_offset: blob[2],
            board_offset: blob[3],
            product_offset: blob[4],
            multirecord_offset: blob[5],
        };
        log::debug!("FRU header: {header}");

        if header.multirecord_offset != 0 {
            log::info!(
                "Ignoring MultiRecord area at {:#x}",
                header.multirecord_offset as usize * AREA_ALIGNMENT
            );
        }

        Ok(header)
    }

    /// Encodes the header, including its checksum.
    pub fn to_bytes(&self) -> [u8; HEADER_SIZE] {
        let mut bytes = [
            self.format_version & FORMAT_VERSION_MASK,
            self.internal_offset,
            self.chassis_offset,
            self.board_offset,
            self.product_offset,
            self.multirecord_offset,
            0x00,
            0x00,
        ];
        bytes[HEADER_SIZE - 1] = checksum::compute_checksum(&bytes[..HEADER_SIZE - 1]);
        bytes
    }

    fn raw_offset(&self, kind: AreaKind) -> u8 {
        match kind {
            AreaKind::Internal => self.internal_offset,
            AreaKind::Chassis => self.chassis_offset,
            AreaKind::Board => self.board_offset,
            AreaKind::Product => self.product_offset,
        }
    }

    /// Returns the offset of an area in bytes, or [`None`] if the area is not present.
    pub fn offset(&self, kind: AreaKind) -> Option<usize> {
        match self.raw_offset(kind) {
            0 => None,
            offset => Some(offset as usize * AREA_ALIGNMENT),
        }
    }

    /// Sets the offset of an area in bytes.
    pub fn set_offset(&mut self, kind: AreaKind, offset: usize) -> Result<(), Error> {
        let offset = u8::try_from(offset / AREA_ALIGNMENT).map_err(|_| Error::OffsetOutOfRange(kind))?;
        match kind {
            AreaKind::Internal => self.internal_offset = offset,
            AreaKind::Chassis => self.chassis_offset = offset,
            AreaKind::Board => self.board_offset = offset,
            AreaKind::Product => self.product_offset = offset,
        }
        Ok(())
    }

    /// Returns the present areas and their offsets in bytes, in their order of placement.
    pub fn areas(&self) -> Vec<(AreaKind, usize)> {
        AreaKind::ALL
            .iter()
            .filter_map(|kind| Some((*kind, self.offset(*kind)?)))
            .collect()
    }

    /// Returns the end of the internal use area in a blob of `blob_len` bytes.
    ///
    /// The internal use area extends to the closest area that follows it, or to the end of the
    /// blob if no area follows it.
    pub fn internal_end(&self, blob_len: usize) -> usize {
        let Some(start) = self.offset(AreaKind::Internal) else {
            return 0;
        };

        AreaKind::ALL[1..]
            .iter()
            .filter_map(|kind| self.offset(*kind))
            .filter(|offset| *offset > start)
            .min()
            .unwrap_or(blob_len)
            .min(blob_len)
    }
}

impl fmt::Display for Header {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "version={}, internal={:#x}, chassis={:#x}, board={:#x}, product={:#x}",
            self.format_version,
            self.internal_offset,
            self.chassis_offset,
            self.board_offset,
            self.product_offset
        )
    }
}
