// Copyright (C) 2025 Intel Corporation
// SPDX-License-Identifier: MIT

use super::{AREA_ALIGNMENT, DEFAULT_FORMAT_VERSION, FORMAT_VERSION_MASK};
use crate::Error;
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

/// Internal Use Area
///
/// This area has no length nor checksum. Its extent is bounded by the next area or by the end
/// of the blob.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serialize", derive(serde::Serialize))]
pub struct InternalArea {
    pub format_version: u8,
    /// Opaque data
    pub data: Vec<u8>,
}

impl Default for InternalArea {
    fn default() -> Self {
        Self {
            format_version: DEFAULT_FORMAT_VERSION,
            data: Vec::new(),
        }
    }
}

impl InternalArea {
    /// Returns `true` if the area has no data and must be left out of the blob.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Encodes the area. Zeros are appended to align the next area.
    pub fn to_bytes(&self) -> Vec<u8> {
        let size = (1 + self.data.len()).next_multiple_of(AREA_ALIGNMENT);
        let mut bytes = Vec::with_capacity(size);
        bytes.push(self.format_version & FORMAT_VERSION_MASK);
        bytes.extend_from_slice(&self.data);
        bytes.resize(size, 0);
        bytes
    }

    /// Decodes the area stored in `blob` between `offset` and `end`.
    pub fn from_slice(blob: &[u8], offset: usize, end: usize) -> Result<Self, Error> {
        let format_version = *blob.get(offset).ok_or(Error::TruncatedBlob)? & FORMAT_VERSION_MASK;
        let data = if end > offset + 1 {
            blob.get(offset + 1..end).ok_or(Error::TruncatedBlob)?.to_vec()
        } else {
            Vec::new()
        };
        log::debug!("Decoded internal area at {offset:#x}: {} bytes of data", data.len());

        Ok(Self {
            format_version,
            data,
        })
    }
}
