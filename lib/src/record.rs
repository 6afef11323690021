// Copyright (C) 2025 Intel Corporation
// SPDX-License-Identifier: MIT

//! Structured representation of a complete FRU blob.

use crate::Error;
use crate::area::{AreaKind, BoardArea, ChassisArea, InfoArea, InternalArea, ProductArea};
use crate::header::{HEADER_SIZE, Header};
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::path::Path;

/// Information shared by the whole FRU blob
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serialize", derive(serde::Serialize))]
pub struct Common {
    /// Format version of the common header (4 bits)
    pub format_version: Option<u8>,
    /// Size of the blob in bytes. The encoded blob is padded with zeros up to this size.
    pub size: Option<usize>,
}

/// Content of a FRU blob
///
/// Areas set to [`None`] are not present in the blob.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serialize", derive(serde::Serialize))]
pub struct Record {
    pub common: Common,
    pub internal: Option<InternalArea>,
    pub chassis: Option<ChassisArea>,
    pub board: Option<BoardArea>,
    pub product: Option<ProductArea>,
}

impl Record {
    /// Decodes a FRU blob.
    ///
    /// The checksum of the common header is validated first, followed by the checksums of the
    /// chassis, board and product areas as they are decoded.
    pub fn from_slice(blob: &[u8]) -> Result<Self, Error> {
        let header = Header::from_slice(blob)?;

        let mut record = Record {
            common: Common {
                format_version: Some(header.format_version),
                size: Some(blob.len()),
            },
            ..Record::default()
        };

        if let Some(offset) = header.offset(AreaKind::Internal) {
            let end = header.internal_end(blob.len());
            record.internal = Some(InternalArea::from_slice(blob, offset, end)?);
        }
        if let Some(offset) = header.offset(AreaKind::Chassis) {
            record.chassis = Some(ChassisArea::from_slice(blob, offset)?);
        }
        if let Some(offset) = header.offset(AreaKind::Board) {
            record.board = Some(BoardArea::from_slice(blob, offset)?);
        }
        if let Some(offset) = header.offset(AreaKind::Product) {
            record.product = Some(ProductArea::from_slice(blob, offset)?);
        }

        Ok(record)
    }

    /// Reads and decodes a FRU file.
    #[cfg(feature = "std")]
    pub fn from_file(path: &Path) -> Result<Self, Error> {
        log::debug!("Reading FRU file: {}", path.display());
        Record::from_slice(&std::fs::read(path)?)
    }

    /// Encodes the record into a blob of exactly `common.size` bytes.
    pub fn to_bytes(&self) -> Result<Vec<u8>, Error> {
        let format_version = self
            .common
            .format_version
            .ok_or(Error::MissingRequiredField("format_version"))?;
        let size = self
            .common
            .size
            .ok_or(Error::MissingRequiredField("size"))?;

        let areas = [
            (
                AreaKind::Internal,
                self.internal
                    .as_ref()
                    .filter(|internal| !internal.is_empty())
                    .map(|internal| internal.to_bytes()),
            ),
            (
                AreaKind::Chassis,
                self.chassis.as_ref().map(|area| area.to_bytes()).transpose()?,
            ),
            (
                AreaKind::Board,
                self.board.as_ref().map(|area| area.to_bytes()).transpose()?,
            ),
            (
                AreaKind::Product,
                self.product.as_ref().map(|area| area.to_bytes()).transpose()?,
            ),
        ];

        let mut header = Header {
            format_version,
            ..Header::default()
        };
        let mut offset = HEADER_SIZE;
        for (kind, bytes) in areas.iter() {
            if let Some(bytes) = bytes {
                header.set_offset(*kind, offset)?;
                offset += bytes.len();
            }
        }

        let mut blob = Vec::with_capacity(offset);
        blob.extend_from_slice(&header.to_bytes());
        for (_, bytes) in areas {
            if let Some(mut bytes) = bytes {
                blob.append(&mut bytes);
            }
        }

        if blob.len() > size {
            return Err(Error::BlobTooLarge(blob.len(), size));
        }
        log::debug!("Encoded {} bytes, padding to {size} bytes", blob.len());
        blob.resize(size, 0);

        Ok(blob)
    }
}

/// Encodes a [`Record`] into a FRU blob.
///
/// # Errors
///
/// Fails with [`Error::MissingRequiredField`] if the format version or the size of the blob is
/// not set, and with [`Error::BlobTooLarge`] if the areas do not fit in the declared size.
pub fn dump(record: &Record) -> Result<Vec<u8>, Error> {
    record.to_bytes()
}

/// Decodes a FRU blob read from `path` or provided in `blob`. Exactly one of them must be
/// specified.
#[cfg(feature = "std")]
pub fn load(path: Option<&Path>, blob: Option<&[u8]>) -> Result<Record, Error> {
    match (path, blob) {
        (Some(path), None) => Record::from_file(path),
        (None, Some(blob)) => Record::from_slice(blob),
        _ => Err(Error::InvalidArguments),
    }
}
