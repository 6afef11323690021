// Copyright (C) 2025 Intel Corporation
// SPDX-License-Identifier: MIT

use crate::area::AreaKind;
#[cfg(not(feature = "std"))]
use alloc::{fmt, string::String};
#[cfg(feature = "config")]
use std::path::PathBuf;
#[cfg(feature = "std")]
use std::{fmt, io};

/// Errors reported by the FRU encoding and decoding functions.
#[derive(Debug)]
pub enum Error {
    InternalError,
    /// Exactly one of a path or a blob must be given to [`load`](crate::load).
    InvalidArguments,
    /// The checksum of the block starting at the given offset does not balance.
    ChecksumMismatch(usize),
    MissingRequiredField(&'static str),
    /// The encoded content (first value) exceeds the declared size (second value).
    BlobTooLarge(usize, usize),
    FieldTooLong(String, usize),
    /// A single character ASCII field would collide with the end of fields marker.
    FieldTooShort(String),
    NonAsciiData(String),
    TruncatedBlob,
    InvalidAreaLength(AreaKind),
    AreaTooLarge(AreaKind),
    OffsetOutOfRange(AreaKind),
    DateTimeOutOfRange(String),
    DateTimeBadFormat(String),
    DateTimeIncludesSeconds(String),
    #[cfg(feature = "config")]
    InvalidConfig(String),
    #[cfg(feature = "config")]
    MissingInternalFile(PathBuf),
    #[cfg(feature = "config")]
    TomlError(toml::de::Error),
    #[cfg(feature = "serialize")]
    JsonError(serde_json::Error),
    #[cfg(feature = "std")]
    IOError(io::Error),
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::InternalError => write!(f, "Internal error in the FRU library"),
            Error::InvalidArguments => {
                write!(f, "Either a path or a blob must be specified, but not both")
            }
            Error::ChecksumMismatch(offset) => {
                write!(f, "The data at offset {offset:#x} do not match the checksum")
            }
            Error::MissingRequiredField(field) => {
                write!(f, "\"{field}\" key missing in [common]")
            }
            Error::BlobTooLarge(size, limit) => write!(
                f,
                "Too much content, does not fit: {size} bytes encoded for a size of {limit} bytes"
            ),
            Error::FieldTooLong(field, length) => write!(
                f,
                "Field \"{field}\" is {length} bytes long, the limit is 63 bytes"
            ),
            Error::FieldTooShort(field) => write!(
                f,
                "Field \"{field}\" is 1 byte long, which is reserved for the end of fields marker"
            ),
            Error::NonAsciiData(field) => write!(f, "Field \"{field}\" contains non-ASCII data"),
            Error::TruncatedBlob => write!(f, "The FRU data is truncated"),
            Error::InvalidAreaLength(area) => write!(f, "The {area} area has an empty length"),
            Error::AreaTooLarge(area) => {
                write!(f, "The {area} area does not fit in 2040 bytes")
            }
            Error::OffsetOutOfRange(area) => {
                write!(f, "The {area} area starts beyond the addressable range")
            }
            Error::DateTimeOutOfRange(stamp) => write!(
                f,
                "The date/time \"{stamp}\" must be between 1996-01-01 00:00 and 2027-11-24 20:15"
            ),
            Error::DateTimeBadFormat(stamp) => write!(
                f,
                "The date \"{stamp}\" must follow the format \"YYYY-MM-DD HH:MM\""
            ),
            Error::DateTimeIncludesSeconds(stamp) => {
                write!(f, "The date/time \"{stamp}\" must not include seconds")
            }
            #[cfg(feature = "config")]
            Error::InvalidConfig(msg) => write!(f, "Invalid configuration: {msg}"),
            #[cfg(feature = "config")]
            Error::MissingInternalFile(path) => {
                write!(f, "Internal info area file {} not found", path.display())
            }
            #[cfg(feature = "config")]
            Error::TomlError(err) => write!(f, "Invalid TOML file: {err}"),
            #[cfg(feature = "serialize")]
            Error::JsonError(err) => write!(f, "Cannot export JSON: {err}"),
            #[cfg(feature = "std")]
            Error::IOError(err) => write!(f, "Encountered IO error: {err}"),
        }
    }
}

#[cfg(feature = "std")]
impl From<io::Error> for Error {
    fn from(err: io::Error) -> Self {
        Error::IOError(err)
    }
}

#[cfg(feature = "config")]
impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::TomlError(err)
    }
}

#[cfg(feature = "serialize")]
impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::JsonError(err)
    }
}
