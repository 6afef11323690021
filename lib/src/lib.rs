// Copyright (C) 2025 Intel Corporation
// SPDX-License-Identifier: MIT

//! Encoding and decoding of IPMI FRU (Field Replaceable Unit) information blobs.
//!
//! A FRU blob starts with an 8-byte common header that locates the optional internal use,
//! chassis, board and product info areas. This crate converts such blobs from and to a
//! [`Record`].
//!
//! # Examples
//!
//! ```
//! use ipmi_fru::prelude::*;
//!
//! let record = Record {
//!     common: Common {
//!         format_version: Some(1),
//!         size: Some(64),
//!     },
//!     chassis: Some(ChassisArea {
//!         chassis_type: 23,
//!         part_number: "CH-100".into(),
//!         ..ChassisArea::default()
//!     }),
//!     ..Record::default()
//! };
//!
//! let blob = record.to_bytes().unwrap();
//! assert_eq!(blob.len(), 64);
//! assert_eq!(Record::from_slice(&blob).unwrap(), record);
//! ```
//!
//! # Features
//!
//! - `std`: reading FRU files from the file system
//! - `serialize`: JSON export of the decoded records
//! - `config`: TOML configuration files and date/time conversions

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
extern crate alloc;

pub mod area;
pub mod checksum;
#[cfg(feature = "config")]
pub mod config;
#[cfg(feature = "config")]
pub mod date;
mod error;
pub mod field;
pub mod header;
pub mod prelude;
mod record;

pub use error::Error;
#[cfg(feature = "std")]
pub use record::load;
pub use record::{Common, Record, dump};
