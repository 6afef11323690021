// Copyright (C) 2025 Intel Corporation
// SPDX-License-Identifier: MIT

//! Convenience re-export of common structs

pub use crate::area::{AreaKind, BoardArea, ChassisArea, InfoArea, InternalArea, ProductArea};
pub use crate::error::Error;
pub use crate::header::Header;
#[cfg(feature = "std")]
pub use crate::record::load;
pub use crate::record::{Common, Record, dump};
