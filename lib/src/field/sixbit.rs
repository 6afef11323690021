// Copyright (C) 2025 Intel Corporation
// SPDX-License-Identifier: MIT

//! Packed 6-bit ASCII.
//!
//! Four characters from the range `0x20..=0x5F` are stored in three bytes, least significant
//! bits first. Each character is stored as its offset from `0x20`.

#[cfg(not(feature = "std"))]
use alloc::string::String;

const ASCII_OFFSET: u8 = 0x20;
const CHAR_MASK: u32 = 0x3F;
const CHAR_BITS: usize = 6;
const BLOCK_SIZE: usize = 3;

/// Expands a packed 6-bit ASCII payload.
///
/// A trailing block shorter than three bytes yields the characters it fully holds: one
/// character for a single byte, two characters for two bytes.
///
/// # Examples
///
/// ```
/// use ipmi_fru::field::sixbit;
///
/// assert_eq!(sixbit::decode(&[0x29, 0xdc, 0xa6]), "IPMI");
/// assert_eq!(sixbit::decode(&[0x29, 0xdc]), "IP");
/// ```
pub fn decode(packed: &[u8]) -> String {
    let mut text = String::with_capacity(packed.len().div_ceil(BLOCK_SIZE) * 4);

    for block in packed.chunks(BLOCK_SIZE) {
        let bits = block
            .iter()
            .enumerate()
            .fold(0u32, |acc, (i, byte)| acc | (*byte as u32) << (8 * i));

        for i in 0..(block.len() * 8 / CHAR_BITS) {
            let value = ((bits >> (CHAR_BITS * i)) & CHAR_MASK) as u8;
            text.push(char::from(ASCII_OFFSET + value));
        }
    }

    text
}
