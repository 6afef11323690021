// Copyright (C) 2025 Intel Corporation
// SPDX-License-Identifier: MIT

//! Zero checksums protecting the common header and the info areas.
//!
//! A checksummed block is valid when the sum of all its bytes, including the trailing checksum
//! byte, is zero modulo 256.

use crate::Error;

/// Returns the byte that makes `bytes` followed by this byte sum to zero.
///
/// # Examples
///
/// ```
/// use ipmi_fru::checksum::compute_checksum;
///
/// assert_eq!(compute_checksum(&[0x01, 0x00, 0x01]), 0xfe);
/// assert_eq!(compute_checksum(&[]), 0);
/// ```
pub fn compute_checksum(bytes: &[u8]) -> u8 {
    bytes
        .iter()
        .fold(0u8, |acc, byte| acc.wrapping_add(*byte))
        .wrapping_neg()
}

/// Checks the block of `length` bytes starting at `offset` in `blob`. The last byte of the block
/// is the stored checksum.
pub fn validate_checksum(blob: &[u8], offset: usize, length: usize) -> Result<(), Error> {
    let block = offset
        .checked_add(length)
        .and_then(|end| blob.get(offset..end))
        .ok_or(Error::TruncatedBlob)?;
    let (checksum, data) = block.split_last().ok_or(Error::TruncatedBlob)?;

    let sum = data
        .iter()
        .fold(*checksum, |acc, byte| acc.wrapping_add(*byte));
    log::trace!("Checksum of block {offset:#x}+{length:#x}: stored={checksum:#04x}, sum={sum:#04x}");

    if sum != 0 {
        return Err(Error::ChecksumMismatch(offset));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn balances_block() {
        let mut block = vec![0x01, 0x00, 0x00, 0x01, 0x00, 0x00, 0x00];
        block.push(compute_checksum(&block));
        assert_eq!(block[7], 0xfe);
        assert!(validate_checksum(&block, 0, 8).is_ok());
    }

    #[test]
    fn mismatch() {
        let blob = [0x01, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00];
        assert!(matches!(
            validate_checksum(&blob, 0, 8),
            Err(Error::ChecksumMismatch(0))
        ));
    }

    #[test]
    fn zero_checksum() {
        let blob = [0x00; 8];
        assert!(validate_checksum(&blob, 0, 8).is_ok());
    }

    #[test]
    fn block_at_offset() {
        let mut blob = vec![0xff; 4];
        blob.extend_from_slice(&[0x10, 0x20]);
        blob.push(compute_checksum(&[0x10, 0x20]));
        assert!(validate_checksum(&blob, 4, 3).is_ok());
        assert!(validate_checksum(&blob, 3, 3).is_err());
    }

    #[test]
    fn out_of_bounds() {
        let blob = [0x00; 8];
        assert!(matches!(
            validate_checksum(&blob, 4, 8),
            Err(Error::TruncatedBlob)
        ));
        assert!(matches!(
            validate_checksum(&blob, 0, 0),
            Err(Error::TruncatedBlob)
        ));
        assert!(matches!(
            validate_checksum(&blob, usize::MAX, 2),
            Err(Error::TruncatedBlob)
        ));
    }
}
