// Copyright (C) 2025 Intel Corporation
// SPDX-License-Identifier: MIT

use super::*;

#[test]
fn encode_ascii() {
    let mut out = Vec::new();
    encode_field(&mut out, "manufacturer", "Acme").unwrap();
    assert_eq!(out, [0xc4, b'A', b'c', b'm', b'e']);
}

#[test]
fn encode_placeholder() {
    let mut out = Vec::new();
    encode_positional_field(&mut out, "serial_number", "").unwrap();
    encode_positional_field(&mut out, "part_number", "XY").unwrap();
    assert_eq!(out, [EMPTY_FIELD, 0xc2, b'X', b'Y']);
}

#[test]
fn encode_single_char() {
    let mut out = Vec::new();
    assert!(matches!(
        encode_positional_field(&mut out, "manufacturer", "A"),
        Err(Error::FieldTooShort(field)) if field == "manufacturer"
    ));
    assert!(matches!(
        encode_field(&mut out, "custom_fields", "x"),
        Err(Error::FieldTooShort(field)) if field == "custom_fields"
    ));
    assert!(out.is_empty());
}

#[test]
fn encode_length_limit() {
    let mut out = Vec::new();
    let value = "a".repeat(MAX_FIELD_LENGTH);
    encode_field(&mut out, "asset_tag", &value).unwrap();
    assert_eq!(out[0], 0xff);
    assert_eq!(out.len(), 64);

    let value = "a".repeat(MAX_FIELD_LENGTH + 1);
    assert!(matches!(
        encode_field(&mut out, "asset_tag", &value),
        Err(Error::FieldTooLong(field, 64)) if field == "asset_tag"
    ));
}

#[test]
fn encode_non_ascii() {
    let mut out = Vec::new();
    assert!(matches!(
        encode_field(&mut out, "product_name", "caf\u{e9}"),
        Err(Error::NonAsciiData(_))
    ));
    assert!(out.is_empty());
}

#[test]
fn read_fields() {
    let data = [0x00, 0xc2, b'x', b'1', 0x01, b'y', 0xc0, END_OF_FIELDS, 0x00];
    let mut reader = FieldReader::new(&data, 0);

    assert_eq!(reader.next_field("a").unwrap().as_deref(), Some(""));
    assert_eq!(reader.next_field("b").unwrap().as_deref(), Some("x1"));
    assert_eq!(reader.next_field("c").unwrap().as_deref(), Some("y"));
    assert_eq!(reader.next_field("d").unwrap().as_deref(), Some(""));
    assert_eq!(reader.next_field("e").unwrap(), None);
    assert_eq!(reader.offset(), 7);
    assert_eq!(reader.next_field("e").unwrap(), None);
}

#[test]
fn read_sixbit_field() {
    let data = [0x83, 0x29, 0xdc, 0xa6, END_OF_FIELDS];
    let mut reader = FieldReader::new(&data, 0);
    assert_eq!(reader.next_field("a").unwrap().as_deref(), Some("IPMI"));
    assert_eq!(reader.offset(), 4);
}

#[test]
fn read_non_ascii() {
    let data = [0xc2, b'o', 0xe9, END_OF_FIELDS];
    let mut reader = FieldReader::new(&data, 0);
    assert!(matches!(
        reader.next_field("product_name"),
        Err(Error::NonAsciiData(field)) if field == "product_name"
    ));
}

#[test]
fn read_truncated() {
    let data = [0xc5, b'a', b'b'];
    let mut reader = FieldReader::new(&data, 0);
    assert!(matches!(reader.next_field("a"), Err(Error::TruncatedBlob)));

    // Missing end of fields marker
    let data = [0xc0];
    let mut reader = FieldReader::new(&data, 0);
    assert_eq!(reader.next_field("a").unwrap().as_deref(), Some(""));
    assert!(matches!(reader.next_field("b"), Err(Error::TruncatedBlob)));
}

#[test]
fn sixbit_punctuation() {
    assert_eq!(sixbit::decode(&[0x40, 0x20, 0x0c]), " !\"#");
}

#[test]
fn sixbit_partial_blocks() {
    assert_eq!(sixbit::decode(&[]), "");
    assert_eq!(sixbit::decode(&[0x29]), "I");
    assert_eq!(sixbit::decode(&[0x29, 0xdc, 0xa6, 0x29]), "IPMII");
    assert_eq!(sixbit::decode(&[0xff, 0xff, 0xff]), "____");
}
