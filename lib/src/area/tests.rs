// Copyright (C) 2025 Intel Corporation
// SPDX-License-Identifier: MIT

use super::*;
use crate::checksum::compute_checksum;

fn sum(bytes: &[u8]) -> u8 {
    bytes.iter().fold(0u8, |acc, byte| acc.wrapping_add(*byte))
}

#[test]
fn chassis_layout() {
    let chassis = ChassisArea {
        chassis_type: 23,
        part_number: "CH-100".into(),
        custom_fields: vec!["x1".into(), "x2".into()],
        ..ChassisArea::default()
    };

    let bytes = chassis.to_bytes().unwrap();
    assert_eq!(
        bytes,
        [
            0x01, 0x03, 0x17, 0xc6, b'C', b'H', b'-', b'1', b'0', b'0', 0x00, 0xc2, b'x', b'1',
            0xc2, b'x', b'2', 0xc1, 0x00, 0x00, 0x00, 0x00, 0x00, 0x3e
        ]
    );
    assert_eq!(sum(&bytes), 0);
}

#[test]
fn aligned_lengths() {
    // 2 header bytes + type + 1 + 1 + terminator + checksum fits in 8 bytes
    let mut chassis = ChassisArea::default();
    assert_eq!(chassis.to_bytes().unwrap().len(), 8);

    for length in (0..40).filter(|length| *length != 1) {
        chassis.serial_number = "s".repeat(length);
        let bytes = chassis.to_bytes().unwrap();
        assert_eq!(bytes.len() % AREA_ALIGNMENT, 0);
        assert_eq!(bytes[1] as usize * AREA_ALIGNMENT, bytes.len());
        assert_eq!(sum(&bytes), 0);
        assert_eq!(ChassisArea::from_slice(&bytes, 0).unwrap(), chassis);
    }
}

#[test]
fn single_char_fields() {
    let board = BoardArea {
        manufacturer: "A".into(),
        ..BoardArea::default()
    };
    assert!(matches!(
        board.to_bytes(),
        Err(Error::FieldTooShort(field)) if field == "manufacturer"
    ));

    let product = ProductArea {
        custom_fields: vec!["x".into(), "rev".into()],
        ..ProductArea::default()
    };
    assert!(matches!(
        product.to_bytes(),
        Err(Error::FieldTooShort(field)) if field == "custom_fields"
    ));
}

#[test]
fn board_date() {
    let board = BoardArea {
        language_code: 25,
        mfg_date_time: 0xabcdef,
        ..BoardArea::default()
    };
    let bytes = board.to_bytes().unwrap();
    assert_eq!(&bytes[2..6], [25, 0xef, 0xcd, 0xab]);

    let decoded = BoardArea::from_slice(&bytes, 0).unwrap();
    assert_eq!(decoded.mfg_date_time, 0xabcdef);

    let board = BoardArea {
        mfg_date_time: 0x100_0000,
        ..BoardArea::default()
    };
    assert!(matches!(
        board.to_bytes(),
        Err(Error::DateTimeOutOfRange(_))
    ));
}

#[test]
fn empty_custom_fields_are_skipped() {
    let product = ProductArea {
        custom_fields: vec!["".into(), "ab".into(), "".into()],
        ..ProductArea::default()
    };
    let decoded = ProductArea::from_slice(&product.to_bytes().unwrap(), 0).unwrap();
    assert_eq!(decoded.custom_fields, ["ab"]);
}

#[test]
fn custom_fields_count() {
    for count in 0..10 {
        let custom_fields: Vec<String> = (0..count).map(|i| format!("extra{i}")).collect();

        let chassis = ChassisArea {
            custom_fields: custom_fields.clone(),
            ..ChassisArea::default()
        };
        let decoded = ChassisArea::from_slice(&chassis.to_bytes().unwrap(), 0).unwrap();
        assert_eq!(decoded.custom_fields, custom_fields);

        let board = BoardArea {
            custom_fields: custom_fields.clone(),
            ..BoardArea::default()
        };
        let decoded = BoardArea::from_slice(&board.to_bytes().unwrap(), 0).unwrap();
        assert_eq!(decoded.custom_fields, custom_fields);

        let product = ProductArea {
            custom_fields: custom_fields.clone(),
            ..ProductArea::default()
        };
        let decoded = ProductArea::from_slice(&product.to_bytes().unwrap(), 0).unwrap();
        assert_eq!(decoded.custom_fields, custom_fields);
    }
}

#[test]
fn early_end_of_fields() {
    // Only the manufacturer is present before the end marker.
    let mut bytes = vec![0x01, 0x01, 0x00, 0xc2, b'A', b'B', 0xc1];
    bytes.push(compute_checksum(&bytes));

    let product = ProductArea::from_slice(&bytes, 0).unwrap();
    assert_eq!(product.manufacturer, "AB");
    assert_eq!(product.product_name, "");
    assert!(product.custom_fields.is_empty());
}

#[test]
fn sixbit_field() {
    // Part number "IPMI" packed as 6-bit ASCII, empty serial number
    let mut area = vec![0x01, 0x02, 0x11, 0x83, 0x29, 0xdc, 0xa6, 0x00, 0xc1];
    area.resize(15, 0);
    area.push(compute_checksum(&area));

    let chassis = ChassisArea::from_slice(&area, 0).unwrap();
    assert_eq!(chassis.chassis_type, 0x11);
    assert_eq!(chassis.part_number, "IPMI");
    assert_eq!(chassis.serial_number, "");
}

#[test]
fn bad_checksum() {
    let chassis = ChassisArea::default();
    let mut bytes = chassis.to_bytes().unwrap();
    bytes[2] ^= 0xff;
    assert!(matches!(
        ChassisArea::from_slice(&bytes, 0),
        Err(Error::ChecksumMismatch(0))
    ));
}

#[test]
fn invalid_lengths() {
    let bytes = [0x01, 0x00, 0x00, 0xc1, 0x00, 0x00, 0x00, 0x3e];
    assert!(matches!(
        ChassisArea::from_slice(&bytes, 0),
        Err(Error::InvalidAreaLength(AreaKind::Chassis))
    ));

    let bytes = [0x01, 0x02, 0x00, 0xc1, 0x00, 0x00, 0x00, 0x3c];
    assert!(matches!(
        ChassisArea::from_slice(&bytes, 0),
        Err(Error::TruncatedBlob)
    ));
}

#[test]
fn too_large() {
    let product = ProductArea {
        custom_fields: vec!["a".repeat(63); 40],
        ..ProductArea::default()
    };
    assert!(matches!(
        product.to_bytes(),
        Err(Error::AreaTooLarge(AreaKind::Product))
    ));
}

#[test]
fn internal_padding() {
    let internal = InternalArea {
        format_version: 2,
        data: vec![1, 2, 3],
    };
    assert_eq!(internal.to_bytes(), [0x02, 1, 2, 3, 0, 0, 0, 0]);

    let internal = InternalArea {
        data: vec![0xaa; 7],
        ..InternalArea::default()
    };
    assert_eq!(internal.to_bytes().len(), 8);

    let decoded = InternalArea::from_slice(&internal.to_bytes(), 0, 8).unwrap();
    assert_eq!(decoded, internal);

    let decoded = InternalArea::from_slice(&internal.to_bytes(), 0, 1).unwrap();
    assert!(decoded.is_empty());
}
