// Copyright (C) 2025 Intel Corporation
// SPDX-License-Identifier: MIT

use ipmi_fru::config;
use ipmi_fru::prelude::*;
use std::path::Path;

const SAMPLES: &str = "tests/samples";

#[test]
fn generate_samples() {
    for name in [
        "basic-all",
        "basic-board",
        "basic-chassis",
        "basic-empty",
        "basic-product",
    ] {
        let dir = Path::new(SAMPLES);
        let record = config::from_path(&dir.join(format!("{name}.toml"))).unwrap();
        let expected = std::fs::read(dir.join(format!("{name}.bin"))).unwrap();
        assert_eq!(dump(&record).unwrap(), expected, "{name}");
    }
}

#[test]
fn internal_file() {
    let dir = Path::new(SAMPLES);
    let record = config::from_path(&dir.join("internal-file.toml")).unwrap();
    assert_eq!(
        record.internal.as_ref().unwrap().data,
        std::fs::read(dir.join("internal-data.bin")).unwrap()
    );
    assert_eq!(
        dump(&record).unwrap(),
        std::fs::read(dir.join("basic-all.bin")).unwrap()
    );

    // Relative paths of in-memory documents start from the working directory
    let record =
        config::from_str("[internal]\nfile = \"tests/samples/internal-data.bin\"\n").unwrap();
    assert_eq!(record.internal.unwrap().data, [1, 2, 3, 4, 5, 6, 7]);
}

#[test]
fn dump_and_reload() {
    for name in ["basic-all", "basic-board", "basic-empty", "checksum-zero"] {
        let blob = std::fs::read(Path::new(SAMPLES).join(format!("{name}.bin"))).unwrap();
        let record = Record::from_slice(&blob).unwrap();

        let text = config::to_string(Some(&record)).unwrap();
        let reloaded = config::from_str(&text).unwrap();
        assert_eq!(reloaded, record, "{name}");
        assert_eq!(dump(&reloaded).unwrap(), blob, "{name}");
    }
}

#[test]
fn missing_file() {
    assert!(matches!(
        config::from_path(Path::new("tests/samples/missing.toml")),
        Err(Error::IOError(_))
    ));
}
