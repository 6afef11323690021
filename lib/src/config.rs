// Copyright (C) 2025 Intel Corporation
// SPDX-License-Identifier: MIT

//! Human-editable TOML description of a FRU blob.
//!
//! The document holds a `[common]` section and one section per area:
//!
//! ```toml
//! [common]
//! format_version = 1
//! size = 256
//! include_internal = false
//!
//! [board]
//! mfg_date_time = "2017-05-29 00:15"
//! manufacturer = "Acme"
//! custom_fields = ["rev A"]
//!
//! [chassis]
//! type = 23
//! part_number = "CH-100"
//! ```
//!
//! Missing keys take the default values of the areas. An area is present in the record unless
//! its `include_<area>` key is set to `false` in `[common]`.


use crate::Error;
use crate::area::{BoardArea, ChassisArea, DEFAULT_FORMAT_VERSION, InternalArea, ProductArea};
use crate::date;
use crate::record::{Common, Record};
use serde::Deserialize;
use std::path::{Path, PathBuf};

#[derive(Deserialize)]
#[serde(default)]
struct CommonSection {
    format_version: u8,
    size: Option<usize>,
    include_internal: bool,
    include_chassis: bool,
    include_board: bool,
    include_product: bool,
}

impl Default for CommonSection {
    fn default() -> Self {
        Self {
            format_version: DEFAULT_FORMAT_VERSION,
            size: None,
            include_internal: true,
            include_chassis: true,
            include_board: true,
            include_product: true,
        }
    }
}

#[derive(Deserialize)]
#[serde(default)]
struct BoardSection {
    format_version: u8,
    language_code: u8,
    mfg_date_time: String,
    manufacturer: String,
    product_name: String,
    serial_number: String,
    part_number: String,
    fru_file_id: String,
    custom_fields: Vec<String>,
}

impl Default for BoardSection {
    fn default() -> Self {
        let area = BoardArea::default();
        Self {
            format_version: area.format_version,
            language_code: area.language_code,
            mfg_date_time: String::new(),
            manufacturer: area.manufacturer,
            product_name: area.product_name,
            serial_number: area.serial_number,
            part_number: area.part_number,
            fru_file_id: area.fru_file_id,
            custom_fields: area.custom_fields,
        }
    }
}

impl TryFrom<BoardSection> for BoardArea {
    type Error = Error;

    fn try_from(section: BoardSection) -> Result<Self, Error> {
        let mfg_date_time = if section.mfg_date_time.is_empty() {
            0
        } else {
            date::minutes_from_str(&section.mfg_date_time)?
        };

        Ok(BoardArea {
            format_version: section.format_version,
            language_code: section.language_code,
            mfg_date_time,
            manufacturer: section.manufacturer,
            product_name: section.product_name,
            serial_number: section.serial_number,
            part_number: section.part_number,
            fru_file_id: section.fru_file_id,
            custom_fields: section.custom_fields,
        })
    }
}

#[derive(Deserialize)]
#[serde(default)]
struct ChassisSection {
    format_version: u8,
    #[serde(rename = "type")]
    chassis_type: u8,
    part_number: String,
    serial_number: String,
    custom_fields: Vec<String>,
}

impl Default for ChassisSection {
    fn default() -> Self {
        ChassisArea::default().into()
    }
}

impl From<ChassisArea> for ChassisSection {
    fn from(area: ChassisArea) -> Self {
        Self {
            format_version: area.format_version,
            chassis_type: area.chassis_type,
            part_number: area.part_number,
            serial_number: area.serial_number,
            custom_fields: area.custom_fields,
        }
    }
}

impl From<ChassisSection> for ChassisArea {
    fn from(section: ChassisSection) -> Self {
        Self {
            format_version: section.format_version,
            chassis_type: section.chassis_type,
            part_number: section.part_number,
            serial_number: section.serial_number,
            custom_fields: section.custom_fields,
        }
    }
}

#[derive(Deserialize)]
#[serde(default)]
struct ProductSection {
    format_version: u8,
    language_code: u8,
    manufacturer: String,
    product_name: String,
    part_number: String,
    product_version: String,
    serial_number: String,
    asset_tag: String,
    fru_file_id: String,
    custom_fields: Vec<String>,
}

impl Default for ProductSection {
    fn default() -> Self {
        ProductArea::default().into()
    }
}

impl From<ProductArea> for ProductSection {
    fn from(area: ProductArea) -> Self {
        Self {
            format_version: area.format_version,
            language_code: area.language_code,
            manufacturer: area.manufacturer,
            product_name: area.product_name,
            part_number: area.part_number,
            product_version: area.product_version,
            serial_number: area.serial_number,
            asset_tag: area.asset_tag,
            fru_file_id: area.fru_file_id,
            custom_fields: area.custom_fields,
        }
    }
}

impl From<ProductSection> for ProductArea {
    fn from(section: ProductSection) -> Self {
        Self {
            format_version: section.format_version,
            language_code: section.language_code,
            manufacturer: section.manufacturer,
            product_name: section.product_name,
            part_number: section.part_number,
            product_version: section.product_version,
            serial_number: section.serial_number,
            asset_tag: section.asset_tag,
            fru_file_id: section.fru_file_id,
            custom_fields: section.custom_fields,
        }
    }
}

/// Content of the internal use area: a list of byte values or a string stored as UTF-8.
#[derive(Deserialize)]
#[serde(untagged)]
enum InternalData {
    Bytes(Vec<u8>),
    Text(String),
}

impl InternalData {
    fn into_bytes(self) -> Vec<u8> {
        match self {
            InternalData::Bytes(bytes) => bytes,
            InternalData::Text(text) => text.into_bytes(),
        }
    }
}

#[derive(Deserialize)]
#[serde(default)]
struct InternalSection {
    format_version: u8,
    data: Option<InternalData>,
    file: Option<PathBuf>,
}

impl Default for InternalSection {
    fn default() -> Self {
        Self {
            format_version: DEFAULT_FORMAT_VERSION,
            data: None,
            file: None,
        }
    }
}

impl InternalSection {
    fn into_area(self, base_dir: Option<&Path>) -> Result<InternalArea, Error> {
        let data = self.data.map(InternalData::into_bytes).unwrap_or_default();

        let data = match self.file {
            Some(_) if !data.is_empty() => {
                return Err(Error::InvalidConfig(
                    "[internal] cannot specify both \"data\" and \"file\"".into(),
                ));
            }
            Some(file) => {
                let path = base_dir.map_or_else(|| file.clone(), |dir| dir.join(&file));
                log::debug!("Reading internal use area from {}", path.display());
                std::fs::read(&path).map_err(|_| Error::MissingInternalFile(path))?
            }
            None => data,
        };

        Ok(InternalArea {
            format_version: self.format_version,
            data,
        })
    }
}

#[derive(Default, Deserialize)]
#[serde(default)]
struct Document {
    common: CommonSection,
    internal: InternalSection,
    chassis: ChassisSection,
    board: BoardSection,
    product: ProductSection,
}

impl Document {
    fn into_record(self, base_dir: Option<&Path>) -> Result<Record, Error> {
        let common = self.common;

        let internal = if common.include_internal {
            Some(self.internal.into_area(base_dir)?).filter(|area| !area.is_empty())
        } else {
            None
        };

        Ok(Record {
            common: Common {
                format_version: Some(common.format_version),
                size: common.size,
            },
            internal,
            chassis: common.include_chassis.then(|| self.chassis.into()),
            board: common
                .include_board
                .then(|| BoardArea::try_from(self.board))
                .transpose()?,
            product: common.include_product.then(|| self.product.into()),
        })
    }
}

/// Parses a TOML document into a [`Record`].
///
/// A relative `[internal] file` is resolved from the current working directory.
pub fn from_str(text: &str) -> Result<Record, Error> {
    let document: Document = toml::from_str(text)?;
    document.into_record(None)
}

/// Reads a TOML file into a [`Record`].
///
/// A relative `[internal] file` is resolved from the directory of `path`.
pub fn from_path(path: &Path) -> Result<Record, Error> {
    log::debug!("Reading TOML file: {}", path.display());
    let text = std::fs::read_to_string(path)?;
    let document: Document = toml::from_str(&text)?;
    document.into_record(path.parent())
}

const HEADER: &str = "\
# -------------------------------------------------------------------
# Notes regarding the TOML format, which is like an INI file:
#
# * Values surrounded by quotation marks are strings: \"Vendor\"
#   Literal quotation marks must be escaped using a backslash: \"\\\"\"
#   Literal backslashes must also be escaped using a backslash: \"\\\\\"
# * Boolean values use the words \"true\" and \"false\" without quotes.
# * Numbers that begin with 0x are interpreted as hexadecimal: 0x30
#
# -------------------------------------------------------------------
";

const VERSION_WARNING: &str = "# Warning: It may be harmful to modify *format_version*.";

const DATE_LEGEND: &str = "\
#                │    │  │  │  │
#         year ──┘    │  │  │  ╰── minutes
#             month ──╯  │  ╰── hours
#                  day ──╯";

const INTERNAL_NOTES: &str = "\
# The *data* key holds the content of the area as a list of numbers or
# as a string.
#
# Alternatively, if the *file* key is specified then the file will be
# opened and read in binary mode. Relative paths are resolved from the
# directory of this file.
#
# Examples:
#
#     data = [0x01, 0x02, 0x03]
#     file = \"path/to/file\"
#
# Do not use the *data* and *file* keys at the same time.";

/// Accumulates the lines of the generated document.
#[derive(Default)]
struct Template {
    lines: Vec<String>,
}

impl Template {
    fn line(&mut self, line: impl Into<String>) {
        self.lines.push(line.into());
    }

    fn key(&mut self, name: &str, value: impl Into<toml::Value>) {
        self.lines.push(format!("{name} = {}", value.into()));
    }

    fn section(&mut self, name: &str, format_version: u8) {
        self.line("");
        self.line(format!("[{name}]"));
        self.line(VERSION_WARNING);
        self.key("format_version", format_version);
        self.line("");
    }

    fn bytes(&mut self, name: &str, data: &[u8]) {
        if data.is_empty() {
            self.line(format!("{name} = []"));
            return;
        }

        self.line(format!("{name} = ["));
        for block in data.chunks(16) {
            let values: Vec<String> = block.iter().map(|byte| format!("{byte:#04x}")).collect();
            self.line(format!("    {},", values.join(", ")));
        }
        self.line("]");
    }

    fn finish(mut self) -> String {
        self.lines.push(String::new());
        self.lines.join("\n")
    }
}

/// Generates a commented TOML document describing `record`.
///
/// Areas that are absent from the record are written with their default values and excluded
/// with their `include_<area>` key. Without a record, a blank template is generated.
pub fn to_string(record: Option<&Record>) -> Result<String, Error> {
    let default = Record::default();
    let record = record.unwrap_or(&default);

    let internal = record.internal.clone().filter(|area| !area.is_empty());
    let chassis = record.chassis.clone().unwrap_or_default();
    let board = record.board.clone().unwrap_or_default();
    let product = record.product.clone().unwrap_or_default();

    let mut doc = Template::default();
    doc.line(HEADER);

    doc.line("[common]");
    doc.line(VERSION_WARNING);
    doc.key(
        "format_version",
        record.common.format_version.unwrap_or(DEFAULT_FORMAT_VERSION),
    );
    doc.line("");
    doc.line("# Warning: It may be harmful to modify *size*.");
    match record.common.size {
        Some(size) => doc.key("size", size as i64),
        None => doc.line("# size = 256"),
    }
    doc.line("");
    doc.line("# These options control which sections are included in the FRU file.");
    doc.key("include_internal", internal.is_some());
    doc.key("include_chassis", record.chassis.is_some());
    doc.key("include_board", record.board.is_some());
    doc.key("include_product", record.product.is_some());
    doc.line("");

    let internal_version = internal
        .as_ref()
        .map_or(DEFAULT_FORMAT_VERSION, |area| area.format_version);
    doc.section("internal", internal_version);
    doc.line(INTERNAL_NOTES);
    doc.line("");
    doc.bytes(
        "data",
        internal
            .as_ref()
            .map(|area| area.data.as_slice())
            .unwrap_or_default(),
    );
    doc.line("");

    doc.section("chassis", chassis.format_version);
    doc.key("type", chassis.chassis_type);
    doc.key("part_number", chassis.part_number);
    doc.key("serial_number", chassis.serial_number);
    doc.key("custom_fields", chassis.custom_fields);
    doc.line("");

    doc.section("board", board.format_version);
    doc.key("language_code", board.language_code);
    doc.line("");
    doc.key("mfg_date_time", date::minutes_to_string(board.mfg_date_time)?);
    doc.line(DATE_LEGEND);
    doc.line("");
    doc.key("manufacturer", board.manufacturer);
    doc.key("product_name", board.product_name);
    doc.key("serial_number", board.serial_number);
    doc.key("part_number", board.part_number);
    doc.key("fru_file_id", board.fru_file_id);
    doc.key("custom_fields", board.custom_fields);
    doc.line("");

    doc.section("product", product.format_version);
    doc.key("language_code", product.language_code);
    doc.key("manufacturer", product.manufacturer);
    doc.key("product_name", product.product_name);
    doc.key("part_number", product.part_number);
    doc.key("product_version", product.product_version);
    doc.key("serial_number", product.serial_number);
    doc.key("asset_tag", product.asset_tag);
    doc.key("fru_file_id", product.fru_file_id);
    doc.key("custom_fields", product.custom_fields);

    Ok(doc.finish())
}
