//! Single-sheet Office Open XML workbooks.

use std::fmt::Write as _;
use std::io::{Cursor, Write};

use quick_xml::escape::escape;
use serde_json::Value;
use zip::ZipWriter;
use zip::write::SimpleFileOptions;

use crate::error::Result;
use crate::table::{Cell, Table};

pub(super) const SHEET_PATH: &str = "xl/worksheets/sheet1.xml";
pub(super) const WORKBOOK_PATH: &str = "xl/workbook.xml";

const XML_DECL: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#;

const CONTENT_TYPES: &str = concat!(
    r#"<Types xmlns="http://schemas.openxmlformats.org/package/2006/content-types">"#,
    r#"<Default Extension="rels" ContentType="application/vnd.openxmlformats-package.relationships+xml"/>"#,
    r#"<Default Extension="xml" ContentType="application/xml"/>"#,
    r#"<Override PartName="/xl/workbook.xml" ContentType="application/vnd.openxmlformats-officedocument.spreadsheetml.sheet.main+xml"/>"#,
    r#"<Override PartName="/xl/worksheets/sheet1.xml" ContentType="application/vnd.openxmlformats-officedocument.spreadsheetml.worksheet+xml"/>"#,
    r#"</Types>"#
);

const ROOT_RELS: &str = concat!(
    r#"<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships">"#,
    r#"<Relationship Id="rId1" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/officeDocument" Target="xl/workbook.xml"/>"#,
    r#"</Relationships>"#
);

const WORKBOOK_RELS: &str = concat!(
    r#"<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships">"#,
    r#"<Relationship Id="rId1" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/worksheet" Target="worksheets/sheet1.xml"/>"#,
    r#"</Relationships>"#
);

/// Lays `data` out as a table and packs it into an `.xlsx` archive.
pub(super) fn workbook(data: &Value, sheet_name: &str, include_header: bool) -> Result<Vec<u8>> {
    let table = Table::from_value(data);
    let parts = [
        ("[Content_Types].xml", format!("{XML_DECL}{CONTENT_TYPES}")),
        ("_rels/.rels", format!("{XML_DECL}{ROOT_RELS}")),
        (WORKBOOK_PATH, workbook_xml(sheet_name)),
        ("xl/_rels/workbook.xml.rels", format!("{XML_DECL}{WORKBOOK_RELS}")),
        (SHEET_PATH, sheet_xml(&table, include_header)),
    ];

    let mut zip = ZipWriter::new(Cursor::new(Vec::new()));
    for (path, content) in parts {
        zip.start_file(path, SimpleFileOptions::default())?;
        zip.write_all(content.as_bytes())?;
    }
    Ok(zip.finish()?.into_inner())
}

fn workbook_xml(sheet_name: &str) -> String {
    format!(
        concat!(
            "{decl}",
            r#"<workbook xmlns="http://schemas.openxmlformats.org/spreadsheetml/2006/main" "#,
            r#"xmlns:r="http://schemas.openxmlformats.org/officeDocument/2006/relationships">"#,
            r#"<sheets><sheet name="{name}" sheetId="1" r:id="rId1"/></sheets></workbook>"#
        ),
        decl = XML_DECL,
        name = escape(sheet_name),
    )
}

fn sheet_xml(table: &Table, include_header: bool) -> String {
    let header = include_header
        .then(|| table.headers.iter().cloned().map(Cell::Text).collect::<Vec<_>>())
        .filter(|cells| !cells.is_empty());

    let mut xml = String::from(XML_DECL);
    xml.push_str(r#"<worksheet xmlns="http://schemas.openxmlformats.org/spreadsheetml/2006/main"><sheetData>"#);
    for (i, cells) in header.iter().chain(&table.rows).enumerate() {
        let row = i + 1;
        let _ = write!(xml, r#"<row r="{row}">"#);
        for (col, cell) in cells.iter().enumerate() {
            let reference = format!("{}{row}", column_name(col));
            match cell {
                Cell::Empty => {}
                Cell::Number(n) => {
                    let _ = write!(xml, r#"<c r="{reference}"><v>{n}</v></c>"#);
                }
                Cell::Text(text) => {
                    let _ = write!(
                        xml,
                        r#"<c r="{reference}" t="inlineStr"><is><t xml:space="preserve">{}</t></is></c>"#,
                        escape(text.as_str())
                    );
                }
            }
        }
        xml.push_str("</row>");
    }
    xml.push_str("</sheetData></worksheet>");
    xml
}

/// Spreadsheet column letters for a zero-based index: `A`..`Z`, `AA`, ...
#[allow(clippy::cast_possible_truncation)]
pub(super) fn column_name(index: usize) -> String {
    let mut name = Vec::new();
    let mut n = index + 1;
    while n > 0 {
        let rem = (n - 1) % 26;
        name.push(b'A' + rem as u8);
        n = (n - 1) / 26;
    }
    name.reverse();
    String::from_utf8(name).unwrap_or_default()
}
