//! Paged PDF tables.
//!
//! The payload is laid out as its table view: an optional title on the first
//! page, a filled header row repeated on every page, and one line per row.
//! Text uses the built-in Helvetica font, so characters outside Latin-1 are
//! written as `?`. Cells wider than their column are cut with `...`.

use std::str::FromStr;

use lopdf::content::{Content, Operation};
use lopdf::{Document, Object, ObjectId, Stream, StringFormat, dictionary};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::Result;
use crate::table::Table;

const MARGIN: f32 = 40.0;
const TITLE_SIZE: f32 = 18.0;
const TITLE_GAP: f32 = 12.0;
const FONT_SIZE: f32 = 10.0;
const ROW_HEIGHT: f32 = 16.0;
const CELL_PADDING: f32 = 4.0;
/// Average Helvetica glyph width as a fraction of the font size.
const GLYPH_WIDTH: f32 = 0.55;
const HEADER_FILL: [f32; 3] = [66.0 / 255.0, 139.0 / 255.0, 202.0 / 255.0];
const GRID_GRAY: f32 = 0.75;
const FONT_NAME: &str = "F1";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Orientation {
    #[default]
    Portrait,
    Landscape,
}

impl FromStr for Orientation {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "portrait" => Ok(Self::Portrait),
            "landscape" => Ok(Self::Landscape),
            _ => Err(format!("Unknown orientation: {s}")),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PageSize {
    #[default]
    A4,
    Letter,
    Legal,
}

impl PageSize {
    /// Portrait width and height in points.
    #[must_use]
    pub const fn dimensions(self) -> (f32, f32) {
        match self {
            Self::A4 => (595.28, 841.89),
            Self::Letter => (612.0, 792.0),
            Self::Legal => (612.0, 1008.0),
        }
    }
}

impl FromStr for PageSize {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "a4" => Ok(Self::A4),
            "letter" => Ok(Self::Letter),
            "legal" => Ok(Self::Legal),
            _ => Err(format!("Unknown page size: {s}")),
        }
    }
}

/// Page setup for PDF exports.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PdfOptions {
    /// Printed above the table on the first page; empty means none.
    pub title: String,
    pub orientation: Orientation,
    #[serde(alias = "pageSize")]
    pub page_size: PageSize,
}

impl PdfOptions {
    /// Width and height in points, after orientation.
    #[must_use]
    pub const fn page_dimensions(&self) -> (f32, f32) {
        let (width, height) = self.page_size.dimensions();
        match self.orientation {
            Orientation::Portrait => (width, height),
            Orientation::Landscape => (height, width),
        }
    }
}

pub(super) fn document(data: &Value, options: &PdfOptions, include_header: bool) -> Result<Vec<u8>> {
    let table = Table::from_value(data);
    let header = (include_header && !table.headers.is_empty()).then_some(table.headers.as_slice());
    let rows: Vec<Vec<String>> = table
        .rows
        .iter()
        .map(|row| row.iter().map(ToString::to_string).collect())
        .collect();

    let (width, height) = options.page_dimensions();
    let layout = Layout::new(width, height, table.column_count());
    let pages = layout.paginate(&options.title, header, &rows);
    assemble(pages, width, height)
}

struct Layout {
    width: f32,
    height: f32,
    column_width: f32,
    max_chars: usize,
}

impl Layout {
    #[allow(
        clippy::cast_precision_loss,
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss
    )]
    fn new(width: f32, height: f32, columns: usize) -> Self {
        let column_width = (width - 2.0 * MARGIN) / columns.max(1) as f32;
        let usable = (column_width - 2.0 * CELL_PADDING).max(0.0);
        Self {
            width,
            height,
            column_width,
            max_chars: (usable / (FONT_SIZE * GLYPH_WIDTH)).floor() as usize,
        }
    }

    fn paginate(
        &self,
        title: &str,
        header: Option<&[String]>,
        rows: &[Vec<String>],
    ) -> Vec<Vec<Operation>> {
        let mut pages = Vec::new();
        let mut ops = Vec::new();
        let mut top = self.height - MARGIN;

        if !title.is_empty() {
            text(&mut ops, title, TITLE_SIZE, MARGIN, top - TITLE_SIZE);
            top -= TITLE_SIZE + TITLE_GAP;
        }
        if let Some(header) = header {
            self.header_row(&mut ops, header, top);
            top -= ROW_HEIGHT;
        }

        for row in rows {
            if top - ROW_HEIGHT < MARGIN {
                pages.push(std::mem::take(&mut ops));
                top = self.height - MARGIN;
                if let Some(header) = header {
                    self.header_row(&mut ops, header, top);
                    top -= ROW_HEIGHT;
                }
            }
            self.body_row(&mut ops, row, top);
            top -= ROW_HEIGHT;
        }
        pages.push(ops);
        pages
    }

    fn header_row(&self, ops: &mut Vec<Operation>, cells: &[String], top: f32) {
        let [r, g, b] = HEADER_FILL;
        ops.push(Operation::new("rg", vec![r.into(), g.into(), b.into()]));
        ops.push(Operation::new(
            "re",
            vec![
                MARGIN.into(),
                (top - ROW_HEIGHT).into(),
                (self.width - 2.0 * MARGIN).into(),
                ROW_HEIGHT.into(),
            ],
        ));
        ops.push(Operation::new("f", vec![]));
        ops.push(Operation::new("g", vec![1.0_f32.into()]));
        self.cells(ops, cells, top);
        ops.push(Operation::new("g", vec![0.0_f32.into()]));
    }

    fn body_row(&self, ops: &mut Vec<Operation>, cells: &[String], top: f32) {
        ops.push(Operation::new("G", vec![GRID_GRAY.into()]));
        ops.push(Operation::new("w", vec![0.5_f32.into()]));
        ops.push(Operation::new(
            "re",
            vec![
                MARGIN.into(),
                (top - ROW_HEIGHT).into(),
                (self.width - 2.0 * MARGIN).into(),
                ROW_HEIGHT.into(),
            ],
        ));
        ops.push(Operation::new("S", vec![]));
        self.cells(ops, cells, top);
    }

    #[allow(clippy::cast_precision_loss)]
    fn cells(&self, ops: &mut Vec<Operation>, cells: &[String], top: f32) {
        let baseline = top - ROW_HEIGHT + (ROW_HEIGHT - FONT_SIZE) / 2.0 + 2.0;
        for (i, cell) in cells.iter().enumerate() {
            let x = MARGIN + self.column_width * i as f32 + CELL_PADDING;
            text(ops, &fit(cell, self.max_chars), FONT_SIZE, x, baseline);
        }
    }
}

fn text(ops: &mut Vec<Operation>, content: &str, size: f32, x: f32, y: f32) {
    ops.push(Operation::new("BT", vec![]));
    ops.push(Operation::new("Tf", vec![FONT_NAME.into(), size.into()]));
    ops.push(Operation::new("Td", vec![x.into(), y.into()]));
    ops.push(Operation::new(
        "Tj",
        vec![Object::String(latin1(content), StringFormat::Literal)],
    ));
    ops.push(Operation::new("ET", vec![]));
}

/// Cuts `cell` to `max_chars`, marking the cut with `...`.
fn fit(cell: &str, max_chars: usize) -> String {
    if cell.chars().count() <= max_chars {
        return cell.to_string();
    }
    let keep = max_chars.saturating_sub(3);
    let mut out: String = cell.chars().take(keep).collect();
    out.push_str(&"...".chars().take(max_chars - keep).collect::<String>());
    out
}

fn latin1(text: &str) -> Vec<u8> {
    text.chars()
        .map(|c| u8::try_from(u32::from(c)).unwrap_or(b'?'))
        .collect()
}

fn assemble(pages: Vec<Vec<Operation>>, width: f32, height: f32) -> Result<Vec<u8>> {
    let mut doc = Document::with_version("1.5");
    let pages_id = doc.new_object_id();
    let font_id = doc.add_object(dictionary! {
        "Type" => "Font",
        "Subtype" => "Type1",
        "BaseFont" => "Helvetica",
        "Encoding" => "WinAnsiEncoding",
    });
    let resources_id = doc.add_object(dictionary! {
        "Font" => dictionary! { FONT_NAME => font_id },
    });

    let mut kids: Vec<Object> = Vec::with_capacity(pages.len());
    for operations in pages {
        let content = Content { operations };
        let content_id = doc.add_object(Stream::new(dictionary! {}, content.encode()?));
        let page_id: ObjectId = doc.add_object(dictionary! {
            "Type" => "Page",
            "Parent" => pages_id,
            "Contents" => content_id,
            "Resources" => resources_id,
            "MediaBox" => vec![0.into(), 0.into(), width.into(), height.into()],
        });
        kids.push(page_id.into());
    }

    let count = i64::try_from(kids.len()).unwrap_or(i64::MAX);
    doc.objects.insert(
        pages_id,
        Object::Dictionary(dictionary! {
            "Type" => "Pages",
            "Kids" => kids,
            "Count" => count,
        }),
    );
    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => pages_id,
    });
    doc.trailer.set("Root", catalog_id);

    let mut bytes = Vec::new();
    doc.save_to(&mut bytes)?;
    Ok(bytes)
}

#[cfg(test)]
#[path = "pdf_tests.rs"]
mod tests;
