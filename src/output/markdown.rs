use std::fmt::Write;

use crate::chart::ChartKind;
use crate::error::Result;
use crate::table::Table;

use super::{ChartReport, OutputFormatter};

/// GitHub-flavored Markdown, for pasting into notes and reports.
pub struct MarkdownFormatter;

fn escape(cell: &str) -> String {
    cell.replace('|', "\\|").replace('\n', "<br>")
}

fn write_row<I, S>(out: &mut String, cells: I)
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    out.push('|');
    for cell in cells {
        let _ = write!(out, " {} |", escape(cell.as_ref()));
    }
    out.push('\n');
}

impl OutputFormatter for MarkdownFormatter {
    fn format_kinds(&self, kinds: &[ChartKind]) -> Result<String> {
        let mut out = String::new();
        write_row(&mut out, ["Kind", "Name"]);
        write_row(&mut out, ["---", "---"]);
        for kind in kinds {
            write_row(&mut out, [kind.as_str(), kind.display_name()]);
        }
        Ok(out)
    }

    fn format_chart(&self, report: &ChartReport) -> Result<String> {
        let series = &report.data;
        let mut out = String::new();
        let _ = writeln!(out, "## {} ({})\n", report.kind.display_name(), report.kind);

        if series.is_empty() {
            out.push_str("_No data to chart._\n");
            return Ok(out);
        }
        let Some(labels) = &series.labels else {
            out.push_str("```json\n");
            out.push_str(&serde_json::to_string_pretty(&series.datasets)?);
            out.push_str("\n```\n");
            return Ok(out);
        };

        let mut header = vec![String::new()];
        header.extend(series.datasets.iter().enumerate().map(|(i, d)| {
            d.label.clone().unwrap_or_else(|| format!("#{}", i + 1))
        }));
        write_row(&mut out, &header);
        write_row(&mut out, header.iter().map(|_| "---"));
        for (i, label) in labels.iter().enumerate() {
            let mut row = vec![label.clone()];
            row.extend(series.datasets.iter().map(|d| {
                d.data
                    .values()
                    .and_then(|values| values.get(i).copied().flatten())
                    .map_or_else(String::new, |n| n.to_string())
            }));
            write_row(&mut out, &row);
        }
        Ok(out)
    }

    fn format_table(&self, table: &Table) -> Result<String> {
        if table.headers.is_empty() {
            return Ok("_No data._\n".to_string());
        }
        let mut out = String::new();
        write_row(&mut out, &table.headers);
        write_row(&mut out, table.headers.iter().map(|_| "---"));
        for row in &table.rows {
            write_row(&mut out, row.iter().map(ToString::to_string));
        }
        Ok(out)
    }
}
