use std::fmt::Write;

use crate::chart::ChartKind;
use crate::data::display_value;
use crate::error::Result;
use crate::series::{Dataset, Point, SeriesData};
use crate::table::Table;

use super::{ChartReport, OutputFormatter};

/// Plain terminal output.
pub struct TextFormatter;

impl TextFormatter {
    fn write_dataset(out: &mut String, labels: &[String], index: usize, dataset: &Dataset) {
        let name = dataset
            .label
            .clone()
            .unwrap_or_else(|| format!("#{}", index + 1));
        let _ = writeln!(out, "Dataset {name} ({} points)", dataset.len());

        match &dataset.data {
            SeriesData::Values(values) => {
                for (i, value) in values.iter().enumerate() {
                    let label = labels.get(i).map_or("-", String::as_str);
                    let shown = value.map_or_else(|| "-".to_string(), |n| n.to_string());
                    let _ = writeln!(out, "  {label}: {shown}");
                }
            }
            SeriesData::Points(points) => {
                for point in points {
                    let _ = writeln!(out, "  {}", Self::point(point));
                }
            }
        }
    }

    fn point(point: &Point) -> String {
        let (x, y) = (display_value(&point.x), display_value(&point.y));
        match &point.r {
            Some(r) => format!("({x}, {y}, r={})", display_value(r)),
            None => format!("({x}, {y})"),
        }
    }
}

impl OutputFormatter for TextFormatter {
    fn format_kinds(&self, kinds: &[ChartKind]) -> Result<String> {
        if kinds.is_empty() {
            return Ok("No suitable chart kind.\n".to_string());
        }
        let width = kinds.iter().map(|k| k.as_str().len()).max().unwrap_or(0);
        let mut out = String::new();
        for kind in kinds {
            let _ = writeln!(out, "{:<width$}  {}", kind.as_str(), kind.display_name());
        }
        Ok(out)
    }

    fn format_chart(&self, report: &ChartReport) -> Result<String> {
        let mut out = String::new();
        let _ = writeln!(
            out,
            "Chart: {} ({})",
            report.kind.display_name(),
            report.kind
        );

        let series = &report.data;
        if series.is_empty() {
            out.push_str("No data to chart.\n");
            return Ok(out);
        }
        if let Some(labels) = &series.labels {
            let _ = writeln!(out, "Labels: {}", labels.join(", "));
        }
        for (i, dataset) in series.datasets.iter().enumerate() {
            Self::write_dataset(&mut out, series.labels(), i, dataset);
        }
        Ok(out)
    }

    fn format_table(&self, table: &Table) -> Result<String> {
        if table.is_empty() && table.headers.is_empty() {
            return Ok("No data.\n".to_string());
        }

        let rows: Vec<Vec<String>> = table
            .rows
            .iter()
            .map(|row| row.iter().map(ToString::to_string).collect())
            .collect();
        let mut widths: Vec<usize> = table.headers.iter().map(|h| h.chars().count()).collect();
        for row in &rows {
            for (i, cell) in row.iter().enumerate() {
                if let Some(width) = widths.get_mut(i) {
                    *width = (*width).max(cell.chars().count());
                }
            }
        }

        let mut out = String::new();
        write_row(&mut out, &table.headers, &widths);
        let rule: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
        write_row(&mut out, &rule, &widths);
        for row in &rows {
            write_row(&mut out, row, &widths);
        }
        Ok(out)
    }
}

fn write_row(out: &mut String, cells: &[String], widths: &[usize]) {
    let line: Vec<String> = cells
        .iter()
        .zip(widths)
        .map(|(cell, &width)| format!("{cell:<width$}"))
        .collect();
    let _ = writeln!(out, "{}", line.join("  ").trim_end());
}
