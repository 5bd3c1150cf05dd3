use serde::Serialize;

use crate::chart::ChartKind;
use crate::error::Result;
use crate::table::Table;

use super::{ChartReport, OutputFormatter};

pub struct JsonFormatter;

#[derive(Serialize)]
struct KindEntry {
    kind: ChartKind,
    name: &'static str,
}

impl OutputFormatter for JsonFormatter {
    fn format_kinds(&self, kinds: &[ChartKind]) -> Result<String> {
        let entries: Vec<KindEntry> = kinds
            .iter()
            .map(|&kind| KindEntry {
                kind,
                name: kind.display_name(),
            })
            .collect();
        Ok(serde_json::to_string_pretty(&entries)?)
    }

    fn format_chart(&self, report: &ChartReport) -> Result<String> {
        Ok(serde_json::to_string_pretty(report)?)
    }

    fn format_table(&self, table: &Table) -> Result<String> {
        Ok(serde_json::to_string_pretty(table)?)
    }
}
