use serde_json::json;

use super::*;
use crate::chart::ChartConfig;
use crate::color::ColorGenerator;
use crate::series::SeriesBuilder;

fn report(data: &Value, kind: ChartKind) -> ChartReport {
    let config = ChartConfig::default();
    ChartReport {
        kind,
        data: SeriesBuilder::new(&config)
            .with_colors(ColorGenerator::seeded(1))
            .build(data, kind),
        options: None,
    }
}

#[test]
fn output_format_from_str() {
    assert_eq!("text".parse::<OutputFormat>().unwrap(), OutputFormat::Text);
    assert_eq!("JSON".parse::<OutputFormat>().unwrap(), OutputFormat::Json);
    assert_eq!("md".parse::<OutputFormat>().unwrap(), OutputFormat::Markdown);
    assert_eq!("csv".parse::<OutputFormat>().unwrap(), OutputFormat::Csv);
    assert!("sarif".parse::<OutputFormat>().is_err());
}

#[test]
fn csv_has_no_formatter() {
    assert!(OutputFormat::Csv.formatter().is_none());
    assert!(OutputFormat::Text.formatter().is_some());
}

#[test]
fn text_kinds_are_aligned() {
    let output = TextFormatter
        .format_kinds(&[ChartKind::Bar, ChartKind::PolarArea])
        .unwrap();
    assert_eq!(output, "bar        柱状图\npolarArea  极坐标图\n");
}

#[test]
fn text_kinds_empty() {
    let output = TextFormatter.format_kinds(&[]).unwrap();
    assert!(output.contains("No suitable chart kind"));
}

#[test]
fn json_kinds_list_names() {
    let output = JsonFormatter.format_kinds(&[ChartKind::PolarArea]).unwrap();
    let parsed: Value = serde_json::from_str(&output).unwrap();
    assert_eq!(parsed, json!([{"kind": "polarArea", "name": "极坐标图"}]));
}

#[test]
fn json_chart_report_shape() {
    let report = report(&json!({"a": 1, "b": 2}), ChartKind::Bar);
    let output = JsonFormatter.format_chart(&report).unwrap();
    let parsed: Value = serde_json::from_str(&output).unwrap();
    assert_eq!(parsed["kind"], json!("bar"));
    assert_eq!(parsed["data"]["labels"], json!(["a", "b"]));
    assert_eq!(parsed["data"]["datasets"][0]["data"], json!([1.0, 2.0]));
    assert!(parsed.get("options").is_none());
}

#[test]
fn text_chart_lists_values() {
    let report = report(
        &json!([{"month": "Jan", "sales": 10}, {"month": "Feb", "sales": 20}]),
        ChartKind::Line,
    );
    let output = TextFormatter.format_chart(&report).unwrap();
    assert!(output.starts_with("Chart: 折线图 (line)\n"));
    assert!(output.contains("Labels: Jan, Feb"));
    assert!(output.contains("Dataset sales (2 points)"));
    assert!(output.contains("  Feb: 20"));
}

#[test]
fn text_chart_lists_points() {
    let report = report(&json!([[1, 2, 3]]), ChartKind::Bubble);
    let output = TextFormatter.format_chart(&report).unwrap();
    assert!(output.contains("(1, 2, r=3)"));
    assert!(!output.contains("Labels:"));
}

#[test]
fn text_chart_empty() {
    let output = TextFormatter
        .format_chart(&report(&Value::Null, ChartKind::Pie))
        .unwrap();
    assert!(output.contains("No data to chart."));
}

#[test]
fn text_table_is_padded() {
    let table = Table::from_value(&json!([{"name": "Ann", "n": 1}, {"name": "Bo", "n": 22}]));
    let output = TextFormatter.format_table(&table).unwrap();
    assert_eq!(output, "name  n\n----  --\nAnn   1\nBo    22\n");
}

#[test]
fn text_table_empty() {
    let output = TextFormatter.format_table(&Table::default()).unwrap();
    assert_eq!(output, "No data.\n");
}

#[test]
fn markdown_table_escapes_pipes() {
    let table = Table::from_value(&json!({"a|b": "x"}));
    let output = MarkdownFormatter.format_table(&table).unwrap();
    assert_eq!(output, "| 键 | 值 |\n| --- | --- |\n| a\\|b | x |\n");
}

#[test]
fn markdown_chart_is_label_by_dataset_grid() {
    let report = report(
        &json!([{"m": "Jan", "s": 1, "c": 2}, {"m": "Feb", "s": 3}]),
        ChartKind::Bar,
    );
    let output = MarkdownFormatter.format_chart(&report).unwrap();
    assert!(output.contains("|  | s | c |"));
    assert!(output.contains("| Jan | 1 | 2 |"));
    assert!(output.contains("| Feb | 3 |  |"));
}

#[test]
fn markdown_kinds_table() {
    let output = MarkdownFormatter.format_kinds(&[ChartKind::Table]).unwrap();
    assert!(output.contains("| table | 表格 |"));
}
