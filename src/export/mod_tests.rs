use std::io::Read;

use serde_json::json;

use super::xlsx::{SHEET_PATH, WORKBOOK_PATH, column_name};
use super::*;

fn text(artifact: &ExportArtifact) -> String {
    String::from_utf8(artifact.bytes.clone()).unwrap()
}

fn csv_of(data: &Value) -> String {
    text(&export_data(data, ExportFormat::Csv, &ExportOptions::default()).unwrap())
}

fn zip_entry(bytes: &[u8], name: &str) -> String {
    let mut archive = zip::ZipArchive::new(std::io::Cursor::new(bytes)).unwrap();
    let mut entry = archive.by_name(name).unwrap();
    let mut content = String::new();
    entry.read_to_string(&mut content).unwrap();
    content
}

#[test]
fn format_parsing() {
    assert_eq!("json".parse::<ExportFormat>().unwrap(), ExportFormat::Json);
    assert_eq!("CSV".parse::<ExportFormat>().unwrap(), ExportFormat::Csv);
    assert_eq!("text".parse::<ExportFormat>().unwrap(), ExportFormat::Txt);
    assert_eq!("xlsx".parse::<ExportFormat>().unwrap(), ExportFormat::Excel);
    assert_eq!("PDF".parse::<ExportFormat>().unwrap(), ExportFormat::Pdf);
    assert!("docx".parse::<ExportFormat>().unwrap_err().contains("docx"));
}

#[test]
fn format_extensions_and_mime() {
    let extensions: Vec<_> = ExportFormat::ALL.iter().map(|f| f.extension()).collect();
    assert_eq!(extensions, ["json", "csv", "txt", "xlsx", "pdf"]);
    assert_eq!(ExportFormat::Pdf.mime(), "application/pdf");
    assert_eq!(ExportFormat::Json.mime(), "application/json");
    assert!(ExportFormat::Excel.mime().contains("spreadsheetml"));
}

#[test]
fn options_defaults() {
    let options = ExportOptions::default();
    assert_eq!(options.file_name, "export");
    assert_eq!(options.sheet_name, "Sheet1");
    assert!(options.include_header);
    assert!(!options.add_timestamp);
}

#[test]
fn options_accept_camel_case_keys() {
    let options: ExportOptions =
        serde_json::from_value(json!({"fileName": "report", "addTimestamp": true})).unwrap();
    assert_eq!(options.file_name, "report");
    assert!(options.add_timestamp);
    assert_eq!(options.sheet_name, "Sheet1");
}

#[test]
fn timestamp_is_file_name_safe() {
    let now = DateTime::from_timestamp_millis(1_704_164_645_123).unwrap();
    assert_eq!(timestamp(now), "2024-01-02T03-04-05-123Z");

    let options = ExportOptions::default()
        .with_file_name("report")
        .with_timestamp(true);
    assert_eq!(options.file_stem(now), "report_2024-01-02T03-04-05-123Z");
}

#[test]
fn empty_file_name_falls_back_to_default() {
    let options = ExportOptions::default().with_file_name("");
    let artifact = export_data(&json!([]), ExportFormat::Json, &options).unwrap();
    assert_eq!(artifact.file_name, "export.json");
}

#[test]
fn json_export_is_pretty_printed() {
    let options = ExportOptions::default().with_file_name("data");
    let artifact = export_data(&json!({"a": 1}), ExportFormat::Json, &options).unwrap();
    assert_eq!(artifact.file_name, "data.json");
    assert_eq!(artifact.mime, "application/json");
    assert_eq!(text(&artifact), "{\n  \"a\": 1\n}");
}

#[test]
fn txt_export_keeps_strings_verbatim() {
    let options = ExportOptions::default();
    let plain = export_data(&json!("hello\nworld"), ExportFormat::Txt, &options).unwrap();
    assert_eq!(text(&plain), "hello\nworld");

    let structured = export_data(&json!([1, 2]), ExportFormat::Txt, &options).unwrap();
    assert_eq!(text(&structured), "[\n  1,\n  2\n]");
}

#[test]
fn csv_records_quote_special_cells() {
    let data = json!([
        {"name": "A, Inc", "value": 1},
        {"name": "B", "value": null}
    ]);
    assert_eq!(csv_of(&data), "name,value\n\"A, Inc\",1\nB,\n");
}

#[test]
fn csv_records_use_first_row_columns() {
    let data = json!([{"a": 1, "b": 2}, {"b": 4, "c": 5}]);
    assert_eq!(csv_of(&data), "a,b\n1,2\n,4\n");
}

#[test]
fn csv_without_header() {
    let options = ExportOptions {
        include_header: false,
        ..ExportOptions::default()
    };
    let artifact = export_data(&json!([{"a": 1, "b": 2}]), ExportFormat::Csv, &options).unwrap();
    assert_eq!(text(&artifact), "1,2\n");
}

#[test]
fn csv_nested_cells_are_json() {
    let data = json!([{"id": 1, "tags": ["x", "y"]}]);
    assert_eq!(csv_of(&data), "id,tags\n1,\"[\"\"x\"\",\"\"y\"\"]\"\n");
}

#[test]
fn csv_scalar_array_one_per_line() {
    assert_eq!(csv_of(&json!([1, "x", 2.5])), "1\nx\n2.5\n");
}

#[test]
fn csv_tuple_array_uses_positions_as_header() {
    assert_eq!(csv_of(&json!([[1, 2], [3, 4]])), "0,1\n1,2\n3,4\n");
}

#[test]
fn csv_mapping_is_key_value_pairs() {
    let data = json!({"a": 1, "b": "x,y"});
    assert_eq!(csv_of(&data), "key,value\na,1\nb,\"x,y\"\n");
}

#[test]
fn csv_of_empty_inputs() {
    assert_eq!(csv_of(&Value::Null), "");
    assert_eq!(csv_of(&json!([])), "");
    assert_eq!(csv_of(&json!(42)), "42");
}

#[test]
fn excel_export_is_a_workbook() {
    let options = ExportOptions {
        sheet_name: "Sales & Costs".to_string(),
        ..ExportOptions::default()
    };
    let data = json!([{"month": "<Jan>", "sales": 10}]);
    let artifact = export_data(&data, ExportFormat::Excel, &options).unwrap();
    assert_eq!(artifact.file_name, "export.xlsx");

    let workbook = zip_entry(&artifact.bytes, WORKBOOK_PATH);
    assert!(workbook.contains(r#"name="Sales &amp; Costs""#));

    let sheet = zip_entry(&artifact.bytes, SHEET_PATH);
    assert!(sheet.contains(r#"<c r="A1" t="inlineStr"><is><t xml:space="preserve">month</t></is></c>"#));
    assert!(sheet.contains("&lt;Jan&gt;"));
    assert!(sheet.contains(r#"<c r="B2"><v>10</v></c>"#));
}

#[test]
fn excel_scalar_array_has_index_column() {
    let artifact =
        export_data(&json!(["a", "b"]), ExportFormat::Excel, &ExportOptions::default()).unwrap();
    let sheet = zip_entry(&artifact.bytes, SHEET_PATH);
    assert!(sheet.contains("索引"));
    assert!(sheet.contains(r#"<c r="A3"><v>1</v></c>"#));
}

#[test]
fn excel_without_header_starts_with_data() {
    let options = ExportOptions {
        include_header: false,
        ..ExportOptions::default()
    };
    let artifact = export_data(&json!({"k": 5}), ExportFormat::Excel, &options).unwrap();
    let sheet = zip_entry(&artifact.bytes, SHEET_PATH);
    assert!(!sheet.contains("键"));
    assert!(sheet.contains(r#"<c r="B1"><v>5</v></c>"#));
}

#[test]
fn column_names() {
    assert_eq!(column_name(0), "A");
    assert_eq!(column_name(25), "Z");
    assert_eq!(column_name(26), "AA");
    assert_eq!(column_name(27), "AB");
    assert_eq!(column_name(701), "ZZ");
    assert_eq!(column_name(702), "AAA");
}

#[test]
fn batch_bundles_each_item() {
    let items = vec![
        BatchItem::new(json!({"a": 1}), "first", ExportFormat::Json),
        BatchItem::new(json!([1, 2]), "second", ExportFormat::Csv),
        BatchItem::new(json!([{"x": 1}]), "third", ExportFormat::Excel),
    ];
    let artifact = batch_export(&items, "bundle").unwrap();
    assert_eq!(artifact.file_name, "bundle.zip");
    assert_eq!(artifact.mime, "application/zip");

    assert_eq!(zip_entry(&artifact.bytes, "first.json"), "{\n  \"a\": 1\n}");
    assert_eq!(zip_entry(&artifact.bytes, "second.csv"), "1\n2\n");

    let archive = zip::ZipArchive::new(std::io::Cursor::new(artifact.bytes.as_slice())).unwrap();
    assert_eq!(archive.len(), 3);
}

#[test]
fn batch_keeps_last_item_for_a_repeated_name() {
    let items = vec![
        BatchItem::new(json!({"v": 1}), "report", ExportFormat::Json),
        BatchItem::new(json!([1]), "report", ExportFormat::Csv),
        BatchItem::new(json!({"v": 2}), "report", ExportFormat::Json),
    ];
    let artifact = batch_export(&items, "bundle").unwrap();

    let archive = zip::ZipArchive::new(std::io::Cursor::new(artifact.bytes.as_slice())).unwrap();
    let names: Vec<&str> = archive.file_names().collect();
    assert_eq!(names.len(), 2);
    assert_eq!(zip_entry(&artifact.bytes, "report.json"), "{\n  \"v\": 2\n}");
    assert_eq!(zip_entry(&artifact.bytes, "report.csv"), "1\n");
}

#[test]
fn batch_rejects_names_with_separators() {
    for name in ["../../evil", "nested/entry", "..\\evil"] {
        let items = vec![BatchItem::new(json!([1]), name, ExportFormat::Json)];
        let err = batch_export(&items, "bundle").unwrap_err();
        assert!(matches!(err, KortexError::Config(_)), "{name}: {err}");
        assert!(err.to_string().contains("path separators"));
    }
}

#[test]
fn batch_includes_pdf_entries() {
    let mut item = BatchItem::new(json!([{"month": "Jan"}]), "table", ExportFormat::Pdf);
    item.options.pdf.title = "Batch".to_string();
    let artifact = batch_export(&[item], "bundle").unwrap();

    let mut archive = zip::ZipArchive::new(std::io::Cursor::new(artifact.bytes.as_slice())).unwrap();
    let mut bytes = Vec::new();
    archive.by_name("table.pdf").unwrap().read_to_end(&mut bytes).unwrap();
    let doc = lopdf::Document::load_mem(&bytes).unwrap();
    let text = doc.extract_text(&[1]).unwrap();
    assert!(text.contains("Batch") && text.contains("Jan"), "{text}");
}

#[test]
fn batch_manifest_deserializes() {
    let items: Vec<BatchItem> = serde_json::from_value(json!([
        {"data": [1], "fileName": "one", "format": "csv"},
        {"data": {"a": 1}, "fileName": "two", "format": "xlsx", "options": {"sheetName": "S"}}
    ]))
    .unwrap();
    assert_eq!(items[0].format, ExportFormat::Csv);
    assert_eq!(items[1].format, ExportFormat::Excel);
    assert_eq!(items[1].options.sheet_name, "S");
}

#[test]
fn batch_manifest_rejects_unknown_format() {
    let result: std::result::Result<Vec<BatchItem>, _> =
        serde_json::from_value(json!([{"data": 1, "fileName": "x", "format": "docx"}]));
    assert!(result.is_err());
}

#[test]
fn empty_batch_is_an_empty_archive() {
    let artifact = batch_export(&[], "").unwrap();
    assert_eq!(artifact.file_name, "export.zip");
    let archive = zip::ZipArchive::new(std::io::Cursor::new(artifact.bytes.as_slice())).unwrap();
    assert_eq!(archive.len(), 0);
}

#[test]
fn artifact_writes_into_directory() {
    let dir = tempfile::tempdir().unwrap();
    let artifact = export_data(&json!([1]), ExportFormat::Txt, &ExportOptions::default()).unwrap();
    let path = artifact.write_to(dir.path()).unwrap();
    assert_eq!(path, dir.path().join("export.txt"));
    assert_eq!(std::fs::read_to_string(path).unwrap(), "[\n  1\n]");
}

#[test]
fn artifact_write_to_missing_directory_fails() {
    let dir = tempfile::tempdir().unwrap();
    let artifact = export_data(&json!(1), ExportFormat::Json, &ExportOptions::default()).unwrap();
    let err = artifact.write_to(&dir.path().join("missing")).unwrap_err();
    assert_eq!(err.error_type(), "FileWrite");
}
