// src/extract/mod.rs
use chrono::{DateTime, Local};
use scraper::{ElementRef, Html, Selector};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::debug;

use crate::dates;

/// One logical data row, keyed by column header.
pub type RecordRow = BTreeMap<String, String>;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExtractionMetadata {
    pub source_file: String,
    pub conversion_date: String,
    /// Count of ALL `<table>` elements in the document, including ones that
    /// were excluded from `tables` for being empty.
    pub tables_found: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExtractedTable {
    /// Position among all tables in document order. Gaps appear where an
    /// empty table was skipped.
    pub table_index: usize,
    pub headers: Vec<String>,
    pub rows: Vec<RecordRow>,
    pub row_count: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExtractionResult {
    pub metadata: ExtractionMetadata,
    pub tables: Vec<ExtractedTable>,
}

/// Convert every `<table>` in `html_text` into a record set keyed by the
/// table's first row.
///
/// Parsing is tolerant: malformed or entirely non-HTML input degrades to an
/// empty table set rather than an error. Row queries are unscoped descendant
/// queries, so rows of nested tables flatten into the ancestor table's row
/// list. The exported reports rely on this, so it stays.
pub fn extract_tables(
    html_text: &str,
    source_file: &str,
    now: DateTime<Local>,
) -> ExtractionResult {
    let table_sel = Selector::parse("table").expect("CSS selector for tables should be valid");
    let tr_sel = Selector::parse("tr").expect("CSS selector for rows should be valid");
    let header_cell_sel =
        Selector::parse("th, td").expect("CSS selector for header cells should be valid");
    let td_sel = Selector::parse("td").expect("CSS selector for data cells should be valid");

    let document = Html::parse_document(html_text);
    let all_tables: Vec<ElementRef> = document.select(&table_sel).collect();

    let mut tables = Vec::new();
    for (i, table) in all_tables.iter().enumerate() {
        let rows: Vec<ElementRef> = table.select(&tr_sel).collect();
        if rows.is_empty() {
            continue;
        }

        // First row is the header row; either cell kind contributes.
        let headers: Vec<String> = rows[0].select(&header_cell_sel).map(cell_text).collect();

        // Remaining rows contribute `<td>` cells only, zipped positionally
        // against the headers. Overflow cells are dropped, and a row that
        // ends up with no pairings at all is dropped too.
        let mut record_rows: Vec<RecordRow> = Vec::new();
        for row in &rows[1..] {
            let record: RecordRow = headers
                .iter()
                .zip(row.select(&td_sel).map(cell_text))
                .map(|(header, value)| (header.clone(), value))
                .collect();
            if !record.is_empty() {
                record_rows.push(record);
            }
        }

        if record_rows.is_empty() {
            debug!(table_index = i, "skipping table with no data rows");
            continue;
        }

        tables.push(ExtractedTable {
            table_index: i,
            headers,
            row_count: record_rows.len(),
            rows: record_rows,
        });
    }

    ExtractionResult {
        metadata: ExtractionMetadata {
            source_file: source_file.to_string(),
            conversion_date: dates::isoformat(now),
            tables_found: all_tables.len(),
        },
        tables,
    }
}

/// Concatenated descendant text of a cell, with outer whitespace removed.
fn cell_text(cell: ElementRef) -> String {
    cell.text().collect::<String>().trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn extract(html: &str) -> ExtractionResult {
        let now = Local.with_ymd_and_hms(2024, 1, 15, 10, 0, 0).unwrap();
        extract_tables(html, "reporte.html", now)
    }

    fn record(pairs: &[(&str, &str)]) -> RecordRow {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn no_tables_yields_empty_result() {
        for input in ["", "plain text, no markup", "<p>sin tablas</p>", "<<<>>>"] {
            let result = extract(input);
            assert_eq!(result.metadata.tables_found, 0, "input: {input:?}");
            assert!(result.tables.is_empty());
        }
    }

    #[test]
    fn header_only_table_is_excluded_but_counted() {
        let result = extract("<table><tr><th>A</th><th>B</th></tr></table>");
        assert_eq!(result.metadata.tables_found, 1);
        assert!(result.tables.is_empty());
    }

    #[test]
    fn cells_beyond_header_count_are_dropped() {
        let html = "<table>\
            <tr><th>A</th><th>B</th></tr>\
            <tr><td>x</td><td>y</td><td>z</td></tr>\
            </table>";
        let result = extract(html);
        assert_eq!(result.tables[0].rows, vec![record(&[("A", "x"), ("B", "y")])]);
    }

    #[test]
    fn missing_cells_leave_keys_absent() {
        let html = "<table>\
            <tr><th>A</th><th>B</th><th>C</th></tr>\
            <tr><td>x</td></tr>\
            </table>";
        let result = extract(html);
        assert_eq!(result.tables[0].rows, vec![record(&[("A", "x")])]);
    }

    #[test]
    fn table_index_keeps_document_position() {
        let html = "\
            <table><tr><th>A</th></tr><tr><td>1</td></tr></table>\
            <table><tr><th>B</th></tr></table>\
            <table><tr><th>C</th></tr><tr><td>3</td></tr></table>";
        let result = extract(html);
        assert_eq!(result.metadata.tables_found, 3);
        let indices: Vec<usize> = result.tables.iter().map(|t| t.table_index).collect();
        assert_eq!(indices, vec![0, 2]);
    }

    #[test]
    fn th_in_data_row_contributes_nothing() {
        let html = "<table>\
            <tr><th>A</th><th>B</th></tr>\
            <tr><th>ignored</th><td>x</td></tr>\
            </table>";
        let result = extract(html);
        // The lone <td> pairs with the FIRST header; the <th> is not a cell.
        assert_eq!(result.tables[0].rows, vec![record(&[("A", "x")])]);
    }

    #[test]
    fn nested_table_rows_flatten_into_ancestor() {
        let html = "<table>\
            <tr><th>A</th><th>B</th></tr>\
            <tr><td>1</td><td><table><tr><td>x</td></tr></table></td></tr>\
            </table>";
        let result = extract(html);

        // Both the outer and the nested table are counted.
        assert_eq!(result.metadata.tables_found, 2);
        // The nested table alone is header-row-only, so it is excluded...
        assert_eq!(result.tables.len(), 1);
        let outer = &result.tables[0];
        assert_eq!(outer.table_index, 0);
        // ...but its row also surfaces in the outer table via the unscoped
        // descendant query.
        assert_eq!(
            outer.rows,
            vec![record(&[("A", "1"), ("B", "x")]), record(&[("A", "x")])]
        );
    }

    #[test]
    fn cell_text_is_trimmed_and_inner_markup_stripped() {
        let html = "<table>\
            <tr><th>  Nombre </th><th>Detalle</th></tr>\
            <tr><td> Perno  </td><td>acero <b>inoxidable</b></td></tr>\
            </table>";
        let result = extract(html);
        assert_eq!(result.tables[0].headers, vec!["Nombre", "Detalle"]);
        assert_eq!(
            result.tables[0].rows,
            vec![record(&[("Nombre", "Perno"), ("Detalle", "acero inoxidable")])]
        );
    }

    #[test]
    fn uppercase_tags_match() {
        let html = "<TABLE><TR><TH>A</TH></TR><TR><TD>1</TD></TR></TABLE>";
        let result = extract(html);
        assert_eq!(result.metadata.tables_found, 1);
        assert_eq!(result.tables[0].rows, vec![record(&[("A", "1")])]);
    }

    #[test]
    fn round_trip_through_json_is_lossless() {
        let html = "<table>\
            <tr><th>Name</th><th>Qty</th></tr>\
            <tr><td>Bolt</td><td>10</td></tr>\
            </table>";
        let result = extract(html);

        let json = serde_json::to_string_pretty(&result).unwrap();
        let parsed: ExtractionResult = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, result);

        // Wire shape is camelCase.
        assert!(json.contains("\"sourceFile\""));
        assert!(json.contains("\"tablesFound\""));
        assert!(json.contains("\"tableIndex\""));
        assert!(json.contains("\"rowCount\""));
    }

    #[test]
    fn end_to_end_single_table() {
        let html = "<table><tr><th>Name</th><th>Qty</th></tr>\
            <tr><td>Bolt</td><td>10</td></tr></table>";
        let result = extract(html);

        assert_eq!(result.metadata.source_file, "reporte.html");
        assert_eq!(result.metadata.tables_found, 1);
        assert_eq!(result.tables.len(), 1);

        let table = &result.tables[0];
        assert_eq!(table.table_index, 0);
        assert_eq!(table.headers, vec!["Name", "Qty"]);
        assert_eq!(table.row_count, 1);
        assert_eq!(table.rows, vec![record(&[("Name", "Bolt"), ("Qty", "10")])]);
    }
}
