use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use bank_model::{RunReport, TableOutput};

/// Digest characters shown in the summary.
const DIGEST_PREFIX_LEN: usize = 12;

pub fn print_summary(report: &RunReport) {
    println!("Input: {} ({} rows)", report.input.display(), report.source_rows);
    if report.dry_run {
        println!("Dry run: no files written");
    } else {
        println!("Output: {}", report.output_dir.display());
    }
    if let Some(path) = &report.schema_file {
        println!("Schema: {}", path.display());
    }
    println!("{}", summary_table(report));
}

fn summary_table(report: &RunReport) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Table"),
        header_cell("Rows"),
        header_cell("Columns"),
        header_cell("File"),
        header_cell("SHA-256"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    align_column(&mut table, 2, CellAlignment::Right);
    for output in &report.tables {
        table.add_row(vec![
            Cell::new(output.table.as_str()).add_attribute(Attribute::Bold),
            rows_cell(output, report.source_rows),
            Cell::new(output.columns),
            file_cell(output),
            digest_cell(output.sha256.as_deref()),
        ]);
    }
    table
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn rows_cell(output: &TableOutput, source_rows: usize) -> Cell {
    if output.rows == source_rows {
        Cell::new(output.rows)
    } else {
        Cell::new(output.rows)
            .fg(Color::Red)
            .add_attribute(Attribute::Bold)
    }
}

fn file_cell(output: &TableOutput) -> Cell {
    match &output.path {
        Some(path) => Cell::new(path.display()),
        None => dim_cell("-"),
    }
}

fn digest_cell(sha256: Option<&str>) -> Cell {
    match sha256 {
        Some(digest) => Cell::new(digest_prefix(digest)),
        None => dim_cell("-"),
    }
}

fn digest_prefix(digest: &str) -> &str {
    digest.get(..DIGEST_PREFIX_LEN).unwrap_or(digest)
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}

#[cfg(test)]
mod tests {
    use super::*;
    use bank_model::TableKind;
    use std::path::PathBuf;

    #[test]
    fn digest_is_shortened() {
        assert_eq!(digest_prefix("e3b0c44298fc1c149afbf4c8"), "e3b0c44298fc");
        assert_eq!(digest_prefix("abc"), "abc");
    }

    #[test]
    fn one_row_per_table() {
        let report = RunReport {
            input: PathBuf::from("bank_marketing.csv"),
            source_rows: 3,
            output_dir: PathBuf::from("."),
            dry_run: true,
            tables: TableKind::ALL
                .into_iter()
                .map(|table| TableOutput {
                    table,
                    rows: 3,
                    columns: table.columns().len(),
                    path: None,
                    sha256: None,
                })
                .collect(),
            schema_file: None,
        };
        let table = summary_table(&report);
        assert_eq!(table.row_count(), 3);
        let rendered = table.to_string();
        assert!(rendered.contains("economics"));
    }
}
