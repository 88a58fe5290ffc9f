//! Output writer tests.

use std::fs;
use std::path::Path;

use polars::prelude::*;
use tempfile::tempdir;

use bank_model::TableKind;
use bank_output::{
    render_table_csv, schema_ddl, table_ddl, write_schema_file, write_split_outputs,
};
use bank_transform::{SplitTables, split_source_table};

fn split_fixture() -> SplitTables {
    let source = DataFrame::new(vec![
        Series::new("client_id".into(), vec![0i64, 1]).into_column(),
        Series::new("age".into(), vec![56i64, 57]).into_column(),
        Series::new("job".into(), vec!["housemaid", "admin."]).into_column(),
        Series::new("marital".into(), vec!["married", "single"]).into_column(),
        Series::new("education".into(), vec!["basic.4y", "unknown"]).into_column(),
        Series::new("credit_default".into(), vec!["no", "unknown"]).into_column(),
        Series::new("housing".into(), vec!["no", "yes"]).into_column(),
        Series::new("loan".into(), vec!["no", "no"]).into_column(),
        Series::new("campaign".into(), vec![1i64, 3]).into_column(),
        Series::new("month".into(), vec!["may", "aug"]).into_column(),
        Series::new("day".into(), vec![13i64, 5]).into_column(),
        Series::new("duration".into(), vec![261i64, 149]).into_column(),
        Series::new("pdays".into(), vec![999i64, 6]).into_column(),
        Series::new("previous".into(), vec![0i64, 1]).into_column(),
        Series::new("poutcome".into(), vec!["nonexistent", "success"]).into_column(),
        Series::new("y".into(), vec!["no", "yes"]).into_column(),
        Series::new("emp_var_rate".into(), vec![1.1f64, -1.8]).into_column(),
        Series::new("cons_price_idx".into(), vec![93.994f64, 92.893]).into_column(),
        Series::new("euribor3m".into(), vec![4.857f64, 1.313]).into_column(),
        Series::new("nr_employed".into(), vec![5191.5f64, 5099.1]).into_column(),
    ])
    .unwrap();
    split_source_table(&source).unwrap()
}

fn render(tables: &SplitTables, kind: TableKind) -> String {
    let bytes = render_table_csv(tables.get(kind), Path::new(kind.file_name())).unwrap();
    String::from_utf8(bytes).unwrap()
}

#[test]
fn client_csv_rendering() {
    insta::assert_snapshot!("client_csv", render(&split_fixture(), TableKind::Client));
}

#[test]
fn campaign_csv_rendering() {
    insta::assert_snapshot!("campaign_csv", render(&split_fixture(), TableKind::Campaign));
}

#[test]
fn economics_csv_rendering() {
    insta::assert_snapshot!("economics_csv", render(&split_fixture(), TableKind::Economics));
}

#[test]
fn client_ddl() {
    insta::assert_snapshot!("client_ddl", table_ddl(TableKind::Client));
}

#[test]
fn csv_headers_match_table_layouts() {
    let tables = split_fixture();
    for kind in TableKind::ALL {
        let rendered = render(&tables, kind);
        let header = rendered.lines().next().unwrap();
        assert_eq!(header, kind.header());
    }
}

#[test]
fn writes_all_three_files() {
    let dir = tempdir().unwrap();
    let out = dir.path().join("nested").join("out");
    let tables = split_fixture();

    let outputs = write_split_outputs(&tables, &out).unwrap();

    let kinds: Vec<TableKind> = outputs.iter().map(|o| o.table).collect();
    assert_eq!(kinds, TableKind::ALL.to_vec());
    for output in &outputs {
        let path = output.path.as_ref().unwrap();
        assert_eq!(path, &out.join(output.table.file_name()));
        let written = fs::read_to_string(path).unwrap();
        assert_eq!(written, render(&tables, output.table));
        assert_eq!(output.rows, 2);
        assert_eq!(output.columns, output.table.columns().len());
        assert_eq!(output.sha256.as_ref().map(String::len), Some(64));
    }
}

#[test]
fn rewriting_is_byte_identical() {
    let first = tempdir().unwrap();
    let second = tempdir().unwrap();

    let a = write_split_outputs(&split_fixture(), first.path()).unwrap();
    let b = write_split_outputs(&split_fixture(), second.path()).unwrap();

    for (left, right) in a.iter().zip(&b) {
        assert_eq!(left.sha256, right.sha256);
        let left_bytes = fs::read(left.path.as_ref().unwrap()).unwrap();
        let right_bytes = fs::read(right.path.as_ref().unwrap()).unwrap();
        assert_eq!(left_bytes, right_bytes);
    }
}

#[test]
fn schema_file_holds_full_ddl() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("sql").join("schema.sql");
    write_schema_file(&path).unwrap();
    assert_eq!(fs::read_to_string(&path).unwrap(), schema_ddl());
}
