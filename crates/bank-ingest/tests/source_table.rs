use std::fs;
use std::path::PathBuf;

use bank_ingest::{IngestError, IngestOptions, read_source_schema, read_source_table};
use tempfile::TempDir;

const HEADER: &str = "client_id,age,job,marital,education,credit_default,housing,loan,campaign,\
month,day,duration,pdays,previous,poutcome,y,emp_var_rate,cons_price_idx,euribor3m,nr_employed";

fn write_source(dir: &TempDir, rows: &[&str]) -> PathBuf {
    write_with_header(dir, HEADER, rows)
}

fn write_with_header(dir: &TempDir, header: &str, rows: &[&str]) -> PathBuf {
    let mut contents = String::from(header);
    contents.push('\n');
    for row in rows {
        contents.push_str(row);
        contents.push('\n');
    }
    let path = dir.path().join("bank_marketing.csv");
    fs::write(&path, contents).expect("write source");
    path
}

#[test]
fn loads_typed_source_table() {
    let dir = TempDir::new().unwrap();
    let path = write_source(
        &dir,
        &[
            "0,56,housemaid,married,basic.4y,no,no,no,1,may,13,261,999,0,nonexistent,no,1.1,93.994,4.857,5191.5",
            "1,37,admin.,married,unknown,no,yes,no,2,jun,5,226,6,1,success,yes,-1.8,92.893,1.299,5099.1",
        ],
    );

    let source = read_source_table(&path, &IngestOptions::default()).expect("read source");
    assert_eq!(source.height(), 2);
    assert_eq!(source.headers.len(), 20);
    assert_eq!(source.data.width(), 20);

    let ids = source.data.column("client_id").unwrap().i64().unwrap();
    assert_eq!(ids.get(1), Some(1));
    let jobs = source.data.column("job").unwrap().str().unwrap();
    assert_eq!(jobs.get(1), Some("admin."));
    let rates = source.data.column("emp_var_rate").unwrap().f64().unwrap();
    assert_eq!(rates.get(1), Some(-1.8));
}

#[test]
fn column_order_does_not_matter() {
    let dir = TempDir::new().unwrap();
    let header = "y,client_id,age,job,marital,education,credit_default,housing,loan,campaign,\
month,day,duration,pdays,previous,poutcome,emp_var_rate,cons_price_idx,euribor3m,nr_employed,extra";
    let path = write_with_header(
        &dir,
        header,
        &["no,7,30,student,single,basic.9y,no,no,no,1,aug,2,100,999,0,nonexistent,1.4,93.444,4.963,5228.1,ignored"],
    );

    let source = read_source_table(&path, &IngestOptions::default()).expect("read source");
    let names: Vec<String> = source
        .data
        .get_column_names()
        .iter()
        .map(|name| name.to_string())
        .collect();
    assert_eq!(names.first().map(String::as_str), Some("client_id"));
    assert!(!names.contains(&"extra".to_string()));
    assert_eq!(source.headers.extra_columns(), vec!["extra"]);
}

#[test]
fn missing_column_fails_before_parsing() {
    let dir = TempDir::new().unwrap();
    let header = HEADER.replace(",poutcome", "");
    let path = write_with_header(&dir, &header, &["not,even,parsed"]);

    let err = read_source_table(&path, &IngestOptions::default()).unwrap_err();
    match err {
        IngestError::MissingColumns { columns, .. } => assert_eq!(columns, vec!["poutcome"]),
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn invalid_number_reports_row() {
    let dir = TempDir::new().unwrap();
    let path = write_source(
        &dir,
        &[
            "0,56,housemaid,married,basic.4y,no,no,no,1,may,13,261,999,0,nonexistent,no,1.1,93.994,4.857,5191.5",
            "1,old,services,married,high.school,no,no,no,1,may,13,149,999,0,nonexistent,no,1.1,93.994,4.857,5191.5",
        ],
    );

    let err = read_source_table(&path, &IngestOptions::default()).unwrap_err();
    assert!(matches!(
        err,
        IngestError::InvalidNumber { ref column, row: 2, .. } if column == "age"
    ));
}

#[test]
fn header_only_file_has_no_rows() {
    let dir = TempDir::new().unwrap();
    let path = write_source(&dir, &[]);
    let source = read_source_table(&path, &IngestOptions::default()).expect("read source");
    assert_eq!(source.height(), 0);
}

#[test]
fn size_limit_is_enforced() {
    let dir = TempDir::new().unwrap();
    let path = write_source(&dir, &[]);
    let options = IngestOptions::default().with_max_file_size(10);
    assert!(matches!(
        read_source_table(&path, &options),
        Err(IngestError::FileTooLarge { .. })
    ));
}

#[test]
fn schema_reads_header_only() {
    let dir = TempDir::new().unwrap();
    let path = write_source(&dir, &["garbage"]);
    let headers = read_source_schema(&path).expect("read header");
    assert!(headers.contains("nr_employed"));
    assert!(headers.missing_columns().is_empty());
}
