//! CSV writing for the split tables.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;

use polars::prelude::{CsvWriter, DataFrame, SerWriter};
use sha2::Digest;
use tracing::{debug, info};

use bank_model::{TableKind, TableOutput};
use bank_transform::SplitTables;

use crate::error::{OutputError, Result};

/// Hex SHA-256 of `bytes`.
pub fn sha256_hex(bytes: &[u8]) -> String {
    let digest = sha2::Sha256::digest(bytes);
    hex::encode(digest)
}

/// Renders `frame` as CSV: comma separated, header row, nulls as empty fields.
///
/// `path` is only used to label errors.
pub fn render_table_csv(frame: &DataFrame, path: &Path) -> Result<Vec<u8>> {
    let mut frame = frame.clone();
    let mut buffer = Vec::new();
    CsvWriter::new(&mut buffer)
        .include_header(true)
        .with_separator(b',')
        .finish(&mut frame)
        .map_err(|e| OutputError::CsvWrite {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
    Ok(buffer)
}

/// Writes `frame` to `path` and returns the SHA-256 of the written bytes.
pub fn write_table_csv(frame: &DataFrame, path: &Path) -> Result<String> {
    let bytes = render_table_csv(frame, path)?;
    fs::write(path, &bytes).map_err(|source| OutputError::FileWrite {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(sha256_hex(&bytes))
}

/// Output path of `kind` under `output_dir`.
pub fn table_path(output_dir: &Path, kind: TableKind) -> PathBuf {
    output_dir.join(kind.file_name())
}

/// Writes `client.csv`, `campaign.csv` and `economics.csv` under `output_dir`.
///
/// Files are written in that order; a failure leaves earlier files in place.
pub fn write_split_outputs(tables: &SplitTables, output_dir: &Path) -> Result<Vec<TableOutput>> {
    fs::create_dir_all(output_dir).map_err(|source| OutputError::DirectoryCreate {
        path: output_dir.to_path_buf(),
        source,
    })?;

    let mut outputs = Vec::with_capacity(TableKind::ALL.len());
    for (kind, frame) in tables.iter() {
        let start = Instant::now();
        let path = table_path(output_dir, kind);
        let sha256 = write_table_csv(frame, &path)?;
        info!(
            table = %kind,
            path = %path.display(),
            rows = frame.height(),
            duration_ms = start.elapsed().as_millis(),
            "table written"
        );
        debug!(table = %kind, sha256 = %sha256, "table digest");
        outputs.push(TableOutput {
            table: kind,
            rows: frame.height(),
            columns: frame.width(),
            path: Some(path),
            sha256: Some(sha256),
        });
    }
    Ok(outputs)
}

/// Per-table outcome of a run that writes nothing.
pub fn dry_run_outputs(tables: &SplitTables) -> Vec<TableOutput> {
    tables
        .iter()
        .map(|(kind, frame)| TableOutput {
            table: kind,
            rows: frame.height(),
            columns: frame.width(),
            path: None,
            sha256: None,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use polars::prelude::{IntoColumn, NamedFrom, Series};

    #[test]
    fn sha256_of_empty_input() {
        assert_eq!(
            sha256_hex(b""),
            "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
        );
    }

    #[test]
    fn nulls_render_as_empty_fields() {
        let frame = DataFrame::new(vec![
            Series::new("id".into(), vec![1i64, 2]).into_column(),
            Series::new("education".into(), vec![None, Some("basic_4y")]).into_column(),
            Series::new("previous_outcome".into(), vec![Some(1i32), None]).into_column(),
        ])
        .unwrap();
        let bytes = render_table_csv(&frame, Path::new("client.csv")).unwrap();
        assert_eq!(
            String::from_utf8(bytes).unwrap(),
            "id,education,previous_outcome\n1,,1\n2,basic_4y,\n"
        );
    }

    #[test]
    fn table_paths_use_fixed_file_names() {
        let dir = Path::new("out");
        assert_eq!(table_path(dir, TableKind::Client), dir.join("client.csv"));
        assert_eq!(table_path(dir, TableKind::Economics), dir.join("economics.csv"));
    }
}
