//! Static PostgreSQL schema for the three output tables.
//!
//! The DDL is a fixed text artifact: it is emitted for operators to run with
//! `psql`, never executed here and never derived from the data.

use std::fs;
use std::path::Path;

use tracing::info;

use bank_model::TableKind;

use crate::error::{OutputError, Result};

pub const CLIENT_DDL: &str = concat!(
    "CREATE TABLE client\n",
    "(\n",
    "    id SERIAL PRIMARY KEY,\n",
    "    age INTEGER,\n",
    "    job TEXT,\n",
    "    marital TEXT,\n",
    "    education TEXT,\n",
    "    credit_default BOOLEAN,\n",
    "    housing BOOLEAN,\n",
    "    loan BOOLEAN\n",
    ");\n",
    "\\copy client from 'client.csv' DELIMITER ',' CSV HEADER\n",
);

pub const CAMPAIGN_DDL: &str = concat!(
    "CREATE TABLE campaign\n",
    "(\n",
    "    campaign_id SERIAL PRIMARY KEY,\n",
    "    client_id SERIAL references client (id),\n",
    "    number_contacts INTEGER,\n",
    "    contact_duration INTEGER,\n",
    "    pdays INTEGER,\n",
    "    previous_campaign_contacts INTEGER,\n",
    "    previous_outcome BOOLEAN,\n",
    "    campaign_outcome BOOLEAN,\n",
    // trailing spaces are part of the artifact
    "    last_contact_date DATE    \n",
    ");\n",
    "\\copy campaign from 'campaign.csv' DELIMITER ',' CSV HEADER\n",
);

pub const ECONOMICS_DDL: &str = concat!(
    "CREATE TABLE economics\n",
    "(\n",
    "    client_id SERIAL references client (id),\n",
    "    emp_var_rate FLOAT,\n",
    "    cons_price_idx FLOAT,\n",
    "    euribor_three_months FLOAT,\n",
    "    number_employed FLOAT\n",
    ");\n",
    "\\copy economics from 'economics.csv' DELIMITER ',' CSV HEADER\n",
);

/// The `CREATE TABLE` block and load directive for one table.
pub fn table_ddl(kind: TableKind) -> &'static str {
    match kind {
        TableKind::Client => CLIENT_DDL,
        TableKind::Campaign => CAMPAIGN_DDL,
        TableKind::Economics => ECONOMICS_DDL,
    }
}

/// All three blocks in load order, separated by a blank line.
pub fn schema_ddl() -> String {
    TableKind::ALL
        .iter()
        .map(|kind| table_ddl(*kind))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Writes the full schema artifact to `path`.
pub fn write_schema_file(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|source| OutputError::DirectoryCreate {
            path: parent.to_path_buf(),
            source,
        })?;
    }
    fs::write(path, schema_ddl()).map_err(|source| OutputError::FileWrite {
        path: path.to_path_buf(),
        source,
    })?;
    info!(path = %path.display(), "schema written");
    Ok(())
}
