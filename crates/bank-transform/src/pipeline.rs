//! The full split: one source frame in, three output tables out.

use polars::prelude::DataFrame;
use tracing::{debug, info_span};

use bank_model::TableKind;

use crate::error::Result;
use crate::tables::{build_campaign_table, build_client_table, build_economics_table};

/// The three output tables of one run.
#[derive(Debug, Clone)]
pub struct SplitTables {
    pub client: DataFrame,
    pub campaign: DataFrame,
    pub economics: DataFrame,
}

impl SplitTables {
    /// Get the table for `kind`.
    pub fn get(&self, kind: TableKind) -> &DataFrame {
        match kind {
            TableKind::Client => &self.client,
            TableKind::Campaign => &self.campaign,
            TableKind::Economics => &self.economics,
        }
    }

    /// Tables in output order.
    pub fn iter(&self) -> impl Iterator<Item = (TableKind, &DataFrame)> {
        TableKind::ALL.into_iter().map(move |kind| (kind, self.get(kind)))
    }

    /// True when every table has exactly `source_rows` rows.
    pub fn row_counts_match(&self, source_rows: usize) -> bool {
        self.iter().all(|(_, frame)| frame.height() == source_rows)
    }
}

/// Builds all three tables from the source frame.
///
/// The first invalid value aborts the whole split; no partial result is
/// returned.
pub fn split_source_table(source: &DataFrame) -> Result<SplitTables> {
    let build = |kind: TableKind| {
        let span = info_span!("table", table = %kind);
        let _guard = span.enter();
        match kind {
            TableKind::Client => build_client_table(source),
            TableKind::Campaign => build_campaign_table(source),
            TableKind::Economics => build_economics_table(source),
        }
    };

    let tables = SplitTables {
        client: build(TableKind::Client)?,
        campaign: build(TableKind::Campaign)?,
        economics: build(TableKind::Economics)?,
    };
    debug!(
        source_rows = source.height(),
        client_rows = tables.client.height(),
        campaign_rows = tables.campaign.height(),
        economics_rows = tables.economics.height(),
        "split complete"
    );
    Ok(tables)
}
