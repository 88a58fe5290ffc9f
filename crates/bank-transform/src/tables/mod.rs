//! Builders for the three output tables.

mod campaign;
mod client;
mod economics;

pub use campaign::build_campaign_table;
pub use client::build_client_table;
pub use economics::build_economics_table;
