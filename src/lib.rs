//! Feature table tooling for the prototype partner-feedback round.
//!
//! Two independent units live here:
//!
//! - [`report`]: renders the embedded [`data::feature_records`] table into a
//!   formatted spreadsheet and a markdown document with per-prototype
//!   summaries.
//! - [`server`]: a small static-file server for previewing the browser-game
//!   prototypes locally, with client-side caching disabled on every response.

pub mod data;
pub mod models;
pub mod report;
pub mod server;
