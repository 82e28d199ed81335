//! Harvest orchestration
//!
//! This module drives a run: it reads the input URL list, resolves each URL,
//! walks the channel or video behind it, and flattens what it finds into
//! output records.

mod coordinator;
mod input;

pub use coordinator::Harvester;
pub use input::{load_input_urls, parse_url_list};
