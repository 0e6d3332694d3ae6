//! CSV topology loader.
//!
//! # CSV format
//!
//! One row per hop.  Sections are declared on first mention, in file order,
//! so ids are stable for a given file.
//!
//! ```csv
//! from,to,bidirectional
//! S1,S5,true
//! S3,S4,yes
//! S4,S7,
//! ```
//!
//! **`bidirectional`** accepts `true/false`, `yes/no`, `1/0`; empty means
//! one-way.

use std::io::Read;
use std::path::Path;

use serde::Deserialize;

use crate::{TopologyBuilder, TopologyError, TopologyGraph, TopologyResult};

#[derive(Deserialize)]
struct EdgeRecord {
    from:          String,
    to:            String,
    #[serde(default)]
    bidirectional: String,
}

/// Load a topology from a CSV file.
pub fn load_topology_csv(path: &Path) -> TopologyResult<TopologyGraph> {
    let file = std::fs::File::open(path)?;
    load_topology_reader(file)
}

/// Like [`load_topology_csv`] but accepts any `Read` source.
pub fn load_topology_reader<R: Read>(reader: R) -> TopologyResult<TopologyGraph> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);
    let mut builder = TopologyBuilder::new();

    for (line, result) in csv_reader.deserialize::<EdgeRecord>().enumerate() {
        let record = result?;
        if record.from.is_empty() || record.to.is_empty() {
            return Err(TopologyError::Parse(format!("row {}: empty section name", line + 1)));
        }
        let from = builder.section(&record.from)?;
        let to   = builder.section(&record.to)?;
        if parse_flag(&record.bidirectional)
            .ok_or_else(|| TopologyError::Parse(format!(
                "row {}: bidirectional {:?} is not a boolean", line + 1, record.bidirectional,
            )))?
        {
            builder.link_both(from, to);
        } else {
            builder.link(from, to);
        }
    }

    builder.build()
}

fn parse_flag(raw: &str) -> Option<bool> {
    match raw.to_ascii_lowercase().as_str() {
        "" | "false" | "no" | "0" => Some(false),
        "true" | "yes" | "1"      => Some(true),
        _                         => None,
    }
}
