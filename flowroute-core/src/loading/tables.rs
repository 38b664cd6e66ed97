//! CSV table deserialization
//!
//! Readers are generic over `io::Read` so the row formats can be tested
//! against in-memory strings; path wrappers open the files. Malformed rows
//! fail the load with the offending record in the message rather than
//! being dropped silently.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use serde::Deserialize;

use crate::{Error, NodeId};

#[derive(Debug, Clone, Deserialize)]
pub struct NodeRow {
    pub id: NodeId,
    pub x: f64,
    pub y: f64,
    #[serde(default)]
    pub label: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct EdgeRow {
    pub from: NodeId,
    pub to: NodeId,
    pub distance_m: f64,
}

pub fn read_rows<T, R>(reader: R) -> Result<Vec<T>, Error>
where
    T: for<'de> Deserialize<'de>,
    R: Read,
{
    csv::Reader::from_reader(reader)
        .deserialize()
        .collect::<Result<Vec<T>, _>>()
        .map_err(|e| Error::InvalidData(e.to_string()))
}

pub fn read_rows_from_path<T>(path: &Path) -> Result<Vec<T>, Error>
where
    T: for<'de> Deserialize<'de>,
{
    let file = File::open(path)?;
    read_rows(file)
}
