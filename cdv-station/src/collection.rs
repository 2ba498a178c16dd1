use crate::compression::read_source;
use crate::error::Result;
use crate::record::Record;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// A link attached to a station dump (paging, alternate formats).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Link {
    #[serde(rename = "type")]
    pub kind: String,
    pub rel: String,
    pub title: String,
    pub href: String,
}

/// A whole station dump as returned by the climate-daily collection API.
///
/// `number_matched` and `number_returned` are carried for display only;
/// nothing downstream trusts them over `records.len()`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecordCollection {
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(rename = "features")]
    pub records: Vec<Record>,
    pub number_matched: i64,
    pub number_returned: i64,
    pub links: Vec<Link>,
    pub time_stamp: String,
}

/// Everything in a dump except its records.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CollectionInfo {
    pub kind: String,
    pub number_matched: i64,
    pub number_returned: i64,
    pub links: Vec<Link>,
    pub time_stamp: String,
}

impl RecordCollection {
    pub fn from_slice(bytes: &[u8]) -> Result<Self> {
        Ok(serde_json::from_slice(bytes)?)
    }

    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load a dump from disk; `.gz` files are inflated first.
    pub fn from_path(path: &Path) -> Result<Self> {
        let bytes = read_source(path)?;
        let collection = Self::from_slice(&bytes)?;
        log::info!(
            "Decoded {} records ({} reported returned) from {}",
            collection.len(),
            collection.number_returned,
            path.display()
        );
        Ok(collection)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Split into metadata and records, handing the records over by value.
    pub fn into_parts(self) -> (CollectionInfo, Vec<Record>) {
        let info = CollectionInfo {
            kind: self.kind,
            number_matched: self.number_matched,
            number_returned: self.number_returned,
            links: self.links,
            time_stamp: self.time_stamp,
        };
        (info, self.records)
    }

    /// Distinct station names in first-seen order.
    pub fn station_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = Vec::new();
        for record in &self.records {
            let name = record.station_name();
            if !names.contains(&name) {
                names.push(name);
            }
        }
        names
    }
}
