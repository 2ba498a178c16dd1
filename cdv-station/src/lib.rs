//! Core types for daily climate-station records.
//!
//! A station dump is a GeoJSON-like `FeatureCollection`: every feature is one
//! day of observations for one station. [`collection::RecordCollection`]
//! decodes the whole document, [`record::Record`] is a single day, and
//! [`property::Property`] names the measurements that can be charted.

pub mod collection;
pub mod compression;
pub mod error;
pub mod property;
pub mod record;

pub use collection::{CollectionInfo, RecordCollection};
pub use error::{Result, StationError};
pub use property::Property;
pub use record::Record;
