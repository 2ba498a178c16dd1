//! Grouping, filtering and axis domains for daily climate records.
//!
//! This crate turns a flat, already-decoded station dump into the data a
//! month-of-year line chart needs:
//!
//! 1. [`index::GroupingIndex`] buckets records by year, then by month.
//! 2. [`query::select_series`] picks one month across a range of years.
//! 3. [`domain::compute_domain`] finds the y-axis range of one measurement.
//! 4. [`view::recompute`] runs all of the above for a [`view::ViewState`].
//!
//! [`session::Session`] holds the active dataset and swaps it wholesale when
//! a new file is loaded or dropped.
//!
//! # Usage
//!
//! ```rust
//! use cdv_data::index::GroupingIndex;
//! use cdv_data::view::{recompute, ViewState};
//! use cdv_station::{Property, Record};
//!
//! let index = GroupingIndex::build(Vec::<Record>::new());
//! let state = ViewState::for_index(&index);
//! let view = recompute(&index, &state);
//! assert!(view.series.is_empty());
//! assert_eq!(view.domain.as_tuple(), (0.0, 0.0));
//! assert_eq!(state.property, Property::MaxTemperature);
//! ```

pub mod domain;
pub mod index;
pub mod models;
pub mod query;
pub mod session;
pub mod summary;
pub mod view;

#[cfg(test)]
pub(crate) mod test_support;
