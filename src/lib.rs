//! Builds one unified, analysis-ready dataset of rural health facilities
//! from four independently maintained state spreadsheet exports, and
//! exposes the read-only accessors the presentation layer consumes.

pub mod args;
pub mod build;
pub mod coords;
pub mod dataset;
pub mod model;
pub mod normalize;
pub mod reconcile;
pub mod sheet;
pub mod sources;
pub mod summary;
