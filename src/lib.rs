//! Overtime report generator.
//!
//! This crate reads a CSV attendance log (date, entry time, exit time) and
//! reports per-day, per-week and total overtime against a fixed working-hours
//! threshold.

#![warn(missing_docs)]

pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
pub mod report;

pub use report::run;
