//! Vmafgraph turns VMAF XML quality reports into a typed model and charts.
//!
//! The pipeline:
//!
//! 1. **Parse**: `report XML -> Report` ([`parse_report`] / [`parse_report_str`])
//! 2. **Extract**: `Report + stride + column -> (frame_num, value) pairs` ([`extract_series`])
//! 3. **Chart**: `series -> filled line chart (SVG)` ([`render_series_svg`])
//!
//! The key design constraints:
//!
//! - **No unsafe**: `unsafe` is forbidden in this crate.
//! - **Fail-fast parsing**: every required attribute is an explicit presence
//!   check; the parser never substitutes defaults for missing or unparseable
//!   values and never returns a partial [`Report`].
//! - **Read-only model**: a [`Report`] is populated once by the parser and
//!   exposes only read access afterwards.
//! - **Whole-document buffering**: the source is fully read before any model
//!   object exists; the extractor and renderer are pure functions of their
//!   inputs.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod chart;
mod foundation;
mod report;
mod series;

pub use chart::{ChartOptions, render_series_svg};
pub use foundation::error::{VmafgraphError, VmafgraphResult};
pub use report::frame::{Frame, FrameField};
pub use report::metric::PooledMetric;
pub use report::model::Report;
pub use report::parse::{parse_report, parse_report_str};
pub use series::extract_series;
