use std::collections::BTreeMap;
use std::fmt;

use crate::report::frame::Frame;
use crate::report::metric::PooledMetric;

/// A complete parsed quality report.
///
/// A report owns all of its [`Frame`] and [`PooledMetric`] records. It is
/// populated once by the parser; afterwards every accessor borrows and the
/// population methods are crate-private, so callers see a read-only value.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct Report {
    version: String,
    params: BTreeMap<String, String>,
    fyi: BTreeMap<String, String>,
    frames: Vec<Frame>,
    metrics: BTreeMap<String, PooledMetric>,
}

impl Report {
    /// New report with the given version and default-empty collections.
    pub(crate) fn new(version: String) -> Self {
        Self {
            version,
            params: BTreeMap::new(),
            fyi: BTreeMap::new(),
            frames: Vec::new(),
            metrics: BTreeMap::new(),
        }
    }

    pub(crate) fn set_params(&mut self, params: BTreeMap<String, String>) {
        self.params = params;
    }

    pub(crate) fn set_fyi(&mut self, fyi: BTreeMap<String, String>) {
        self.fyi = fyi;
    }

    pub(crate) fn push_frame(&mut self, frame: Frame) {
        self.frames.push(frame);
    }

    /// Keyed by metric name; a repeated name overwrites the prior entry.
    pub(crate) fn insert_metric(&mut self, metric: PooledMetric) {
        self.metrics.insert(metric.name().to_string(), metric);
    }

    /// Version attribute read from the document root.
    pub fn version(&self) -> &str {
        &self.version
    }

    /// Analysis parameters (`params` element attributes), verbatim.
    pub fn params(&self) -> &BTreeMap<String, String> {
        &self.params
    }

    /// Informational key/values (`fyi` element attributes), verbatim.
    pub fn fyi(&self) -> &BTreeMap<String, String> {
        &self.fyi
    }

    /// Per-frame records in document order.
    pub fn frames(&self) -> &[Frame] {
        &self.frames
    }

    /// Pooled metrics keyed by name.
    pub fn metrics(&self) -> &BTreeMap<String, PooledMetric> {
        &self.metrics
    }
}

impl fmt::Display for Report {
    /// Summary form: frame count rather than a full frame dump.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Report(version={}, params=", self.version)?;
        fmt_str_map(f, &self.params)?;
        f.write_str(", fyi=")?;
        fmt_str_map(f, &self.fyi)?;
        write!(f, ", frames={} frames, metrics={{", self.frames.len())?;
        for (i, metric) in self.metrics.values().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{metric}")?;
        }
        f.write_str("})")
    }
}

fn fmt_str_map(f: &mut fmt::Formatter<'_>, map: &BTreeMap<String, String>) -> fmt::Result {
    f.write_str("{")?;
    for (i, (key, value)) in map.iter().enumerate() {
        if i > 0 {
            f.write_str(", ")?;
        }
        write!(f, "{key}={value}")?;
    }
    f.write_str("}")
}
