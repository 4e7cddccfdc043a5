use std::fmt;

use crate::foundation::error::VmafgraphResult;
use crate::report::coerce_float;

/// Pooled summary statistics for one named metric across all frames.
///
/// Immutable once constructed. No ordering between `min`, `mean`, and `max`
/// is enforced; the model reflects the document.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct PooledMetric {
    name: String,
    min: f64,
    max: f64,
    mean: f64,
    harmonic_mean: f64,
}

impl PooledMetric {
    /// Build a pooled metric from raw attribute text.
    ///
    /// `name` is stored verbatim, never coerced; the four statistics must
    /// parse as floats or construction fails with
    /// [`crate::VmafgraphError::Format`].
    pub fn from_strings(
        name: &str,
        min: &str,
        max: &str,
        mean: &str,
        harmonic_mean: &str,
    ) -> VmafgraphResult<Self> {
        Ok(Self {
            name: name.to_string(),
            min: coerce_float("min", min)?,
            max: coerce_float("max", max)?,
            mean: coerce_float("mean", mean)?,
            harmonic_mean: coerce_float("harmonic_mean", harmonic_mean)?,
        })
    }

    /// Metric name, exactly as it appeared in the document.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Minimum value over all frames.
    pub fn min(&self) -> f64 {
        self.min
    }

    /// Maximum value over all frames.
    pub fn max(&self) -> f64 {
        self.max
    }

    /// Arithmetic mean over all frames.
    pub fn mean(&self) -> f64 {
        self.mean
    }

    /// Harmonic mean over all frames.
    pub fn harmonic_mean(&self) -> f64 {
        self.harmonic_mean
    }
}

impl fmt::Display for PooledMetric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "PooledMetric(name={}, min={}, max={}, mean={}, harmonic_mean={})",
            self.name, self.min, self.max, self.mean, self.harmonic_mean
        )
    }
}
