use crate::foundation::error::{VmafgraphError, VmafgraphResult};
use crate::report::frame::FrameField;
use crate::report::model::Report;

/// Subsample one metric column into chartable `(frame_num, value)` pairs.
///
/// Frames are taken at positions `0, stride, 2*stride, ..` of the report's
/// frame sequence — position-indexed, not frame-number-indexed, so
/// non-contiguous frame numbers subsample by position. Pairs come back in
/// sequence order, ready to hand to a chart renderer verbatim; a report
/// without frames yields an empty sequence. `stride` must be positive.
pub fn extract_series(
    report: &Report,
    stride: usize,
    field: FrameField,
) -> VmafgraphResult<Vec<(u32, f64)>> {
    if stride == 0 {
        return Err(VmafgraphError::invalid_argument("stride must be positive"));
    }

    Ok(report
        .frames()
        .iter()
        .step_by(stride)
        .map(|frame| (frame.frame_num(), frame.value(field)))
        .collect())
}

#[cfg(test)]
#[path = "../tests/unit/series.rs"]
mod tests;
