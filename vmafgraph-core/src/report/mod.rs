pub mod frame;
pub mod metric;
pub mod model;
pub mod parse;

use crate::foundation::error::{VmafgraphError, VmafgraphResult};

/// Coerce attribute text to a float, naming the attribute on failure.
pub(crate) fn coerce_float(attr: &str, raw: &str) -> VmafgraphResult<f64> {
    raw.trim().parse::<f64>().map_err(|_| {
        VmafgraphError::format(format!("attribute '{attr}' value '{raw}' is not a number"))
    })
}
