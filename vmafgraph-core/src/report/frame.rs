use std::fmt;

use serde::ser::SerializeMap as _;

use crate::foundation::error::{VmafgraphError, VmafgraphResult};
use crate::report::coerce_float;

/// Per-frame metric columns tracked by the report schema.
///
/// The variant order is the document attribute order. Tracking another
/// column means adding a variant here plus its [`FrameField::ALL`] and
/// [`FrameField::attr_name`] entries; the parser, [`Frame`], and the series
/// extractor pick it up from the schema.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FrameField {
    /// `integer_motion2` — motion measured against the second-best match.
    Motion2,
    /// `integer_motion` — motion measured against the previous frame.
    Motion,
    /// `integer_adm2` — detail-loss measure.
    Adm2,
    /// `integer_adm_scale0` — detail-loss measure at scale 0.
    AdmScale0,
    /// `integer_adm_scale1` — detail-loss measure at scale 1.
    AdmScale1,
    /// `integer_adm_scale2` — detail-loss measure at scale 2.
    AdmScale2,
    /// `integer_adm_scale3` — detail-loss measure at scale 3.
    AdmScale3,
    /// `integer_vif_scale0` — visual-information fidelity at scale 0.
    VifScale0,
    /// `integer_vif_scale1` — visual-information fidelity at scale 1.
    VifScale1,
    /// `integer_vif_scale2` — visual-information fidelity at scale 2.
    VifScale2,
    /// `integer_vif_scale3` — visual-information fidelity at scale 3.
    VifScale3,
    /// `vmaf` — overall quality score for the frame.
    Vmaf,
}

impl FrameField {
    /// Number of tracked columns.
    pub const COUNT: usize = 12;

    /// Every column in document attribute order.
    pub const ALL: [FrameField; Self::COUNT] = [
        FrameField::Motion2,
        FrameField::Motion,
        FrameField::Adm2,
        FrameField::AdmScale0,
        FrameField::AdmScale1,
        FrameField::AdmScale2,
        FrameField::AdmScale3,
        FrameField::VifScale0,
        FrameField::VifScale1,
        FrameField::VifScale2,
        FrameField::VifScale3,
        FrameField::Vmaf,
    ];

    /// XML attribute name carried by `frame` elements for this column.
    pub fn attr_name(self) -> &'static str {
        match self {
            FrameField::Motion2 => "integer_motion2",
            FrameField::Motion => "integer_motion",
            FrameField::Adm2 => "integer_adm2",
            FrameField::AdmScale0 => "integer_adm_scale0",
            FrameField::AdmScale1 => "integer_adm_scale1",
            FrameField::AdmScale2 => "integer_adm_scale2",
            FrameField::AdmScale3 => "integer_adm_scale3",
            FrameField::VifScale0 => "integer_vif_scale0",
            FrameField::VifScale1 => "integer_vif_scale1",
            FrameField::VifScale2 => "integer_vif_scale2",
            FrameField::VifScale3 => "integer_vif_scale3",
            FrameField::Vmaf => "vmaf",
        }
    }

    /// Resolve an XML attribute name back to its column.
    pub fn from_attr_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|f| f.attr_name() == name)
    }
}

/// Metric values for one analyzed video frame.
///
/// Either every column parses and the frame is built whole, or construction
/// fails; there are no partial frames. Immutable once constructed.
#[derive(Clone, Debug, PartialEq)]
pub struct Frame {
    frame_num: u32,
    values: [f64; FrameField::COUNT],
}

impl Frame {
    /// Build a frame from raw attribute text, coercing every value.
    ///
    /// `frame_num` must parse as a non-negative integer and each entry of
    /// `values` (in [`FrameField::ALL`] order) as a float; any coercion
    /// failure fails the whole construction with
    /// [`VmafgraphError::Format`].
    pub fn from_strings(
        frame_num: &str,
        values: [&str; FrameField::COUNT],
    ) -> VmafgraphResult<Self> {
        let frame_num = frame_num.trim().parse::<u32>().map_err(|_| {
            VmafgraphError::format(format!(
                "attribute 'frameNum' value '{frame_num}' is not a non-negative integer"
            ))
        })?;

        let mut parsed = [0.0_f64; FrameField::COUNT];
        for (field, raw) in FrameField::ALL.into_iter().zip(values) {
            parsed[field as usize] = coerce_float(field.attr_name(), raw)?;
        }

        Ok(Self {
            frame_num,
            values: parsed,
        })
    }

    /// Frame number as recorded in the document.
    pub fn frame_num(&self) -> u32 {
        self.frame_num
    }

    /// Value of one metric column.
    pub fn value(&self, field: FrameField) -> f64 {
        self.values[field as usize]
    }

    /// Overall VMAF score for the frame.
    pub fn vmaf(&self) -> f64 {
        self.value(FrameField::Vmaf)
    }
}

impl fmt::Display for Frame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Frame(frameNum={}", self.frame_num)?;
        for field in FrameField::ALL {
            write!(f, ", {}={}", field.attr_name(), self.value(field))?;
        }
        f.write_str(")")
    }
}

// Serialized as a map keyed by the document attribute names, so dumps read
// like the source format.
impl serde::Serialize for Frame {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        let mut map = serializer.serialize_map(Some(1 + FrameField::COUNT))?;
        map.serialize_entry("frameNum", &self.frame_num)?;
        for field in FrameField::ALL {
            map.serialize_entry(field.attr_name(), &self.value(field))?;
        }
        map.end()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/report/frame.rs"]
mod tests;
