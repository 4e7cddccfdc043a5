use std::collections::BTreeMap;
use std::path::Path;

use crate::foundation::error::{VmafgraphError, VmafgraphResult};
use crate::report::frame::{Frame, FrameField};
use crate::report::metric::PooledMetric;
use crate::report::model::Report;

/// Parse a report document from a file path.
///
/// The whole file is buffered before any model object is built; the handle
/// is released on every exit path. A path that does not resolve fails with
/// [`VmafgraphError::NotFound`].
#[tracing::instrument]
pub fn parse_report(path: &Path) -> VmafgraphResult<Report> {
    let xml = match std::fs::read_to_string(path) {
        Ok(xml) => xml,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            return Err(VmafgraphError::not_found(path.display().to_string()));
        }
        Err(e) => {
            return Err(anyhow::Error::new(e)
                .context(format!("read report '{}'", path.display()))
                .into());
        }
    };
    parse_report_str(&xml)
}

/// Parse a report document from in-memory XML text.
///
/// The root element must carry a `version` attribute. The `params`, `fyi`,
/// `frames`, and `pooled_metrics` sections are each optional and handled
/// independently; an absent section leaves the corresponding collection
/// empty. Frames keep document order; a pooled metric repeating a name
/// overwrites the prior entry.
pub fn parse_report_str(xml: &str) -> VmafgraphResult<Report> {
    let doc = roxmltree::Document::parse(xml)
        .map_err(|e| VmafgraphError::malformed(format!("not well-formed XML: {e}")))?;

    let root = doc.root_element();
    let version = root
        .attribute("version")
        .ok_or_else(|| VmafgraphError::malformed("root element has no 'version' attribute"))?;

    let mut report = Report::new(version.to_string());

    if let Some(params) = child_element(root, "params") {
        report.set_params(attr_map(params));
    }

    if let Some(fyi) = child_element(root, "fyi") {
        report.set_fyi(attr_map(fyi));
    }

    if let Some(frames) = child_element(root, "frames") {
        for frame in frames.children().filter(|n| n.has_tag_name("frame")) {
            report.push_frame(parse_frame(frame)?);
        }
    }

    if let Some(pooled) = child_element(root, "pooled_metrics") {
        for metric in pooled.children().filter(|n| n.has_tag_name("metric")) {
            report.insert_metric(parse_metric(metric)?);
        }
    }

    Ok(report)
}

fn child_element<'a, 'input>(
    node: roxmltree::Node<'a, 'input>,
    name: &str,
) -> Option<roxmltree::Node<'a, 'input>> {
    node.children().find(|n| n.has_tag_name(name))
}

fn attr_map(node: roxmltree::Node<'_, '_>) -> BTreeMap<String, String> {
    node.attributes()
        .map(|a| (a.name().to_string(), a.value().to_string()))
        .collect()
}

fn required_attr<'a>(node: roxmltree::Node<'a, '_>, attr: &str) -> VmafgraphResult<&'a str> {
    node.attribute(attr).ok_or_else(|| {
        VmafgraphError::malformed(format!(
            "'{}' element missing required attribute '{attr}'",
            node.tag_name().name()
        ))
    })
}

fn parse_frame(node: roxmltree::Node<'_, '_>) -> VmafgraphResult<Frame> {
    let frame_num = required_attr(node, "frameNum")?;
    let mut values = [""; FrameField::COUNT];
    for (slot, field) in values.iter_mut().zip(FrameField::ALL) {
        *slot = required_attr(node, field.attr_name())?;
    }
    Frame::from_strings(frame_num, values)
}

fn parse_metric(node: roxmltree::Node<'_, '_>) -> VmafgraphResult<PooledMetric> {
    PooledMetric::from_strings(
        required_attr(node, "name")?,
        required_attr(node, "min")?,
        required_attr(node, "max")?,
        required_attr(node, "mean")?,
        required_attr(node, "harmonic_mean")?,
    )
}

#[cfg(test)]
#[path = "../../tests/unit/report/parse.rs"]
mod tests;
