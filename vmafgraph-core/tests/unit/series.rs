use super::*;

use crate::report::parse::parse_report_str;

fn report_with_frames(frame_nums: &[u32]) -> Report {
    let mut frames = String::new();
    for (i, num) in frame_nums.iter().enumerate() {
        let mut attrs = format!("frameNum=\"{num}\"");
        for field in FrameField::ALL {
            let value = match field {
                FrameField::Vmaf => 90.0 + i as f64,
                FrameField::Motion => 0.5 * i as f64,
                _ => 0.0,
            };
            attrs.push_str(&format!(" {}=\"{value}\"", field.attr_name()));
        }
        frames.push_str(&format!("<frame {attrs} />"));
    }
    parse_report_str(&format!(
        "<VMAF version=\"1.0\"><frames>{frames}</frames></VMAF>"
    ))
    .unwrap()
}

#[test]
fn stride_one_yields_one_pair_per_frame_in_order() {
    let report = report_with_frames(&[0, 1, 2, 3]);
    let series = extract_series(&report, 1, FrameField::Vmaf).unwrap();
    assert_eq!(series, vec![(0, 90.0), (1, 91.0), (2, 92.0), (3, 93.0)]);
}

#[test]
fn stride_k_takes_every_kth_position() {
    let report = report_with_frames(&[0, 1, 2, 3, 4, 5, 6]);
    let series = extract_series(&report, 3, FrameField::Vmaf).unwrap();
    assert_eq!(series, vec![(0, 90.0), (3, 93.0), (6, 96.0)]);
}

#[test]
fn stride_k_yields_ceil_n_over_k_pairs() {
    for (n, k, expected) in [(7usize, 3usize, 3usize), (6, 3, 2), (8, 3, 3), (1, 5, 1)] {
        let frame_nums: Vec<u32> = (0..n as u32).collect();
        let report = report_with_frames(&frame_nums);
        let series = extract_series(&report, k, FrameField::Vmaf).unwrap();
        assert_eq!(series.len(), expected, "n={n} k={k}");
        assert_eq!(series.len(), n.div_ceil(k));
    }
}

#[test]
fn downsampling_is_position_indexed_not_frame_num_indexed() {
    let report = report_with_frames(&[10, 20, 30, 40]);
    let series = extract_series(&report, 2, FrameField::Vmaf).unwrap();
    assert_eq!(series, vec![(10, 90.0), (30, 92.0)]);
}

#[test]
fn zero_stride_is_an_invalid_argument() {
    let report = report_with_frames(&[0]);
    let err = extract_series(&report, 0, FrameField::Vmaf).unwrap_err();
    assert!(matches!(err, VmafgraphError::InvalidArgument(_)));
}

#[test]
fn empty_report_yields_an_empty_series() {
    let report = report_with_frames(&[]);
    assert_eq!(extract_series(&report, 1, FrameField::Vmaf).unwrap(), vec![]);
}

#[test]
fn field_selects_the_charted_column() {
    let report = report_with_frames(&[0, 1]);
    let motion = extract_series(&report, 1, FrameField::Motion).unwrap();
    assert_eq!(motion, vec![(0, 0.0), (1, 0.5)]);
}
