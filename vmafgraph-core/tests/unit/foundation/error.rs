use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(
        VmafgraphError::not_found("x")
            .to_string()
            .contains("report not found:")
    );
    assert!(
        VmafgraphError::malformed("x")
            .to_string()
            .contains("malformed document:")
    );
    assert!(
        VmafgraphError::format("x")
            .to_string()
            .contains("format error:")
    );
    assert!(
        VmafgraphError::invalid_argument("x")
            .to_string()
            .contains("invalid argument:")
    );
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("boom");
    let err = VmafgraphError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("boom"));
}
