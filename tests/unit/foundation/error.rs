use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(
        MaskError::validation("x")
            .to_string()
            .contains("validation error:")
    );
    assert!(MaskError::not_found("x").to_string().contains("mask not found:"));
    assert!(MaskError::load("x").to_string().contains("load error:"));
    assert!(MaskError::buffer("x").to_string().contains("buffer error:"));
}

#[test]
fn not_found_carries_the_name() {
    assert_eq!(
        MaskError::not_found("logo").to_string(),
        "mask not found: logo"
    );
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("boom");
    let err = MaskError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("boom"));
}
