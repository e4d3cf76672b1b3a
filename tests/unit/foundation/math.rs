use super::*;

#[test]
fn clamp01_bounds() {
    assert_eq!(clamp01(-0.5), 0.0);
    assert_eq!(clamp01(0.25), 0.25);
    assert_eq!(clamp01(7.0), 1.0);
}

#[test]
fn px_round_never_goes_negative() {
    assert_eq!(px_round(-3.0), 0);
    assert_eq!(px_round(0.4), 0);
    assert_eq!(px_round(0.5), 1);
    assert_eq!(px_round(511.5), 512);
}

#[test]
fn centered_offset_splits_padding() {
    assert_eq!(centered_offset(100, 50), 25);
    assert_eq!(centered_offset(100, 100), 0);
    // Cover overflow centers the overflowing strip.
    assert_eq!(centered_offset(1024, 2048), -512);
}
