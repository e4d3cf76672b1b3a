/// Scale factor at which the non-aspect paths switch strategy: below it the
/// pipeline resamples onto a padded canvas, at or above it the source fills the
/// target and any remaining scale is deferred to the render sink.
pub(crate) const FULL_SCALE_BREAK: f32 = 0.9;

pub(crate) fn clamp01(x: f32) -> f32 {
    x.clamp(0.0, 1.0)
}

/// Round a fractional pixel extent to a whole number of pixels, never negative.
pub(crate) fn px_round(v: f64) -> u32 {
    let r = v.round();
    if r <= 0.0 { 0 } else { r as u32 }
}

/// Centered top-left offset for drawing an `extent`-wide strip on a `canvas`-wide
/// axis. Negative when the strip overflows (cover mode).
pub(crate) fn centered_offset(canvas: u32, extent: u32) -> i64 {
    (i64::from(canvas) - i64::from(extent)) / 2
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/math.rs"]
mod tests;
