use crate::{
    foundation::core::{RasterImage, ShapeParams},
    foundation::error::MaskResult,
    foundation::math::FULL_SCALE_BREAK,
    pipeline::{aspect_fit::aspect_fit, center_scale::center_scale, threshold::threshold},
    sink::RenderSink,
    store::MaskStore,
};

/// Finished composite plus the uniform scale the render sink must still apply.
#[derive(Clone, Debug)]
pub struct ShapedMask {
    /// The composited, optionally binarized mask.
    pub image: RasterImage,
    /// Residual uniform scale for the sink; 1.0 when the pipeline already scaled.
    pub residual_scale: f32,
}

/// Route the stored mask `name` through the threshold and compositing stages.
///
/// Dispatch:
/// - `preserve_aspect` (any size): [`aspect_fit`], nothing deferred.
/// - otherwise, `size < 0.9`: [`center_scale`] then [`threshold`], nothing
///   deferred.
/// - otherwise (`size >= 0.9`): [`threshold`] only; `residual_scale` carries
///   `size` for the sink, so content is never resampled twice. The 0.9 boundary
///   is a deliberate strategy discontinuity, not a blend.
///
/// Stateless beyond the registry read: equal registry contents and parameters
/// give byte-equal results.
#[tracing::instrument(skip(store))]
pub fn shape(store: &MaskStore, name: &str, params: &ShapeParams) -> MaskResult<ShapedMask> {
    params.validate()?;
    let mask = store.get(name)?;

    if params.preserve_aspect {
        let image = aspect_fit(&mask, params.size, params.hard_edge, true, params.fit_mode);
        return Ok(ShapedMask {
            image,
            residual_scale: 1.0,
        });
    }

    if params.size < FULL_SCALE_BREAK {
        let image = threshold(&center_scale(&mask, params.size), params.hard_edge);
        Ok(ShapedMask {
            image,
            residual_scale: 1.0,
        })
    } else {
        let image = threshold(&mask, params.hard_edge);
        Ok(ShapedMask {
            image,
            residual_scale: params.size,
        })
    }
}

/// [`shape`], then hand the finished image to `sink`.
///
/// Sink rejections propagate after shaping; no partial or degraded image is
/// submitted.
pub fn shape_to_sink(
    store: &MaskStore,
    name: &str,
    params: &ShapeParams,
    sink: &mut dyn RenderSink,
) -> MaskResult<ShapedMask> {
    let shaped = shape(store, name, params)?;
    sink.submit(&shaped.image)?;
    Ok(shaped)
}

#[cfg(test)]
#[path = "../tests/unit/shape.rs"]
mod tests;
