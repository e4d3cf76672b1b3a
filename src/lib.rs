//! Maskpipe turns an image's transparency channel into a reusable grayscale stencil
//! ("mask") and composites it for a downstream real-time renderer.
//!
//! # Pipeline overview
//!
//! 1. **Decode**: encoded bytes -> [`RasterImage`] (straight RGBA8)
//! 2. **Extract**: alpha channel -> luminance mask, once, at registration time
//! 3. **Store**: masks live in a [`MaskStore`] keyed by name, insertion-ordered
//! 4. **Shape**: on each request, [`shape`] routes the stored mask through the
//!    threshold and compositing stages and hands the result to a [`RenderSink`]
//!
//! The key design constraints:
//!
//! - **No unsafe**: `unsafe` is forbidden in this crate.
//! - **Deterministic**: every pixel stage is a pure, synchronous
//!   `&RasterImage -> RasterImage` function; equal inputs give equal bytes.
//! - **No IO in the pipeline**: fetching and decoding are front-loaded in the
//!   [`ImageLoader`] collaborator and the store's registration path.
//! - **Opaque masks end-to-end**: every image leaving extraction or thresholding
//!   carries alpha 255 everywhere; transparency lives in the RGB luminance.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod assets;
mod foundation;
mod pipeline;
mod shape;
mod sink;
mod store;

pub use assets::decode::decode_image;
pub use assets::loader::{FsLoader, ImageLoader, normalize_rel_path};
pub use foundation::core::{FitMode, RasterImage, ShapeParams};
pub use foundation::error::{MaskError, MaskResult};
pub use pipeline::aspect_fit::aspect_fit;
pub use pipeline::center_scale::center_scale;
pub use pipeline::extract::alpha_to_luminance;
pub use pipeline::threshold::threshold;
pub use shape::{ShapedMask, shape, shape_to_sink};
pub use sink::RenderSink;
pub use store::MaskStore;
