use crate::{MaskResult, foundation::core::RasterImage};

/// Downstream consumer of finished masks.
///
/// The host rendering system decides what "display" means (a texture upload, a
/// named buffer slot, an encoder). The capability is injected at call time so the
/// pipeline stays decoupled from any particular host runtime. A sink that cannot
/// satisfy its write contract returns [`crate::MaskError::Buffer`]; the pipeline
/// surfaces it without handling.
pub trait RenderSink {
    /// Accept a finished image for display.
    fn submit(&mut self, image: &RasterImage) -> MaskResult<()>;
}

#[cfg(test)]
#[path = "../tests/unit/sink.rs"]
mod tests;
