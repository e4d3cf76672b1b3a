use std::path::{Path, PathBuf};

use anyhow::Context;

use crate::{
    assets::decode,
    foundation::core::RasterImage,
    foundation::error::{MaskError, MaskResult},
};

/// External image-acquisition collaborator.
///
/// Fetch strategy (direct vs. proxied, caching, retries) is entirely the loader's
/// concern; the pipeline consumes an already-decoded [`RasterImage`] and propagates
/// loader failures verbatim as [`MaskError::Load`].
pub trait ImageLoader {
    /// Fetch and decode the image identified by `source`.
    fn fetch(&self, source: &str) -> MaskResult<RasterImage>;
}

/// Filesystem-backed loader resolving normalized relative paths under a root.
#[derive(Clone, Debug)]
pub struct FsLoader {
    root: PathBuf,
}

impl FsLoader {
    /// Construct a loader rooted at `root`.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Root directory used when resolving relative source paths.
    pub fn root(&self) -> &Path {
        &self.root
    }
}

impl ImageLoader for FsLoader {
    fn fetch(&self, source: &str) -> MaskResult<RasterImage> {
        let norm = normalize_rel_path(source)?;
        let path = self.root.join(Path::new(&norm));
        let bytes = std::fs::read(&path)
            .with_context(|| format!("read image bytes from '{}'", path.display()))
            .map_err(|e| MaskError::load(format!("{e:#}")))?;
        decode::decode_image(&bytes).map_err(|e| MaskError::load(e.to_string()))
    }
}

/// Normalize and validate loader-relative source paths.
///
/// The normalized result uses `/` separators, removes `.` segments, and rejects
/// absolute paths or parent traversals (`..`).
pub fn normalize_rel_path(source: &str) -> MaskResult<String> {
    let s = source.replace('\\', "/");
    if s.starts_with('/') {
        return Err(MaskError::validation("source paths must be relative"));
    }
    if s.is_empty() {
        return Err(MaskError::validation("source path must be non-empty"));
    }

    let mut out = Vec::<&str>::new();
    for part in s.split('/') {
        if part.is_empty() || part == "." {
            continue;
        }
        if part == ".." {
            return Err(MaskError::validation("source paths must not contain '..'"));
        }
        out.push(part);
    }

    if out.is_empty() {
        return Err(MaskError::validation(
            "source path must contain a file name",
        ));
    }

    Ok(out.join("/"))
}

#[cfg(test)]
#[path = "../../tests/unit/assets/loader.rs"]
mod tests;
