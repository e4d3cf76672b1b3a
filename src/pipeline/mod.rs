pub(crate) mod aspect_fit;
pub(crate) mod center_scale;
pub(crate) mod extract;
pub(crate) mod threshold;
