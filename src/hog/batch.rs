//! Descriptor extraction over many images.
//!
//! Every extraction is independent, so the batch is a plain parallel map when
//! the `parallel` feature is enabled. Results keep input order, which is how
//! descriptors are paired back up with their labels.
use super::descriptor::Descriptor;
use super::extract_descriptor;
use super::params::HogParams;
use crate::image::ImageRgbU8;
#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Extract one descriptor per image, in input order.
pub fn extract_batch(images: &[ImageRgbU8<'_>], params: &HogParams) -> Vec<Descriptor> {
    #[cfg(feature = "parallel")]
    {
        images
            .par_iter()
            .map(|img| extract_descriptor(*img, params))
            .collect()
    }
    #[cfg(not(feature = "parallel"))]
    {
        images
            .iter()
            .map(|img| extract_descriptor(*img, params))
            .collect()
    }
}
