//! Color clustering: Lloyd's k-means and vector quantization

pub mod kmeans;
pub mod quantize;

pub use kmeans::{cluster, ColorCluster};
pub use quantize::{assign, histogram};
