//! Palette ordering and dominant color selection
//!
//! Pairs centroids with their incidence counts, orders them most prevalent
//! first, and encodes the result. Ordering is deterministic: descending
//! incidence with ties kept in ascending original cluster index.

use crate::cluster::ColorCluster;
use crate::constants::channels;
use crate::error::{PaletteError, Result};
use crate::palette::encode::to_hex;

/// Cluster indices ordered by descending incidence; ties keep ascending
/// original index (stable sort over an index-ordered input).
pub fn ranked_indices(histogram: &[usize]) -> Vec<usize> {
    let mut order: Vec<usize> = (0..histogram.len()).collect();
    order.sort_by(|&a, &b| histogram[b].cmp(&histogram[a]));
    order
}

/// Encode the centroids of `cluster` as hex colors ordered by descending
/// incidence. For 4-channel centroids the alpha component is dropped
/// before encoding.
///
/// # Errors
///
/// Returns `PaletteError::InvalidClusterCount` if the histogram length
/// does not match the cluster size.
pub fn compose(cluster: &ColorCluster, histogram: &[usize]) -> Result<Vec<String>> {
    if histogram.len() != cluster.len() {
        return Err(PaletteError::invalid_cluster_count(
            histogram.len(),
            format!("histogram length differs from cluster size {}", cluster.len()),
        ));
    }

    ranked_indices(histogram)
        .into_iter()
        .map(|index| to_hex(rgb_components(cluster.centroid(index))))
        .collect()
}

/// Encode the single most prevalent centroid; the first maximum wins ties.
///
/// # Errors
///
/// - `PaletteError::EmptyCluster` if `cluster` or `histogram` is empty
/// - `PaletteError::InvalidClusterCount` on a length mismatch
pub fn dominant(cluster: &ColorCluster, histogram: &[usize]) -> Result<String> {
    if cluster.is_empty() || histogram.is_empty() {
        return Err(PaletteError::empty_cluster(
            "no clusters available for dominant color selection",
        ));
    }
    if histogram.len() != cluster.len() {
        return Err(PaletteError::invalid_cluster_count(
            histogram.len(),
            format!("histogram length differs from cluster size {}", cluster.len()),
        ));
    }

    let mut best_index = 0;
    let mut best_count = histogram[0];
    for (index, &count) in histogram.iter().enumerate().skip(1) {
        if count > best_count {
            best_count = count;
            best_index = index;
        }
    }

    to_hex(rgb_components(cluster.centroid(best_index)))
}

/// Drop the alpha component of a 4-channel centroid
fn rgb_components(centroid: &[f32]) -> &[f32] {
    if centroid.len() == channels::RGBA {
        &centroid[..channels::RGB]
    } else {
        centroid
    }
}
