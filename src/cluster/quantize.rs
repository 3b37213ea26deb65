//! Vector quantization and incidence counting
//!
//! [`assign`] maps every pixel of a population to its nearest centroid;
//! [`histogram`] aggregates an assignment into per-cluster counts. Both
//! are pure functions: assignment is exposed separately from clustering so
//! incidence counting can run against any externally supplied cluster, not
//! only the one just computed.

use crate::cluster::kmeans::{nearest_centroid, ColorCluster};
use crate::error::{PaletteError, Result};
use crate::sampler::PixelPopulation;

/// Assign every pixel in `population` to its nearest centroid in
/// `cluster` under Euclidean distance; ties go to the lowest centroid
/// index. The result has one entry per pixel, in population order.
///
/// # Errors
///
/// - `PaletteError::EmptyCluster` if `cluster` holds no centroids
/// - `PaletteError::InvalidColorVector` if the centroid channel count
///   differs from the population's
pub fn assign(population: &PixelPopulation, cluster: &ColorCluster) -> Result<Vec<usize>> {
    if cluster.is_empty() {
        return Err(PaletteError::empty_cluster(
            "cannot assign pixels to an empty cluster",
        ));
    }
    if cluster.channel_count() != population.channel_count() {
        return Err(PaletteError::InvalidColorVector {
            expected: population.channel_count(),
            actual: cluster.channel_count(),
        });
    }

    let channels = population.channel_count();
    let centroids: Vec<f32> = cluster.iter().flatten().copied().collect();

    Ok(population
        .iter()
        .map(|pixel| nearest_centroid(pixel, &centroids, channels))
        .collect())
}

/// Count occurrences of each cluster index `0..k` in `assignment`.
///
/// The returned histogram always sums to `assignment.len()`.
///
/// # Errors
///
/// Returns `PaletteError::InvalidClusterCount` if any assignment index
/// falls outside `[0, k)`.
pub fn histogram(assignment: &[usize], k: usize) -> Result<Vec<usize>> {
    let mut counts = vec![0usize; k];
    for &index in assignment {
        if index >= k {
            return Err(PaletteError::invalid_cluster_count(
                index,
                format!("assignment index outside [0, {})", k),
            ));
        }
        counts[index] += 1;
    }

    debug_assert_eq!(counts.iter().sum::<usize>(), assignment.len());
    Ok(counts)
}
