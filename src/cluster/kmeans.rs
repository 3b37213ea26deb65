//! K-means clustering over a pixel population
//!
//! Implements Lloyd's method: seed K centroids from the population,
//! alternate nearest-centroid assignment with component-wise mean updates,
//! and stop on convergence or after a bounded number of iterations.
//! Centroids that lose all of their pixels are reseeded to the population
//! point farthest from its nearest centroid, so degenerate inputs (solid
//! color images, k close to the pixel count) still converge to well-defined
//! vectors.
//!
//! Seeding draws from a `StdRng` with a caller-controlled seed, so results
//! are reproducible for a fixed configuration.

use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::{debug, trace};

use crate::config::ClusteringConfig;
use crate::error::{PaletteError, Result};
use crate::sampler::PixelPopulation;

/// A set of centroid color vectors produced by clustering.
///
/// Centroids keep the channel count of the population they were computed
/// from and are stored contiguously, index order preserved.
#[derive(Debug, Clone, PartialEq)]
pub struct ColorCluster {
    channels: usize,
    centroids: Vec<f32>,
}

impl ColorCluster {
    fn new(channels: usize, centroids: Vec<f32>) -> Self {
        debug_assert_eq!(centroids.len() % channels, 0);
        Self {
            channels,
            centroids,
        }
    }

    /// Number of centroids
    pub fn len(&self) -> usize {
        self.centroids.len() / self.channels
    }

    /// True if the cluster holds no centroids
    pub fn is_empty(&self) -> bool {
        self.centroids.is_empty()
    }

    /// Components per centroid vector
    pub fn channel_count(&self) -> usize {
        self.channels
    }

    /// Centroid vector at `index`
    pub fn centroid(&self, index: usize) -> &[f32] {
        let start = index * self.channels;
        &self.centroids[start..start + self.channels]
    }

    /// Iterate over all centroid vectors in index order
    pub fn iter(&self) -> std::slice::ChunksExact<'_, f32> {
        self.centroids.chunks_exact(self.channels)
    }
}

/// Squared Euclidean distance between two color vectors
#[inline]
pub(crate) fn distance_squared(a: &[f32], b: &[f32]) -> f32 {
    a.iter()
        .zip(b.iter())
        .map(|(x, y)| (x - y) * (x - y))
        .sum()
}

/// Index of the centroid nearest to `pixel`; ties go to the lowest index
#[inline]
pub(crate) fn nearest_centroid(pixel: &[f32], centroids: &[f32], channels: usize) -> usize {
    let mut best_index = 0;
    let mut best_distance = f32::INFINITY;
    for (index, centroid) in centroids.chunks_exact(channels).enumerate() {
        let distance = distance_squared(pixel, centroid);
        if distance < best_distance {
            best_distance = distance;
            best_index = index;
        }
    }
    best_index
}

/// Cluster a pixel population into `k` centroid colors.
///
/// # Errors
///
/// Returns `PaletteError::InvalidClusterCount` if `k` is zero or exceeds
/// the population size.
pub fn cluster(
    population: &PixelPopulation,
    k: usize,
    config: &ClusteringConfig,
) -> Result<ColorCluster> {
    let pixel_count = population.len();
    if k == 0 {
        return Err(PaletteError::invalid_cluster_count(
            k,
            "at least one cluster is required",
        ));
    }
    if k > pixel_count {
        return Err(PaletteError::invalid_cluster_count(
            k,
            format!("exceeds pixel count {}", pixel_count),
        ));
    }

    let channels = population.channel_count();
    let mut rng = StdRng::seed_from_u64(config.seed);

    // Seed centroids from k distinct pixels so that k == pixel_count
    // starts with every pixel as its own centroid.
    let mut centroids = Vec::with_capacity(k * channels);
    for index in rand::seq::index::sample(&mut rng, pixel_count, k) {
        centroids.extend_from_slice(population.pixel(index));
    }

    let mut assignment = vec![0usize; pixel_count];
    let mut iterations = 0;

    for iteration in 0..config.max_iterations {
        iterations = iteration + 1;

        // Assignment phase
        for (pixel_index, pixel) in population.iter().enumerate() {
            assignment[pixel_index] = nearest_centroid(pixel, &centroids, channels);
        }

        // Update phase: component-wise means of the assigned pixels
        let mut sums = vec![0.0f64; k * channels];
        let mut counts = vec![0usize; k];
        for (pixel_index, pixel) in population.iter().enumerate() {
            let cluster_index = assignment[pixel_index];
            counts[cluster_index] += 1;
            let offset = cluster_index * channels;
            for (c, &value) in pixel.iter().enumerate() {
                sums[offset + c] += value as f64;
            }
        }

        let mut updated = centroids.clone();
        let mut occupied = vec![false; k];
        for cluster_index in 0..k {
            if counts[cluster_index] == 0 {
                continue;
            }
            occupied[cluster_index] = true;
            let offset = cluster_index * channels;
            for c in 0..channels {
                updated[offset + c] =
                    (sums[offset + c] / counts[cluster_index] as f64) as f32;
            }
        }

        reseed_empty_clusters(population, &mut updated, &mut occupied, channels);

        let moved = centroids
            .chunks_exact(channels)
            .zip(updated.chunks_exact(channels))
            .map(|(old, new)| distance_squared(old, new))
            .fold(0.0f32, f32::max);

        trace!(iteration, moved, "kmeans step");
        centroids = updated;

        if moved <= config.convergence {
            break;
        }
    }

    debug!(k, pixels = pixel_count, iterations, "clustering finished");
    Ok(ColorCluster::new(channels, centroids))
}

/// Reseed every unoccupied centroid to the population point farthest from
/// its nearest occupied centroid. Each reseeded centroid becomes occupied
/// before the next one is placed, so repeated empties spread out instead
/// of collapsing onto the same point.
fn reseed_empty_clusters(
    population: &PixelPopulation,
    centroids: &mut [f32],
    occupied: &mut [bool],
    channels: usize,
) {
    let k = occupied.len();
    let mut taken = vec![false; population.len()];

    for cluster_index in 0..k {
        if occupied[cluster_index] {
            continue;
        }

        let mut farthest_index = 0;
        let mut farthest_distance = -1.0f32;
        for (pixel_index, pixel) in population.iter().enumerate() {
            if taken[pixel_index] {
                continue;
            }
            let nearest = occupied
                .iter()
                .enumerate()
                .filter(|(_, &is_occupied)| is_occupied)
                .map(|(other, _)| {
                    distance_squared(pixel, &centroids[other * channels..(other + 1) * channels])
                })
                .fold(f32::INFINITY, f32::min);
            if nearest > farthest_distance {
                farthest_distance = nearest;
                farthest_index = pixel_index;
            }
        }

        let offset = cluster_index * channels;
        centroids[offset..offset + channels].copy_from_slice(population.pixel(farthest_index));
        occupied[cluster_index] = true;
        taken[farthest_index] = true;
        trace!(cluster = cluster_index, "reseeded empty cluster");
    }
}
