//! Color segmentation via k-means clustering.
//!
//! Every pixel is treated as a 3-dimensional sRGB vector; the pixel set is
//! partitioned into `k` clusters and each pixel is replaced by its
//! cluster's rounded centroid color. Runs are seeded, so the same image and
//! `k` always produce the same output.

use image::RgbImage;
use kmeans_colors::{get_kmeans, Kmeans};
use palette::Srgb;
use palette::cast::from_component_slice;

use crate::constants::cluster;
use crate::error::SessionError;

/// Reduce `image` to at most `k` representative colors.
///
/// `k` must be in `1..=MAX_K`; anything else is a usage error and the
/// caller's state is untouched. The input image is never modified.
pub fn segment(image: &RgbImage, k: usize) -> Result<RgbImage, SessionError> {
    if k == 0 || k > cluster::MAX_K {
        return Err(SessionError::InvalidClusterCount {
            requested: k,
            max: cluster::MAX_K,
        });
    }

    let pixels: Vec<Srgb<f32>> = from_component_slice::<Srgb<u8>>(image.as_raw())
        .iter()
        .map(|pixel| pixel.into_format())
        .collect();
    if pixels.is_empty() {
        return Ok(image.clone());
    }

    // Several seeded restarts; keep the lowest-score run.
    let mut best = Kmeans::new();
    for run in 0..cluster::RUNS {
        let result = get_kmeans(
            k,
            cluster::MAX_ITERATIONS,
            cluster::CONVERGENCE,
            false,
            &pixels,
            cluster::SEED + run,
        );
        if result.score < best.score {
            best = result;
        }
    }

    let centroids: Vec<Srgb<u8>> = best
        .centroids
        .iter()
        .map(|centroid| centroid.into_format())
        .collect();

    let mut out = RgbImage::new(image.width(), image.height());
    for (pixel, index) in out.pixels_mut().zip(best.indices.iter()) {
        let c = centroids[*index as usize];
        *pixel = image::Rgb([c.red, c.green, c.blue]);
    }

    log::info!(
        "🧩 Segmented {}x{} image into {} clusters",
        image.width(),
        image.height(),
        centroids.len().min(k)
    );
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgb;
    use std::collections::HashSet;

    fn distinct_colors(image: &RgbImage) -> HashSet<[u8; 3]> {
        image.pixels().map(|p| p.0).collect()
    }

    #[test]
    fn test_single_cluster_of_uniform_image_is_identity() {
        let img = RgbImage::from_pixel(4, 4, Rgb([255, 255, 255]));
        let out = segment(&img, 1).unwrap();
        assert_eq!(out.dimensions(), (4, 4));
        assert!(out.pixels().all(|p| *p == Rgb([255, 255, 255])));
    }

    #[test]
    fn test_two_solid_halves_recover_both_colors() {
        let red = Rgb([255, 0, 0]);
        let blue = Rgb([0, 0, 255]);
        let img = RgbImage::from_fn(16, 16, |x, _| if x < 8 { red } else { blue });
        let out = segment(&img, 2).unwrap();
        let colors = distinct_colors(&out);
        assert_eq!(colors.len(), 2);
        assert!(colors.contains(&red.0));
        assert!(colors.contains(&blue.0));
    }

    #[test]
    fn test_output_has_at_most_k_colors() {
        // A noisy-ish gradient with many distinct input colors.
        let img = RgbImage::from_fn(32, 32, |x, y| {
            Rgb([(x * 8) as u8, (y * 8) as u8, ((x + y) * 4) as u8])
        });
        for k in [1, 3, 7] {
            let out = segment(&img, k).unwrap();
            assert!(
                distinct_colors(&out).len() <= k,
                "k={} produced more than k colors",
                k
            );
        }
    }

    #[test]
    fn test_segmentation_is_deterministic() {
        let img = RgbImage::from_fn(16, 16, |x, y| Rgb([(x * 16) as u8, (y * 16) as u8, 128]));
        let a = segment(&img, 3).unwrap();
        let b = segment(&img, 3).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_zero_clusters_is_an_error() {
        let img = RgbImage::from_pixel(2, 2, Rgb([1, 2, 3]));
        assert!(matches!(
            segment(&img, 0),
            Err(SessionError::InvalidClusterCount { requested: 0, .. })
        ));
    }

    #[test]
    fn test_oversized_cluster_count_is_an_error() {
        let img = RgbImage::from_pixel(2, 2, Rgb([1, 2, 3]));
        assert!(segment(&img, cluster::MAX_K + 1).is_err());
    }
}
