/*
 * FOUND
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use std::collections::HashSet;

use crate::image::Image;
use crate::math::{Decimal, Vec2};
use crate::pipeline::Stage;

use super::components::connected_components;
use super::error::EdgeError;

/// Finds Earth's limb in an image by thresholding channel 0 into
/// "space"/"planet" and reporting the space-planet transitions
/// (spec.md SS4.4).
pub struct SimpleThresholdDetector {
    threshold: u8,
    border_length: u32,
    offset: Decimal,
    filter_components: bool,
}

impl SimpleThresholdDetector {
    /// `filter_components` wires [`connected_components`] in as an
    /// optional post-filter: when set, limb points that aren't part of
    /// the single largest "planet" component are dropped, discarding
    /// noise blobs the threshold alone can't tell from the disc
    /// (spec.md SS4.4, off by default).
    pub fn new(threshold: u8, border_length: u32, offset: Decimal, filter_components: bool) -> Self {
        assert!(border_length >= 1, "borderLength must be at least 1");
        Self { threshold, border_length, offset, filter_components }
    }

    fn is_planet(&self, image: &Image, x: u32, y: u32) -> bool {
        image.sample(x, y) > self.threshold
    }

    /// Detects limb points and returns them in polar order about their
    /// centroid.
    pub fn detect(&self, image: &Image) -> Result<Vec<Vec2>, EdgeError> {
        if image.width == 0 || image.height == 0 {
            return Err(EdgeError::EmptyImage);
        }

        let mut points = Vec::new();
        for y in 0..image.height {
            for x in 0..image.width {
                if !self.is_planet(image, x, y) {
                    continue;
                }

                if let Some(point) = self.limb_candidate(image, x, y) {
                    points.push(((x, y), point));
                }
            }
        }

        if points.is_empty() {
            return Ok(Vec::new());
        }

        let points = if self.filter_components { self.filter_to_largest_component(image, points) } else { points };

        Ok(polar_sort(points.into_iter().map(|(_, point)| point).collect()))
    }

    /// Keeps only the points whose source pixel lies in the largest
    /// connected "planet" component, dropping limb candidates produced by
    /// smaller, disconnected blobs (sensor noise, stray bright pixels).
    /// Filters on the originating integer pixel rather than the reported
    /// point, since `offset` can shift the latter off-pixel.
    fn filter_to_largest_component(&self, image: &Image, points: Vec<((u32, u32), Vec2)>) -> Vec<((u32, u32), Vec2)> {
        let components = connected_components(image, |index, img| {
            let x = (index % img.width as u64) as u32;
            let y = (index / img.width as u64) as u32;
            self.is_planet(img, x, y)
        });

        let Some(largest) = components.iter().max_by_key(|component| component.points.len()) else {
            return points;
        };

        let kept: HashSet<(i64, i64)> = largest.points.iter().map(|p| (p.x as i64, p.y as i64)).collect();
        points.into_iter().filter(|((x, y), _)| kept.contains(&(*x as i64, *y as i64))).collect()
    }

    /// `(x, y)` is a limb candidate iff looking north or west across
    /// `border_length` pixels the far sample is space while some nearer
    /// sample is planet. Reports the fractional transition point, biased
    /// by `offset` toward space (north) or away from the disc (west).
    fn limb_candidate(&self, image: &Image, x: u32, y: u32) -> Option<Vec2> {
        if y >= self.border_length {
            let far = y - self.border_length;
            if !self.is_planet(image, x, far) {
                for d in 0..self.border_length {
                    if self.is_planet(image, x, y - d) {
                        return Some(Vec2::new(x as Decimal, y as Decimal + self.offset));
                    }
                }
            }
        }
        if x >= self.border_length {
            let far = x - self.border_length;
            if !self.is_planet(image, far, y) {
                for d in 0..self.border_length {
                    if self.is_planet(image, x - d, y) {
                        return Some(Vec2::new(x as Decimal - self.offset, y as Decimal));
                    }
                }
            }
        }
        None
    }
}

impl Stage<Image, Vec<Vec2>> for SimpleThresholdDetector {
    fn run(&self, image: Image) -> Vec<Vec2> {
        self.detect(&image).expect("image had zero width or height")
    }
}

/// Sorts points into polar order about their centroid: for any three
/// consecutive points A, B, C, `angle(A, P, B) < angle(A, P, C)`.
pub(crate) fn polar_sort(mut points: Vec<Vec2>) -> Vec<Vec2> {
    let centroid = points.iter().fold(Vec2::new(0.0, 0.0), |acc, p| acc + *p) / points.len() as Decimal;
    points.sort_by(|a, b| {
        let angle_a = (a.y - centroid.y).atan2(a.x - centroid.x);
        let angle_b = (b.y - centroid.y).atan2(b.x - centroid.x);
        angle_a.partial_cmp(&angle_b).expect("atan2 never returns NaN")
    });
    points
}

#[cfg(test)]
mod ut_threshold {
    use super::*;

    fn disc_image() -> Image {
        // An 8x8 image with a bright disc in the lower-right, dark
        // elsewhere -- enough to produce a handful of limb transitions.
        let size = 8u32;
        let mut bytes = vec![0u8; (size * size) as usize];
        for y in 0..size {
            for x in 0..size {
                if x >= 4 && y >= 4 {
                    bytes[(y * size + x) as usize] = 255;
                }
            }
        }
        Image::new(size, size, 1, bytes)
    }

    #[test]
    fn detects_some_limb_points() {
        let detector = SimpleThresholdDetector::new(128, 1, 0.0, false);
        let points = detector.detect(&disc_image()).unwrap();
        assert!(!points.is_empty());
    }

    #[test]
    fn empty_image_fails() {
        let detector = SimpleThresholdDetector::new(128, 1, 0.0, false);
        let image = Image::new(0, 0, 1, vec![]);
        assert_eq!(detector.detect(&image).unwrap_err(), EdgeError::EmptyImage);
    }

    #[test]
    fn polar_sort_orders_around_centroid() {
        let square = vec![Vec2::new(1.0, 0.0), Vec2::new(0.0, 1.0), Vec2::new(-1.0, 0.0), Vec2::new(0.0, -1.0)];
        let sorted = polar_sort(square);
        assert_eq!(sorted.len(), 4);
    }

    #[test]
    fn filter_components_drops_a_disconnected_noise_pixel() {
        let mut image = disc_image();
        // A single bright pixel far from the disc, disconnected from it:
        // without filtering this contributes its own (spurious) limb
        // points.
        let noise_index = (image.width + 1) as usize;
        image.bytes[noise_index] = 255;

        let unfiltered = SimpleThresholdDetector::new(128, 1, 0.0, false).detect(&image).unwrap();
        let filtered = SimpleThresholdDetector::new(128, 1, 0.0, true).detect(&image).unwrap();

        assert!(filtered.len() < unfiltered.len());
        assert!(!filtered.iter().any(|p| p.x < 4.0 && p.y < 4.0));
    }
}
