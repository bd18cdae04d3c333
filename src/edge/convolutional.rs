/*
 * FOUND
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//! An alternative detector that convolves the image with a gradient mask
//! and keeps pixels whose gradient magnitude clears a threshold, using
//! the same connected-components helper as a post-filter to discard
//! isolated noise (spec.md SS4.4, spec.md SS1 Non-goals: offered as an
//! alternative path, not the shipped default).

use crate::image::Image;
use crate::math::{Decimal, Vec2};
use crate::pipeline::Stage;

use super::components::connected_components;
use super::error::EdgeError;
use super::threshold::polar_sort;

/// A square convolution mask, row-major, applied to channel 0.
pub struct Mask {
    pub size: usize,
    pub weights: Vec<Decimal>,
}

impl Mask {
    /// A 3x3 Sobel-style gradient magnitude mask.
    pub fn sobel() -> Self {
        Self { size: 3, weights: vec![-1.0, 0.0, 1.0, -2.0, 0.0, 2.0, -1.0, 0.0, 1.0] }
    }
}

pub struct ConvolutionalDetector {
    mask: Mask,
    threshold: Decimal,
    min_component_size: usize,
}

impl ConvolutionalDetector {
    pub fn new(mask: Mask, threshold: Decimal, min_component_size: usize) -> Self {
        Self { mask, threshold, min_component_size }
    }

    fn convolve(&self, image: &Image) -> Vec<Decimal> {
        let half = (self.mask.size / 2) as i64;
        let mut out = vec![0.0; image.len_pixels() as usize];
        for y in 0..image.height as i64 {
            for x in 0..image.width as i64 {
                let mut acc = 0.0;
                for ky in 0..self.mask.size as i64 {
                    for kx in 0..self.mask.size as i64 {
                        let sy = y + ky - half;
                        let sx = x + kx - half;
                        if sy < 0 || sx < 0 || sy >= image.height as i64 || sx >= image.width as i64 {
                            continue;
                        }
                        let weight = self.mask.weights[(ky * self.mask.size as i64 + kx) as usize];
                        acc += weight * image.sample(sx as u32, sy as u32) as Decimal;
                    }
                }
                out[(y * image.width as i64 + x) as usize] = acc.abs();
            }
        }
        out
    }

    pub fn detect(&self, image: &Image) -> Result<Vec<Vec2>, EdgeError> {
        if image.width == 0 || image.height == 0 {
            return Err(EdgeError::EmptyImage);
        }

        let gradient = self.convolve(image);
        let threshold = self.threshold;
        let components = connected_components(image, |idx, _| gradient[idx as usize] > threshold);

        let points: Vec<Vec2> = components
            .into_iter()
            .filter(|c| c.points.len() >= self.min_component_size)
            .flat_map(|c| c.points)
            .collect();

        if points.is_empty() {
            return Ok(points);
        }
        Ok(polar_sort(points))
    }
}

impl Stage<Image, Vec<Vec2>> for ConvolutionalDetector {
    fn run(&self, image: Image) -> Vec<Vec2> {
        self.detect(&image).expect("image had zero width or height")
    }
}

#[cfg(test)]
mod ut_convolutional {
    use super::*;

    #[test]
    fn detects_step_edge() {
        let size = 10u32;
        let mut bytes = vec![0u8; (size * size) as usize];
        for y in 0..size {
            for x in 5..size {
                bytes[(y * size + x) as usize] = 255;
            }
        }
        let image = Image::new(size, size, 1, bytes);
        let detector = ConvolutionalDetector::new(Mask::sobel(), 200.0, 1);
        let points = detector.detect(&image).unwrap();
        assert!(!points.is_empty());
    }
}
