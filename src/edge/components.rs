/*
 * FOUND
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use std::collections::HashMap;

use crate::image::Image;
use crate::math::{Decimal, Vec2};

/// One connected component: its member pixels plus the lowest and
/// highest linear pixel index it spans.
#[derive(Clone, Debug, PartialEq)]
pub struct Component {
    pub points: Vec<Vec2>,
    pub lowest_point: u64,
    pub highest_point: u64,
}

/// Labels every pixel for which `criteria(index, image)` holds into
/// connected components, scanning in row-major order and consulting the
/// four already-processed neighbours (W, NW, N, NE) (spec.md SS4.4).
///
/// When a pixel touches multiple differently-labeled neighbours, the
/// smallest label wins and the others are recorded as equivalent to it;
/// a second pass resolves the equivalence table, folding each higher
/// label's points and bounds into the lower one.
pub fn connected_components(image: &Image, criteria: impl Fn(u64, &Image) -> bool) -> Vec<Component> {
    let mut components: HashMap<u32, Component> = HashMap::new();
    let mut equivalencies: HashMap<u32, u32> = HashMap::new();
    let mut labels: HashMap<u64, u32> = HashMap::new();

    let mut next_label: u32 = 0;
    let width = image.width as u64;
    let total = image.len_pixels();

    let mut adjacent = [0u32; 4];

    for index in 0..total {
        if !criteria(index, image) {
            continue;
        }

        let x = index % width;
        let mut size = 0usize;
        let mut neighbors = Vec::with_capacity(4);
        if x > 0 {
            neighbors.push(index - 1);
        }
        if index >= width {
            if x > 0 {
                neighbors.push(index - width - 1);
            }
            neighbors.push(index - width);
            if x + 1 < width {
                neighbors.push(index - width + 1);
            }
        }
        for neighbor in neighbors {
            if let Some(&label) = labels.get(&neighbor) {
                adjacent[size] = label;
                size += 1;
            }
        }

        let pixel = Vec2::new(x as Decimal, (index / width) as Decimal);
        let label = match size {
            0 => {
                next_label += 1;
                components.insert(next_label, Component { points: vec![pixel], lowest_point: index, highest_point: index });
                next_label
            }
            _ => {
                let min_label = adjacent[..size].iter().copied().min().unwrap();
                let entry = components.get_mut(&min_label).expect("label was just inserted or already present");
                entry.points.push(pixel);
                entry.highest_point = index;
                for &label in &adjacent[..size] {
                    if label != min_label {
                        equivalencies.insert(label, min_label);
                    }
                }
                min_label
            }
        };
        labels.insert(index, label);
    }

    // Equivalence chains can be more than one hop deep (5->2, 2->1), and
    // `HashMap` iteration order doesn't guarantee a chain is walked in
    // the order it was built. Resolve each label to its transitive root
    // before touching `components`, so merging never depends on which
    // entry happens to be visited first.
    let root = |mut label: u32| {
        while let Some(&next) = equivalencies.get(&label) {
            if next == label {
                break;
            }
            label = next;
        }
        label
    };

    for higher in equivalencies.keys().copied().collect::<Vec<_>>() {
        let lower = root(higher);
        let Some(higher_component) = components.remove(&higher) else { continue };
        match components.get_mut(&lower) {
            Some(lower_component) => {
                lower_component.points.extend(higher_component.points);
                lower_component.lowest_point = lower_component.lowest_point.min(higher_component.lowest_point);
                lower_component.highest_point = lower_component.highest_point.max(higher_component.highest_point);
            }
            None => {
                components.insert(lower, higher_component);
            }
        }
    }

    components.into_values().collect()
}

#[cfg(test)]
mod ut_components {
    use super::*;

    #[test]
    fn merges_two_blobs_touching_via_equivalence() {
        // A 3x3 image where an L-shape in the top row and a separate pixel
        // below are connected only through the equivalence table.
        let pixels = vec![1u8, 1, 0, 1, 0, 0, 0, 0, 1];
        let image = Image::new(3, 3, 1, pixels);
        let components = connected_components(&image, |idx, img| img.bytes[idx as usize] == 1);
        assert_eq!(components.len(), 2);
    }

    #[test]
    fn single_component_spans_full_row() {
        let image = Image::new(4, 1, 1, vec![1, 1, 1, 1]);
        let components = connected_components(&image, |idx, img| img.bytes[idx as usize] == 1);
        assert_eq!(components.len(), 1);
        assert_eq!(components[0].points.len(), 4);
        assert_eq!(components[0].lowest_point, 0);
        assert_eq!(components[0].highest_point, 3);
    }

    #[test]
    fn empty_criteria_yields_no_components() {
        let image = Image::new(3, 3, 1, vec![0; 9]);
        let components = connected_components(&image, |_, _| false);
        assert!(components.is_empty());
    }
}
