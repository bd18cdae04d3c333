/*
 * FOUND
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//! End-to-end regression scenarios and a handful of the universal
//! invariants.

use found::calibration::LostCalibrator;
use found::camera::Camera;
use found::datafile::{DataFile, LocationRecord};
use found::distance::SphericalDistanceDetector;
use found::edge::connected_components;
use found::image::Image;
use found::math::rotation::{spherical_to_quaternion, EulerAngles, Quaternion};
use found::math::{Decimal, Vec2, Vec3};
use found::pipeline::{ModifyingPipeline, SequentialPipeline};

fn assert_euler_close(got: EulerAngles, want: EulerAngles, tol: Decimal) {
    let two_pi = std::f64::consts::TAU as Decimal;
    let wrapped = |a: Decimal, b: Decimal| (a - b).abs() < tol || (a - b).abs() > two_pi - tol;
    assert!(wrapped(got.ra, want.ra), "ra: got {} want {}", got.ra, want.ra);
    assert!((got.de - want.de).abs() < tol, "de: got {} want {}", got.de, want.de);
    assert!(wrapped(got.roll, want.roll), "roll: got {} want {}", got.roll, want.roll);
}

#[test]
fn calibrate_abs() {
    let local_quaternion = Quaternion::new(0.36, 0.48, 0.64, 0.48);
    let local = local_quaternion.to_spherical();
    let reference = EulerAngles::new(0.0, 0.0, 0.0);

    let result = LostCalibrator.run(local, reference);

    assert_euler_close(result.to_spherical(), local, 1e-6);
}

#[test]
fn calibrate_rel_simple_1() {
    let local = EulerAngles::new(std::f64::consts::FRAC_PI_4 as Decimal, 0.0, 0.0);
    let reference = EulerAngles::new(std::f64::consts::FRAC_PI_2 as Decimal, 0.0, 0.0);

    let result = LostCalibrator.run(local, reference).to_spherical();

    let expected = EulerAngles::new(7.0 * std::f64::consts::PI as Decimal / 4.0, 0.0, 0.0);
    assert_euler_close(result, expected, 1e-4);
}

#[test]
fn calibrate_rel_simple_2() {
    let local = EulerAngles::new(std::f64::consts::FRAC_PI_3 as Decimal, 0.0, 0.0);
    let reference = EulerAngles::new(std::f64::consts::FRAC_PI_3 as Decimal, -std::f64::consts::FRAC_PI_6 as Decimal, 0.0);

    let result = LostCalibrator.run(local, reference).to_spherical();

    let expected = EulerAngles::new(0.0, std::f64::consts::FRAC_PI_6 as Decimal, 0.0);
    assert_euler_close(result, expected, 1e-4);
}

#[test]
fn distance_centred() {
    let camera = Camera::ideal(0.012, 1.0, 1024, 1024);
    let radius: Decimal = 6_378_000.0;
    let distance: Decimal = 7_378_000.0;

    let apparent_radius_angle = (radius / distance).asin();
    let focal_px = camera.focal_length() / camera.pixel_size();
    let pixel_radius = apparent_radius_angle.tan() * focal_px;

    let points: Vec<Vec2> = (0..3)
        .map(|i| {
            let theta = i as Decimal * std::f64::consts::FRAC_PI_3 as Decimal * 2.0;
            Vec2::new(
                camera.x_resolution() as Decimal / 2.0 + pixel_radius * theta.cos(),
                camera.y_resolution() as Decimal / 2.0 + pixel_radius * theta.sin(),
            )
        })
        .collect();

    let detector = SphericalDistanceDetector::new(camera, radius);
    let result = detector.run(&points).unwrap();

    let expected = Vec3::new(distance, 0.0, 0.0);
    assert!((result - expected).norm() < 0.01, "got {result:?}, want {expected:?}");
}

#[test]
fn datafile_roundtrip() {
    let attitude = Quaternion::new(0.0, 1.2346e8, 9.8765e8, 1.1111e8);
    let positions = vec![
        LocationRecord::new(Vec3::new(100.0, 200.0, 300.0), 1.618e8),
        LocationRecord::new(Vec3::new(-100.0, -200.0, -300.0), 2.718e8),
    ];
    let written = DataFile::new(attitude, positions);

    let bytes = written.to_bytes();
    let read_back = DataFile::from_bytes(&bytes).unwrap();

    assert_eq!(written, read_back);
    assert_eq!(read_back.header.version, 1);
    assert_eq!(read_back.header.num_positions, 2);
}

#[test]
fn pipeline_nested() {
    let mut inner: SequentialPipeline<i32, i32> = SequentialPipeline::new();
    inner.add_stage(|x: i32| (x as u8) as char).unwrap();
    inner.complete(|c: char| c as i32).unwrap();

    let mut modifying: ModifyingPipeline<i32> = ModifyingPipeline::new();
    modifying.complete(|x: &mut i32| *x += 100).unwrap();

    let mut outer: SequentialPipeline<i32, f64> = SequentialPipeline::new();
    outer.add_stage(inner).unwrap();
    outer.add_stage(modifying).unwrap();
    outer.complete(|x: i32| x as f64 * 2.0).unwrap();

    assert_eq!(outer.try_run(5).unwrap(), 210.0);
}

#[test]
fn pipeline_composition_associativity() {
    // [A, B, C] vs [A, (pipeline [B, C])] produce the same output.
    let mut flat: SequentialPipeline<i32, i32> = SequentialPipeline::new();
    flat.add_stage(|x: i32| x + 1).unwrap();
    flat.add_stage(|x: i32| x * 2).unwrap();
    flat.complete(|x: i32| x - 3).unwrap();

    let mut bc: SequentialPipeline<i32, i32> = SequentialPipeline::new();
    bc.add_stage(|x: i32| x * 2).unwrap();
    bc.complete(|x: i32| x - 3).unwrap();

    let mut nested: SequentialPipeline<i32, i32> = SequentialPipeline::new();
    nested.add_stage(|x: i32| x + 1).unwrap();
    nested.complete(bc).unwrap();

    assert_eq!(flat.try_run(10).unwrap(), nested.try_run(10).unwrap());
}

#[test]
fn modifying_pipeline_is_idempotent_over_no_op_stages() {
    let mut pipeline: ModifyingPipeline<Vec<i32>> = ModifyingPipeline::new();
    pipeline.add_stage(|_: &mut Vec<i32>| {}).unwrap();
    pipeline.complete(|_: &mut Vec<i32>| {}).unwrap();

    let input = vec![1, 2, 3];
    assert_eq!(pipeline.try_run(input.clone()).unwrap(), input);
}

#[test]
fn quaternion_rotation_preserves_magnitude() {
    let cases = [
        EulerAngles::new(0.3, 0.1, 2.0),
        EulerAngles::new(5.5, -0.4, 1.1),
        EulerAngles::new(0.0, 0.0, 0.0),
    ];
    let v = Vec3::new(3.0, -4.0, 12.0);
    for angles in cases {
        let q = spherical_to_quaternion(angles);
        let rotated = q.rotate(v);
        assert!((rotated.norm() - v.norm()).abs() < 1e-4);
    }
}

#[test]
fn connected_components_partition_matching_pixels() {
    // A checkerboard-free blob layout: one L-shaped component and one
    // isolated pixel, disjoint from each other.
    let pixels = vec![1u8, 1, 0, 0, 1, 0, 0, 0, 0, 0, 0, 1];
    let image = Image::new(4, 3, 1, pixels.clone());

    let components = connected_components(&image, |idx, img| img.bytes[idx as usize] == 1);

    let matching: usize = pixels.iter().filter(|&&p| p == 1).count();
    let covered: usize = components.iter().map(|c| c.points.len()).sum();
    assert_eq!(matching, covered);

    // Every matching pixel belongs to exactly one component: no point
    // appears twice across the returned set.
    let mut seen = std::collections::HashSet::new();
    for component in &components {
        for point in &component.points {
            let key = (point.x as i64, point.y as i64);
            assert!(seen.insert(key), "pixel {key:?} claimed by more than one component");
        }
    }
}
