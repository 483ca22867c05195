use glam::{Mat4, Vec3};
use crate::error::Error;
use super::*;

fn box_volume(origin: Vec3, width: f32, height: f32, depth: f32) -> PaintVolume {
    let mut volume = PaintVolume::new(None);
    volume.set_origin(origin).unwrap();
    volume.set_width(width).unwrap();
    volume.set_height(height).unwrap();
    volume.set_depth(depth).unwrap();
    volume
}

fn extents(volume: &PaintVolume) -> (Vec3, f32, f32, f32) {
    (
        volume.origin(),
        volume.width().unwrap(),
        volume.height().unwrap(),
        volume.depth().unwrap(),
    )
}

// ============================================================================
// Empty operands
// ============================================================================

#[test]
fn test_union_with_empty_other_is_noop() {
    let mut volume = box_volume(Vec3::ONE, 2.0, 3.0, 0.0);
    let before = volume.clone();

    let mut far_away = PaintVolume::new(None);
    far_away.set_origin(Vec3::splat(-100.0)).unwrap();

    volume.union(&far_away).unwrap();
    assert_eq!(volume, before, "an empty volume's origin must not be pulled in");
}

#[test]
fn test_union_into_empty_takes_other() {
    let mut volume = PaintVolume::new(None);
    let other = box_volume(Vec3::new(5.0, 6.0, 7.0), 1.0, 2.0, 3.0);

    volume.union(&other).unwrap();

    assert!(!volume.is_empty());
    assert!(!volume.is_flat());
    assert_eq!(extents(&volume), extents(&other));
}

#[test]
fn test_union_into_empty_keeps_flatness_of_other() {
    let mut volume = PaintVolume::new(None);
    volume.union(&box_volume(Vec3::ZERO, 1.0, 1.0, 0.0)).unwrap();
    assert!(volume.is_flat());
}

// ============================================================================
// Growth
// ============================================================================

#[test]
fn test_union_of_disjoint_boxes() {
    let mut volume = box_volume(Vec3::ZERO, 10.0, 10.0, 0.0);
    volume.union(&box_volume(Vec3::new(20.0, -5.0, 0.0), 5.0, 5.0, 0.0)).unwrap();

    let (origin, width, height, depth) = extents(&volume);
    assert_eq!(origin, Vec3::new(0.0, -5.0, 0.0));
    assert_eq!(width, 25.0);
    assert_eq!(height, 15.0);
    assert_eq!(depth, 0.0);
    assert!(volume.is_flat());
    assert!(!volume.is_complete());
}

#[test]
fn test_union_gains_depth() {
    let mut volume = box_volume(Vec3::ZERO, 10.0, 10.0, 0.0);
    volume.union(&box_volume(Vec3::new(0.0, 0.0, -4.0), 1.0, 1.0, 8.0)).unwrap();

    assert!(!volume.is_flat());
    assert_eq!(volume.origin().z, -4.0);
    assert_eq!(volume.depth().unwrap(), 8.0);
}

#[test]
fn test_union_never_shrinks() {
    let mut volume = box_volume(Vec3::ZERO, 10.0, 10.0, 10.0);
    let before = extents(&volume);

    volume.union(&box_volume(Vec3::splat(2.0), 1.0, 1.0, 1.0)).unwrap();
    assert_eq!(extents(&volume), before);
}

#[test]
fn test_union_contains_both_operands() {
    let a = box_volume(Vec3::new(-3.0, 4.0, 0.0), 2.0, 1.0, 5.0);
    let b = box_volume(Vec3::new(6.0, -1.0, 2.0), 3.0, 9.0, 1.0);

    let mut merged = a.clone();
    merged.union(&b).unwrap();
    merged.complete();

    let min = merged.origin();
    let max = merged.vertices()[6];
    for source in [&a, &b] {
        let mut source = source.clone();
        for v in source.completed_vertices() {
            assert!(v.cmpge(min).all() && v.cmple(max).all(), "{:?} escapes the union", v);
        }
    }
}

// ============================================================================
// Non axis-aligned operands
// ============================================================================

#[test]
fn test_union_aligns_rotated_other_on_a_copy() {
    let mut rotated = box_volume(Vec3::ZERO, 2.0, 2.0, 0.0);
    rotated.transform(&Mat4::from_rotation_z(std::f32::consts::FRAC_PI_4));
    let untouched = rotated.clone();

    let mut volume = PaintVolume::new(None);
    volume.union(&rotated).unwrap();

    assert_eq!(rotated, untouched);
    assert!(volume.is_axis_aligned());
    let diagonal = 2.0 * std::f32::consts::SQRT_2;
    assert!((volume.width().unwrap() - diagonal).abs() < 1e-5);
    assert!((volume.height().unwrap() - diagonal).abs() < 1e-5);
}

#[test]
fn test_union_into_non_aligned_self_fails() {
    let mut volume = box_volume(Vec3::ZERO, 1.0, 1.0, 0.0);
    volume.transform(&Mat4::from_rotation_z(0.5));

    let err = volume.union(&box_volume(Vec3::ZERO, 1.0, 1.0, 0.0)).unwrap_err();
    assert!(matches!(err, Error::InvalidState(_)));
}
