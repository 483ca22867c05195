use glam::Vec3;
use crate::error::Error;
use crate::scene::NodeKey;
use super::*;

fn box_volume(origin: Vec3, width: f32, height: f32, depth: f32) -> PaintVolume {
    let mut volume = PaintVolume::new(None);
    volume.set_origin(origin).unwrap();
    volume.set_width(width).unwrap();
    volume.set_height(height).unwrap();
    volume.set_depth(depth).unwrap();
    volume
}

// ============================================================================
// PaintVolume::new
// ============================================================================

#[test]
fn test_new_volume_is_empty_aligned_complete_flat() {
    let volume = PaintVolume::new(None);

    assert!(volume.is_empty());
    assert!(volume.is_axis_aligned());
    assert!(volume.is_complete());
    assert!(volume.is_flat());
    assert_eq!(volume.origin(), Vec3::ZERO);
    assert_eq!(volume.reference_node(), None);
}

#[test]
fn test_new_volume_keeps_reference_node() {
    let node = NodeKey::default();
    let volume = PaintVolume::new(Some(node));
    assert_eq!(volume.reference_node(), Some(node));
}

#[test]
fn test_default_matches_new_none() {
    assert_eq!(PaintVolume::default(), PaintVolume::new(None));
}

#[test]
fn test_empty_volume_extents_are_zero() {
    let volume = PaintVolume::new(None);
    assert_eq!(volume.width().unwrap(), 0.0);
    assert_eq!(volume.height().unwrap(), 0.0);
    assert_eq!(volume.depth().unwrap(), 0.0);
}

// ============================================================================
// Extent setters
// ============================================================================

#[test]
fn test_set_width_leaves_volume_non_empty() {
    let mut volume = PaintVolume::new(None);
    volume.set_width(10.0).unwrap();

    assert!(!volume.is_empty());
    assert!(!volume.is_complete());
    assert_eq!(volume.width().unwrap(), 10.0);
    assert_eq!(volume.height().unwrap(), 0.0);
}

#[test]
fn test_zero_extents_make_volume_empty_again() {
    let mut volume = PaintVolume::new(None);
    volume.set_width(10.0).unwrap();
    volume.set_width(0.0).unwrap();
    assert!(volume.is_empty());
}

#[test]
fn test_set_depth_controls_flat_flag() {
    let mut volume = box_volume(Vec3::ZERO, 10.0, 10.0, 0.0);
    assert!(volume.is_flat());

    volume.set_depth(5.0).unwrap();
    assert!(!volume.is_flat());
    assert_eq!(volume.depth().unwrap(), 5.0);

    volume.set_depth(0.0).unwrap();
    assert!(volume.is_flat());
}

#[test]
fn test_setter_order_does_not_matter() {
    let origin = Vec3::new(3.0, -2.0, 1.0);

    let mut a = PaintVolume::new(None);
    a.set_origin(origin).unwrap();
    a.set_width(4.0).unwrap();
    a.set_height(5.0).unwrap();
    a.set_depth(6.0).unwrap();

    let mut b = PaintVolume::new(None);
    b.set_depth(6.0).unwrap();
    b.set_height(5.0).unwrap();
    b.set_width(4.0).unwrap();
    b.set_origin(origin).unwrap();

    a.complete();
    b.complete();
    assert_eq!(a.vertices(), b.vertices());
    assert_eq!(a.flags(), b.flags());
}

#[test]
fn test_extent_setters_are_relative_to_origin() {
    let volume = box_volume(Vec3::new(10.0, 20.0, 30.0), 1.0, 2.0, 3.0);
    let v = volume.vertices();

    assert_eq!(v[1], Vec3::new(11.0, 20.0, 30.0));
    assert_eq!(v[3], Vec3::new(10.0, 22.0, 30.0));
    assert_eq!(v[4], Vec3::new(10.0, 20.0, 33.0));
}

#[test]
fn test_negative_extent_is_rejected() {
    let mut volume = PaintVolume::new(None);
    let before = volume.clone();

    let err = volume.set_width(-1.0).unwrap_err();
    assert!(matches!(err, Error::InvalidArgument(_)));
    assert_eq!(volume, before, "a rejected setter must not touch the volume");
}

#[test]
fn test_non_finite_extent_is_rejected() {
    let mut volume = PaintVolume::new(None);
    assert!(volume.set_height(f32::NAN).is_err());
    assert!(volume.set_depth(f32::INFINITY).is_err());
}

// ============================================================================
// set_origin
// ============================================================================

#[test]
fn test_set_origin_translates_key_vertices() {
    let mut volume = box_volume(Vec3::ZERO, 2.0, 3.0, 4.0);
    volume.set_origin(Vec3::new(1.0, 1.0, 1.0)).unwrap();

    assert_eq!(volume.origin(), Vec3::new(1.0, 1.0, 1.0));
    assert_eq!(volume.width().unwrap(), 2.0);
    assert_eq!(volume.height().unwrap(), 3.0);
    assert_eq!(volume.depth().unwrap(), 4.0);
}

#[test]
fn test_set_origin_on_empty_volume_stays_empty() {
    let mut volume = PaintVolume::new(None);
    volume.set_origin(Vec3::new(5.0, 6.0, 7.0)).unwrap();

    assert!(volume.is_empty());
    assert_eq!(volume.origin(), Vec3::new(5.0, 6.0, 7.0));
}

#[test]
fn test_mutators_require_axis_alignment() {
    let mut volume = box_volume(Vec3::ZERO, 1.0, 1.0, 0.0);
    volume.transform(&glam::Mat4::from_rotation_z(0.3));

    assert!(matches!(volume.set_origin(Vec3::ONE), Err(Error::InvalidState(_))));
    assert!(matches!(volume.set_width(1.0), Err(Error::InvalidState(_))));
    assert!(matches!(volume.width(), Err(Error::InvalidState(_))));
}

// ============================================================================
// complete
// ============================================================================

#[test]
fn test_complete_derives_box_corners() {
    let mut volume = box_volume(Vec3::ZERO, 2.0, 3.0, 4.0);
    volume.complete();

    let v = volume.vertices();
    assert_eq!(v[2], Vec3::new(2.0, 3.0, 0.0));
    assert_eq!(v[5], Vec3::new(2.0, 0.0, 4.0));
    assert_eq!(v[6], Vec3::new(2.0, 3.0, 4.0));
    assert_eq!(v[7], Vec3::new(0.0, 3.0, 4.0));
    assert!(volume.is_complete());
}

#[test]
fn test_complete_is_idempotent() {
    let mut volume = box_volume(Vec3::new(1.0, 2.0, 3.0), 4.0, 5.0, 6.0);
    volume.complete();
    let once = volume.clone();
    volume.complete();
    assert_eq!(volume, once);
}

#[test]
fn test_complete_flat_volume_only_derives_front_face() {
    let mut volume = box_volume(Vec3::ZERO, 2.0, 3.0, 0.0);
    volume.complete();

    let v = volume.vertices();
    assert_eq!(v[2], Vec3::new(2.0, 3.0, 0.0));
    assert_eq!(v[6], Vec3::ZERO, "back face of a flat volume is never written");
}

#[test]
fn test_completed_vertices_count() {
    let mut flat = box_volume(Vec3::ZERO, 1.0, 1.0, 0.0);
    let mut solid = box_volume(Vec3::ZERO, 1.0, 1.0, 1.0);
    let mut empty = PaintVolume::new(None);

    assert_eq!(flat.completed_vertices().len(), 4);
    assert_eq!(solid.completed_vertices().len(), 8);
    assert_eq!(empty.completed_vertices().len(), 1);
}

// ============================================================================
// set_from_volume / reference node
// ============================================================================

#[test]
fn test_set_from_volume_copies_everything() {
    let source = box_volume(Vec3::ONE, 2.0, 2.0, 2.0);
    let mut target = PaintVolume::new(Some(NodeKey::default()));
    target.set_from_volume(&source);
    assert_eq!(target, source);
}

#[test]
fn test_set_reference_node_keeps_vertices() {
    let mut volume = box_volume(Vec3::ONE, 2.0, 2.0, 2.0);
    let vertices = *volume.vertices();

    volume.set_reference_node(Some(NodeKey::default()));
    assert_eq!(*volume.vertices(), vertices);
    assert!(volume.reference_node().is_some());
}
